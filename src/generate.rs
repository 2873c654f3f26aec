//! One full generation run: render visuals, then assemble and save the decks

use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::config::DeckConfig;
use crate::deck::PackageWriter;
use crate::deck::content::{VisualPaths, participant_deck, trainer_deck};
use crate::diagram::catalogue::{Visual, catalogue};
use crate::render::{Canvas, FontBook};

/// Paths written by [`run`]
#[derive(Debug, Clone)]
pub struct Outputs {
    pub participant: PathBuf,
    pub trainer: PathBuf,
    pub legacy: PathBuf,
    pub assets: PathBuf,
}

/// Render every visual into `dir` as PNG; returns the file of each key
pub fn generate_images(
    visuals: &[Visual],
    config: &DeckConfig,
    dir: &Path,
) -> anyhow::Result<VisualPaths> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create assets directory: {}", dir.display()))?;

    let fonts = FontBook::load(&config.fonts);
    let mut paths = VisualPaths::new();
    for visual in visuals {
        let path = dir.join(visual.file_name);
        let scene = visual
            .diagram
            .compose(config)
            .with_context(|| format!("Failed to lay out visual '{}'", visual.key))?;
        let canvas = Canvas::from_scene(&scene, &fonts)
            .with_context(|| format!("Failed to render visual '{}'", visual.key))?;
        canvas
            .save_png(&path, config.canvas.dpi)
            .with_context(|| format!("Failed to save {}", path.display()))?;
        log::debug!("Rendered {} ({} commands)", path.display(), scene.commands.len());
        paths.insert(visual.key.to_string(), path);
    }
    Ok(paths)
}

/// Regenerate all visuals and decks, overwriting earlier outputs
pub fn run(config: &DeckConfig) -> anyhow::Result<Outputs> {
    let output = &config.output;
    let assets = output.assets_path();
    let visuals = catalogue(&config.palette);
    let paths = generate_images(&visuals, config, &assets)?;

    let today = chrono::Local::now().date_naive();
    let participant = output.participant_path();
    let deck = participant_deck(&config.slides, &paths, today)
        .context("Failed to build participant deck")?;
    PackageWriter::save(&deck, "AI Agent and MCP Enablement", &participant)
        .with_context(|| format!("Failed to write {}", participant.display()))?;

    let trainer = output.trainer_path();
    let deck = trainer_deck(&config.slides, &paths, today).context("Failed to build trainer deck")?;
    PackageWriter::save(&deck, "AI Agent and MCP Enablement: Trainer", &trainer)
        .with_context(|| format!("Failed to write {}", trainer.display()))?;

    let legacy = output.legacy_path();
    std::fs::copy(&participant, &legacy)
        .with_context(|| {
            format!("Failed to copy {} to {}", participant.display(), legacy.display())
        })?;

    Ok(Outputs {
        participant,
        trainer,
        legacy,
        assets,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CanvasConfig, FontSpec, Rgb};
    use crate::deck::{Bullet, BulletBox, Presentation};
    use crate::diagram::Diagram;
    use crate::domain::Point;

    fn small_config() -> DeckConfig {
        DeckConfig {
            canvas: CanvasConfig {
                width: 320,
                height: 180,
                dpi: 72,
                ..CanvasConfig::default()
            },
            ..DeckConfig::default()
        }
    }

    fn sample_visuals() -> Vec<Visual> {
        ["one", "two", "three"]
            .into_iter()
            .zip(["one.png", "two.png", "three.png"])
            .map(|(key, file_name)| {
                let mut diagram = Diagram::new(key);
                let font = FontSpec::regular(16.0);
                diagram.text(Point::new(20.0, 150.0), "body", font, Rgb(0, 0, 0));
                Visual {
                    key,
                    file_name,
                    diagram,
                }
            })
            .collect()
    }

    fn zip_entries(path: &Path) -> Vec<String> {
        let file = std::fs::File::open(path).unwrap();
        let archive = zip::ZipArchive::new(file).unwrap();
        archive.file_names().map(str::to_string).collect()
    }

    #[test]
    fn test_generate_images_writes_each_visual() {
        let dir = tempfile::tempdir().unwrap();
        let assets = dir.path().join("assets");
        let paths = generate_images(&sample_visuals(), &small_config(), &assets).unwrap();

        assert_eq!(paths.len(), 3);
        for path in paths.values() {
            assert_eq!(image::image_dimensions(path).unwrap(), (320, 180));
        }
    }

    #[test]
    fn test_twelve_slides_three_visuals() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        let assets = dir.path().join("assets");
        let paths = generate_images(&sample_visuals(), &config, &assets).unwrap();
        let keys: Vec<&String> = paths.keys().collect();

        let mut deck = Presentation::new();
        for i in 0..12 {
            let slide = deck.add_slide();
            slide.title_block(&config.slides, &format!("Slide {}", i + 1), None);
            slide.bullets(&config.slides, [Bullet::from("point")], BulletBox::default());
            slide.image(&paths[keys[i % 3]], 5.95, 1.23, 7.15).unwrap();
        }
        let out = dir.path().join("deck.pptx");
        PackageWriter::save(&deck, "Test", &out).unwrap();

        let entries = zip_entries(&out);
        let slides = entries
            .iter()
            .filter(|name| name.starts_with("ppt/slides/slide") && name.ends_with(".xml"))
            .count();
        let media = entries.iter().filter(|name| name.starts_with("ppt/media/")).count();
        assert_eq!(slides, 12);
        assert_eq!(media, 3);

        let pngs = std::fs::read_dir(dir.path().join("assets")).unwrap().count();
        assert_eq!(pngs, 3);
    }

    #[test]
    fn test_run_writes_all_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = small_config();
        config.output.root = dir.path().to_path_buf();

        let outputs = run(&config).unwrap();
        assert!(outputs.participant.exists());
        assert!(outputs.trainer.exists());
        assert_eq!(
            std::fs::read(&outputs.participant).unwrap(),
            std::fs::read(&outputs.legacy).unwrap()
        );
        let pngs = std::fs::read_dir(&outputs.assets).unwrap().count();
        assert_eq!(pngs, catalogue(&config.palette).len());

        let trainer_slides = zip_entries(&outputs.trainer)
            .into_iter()
            .filter(|name| name.starts_with("ppt/slides/slide"))
            .count();
        assert_eq!(trainer_slides, 15);
    }
}
