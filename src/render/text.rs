//! Text rasterisation through usvg/resvg
//!
//! Consecutive text rows are batched into one small SVG document, parsed with
//! usvg against a font database and painted straight onto the canvas pixmap.
//! The family names of the font files that actually loaded lead every
//! `font-family` list, so a configured file is always the one used.

use std::fmt::Write as _;
use std::path::PathBuf;

use tiny_skia::{Pixmap, Transform};
use usvg::fontdb::{Database, Family, Source};

use super::RenderError;
use super::geometry::text;
use crate::config::FontConfig;
use crate::deck::parts::escape_xml;
use crate::domain::{TextAnchor, TextCommand};

/// Font database plus the family lists text is rendered with
pub struct FontBook {
    options: usvg::Options<'static>,
    family: String,
    bold_family: String,
    mono_family: String,
}

impl std::fmt::Debug for FontBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontBook")
            .field("faces", &self.face_count())
            .field("family", &self.family)
            .field("bold_family", &self.bold_family)
            .field("mono_family", &self.mono_family)
            .finish()
    }
}

/// Load the first usable file of `candidates`; returns the family name of its first face
fn load_first(db: &mut Database, candidates: &[PathBuf]) -> Option<String> {
    for candidate in candidates {
        if !candidate.exists() {
            continue;
        }
        let ids = db.load_font_source(Source::File(candidate.clone()));
        let family = ids
            .iter()
            .filter_map(|id| db.face(*id))
            .find_map(|face| face.families.first())
            .map(|(name, _)| name.clone());
        match family {
            Some(name) => {
                log::debug!("Loaded font {} ({})", candidate.display(), name);
                return Some(name);
            }
            None => log::warn!("No usable font face in {}", candidate.display()),
        }
    }
    None
}

/// Whether any entry of a CSS family list names a face in `db`
fn resolves_any(db: &Database, list: &str) -> bool {
    list.split(',')
        .map(|name| name.trim().trim_matches(|c| c == '\'' || c == '"'))
        .any(|name| {
            let family = match name {
                "serif" => Family::Serif,
                "sans-serif" => Family::SansSerif,
                "monospace" => Family::Monospace,
                "cursive" => Family::Cursive,
                "fantasy" => Family::Fantasy,
                other => Family::Name(other),
            };
            let wanted = db.family_name(&family);
            db.faces()
                .any(|face| face.families.iter().any(|(found, _)| found == wanted))
        })
}

/// Put a loaded family in front of the configured list
fn family_list(loaded: Option<&str>, configured: &str) -> String {
    match loaded {
        Some(name) => format!("'{}', {}", name.replace('\'', ""), configured),
        None => configured.to_string(),
    }
}

impl FontBook {
    /// Resolve fonts: configured candidates first, then system fonts
    ///
    /// Never fails. With no usable font at all, text rows are skipped.
    pub fn load(config: &FontConfig) -> Self {
        let mut options = usvg::Options::default();
        let db = options.fontdb_mut();

        let regular = load_first(db, &config.regular_candidates);
        let bold = load_first(db, &config.bold_candidates);
        let mono = load_first(db, &config.mono_candidates);

        if (regular.is_none() || bold.is_none() || mono.is_none()) && config.system_fallback {
            log::debug!("Some font candidates missing, loading system fonts");
            db.load_system_fonts();
        }

        // usvg ends every lookup on the serif generic, so point it at a face we have
        let fallback = regular.clone().or_else(|| bold.clone()).or_else(|| {
            db.faces()
                .find_map(|face| face.families.first().map(|(name, _)| name.clone()))
        });
        match &fallback {
            Some(name) => {
                db.set_serif_family(name.clone());
                for (list, loaded) in [(&config.family, &regular), (&config.mono_family, &mono)] {
                    if loaded.is_none() && !resolves_any(db, list) {
                        log::warn!("No installed font matches '{}'; using {}", list, name);
                    }
                }
                options.font_family = name.clone();
            }
            None => log::warn!("No fonts available; text will not be rendered"),
        }

        Self {
            options,
            family: family_list(regular.as_deref(), &config.family),
            bold_family: family_list(bold.as_deref().or(regular.as_deref()), &config.family),
            mono_family: family_list(mono.as_deref(), &config.mono_family),
        }
    }

    /// Number of font faces available for text
    pub fn face_count(&self) -> usize {
        self.options.fontdb.len()
    }

    /// Build an SVG document holding `rows`, sized to the canvas
    pub fn svg_document(&self, width: u32, height: u32, rows: &[&TextCommand]) -> String {
        let mut svg = String::with_capacity(256 + rows.len() * 160);
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        for row in rows {
            let family = if row.font.mono {
                &self.mono_family
            } else if row.font.bold {
                &self.bold_family
            } else {
                &self.family
            };
            let anchor = match row.anchor {
                TextAnchor::Start => "start",
                TextAnchor::Middle => "middle",
            };
            let _ = write!(
                svg,
                r#"<text x="{x}" y="{y}" font-family="{family}" font-size="{size}" font-weight="{weight}" fill="{fill}" text-anchor="{anchor}" xml:space="preserve">{content}</text>"#,
                x = row.origin.x,
                y = text::baseline(row.origin.y, row.font.size),
                family = escape_xml(family),
                size = row.font.size,
                weight = if row.font.bold { "bold" } else { "normal" },
                fill = row.color.css(),
                content = escape_xml(&row.text),
            );
        }
        svg.push_str("</svg>");
        svg
    }

    /// Paint a batch of text rows onto `pixmap`
    pub fn draw(&self, pixmap: &mut Pixmap, rows: &[&TextCommand]) -> Result<(), RenderError> {
        if rows.is_empty() || self.face_count() == 0 {
            return Ok(());
        }
        let svg = self.svg_document(pixmap.width(), pixmap.height(), rows);
        let tree = usvg::Tree::from_str(&svg, &self.options)
            .map_err(|err| RenderError::TextParse(err.to_string()))?;
        resvg::render(&tree, Transform::identity(), &mut pixmap.as_mut());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{FontSpec, Rgb};
    use crate::domain::Point;

    fn empty_book() -> FontBook {
        FontBook::load(&FontConfig {
            regular_candidates: vec![],
            bold_candidates: vec![],
            mono_candidates: vec![],
            system_fallback: false,
            ..Default::default()
        })
    }

    #[test]
    fn test_svg_document_rows() {
        let book = empty_book();
        let title = TextCommand {
            origin: Point::new(48.0, 38.0),
            text: "Tools -> MCP & more".to_string(),
            font: FontSpec::bold(64.0),
            color: Rgb::WHITE,
            anchor: TextAnchor::Start,
        };
        let code = TextCommand {
            origin: Point::new(790.0, 330.0),
            text: "  \"tracker\": {".to_string(),
            font: FontSpec {
                size: 32.0,
                bold: false,
                mono: true,
            },
            color: Rgb(220, 231, 248),
            anchor: TextAnchor::Middle,
        };
        let svg = book.svg_document(2400, 1350, &[&title, &code]);
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="2400""#));
        assert!(svg.contains("Tools -&gt; MCP &amp; more"));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r##"fill="#ffffff""##));
        assert!(svg.contains(r#"text-anchor="middle""#));
        assert!(svg.contains("  &quot;tracker&quot;: {"));
        // Baseline sits below the row top
        assert!(svg.contains(&format!(r#"y="{}""#, 38.0 + 64.0 * text::ASCENT)));
    }

    #[test]
    fn test_draw_without_fonts_is_noop() {
        let book = empty_book();
        assert_eq!(book.face_count(), 0);
        let mut pixmap = Pixmap::new(32, 32).unwrap();
        let row = TextCommand {
            origin: Point::new(0.0, 0.0),
            text: "x".to_string(),
            font: FontSpec::regular(12.0),
            color: Rgb(0, 0, 0),
            anchor: TextAnchor::Start,
        };
        book.draw(&mut pixmap, &[&row]).unwrap();
        assert!(pixmap.data().iter().all(|&b| b == 0));
    }

    /// Any font file outside the configured default families
    fn other_font_file() -> Option<PathBuf> {
        [
            "/usr/share/fonts/truetype/dejavu/DejaVuSerif.ttf",
            "/usr/share/fonts/truetype/liberation/LiberationSerif-Regular.ttf",
            "/usr/share/fonts/dejavu/DejaVuSerif.ttf",
            "/usr/share/fonts/TTF/DejaVuSerif.ttf",
            "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
        ]
        .iter()
        .map(PathBuf::from)
        .find(|path| path.exists())
    }

    fn dark_pixels(book: &FontBook, row: &TextCommand) -> usize {
        let mut pixmap = Pixmap::new(400, 80).unwrap();
        pixmap.fill(tiny_skia::Color::WHITE);
        book.draw(&mut pixmap, &[row]).unwrap();
        pixmap.pixels().iter().filter(|p| p.red() < 128).count()
    }

    #[test]
    fn test_unlisted_font_file_still_renders() {
        let Some(path) = other_font_file() else {
            return;
        };
        let book = FontBook::load(&FontConfig {
            regular_candidates: vec![path],
            bold_candidates: vec![],
            mono_candidates: vec![],
            family: "Missing Family, sans-serif".to_string(),
            mono_family: "Missing Mono, monospace".to_string(),
            system_fallback: false,
        });
        assert!(book.face_count() > 0);
        assert!(book.family.starts_with('\''));
        assert!(book.family.ends_with("Missing Family, sans-serif"));
        assert_eq!(book.bold_family, book.family);

        let mut row = TextCommand {
            origin: Point::new(10.0, 10.0),
            text: "Hello world".to_string(),
            font: FontSpec::bold(40.0),
            color: Rgb(0, 0, 0),
            anchor: TextAnchor::Start,
        };
        assert!(dark_pixels(&book, &row) > 0);

        // Monospace rows fall through to the loaded face as well
        row.font = FontSpec {
            size: 40.0,
            bold: false,
            mono: true,
        };
        assert!(dark_pixels(&book, &row) > 0);
    }

    #[test]
    fn test_family_list_order() {
        assert_eq!(family_list(None, "DejaVu Sans, sans-serif"), "DejaVu Sans, sans-serif");
        assert_eq!(
            family_list(Some("Noto Sans"), "DejaVu Sans, sans-serif"),
            "'Noto Sans', DejaVu Sans, sans-serif"
        );
    }

    #[test]
    fn test_empty_database_resolves_nothing() {
        let db = Database::new();
        assert!(!resolves_any(&db, "DejaVu Sans, sans-serif"));
    }
}
