//! Generator configuration: canvas, palette, fonts, geometry constants and output paths

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Serializable RGB color, stored as 0-255 channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Convert to RGBA bytes (always opaque)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [self.0, self.1, self.2, 255]
    }

    /// Uppercase hex without the leading `#`, as DrawingML `srgbClr` expects
    pub fn hex(self) -> String {
        format!("{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// CSS style hex with the leading `#`
    pub fn css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Font request: size in canvas pixels plus weight and family class
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FontSpec {
    pub size: f32,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub mono: bool,
}

impl FontSpec {
    pub const fn regular(size: f32) -> Self {
        Self {
            size,
            bold: false,
            mono: false,
        }
    }

    pub const fn bold(size: f32) -> Self {
        Self {
            size,
            bold: true,
            mono: false,
        }
    }
}

/// Font files tried in order; the first existing file of each list is loaded
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    pub regular_candidates: Vec<PathBuf>,
    pub bold_candidates: Vec<PathBuf>,
    pub mono_candidates: Vec<PathBuf>,
    /// CSS font-family list used for proportional text
    pub family: String,
    /// CSS font-family list used for monospace text
    pub mono_family: String,
    /// Whether to load system fonts when no candidate file exists
    pub system_fallback: bool,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            regular_candidates: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf".into(),
                "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf".into(),
            ],
            bold_candidates: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf".into(),
                "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf".into(),
            ],
            mono_candidates: vec![
                "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf".into(),
                "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf".into(),
            ],
            family: "DejaVu Sans, Liberation Sans, sans-serif".to_string(),
            mono_family: "DejaVu Sans Mono, Liberation Mono, monospace".to_string(),
            system_fallback: true,
        }
    }
}

/// Canvas dimensions and background
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    /// Physical resolution written to the PNG pHYs chunk
    pub dpi: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 2400,
            height: 1350,
            background: Rgb(244, 248, 255),
            dpi: 300,
        }
    }
}

/// Accent header band drawn at the top of every visual
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeaderStyle {
    pub height: f32,
    pub title_x: f32,
    pub title_y: f32,
    pub title_font: FontSpec,
    pub title_color: Rgb,
    pub default_accent: Rgb,
    /// Optional one-line subtitle just below the band
    pub subtitle_x: f32,
    pub subtitle_y: f32,
    pub subtitle_font: FontSpec,
    pub subtitle_color: Rgb,
}

impl Default for HeaderStyle {
    fn default() -> Self {
        Self {
            height: 140.0,
            title_x: 48.0,
            title_y: 38.0,
            title_font: FontSpec::bold(64.0),
            title_color: Rgb::WHITE,
            default_accent: Rgb(26, 92, 168),
            subtitle_x: 58.0,
            subtitle_y: 170.0,
            subtitle_font: FontSpec::regular(42.0),
            subtitle_color: Rgb(40, 60, 95),
        }
    }
}

/// Connector arrow defaults
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowStyle {
    pub color: Rgb,
    pub width: f32,
    /// Arrowhead length along the line
    pub head_length: f32,
    /// Arrowhead half-width perpendicular to the line
    pub head_half_width: f32,
}

impl Default for ArrowStyle {
    fn default() -> Self {
        Self {
            color: Rgb(70, 109, 175),
            width: 8.0,
            head_length: 28.0,
            head_half_width: 14.0,
        }
    }
}

/// Card layout constants
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    pub radius: f32,
    pub fill: Rgb,
    pub border: Rgb,
    pub border_width: f32,
    pub title_inset_x: f32,
    pub title_inset_y: f32,
    pub title_font: FontSpec,
    pub title_color: Rgb,
    pub body_inset_x: f32,
    /// Distance from the card top to the first content row
    pub body_top: f32,
    pub body_font: FontSpec,
    pub body_color: Rgb,
    /// Maximum characters per wrapped row
    pub wrap_width: usize,
    /// Cursor advance for a single-row line
    pub row_height: f32,
    /// Extra cursor advance per additional wrapped row
    pub extra_row_height: f32,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            radius: 24.0,
            fill: Rgb(236, 244, 255),
            border: Rgb(130, 161, 208),
            border_width: 4.0,
            title_inset_x: 24.0,
            title_inset_y: 20.0,
            title_font: FontSpec::bold(44.0),
            title_color: Rgb(23, 45, 80),
            body_inset_x: 26.0,
            body_top: 88.0,
            body_font: FontSpec::regular(30.0),
            body_color: Rgb(39, 58, 92),
            wrap_width: 29,
            row_height: 62.0,
            extra_row_height: 18.0,
        }
    }
}

/// Named colors shared by the visual catalogue
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub ink: Rgb,
    pub muted_ink: Rgb,
    pub outline: Rgb,
    pub soft_blue: Rgb,
    pub soft_green: Rgb,
    pub soft_violet: Rgb,
    pub soft_peach: Rgb,
    pub soft_red: Rgb,
    pub green_ink: Rgb,
    pub green_outline: Rgb,
    pub red_ink: Rgb,
    pub red_outline: Rgb,
    pub strong_blue: Rgb,
    pub success: Rgb,
    pub button: Rgb,
    pub shell: Rgb,
    pub shell_panel: Rgb,
    pub shell_row: Rgb,
    pub shell_text: Rgb,
    pub shell_muted: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            ink: Rgb(24, 45, 78),
            muted_ink: Rgb(39, 60, 94),
            outline: Rgb(130, 161, 208),
            soft_blue: Rgb(236, 246, 255),
            soft_green: Rgb(236, 252, 243),
            soft_violet: Rgb(244, 240, 255),
            soft_peach: Rgb(255, 245, 236),
            soft_red: Rgb(255, 240, 240),
            green_ink: Rgb(28, 94, 62),
            green_outline: Rgb(126, 180, 149),
            red_ink: Rgb(145, 64, 64),
            red_outline: Rgb(206, 141, 141),
            strong_blue: Rgb(56, 114, 200),
            success: Rgb(66, 162, 97),
            button: Rgb(73, 122, 220),
            shell: Rgb(23, 28, 38),
            shell_panel: Rgb(37, 45, 61),
            shell_row: Rgb(50, 62, 84),
            shell_text: Rgb(224, 231, 246),
            shell_muted: Rgb(170, 184, 212),
        }
    }
}

/// Slide text styling for the presentation documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideStyle {
    pub title_size: f32,
    pub title_color: Rgb,
    pub subtitle_size: f32,
    pub subtitle_color: Rgb,
    pub bullet_size: f32,
    pub sub_bullet_size: f32,
    pub bullet_color: Rgb,
    pub bullet_space_after: f32,
    pub code_fill: Rgb,
    pub code_color: Rgb,
    pub code_font: String,
}

impl Default for SlideStyle {
    fn default() -> Self {
        Self {
            title_size: 34.0,
            title_color: Rgb(20, 40, 74),
            subtitle_size: 18.0,
            subtitle_color: Rgb(68, 86, 120),
            bullet_size: 21.0,
            sub_bullet_size: 17.0,
            bullet_color: Rgb(35, 53, 84),
            bullet_space_after: 8.0,
            code_fill: Rgb(22, 31, 49),
            code_color: Rgb(228, 236, 252),
            code_font: "DejaVu Sans Mono".to_string(),
        }
    }
}

/// Where generated files go
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub root: PathBuf,
    pub assets_dir: String,
    pub participant_file: String,
    pub trainer_file: String,
    pub legacy_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            assets_dir: "presentation_assets".to_string(),
            participant_file: "AI_Tooling_Enablement_Participant.pptx".to_string(),
            trainer_file: "AI_Tooling_Enablement_Trainer_45min.pptx".to_string(),
            legacy_file: "AI_Tooling_Enablement.pptx".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn assets_path(&self) -> PathBuf {
        self.root.join(&self.assets_dir)
    }

    pub fn participant_path(&self) -> PathBuf {
        self.root.join(&self.participant_file)
    }

    pub fn trainer_path(&self) -> PathBuf {
        self.root.join(&self.trainer_file)
    }

    pub fn legacy_path(&self) -> PathBuf {
        self.root.join(&self.legacy_file)
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DeckConfig {
    pub canvas: CanvasConfig,
    pub header: HeaderStyle,
    pub arrow: ArrowStyle,
    pub card: CardStyle,
    pub palette: Palette,
    pub fonts: FontConfig,
    pub slides: SlideStyle,
    pub output: OutputConfig,
}

impl DeckConfig {
    /// Environment variable naming an explicit config file
    pub const ENV_PATH: &'static str = "DECKDRAW_CONFIG";

    /// Config file location: `$DECKDRAW_CONFIG`, else `<config dir>/deckdraw/config.json`
    fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(Self::ENV_PATH) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("deckdraw").join("config.json"))
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            log::debug!("No config directory available, using defaults");
            return Self::default();
        };
        if !path.exists() {
            log::debug!("No config file at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from(&path) {
            Ok(config) => config,
            Err(err) => {
                log::warn!("Error loading config, using defaults: {:?}", err);
                Self::default()
            }
        }
    }

    /// Parse a JSON config file; missing fields take their defaults
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = serde_json::from_str(&json)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgb_hex() {
        assert_eq!(Rgb(26, 92, 168).hex(), "1A5CA8");
        assert_eq!(Rgb(0, 0, 0).css(), "#000000");
        assert_eq!(Rgb::WHITE.to_rgba_u8(), [255, 255, 255, 255]);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "canvas": { "width": 800 }, "card": { "wrap_width": 20 } }"#)
            .unwrap();

        let config = DeckConfig::load_from(&path).unwrap();
        assert_eq!(config.canvas.width, 800);
        assert_eq!(config.canvas.height, 1350);
        assert_eq!(config.card.wrap_width, 20);
        assert_eq!(config.card.row_height, 62.0);
        assert_eq!(config.arrow, ArrowStyle::default());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(DeckConfig::load_from(&path).is_err());
    }

    #[test]
    fn test_output_paths() {
        let output = OutputConfig {
            root: PathBuf::from("/tmp/out"),
            ..Default::default()
        };
        assert_eq!(output.assets_path(), PathBuf::from("/tmp/out/presentation_assets"));
        assert!(output.legacy_path().starts_with("/tmp/out"));
    }
}
