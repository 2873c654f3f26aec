//! Presentation model and slide helpers
//!
//! Slides are plain data: text boxes, pictures and code blocks positioned in
//! inches. [`writer::PackageWriter`] turns a [`Presentation`] into a `.pptx`.

pub mod content;
pub mod parts;
pub mod writer;

use std::path::{Path, PathBuf};

use crate::config::{Rgb, SlideStyle};

pub use self::writer::PackageWriter;

/// English Metric Units per inch
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Default slide size in inches (16:9)
pub const SLIDE_WIDTH_IN: f64 = 13.333;
pub const SLIDE_HEIGHT_IN: f64 = 7.5;

/// Convert inches to EMU
pub fn inches(value: f64) -> i64 {
    (value * EMU_PER_INCH).round() as i64
}

/// Convert a point size to DrawingML hundredths of a point
pub fn hundredths(points: f32) -> u32 {
    (points * 100.0).round().max(0.0) as u32
}

#[derive(Debug, thiserror::Error)]
pub enum DeckError {
    #[error("failed to read image size of {path}")]
    ImageSize {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("image {path} has zero width")]
    EmptyImage { path: PathBuf },
    #[error("no rendered visual named '{0}'")]
    MissingVisual(String),
    #[error("failed to write package entry")]
    Zip(#[from] zip::result::ZipError),
    #[error("failed to format part XML")]
    Xml(#[from] std::fmt::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Position and size in inches
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Frame {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// One paragraph with a single formatted run
#[derive(Clone, Debug, PartialEq)]
pub struct Paragraph {
    pub text: String,
    pub level: u8,
    pub size: f32,
    pub bold: bool,
    pub color: Rgb,
    pub font: Option<String>,
    pub space_before: Option<f32>,
    pub space_after: Option<f32>,
}

impl Paragraph {
    pub fn new(text: impl Into<String>, size: f32, color: Rgb) -> Self {
        Self {
            text: text.into(),
            level: 0,
            size,
            bold: false,
            color,
            font: None,
            space_before: None,
            space_after: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    TextBox {
        frame: Frame,
        paragraphs: Vec<Paragraph>,
        word_wrap: bool,
    },
    Picture {
        frame: Frame,
        path: PathBuf,
    },
    /// Rounded filled rectangle holding text
    CodeBlock {
        frame: Frame,
        fill: Rgb,
        paragraphs: Vec<Paragraph>,
    },
}

/// A bullet list item: text plus indentation level
#[derive(Clone, Debug, PartialEq)]
pub struct Bullet {
    pub text: String,
    pub level: u8,
}

impl From<&str> for Bullet {
    fn from(text: &str) -> Self {
        Self {
            text: text.to_string(),
            level: 0,
        }
    }
}

impl From<String> for Bullet {
    fn from(text: String) -> Self {
        Self { text, level: 0 }
    }
}

impl From<(&str, u8)> for Bullet {
    fn from((text, level): (&str, u8)) -> Self {
        Self {
            text: text.to_string(),
            level,
        }
    }
}

/// Placement and sizes for a bullet list
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BulletBox {
    pub frame: Frame,
    /// Level 0 size; the slide style default when unset
    pub level0_size: Option<f32>,
    /// Level 1+ size; the slide style default when unset
    pub level1_size: Option<f32>,
}

impl Default for BulletBox {
    fn default() -> Self {
        Self {
            frame: Frame::new(0.55, 1.4, 5.4, 5.6),
            level0_size: None,
            level1_size: None,
        }
    }
}

impl BulletBox {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            frame: Frame::new(x, y, width, height),
            ..Self::default()
        }
    }

    pub fn sizes(mut self, level0: f32, level1: f32) -> Self {
        self.level0_size = Some(level0);
        self.level1_size = Some(level1);
        self
    }

    pub fn level0(mut self, size: f32) -> Self {
        self.level0_size = Some(size);
        self
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Slide {
    pub shapes: Vec<Shape>,
}

impl Slide {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bold title across the top plus an optional subtitle line
    pub fn title_block(
        &mut self,
        style: &SlideStyle,
        title: &str,
        subtitle: Option<&str>,
    ) -> &mut Self {
        let mut heading = Paragraph::new(title, style.title_size, style.title_color);
        heading.bold = true;
        self.shapes.push(Shape::TextBox {
            frame: Frame::new(0.45, 0.16, 12.2, 0.72),
            paragraphs: vec![heading],
            word_wrap: true,
        });
        if let Some(subtitle) = subtitle {
            self.shapes.push(Shape::TextBox {
                frame: Frame::new(0.48, 0.82, 12.2, 0.46),
                paragraphs: vec![Paragraph::new(
                    subtitle,
                    style.subtitle_size,
                    style.subtitle_color,
                )],
                word_wrap: true,
            });
        }
        self
    }

    /// Word-wrapping list; level 0 and deeper items use separate sizes
    pub fn bullets<B: Into<Bullet>>(
        &mut self,
        style: &SlideStyle,
        items: impl IntoIterator<Item = B>,
        placement: BulletBox,
    ) -> &mut Self {
        let level0 = placement.level0_size.unwrap_or(style.bullet_size);
        let level1 = placement.level1_size.unwrap_or(style.sub_bullet_size);
        let paragraphs = items
            .into_iter()
            .map(Into::into)
            .map(|bullet: Bullet| {
                let size = if bullet.level == 0 { level0 } else { level1 };
                let mut paragraph = Paragraph::new(bullet.text, size, style.bullet_color);
                paragraph.level = bullet.level;
                paragraph.space_after = Some(style.bullet_space_after);
                paragraph
            })
            .collect();
        self.shapes.push(Shape::TextBox {
            frame: placement.frame,
            paragraphs,
            word_wrap: true,
        });
        self
    }

    /// Picture at (x, y) with the given width; height follows the image aspect ratio
    pub fn image(
        &mut self,
        path: &Path,
        x: f64,
        y: f64,
        width: f64,
    ) -> Result<&mut Self, DeckError> {
        let (px_w, px_h) = image::image_dimensions(path).map_err(|source| DeckError::ImageSize {
            path: path.to_path_buf(),
            source,
        })?;
        if px_w == 0 {
            return Err(DeckError::EmptyImage {
                path: path.to_path_buf(),
            });
        }
        let height = width * px_h as f64 / px_w as f64;
        self.shapes.push(Shape::Picture {
            frame: Frame::new(x, y, width, height),
            path: path.to_path_buf(),
        });
        Ok(self)
    }

    /// Dark rounded box with one monospace paragraph per line
    pub fn code_block<S: AsRef<str>>(
        &mut self,
        style: &SlideStyle,
        lines: &[S],
        frame: Frame,
        size: f32,
    ) -> &mut Self {
        let paragraphs = lines
            .iter()
            .map(|line| {
                let mut paragraph = Paragraph::new(line.as_ref(), size, style.code_color);
                paragraph.font = Some(style.code_font.clone());
                paragraph.space_before = Some(0.0);
                paragraph.space_after = Some(1.0);
                paragraph
            })
            .collect();
        self.shapes.push(Shape::CodeBlock {
            frame,
            fill: style.code_fill,
            paragraphs,
        });
        self
    }

    /// Picture paths in shape order
    pub fn pictures(&self) -> impl Iterator<Item = &Path> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Picture { path, .. } => Some(path.as_path()),
            _ => None,
        })
    }
}

/// Ordered slides plus the slide size
#[derive(Clone, Debug, PartialEq)]
pub struct Presentation {
    pub width: f64,
    pub height: f64,
    pub slides: Vec<Slide>,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            width: SLIDE_WIDTH_IN,
            height: SLIDE_HEIGHT_IN,
            slides: Vec::new(),
        }
    }
}

impl Presentation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a blank slide and return it
    pub fn add_slide(&mut self) -> &mut Slide {
        self.slides.push(Slide::new());
        let last = self.slides.len() - 1;
        &mut self.slides[last]
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }
}
