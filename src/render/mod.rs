//! Scene rendering
//!
//! This module contains:
//! - Geometry and text metrics shared with layout code
//! - Text rasterisation via usvg/resvg (font resolution lives here)
//! - The tiny-skia canvas that executes scenes and writes PNG files

pub mod geometry;
pub mod image;
pub mod text;

pub use self::image::Canvas;
pub use self::text::FontBook;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to allocate a {width}x{height} canvas")]
    PixmapAlloc { width: u32, height: u32 },
    #[error("failed to build text layer: {0}")]
    TextParse(String),
    #[error("failed to encode PNG")]
    PngEncode(#[from] png::EncodingError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
