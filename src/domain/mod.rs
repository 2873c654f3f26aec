//! Pure domain types with minimal dependencies
//!
//! Layout code builds these values; only the renderer turns them into pixels.
//! Nothing here touches tiny-skia, resvg or the filesystem.

pub mod command;
pub mod geometry;

pub use command::*;
pub use geometry::*;
