//! Shared geometry calculations for rendering
//!
//! Constants and math used both by layout code (which must predict text
//! extents) and by the raster backend.

/// Text metrics
pub mod text {
    /// Distance between successive rows, as a multiple of the font size
    pub const LINE_SPACING: f32 = 1.2;
    /// Baseline offset below the top of a row, as a multiple of the font size
    pub const ASCENT: f32 = 0.8;

    /// Height of a block of `rows` rows
    pub fn block_height(rows: usize, size: f32) -> f32 {
        if rows == 0 {
            return 0.0;
        }
        size + (rows - 1) as f32 * size * LINE_SPACING
    }

    /// Baseline y for a row whose top edge is at `top`
    pub fn baseline(top: f32, size: f32) -> f32 {
        top + size * ASCENT
    }
}

/// Shape geometry constants
pub mod shape {
    /// Ellipse bezier approximation constant: 4/3 * (sqrt(2) - 1)
    pub const BEZIER_K: f32 = 0.552_284_8;
}

/// Normalize min/max coordinates from arbitrary corner points
#[inline]
pub fn normalize_rect(x1: f32, y1: f32, x2: f32, y2: f32) -> (f32, f32, f32, f32) {
    let (min_x, max_x) = if x1 < x2 { (x1, x2) } else { (x2, x1) };
    let (min_y, max_y) = if y1 < y2 { (y1, y2) } else { (y2, y1) };
    (min_x, min_y, max_x, max_y)
}

/// Calculate ellipse center and radii from bounding box
#[inline]
pub fn ellipse_from_bounds(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (f32, f32, f32, f32) {
    let cx = (min_x + max_x) * 0.5;
    let cy = (min_y + max_y) * 0.5;
    let rx = ((max_x - min_x) * 0.5).max(1.0);
    let ry = ((max_y - min_y) * 0.5).max(1.0);
    (cx, cy, rx, ry)
}

/// Clamp a corner radius so opposite corners never overlap
#[inline]
pub fn clamp_radius(radius: f32, width: f32, height: f32) -> f32 {
    radius.max(0.0).min(width * 0.5).min(height * 0.5)
}
