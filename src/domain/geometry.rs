//! Geometric types for canvas coordinates and layout boxes

/// A point in canvas pixel space
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Both coordinates are finite (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned box given by its top-left and bottom-right corners
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    /// Create a new rectangle from corner coordinates
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from its top-left corner and size
    pub const fn from_xywh(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Rectangle of the given radius around a center point
    pub const fn around(center: Point, radius: f32) -> Self {
        Self {
            left: center.x - radius,
            top: center.y - radius,
            right: center.x + radius,
            bottom: center.y + radius,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) * 0.5,
            (self.top + self.bottom) * 0.5,
        )
    }

    /// Midpoint of the right edge
    pub fn right_mid(&self) -> Point {
        Point::new(self.right, (self.top + self.bottom) * 0.5)
    }

    /// Midpoint of the left edge
    pub fn left_mid(&self) -> Point {
        Point::new(self.left, (self.top + self.bottom) * 0.5)
    }
}

/// Fixed-size card grid: column count, card size, gaps and origin
///
/// Cards fill rows left to right. There is no reflow; a grid with more cards
/// than fit on the canvas simply extends past its edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Grid {
    pub origin: Point,
    pub card_width: f32,
    pub card_height: f32,
    pub gap_x: f32,
    pub gap_y: f32,
    pub columns: usize,
}

impl Grid {
    /// Box of the `index`-th card. A zero column count is treated as one column.
    pub fn cell(&self, index: usize) -> Rect {
        let columns = self.columns.max(1);
        let col = (index % columns) as f32;
        let row = (index / columns) as f32;
        let left = self.origin.x + col * (self.card_width + self.gap_x);
        let top = self.origin.y + row * (self.card_height + self.gap_y);
        Rect::from_xywh(left, top, self.card_width, self.card_height)
    }

    /// Row of the `index`-th card
    pub fn row_of(&self, index: usize) -> usize {
        index / self.columns.max(1)
    }

    /// Boxes of the first `count` cards
    pub fn cells(&self, count: usize) -> impl Iterator<Item = Rect> + '_ {
        (0..count).map(|i| self.cell(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_wide() -> Grid {
        Grid {
            origin: Point::new(72.0, 260.0),
            card_width: 740.0,
            card_height: 430.0,
            gap_x: 54.0,
            gap_y: 44.0,
            columns: 3,
        }
    }

    #[test]
    fn test_grid_first_row_and_wrap() {
        let grid = three_wide();
        assert_eq!(grid.cell(0), Rect::new(72.0, 260.0, 812.0, 690.0));
        assert_eq!(grid.cell(2).left, 72.0 + 2.0 * 794.0);
        // Fourth card starts the second row at the origin column
        let fourth = grid.cell(3);
        assert_eq!(fourth.left, 72.0);
        assert_eq!(fourth.top, 260.0 + 474.0);
        assert_eq!(grid.row_of(3), 1);
    }

    #[test]
    fn test_grid_placement_is_pure() {
        let grid = three_wide();
        for i in 0..20 {
            assert_eq!(grid.cell(i), grid.cell(i));
        }
        let collected: Vec<_> = grid.cells(6).collect();
        assert_eq!(collected[4], grid.cell(4));
    }

    #[test]
    fn test_grid_extends_past_canvas() {
        let grid = three_wide();
        // Row 4 is well below a 1350 px canvas; placement still follows the formula
        assert!(grid.cell(12).top > 1350.0);
    }

    #[test]
    fn test_grid_zero_columns_is_single_column() {
        let grid = Grid {
            columns: 0,
            ..three_wide()
        };
        assert_eq!(grid.cell(1).left, 72.0);
        assert_eq!(grid.cell(1).top, 260.0 + 474.0);
    }

    #[test]
    fn test_rect_helpers() {
        let r = Rect::from_xywh(10.0, 20.0, 100.0, 50.0);
        assert_eq!((r.right, r.bottom), (110.0, 70.0));
        assert_eq!(r.center(), Point::new(60.0, 45.0));
        assert_eq!(r.right_mid(), Point::new(110.0, 45.0));
        assert_eq!(r.left_mid(), Point::new(10.0, 45.0));
        assert_eq!(Rect::around(Point::new(5.0, 5.0), 2.0), Rect::new(3.0, 3.0, 7.0, 7.0));
    }
}
