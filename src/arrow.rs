//! Connector arrows: a straight shaft capped by a filled triangular head
//!
//! The head's tip sits exactly on the end point. Its base lies `head_length`
//! behind the tip along the shaft and spans `head_half_width` to either side.

use crate::config::{ArrowStyle, Rgb};
use crate::domain::{DrawCommand, Point, PolygonCommand};

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum GeometryError {
    #[error("invalid geometry: non-finite coordinate in ({x}, {y})")]
    InvalidGeometry { x: f32, y: f32 },
}

/// Arrow from `start` to `end`
#[derive(Clone, Debug, PartialEq)]
pub struct Arrow {
    pub start: Point,
    pub end: Point,
    pub color: Rgb,
    /// Shaft stroke width
    pub width: f32,
    pub head_length: f32,
    pub head_half_width: f32,
}

/// Triangle vertices of an arrowhead: the tip and the two base corners
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowHead {
    pub tip: Point,
    pub left: Point,
    pub right: Point,
}

impl ArrowHead {
    pub fn points(&self) -> [Point; 3] {
        [self.tip, self.left, self.right]
    }
}

fn check_finite(p: Point) -> Result<(), GeometryError> {
    if p.is_finite() {
        Ok(())
    } else {
        Err(GeometryError::InvalidGeometry { x: p.x, y: p.y })
    }
}

/// Compute the arrowhead for a shaft from `start` to `end`
///
/// Returns `Ok(None)` when `start == end`: the direction is undefined and the
/// arrow is drawn as nothing at all.
pub fn head_points(
    start: Point,
    end: Point,
    head_length: f32,
    head_half_width: f32,
) -> Result<Option<ArrowHead>, GeometryError> {
    check_finite(start)?;
    check_finite(end)?;
    if start == end {
        return Ok(None);
    }

    let angle = (end.y - start.y).atan2(end.x - start.x);
    let (sin, cos) = angle.sin_cos();

    // Base center, then spread perpendicular to the shaft
    let base_x = end.x - head_length * cos;
    let base_y = end.y - head_length * sin;

    Ok(Some(ArrowHead {
        tip: end,
        left: Point::new(base_x + head_half_width * sin, base_y - head_half_width * cos),
        right: Point::new(base_x - head_half_width * sin, base_y + head_half_width * cos),
    }))
}

impl Arrow {
    /// Arrow using the configured default color, width and head size
    pub fn styled(start: Point, end: Point, style: &ArrowStyle) -> Self {
        Self {
            start,
            end,
            color: style.color,
            width: style.width,
            head_length: style.head_length,
            head_half_width: style.head_half_width,
        }
    }

    /// Override the shaft width
    pub fn with_width(mut self, width: f32) -> Self {
        self.width = width;
        self
    }

    pub fn head(&self) -> Result<Option<ArrowHead>, GeometryError> {
        head_points(self.start, self.end, self.head_length, self.head_half_width)
    }

    /// Shaft line followed by the filled head; empty for a zero-length arrow
    pub fn commands(&self) -> Result<Vec<DrawCommand>, GeometryError> {
        let Some(head) = self.head()? else {
            log::debug!(
                "Skipping zero-length arrow at ({}, {})",
                self.start.x,
                self.start.y
            );
            return Ok(Vec::new());
        };

        Ok(vec![
            DrawCommand::line(self.start, self.end, self.color, self.width),
            DrawCommand::Polygon(PolygonCommand {
                points: head.points().to_vec(),
                fill: self.color,
            }),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-3;

    fn arrow(start: (f32, f32), end: (f32, f32)) -> Arrow {
        Arrow::styled(start.into(), end.into(), &ArrowStyle::default())
    }

    /// Signed distance of `p` from the line through `a` and `b`
    fn distance_from_axis(a: Point, b: Point, p: Point) -> f32 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        ((p.x - a.x) * dy - (p.y - a.y) * dx) / dx.hypot(dy)
    }

    /// Distance of `p` behind `b` measured along the direction a -> b
    fn distance_behind(a: Point, b: Point, p: Point) -> f32 {
        let (dx, dy) = (b.x - a.x, b.y - a.y);
        ((b.x - p.x) * dx + (b.y - p.y) * dy) / dx.hypot(dy)
    }

    #[test]
    fn test_tip_is_end_point() {
        let cases = [
            ((760.0, 400.0), (940.0, 560.0)),
            ((1640.0, 400.0), (1460.0, 560.0)),
            ((0.0, 0.0), (0.0, -10.0)),
            ((5.5, 3.25), (5.5001, 3.25)),
        ];
        for (start, end) in cases {
            let head = arrow(start, end).head().unwrap().unwrap();
            assert_eq!(head.tip, Point::from(end));
        }
    }

    #[test]
    fn test_head_is_symmetric_and_behind_tip() {
        let style = ArrowStyle::default();
        let cases = [
            ((620.0, 620.0), (760.0, 620.0)),
            ((760.0, 1000.0), (940.0, 840.0)),
            ((100.0, 100.0), (40.0, 300.0)),
        ];
        for (start, end) in cases {
            let (a, b) = (Point::from(start), Point::from(end));
            let head = head_points(a, b, style.head_length, style.head_half_width)
                .unwrap()
                .unwrap();

            let dl = distance_from_axis(a, b, head.left);
            let dr = distance_from_axis(a, b, head.right);
            assert!((dl.abs() - dr.abs()).abs() < EPS);
            assert!((dl.abs() - style.head_half_width).abs() < EPS);
            // Opposite sides of the shaft
            assert!(dl * dr < 0.0);

            assert!((distance_behind(a, b, head.left) - style.head_length).abs() < EPS);
            assert!((distance_behind(a, b, head.right) - style.head_length).abs() < EPS);
        }
    }

    #[test]
    fn test_horizontal_arrow_vertices() {
        let head = head_points(Point::new(0.0, 50.0), Point::new(100.0, 50.0), 28.0, 14.0)
            .unwrap()
            .unwrap();
        assert!((head.left.x - 72.0).abs() < EPS);
        assert!((head.left.y - 36.0).abs() < EPS);
        assert!((head.right.x - 72.0).abs() < EPS);
        assert!((head.right.y - 64.0).abs() < EPS);
    }

    #[test]
    fn test_zero_length_arrow_is_noop() {
        let a = arrow((300.0, 300.0), (300.0, 300.0));
        assert_eq!(a.head().unwrap(), None);
        assert!(a.commands().unwrap().is_empty());
        // Reproducible
        assert_eq!(a.commands().unwrap(), a.commands().unwrap());
    }

    #[test]
    fn test_non_finite_points_rejected() {
        let err = arrow((f32::NAN, 0.0), (10.0, 10.0)).commands().unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));

        let err = head_points(Point::new(0.0, 0.0), Point::new(f32::INFINITY, 1.0), 28.0, 14.0)
            .unwrap_err();
        assert!(matches!(err, GeometryError::InvalidGeometry { .. }));
    }

    #[test]
    fn test_commands_are_shaft_then_head() {
        let a = arrow((620.0, 620.0), (760.0, 620.0)).with_width(10.0);
        let commands = a.commands().unwrap();
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            DrawCommand::Line(line) => {
                assert_eq!(line.width, 10.0);
                assert_eq!(line.to, Point::new(760.0, 620.0));
            }
            other => panic!("expected shaft line, got {:?}", other),
        }
        match &commands[1] {
            DrawCommand::Polygon(poly) => {
                assert_eq!(poly.points.len(), 3);
                assert_eq!(poly.points[0], Point::new(760.0, 620.0));
                assert_eq!(poly.fill, a.color);
            }
            other => panic!("expected arrowhead, got {:?}", other),
        }
    }
}
