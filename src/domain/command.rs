//! Drawing commands produced by layout code and executed by the renderer
//!
//! All coordinates are canvas pixels. A scene is an ordered command list;
//! later commands paint over earlier ones.

use crate::config::{FontSpec, Rgb};

use super::geometry::{Point, Rect};

/// Filled axis-aligned rectangle with an optional outline
#[derive(Clone, Debug, PartialEq)]
pub struct RectCommand {
    pub rect: Rect,
    /// Corner radius, 0 for square corners
    pub radius: f32,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
}

/// Ellipse inscribed in a bounding box
#[derive(Clone, Debug, PartialEq)]
pub struct EllipseCommand {
    pub bounds: Rect,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
}

/// Stroke color and width
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Outline {
    pub color: Rgb,
    pub width: f32,
}

/// Straight stroked segment with butt caps
#[derive(Clone, Debug, PartialEq)]
pub struct LineCommand {
    pub from: Point,
    pub to: Point,
    pub color: Rgb,
    pub width: f32,
}

/// Filled closed polygon
#[derive(Clone, Debug, PartialEq)]
pub struct PolygonCommand {
    pub points: Vec<Point>,
    pub fill: Rgb,
}

/// Horizontal placement of a text row relative to its origin
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAnchor {
    /// Origin is the left edge of the row
    #[default]
    Start,
    /// Origin is the horizontal center of the row
    Middle,
}

/// A single row of text; `origin.y` is the top of the row
#[derive(Clone, Debug, PartialEq)]
pub struct TextCommand {
    pub origin: Point,
    pub text: String,
    pub font: FontSpec,
    pub color: Rgb,
    pub anchor: TextAnchor,
}

/// Unified drawing command, executed in order
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect(RectCommand),
    Ellipse(EllipseCommand),
    Line(LineCommand),
    Polygon(PolygonCommand),
    Text(TextCommand),
}

impl DrawCommand {
    pub fn fill_rect(rect: Rect, fill: Rgb) -> Self {
        DrawCommand::Rect(RectCommand {
            rect,
            radius: 0.0,
            fill: Some(fill),
            outline: None,
        })
    }

    pub fn line(from: Point, to: Point, color: Rgb, width: f32) -> Self {
        DrawCommand::Line(LineCommand {
            from,
            to,
            color,
            width,
        })
    }

    pub fn text(origin: Point, text: impl Into<String>, font: FontSpec, color: Rgb) -> Self {
        DrawCommand::Text(TextCommand {
            origin,
            text: text.into(),
            font,
            color,
            anchor: TextAnchor::Start,
        })
    }
}

/// A complete, immutable drawing for one canvas
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            background,
            commands: Vec::new(),
        }
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn extend(&mut self, commands: impl IntoIterator<Item = DrawCommand>) {
        self.commands.extend(commands);
    }

    /// Iterate over the text rows in drawing order
    #[cfg(test)]
    pub fn texts(&self) -> impl Iterator<Item = &TextCommand> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text(t) => Some(t),
            _ => None,
        })
    }
}
