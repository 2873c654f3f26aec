//! Diagram template: one header band plus an ordered list of elements
//!
//! Every visual in the deck is a [`Diagram`] value. Composing it against the
//! configuration yields a [`Scene`]; no pixels are touched here.

pub mod builders;
pub mod catalogue;

use crate::arrow::{Arrow, GeometryError};
use crate::card::{Card, wrap_text};
use crate::config::{DeckConfig, FontSpec, Rgb};
use crate::domain::{
    DrawCommand, EllipseCommand, Outline, Point, Rect, RectCommand, Scene, TextAnchor,
    TextCommand,
};
use crate::render::geometry::text;

/// Shape behind a centered label
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LabelShape {
    Rounded(f32),
    Ellipse,
}

/// Box or ellipse with text centered inside it
#[derive(Clone, Debug, PartialEq)]
pub struct Label {
    pub rect: Rect,
    pub text: String,
    pub font: FontSpec,
    pub color: Rgb,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
    pub shape: LabelShape,
}

/// Plain box without content
#[derive(Clone, Debug, PartialEq)]
pub struct Panel {
    pub rect: Rect,
    pub radius: f32,
    pub fill: Option<Rgb>,
    pub outline: Option<Outline>,
}

/// Free text anchored at its top-left corner; `\n` starts a new row
#[derive(Clone, Debug, PartialEq)]
pub struct Text {
    pub origin: Point,
    pub text: String,
    pub font: FontSpec,
    pub color: Rgb,
    /// Greedy wrap width in characters
    pub wrap: Option<usize>,
}

/// Arrow whose color and head size come from the configured style
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connector {
    pub from: Point,
    pub to: Point,
    /// Overrides the configured shaft width
    pub width: Option<f32>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Card(Card),
    Connector(Connector),
    Label(Label),
    Panel(Panel),
    Text(Text),
    Rule {
        from: Point,
        to: Point,
        color: Rgb,
        width: f32,
    },
    Dot {
        bounds: Rect,
        fill: Rgb,
    },
}

/// Parameterized visual: title, accent color and content
#[derive(Clone, Debug, PartialEq)]
pub struct Diagram {
    pub title: String,
    /// Header band color; the configured default when unset
    pub accent: Option<Rgb>,
    /// Line drawn under the band, before the elements
    pub subtitle: Option<String>,
    pub elements: Vec<Element>,
}

impl Diagram {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            accent: None,
            subtitle: None,
            elements: Vec::new(),
        }
    }

    pub fn accent(mut self, accent: Rgb) -> Self {
        self.accent = Some(accent);
        self
    }

    pub fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn push(&mut self, element: Element) -> &mut Self {
        self.elements.push(element);
        self
    }

    pub fn extend(&mut self, elements: impl IntoIterator<Item = Element>) -> &mut Self {
        self.elements.extend(elements);
        self
    }

    pub fn card(&mut self, card: Card) -> &mut Self {
        self.push(Element::Card(card))
    }

    pub fn connector(&mut self, from: Point, to: Point) -> &mut Self {
        self.push(Element::Connector(Connector {
            from,
            to,
            width: None,
        }))
    }

    pub fn connector_width(&mut self, from: Point, to: Point, width: f32) -> &mut Self {
        self.push(Element::Connector(Connector {
            from,
            to,
            width: Some(width),
        }))
    }

    pub fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        font: FontSpec,
        color: Rgb,
    ) -> &mut Self {
        self.push(Element::Text(Text {
            origin,
            text: text.into(),
            font,
            color,
            wrap: None,
        }))
    }

    pub fn panel(
        &mut self,
        rect: Rect,
        radius: f32,
        fill: Rgb,
        outline: Option<Outline>,
    ) -> &mut Self {
        self.push(Element::Panel(Panel {
            rect,
            radius,
            fill: Some(fill),
            outline,
        }))
    }

    /// Compose the header band and all elements into a scene
    pub fn compose(&self, config: &DeckConfig) -> Result<Scene, GeometryError> {
        let canvas = &config.canvas;
        let header = &config.header;
        let mut scene = Scene::new(canvas.width, canvas.height, canvas.background);

        scene.push(DrawCommand::fill_rect(
            Rect::new(0.0, 0.0, canvas.width as f32, header.height),
            self.accent.unwrap_or(header.default_accent),
        ));
        scene.push(DrawCommand::text(
            Point::new(header.title_x, header.title_y),
            self.title.clone(),
            header.title_font,
            header.title_color,
        ));
        if let Some(subtitle) = &self.subtitle {
            scene.push(DrawCommand::text(
                Point::new(header.subtitle_x, header.subtitle_y),
                subtitle.clone(),
                header.subtitle_font,
                header.subtitle_color,
            ));
        }

        for element in &self.elements {
            compose_element(element, config, &mut scene)?;
        }
        Ok(scene)
    }
}

fn compose_element(
    element: &Element,
    config: &DeckConfig,
    scene: &mut Scene,
) -> Result<(), GeometryError> {
    match element {
        Element::Card(card) => scene.extend(card.layout(&config.card).commands),
        Element::Connector(c) => {
            let mut arrow = Arrow::styled(c.from, c.to, &config.arrow);
            if let Some(width) = c.width {
                arrow = arrow.with_width(width);
            }
            scene.extend(arrow.commands()?);
        }
        Element::Label(label) => scene.extend(label_commands(label)),
        Element::Panel(panel) => scene.push(DrawCommand::Rect(RectCommand {
            rect: panel.rect,
            radius: panel.radius,
            fill: panel.fill,
            outline: panel.outline,
        })),
        Element::Text(t) => scene.extend(text_commands(t)),
        Element::Rule {
            from,
            to,
            color,
            width,
        } => scene.push(DrawCommand::line(*from, *to, *color, *width)),
        Element::Dot { bounds, fill } => scene.push(DrawCommand::Ellipse(EllipseCommand {
            bounds: *bounds,
            fill: Some(*fill),
            outline: None,
        })),
    }
    Ok(())
}

/// Rows of a block of text, honoring explicit newlines and an optional wrap width
fn text_rows(text: &str, wrap: Option<usize>) -> Vec<String> {
    match wrap {
        Some(width) => wrap_text(text, width),
        None => text.split('\n').map(str::to_string).collect(),
    }
}

fn text_commands(t: &Text) -> Vec<DrawCommand> {
    let step = t.font.size * text::LINE_SPACING;
    text_rows(&t.text, t.wrap)
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            DrawCommand::text(
                Point::new(t.origin.x, t.origin.y + i as f32 * step),
                row,
                t.font,
                t.color,
            )
        })
        .collect()
}

/// Background shape plus rows centered both ways inside the label box
fn label_commands(label: &Label) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    match label.shape {
        LabelShape::Rounded(radius) => commands.push(DrawCommand::Rect(RectCommand {
            rect: label.rect,
            radius,
            fill: label.fill,
            outline: label.outline,
        })),
        LabelShape::Ellipse => commands.push(DrawCommand::Ellipse(EllipseCommand {
            bounds: label.rect,
            fill: label.fill,
            outline: label.outline,
        })),
    }

    let rows = text_rows(&label.text, None);
    let size = label.font.size;
    let center = label.rect.center();
    let top = center.y - text::block_height(rows.len(), size) * 0.5;
    for (i, row) in rows.into_iter().enumerate() {
        commands.push(DrawCommand::Text(TextCommand {
            origin: Point::new(center.x, top + i as f32 * size * text::LINE_SPACING),
            text: row,
            font: label.font,
            color: label.color,
            anchor: TextAnchor::Middle,
        }));
    }
    commands
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_precedes_elements() {
        let config = DeckConfig::default();
        let mut diagram = Diagram::new("Simple architecture").accent(Rgb(26, 116, 142));
        diagram.card(Card::new(Rect::new(120.0, 260.0, 620.0, 1050.0), "Tools", ["Tracker"]));
        let scene = diagram.compose(&config).unwrap();

        assert_eq!(scene.width, config.canvas.width);
        match &scene.commands[0] {
            DrawCommand::Rect(band) => {
                assert_eq!(band.fill, Some(Rgb(26, 116, 142)));
                assert_eq!(band.rect.bottom, config.header.height);
                assert_eq!(band.rect.right, config.canvas.width as f32);
            }
            other => panic!("expected header band, got {:?}", other),
        }
        match &scene.commands[1] {
            DrawCommand::Text(title) => {
                assert_eq!(title.text, "Simple architecture");
                assert!(title.font.bold);
            }
            other => panic!("expected header title, got {:?}", other),
        }
        assert_eq!(scene.commands.len(), 2 + 3);
    }

    #[test]
    fn test_subtitle_follows_title() {
        let config = DeckConfig::default();
        let mut diagram = Diagram::new("Top tools").subtitle("Start with these first.");
        diagram.text(Point::new(48.0, 1220.0), "Footer", FontSpec::bold(48.0), Rgb(39, 60, 94));
        let scene = diagram.compose(&config).unwrap();
        let texts: Vec<_> = scene.texts().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["Top tools", "Start with these first.", "Footer"]);
    }

    #[test]
    fn test_default_accent() {
        let config = DeckConfig::default();
        let scene = Diagram::new("T").compose(&config).unwrap();
        match &scene.commands[0] {
            DrawCommand::Rect(band) => assert_eq!(band.fill, Some(config.header.default_accent)),
            other => panic!("expected header band, got {:?}", other),
        }
    }

    #[test]
    fn test_connector_uses_style_and_override() {
        let config = DeckConfig::default();
        let mut diagram = Diagram::new("T");
        diagram.connector_width(Point::new(620.0, 620.0), Point::new(760.0, 620.0), 10.0);
        diagram.connector(Point::new(5.0, 5.0), Point::new(5.0, 5.0));
        let scene = diagram.compose(&config).unwrap();
        // Degenerate connector adds nothing
        assert_eq!(scene.commands.len(), 2 + 2);
        match &scene.commands[2] {
            DrawCommand::Line(line) => {
                assert_eq!(line.width, 10.0);
                assert_eq!(line.color, config.arrow.color);
            }
            other => panic!("expected shaft, got {:?}", other),
        }
    }

    #[test]
    fn test_invalid_connector_fails_compose() {
        let config = DeckConfig::default();
        let mut diagram = Diagram::new("T");
        diagram.connector(Point::new(f32::NAN, 0.0), Point::new(1.0, 1.0));
        assert!(diagram.compose(&config).is_err());
    }

    #[test]
    fn test_label_rows_centered() {
        let label = Label {
            rect: Rect::new(950.0, 450.0, 1450.0, 950.0),
            text: "Cursor\nAgent".to_string(),
            font: FontSpec::bold(64.0),
            color: Rgb::WHITE,
            fill: Some(Rgb(28, 83, 160)),
            outline: None,
            shape: LabelShape::Ellipse,
        };
        let commands = label_commands(&label);
        assert_eq!(commands.len(), 3);
        let rows: Vec<_> = commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text(t) => Some(t),
                _ => None,
            })
            .collect();
        assert!(rows.iter().all(|r| r.anchor == TextAnchor::Middle && r.origin.x == 1200.0));
        // Block is vertically centered on the box
        let block = text::block_height(2, 64.0);
        let top = rows[0].origin.y;
        assert!(((top + block * 0.5) - 700.0).abs() < 1e-3);
        assert!(rows[1].origin.y > rows[0].origin.y);
    }

    #[test]
    fn test_text_wrap_and_newlines() {
        let wrapped = Text {
            origin: Point::new(10.0, 20.0),
            text: "8) Build first skill".to_string(),
            font: FontSpec::bold(33.0),
            color: Rgb(27, 51, 91),
            wrap: Some(16),
        };
        assert_eq!(text_commands(&wrapped).len(), 2);

        let explicit = Text {
            wrap: None,
            text: "Input: issue key\nOutput: summary".to_string(),
            ..wrapped
        };
        let commands = text_commands(&explicit);
        assert_eq!(commands.len(), 2);
        match &commands[1] {
            DrawCommand::Text(t) => {
                assert_eq!(t.text, "Output: summary");
                assert_eq!(t.origin.y, 20.0 + 33.0 * text::LINE_SPACING);
            }
            other => panic!("expected text, got {:?}", other),
        }
    }
}
