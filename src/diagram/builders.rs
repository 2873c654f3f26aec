//! Common arrangements built from data: card grids, flows, tables, checklists

use crate::card::Card;
use crate::config::{FontSpec, Palette, Rgb};
use crate::domain::{Grid, Outline, Point, Rect};

use super::{Connector, Element, Label, LabelShape, Panel, Text};

/// Cards laid out on `grid`; each grid row cycles through `row_fills`
pub fn card_grid<S: Into<String>>(
    grid: &Grid,
    cards: impl IntoIterator<Item = (S, Vec<S>)>,
    row_fills: &[Rgb],
) -> Vec<Element> {
    cards
        .into_iter()
        .enumerate()
        .map(|(i, (title, lines))| {
            let mut card = Card::new(grid.cell(i), title, lines);
            if !row_fills.is_empty() {
                card = card.with_fill(row_fills[grid.row_of(i) % row_fills.len()]);
            }
            Element::Card(card)
        })
        .collect()
}

/// Arrows joining consecutive boxes, right edge to the next left edge
///
/// Each arrow stops `trim` short of the next box so the head stays visible.
pub fn flow_connectors(boxes: &[Rect], trim: f32, width: Option<f32>) -> Vec<Element> {
    boxes
        .windows(2)
        .map(|pair| {
            let from = pair[0].right_mid();
            let next = pair[1].left_mid();
            Element::Connector(Connector {
                from,
                to: Point::new(next.x - trim, from.y),
                width,
            })
        })
        .collect()
}

/// A single row of cards joined by arrows
pub fn card_flow<S: Into<String>>(
    grid: &Grid,
    cards: impl IntoIterator<Item = (S, Vec<S>)>,
    fills: &[Rgb],
    trim: f32,
    width: Option<f32>,
) -> Vec<Element> {
    let mut elements = Vec::new();
    let mut boxes = Vec::new();
    for (i, (title, lines)) in cards.into_iter().enumerate() {
        let rect = grid.cell(i);
        let mut card = Card::new(rect, title, lines);
        if !fills.is_empty() {
            card = card.with_fill(fills[i % fills.len()]);
        }
        boxes.push(rect);
        elements.push(Element::Card(card));
    }
    elements.extend(flow_connectors(&boxes, trim, width));
    elements
}

/// Rounded box holding a few rows of text at a fixed left inset
#[derive(Clone, Debug, PartialEq)]
pub struct Callout {
    pub rect: Rect,
    pub fill: Rgb,
    pub outline: Outline,
    pub color: Rgb,
    /// (offset from the box top-left, text, font)
    pub rows: Vec<(Point, String, FontSpec)>,
}

impl Callout {
    pub fn new(rect: Rect, fill: Rgb, outline: Rgb, color: Rgb) -> Self {
        Self {
            rect,
            fill,
            outline: Outline {
                color: outline,
                width: 3.0,
            },
            color,
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, offset: Point, text: impl Into<String>, font: FontSpec) -> Self {
        self.rows.push((offset, text.into(), font));
        self
    }

    pub fn elements(self) -> Vec<Element> {
        let mut elements = vec![Element::Panel(Panel {
            rect: self.rect,
            radius: 20.0,
            fill: Some(self.fill),
            outline: Some(self.outline),
        })];
        for (offset, text, font) in self.rows {
            elements.push(Element::Text(Text {
                origin: Point::new(self.rect.left + offset.x, self.rect.top + offset.y),
                text,
                font,
                color: self.color,
                wrap: None,
            }));
        }
        elements
    }
}

/// Table with a filled header row and separator lines between body rows
#[derive(Clone, Debug, PartialEq)]
pub struct Table {
    /// Column boundaries: `n + 1` x positions for `n` columns
    pub columns: Vec<f32>,
    pub top: f32,
    pub bottom: f32,
    pub header_height: f32,
    /// Gap between the header and the first row
    pub body_gap: f32,
    pub row_height: f32,
    pub cell_inset: Point,
    pub frame_fill: Rgb,
    pub frame_outline: Rgb,
    pub header_fill: Rgb,
    pub header_font: FontSpec,
    pub separator: Rgb,
    pub text_color: Rgb,
    pub cell_font: FontSpec,
}

impl Table {
    pub fn column_count(&self) -> usize {
        self.columns.len().saturating_sub(1)
    }

    /// Lay out the frame, header and `rows`; extra cells in a row are ignored
    pub fn elements<S: AsRef<str>>(&self, headers: &[S], rows: &[Vec<S>]) -> Vec<Element> {
        let n = self.column_count();
        let (Some(&left), Some(&right)) = (self.columns.first(), self.columns.last()) else {
            return Vec::new();
        };
        let mut elements = vec![Element::Panel(Panel {
            rect: Rect::new(left, self.top, right, self.bottom),
            radius: 18.0,
            fill: Some(self.frame_fill),
            outline: Some(Outline {
                color: self.frame_outline,
                width: 4.0,
            }),
        })];

        for (i, header) in headers.iter().take(n).enumerate() {
            elements.push(Element::Panel(Panel {
                rect: Rect::new(
                    self.columns[i],
                    self.top,
                    self.columns[i + 1],
                    self.top + self.header_height,
                ),
                radius: 0.0,
                fill: Some(self.header_fill),
                outline: None,
            }));
            elements.push(Element::Text(Text {
                origin: Point::new(self.columns[i] + 24.0, self.top + 28.0),
                text: header.as_ref().to_string(),
                font: self.header_font,
                color: Rgb::WHITE,
                wrap: None,
            }));
        }

        let mut y = self.top + self.header_height + self.body_gap;
        for row in rows {
            let row_bottom = y + self.row_height;
            elements.push(Element::Rule {
                from: Point::new(left, row_bottom),
                to: Point::new(right, row_bottom),
                color: self.separator,
                width: 2.0,
            });
            for (i, cell) in row.iter().take(n).enumerate() {
                // First column reads as the row key
                let font = if i == 0 {
                    FontSpec {
                        bold: true,
                        ..self.cell_font
                    }
                } else {
                    self.cell_font
                };
                elements.push(Element::Text(Text {
                    origin: Point::new(self.columns[i] + self.cell_inset.x, y + self.cell_inset.y),
                    text: cell.as_ref().to_string(),
                    font,
                    color: self.text_color,
                    wrap: None,
                }));
            }
            y = row_bottom;
        }
        elements
    }
}

/// Rows of text stepping down from `origin`, each prefixed by `marker`
pub fn checklist<S: AsRef<str>>(
    origin: Point,
    items: &[S],
    marker: Option<&str>,
    step: f32,
    font: FontSpec,
    color: Rgb,
) -> Vec<Element> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let text = match marker {
                Some(marker) => format!("{marker}{}", item.as_ref()),
                None => item.as_ref().to_string(),
            };
            Element::Text(Text {
                origin: Point::new(origin.x, origin.y + i as f32 * step),
                text,
                font,
                color,
                wrap: None,
            })
        })
        .collect()
}

/// Rounded label with centered text
pub fn pill(
    rect: Rect,
    radius: f32,
    text: impl Into<String>,
    font: FontSpec,
    fill: Rgb,
    color: Rgb,
) -> Element {
    Element::Label(Label {
        rect,
        text: text.into(),
        font,
        color,
        fill: Some(fill),
        outline: None,
        shape: LabelShape::Rounded(radius),
    })
}

/// Mock desktop application window: dark frame, title bar, traffic lights
pub fn app_shell(title: &str, palette: &Palette) -> Vec<Element> {
    let frame = Rect::new(220.0, 190.0, 2180.0, 1200.0);
    let mut elements = vec![
        Element::Panel(Panel {
            rect: frame,
            radius: 24.0,
            fill: Some(palette.shell),
            outline: Some(Outline {
                color: Rgb(75, 87, 112),
                width: 4.0,
            }),
        }),
        Element::Panel(Panel {
            rect: Rect::new(frame.left, frame.top, frame.right, frame.top + 70.0),
            radius: 0.0,
            fill: Some(Rgb(34, 41, 57)),
            outline: None,
        }),
        Element::Text(Text {
            origin: Point::new(270.0, 210.0),
            text: "Editor - Example UI".to_string(),
            font: FontSpec::bold(34.0),
            color: palette.shell_text,
            wrap: None,
        }),
        Element::Text(Text {
            origin: Point::new(790.0, 210.0),
            text: title.to_string(),
            font: FontSpec::regular(34.0),
            color: palette.shell_muted,
            wrap: None,
        }),
    ];
    let lights = [Rgb(250, 106, 106), Rgb(245, 183, 78), Rgb(93, 208, 105)];
    for (i, fill) in lights.into_iter().enumerate() {
        let x = 236.0 + i as f32 * 30.0;
        elements.push(Element::Dot {
            bounds: Rect::new(x, 213.0, x + 20.0, 233.0),
            fill,
        });
    }
    elements
}
