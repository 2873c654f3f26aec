//! Card layout: rounded box, bold title, bulleted word-wrapped lines

use crate::config::{CardStyle, Rgb};
use crate::domain::{DrawCommand, Outline, Point, Rect, RectCommand};

/// Prefix written before the first row of every card line
pub const BULLET: &str = "- ";

/// Greedy word wrap to at most `width` characters per row
///
/// Words are never split: a word longer than `width` gets a row of its own.
/// Runs of whitespace collapse to single spaces and existing newlines are
/// treated as ordinary whitespace, so wrapping wrapped text is a no-op.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if current.is_empty() {
            current.push_str(word);
            current_len = word_len;
        } else if current_len + 1 + word_len <= width {
            current.push(' ');
            current.push_str(word);
            current_len += 1 + word_len;
        } else {
            rows.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Title plus bullet lines inside a box
#[derive(Clone, Debug, PartialEq)]
pub struct Card {
    pub rect: Rect,
    pub title: String,
    pub lines: Vec<String>,
    /// Overrides the style fill
    pub fill: Option<Rgb>,
}

/// Laid-out card: its drawing commands and where the content cursor stopped
#[derive(Clone, Debug, PartialEq)]
pub struct CardLayout {
    pub commands: Vec<DrawCommand>,
    /// Vertical cursor after the last line
    pub cursor_end: f32,
}

impl CardLayout {
    /// Content ran past the bottom of `rect`. Nothing is clipped either way.
    pub fn overflows(&self, rect: &Rect) -> bool {
        self.cursor_end > rect.bottom
    }
}

impl Card {
    pub fn new<S: Into<String>>(
        rect: Rect,
        title: impl Into<String>,
        lines: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            rect,
            title: title.into(),
            lines: lines.into_iter().map(Into::into).collect(),
            fill: None,
        }
    }

    pub fn with_fill(mut self, fill: Rgb) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Lay the card out against `style`
    pub fn layout(&self, style: &CardStyle) -> CardLayout {
        let r = &self.rect;
        let mut commands = vec![DrawCommand::Rect(RectCommand {
            rect: *r,
            radius: style.radius,
            fill: Some(self.fill.unwrap_or(style.fill)),
            outline: Some(Outline {
                color: style.border,
                width: style.border_width,
            }),
        })];

        commands.push(DrawCommand::text(
            Point::new(r.left + style.title_inset_x, r.top + style.title_inset_y),
            self.title.clone(),
            style.title_font,
            style.title_color,
        ));

        let row_step = style.body_font.size * crate::render::geometry::text::LINE_SPACING;
        let mut cursor = r.top + style.body_top;
        for line in &self.lines {
            let rows = wrap_text(line, style.wrap_width);
            let x = r.left + style.body_inset_x;
            for (i, row) in rows.iter().enumerate() {
                let text = if i == 0 {
                    format!("{BULLET}{row}")
                } else {
                    row.clone()
                };
                commands.push(DrawCommand::text(
                    Point::new(x, cursor + i as f32 * row_step),
                    text,
                    style.body_font,
                    style.body_color,
                ));
            }
            let extra_rows = rows.len().saturating_sub(1) as f32;
            cursor += style.row_height + extra_rows * style.extra_row_height;
        }

        let layout = CardLayout {
            commands,
            cursor_end: cursor,
        };
        if layout.overflows(r) {
            log::debug!(
                "Card '{}' content ends at y={} past its bottom edge y={}",
                self.title,
                layout.cursor_end,
                r.bottom
            );
        }
        layout
    }
}
