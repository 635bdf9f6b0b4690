// SPDX-License-Identifier: MIT

//!
//! Primitives
//!

use crate::{BlockStyle, LineStyle, Point, Region, TextStyle, colour::Colour};
use serde::Serialize;
use std::fmt::Debug;

/// Which point of the text its position refers to (horizontally).  The
/// position is always on the text's baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Information needed to draw text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextOut {
    pub position: Point,
    pub anchor: TextAnchor,
    pub text: String,
    pub colour: Colour,
    pub font_name: String,
    pub font_size: f64,
}

impl TextOut {
    /// Text set in a paragraph style (only the font and colour are taken)
    pub fn styled<S: Into<String>>(
        text: S,
        position: Point,
        anchor: TextAnchor,
        style: &TextStyle,
    ) -> Self {
        TextOut {
            position,
            anchor,
            text: text.into(),
            colour: style.colour,
            font_name: style.font_name.clone(),
            font_size: style.font_size,
        }
    }
}

/// Information needed to draw a filled (possibly rounded) box
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledBox {
    pub region: Region,
    pub fill_colour: Colour,
    pub border_style: Option<LineStyle>,
    pub corner_radius: f64,
}

/// Information needed to draw a filled circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FilledCircle {
    pub centre: Point,
    pub radius: f64,
    pub fill_colour: Colour,
}

/// Information needed to draw one of the hour ruler's lines
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HorizontalLine {
    pub y: f64,
    pub x_start: f64,
    pub x_end: f64,
    pub style: LineStyle,
}

/// One event (or one band of a month cell) as drawn: a rounded rectangle with
/// a label centred in it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualBlock {
    pub rect: FilledBox,
    pub label: TextOut,
}

impl VisualBlock {
    /// Where the block is
    pub fn region(&self) -> Region {
        self.rect.region
    }
}

/// Anything that can be added to a [`Canvas`](crate::Canvas)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    Block(VisualBlock),
    Line(HorizontalLine),
    Text(TextOut),
    Circle(FilledCircle),
}

impl From<VisualBlock> for Shape {
    fn from(value: VisualBlock) -> Self {
        Shape::Block(value)
    }
}

impl From<HorizontalLine> for Shape {
    fn from(value: HorizontalLine) -> Self {
        Shape::Line(value)
    }
}

impl From<TextOut> for Shape {
    fn from(value: TextOut) -> Self {
        Shape::Text(value)
    }
}

impl From<FilledCircle> for Shape {
    fn from(value: FilledCircle) -> Self {
        Shape::Circle(value)
    }
}

/// Label text for a block drawn in `style`
pub(crate) fn block_label(text: &str, position: Point, style: &BlockStyle) -> TextOut {
    TextOut {
        position,
        anchor: TextAnchor::Middle,
        text: text.to_string(),
        colour: style.text_colour,
        font_name: style.font_name.clone(),
        font_size: style.font_size,
    }
}
