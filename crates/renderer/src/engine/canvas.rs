// SPDX-License-Identifier: MIT

//!
//! Canvas
//!

use crate::{
    FilledCircle, HorizontalLine, LayoutError, Shape, Size, TextOut, VisualBlock,
    check_canvas_size,
};
use serde::Serialize;
use std::fmt::Debug;

/// The surface holding everything drawn for one view (or one month cell).
///
/// The size is fixed when the canvas is created.  Shapes are only ever
/// appended, and only by the builders in this crate, so a canvas handed out
/// is read-only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Canvas {
    size: Size,
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Create an empty canvas (both dimensions must be positive)
    pub fn new(width: f64, height: f64) -> Result<Self, LayoutError> {
        check_canvas_size(width, height)?;
        Ok(Canvas {
            size: Size {
                x: width,
                y: height,
            },
            shapes: Vec::new(),
        })
    }

    pub(crate) fn push<S: Into<Shape>>(&mut self, shape: S) {
        self.shapes.push(shape.into());
    }

    pub(crate) fn extend<S, I>(&mut self, shapes: I)
    where
        S: Into<Shape>,
        I: IntoIterator<Item = S>,
    {
        self.shapes.extend(shapes.into_iter().map(Into::into));
    }

    pub fn width(&self) -> f64 {
        self.size.x
    }

    pub fn height(&self) -> f64 {
        self.size.y
    }

    /// Everything drawn, in drawing order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// The event blocks, in drawing order
    pub fn blocks(&self) -> impl Iterator<Item = &VisualBlock> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Block(block) => Some(block),
            _ => None,
        })
    }

    /// The ruler lines, in drawing order
    pub fn lines(&self) -> impl Iterator<Item = &HorizontalLine> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Line(line) => Some(line),
            _ => None,
        })
    }

    /// Free-standing text (block labels are not included)
    pub fn texts(&self) -> impl Iterator<Item = &TextOut> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &FilledCircle> {
        self.shapes.iter().filter_map(|shape| match shape {
            Shape::Circle(circle) => Some(circle),
            _ => None,
        })
    }
}
