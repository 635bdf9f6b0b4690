// SPDX-License-Identifier: MIT

//!
//! Tables
//!
//! A generic row/column structure.  The month view is a [`Table`] of
//! [`MonthCell`]s which a frontend (or a document assembler) draws with the
//! table's borders and backgrounds.
//!

use crate::{PackedCanvas, TableStyle, TextStyle};
use serde::Serialize;
use std::fmt::Debug;

/// A paragraph of text whose position is left to whatever lays out the
/// enclosing table cell or page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    pub text: String,
    pub style: TextStyle,
}

impl Label {
    pub fn new<S: Into<String>>(text: S, style: &TextStyle) -> Self {
        Label {
            text: text.into(),
            style: style.clone(),
        }
    }
}

/// A populated day of the month table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayCell {
    pub day: u32,

    /// The day number
    pub label: Label,

    /// The day's events
    pub events: PackedCanvas,
}

/// One cell of the month table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MonthCell {
    /// Padding before the 1st or after the last day
    Blank,
    Day(DayCell),
}

impl MonthCell {
    pub fn day(&self) -> Option<u32> {
        match self {
            MonthCell::Blank => None,
            MonthCell::Day(cell) => Some(cell.day),
        }
    }
}

/// A header row of labels above rows of cells
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table<C> {
    pub col_widths: Vec<f64>,

    /// Header row first
    pub row_heights: Vec<f64>,
    pub header: Vec<Label>,
    pub rows: Vec<Vec<C>>,
    pub style: TableStyle,
}

impl<C> Table<C> {
    pub fn width(&self) -> f64 {
        self.col_widths.iter().sum()
    }

    pub fn height(&self) -> f64 {
        self.row_heights.iter().sum()
    }

    /// The height of the header row
    pub fn header_height(&self) -> f64 {
        self.row_heights.first().copied().unwrap_or_default()
    }

    /// The height of body row `index`
    pub fn row_height(&self, index: usize) -> f64 {
        self.row_heights.get(index + 1).copied().unwrap_or_default()
    }

    /// The left edge of each column
    pub fn column_offsets(&self) -> Vec<f64> {
        self.col_widths
            .iter()
            .scan(0.0, |x, width| {
                let left = *x;
                *x += width;
                Some(left)
            })
            .collect()
    }
}
