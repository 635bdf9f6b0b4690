// SPDX-License-Identifier: MIT

//!
//! Layout errors
//!

use chrono::NaiveDate;
use paper_calendar_core::MonthError;
use thiserror::Error;

/// Errors raised when a view is asked to lay itself out with parameters that
/// can't work.  These are configuration mistakes, so nothing is clamped or
/// guessed: the caller gets the error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// Canvases must have a positive, finite width and height
    #[error("Canvas size `{width}` x `{height}` is not allowed (both must be positive)")]
    CanvasSize { width: f64, height: f64 },

    /// A length (padding, column width, etc) is negative or not finite
    #[error("Layout parameter `{name}` can't be `{value}`")]
    Parameter { name: &'static str, value: f64 },

    /// Week grids are laid out Monday first
    #[error("A week must start on a Monday, but {0} is a {1}")]
    WeekStart(NaiveDate, chrono::Weekday),

    #[error(transparent)]
    Month(#[from] MonthError),
}
