// SPDX-License-Identifier: MIT

//!
//! Helper functions
//!

use crate::LayoutError;

/// Canvas dimensions must both be positive and finite
pub(crate) fn check_canvas_size(width: f64, height: f64) -> Result<(), LayoutError> {
    let usable = |value: f64| value.is_finite() && value > 0.0;
    if usable(width) && usable(height) {
        Ok(())
    } else {
        Err(LayoutError::CanvasSize { width, height })
    }
}

/// Lengths such as padding may be zero but not negative
pub(crate) fn check_length(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::Parameter { name, value })
    }
}

/// Widths such as a week column's must be strictly positive
pub(crate) fn check_width(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::Parameter { name, value })
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
