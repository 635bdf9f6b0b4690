// SPDX-License-Identifier: MIT

//!
//! Layout params
//!

use crate::{DEFAULT_MAX_EVENTS, DEFAULT_PACKING_PADDING, Position};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Per-view measurements (column widths, row heights, etc).  A row here is
/// one hour of a day/week grid, or one week of the month table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableMeasurements {
    pub col_width: f64,

    /// Width reserved on the left for the hour labels (day/week only)
    pub time_width: Option<f64>,
    pub row_height: f64,
    pub header_height: f64,
    pub line_width: f64,
}

/// Parameters for the day and week grids
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridParams {
    /// Gap between the time column and the first event column
    pub padding: f64,

    /// Thickness of the hour ruler lines
    pub line_width: f64,

    /// Width reserved on the left for the hour labels
    pub time_column_width: f64,

    /// Height reserved at the top of the week grid for the weekday headings
    pub header_height: f64,
}

impl Default for GridParams {
    fn default() -> Self {
        GridParams {
            padding: 3.0,
            line_width: 0.5,
            time_column_width: 8.0,
            header_height: 10.0,
        }
    }
}

/// Parameters for packing a day's events into a month cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackingParams {
    /// Gap between two bands
    pub padding: f64,

    /// The most bands drawn; any further events are dropped
    pub max_events: usize,
}

impl Default for PackingParams {
    fn default() -> Self {
        PackingParams {
            padding: DEFAULT_PACKING_PADDING,
            max_events: DEFAULT_MAX_EVENTS,
        }
    }
}

/// A box that specifies the location and size of something (e.g. an event's
/// block)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Region {
    /// The smallest x/y values (boxes grow up and to the right from here)
    pub position: Position,

    /// The width of the box (from which the largest x value can be derived)
    pub width: f64,

    /// The height of the box (from which the largest y value can be derived)
    pub height: f64,
}

impl Region {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Region {
            position: Position { x, y },
            width,
            height,
        }
    }

    /// Calculate the largest x value of the box
    pub fn max_x(&self) -> f64 {
        self.position.x + self.width
    }

    /// Calculate the largest y value of the box (i.e. how far the box grows
    /// upwards)
    pub fn max_y(&self) -> f64 {
        self.position.y + self.height
    }

    /// The middle of the box
    pub fn centre(&self) -> Position {
        Position {
            x: self.position.x + self.width / 2.0,
            y: self.position.y + self.height / 2.0,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn region() {
        let region = Region::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(region.max_x(), 40.0);
        assert_eq!(region.max_y(), 60.0);
        assert_eq!(region.centre(), Position { x: 25.0, y: 40.0 });
    }
}
