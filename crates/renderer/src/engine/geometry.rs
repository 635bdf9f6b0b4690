// SPDX-License-Identifier: MIT

//!
//! Geometry primitives: where a time of day lands on a canvas
//!

use crate::Region;
use chrono::{NaiveTime, Timelike};
use paper_calendar_core::{Event, HourSpan};

/// The time of day as a number of hours, e.g. 13:30:00 is `13.5`.  The result
/// is always `0.0 <= hours < 24.0`.
pub fn time_to_fraction(time: NaiveTime) -> f64 {
    f64::from(time.hour()) + f64::from(time.minute()) / 60.0 + f64::from(time.second()) / 3600.0
}

/// The y value of an hour on a canvas of the given height.  The span's last
/// hour is at `y = 0` and its first hour at `y = canvas_height`, so later hours
/// have smaller y values.
///
/// [`HourSpan`] is never empty, so this never divides by zero.
pub fn y_for_hour(hour_fraction: f64, span: HourSpan, canvas_height: f64) -> f64 {
    let hour_min = f64::from(span.min());
    let hour_max = f64::from(span.max());
    canvas_height * (hour_max - hour_fraction) / (hour_max - hour_min)
}

/// How far to shift a y value so that blocks clear the ruler lines above them:
/// one line width for every whole hour boundary crossed since the span began
pub fn line_width_offset(hour_fraction: f64, span: HourSpan, line_width: f64) -> f64 {
    (hour_fraction - f64::from(span.min())).floor() * line_width
}

/// A vertical time axis: an hour span laid over a height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeAxis {
    span: HourSpan,
    height: f64,

    /// Ruler line width to compensate for (`0.0` means no compensation)
    line_width: f64,
}

impl TimeAxis {
    pub fn new(span: HourSpan, height: f64) -> Self {
        TimeAxis {
            span,
            height,
            line_width: 0.0,
        }
    }

    /// Shift blocks to clear ruler lines of the given width
    pub fn with_line_width(self, line_width: f64) -> Self {
        TimeAxis { line_width, ..self }
    }

    pub fn span(&self) -> HourSpan {
        self.span
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// The y value of a (fractional) hour
    pub fn y_for_hour(&self, hour_fraction: f64) -> f64 {
        y_for_hour(hour_fraction, self.span, self.height)
            + line_width_offset(hour_fraction, self.span, self.line_width)
    }

    /// The region covering `begin` to `end` (as hour fractions) in a column.
    /// The region's y is its lower edge (the end time) and its height is never
    /// negative.
    pub fn hours_region(&self, begin: f64, end: f64, x: f64, width: f64) -> Region {
        let y_begin = self.y_for_hour(begin);
        let y_end = self.y_for_hour(end);
        Region::new(x, y_begin.min(y_end), width, (y_begin - y_end).abs())
    }

    /// The region for an event in a column.  An event that runs past midnight
    /// is cut off at the end of the span.
    pub fn event_region(&self, event: &Event, x: f64, width: f64) -> Region {
        let begin = time_to_fraction(event.begin_time());
        let end = if event.ends_on_a_later_day() {
            f64::from(self.span.max())
        } else {
            time_to_fraction(event.end_time())
        };
        self.hours_region(begin, end, x, width)
    }
}
