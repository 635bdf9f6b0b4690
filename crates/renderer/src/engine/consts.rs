// SPDX-License-Identifier: MIT

//!
//! Constants
//!

/// Number of day columns in a week grid and in the month table
pub const DAYS_IN_WEEK: usize = 7;

/// Block corner radius is `max(width, height) / BLOCK_CORNER_DIVISOR`
pub const BLOCK_CORNER_DIVISOR: f64 = 100.0;

/// Most events shown in a month cell
pub const DEFAULT_MAX_EVENTS: usize = 4;

/// Gap between two event bands in a month cell
pub const DEFAULT_PACKING_PADDING: f64 = 2.0;

/// Share of a month column's width given to the cell's event bands
pub const MONTH_CELL_WIDTH_RATIO: f64 = 0.92;

/// Share of a month cell's remaining height given to the event bands
pub const MONTH_CELL_HEIGHT_RATIO: f64 = 0.8;

/// How far below its ruler line an hour label's baseline sits
pub const HOUR_LABEL_DROP: f64 = 6.0;

/// Default radius of a standalone event bubble
pub const DEFAULT_BUBBLE_RADIUS: f64 = 5.0;
