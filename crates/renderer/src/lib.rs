// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Paper Calendar project*
//!
//! This crate lays out printable calendar pages.  The core of the crate is a
//! platform independent engine responsible for:
//!
//! - Mapping times of day onto a vertical axis
//! - Placing events as labelled blocks (day and week schedules)
//! - Packing a day's events into a fixed month cell
//! - Composing titled day, week, and month pages
//!
//! The engine only describes what to draw.  The rest of the crate holds the
//! frontends that draw it; currently there is just one, for SVG.
//!
//! ## Usage
//!
//! ```no_run
//! use paper_calendar_renderer::{CalendarStyle, month_view, svg};
//!
//! let page = month_view(2025, 4, &[], &CalendarStyle::default()).unwrap();
//! let document = svg::page_to_svg(&page);
//! ```
//!

pub mod colour;
pub mod engine;
pub mod frontends;

pub use colour::*;
pub use engine::*;
pub use frontends::svg;
