// SPDX-License-Identifier: MIT

//!
//! The `paper-calendar-renderer` layout engine
//!
//! Everything here works in canvas units with `y` increasing upwards: `(0, 0)`
//! is a canvas's bottom left corner.  Frontends flip the axis as needed.
//!
//! Layers, from the bottom up:
//!
//! - geometry: times of day to y values ([`TimeAxis`])
//! - placement: events to labelled blocks ([`place_single_span`],
//!   [`place_week_columns`], [`fit_blocks`])
//! - grids: hour rulers, week headings, and the month table
//! - views: titled day, week, and month [`Page`]s
//!

mod canvas;
mod consts;
mod error;
mod geometry;
mod grid;
mod helpers;
mod layout_params;
mod month_walk;
mod placement;
mod point;
mod primitives;
mod style;
mod table;
mod views;

pub(crate) use helpers::*;

pub use canvas::*;
pub use consts::*;
pub use error::*;
pub use geometry::*;
pub use grid::*;
pub use layout_params::*;
pub use month_walk::*;
pub use placement::*;
pub use point::*;
pub use primitives::*;
pub use style::*;
pub use table::*;
pub use views::*;
