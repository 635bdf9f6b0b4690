// SPDX-License-Identifier: MIT

//!
//! *Part of the wider Paper Calendar project*
//!
//! This crate defines the basic datatypes used across the Paper Calendar
//! project (layout engine, renderers, command line tool).
//!
//! Each type validates itself on construction (and on deserialisation), so if
//! a value exists the developer can be sure it's valid.  In particular:
//!
//! - An [`Event`] never ends before it begins
//! - An [`HourSpan`] is never empty, so it is always safe to divide by its
//!   length
//! - Month lengths come from [`days_in_month`] rather than from probing for
//!   invalid dates
//!

mod calendar;
mod event;
mod hour_span;
mod name;

pub use calendar::*;
pub use event::*;
pub use hour_span::*;
pub use name::*;
