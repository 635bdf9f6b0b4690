// SPDX-License-Identifier: MIT

//!
//! Frontends: turn engine output into something viewable
//!

pub mod svg;
