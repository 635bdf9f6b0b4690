// SPDX-License-Identifier: MIT

//!
//! The calendar event type
//!

use crate::{Name, NameError};
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to an [`Event`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EventError {
    /// The event's end instant is before its begin instant
    #[error("Event `{name}` ends ({end}) before it begins ({begin})")]
    EndsBeforeBegin {
        name: String,
        begin: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error(transparent)]
    Name(#[from] NameError),
}

/// A named interval with a begin and an end instant.
///
/// Both instants are in the same local time frame (no timezone handling is
/// done anywhere in Paper Calendar).  An event does not need to fall on the
/// day shown by a view, so the views filter events before placing them.
#[derive(Serialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Event {
    /// What is shown on the event's block
    name: Name,

    /// When the event begins
    begin: NaiveDateTime,

    /// When the event ends (never before `begin`)
    end: NaiveDateTime,
}

impl Event {
    /// Create an [`Event`] if `begin <= end`
    pub fn from(name: Name, begin: NaiveDateTime, end: NaiveDateTime) -> Result<Self, EventError> {
        if end < begin {
            return Err(EventError::EndsBeforeBegin {
                name: name.to_string(),
                begin,
                end,
            });
        }
        Ok(Event { name, begin, end })
    }

    /// Get the event's name
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Get the instant the event begins
    pub fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    /// Get the instant the event ends
    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// The calendar date the event begins on
    pub fn begin_date(&self) -> NaiveDate {
        self.begin.date()
    }

    /// The time of day the event begins at
    pub fn begin_time(&self) -> NaiveTime {
        self.begin.time()
    }

    /// The time of day the event ends at
    pub fn end_time(&self) -> NaiveTime {
        self.end.time()
    }

    /// Whether the event runs past the end of the day it begins on
    pub fn ends_on_a_later_day(&self) -> bool {
        self.end.date() > self.begin_date()
    }

    /// Whether the event begins on the given date
    pub fn begins_on(&self, date: NaiveDate) -> bool {
        self.begin_date() == date
    }

    /// Whether the event begins in the given month (`month` is 1-based)
    pub fn begins_in_month(&self, year: i32, month: u32) -> bool {
        self.begin.year() == year && self.begin.month() == month
    }
}

#[derive(Deserialize)]
struct RawEvent {
    name: Name,
    begin: NaiveDateTime,
    end: NaiveDateTime,
}

impl<'de> Deserialize<'de> for Event {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawEvent::deserialize(deserializer)?;
        Event::from(raw.name, raw.begin, raw.end).map_err(serde::de::Error::custom)
    }
}
