// SPDX-License-Identifier: MIT

//!
//! The hour span type
//!

use serde::{Deserialize, Deserializer, Serialize};
use std::ops::RangeInclusive;
use thiserror::Error;

/// The default first hour shown by day and week grids
pub const DEFAULT_HOUR_MIN: u8 = 6;

/// The default last hour shown by day and week grids
pub const DEFAULT_HOUR_MAX: u8 = 23;

/// Errors that can arise in relation to an [`HourSpan`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HourSpanError {
    /// The span would cover no time at all (or run backwards)
    #[error("Hour span `{min}` - `{max}` is empty (the first hour must be before the last)")]
    Empty { min: i64, max: i64 },

    /// An hour bound is outside of a day (must be 0 <= hour <= 24)
    #[error("Hour `{0}` is not allowed")]
    InvalidHour(i64),
}

/// The inclusive range of whole hours shown vertically in a day or week grid.
///
/// `min < max` always holds, so the span's length can be divided by freely.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HourSpan {
    min: u8,
    max: u8,
}

impl HourSpan {
    /// Create an [`HourSpan`] if `0 <= min < max <= 24`
    pub fn from(min: i64, max: i64) -> Result<Self, HourSpanError> {
        for hour in [min, max] {
            if !(0..=24).contains(&hour) {
                return Err(HourSpanError::InvalidHour(hour));
            }
        }
        if min >= max {
            return Err(HourSpanError::Empty { min, max });
        }
        Ok(HourSpan {
            min: min as u8,
            max: max as u8,
        })
    }

    /// The first hour shown
    pub fn min(&self) -> u8 {
        self.min
    }

    /// The last hour shown
    pub fn max(&self) -> u8 {
        self.max
    }

    /// The number of hours covered (always at least 1)
    pub fn hours(&self) -> u8 {
        self.max - self.min
    }

    /// Every whole hour that gets a ruler line, both ends included
    pub fn ruler_hours(&self) -> RangeInclusive<u8> {
        self.min..=self.max
    }
}

impl Default for HourSpan {
    fn default() -> Self {
        HourSpan {
            min: DEFAULT_HOUR_MIN,
            max: DEFAULT_HOUR_MAX,
        }
    }
}

#[derive(Deserialize)]
struct RawHourSpan {
    min: i64,
    max: i64,
}

impl<'de> Deserialize<'de> for HourSpan {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawHourSpan::deserialize(deserializer)?;
        HourSpan::from(raw.min, raw.max).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from() {
        // Should return error
        assert_eq!(
            HourSpan::from(9, 9),
            Err(HourSpanError::Empty { min: 9, max: 9 })
        );
        assert_eq!(
            HourSpan::from(17, 9),
            Err(HourSpanError::Empty { min: 17, max: 9 })
        );
        assert_eq!(HourSpan::from(-1, 9), Err(HourSpanError::InvalidHour(-1)));
        assert_eq!(HourSpan::from(0, 25), Err(HourSpanError::InvalidHour(25)));

        // Should be ok
        let span = HourSpan::from(0, 24).unwrap();
        assert_eq!(span.hours(), 24);
        let span = HourSpan::from(8, 9).unwrap();
        assert_eq!(span.hours(), 1);
    }

    #[test]
    fn ruler_hours() {
        let span = HourSpan::from(6, 9).unwrap();
        assert_eq!(span.ruler_hours().collect::<Vec<_>>(), vec![6, 7, 8, 9]);
    }

    #[test]
    fn default() {
        let span = HourSpan::default();
        assert_eq!((span.min(), span.max()), (6, 23));
    }

    #[test]
    fn deserialize() {
        let span: HourSpan = serde_json::from_str(r#"{"min": 7, "max": 20}"#).unwrap();
        assert_eq!((span.min(), span.max()), (7, 20));
        assert!(serde_json::from_str::<HourSpan>(r#"{"min": 20, "max": 7}"#).is_err());
    }
}
