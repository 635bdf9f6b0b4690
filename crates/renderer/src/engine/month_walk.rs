// SPDX-License-Identifier: MIT

//!
//! Month walk
//!
//! Walks the cells of a month table in reading order: blanks before the 1st,
//! each day of the month, then blanks to finish the last week.
//!

use crate::DAYS_IN_WEEK;
use paper_calendar_core::{MonthError, days_in_month, first_weekday_of_month};
use serde::Serialize;

/// The highest day number a walk will ever reach
const MAX_DAY: u32 = 31;

/// One cell of the month table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MonthSlot {
    Blank,
    Day(u32),
}

/// Where the walk is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkState {
    /// Leading blanks still to be emitted
    BeforeMonth { blanks_left: u32 },

    /// The next day to emit
    InMonth { day: u32 },

    /// All days emitted, padding the final week
    AfterMonth,
}

/// An iterator over the [`MonthSlot`]s of a month, always yielding a whole
/// number of weeks
#[derive(Debug, Clone)]
pub struct MonthWalk {
    state: WalkState,
    days_in_month: u32,
    emitted: usize,
}

impl MonthWalk {
    /// Start a walk over the month (`month` is 1-based)
    pub fn new(year: i32, month: u32) -> Result<Self, MonthError> {
        let leading_blanks = first_weekday_of_month(year, month)?;
        Ok(MonthWalk {
            state: WalkState::BeforeMonth {
                blanks_left: leading_blanks,
            },
            days_in_month: days_in_month(year, month)?,
            emitted: 0,
        })
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    /// Collect the rest of the walk into rows of seven
    pub fn weeks(self) -> Vec<Vec<MonthSlot>> {
        let slots: Vec<MonthSlot> = self.collect();
        slots
            .chunks(DAYS_IN_WEEK)
            .map(|week| week.to_vec())
            .collect()
    }

    fn emit(&mut self, slot: MonthSlot) -> Option<MonthSlot> {
        self.emitted += 1;
        Some(slot)
    }
}

impl Iterator for MonthWalk {
    type Item = MonthSlot;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            match self.state {
                WalkState::BeforeMonth { blanks_left: 0 } => {
                    self.state = WalkState::InMonth { day: 1 };
                }
                WalkState::BeforeMonth { blanks_left } => {
                    self.state = WalkState::BeforeMonth {
                        blanks_left: blanks_left - 1,
                    };
                    return self.emit(MonthSlot::Blank);
                }
                WalkState::InMonth { day } if day > self.days_in_month || day > MAX_DAY => {
                    self.state = WalkState::AfterMonth;
                }
                WalkState::InMonth { day } => {
                    self.state = WalkState::InMonth { day: day + 1 };
                    return self.emit(MonthSlot::Day(day));
                }
                WalkState::AfterMonth => {
                    if self.emitted % DAYS_IN_WEEK == 0 {
                        return None;
                    }
                    return self.emit(MonthSlot::Blank);
                }
            }
        }
    }
}
