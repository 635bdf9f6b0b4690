// SPDX-License-Identifier: MIT

//!
//! Calendar arithmetic (leap years, month lengths, week starts)
//!

use chrono::{Datelike, Days, NaiveDate};
use thiserror::Error;

/// The weekdays in the order the grids lay them out (Monday first)
pub const WEEKDAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Errors that can arise when asking about a month
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MonthError {
    /// The month number is not allowed (must be 1 <= month <= 12)
    #[error("Month `{0}` is not allowed")]
    InvalidMonth(u32),

    /// The year can't be represented as a calendar date
    #[error("Year `{0}` is not allowed")]
    InvalidYear(i32),
}

/// Whether the year is a leap year in the proleptic Gregorian calendar
/// (divisible by 4, but not by 100 unless also by 400)
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// The number of days in the month (`month` is 1-based)
pub fn days_in_month(year: i32, month: u32) -> Result<u32, MonthError> {
    let days = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => return Err(MonthError::InvalidMonth(month)),
    };
    Ok(days)
}

/// The first day of the month
pub fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, MonthError> {
    if !(1..=12).contains(&month) {
        return Err(MonthError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(MonthError::InvalidYear(year))
}

/// The weekday the month starts on, counting from Monday = 0
pub fn first_weekday_of_month(year: i32, month: u32) -> Result<u32, MonthError> {
    Ok(first_of_month(year, month)?.weekday().num_days_from_monday())
}

/// The Monday of the week containing the date
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let since_monday = u64::from(date.weekday().num_days_from_monday());
    date.checked_sub_days(Days::new(since_monday)).unwrap_or(date)
}
