// SPDX-License-Identifier: MIT

//!
//! Views
//!
//! A view is a titled page for a day, a week, or a month.  The day and week
//! bodies are canvases; the month body is a table.
//!

use crate::{
    CalendarStyle, Canvas, GridParams, Label, LayoutError, MonthCell, Table, TableMeasurements,
    draw_day_schedule, draw_month_schedule, draw_week_schedule,
};
use chrono::{Days, NaiveDate};
use log::info;
use paper_calendar_core::{Event, HourSpan, first_of_month, week_start};
use serde::Serialize;

/// The body of a [`Page`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PageBody {
    Schedule(Canvas),
    Month(Table<MonthCell>),
}

/// A titled view, ready for a frontend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub title: Label,
    pub body: PageBody,
}

impl Page {
    /// The canvas of a day or week page
    pub fn schedule(&self) -> Option<&Canvas> {
        match &self.body {
            PageBody::Schedule(canvas) => Some(canvas),
            PageBody::Month(_) => None,
        }
    }

    /// The table of a month page
    pub fn month(&self) -> Option<&Table<MonthCell>> {
        match &self.body {
            PageBody::Month(table) => Some(table),
            PageBody::Schedule(_) => None,
        }
    }
}

fn grid_params(measurements: &TableMeasurements, header_height: f64) -> GridParams {
    let defaults = GridParams::default();
    GridParams {
        padding: defaults.padding,
        line_width: measurements.line_width,
        time_column_width: measurements.time_width.unwrap_or(defaults.time_column_width),
        header_height,
    }
}

/// A page for one day, showing only the events that begin on `date`
pub fn day_view(
    date: NaiveDate,
    events: &[Event],
    span: HourSpan,
    style: &CalendarStyle,
) -> Result<Page, LayoutError> {
    let measurements = &style.day;
    let day_events: Vec<Event> = events
        .iter()
        .filter(|event| event.begins_on(date))
        .cloned()
        .collect();
    info!("building day view for {date} ({} event(s))", day_events.len());

    let canvas = draw_day_schedule(
        &day_events,
        2.0 * measurements.col_width,
        measurements.row_height * f64::from(span.hours()),
        span,
        grid_params(measurements, 0.0),
        style,
    )?;

    Ok(Page {
        title: Label::new(date.format("%A, %B %d, %Y").to_string(), &style.title),
        body: PageBody::Schedule(canvas),
    })
}

/// A page for the week (Monday to Sunday) containing `date`
pub fn week_view(
    date: NaiveDate,
    events: &[Event],
    span: HourSpan,
    style: &CalendarStyle,
) -> Result<Page, LayoutError> {
    let measurements = &style.week;
    let start = week_start(date);
    let end = start
        .checked_add_days(Days::new(6))
        .ok_or(LayoutError::Parameter {
            name: "week_start",
            value: 6.0,
        })?;
    info!("building week view for {start} to {end}");

    let height =
        measurements.header_height + measurements.row_height * f64::from(span.hours());
    let canvas = draw_week_schedule(
        events,
        start,
        measurements.col_width,
        height,
        span,
        grid_params(measurements, measurements.header_height),
        style,
    )?;

    let title = format!(
        "{} - {}",
        start.format("Week %U: %B %d"),
        end.format("%B %d, %Y")
    );
    Ok(Page {
        title: Label::new(title, &style.title),
        body: PageBody::Schedule(canvas),
    })
}

/// A page for a month (`month` is 1-based)
pub fn month_view(
    year: i32,
    month: u32,
    events: &[Event],
    style: &CalendarStyle,
) -> Result<Page, LayoutError> {
    let first = first_of_month(year, month)?;
    info!("building month view for {}", first.format("%Y-%m"));
    let table = draw_month_schedule(year, month, events, style)?;
    Ok(Page {
        title: Label::new(first.format("%B %Y").to_string(), &style.title),
        body: PageBody::Month(table),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use chrono::NaiveDateTime;
    use paper_calendar_core::Name;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn event(name: &str, day: u32, begin: u32, end: u32) -> Event {
        Event::from(Name::from(name).unwrap(), at(day, begin), at(day, end)).unwrap()
    }

    fn events() -> Vec<Event> {
        vec![
            event("Standup", 2, 9, 10),
            event("Lunch", 2, 12, 13),
            event("Gym", 3, 18, 19),
            event("Review", 8, 14, 15),
        ]
    }

    #[test]
    fn day_view_shows_only_that_day() {
        let style = CalendarStyle::default();
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let page = day_view(date, &events(), HourSpan::default(), &style).unwrap();

        assert_eq!(page.title.text, "Wednesday, April 02, 2025");
        assert_eq!(page.title.style, style.title);
        let canvas = page.schedule().unwrap();
        assert_eq!(canvas.width(), 900.0);
        assert_eq!(canvas.height(), 36.0 * 17.0);
        let names: Vec<&str> = canvas.blocks().map(|b| b.label.text.as_str()).collect();
        assert_eq!(names, vec!["Standup", "Lunch"]);
        assert!(page.month().is_none());
    }

    #[test]
    fn week_view_starts_on_monday() {
        let style = CalendarStyle::default();
        // A Thursday
        let date = NaiveDate::from_ymd_opt(2025, 4, 3).unwrap();
        let page = week_view(date, &events(), HourSpan::default(), &style).unwrap();

        assert_eq!(page.title.text, "Week 13: March 31 - April 06, 2025");
        let canvas = page.schedule().unwrap();
        assert_eq!(canvas.width(), 7.0 * 60.0 + 50.0);
        assert_eq!(canvas.height(), 24.0 + 36.0 * 17.0);
        // The review on the 8th is next week
        assert_eq!(canvas.blocks().count(), 3);
    }

    #[test]
    fn month_view() {
        let style = CalendarStyle::default();
        let page = super::month_view(2025, 4, &events(), &style).unwrap();
        assert_eq!(page.title.text, "April 2025");
        let table = page.month().unwrap();
        assert_eq!(table.rows.len(), 5);
        assert!(page.schedule().is_none());
    }

    #[test]
    fn month_view_rejects_bad_month() {
        let result = super::month_view(2025, 13, &[], &CalendarStyle::default());
        assert!(result.is_err());
    }

    #[test]
    fn page_serialises() {
        let style = CalendarStyle::default();
        let page = super::month_view(2025, 2, &[], &style).unwrap();
        let json = serde_json::to_value(&page).unwrap();
        assert_eq!(json["title"]["text"], "February 2025");
        assert!(json["body"]["Month"]["rows"].is_array());
    }
}
