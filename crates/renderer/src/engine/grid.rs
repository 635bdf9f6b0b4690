// SPDX-License-Identifier: MIT

//!
//! Grids
//!
//! Day and week grids are an hour ruler (a line and a "9:00" label per whole
//! hour) with events placed over it.  The month grid is a [`Table`] of day
//! cells, each holding that day's packed events.
//!

use crate::{
    CalendarStyle, Canvas, DAYS_IN_WEEK, DayCell, GridParams, HOUR_LABEL_DROP, HorizontalLine,
    LayoutError, Label, LineStyle, MONTH_CELL_HEIGHT_RATIO, MONTH_CELL_WIDTH_RATIO, MonthCell,
    MonthSlot, MonthWalk, PackingParams, Point, Shape, Table, TextAnchor, TextOut, TimeAxis,
    check_length, check_width, fit_blocks, place_single_span, place_week_columns, y_for_hour,
};
use chrono::{Datelike, NaiveDate};
use log::debug;
use paper_calendar_core::{Event, HourSpan, WEEKDAYS};
use std::iter;

/// The ruler for a grid of `height`: for each hour in the span, a line from
/// `x = 0` to `x_end` and the hour's label, right-aligned to
/// `time_column_width` just below the line
pub fn hour_ruler(
    span: HourSpan,
    height: f64,
    x_end: f64,
    time_column_width: f64,
    line_width: f64,
    style: &CalendarStyle,
) -> Vec<Shape> {
    let line_style = LineStyle {
        colour: style.ruler_colour,
        thickness: line_width,
    };
    span.ruler_hours()
        .flat_map(|hour| {
            let y = y_for_hour(f64::from(hour), span, height);
            let line = HorizontalLine {
                y,
                x_start: 0.0,
                x_end,
                style: line_style,
            };
            let label = TextOut::styled(
                format!("{hour}:00"),
                Point {
                    x: time_column_width,
                    y: y - HOUR_LABEL_DROP,
                },
                TextAnchor::End,
                &style.hour_label,
            );
            [Shape::from(line), Shape::from(label)]
        })
        .collect()
}

/// A day's schedule: the hour ruler across the full width, with the events
/// placed to the right of the time column
pub fn draw_day_schedule(
    events: &[Event],
    width: f64,
    height: f64,
    span: HourSpan,
    params: GridParams,
    style: &CalendarStyle,
) -> Result<Canvas, LayoutError> {
    let mut canvas = Canvas::new(width, height)?;
    let padding = check_length("padding", params.padding)?;
    let line_width = check_length("line_width", params.line_width)?;
    let time_column_width = check_length("time_column_width", params.time_column_width)?;
    let events_x = time_column_width + padding;
    let events_width = check_width("events_width", width - events_x)?;

    debug!("drawing day schedule of {} event(s)", events.len());
    canvas.extend(hour_ruler(
        span,
        height,
        width,
        time_column_width,
        line_width,
        style,
    ));

    let axis = TimeAxis::new(span, height);
    canvas.extend(place_single_span(
        events,
        events_x,
        events_width,
        &axis,
        &style.block,
    ));
    Ok(canvas)
}

/// A week's schedule: seven day columns (Monday first) of `day_width` to the
/// right of the time column, under a row of weekday headings.
/// `week_start` must be a Monday.
pub fn draw_week_schedule(
    events: &[Event],
    week_start: NaiveDate,
    day_width: f64,
    height: f64,
    span: HourSpan,
    params: GridParams,
    style: &CalendarStyle,
) -> Result<Canvas, LayoutError> {
    let day_width = check_width("day_width", day_width)?;
    let padding = check_length("padding", params.padding)?;
    let line_width = check_length("line_width", params.line_width)?;
    let time_column_width = check_length("time_column_width", params.time_column_width)?;
    let header_height = check_length("header_height", params.header_height)?;
    let ruler_height = check_width("ruler_height", height - header_height)?;

    let days = DAYS_IN_WEEK as f64;
    let mut canvas = Canvas::new(days * day_width + time_column_width, height)?;
    let events_x = time_column_width + padding;

    debug!("drawing week schedule starting {week_start}");
    canvas.extend(hour_ruler(
        span,
        ruler_height,
        events_x + days * day_width,
        time_column_width,
        line_width,
        style,
    ));

    let axis = TimeAxis::new(span, ruler_height);
    let columns = place_week_columns(events, week_start, events_x, day_width, &axis, &style.block)?;
    for column in columns {
        canvas.extend(column.blocks);
        canvas.push(TextOut::styled(
            WEEKDAYS[column.index].to_uppercase(),
            Point {
                x: events_x + (column.index as f64 + 0.5) * day_width,
                y: height - header_height / 2.0,
            },
            TextAnchor::Middle,
            &style.weekday,
        ));
    }
    Ok(canvas)
}

/// A month table: a header of three-letter weekday names, then a row per week
/// (Monday first).  Each day's cell holds its number and its events packed
/// into `0.92 * col_width` by `0.8 * (row_height - label height)`.
///
/// Only events beginning in the given month are shown.
pub fn draw_month_schedule(
    year: i32,
    month: u32,
    events: &[Event],
    style: &CalendarStyle,
) -> Result<Table<MonthCell>, LayoutError> {
    let measurements = &style.month;
    let cell_width = MONTH_CELL_WIDTH_RATIO * measurements.col_width;
    let cell_height = (measurements.row_height - style.label.font_size - style.label.space_after)
        * MONTH_CELL_HEIGHT_RATIO;
    let params = PackingParams::default();

    debug!("drawing month table for {year}-{month:02}");
    let header = WEEKDAYS
        .iter()
        .map(|weekday| Label::new(&weekday[..3], &style.weekday))
        .collect();

    let cell = |slot: MonthSlot| -> Result<MonthCell, LayoutError> {
        let day = match slot {
            MonthSlot::Blank => return Ok(MonthCell::Blank),
            MonthSlot::Day(day) => day,
        };
        let names: Vec<&str> = events
            .iter()
            .filter(|event| event.begins_in_month(year, month) && event.begin().day() == day)
            .map(|event| event.name().as_str())
            .collect();
        Ok(MonthCell::Day(DayCell {
            day,
            label: Label::new(day.to_string(), &style.label),
            events: fit_blocks(&names, cell_width, cell_height, params, &style.block)?,
        }))
    };

    let rows = MonthWalk::new(year, month)?
        .weeks()
        .into_iter()
        .map(|week| week.into_iter().map(&cell).collect())
        .collect::<Result<Vec<Vec<MonthCell>>, LayoutError>>()?;

    let row_heights = iter::once(measurements.header_height)
        .chain(iter::repeat_n(measurements.row_height, rows.len()))
        .collect();

    Ok(Table {
        col_widths: vec![measurements.col_width; DAYS_IN_WEEK],
        row_heights,
        header,
        rows,
        style: style.table,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::approx_eq;
    use chrono::NaiveDateTime;
    use paper_calendar_core::Name;

    fn at(month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, month, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn event(name: &str, begin: NaiveDateTime, end: NaiveDateTime) -> Event {
        Event::from(Name::from(name).unwrap(), begin, end).unwrap()
    }

    #[test]
    fn ruler_has_a_line_and_label_per_hour() {
        let span = HourSpan::from(6, 9).unwrap();
        let style = CalendarStyle::default();
        let shapes = hour_ruler(span, 90.0, 200.0, 50.0, 0.5, &style);
        assert_eq!(shapes.len(), 8);

        let lines: Vec<&HorizontalLine> = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Line(line) => Some(line),
                _ => None,
            })
            .collect();
        let ys: Vec<f64> = lines.iter().map(|line| line.y).collect();
        assert_eq!(ys, vec![90.0, 60.0, 30.0, 0.0]);
        assert!(lines.iter().all(|line| line.x_end == 200.0));
        assert!(lines.iter().all(|line| line.style.thickness == 0.5));

        let labels: Vec<&TextOut> = shapes
            .iter()
            .filter_map(|shape| match shape {
                Shape::Text(text) => Some(text),
                _ => None,
            })
            .collect();
        assert_eq!(labels[0].text, "6:00");
        assert_eq!(labels[3].text, "9:00");
        assert_eq!(labels[0].anchor, TextAnchor::End);
        assert_eq!(labels[0].position, Point { x: 50.0, y: 84.0 });
    }

    #[test]
    fn day_schedule() {
        let span = HourSpan::from(6, 23).unwrap();
        let style = CalendarStyle::default();
        let params = GridParams {
            padding: 3.0,
            line_width: 0.5,
            time_column_width: 50.0,
            header_height: 0.0,
        };
        let events = [event("Whole day", at(4, 1, 6, 0), at(4, 1, 23, 0))];
        let canvas = draw_day_schedule(&events, 900.0, 612.0, span, params, &style).unwrap();

        assert_eq!(canvas.lines().count(), 18);
        let block = canvas.blocks().next().unwrap();
        assert_eq!(block.region().position.x, 53.0);
        assert_eq!(block.region().width, 847.0);
        assert_eq!(block.region().position.y, 0.0);
        assert_eq!(block.region().height, 612.0);
    }

    #[test]
    fn day_schedule_rejects_bad_sizes() {
        let span = HourSpan::default();
        let style = CalendarStyle::default();
        let params = GridParams {
            time_column_width: 100.0,
            ..GridParams::default()
        };
        assert!(draw_day_schedule(&[], 100.0, 100.0, span, params, &style).is_err());
        assert!(draw_day_schedule(&[], 100.0, 0.0, span, GridParams::default(), &style).is_err());
    }

    #[test]
    fn week_schedule() {
        // 31st March 2025 is a Monday
        let week_start = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let span = HourSpan::from(6, 23).unwrap();
        let style = CalendarStyle::default();
        let params = GridParams {
            padding: 3.0,
            line_width: 0.5,
            time_column_width: 50.0,
            header_height: 24.0,
        };
        let events = [
            event("Before", at(3, 30, 9, 0), at(3, 30, 10, 0)),
            event("Wednesday", at(4, 2, 6, 0), at(4, 2, 23, 0)),
            event("Sunday", at(4, 6, 12, 0), at(4, 6, 13, 0)),
        ];
        let height = 24.0 + 36.0 * 17.0;
        let canvas =
            draw_week_schedule(&events, week_start, 60.0, height, span, params, &style).unwrap();

        assert_eq!(canvas.width(), 7.0 * 60.0 + 50.0);
        assert_eq!(canvas.height(), height);

        let blocks: Vec<_> = canvas.blocks().collect();
        assert_eq!(blocks.len(), 2);
        let wednesday = blocks[0];
        assert_eq!(wednesday.label.text, "Wednesday");
        assert_eq!(wednesday.region().position.x, 53.0 + 2.0 * 60.0);
        assert_eq!(wednesday.region().position.y, 0.0);
        assert!(approx_eq(wednesday.region().height, 36.0 * 17.0));
        assert_eq!(blocks[1].region().position.x, 53.0 + 6.0 * 60.0);

        let headings: Vec<&str> = canvas
            .texts()
            .filter(|text| text.position.y == height - 12.0)
            .map(|text| text.text.as_str())
            .collect();
        assert_eq!(
            headings,
            vec![
                "MONDAY",
                "TUESDAY",
                "WEDNESDAY",
                "THURSDAY",
                "FRIDAY",
                "SATURDAY",
                "SUNDAY"
            ]
        );

        // Ruler lines stretch over every column
        let line = canvas.lines().next().unwrap();
        assert_eq!(line.x_end, 53.0 + 7.0 * 60.0);
        assert!(approx_eq(line.y, 36.0 * 17.0));
    }

    #[test]
    fn week_schedule_needs_room_for_the_header() {
        let week_start = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        let params = GridParams {
            header_height: 50.0,
            ..GridParams::default()
        };
        let result = draw_week_schedule(
            &[],
            week_start,
            60.0,
            50.0,
            HourSpan::default(),
            params,
            &CalendarStyle::default(),
        );
        assert!(result.is_err());
    }

    #[test]
    fn month_table_for_april() {
        let style = CalendarStyle::default();
        let mut events: Vec<Event> = (0..6)
            .map(|i| event(&format!("Busy {i}"), at(4, 15, 9 + i, 0), at(4, 15, 10 + i, 0)))
            .collect();
        events.push(event("March", at(3, 15, 9, 0), at(3, 15, 10, 0)));
        events.push(event("First", at(4, 1, 9, 0), at(4, 1, 10, 0)));

        let table = draw_month_schedule(2025, 4, &events, &style).unwrap();

        assert_eq!(table.col_widths, vec![80.0; 7]);
        assert_eq!(table.row_heights, vec![24.0, 60.0, 60.0, 60.0, 60.0, 60.0]);
        assert_eq!(table.width(), 560.0);
        assert_eq!(table.height(), 324.0);
        let header: Vec<&str> = table.header.iter().map(|l| l.text.as_str()).collect();
        assert_eq!(header, vec!["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);

        // 1st April 2025 is a Tuesday
        assert_eq!(table.rows[0][0], MonthCell::Blank);
        assert_eq!(table.rows[0][1].day(), Some(1));
        assert_eq!(table.rows[4][2].day(), Some(30));
        assert_eq!(table.rows[4][3], MonthCell::Blank);

        let cell = |week: usize, weekday: usize| match &table.rows[week][weekday] {
            MonthCell::Day(cell) => cell.clone(),
            MonthCell::Blank => panic!("expected a day"),
        };

        let first = cell(0, 1);
        assert_eq!(first.label.text, "1");
        assert_eq!(first.events.canvas.blocks().count(), 1);
        assert_eq!(first.events.dropped, 0);

        // 15th April is a Tuesday in the 3rd week
        let busy = cell(2, 1);
        assert_eq!(busy.day, 15);
        assert_eq!(busy.events.canvas.blocks().count(), 4);
        assert_eq!(busy.events.dropped, 2);
        let expected_height = (60.0 - 8.0 - 6.0) * 0.8;
        assert!(approx_eq(busy.events.canvas.height(), expected_height));
        assert!(approx_eq(busy.events.canvas.width(), 0.92 * 80.0));
        let band = busy.events.canvas.blocks().next().unwrap().region().height;
        assert!(approx_eq(band, (expected_height - 2.0 * 3.0) / 4.0));

        // The March event on the 15th is not shown
        let names: Vec<&str> = busy
            .events
            .canvas
            .blocks()
            .map(|block| block.label.text.as_str())
            .collect();
        assert!(!names.contains(&"March"));

        let empty = cell(1, 0);
        assert!(empty.events.canvas.is_empty());
    }

    #[test]
    fn month_table_for_february() {
        let table = draw_month_schedule(2023, 2, &[], &CalendarStyle::default()).unwrap();
        let days: Vec<u32> = table
            .rows
            .iter()
            .flatten()
            .filter_map(MonthCell::day)
            .collect();
        assert_eq!(days, (1..=28).collect::<Vec<u32>>());
        assert!(table.rows.iter().all(|row| row.len() == 7));
    }

    #[test]
    fn month_table_rejects_short_rows_even_when_quiet() {
        let mut style = CalendarStyle::default();
        // (21 - 8 - 6) * 0.8 = 5.6 leaves no room between three gaps of 2.0
        style.month.row_height = 21.0;
        let quiet = [event("Alone", at(4, 15, 9, 0), at(4, 15, 10, 0))];
        let busy: Vec<Event> = (0..4)
            .map(|i| event(&format!("Busy {i}"), at(4, 15, 9 + i, 0), at(4, 15, 10 + i, 0)))
            .collect();
        let expected = Err(LayoutError::Parameter {
            name: "padding",
            value: 2.0,
        });
        assert_eq!(draw_month_schedule(2025, 4, &[], &style), expected);
        assert_eq!(draw_month_schedule(2025, 4, &quiet, &style), expected);
        assert_eq!(draw_month_schedule(2025, 4, &busy, &style), expected);
    }

    #[test]
    fn month_table_rejects_bad_month() {
        let result = draw_month_schedule(2025, 0, &[], &CalendarStyle::default());
        assert!(matches!(result, Err(LayoutError::Month(_))));
    }
}
