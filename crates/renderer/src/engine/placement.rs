// SPDX-License-Identifier: MIT

//!
//! Event placement
//!
//! Three strategies turn events into [`VisualBlock`]s, all built on
//! [`make_labeled_block`]:
//!
//! - single-span: events on one time axis (day view)
//! - multi-column: the single-span strategy repeated for seven day columns
//!   (week view)
//! - capacity-bounded packing: a day's event names stacked as equal bands in a
//!   fixed cell, at most [`PackingParams::max_events`] of them (month view)
//!
//! No strategy tries to avoid overlaps; overlapping events give overlapping
//! blocks.
//!

use crate::{
    BLOCK_CORNER_DIVISOR, BlockStyle, Canvas, DAYS_IN_WEEK, FilledBox, FilledCircle, LayoutError,
    PackingParams, Point, Region, TimeAxis, VisualBlock, block_label, check_length, check_width,
};
use chrono::{Datelike, Days, NaiveDate, Weekday};
use log::{debug, trace};
use paper_calendar_core::{Event, HourSpan};
use serde::Serialize;

/// A rounded rectangle with `text` centred in it.  The corner radius is
/// `max(width, height) / 100`.
pub fn make_labeled_block(text: &str, region: Region, style: &BlockStyle) -> VisualBlock {
    let corner_radius = region.width.max(region.height) / BLOCK_CORNER_DIVISOR;
    VisualBlock {
        rect: FilledBox {
            region,
            fill_colour: style.rect.fill_colour,
            border_style: style.rect.border,
            corner_radius,
        },
        label: block_label(text, region.centre(), style),
    }
}

/// One block per event, each spanning the column from its begin time to its
/// end time on `axis` (or to the end of the span, for an event running past
/// midnight).  Events are independent of each other.
pub fn place_single_span<'a, I>(
    events: I,
    x: f64,
    width: f64,
    axis: &TimeAxis,
    style: &BlockStyle,
) -> Vec<VisualBlock>
where
    I: IntoIterator<Item = &'a Event>,
{
    events
        .into_iter()
        .map(|event| {
            let region = axis.event_region(event, x, width);
            trace!("placing `{}` at {region:?}", event.name());
            make_labeled_block(event.name().as_str(), region, style)
        })
        .collect()
}

/// The blocks placed in one column of a week grid
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekColumn {
    /// 0 is Monday
    pub index: usize,
    pub date: NaiveDate,
    pub blocks: Vec<VisualBlock>,
}

/// Place a week of events in seven columns, Monday first.  Column `i` holds
/// the events beginning on `week_start + i` days and starts at
/// `x + i * column_width`.  Events outside the week are ignored.
pub fn place_week_columns(
    events: &[Event],
    week_start: NaiveDate,
    x: f64,
    column_width: f64,
    axis: &TimeAxis,
    style: &BlockStyle,
) -> Result<Vec<WeekColumn>, LayoutError> {
    if week_start.weekday() != Weekday::Mon {
        return Err(LayoutError::WeekStart(week_start, week_start.weekday()));
    }
    let column_width = check_width("column_width", column_width)?;

    week_dates(week_start)
        .enumerate()
        .map(|(index, date)| -> Result<WeekColumn, LayoutError> {
            let date = date?;
            let column_x = x + index as f64 * column_width;
            let day_events = events.iter().filter(|event| event.begins_on(date));
            Ok(WeekColumn {
                index,
                date,
                blocks: place_single_span(day_events, column_x, column_width, axis, style),
            })
        })
        .collect()
}

/// The seven dates of the week beginning on `week_start`
pub(crate) fn week_dates(
    week_start: NaiveDate,
) -> impl Iterator<Item = Result<NaiveDate, LayoutError>> {
    (0..DAYS_IN_WEEK as u64).map(move |offset| {
        week_start
            .checked_add_days(Days::new(offset))
            .ok_or(LayoutError::Parameter {
                name: "week_start",
                value: offset as f64,
            })
    })
}

/// A month cell's events, packed.  `dropped` counts the events that didn't fit
/// (so a caller can show, say, "+2 more").
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PackedCanvas {
    pub canvas: Canvas,
    pub dropped: usize,
}

/// Stack up to `params.max_events` names as equal-height bands filling
/// `max_height`, with `params.padding` between bands.  Band `i` sits at
/// `y = i * (band_height + padding)`.  Names beyond the cap are dropped.
///
/// The cell must have room for a full `max_events` bands, even when there are
/// fewer names, so a cell that is too small is an error whatever the day holds.
pub fn fit_blocks<S: AsRef<str>>(
    names: &[S],
    width: f64,
    max_height: f64,
    params: PackingParams,
    style: &BlockStyle,
) -> Result<PackedCanvas, LayoutError> {
    let mut canvas = Canvas::new(width, max_height)?;
    let padding = check_length("padding", params.padding)?;

    // A full cell must still leave room for bands, however many names there
    // are this time
    let full_gaps = padding * params.max_events.saturating_sub(1) as f64;
    if full_gaps >= max_height {
        return Err(LayoutError::Parameter {
            name: "padding",
            value: padding,
        });
    }

    let shown = names.len().min(params.max_events);
    let dropped = names.len() - shown;
    if dropped > 0 {
        debug!("{dropped} event(s) don't fit in the cell");
    }
    if shown == 0 {
        return Ok(PackedCanvas { canvas, dropped });
    }

    let gaps = padding * (shown - 1) as f64;
    let band_height = (max_height - gaps) / shown as f64;

    for (index, name) in names.iter().take(shown).enumerate() {
        let y = (band_height + padding) * index as f64;
        let region = Region::new(0.0, y, width, band_height);
        canvas.push(make_labeled_block(name.as_ref(), region, style));
    }

    Ok(PackedCanvas { canvas, dropped })
}

/// A canvas holding just one labelled block at `(x, y)`
pub fn rectangle(
    name: &str,
    width: f64,
    height: f64,
    x: f64,
    y: f64,
    style: &BlockStyle,
) -> Result<Canvas, LayoutError> {
    let mut canvas = Canvas::new(width, height)?;
    canvas.push(make_labeled_block(
        name,
        Region::new(x, y, width, height),
        style,
    ));
    Ok(canvas)
}

/// A `2r x 2r` canvas holding a filled circle with `name` centred in it
pub fn bubble(name: &str, radius: f64, style: &BlockStyle) -> Result<Canvas, LayoutError> {
    let mut canvas = Canvas::new(2.0 * radius, 2.0 * radius)?;
    let centre = Point {
        x: radius,
        y: radius,
    };
    canvas.push(FilledCircle {
        centre,
        radius,
        fill_colour: style.rect.fill_colour,
    });
    canvas.push(block_label(name, centre, style));
    Ok(canvas)
}

/// A schedule with no ruler: every event placed across the full width.  Blocks
/// are shifted by `line_width` per hour boundary so that they line up with a
/// ruler of that width drawn separately.
pub fn draw_schedule(
    events: &[Event],
    width: f64,
    height: f64,
    span: HourSpan,
    line_width: f64,
    style: &BlockStyle,
) -> Result<Canvas, LayoutError> {
    let mut canvas = Canvas::new(width, height)?;
    let line_width = check_length("line_width", line_width)?;
    let axis = TimeAxis::new(span, height).with_line_width(line_width);
    canvas.extend(place_single_span(events, 0.0, width, &axis, style));
    Ok(canvas)
}
