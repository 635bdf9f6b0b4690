// SPDX-License-Identifier: MIT

//!
//! The SVG frontend
//!
//! Engine canvases have `y` increasing upwards while SVG has it increasing
//! downwards, so every canvas is flipped as it is written.  Tables are laid
//! out top-down (header first) and need no flipping.
//!

use crate::{
    Canvas, Colour, DayCell, FilledBox, FilledCircle, HorizontalLine, Label, LineStyle,
    MonthCell, Page, PageBody, Point, Shape, Table, TextAlignment, TextAnchor, TextOut,
};
use log::debug;

/// Space left around the body of a page
const PAGE_MARGIN: f64 = 18.0;

/// Space between a day number and the cell's left edge
const CELL_LABEL_INSET: f64 = 2.0;

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn anchor_name(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Start => "start",
        TextAnchor::Middle => "middle",
        TextAnchor::End => "end",
    }
}

fn open_svg(out: &mut String, width: f64, height: f64) {
    out.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\" \
         viewBox=\"0 0 {width} {height}\">\n"
    ));
}

fn close_svg(out: &mut String) {
    out.push_str("</svg>\n");
}

fn stroke_attributes(style: Option<LineStyle>) -> String {
    match style {
        Some(style) => format!(
            " stroke=\"{}\" stroke-width=\"{}\"",
            style.colour.to_hex(),
            style.thickness
        ),
        None => String::from(" stroke=\"none\""),
    }
}

fn write_text(out: &mut String, text: &TextOut, x: f64, y: f64, centred: bool) {
    let baseline = if centred {
        " dominant-baseline=\"central\""
    } else {
        ""
    };
    out.push_str(&format!(
        "<text x=\"{x}\" y=\"{y}\" text-anchor=\"{}\"{baseline} font-family=\"{}\" \
         font-size=\"{}\" fill=\"{}\">{}</text>\n",
        anchor_name(text.anchor),
        escape(&text.font_name),
        text.font_size,
        text.colour.to_hex(),
        escape(&text.text)
    ));
}

/// Writes canvas shapes with the canvas's bottom left corner at `(dx, dy +
/// height)` in SVG coordinates
struct CanvasWriter<'a> {
    out: &'a mut String,
    dx: f64,
    dy: f64,
    height: f64,
}

impl CanvasWriter<'_> {
    fn x(&self, x: f64) -> f64 {
        self.dx + x
    }

    fn y(&self, y: f64) -> f64 {
        self.dy + self.height - y
    }

    fn filled_box(&mut self, rect: &FilledBox) {
        let region = rect.region;
        let top = self.y(region.max_y());
        self.out.push_str(&format!(
            "<rect x=\"{}\" y=\"{top}\" width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"{}/>\n",
            self.x(region.position.x),
            region.width,
            region.height,
            rect.corner_radius,
            rect.fill_colour.to_hex(),
            stroke_attributes(rect.border_style)
        ));
    }

    fn circle(&mut self, circle: &FilledCircle) {
        self.out.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" fill=\"{}\"/>\n",
            self.x(circle.centre.x),
            self.y(circle.centre.y),
            circle.radius,
            circle.fill_colour.to_hex()
        ));
    }

    fn line(&mut self, line: &HorizontalLine) {
        let y = self.y(line.y);
        self.out.push_str(&format!(
            "<line x1=\"{}\" y1=\"{y}\" x2=\"{}\" y2=\"{y}\"{}/>\n",
            self.x(line.x_start),
            self.x(line.x_end),
            stroke_attributes(Some(line.style))
        ));
    }

    fn text(&mut self, text: &TextOut) {
        let x = self.x(text.position.x);
        let y = self.y(text.position.y);
        // Centred labels (blocks, weekday headings) sit on their position
        write_text(self.out, text, x, y, text.anchor == TextAnchor::Middle);
    }

    fn canvas(&mut self, canvas: &Canvas) {
        for shape in canvas.shapes() {
            match shape {
                Shape::Block(block) => {
                    self.filled_box(&block.rect);
                    self.text(&block.label);
                }
                Shape::Line(line) => self.line(line),
                Shape::Text(text) => self.text(text),
                Shape::Circle(circle) => self.circle(circle),
            }
        }
    }
}

fn write_canvas(out: &mut String, canvas: &Canvas, dx: f64, dy: f64) {
    CanvasWriter {
        out,
        dx,
        dy,
        height: canvas.height(),
    }
    .canvas(canvas);
}

fn write_rect(out: &mut String, x: f64, y: f64, width: f64, height: f64, fill: Colour) {
    out.push_str(&format!(
        "<rect x=\"{x}\" y=\"{y}\" width=\"{width}\" height=\"{height}\" fill=\"{}\"/>\n",
        fill.to_hex()
    ));
}

fn write_grid_line(out: &mut String, from: (f64, f64), to: (f64, f64), style: LineStyle) {
    out.push_str(&format!(
        "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
        from.0,
        from.1,
        to.0,
        to.1,
        stroke_attributes(Some(style))
    ));
}

/// A label set inside a box of `width` whose top edge is at `top`.  The
/// baseline is one font size below the top, as a paragraph's first line would
/// be.
fn write_label(out: &mut String, label: &Label, left: f64, top: f64, width: f64) {
    let (x, anchor) = match label.style.alignment {
        TextAlignment::Left => (left + CELL_LABEL_INSET, TextAnchor::Start),
        TextAlignment::Centre => (left + width / 2.0, TextAnchor::Middle),
        TextAlignment::Right => (left + width - CELL_LABEL_INSET, TextAnchor::End),
    };
    let y = top + label.style.font_size;
    let text = TextOut::styled(label.text.clone(), Point { x, y }, anchor, &label.style);
    write_text(out, &text, x, y, false);
}

fn write_day_cell(out: &mut String, cell: &DayCell, left: f64, top: f64, width: f64, height: f64) {
    write_label(out, &cell.label, left, top, width);
    let canvas = &cell.events.canvas;
    let dx = left + (width - canvas.width()) / 2.0;
    let dy = top + height - canvas.height() - (width - canvas.width()) / 2.0;
    write_canvas(out, canvas, dx, dy);
    if cell.events.dropped > 0 {
        debug!(
            "day {} has {} event(s) not drawn",
            cell.day, cell.events.dropped
        );
    }
}

fn write_table(out: &mut String, table: &Table<MonthCell>, dx: f64, dy: f64) {
    let style = &table.style;
    let width = table.width();
    let header_height = table.header_height();
    let columns = table.column_offsets();

    write_rect(out, dx, dy, width, header_height, style.header_background);
    write_rect(
        out,
        dx,
        dy + header_height,
        width,
        table.height() - header_height,
        style.body_background,
    );

    for ((label, left), col_width) in table.header.iter().zip(&columns).zip(&table.col_widths) {
        let top = dy + header_height - style.header_bottom_padding - label.style.font_size;
        write_label(out, label, dx + left, top.max(dy), *col_width);
    }

    let mut top = dy + header_height;
    for (index, row) in table.rows.iter().enumerate() {
        let row_height = table.row_height(index);
        for ((cell, left), col_width) in row.iter().zip(&columns).zip(&table.col_widths) {
            if let MonthCell::Day(cell) = cell {
                write_day_cell(out, cell, dx + left, top, *col_width, row_height);
            }
        }
        top += row_height;
    }

    // Grid lines over everything
    let mut y = dy;
    write_grid_line(out, (dx, y), (dx + width, y), style.grid);
    for height in &table.row_heights {
        y += height;
        write_grid_line(out, (dx, y), (dx + width, y), style.grid);
    }
    let bottom = dy + table.height();
    for left in columns.iter().chain(std::iter::once(&width)) {
        write_grid_line(out, (dx + left, dy), (dx + left, bottom), style.grid);
    }
}

/// A standalone SVG document of a canvas
pub fn canvas_to_svg(canvas: &Canvas) -> String {
    let mut out = String::new();
    open_svg(&mut out, canvas.width(), canvas.height());
    write_canvas(&mut out, canvas, 0.0, 0.0);
    close_svg(&mut out);
    out
}

/// A standalone SVG document of a month table
pub fn table_to_svg(table: &Table<MonthCell>) -> String {
    let mut out = String::new();
    open_svg(&mut out, table.width(), table.height());
    write_table(&mut out, table, 0.0, 0.0);
    close_svg(&mut out);
    out
}

/// A standalone SVG document of a page: the title above the body, with a
/// margin all round
pub fn page_to_svg(page: &Page) -> String {
    let (body_width, body_height) = match &page.body {
        PageBody::Schedule(canvas) => (canvas.width(), canvas.height()),
        PageBody::Month(table) => (table.width(), table.height()),
    };
    let title = &page.title;
    let title_height = title.style.leading + title.style.space_after;
    let width = body_width + 2.0 * PAGE_MARGIN;
    let height = body_height + title_height + 2.0 * PAGE_MARGIN;

    let mut out = String::new();
    open_svg(&mut out, width, height);
    write_label(&mut out, title, PAGE_MARGIN, PAGE_MARGIN, body_width);
    let body_top = PAGE_MARGIN + title_height;
    match &page.body {
        PageBody::Schedule(canvas) => write_canvas(&mut out, canvas, PAGE_MARGIN, body_top),
        PageBody::Month(table) => write_table(&mut out, table, PAGE_MARGIN, body_top),
    }
    close_svg(&mut out);
    out
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        BlockStyle, CalendarStyle, Region, day_view, make_labeled_block, month_view, rectangle,
    };
    use chrono::NaiveDate;
    use paper_calendar_core::{Event, HourSpan, Name};

    #[test]
    fn escapes_text() {
        assert_eq!(escape("Fish & <chips>"), "Fish &amp; &lt;chips&gt;");
        assert_eq!(escape("\"quoted\""), "&quot;quoted&quot;");
    }

    #[test]
    fn canvas_is_flipped() {
        let canvas = rectangle("Meeting", 30.0, 10.0, 0.0, 0.0, &BlockStyle::default()).unwrap();
        let svg = canvas_to_svg(&canvas);
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"30\""));
        assert!(svg.contains("<rect x=\"0\" y=\"0\" width=\"30\" height=\"10\""));
        assert!(svg.contains(">Meeting</text>"));
        assert!(svg.contains("fill=\"#ffffff\""));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn block_near_the_bottom_is_drawn_near_the_bottom() {
        let block = make_labeled_block(
            "Late",
            Region::new(0.0, 0.0, 10.0, 5.0),
            &BlockStyle::default(),
        );
        let mut out = String::new();
        CanvasWriter {
            out: &mut out,
            dx: 0.0,
            dy: 0.0,
            height: 100.0,
        }
        .filled_box(&block.rect);
        assert!(out.contains("y=\"95\""));
    }

    #[test]
    fn day_page_runs_top_down() {
        let date = NaiveDate::from_ymd_opt(2025, 4, 2).unwrap();
        let event = Event::from(
            Name::from("Standup").unwrap(),
            date.and_hms_opt(9, 0, 0).unwrap(),
            date.and_hms_opt(10, 0, 0).unwrap(),
        )
        .unwrap();
        let page = day_view(date, &[event], HourSpan::default(), &CalendarStyle::default()).unwrap();
        let svg = page_to_svg(&page);

        // The body starts below the margin (18) and the title (22 + 12)
        assert!(svg.contains("width=\"936\" height=\"682\""));
        assert!(svg.contains(">Wednesday, April 02, 2025</text>"));

        // 6:00 is at the top of the body and 23:00 at the bottom
        assert!(svg.contains("<line x1=\"18\" y1=\"52\" x2=\"918\" y2=\"52\""));
        assert!(svg.contains("<line x1=\"18\" y1=\"664\" x2=\"918\" y2=\"664\""));

        // Hour labels sit just below their lines
        assert!(svg.contains("<text x=\"68\" y=\"58\" text-anchor=\"end\""));
        assert!(svg.contains("<text x=\"68\" y=\"670\" text-anchor=\"end\""));
        let six = svg.find(">6:00</text>").unwrap();
        let eleven_pm = svg.find(">23:00</text>").unwrap();
        assert!(six < eleven_pm);

        // 9:00 to 10:00 is 3 hours (of 36) below the top
        assert!(svg.contains("<rect x=\"71\" y=\"160\" width=\"847\" height=\"36\""));
    }

    #[test]
    fn month_page() {
        let page = month_view(2025, 4, &[], &CalendarStyle::default()).unwrap();
        let svg = page_to_svg(&page);
        assert!(svg.contains(">April 2025</text>"));
        assert!(svg.contains(">Mon</text>"));
        assert!(svg.contains(">30</text>"));
        assert!(!svg.contains(">31</text>"));
        // Header and body backgrounds
        assert!(svg.contains("fill=\"#f5f5f5\""));
    }

    #[test]
    fn table_document_size() {
        let page = month_view(2025, 3, &[], &CalendarStyle::default()).unwrap();
        let svg = table_to_svg(page.month().unwrap());
        assert!(svg.contains("width=\"560\" height=\"384\""));
    }
}
