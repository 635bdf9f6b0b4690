// SPDX-License-Identifier: MIT

//!
//! Styles
//!
//! Everything the layout engine needs to know about how things look.  A
//! [`CalendarStyle`] is built once (from defaults or a config file) and passed
//! by reference to each view-building call.
//!
//! A deserialised [`CalendarStyle`] starts from the defaults and takes only
//! what the input sets, at any depth, so a config may change a single font
//! size or colour.
//!

use crate::{TableMeasurements, colour::Colour};
use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;
use std::fmt::Debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    pub colour: Colour,
    pub thickness: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoxStyle {
    pub fill_colour: Colour,
    pub border: Option<LineStyle>,
}

/// Horizontal alignment of a paragraph of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextAlignment {
    Left,
    Centre,
    Right,
}

/// How a paragraph of text (title, label, heading) is set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    pub font_name: String,
    pub font_size: f64,

    /// Distance between baselines
    pub leading: f64,
    pub alignment: TextAlignment,

    /// Space left below the paragraph
    pub space_after: f64,
    pub colour: Colour,
}

/// How an event block is drawn
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockStyle {
    pub rect: BoxStyle,
    pub text_colour: Colour,
    pub font_name: String,
    pub font_size: f64,
}

/// How the month table is drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableStyle {
    pub header_background: Colour,
    pub body_background: Colour,
    pub grid: LineStyle,
    pub header_bottom_padding: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarStyle {
    /// View titles (e.g. "April 2025")
    pub title: TextStyle,

    /// Day numbers in the month table
    pub label: TextStyle,

    /// Weekday headings (week columns and month table header)
    pub weekday: TextStyle,

    /// The "9:00" labels beside the hour ruler
    pub hour_label: TextStyle,

    /// The hour ruler lines (the thickness comes from the view's measurements)
    pub ruler_colour: Colour,

    pub block: BlockStyle,
    pub bubble: BlockStyle,
    pub table: TableStyle,

    pub day: TableMeasurements,
    pub week: TableMeasurements,
    pub month: TableMeasurements,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_name: String::from("Helvetica"),
            font_size: 8.0,
            leading: 10.0,
            alignment: TextAlignment::Left,
            space_after: 0.0,
            colour: Colour::BLACK,
        }
    }
}

impl Default for BlockStyle {
    fn default() -> Self {
        Self {
            rect: BoxStyle {
                fill_colour: Colour::BLACK,
                border: Some(LineStyle {
                    colour: Colour::BLACK,
                    thickness: 1.0,
                }),
            },
            text_colour: Colour::WHITE,
            font_name: String::from("Helvetica"),
            font_size: 6.0,
        }
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self {
            header_background: Colour::WHITE_SMOKE,
            body_background: Colour::WHITE,
            grid: LineStyle {
                colour: Colour::LIGHT_GREY,
                thickness: 0.5,
            },
            header_bottom_padding: 8.0,
        }
    }
}

impl Default for CalendarStyle {
    fn default() -> Self {
        Self {
            title: TextStyle {
                font_size: 18.0,
                leading: 22.0,
                alignment: TextAlignment::Centre,
                space_after: 12.0,
                ..TextStyle::default()
            },
            label: TextStyle {
                font_size: 8.0,
                leading: 10.0,
                alignment: TextAlignment::Left,
                space_after: 6.0,
                ..TextStyle::default()
            },
            weekday: TextStyle {
                font_size: 8.0,
                leading: 12.0,
                alignment: TextAlignment::Centre,
                space_after: 6.0,
                ..TextStyle::default()
            },
            hour_label: TextStyle {
                alignment: TextAlignment::Right,
                ..TextStyle::default()
            },
            ruler_colour: Colour::BLACK,
            block: BlockStyle::default(),
            bubble: BlockStyle {
                rect: BoxStyle {
                    fill_colour: Colour::BLACK,
                    border: None,
                },
                font_size: 4.0,
                ..BlockStyle::default()
            },
            table: TableStyle::default(),
            day: TableMeasurements {
                col_width: 450.0,
                time_width: Some(50.0),
                row_height: 36.0,
                header_height: 24.0,
                line_width: 0.5,
            },
            week: TableMeasurements {
                col_width: 60.0,
                time_width: Some(50.0),
                row_height: 36.0,
                header_height: 24.0,
                line_width: 0.5,
            },
            month: TableMeasurements {
                col_width: 80.0,
                time_width: None,
                row_height: 60.0,
                header_height: 24.0,
                line_width: 0.5,
            },
        }
    }
}

#[derive(Deserialize)]
struct RawCalendarStyle {
    title: TextStyle,
    label: TextStyle,
    weekday: TextStyle,
    hour_label: TextStyle,
    ruler_colour: Colour,
    block: BlockStyle,
    bubble: BlockStyle,
    table: TableStyle,
    day: TableMeasurements,
    week: TableMeasurements,
    month: TableMeasurements,
}

impl From<RawCalendarStyle> for CalendarStyle {
    fn from(raw: RawCalendarStyle) -> Self {
        CalendarStyle {
            title: raw.title,
            label: raw.label,
            weekday: raw.weekday,
            hour_label: raw.hour_label,
            ruler_colour: raw.ruler_colour,
            block: raw.block,
            bubble: raw.bubble,
            table: raw.table,
            day: raw.day,
            week: raw.week,
            month: raw.month,
        }
    }
}

/// Lay `overrides` over `base`: objects are merged key by key, anything else
/// replaces what was there
fn merge(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(existing) => merge(existing, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, overrides) => *base = overrides,
    }
}

impl<'de> Deserialize<'de> for CalendarStyle {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let overrides = Value::deserialize(deserializer)?;
        let mut style = serde_json::to_value(CalendarStyle::default()).map_err(de::Error::custom)?;
        merge(&mut style, overrides);
        let raw: RawCalendarStyle = serde_json::from_value(style).map_err(de::Error::custom)?;
        Ok(raw.into())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn partial_config_uses_defaults() {
        let json = r#"{"ruler_colour": {"r": 200, "g": 0, "b": 0}}"#;
        let style: CalendarStyle = serde_json::from_str(json).unwrap();
        assert_eq!(style.ruler_colour, Colour::from_rgb(200, 0, 0));
        assert_eq!(style.month.col_width, 80.0);
        assert_eq!(style.title.font_size, 18.0);
    }

    #[test]
    fn nested_fields_are_optional() {
        let json = r##"{
            "title": {"font_size": 20},
            "block": {"rect": {"border": null}, "text_colour": "#ffff00"},
            "month": {"row_height": 72}
        }"##;
        let style: CalendarStyle = serde_json::from_str(json).unwrap();
        let defaults = CalendarStyle::default();

        assert_eq!(style.title.font_size, 20.0);
        assert_eq!(style.title.leading, 22.0);
        assert_eq!(style.title.alignment, TextAlignment::Centre);
        assert_eq!(style.block.rect.border, None);
        assert_eq!(style.block.rect.fill_colour, Colour::BLACK);
        assert_eq!(style.block.text_colour, Colour::from_rgb(255, 255, 0));
        assert_eq!(style.month.row_height, 72.0);
        assert_eq!(style.month.col_width, 80.0);
        assert_eq!(style.month.time_width, None);
        assert_eq!(style.day, defaults.day);
        assert_eq!(style.label, defaults.label);
    }

    #[test]
    fn bad_values_are_still_rejected() {
        let parse = serde_json::from_str::<CalendarStyle>;
        assert!(parse(r#"{"title": {"font_size": "big"}}"#).is_err());
        assert!(parse(r##"{"ruler_colour": "#12"}"##).is_err());
        assert!(parse("[]").is_err());
    }

    #[test]
    fn round_trip() {
        let style = CalendarStyle::default();
        let json = serde_json::to_string(&style).unwrap();
        let parsed: CalendarStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(style, parsed);
    }
}
