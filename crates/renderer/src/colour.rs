// SPDX-License-Identifier: MIT

//!
//! The colour type used when drawing a calendar
//!

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors that can arise in relation to a [`Colour`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("`{0}` is not a hex colour (expected e.g. `#ab66ef` or `ab66ef`)")]
    InvalidHex(String),
}

/// The `Colour` type.  Serialised as `{"r", "g", "b"}`; either that or a hex
/// string (e.g. `"#ab66ef"`) is accepted when deserialising.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Colour {
    r: u8,
    g: u8,
    b: u8,
}

impl Colour {
    pub const BLACK: Colour = Colour::from_rgb(0, 0, 0);
    pub const WHITE: Colour = Colour::from_rgb(255, 255, 255);
    pub const LIGHT_GREY: Colour = Colour::from_rgb(211, 211, 211);
    pub const WHITE_SMOKE: Colour = Colour::from_rgb(245, 245, 245);

    /// Create a colour from RGB values
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Colour { r, g, b }
    }

    /// Create a colour from a hex colour (e.g. `#ab66ef`, `ab66ef`, `#ab66efff`).
    /// If the hex value has an alpha component, it is removed.
    pub fn from_hex<S: Into<String>>(hex_colour: S) -> Result<Self, ColourError> {
        let hex_colour = hex_colour.into();
        let invalid = || ColourError::InvalidHex(hex_colour.clone());

        let digits = hex_colour.strip_prefix('#').unwrap_or(&hex_colour);
        if !digits.is_ascii() {
            return Err(invalid());
        }
        let digits = match digits.len() {
            6 => digits,
            8 => &digits[0..6],
            _ => return Err(invalid()),
        };

        let component = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16);
        match (component(0..2), component(2..4), component(4..6)) {
            (Ok(r), Ok(g), Ok(b)) => Ok(Colour::from_rgb(r, g, b)),
            _ => Err(invalid()),
        }
    }

    /// Get the colour as, say, `#0affc3` (for SVG and CSS)
    pub fn to_hex(&self) -> String {
        // {:02x} means print as hex, requesting 2 chars (pad left with "0" if only 1 char otherwise)
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColour {
    Hex(String),
    Rgb { r: u8, g: u8, b: u8 },
}

impl<'de> Deserialize<'de> for Colour {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match RawColour::deserialize(deserializer)? {
            RawColour::Hex(hex) => Colour::from_hex(hex).map_err(serde::de::Error::custom),
            RawColour::Rgb { r, g, b } => Ok(Colour::from_rgb(r, g, b)),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn from_hex() {
        assert_eq!(Colour::from_hex("#ab66ef"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("ab66ef"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert_eq!(Colour::from_hex("#ab66efff"), Ok(Colour::from_rgb(0xab, 0x66, 0xef)));
        assert!(Colour::from_hex("#ab66e").is_err());
        assert!(Colour::from_hex("#zz66ef").is_err());
        assert!(Colour::from_hex("").is_err());
    }

    #[test]
    fn from_hex_with_multibyte_characters() {
        // The 6th byte falls inside the 'é'
        assert_eq!(
            Colour::from_hex("abcde\u{e9}f"),
            Err(ColourError::InvalidHex(String::from("abcde\u{e9}f")))
        );
        assert!(Colour::from_hex("#\u{e9}\u{e9}\u{e9}").is_err());
    }

    #[test]
    fn deserialise() {
        let colour: Colour = serde_json::from_str(r##""#d3d3d3""##).unwrap();
        assert_eq!(colour, Colour::LIGHT_GREY);
        let colour: Colour = serde_json::from_str(r#"{"r": 245, "g": 245, "b": 245}"#).unwrap();
        assert_eq!(colour, Colour::WHITE_SMOKE);
        assert!(serde_json::from_str::<Colour>(r#""not a colour""#).is_err());
        assert!(serde_json::from_str::<Colour>(r#"{"r": 300, "g": 0, "b": 0}"#).is_err());
    }

    #[test]
    fn to_hex() {
        assert_eq!(Colour::WHITE_SMOKE.to_hex(), "#f5f5f5");
        assert_eq!(Colour::from_rgb(10, 255, 195).to_hex(), "#0affc3");
        let colour = Colour::from_hex(Colour::LIGHT_GREY.to_hex()).unwrap();
        assert_eq!(colour, Colour::LIGHT_GREY);
    }
}
