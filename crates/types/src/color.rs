use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A 24-bit color.
///
/// Two colors are the same color when all three channels match; there is no
/// other notion of identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const GRAY: Rgb = Rgb::new(128, 128, 128);
    pub const LIGHT_GRAY: Rgb = Rgb::new(192, 192, 192);
    pub const DARK_GRAY: Rgb = Rgb::new(64, 64, 64);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);
    pub const YELLOW: Rgb = Rgb::new(255, 255, 0);
    pub const ORANGE: Rgb = Rgb::new(255, 200, 0);
    pub const PINK: Rgb = Rgb::new(255, 175, 175);
    pub const CYAN: Rgb = Rgb::new(0, 255, 255);
    pub const MAGENTA: Rgb = Rgb::new(255, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Lowercase `#rrggbb` form used for serialization.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Relative luminance approximation (ITU-R BT.601), in `0.0..=255.0`.
    pub fn luma(self) -> f32 {
        0.299 * f32::from(self.r) + 0.587 * f32::from(self.g) + 0.114 * f32::from(self.b)
    }
}

/// Palette offered when nothing else is configured.
pub const DEFAULT_PALETTE: [Rgb; 7] = [
    Rgb::RED,
    Rgb::BLUE,
    Rgb::YELLOW,
    Rgb::ORANGE,
    Rgb::CYAN,
    Rgb::GREEN,
    Rgb::MAGENTA,
];

/// Renders the human-readable label, e.g. `rgb(255, 200, 0)`.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

/// Failure to read a `#rrggbb` string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("expected a hex color like #rrggbb, got '{input}'")]
pub struct HexParseError {
    pub input: String,
}

/// Parses `#rrggbb` or `rrggbb` (case-insensitive).
impl FromStr for Rgb {
    type Err = HexParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        let err = || HexParseError { input: s.to_string() };
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&digits[range], 16).map_err(|_| err());
        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl Serialize for Rgb {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Rgb {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_selection_label_format() {
        assert_eq!(Rgb::ORANGE.to_string(), "rgb(255, 200, 0)");
    }

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!("#FF00ff".parse::<Rgb>().unwrap(), Rgb::MAGENTA);
        assert_eq!("00ffff".parse::<Rgb>().unwrap(), Rgb::CYAN);
    }

    #[test]
    fn rejects_malformed_hex() {
        for input in ["", "#fff", "#gg0000", "#ff00000", "#ff\u{e9}00"] {
            assert!(input.parse::<Rgb>().is_err(), "{input:?} should not parse");
        }
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&vec![Rgb::RED, Rgb::new(1, 2, 3)]).unwrap();
        assert_eq!(json, r##"["#ff0000","#010203"]"##);
        let back: Vec<Rgb> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vec![Rgb::RED, Rgb::new(1, 2, 3)]);
    }

    #[test]
    fn equality_is_by_channel_value() {
        assert_eq!(Rgb::new(255, 0, 0), Rgb::RED);
        assert_ne!(Rgb::new(254, 0, 0), Rgb::RED);
    }
}
