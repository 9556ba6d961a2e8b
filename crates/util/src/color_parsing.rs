//! Color parsing for command-line flags and settings files.
//!
//! Accepted forms, case-insensitive and surrounding whitespace ignored:
//! - `#rrggbb` or `rrggbb`
//! - `rgb(r, g, b)` with decimal channels in `0..=255`
//! - a name from [`NAMED_COLORS`] (`-`, `_` and spaces are interchangeable)

use swatchgrid_types::Rgb;
use thiserror::Error;

/// Names understood by [`parse_color`].
pub const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::WHITE),
    ("gray", Rgb::GRAY),
    ("grey", Rgb::GRAY),
    ("light_gray", Rgb::LIGHT_GRAY),
    ("light_grey", Rgb::LIGHT_GRAY),
    ("dark_gray", Rgb::DARK_GRAY),
    ("dark_grey", Rgb::DARK_GRAY),
    ("red", Rgb::RED),
    ("green", Rgb::GREEN),
    ("blue", Rgb::BLUE),
    ("yellow", Rgb::YELLOW),
    ("orange", Rgb::ORANGE),
    ("pink", Rgb::PINK),
    ("cyan", Rgb::CYAN),
    ("magenta", Rgb::MAGENTA),
];

/// Error surfaced when text does not describe a color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color value")]
    Empty,
    #[error("unknown color '{0}'; expected #rrggbb, rgb(r, g, b) or a color name")]
    Unrecognized(String),
    #[error("channel '{channel}' in '{input}' is not an integer in 0..=255")]
    Channel { input: String, channel: String },
}

/// Parses a single color.
pub fn parse_color(input: &str) -> Result<Rgb, ColorParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ColorParseError::Empty);
    }

    let lowered = trimmed.to_ascii_lowercase();
    if let Some(body) = lowered.strip_prefix("rgb(").and_then(|rest| rest.strip_suffix(')')) {
        return parse_rgb_function(trimmed, body);
    }

    let normalized = lowered.replace(['-', ' '], "_");
    if let Some((_, color)) = NAMED_COLORS.iter().find(|(name, _)| *name == normalized) {
        return Ok(*color);
    }

    trimmed
        .parse::<Rgb>()
        .map_err(|_| ColorParseError::Unrecognized(trimmed.to_string()))
}

/// Parses every entry, stopping at the first failure.
pub fn parse_colors<I, S>(inputs: I) -> Result<Vec<Rgb>, ColorParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    inputs.into_iter().map(|input| parse_color(input.as_ref())).collect()
}

fn parse_rgb_function(input: &str, body: &str) -> Result<Rgb, ColorParseError> {
    let channels: Vec<&str> = body.split(',').map(str::trim).collect();
    let [r, g, b] = channels.as_slice() else {
        return Err(ColorParseError::Unrecognized(input.to_string()));
    };
    let channel = |raw: &str| {
        raw.parse::<u8>().map_err(|_| ColorParseError::Channel {
            input: input.to_string(),
            channel: raw.to_string(),
        })
    };
    Ok(Rgb::new(channel(*r)?, channel(*g)?, channel(*b)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!(parse_color("Orange").unwrap(), Rgb::ORANGE);
        assert_eq!(parse_color(" light-gray ").unwrap(), Rgb::LIGHT_GRAY);
        assert_eq!(parse_color("dark grey").unwrap(), Rgb::DARK_GRAY);
    }

    #[test]
    fn parses_rgb_function() {
        assert_eq!(parse_color("rgb(255, 200, 0)").unwrap(), Rgb::ORANGE);
        assert_eq!(parse_color("RGB(1,2,3)").unwrap(), Rgb::new(1, 2, 3));
    }

    #[test]
    fn display_output_parses_back() {
        let color = Rgb::new(12, 34, 56);
        assert_eq!(parse_color(&color.to_string()).unwrap(), color);
    }

    #[test]
    fn parses_hex() {
        assert_eq!(parse_color("#00FF00").unwrap(), Rgb::GREEN);
        assert_eq!(parse_color("0000ff").unwrap(), Rgb::BLUE);
    }

    #[test]
    fn reports_bad_channels() {
        let err = parse_color("rgb(256, 0, 0)").unwrap_err();
        assert_eq!(
            err,
            ColorParseError::Channel {
                input: "rgb(256, 0, 0)".into(),
                channel: "256".into()
            }
        );
        assert!(matches!(parse_color("rgb(1, 2)"), Err(ColorParseError::Unrecognized(_))));
    }

    #[test]
    fn rejects_unknown_and_empty() {
        assert_eq!(parse_color("  "), Err(ColorParseError::Empty));
        assert!(matches!(parse_color("chartreuse"), Err(ColorParseError::Unrecognized(_))));
    }

    #[test]
    fn parse_colors_keeps_order() {
        let colors = parse_colors(["red", "#0000ff", "rgb(255, 255, 0)"]).unwrap();
        assert_eq!(colors, vec![Rgb::RED, Rgb::BLUE, Rgb::YELLOW]);
        assert!(parse_colors(["red", "nope"]).is_err());
    }
}
