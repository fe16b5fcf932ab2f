//! The swatch record: one color of a theme, tagged with the color mode its
//! channels are expressed in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hex;

/// The color mode a swatch's channels are expressed in.
///
/// Only `Rgb` and `Hsl` take part in conversions. Every other label the feed
/// may carry is kept verbatim and passed through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorMode {
    #[default]
    Rgb,
    Hsl,
    /// Labelled by the feed but never converted.
    Cmyk,
    Other(String),
}

impl ColorMode {
    pub fn as_str(&self) -> &str {
        match self {
            ColorMode::Rgb => "rgb",
            ColorMode::Hsl => "hsl",
            ColorMode::Cmyk => "cmyk",
            ColorMode::Other(label) => label,
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ColorMode {
    fn from(label: &str) -> Self {
        match label {
            "rgb" => ColorMode::Rgb,
            "hsl" => ColorMode::Hsl,
            "cmyk" => ColorMode::Cmyk,
            other => ColorMode::Other(other.to_string()),
        }
    }
}

impl From<String> for ColorMode {
    fn from(label: String) -> Self {
        ColorMode::from(label.as_str())
    }
}

impl From<ColorMode> for String {
    fn from(mode: ColorMode) -> Self {
        mode.as_str().to_string()
    }
}

impl FromStr for ColorMode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(ColorMode::from(s))
    }
}

/// A single color of a scheme.
///
/// Channel meaning depends on [`ColorMode`]:
///
/// * `Rgb` - red, green, blue, each normalized to `[0, 1]`.
/// * `Hsl` - hue in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.
///
/// `channel_4` is unused by both modes and kept at `0`. The hex string and the
/// channels are only related at the moment a conversion builds the value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Swatch {
    /// `RRGGBB` without a leading `#`. May be empty.
    pub hex_color: String,
    pub color_mode: ColorMode,
    pub channel_1: f64,
    pub channel_2: f64,
    pub channel_3: f64,
    pub channel_4: f64,
    /// Position of this swatch within its scheme.
    pub swatch_index: u32,
}

impl Swatch {
    /// An rgb swatch from normalized channels. The hex string is left empty.
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self {
            color_mode: ColorMode::Rgb,
            channel_1: r,
            channel_2: g,
            channel_3: b,
            ..Self::default()
        }
    }

    /// An hsl swatch. Hue is in degrees.
    pub fn hsl(h: f64, s: f64, l: f64) -> Self {
        Self {
            color_mode: ColorMode::Hsl,
            channel_1: h,
            channel_2: s,
            channel_3: l,
            ..Self::default()
        }
    }

    /// An rgb swatch whose channels are read leniently from `hex`.
    pub fn from_hex(hex: &str) -> Self {
        let (r, g, b) = hex::normalized_rgb(hex);
        Self {
            hex_color: hex.to_string(),
            ..Self::rgb(r, g, b)
        }
    }

    /// Strict variant of [`Swatch::from_hex`] for user input.
    ///
    /// Accepts an optional leading `#`; the stored hex is lowercased.
    pub fn parse_hex(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !hex::is_triplet(digits) {
            return Err(Error::InvalidHex(input.to_string()));
        }
        Ok(Self::from_hex(&digits.to_ascii_lowercase()))
    }

    pub fn with_index(self, swatch_index: u32) -> Self {
        Self {
            swatch_index,
            ..self
        }
    }

    pub fn channels(&self) -> (f64, f64, f64) {
        (self.channel_1, self.channel_2, self.channel_3)
    }
}

/// Parse a numeric channel as delivered in feed text.
///
/// Surrounding whitespace is ignored; anything that is not a number reads as
/// `0.0`, matching how the feed's own clients treat blank channels.
pub fn parse_channel(text: &str) -> f64 {
    text.trim().parse().unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_mode_labels() {
        assert_eq!(ColorMode::from("rgb"), ColorMode::Rgb);
        assert_eq!(ColorMode::from("hsl"), ColorMode::Hsl);
        assert_eq!(ColorMode::from("cmyk"), ColorMode::Cmyk);
        assert_eq!(ColorMode::from("lab"), ColorMode::Other("lab".to_string()));
        assert_eq!(ColorMode::Other("lab".into()).to_string(), "lab");
        assert_eq!("hsl".parse::<ColorMode>(), Ok(ColorMode::Hsl));
    }

    #[test]
    fn clone_is_independent() {
        let original = Swatch::from_hex("336699");
        let mut copy = original.clone();
        copy.hex_color.push_str("ff");
        copy.channel_1 = 0.0;
        assert_eq!(original.hex_color, "336699");
        assert!((original.channel_1 - 0.2).abs() < 1e-12);
    }

    #[test]
    fn from_hex_normalizes_bytes() {
        let swatch = Swatch::from_hex("ff0080");
        assert_eq!(swatch.color_mode, ColorMode::Rgb);
        assert_eq!(swatch.channel_1, 1.0);
        assert_eq!(swatch.channel_2, 0.0);
        assert!((swatch.channel_3 - 128.0 / 255.0).abs() < 1e-12);
        assert_eq!(swatch.channel_4, 0.0);
    }

    #[test]
    fn parse_hex_is_strict() {
        let swatch = Swatch::parse_hex("#FF8800").unwrap();
        assert_eq!(swatch.hex_color, "ff8800");
        assert!(matches!(Swatch::parse_hex("ff88"), Err(Error::InvalidHex(_))));
        assert!(Swatch::parse_hex("gg0000").is_err());
    }

    #[test]
    fn channel_text_is_lenient() {
        assert_eq!(parse_channel(" 0.25 "), 0.25);
        assert_eq!(parse_channel("180"), 180.0);
        assert_eq!(parse_channel(""), 0.0);
        assert_eq!(parse_channel("n/a"), 0.0);
    }

    #[test]
    fn serializes_mode_as_label() {
        let swatch = Swatch::hsl(120.0, 0.5, 0.25).with_index(3);
        let json = serde_json::to_value(&swatch).unwrap();
        assert_eq!(json["color_mode"], "hsl");
        assert_eq!(json["swatch_index"], 3);

        let back: Swatch = serde_json::from_value(json).unwrap();
        assert_eq!(back, swatch);
    }
}
