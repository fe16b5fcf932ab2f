//! Bridges between swatches and the `palette` crate's color types.
//!
//! The preview UI renders through these, and they give an independent
//! reference for the hand-written conversions in [`crate::tools`].

use palette::{FromColor, Hsl, RgbHue, Srgb};

use crate::hex;
use crate::swatch::{ColorMode, Swatch};
use crate::tools;

impl Swatch {
    /// The swatch as a palette `Srgb<f64>`.
    ///
    /// Rgb swatches use their channels, hsl swatches are converted, and any
    /// other mode falls back to the hex string.
    pub fn to_srgb(&self) -> Srgb<f64> {
        match self.color_mode {
            ColorMode::Rgb => Srgb::new(self.channel_1, self.channel_2, self.channel_3),
            ColorMode::Hsl => {
                let rgb = tools::to_rgb(self);
                Srgb::new(rgb.channel_1, rgb.channel_2, rgb.channel_3)
            }
            _ => {
                let (r, g, b) = hex::normalized_rgb(&self.hex_color);
                Srgb::new(r, g, b)
            }
        }
    }

    /// The swatch as a palette `Hsl`. Hsl swatches map over directly.
    pub fn to_palette_hsl(&self) -> Hsl<palette::encoding::Srgb, f64> {
        match self.color_mode {
            ColorMode::Hsl => Hsl::new(
                RgbHue::from_degrees(self.channel_1),
                self.channel_2,
                self.channel_3,
            ),
            _ => Hsl::from_color(self.to_srgb()),
        }
    }

    /// An rgb swatch from a palette color, with its hex string encoded.
    pub fn from_srgb(srgb: Srgb<f64>) -> Self {
        Self {
            hex_color: hex::encode_rgb(srgb.red, srgb.green, srgb.blue),
            ..Self::rgb(srgb.red, srgb.green, srgb.blue)
        }
    }
}

/// Convert a palette `Srgb<f64>` into 8-bit channels for display.
pub fn srgb_to_rgb8(srgb: Srgb<f64>) -> (u8, u8, u8) {
    let r = (srgb.red * 255.0).clamp(0.0, 255.0).round() as u8;
    let g = (srgb.green * 255.0).clamp(0.0, 255.0).round() as u8;
    let b = (srgb.blue * 255.0).clamp(0.0, 255.0).round() as u8;
    (r, g, b)
}

/// Display channels of any swatch.
pub fn swatch_rgb8(swatch: &Swatch) -> (u8, u8, u8) {
    srgb_to_rgb8(swatch.to_srgb())
}
