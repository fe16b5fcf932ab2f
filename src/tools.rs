//! Color conversion engine for swatches.
//!
//! Every function here is pure: it borrows its input and builds a new
//! [`Swatch`]. Conversions are only defined between `rgb` and `hsl`; a swatch in
//! any other mode passes through as an unmodified copy.

use rand::Rng;
use rayon::prelude::*;
use tracing::debug;

use crate::hex;
use crate::scheme::{Scheme, SWATCHES_PER_SCHEME};
use crate::swatch::{ColorMode, Swatch};

/// Title and author given to generated schemes.
pub const RANDOM_LABEL: &str = "random";

/// Convert an rgb swatch to hsl.
///
/// The hue is in degrees `[0, 360)`. When two channels tie for the maximum the
/// hue is taken from the first of red, green, blue. `hex_color` is copied as is
/// and not recomputed.
pub fn to_hsl(swatch: &Swatch) -> Swatch {
    if swatch.color_mode != ColorMode::Rgb {
        debug!(mode = %swatch.color_mode, "to_hsl: passing swatch through");
        return swatch.clone();
    }

    let (r, g, b) = swatch.channels();
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        let mut h = sector * 60.0;
        if h < 0.0 {
            h += 360.0;
        }
        // (g - b) / d + 6 can round up to exactly 6 when b is a hair above g
        if h >= 360.0 {
            h -= 360.0;
        }
        (h, s)
    };

    Swatch {
        color_mode: ColorMode::Hsl,
        channel_1: h,
        channel_2: s,
        channel_3: l,
        channel_4: 0.0,
        ..swatch.clone()
    }
}

/// Convert an hsl swatch to rgb with normalized channels.
///
/// `hex_color` is copied as is and not recomputed.
pub fn to_rgb(swatch: &Swatch) -> Swatch {
    if swatch.color_mode != ColorMode::Hsl {
        debug!(mode = %swatch.color_mode, "to_rgb: passing swatch through");
        return swatch.clone();
    }

    let (h, s, l) = swatch.channels();
    let (r, g, b) = if s == 0.0 {
        (l, l, l)
    } else {
        let q = if l <= 0.5 {
            l * (1.0 + s)
        } else {
            l + s - l * s
        };
        let p = 2.0 * l - q;
        (
            hue_to_channel(p, q, h + 120.0),
            hue_to_channel(p, q, h),
            hue_to_channel(p, q, h - 120.0),
        )
    };

    Swatch {
        color_mode: ColorMode::Rgb,
        channel_1: r,
        channel_2: g,
        channel_3: b,
        channel_4: 0.0,
        ..swatch.clone()
    }
}

// Piecewise interpolation between p and q for a hue sample in degrees.
fn hue_to_channel(p: f64, q: f64, hue: f64) -> f64 {
    let t = hue.rem_euclid(360.0);
    if t < 60.0 {
        p + (q - p) * t / 60.0
    } else if t < 180.0 {
        q
    } else if t < 240.0 {
        p + (q - p) * (240.0 - t) / 60.0
    } else {
        p
    }
}

/// Brightness estimate in `[0, 1]` taken from the swatch's hex string.
///
/// Known deviation: all three ITU-R 601 weights (299, 587, 114) are applied to
/// the red byte, so only red contributes. A missing or invalid byte reads as 0.
pub fn brightness(swatch: &Swatch) -> f64 {
    let red = hex::byte_at(&swatch.hex_color, 0) as f64 / 255.0;
    (red * 299.0 + red * 587.0 + red * 114.0) / 1000.0
}

/// The complementary color: hue rotated by 180 degrees.
///
/// A swatch not in rgb mode is first read from its hex string, not from its
/// channels. The result is an rgb swatch with a freshly encoded `hex_color`;
/// every other field is carried over.
pub fn complementary(swatch: &Swatch) -> Swatch {
    let rgb = if swatch.color_mode == ColorMode::Rgb {
        swatch.clone()
    } else {
        let (r, g, b) = hex::normalized_rgb(&swatch.hex_color);
        Swatch {
            color_mode: ColorMode::Rgb,
            channel_1: r,
            channel_2: g,
            channel_3: b,
            channel_4: 0.0,
            ..swatch.clone()
        }
    };

    let hsl = to_hsl(&rgb);
    let mut hue = hsl.channel_1 + 180.0;
    if hue >= 360.0 {
        hue -= 360.0;
    }

    let rotated = to_rgb(&Swatch {
        channel_1: hue,
        ..hsl
    });

    Swatch {
        hex_color: hex::encode_rgb(
            rotated.channel_1,
            rotated.channel_2,
            rotated.channel_3,
        ),
        color_mode: ColorMode::Rgb,
        ..rotated
    }
}

/// Complementary schemes for a batch, computed in parallel. Order is kept.
pub fn complementary_schemes(schemes: &[Scheme]) -> Vec<Scheme> {
    schemes.par_iter().map(Scheme::complementary).collect()
}

/// A random rgb swatch using the thread-local generator.
pub fn random_swatch() -> Swatch {
    random_swatch_with(&mut rand::thread_rng())
}

/// A random rgb swatch drawn from `rng`.
///
/// Each byte is drawn from `0..255`. Channels hold the bytes normalized to
/// `[0, 1]`, the same representation as every other rgb swatch, and
/// `hex_color` encodes the bytes themselves.
pub fn random_swatch_with<R: Rng + ?Sized>(rng: &mut R) -> Swatch {
    let bytes: [u8; 3] = std::array::from_fn(|_| rng.gen_range(0..255));
    let hex_color = bytes.iter().map(|&b| hex::byte_to_hex(b)).collect();

    Swatch {
        hex_color,
        color_mode: ColorMode::Rgb,
        channel_1: bytes[0] as f64 / 255.0,
        channel_2: bytes[1] as f64 / 255.0,
        channel_3: bytes[2] as f64 / 255.0,
        channel_4: 0.0,
        swatch_index: 0,
    }
}

/// A scheme of five random swatches using the thread-local generator.
pub fn random_scheme() -> Scheme {
    random_scheme_with(&mut rand::thread_rng())
}

/// A scheme of five random swatches drawn from `rng`, indexed in order.
///
/// Only title and author name are filled in; there is no meaningful author id
/// or rating for a generated scheme.
pub fn random_scheme_with<R: Rng + ?Sized>(rng: &mut R) -> Scheme {
    let swatches = (0..SWATCHES_PER_SCHEME as u32)
        .map(|index| random_swatch_with(rng).with_index(index))
        .collect();

    Scheme {
        title: RANDOM_LABEL.to_string(),
        author_name: RANDOM_LABEL.to_string(),
        swatches,
        ..Scheme::default()
    }
}
