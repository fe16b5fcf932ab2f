//! Swatch records and color utilities for user-submitted color themes.
//!
//! A theme feed delivers [`Scheme`]s of five [`Swatch`]es, each tagged with the
//! color mode its channels are in. The [`tools`] module converts swatches
//! between rgb and hsl, derives complementary colors and brightness, and
//! generates random swatches and schemes.
//!
//! ```
//! use kuler_swatch::{tools, Swatch};
//!
//! let red = Swatch::from_hex("ff0000");
//! assert_eq!(tools::complementary(&red).hex_color, "00ffff");
//! ```

pub mod color_utils;
pub mod config;
pub mod error;
pub mod hex;
pub mod scheme;
pub mod swatch;
pub mod tools;

pub use config::Config;
pub use error::{Error, Result};
pub use scheme::{Comment, Scheme};
pub use swatch::{ColorMode, Swatch};
