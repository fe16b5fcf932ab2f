//! Theme-level records as published by the feed: schemes and their comments.

use serde::{Deserialize, Serialize};

use crate::swatch::Swatch;
use crate::tools;

/// Number of swatches a feed scheme carries by convention.
pub const SWATCHES_PER_SCHEME: usize = 5;

/// A color theme: an ordered run of swatches plus descriptive metadata.
///
/// Five swatches is the convention; nothing here enforces it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scheme {
    pub title: String,
    /// URL of the rendered swatch image.
    pub image: String,
    pub author_id: String,
    pub author_name: String,
    pub tags: Vec<String>,
    pub rating: Option<u32>,
    pub download_count: Option<u64>,
    pub created_at: Option<String>,
    pub edited_at: Option<String>,
    pub swatches: Vec<Swatch>,
}

impl Scheme {
    /// A new scheme with the complementary color of every swatch.
    ///
    /// Metadata and swatch order are kept.
    pub fn complementary(&self) -> Scheme {
        Scheme {
            swatches: self.swatches.iter().map(tools::complementary).collect(),
            ..self.clone()
        }
    }

    pub fn hex_colors(&self) -> Vec<&str> {
        self.swatches.iter().map(|s| s.hex_color.as_str()).collect()
    }
}

/// A comment left on a theme.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Comment {
    /// Comment body, may contain HTML entities.
    pub comment: String,
    pub author: String,
    pub posted_at: String,
    pub theme_id: String,
    pub theme_title: String,
    pub theme_image: String,
    pub theme_artist: String,
}

/// Split the feed's comma separated tag list.
///
/// Whitespace around each comma is dropped. A missing or blank tag element
/// yields no tags.
pub fn parse_tags(text: Option<&str>) -> Vec<String> {
    match text.map(str::trim) {
        Some(text) if !text.is_empty() => {
            text.split(',').map(|tag| tag.trim().to_string()).collect()
        }
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::swatch::ColorMode;

    #[test]
    fn tags_split_on_commas() {
        assert_eq!(
            parse_tags(Some("sea , sand,sky")),
            vec!["sea", "sand", "sky"]
        );
        assert_eq!(parse_tags(Some("single")), vec!["single"]);
        assert!(parse_tags(None).is_empty());
        assert!(parse_tags(Some("  ")).is_empty());
    }

    #[test]
    fn complementary_scheme_keeps_metadata_and_order() {
        let scheme = Scheme {
            title: "Primaries".to_string(),
            author_name: "someone".to_string(),
            tags: vec!["bold".to_string()],
            swatches: vec![
                Swatch::from_hex("ff0000").with_index(0),
                Swatch::from_hex("00ff00").with_index(1),
            ],
            ..Scheme::default()
        };

        let complement = scheme.complementary();
        assert_eq!(complement.title, "Primaries");
        assert_eq!(complement.tags, scheme.tags);
        assert_eq!(complement.hex_colors(), vec!["00ffff", "ff00ff"]);
        assert_eq!(complement.swatches[1].swatch_index, 1);
        assert!(complement
            .swatches
            .iter()
            .all(|s| s.color_mode == ColorMode::Rgb));
        // source untouched
        assert_eq!(scheme.hex_colors(), vec!["ff0000", "00ff00"]);
    }
}
