use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use tracing::warn;

use crate::error::{Error, Result};

/// Preferences for the `kuler-swatch` binary.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Schemes printed by `random` when `--count` is not given.
    pub scheme_count: usize,
    /// Print JSON instead of text.
    pub output_json: bool,
    /// Include hsl channels in text output and the preview.
    pub show_hsl: bool,
    /// Width in cells of each color block in the preview.
    pub block_width: u16,
    /// Preview redraw interval.
    pub tick_rate_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scheme_count: 1,
            output_json: false,
            show_hsl: true,
            block_width: 10,
            tick_rate_ms: 200,
        }
    }
}

impl Config {
    /// Return the path to the config file
    pub fn config_path() -> PathBuf {
        if let Some(proj_dirs) = ProjectDirs::from("com", "AlexanderBayerl", "KulerSwatch") {
            proj_dirs.config_dir().join("config.toml")
        } else {
            PathBuf::from("config.toml")
        }
    }

    /// Load configuration or create a default one
    pub fn load() -> Self {
        let path = Self::config_path();
        if path.exists() {
            match Self::load_from(&path) {
                Ok(config) => config,
                Err(err) => {
                    warn!("Using default configuration: {err}");
                    Self::default()
                }
            }
        } else {
            let config = Self::default();
            // Save a new default config
            if let Err(err) = config.save() {
                warn!("Could not write default configuration: {err}");
            }
            config
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| Error::io(path, err))?;
        Ok(toml::from_str(&content)?)
    }

    /// Save configuration to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|err| Error::io(parent, err))?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|err| Error::io(path, err))
    }
}
