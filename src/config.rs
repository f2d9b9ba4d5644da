//! Configuration for the `caesar` CLI
//!
//! Values are resolved in this order, later sources winning:
//! - built-in defaults
//! - `caesar.toml` (optional)
//! - `CAESAR_CIPHERTEXT`, `CAESAR_CSV_PATH`, `CAESAR_CHART_PATH`
//! - command-line flags (applied by the binary)

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::chart::ChartOptions;
use crate::constants::DEFAULT_CIPHERTEXT;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CaesarConfig {
    /// Ciphertext used when a command is given none
    pub ciphertext: String,

    /// Brute-force shifts printed by the demo
    pub preview: usize,

    pub csv_path: PathBuf,
    pub chart_path: PathBuf,
    pub chart_width: u32,
    pub chart_height: u32,
}

impl Default for CaesarConfig {
    fn default() -> Self {
        let chart = ChartOptions::default();
        CaesarConfig {
            ciphertext: DEFAULT_CIPHERTEXT.to_string(),
            preview: 10,
            csv_path: PathBuf::from("caesar_frequency_analysis.csv"),
            chart_path: PathBuf::from("letter_frequency_comparison.png"),
            chart_width: chart.width,
            chart_height: chart.height,
        }
    }
}

impl CaesarConfig {
    /// Loads `path` if it exists, then applies environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            toml::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            CaesarConfig::default()
        };

        config.apply_env(|key| std::env::var(key).ok());
        Ok(config)
    }

    fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(ciphertext) = lookup("CAESAR_CIPHERTEXT") {
            self.ciphertext = ciphertext;
        }
        if let Some(path) = lookup("CAESAR_CSV_PATH") {
            self.csv_path = PathBuf::from(path);
        }
        if let Some(path) = lookup("CAESAR_CHART_PATH") {
            self.chart_path = PathBuf::from(path);
        }
    }

    pub fn chart_options(&self) -> ChartOptions {
        ChartOptions {
            width: self.chart_width,
            height: self.chart_height,
            ..ChartOptions::default()
        }
    }
}
