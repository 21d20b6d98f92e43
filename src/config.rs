//! # Configuration Management
//!
//! This module loads optional settings from a `baro-trend.toml` file. Every
//! field has a default, so a missing or partial file is fine and command
//! line flags can override individual values afterwards.
//!
//! ```toml
//! [scan]
//! truncate_on_error = true
//! reject_unordered = true
//! initial_capacity = 10
//! pressure_column = 2
//!
//! [output]
//! format = "text"
//! show_points = false
//! per_hour = false
//! ```

use crate::scanner::ScanOptions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use tracing::{info, warn};

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "baro-trend.toml";

/// Application configuration loaded from baro-trend.toml
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Record selection settings
    pub scan: ScanConfig,
    /// Report rendering settings
    pub output: OutputConfig,
}

/// Record selection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Keep the points read before a malformed line instead of failing
    pub truncate_on_error: bool,
    /// Fail when a timestamp is earlier than the one before it
    pub reject_unordered: bool,
    /// Starting capacity of the point buffer
    pub initial_capacity: NonZeroUsize,
    /// Tab-separated column that holds barometric pressure (0 is the timestamp)
    pub pressure_column: NonZeroUsize,
}

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text (default)
    #[default]
    Text,
    /// JSON for machine parsing
    Json,
}

/// Report rendering settings
#[derive(Debug, Default, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print every selected point
    pub show_points: bool,
    /// Also print the slope per hour
    pub per_hour: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        let options = ScanOptions::default();
        ScanConfig {
            truncate_on_error: options.truncate_on_error,
            reject_unordered: options.reject_unordered,
            initial_capacity: options.initial_capacity,
            pressure_column: options.pressure_column,
        }
    }
}

impl ScanConfig {
    pub fn options(&self) -> ScanOptions {
        ScanOptions {
            truncate_on_error: self.truncate_on_error,
            reject_unordered: self.reject_unordered,
            initial_capacity: self.initial_capacity,
            pressure_column: self.pressure_column,
        }
    }
}

impl Config {
    /// Load configuration from baro-trend.toml in the working directory
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!("Loaded configuration from {}", path.display());
                    config
                }
                Err(e) => {
                    warn!("Invalid config file {}: {}", path.display(), e);
                    warn!("Using default configuration");
                    Self::default()
                }
            },
            Err(_) => {
                info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
