//! CLI argument parsing for baro-trend

use crate::config::{Config, OutputFormat};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "baro-trend")]
#[command(version)]
#[command(
    about = "Least-squares barometric pressure slope over a date range",
    long_about = "Least-squares barometric pressure slope over a date range.\n\n\
                  Dates use yyyy_mm_dd and times use hh:mm:ss, e.g.\n  \
                  baro-trend Env_Data_Deep_Moor_2012.txt 2012_04_01 00:00:00 2012_05_01 23:59:59"
)]
pub struct Cli {
    /// Weather data file (first line is a header)
    pub file: PathBuf,

    /// Begin date (yyyy_mm_dd)
    pub begin_date: String,

    /// Begin time (hh:mm:ss)
    pub begin_time: String,

    /// End date (yyyy_mm_dd)
    pub end_date: String,

    /// End time (hh:mm:ss)
    pub end_time: String,

    /// Configuration file (default: ./baro-trend.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Keep points read before a malformed line (true) or fail (false)
    #[arg(long = "truncate-on-error", value_name = "BOOL")]
    pub truncate_on_error: Option<bool>,

    /// Accept timestamps that go backwards (the run ends there)
    #[arg(long = "allow-unordered")]
    pub allow_unordered: bool,

    /// Output format
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormat>,

    /// Print the selected points
    #[arg(long = "points")]
    pub points: bool,

    /// Also print the slope per hour
    #[arg(long = "per-hour")]
    pub per_hour: bool,

    /// Enable debug diagnostics on stderr
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Load the configured file and apply command-line overrides.
    pub fn resolve_config(&self) -> Config {
        let mut config = match &self.config {
            Some(path) => Config::load_from_path(path),
            None => Config::load(),
        };
        if let Some(truncate) = self.truncate_on_error {
            config.scan.truncate_on_error = truncate;
        }
        if self.allow_unordered {
            config.scan.reject_unordered = false;
        }
        if let Some(format) = self.format {
            config.output.format = format;
        }
        config.output.show_points |= self.points;
        config.output.per_hour |= self.per_hour;
        config
    }
}
