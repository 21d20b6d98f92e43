//! # Barometric Pressure Trend Library
//!
//! This library computes the least-squares trend of barometric pressure
//! over a date range of a time-ordered sensor log.
//!
//! ## Data Flow
//! 1. **Parse**: each line becomes a [`record::Record`] (timestamp + pressure)
//! 2. **Select**: [`scanner`] keeps the contiguous run inside `[begin, end]`
//!    and measures elapsed time from the first selected record
//! 3. **Store**: selected [`Point`]s go into a [`buffer::PointBuffer`]
//! 4. **Fit**: [`slope`] accumulates the regression sums and solves for the
//!    slope in pressure units per second
//!
//! The stream is read once and never past the end of the selected run.
//!
//! ## Core Types
//! - [`Point`]: one selected sample on the regression axes
//! - [`SlopeReport`]: the fitted slope with the facts needed to interpret it

use serde::Serialize;
use std::io::BufRead;
use tracing::info;

pub mod buffer;
pub mod cli;
pub mod config;
pub mod datetime;
pub mod error;
pub mod record;
pub mod scanner;
pub mod slope;

use datetime::DateTime;
use error::Result;
use scanner::{ScanOptions, StopReason};
use slope::RegressionSums;

/// One selected sample.
///
/// `elapsed` is seconds since the first point of the run, so the first
/// point always has `elapsed == 0.0`.
///
/// # Example
/// ```
/// use baro_trend_lib::Point;
///
/// let anchor = Point { elapsed: 0.0, pressure: 30.12 };
/// let later = Point { elapsed: 600.0, pressure: 30.15 };
/// assert!(later.elapsed > anchor.elapsed);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Point {
    /// Seconds since the run's first point
    pub elapsed: f64,
    /// Barometric pressure, in the log's own units
    pub pressure: f64,
}

/// Outcome of a full analysis.
#[derive(Clone, Debug, Serialize)]
pub struct SlopeReport {
    /// Pressure change per second
    pub slope: f64,
    /// Number of points used in the fit
    pub points: usize,
    /// Timestamp of the first point used
    pub first: DateTime,
    /// Timestamp of the last point used
    pub last: DateTime,
    /// How the scan ended
    pub stop: StopReason,
    /// True when a bad line cut the run short
    pub truncated: bool,
    pub sums: RegressionSums,
    /// Selected points, only filled when requested
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<Point>,
}

impl SlopeReport {
    /// Pressure change per hour.
    pub fn slope_per_hour(&self) -> f64 {
        self.slope * 3600.0
    }
}

/// Scan `reader` for `[begin, end]` and fit the pressure trend.
///
/// When `keep_points` is set the selected points are copied into the
/// report.
pub fn analyze<R: BufRead>(
    reader: R,
    begin: &DateTime,
    end: &DateTime,
    options: &ScanOptions,
    keep_points: bool,
) -> Result<SlopeReport> {
    let outcome = scanner::scan(reader, begin, end, options)?;
    let (slope, sums) = slope::estimate_with_sums(&outcome.buffer)?;

    info!(
        "Fitted {} point(s) from {} to {}: slope {:e}/s",
        sums.n, outcome.first, outcome.last, slope
    );

    let samples = if keep_points {
        outcome.buffer.as_slice().to_vec()
    } else {
        Vec::new()
    };

    Ok(SlopeReport {
        slope,
        points: outcome.buffer.size(),
        first: outcome.first,
        last: outcome.last,
        stop: outcome.stop,
        truncated: outcome.is_truncated(),
        sums,
        samples,
    })
}
