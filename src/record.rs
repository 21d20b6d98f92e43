//! # Sensor Log Record Parsing
//!
//! A data line looks like:
//!
//! ```text
//! 2012_01_01 00:02:14	34.30	30.50	26.90	74.20	346.40	11.00	 3.60
//! ```
//!
//! Columns are TAB separated. The first column holds the date and time
//! tokens separated by whitespace; the remaining columns hold sensor
//! readings. Which column carries barometric pressure is configurable
//! (see [`DEFAULT_PRESSURE_COLUMN`]).

use crate::datetime::DateTime;
use crate::error::{Result, SlopeError};
use std::num::NonZeroUsize;

/// Tab-separated column holding barometric pressure.
///
/// Column 0 is the timestamp, column 1 air temperature, column 2 pressure.
pub const DEFAULT_PRESSURE_COLUMN: usize = 2;

/// One parsed log line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Record {
    pub timestamp: DateTime,
    pub pressure: f64,
}

/// Parse a line using the default pressure column.
pub fn parse_line(line: &str) -> Result<Record> {
    let column = NonZeroUsize::new(DEFAULT_PRESSURE_COLUMN).unwrap_or(NonZeroUsize::MIN);
    parse_line_with_column(line, column)
}

/// Parse a line, reading pressure from tab-separated column `pressure_column`.
///
/// Column 0 is always the timestamp.
pub fn parse_line_with_column(line: &str, pressure_column: NonZeroUsize) -> Result<Record> {
    let mut tokens = line.split_whitespace();
    let date = tokens.next().unwrap_or("");
    let time = tokens.next().unwrap_or("");
    let timestamp = DateTime::parse(date, time)?;

    if !line.contains('\t') {
        return Err(SlopeError::MissingPressureField);
    }

    let text = line
        .split('\t')
        .nth(pressure_column.get())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(SlopeError::MissingPressureField)?;

    let pressure = text
        .parse::<f64>()
        .map_err(|_| SlopeError::MalformedPressure(text.to_string()))?;

    Ok(Record {
        timestamp,
        pressure,
    })
}
