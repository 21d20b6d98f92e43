//! # Calendar Date-Time Values
//!
//! Sensor logs stamp every record with a date token `YYYY_MM_DD` and a
//! time token `HH:MM:SS`. The same two-token form is used for the begin
//! and end boundaries of the analysis range.
//!
//! Parsing only checks the *shape* of the text. Calendar validity (month
//! 13, day 99) is checked later, when the value is converted to epoch
//! seconds with chrono. All values are naive: no timezone is applied, so
//! epoch seconds are only meaningful for comparison and differencing.

use crate::error::{Result, SlopeError};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// A timezone-free calendar date and wall-clock time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DateTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl DateTime {
    /// Parse a `YYYY_MM_DD` date token and a `HH:MM:SS` time token.
    ///
    /// The year must have exactly four digits; every other field takes one
    /// or two. Each token must match its pattern in full.
    ///
    /// # Example
    /// ```
    /// use baro_trend_lib::datetime::DateTime;
    ///
    /// let dt = DateTime::parse("2012_04_01", "00:00:05").unwrap();
    /// assert_eq!(dt.to_string(), "2012-04-01, 00:00:05");
    /// ```
    pub fn parse(date_text: &str, time_text: &str) -> Result<Self> {
        let malformed = || SlopeError::MalformedDateTime {
            date: date_text.to_string(),
            time: time_text.to_string(),
        };

        let [year, month, day] =
            split_fields(date_text, '_', [(4, 4), (1, 2), (1, 2)]).ok_or_else(malformed)?;
        let [hour, minute, second] =
            split_fields(time_text, ':', [(1, 2), (1, 2), (1, 2)]).ok_or_else(malformed)?;

        Ok(DateTime {
            year: year as i32,
            month,
            day,
            hour,
            minute,
            second,
        })
    }

    /// Seconds since 1970-01-01 00:00:00, treating the value as UTC.
    ///
    /// Fails with `UnrepresentableCalendarValue` when any field is out of
    /// its calendar range; values are never normalized.
    pub fn to_epoch_seconds(&self) -> Result<i64> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
            .and_then(|date| date.and_hms_opt(self.hour, self.minute, self.second))
            .map(|naive| naive.and_utc().timestamp())
            .ok_or_else(|| SlopeError::UnrepresentableCalendarValue(self.to_string()))
    }
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02}, {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Split `text` into exactly three unsigned decimal fields joined by `sep`,
/// each with a digit count inside its `(min, max)` width.
fn split_fields(text: &str, sep: char, widths: [(usize, usize); 3]) -> Option<[u32; 3]> {
    let mut parts = text.split(sep);
    let mut out = [0u32; 3];

    for (slot, (min, max)) in out.iter_mut().zip(widths) {
        let part = parts.next()?;
        if part.len() < min || part.len() > max || !part.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        *slot = part.parse().ok()?;
    }

    // Anything left over means the token has extra separators
    if parts.next().is_some() {
        return None;
    }
    Some(out)
}
