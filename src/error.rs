//! # Error Types
//!
//! Every failure in the pressure-trend pipeline is a [`SlopeError`]. The
//! variants split into three groups:
//!
//! - **Line level**: a record or boundary whose text cannot be decoded or
//!   parsed (`InvalidEncoding`, `MalformedDateTime`, `MissingPressureField`,
//!   `MalformedPressure`)
//!   or whose calendar fields cannot be converted
//!   (`UnrepresentableCalendarValue`).
//! - **Scan level**: storage exhaustion, out-of-order input, read errors
//!   and an empty selection (`NoDataInRange`). A fatal error after points
//!   were collected arrives wrapped in `Aborted`, which carries the points.
//! - **Estimate level**: too few points or a zero-width time axis.
//!
//! The surrounding program only needs to know which [`FailureClass`] an
//! error belongs to, so it can pick a distinct exit status.

use crate::Point;
use std::{io, path::PathBuf};
use thiserror::Error;

/// Errors produced while parsing, scanning or estimating.
#[derive(Error, Debug)]
pub enum SlopeError {
    /// Date or time text does not match `YYYY_MM_DD` / `HH:MM:SS`
    #[error("malformed date/time: '{date}' '{time}'")]
    MalformedDateTime { date: String, time: String },

    /// Pressure column text is not a floating-point number
    #[error("malformed pressure value: '{0}'")]
    MalformedPressure(String),

    /// The line has no tab-separated pressure column
    #[error("missing pressure field")]
    MissingPressureField,

    /// A data line is not valid UTF-8
    #[error("line is not valid UTF-8")]
    InvalidEncoding,

    /// Calendar fields cannot be mapped to epoch seconds (e.g. month 13)
    #[error("unrepresentable calendar value: {0}")]
    UnrepresentableCalendarValue(String),

    /// Point storage could not grow
    #[error("cannot allocate storage for {requested} points")]
    AllocationError { requested: usize },

    /// A record is earlier than the record before it
    #[error("unordered input: {current} follows {previous}")]
    UnorderedInput { previous: String, current: String },

    /// No record fell inside the requested range
    #[error("no data in the requested range")]
    NoDataInRange,

    /// Fewer than two points were selected
    #[error("insufficient data: {points} point(s), at least 2 required")]
    InsufficientData { points: usize },

    /// Every selected point shares one timestamp
    #[error("degenerate range: all selected points share one timestamp")]
    DegenerateRange,

    /// A fatal error stopped the scan after points were collected
    #[error("scan aborted after {} point(s)", collected.len())]
    Aborted {
        #[source]
        source: Box<SlopeError>,
        /// Points accepted before the failure, in order
        collected: Vec<Point>,
    },

    /// A begin/end boundary argument failed to parse or convert
    #[error("cannot parse the {which} date & time value")]
    Boundary {
        which: &'static str,
        #[source]
        source: Box<SlopeError>,
    },

    /// The data file could not be opened
    #[error("cannot open the file '{}'", path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading the stream failed part way
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}

/// Coarse failure categories of the command-line program.
///
/// Each class maps to its own process exit status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    /// Wrong arguments
    Usage,
    /// Data file cannot be opened
    UnopenableFile,
    /// Begin or end boundary cannot be parsed
    InvalidBoundary,
    /// Nothing usable was selected
    EmptyResult,
    /// The data stream itself is bad
    InvalidData,
}

impl FailureClass {
    pub fn exit_code(self) -> u8 {
        match self {
            FailureClass::Usage => 1,
            FailureClass::InvalidBoundary => 2,
            FailureClass::UnopenableFile => 3,
            FailureClass::EmptyResult => 4,
            FailureClass::InvalidData => 5,
        }
    }
}

impl SlopeError {
    /// Failure class the program reports for this error.
    pub fn failure_class(&self) -> FailureClass {
        match self {
            SlopeError::Boundary { .. } => FailureClass::InvalidBoundary,
            SlopeError::Aborted { source, .. } => source.failure_class(),
            SlopeError::OpenInput { .. } => FailureClass::UnopenableFile,
            SlopeError::NoDataInRange
            | SlopeError::InsufficientData { .. }
            | SlopeError::DegenerateRange => FailureClass::EmptyResult,
            SlopeError::MalformedDateTime { .. }
            | SlopeError::MalformedPressure(_)
            | SlopeError::MissingPressureField
            | SlopeError::InvalidEncoding
            | SlopeError::UnrepresentableCalendarValue(_)
            | SlopeError::AllocationError { .. }
            | SlopeError::UnorderedInput { .. }
            | SlopeError::Io(_) => FailureClass::InvalidData,
        }
    }

    /// True for errors raised by a single malformed line.
    ///
    /// These are the errors the scanner may recover from by keeping the
    /// points collected so far.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            SlopeError::MalformedDateTime { .. }
                | SlopeError::MalformedPressure(_)
                | SlopeError::MissingPressureField
                | SlopeError::InvalidEncoding
                | SlopeError::UnrepresentableCalendarValue(_)
                | SlopeError::UnorderedInput { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SlopeError>;
