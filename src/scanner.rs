//! # Range Scanner
//!
//! Walks a time-ordered sensor log once, selecting the contiguous run of
//! records whose timestamps fall inside `[begin, end]`.
//!
//! ## State Machine
//!
//! ```text
//!            ts < begin            begin <= ts <= end
//!          ┌──────────┐          ┌──────────┐
//!          ▼          │          ▼          │
//!     BeforeRange ────┴──▶  InRange ────────┴──▶ Done
//!          │   begin <= ts <= end      ts outside range
//!          └──────────────────────────────────▶ Done
//!                    ts > end
//! ```
//!
//! The first included record anchors the time axis: its elapsed time is
//! zero and every later point is measured from it. Once the run ends the
//! rest of the stream is never read.
//!
//! ## Bad Lines
//!
//! A line that fails to parse ends the scan. With no points collected the
//! error is returned. With points collected,
//! [`ScanOptions::truncate_on_error`] decides whether the prefix is kept
//! as a truncated result or the error is returned.

use crate::buffer::{PointBuffer, DEFAULT_INITIAL_CAPACITY};
use crate::datetime::DateTime;
use crate::error::{Result, SlopeError};
use crate::record::{parse_line_with_column, Record, DEFAULT_PRESSURE_COLUMN};
use crate::Point;
use serde::Serialize;
use std::io::BufRead;
use std::num::NonZeroUsize;
use tracing::{debug, info, warn};

/// Scan behaviour switches.
#[derive(Clone, Debug, PartialEq)]
pub struct ScanOptions {
    /// Keep points collected before a bad line instead of failing
    pub truncate_on_error: bool,
    /// Fail on a record earlier than its predecessor
    pub reject_unordered: bool,
    /// Starting capacity of the point buffer
    pub initial_capacity: NonZeroUsize,
    /// Tab-separated column holding pressure (column 0 is the timestamp)
    pub pressure_column: NonZeroUsize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        ScanOptions {
            truncate_on_error: true,
            reject_unordered: true,
            initial_capacity: NonZeroUsize::new(DEFAULT_INITIAL_CAPACITY)
                .unwrap_or(NonZeroUsize::MIN),
            pressure_column: NonZeroUsize::new(DEFAULT_PRESSURE_COLUMN)
                .unwrap_or(NonZeroUsize::MIN),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    BeforeRange,
    InRange,
    Done,
}

/// Why a successful scan stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// A record past the run was seen
    PastEnd,
    /// The stream ran out
    Exhausted,
    /// A bad line cut the run short (1-based line number)
    BadLine { line: usize },
}

/// Result of a successful scan: at least one point.
#[derive(Debug)]
pub struct ScanOutcome {
    pub buffer: PointBuffer,
    /// Timestamp of the anchor point
    pub first: DateTime,
    /// Timestamp of the last included point
    pub last: DateTime,
    pub stop: StopReason,
    /// Lines consumed, header included
    pub lines_read: usize,
}

impl ScanOutcome {
    pub fn is_truncated(&self) -> bool {
        matches!(self.stop, StopReason::BadLine { .. })
    }
}

/// Incremental scanner fed one record at a time.
#[derive(Debug)]
pub struct RangeScanner {
    begin: i64,
    end: i64,
    options: ScanOptions,
    state: ScanState,
    origin: i64,
    previous: Option<(i64, DateTime)>,
    first: Option<DateTime>,
    last: Option<DateTime>,
    buffer: PointBuffer,
}

impl RangeScanner {
    /// Create a scanner for `[begin, end]`.
    ///
    /// Boundaries that cannot be converted to epoch seconds fail with
    /// `SlopeError::Boundary`.
    pub fn new(begin: &DateTime, end: &DateTime, options: ScanOptions) -> Result<Self> {
        let begin_secs = boundary_seconds(begin, "begin")?;
        let end_secs = boundary_seconds(end, "end")?;
        if begin_secs > end_secs {
            warn!("Begin {} is after end {}; nothing can be selected", begin, end);
        }
        let buffer = PointBuffer::new(options.initial_capacity)?;

        Ok(RangeScanner {
            begin: begin_secs,
            end: end_secs,
            options,
            state: ScanState::BeforeRange,
            origin: 0,
            previous: None,
            first: None,
            last: None,
            buffer,
        })
    }

    pub fn state(&self) -> ScanState {
        self.state
    }

    pub fn points(&self) -> &PointBuffer {
        &self.buffer
    }

    /// Advance the state machine by one record.
    pub fn feed(&mut self, record: Record) -> Result<ScanState> {
        if self.state == ScanState::Done {
            return Ok(ScanState::Done);
        }

        let secs = record.timestamp.to_epoch_seconds()?;
        if let Some((prev_secs, prev_ts)) = self.previous {
            if self.options.reject_unordered && secs < prev_secs {
                return Err(SlopeError::UnorderedInput {
                    previous: prev_ts.to_string(),
                    current: record.timestamp.to_string(),
                });
            }
        }
        self.previous = Some((secs, record.timestamp));

        let in_range = self.begin <= secs && secs <= self.end;
        let state = self.state;
        match state {
            ScanState::BeforeRange if secs < self.begin => {}
            ScanState::BeforeRange if in_range => {
                self.origin = secs;
                self.first = Some(record.timestamp);
                self.include(&record, 0.0)?;
                self.state = ScanState::InRange;
                info!("Range entered at {}", record.timestamp);
            }
            ScanState::BeforeRange => {
                info!("Range skipped: {} is past the end", record.timestamp);
                self.state = ScanState::Done;
            }
            ScanState::InRange if in_range => {
                self.include(&record, (secs - self.origin) as f64)?;
            }
            ScanState::InRange => {
                debug!("Run ended at {}", record.timestamp);
                self.state = ScanState::Done;
            }
            ScanState::Done => {}
        }
        Ok(self.state)
    }

    fn include(&mut self, record: &Record, elapsed: f64) -> Result<()> {
        debug!("{}  {:>10.0}  {}", record.timestamp, elapsed, record.pressure);
        self.buffer.append(Point {
            elapsed,
            pressure: record.pressure,
        })?;
        self.last = Some(record.timestamp);
        Ok(())
    }

    /// Finish after the stream stopped for `stop`.
    pub fn finish(self, stop: StopReason, lines_read: usize) -> Result<ScanOutcome> {
        match (self.first, self.last) {
            (Some(first), Some(last)) => Ok(ScanOutcome {
                buffer: self.buffer,
                first,
                last,
                stop,
                lines_read,
            }),
            _ => Err(SlopeError::NoDataInRange),
        }
    }

    /// Finish after a bad line, applying the truncation policy.
    pub fn abort(self, error: SlopeError, line: usize) -> Result<ScanOutcome> {
        if self.buffer.is_empty() || !self.options.truncate_on_error {
            return Err(error);
        }
        warn!(
            "Line {}: {}; keeping the {} point(s) collected before it",
            line,
            error,
            self.buffer.size()
        );
        self.finish(StopReason::BadLine { line }, line)
    }

    /// Wrap a fatal error, handing back any points collected so far.
    pub fn interrupt(self, error: SlopeError) -> SlopeError {
        if self.buffer.is_empty() {
            return error;
        }
        warn!(
            "Scan aborted with {} point(s) collected: {}",
            self.buffer.size(),
            error
        );
        SlopeError::Aborted {
            source: Box::new(error),
            collected: self.buffer.as_slice().to_vec(),
        }
    }
}

fn boundary_seconds(value: &DateTime, which: &'static str) -> Result<i64> {
    value
        .to_epoch_seconds()
        .map_err(|source| SlopeError::Boundary {
            which,
            source: Box::new(source),
        })
}

/// Scan `reader` for the run inside `[begin, end]`.
///
/// The first line is a header and is skipped without decoding. Lines have
/// no length limit; a data line that is not valid UTF-8 is a bad line.
///
/// # Example
/// ```
/// use baro_trend_lib::datetime::DateTime;
/// use baro_trend_lib::scanner::{scan, ScanOptions};
///
/// let data = "date time\tAir_Temp\tBarometric_Press\n\
///             2012_04_01 00:00:00\t5.0\t30.10\n\
///             2012_04_01 00:05:00\t5.1\t30.12\n\
///             2012_04_01 00:10:00\t5.2\t30.15\n";
/// let begin = DateTime::parse("2012_04_01", "00:05:00").unwrap();
/// let end = DateTime::parse("2012_04_01", "00:10:00").unwrap();
///
/// let outcome = scan(data.as_bytes(), &begin, &end, &ScanOptions::default()).unwrap();
/// assert_eq!(outcome.buffer.size(), 2);
/// ```
pub fn scan<R: BufRead>(
    mut reader: R,
    begin: &DateTime,
    end: &DateTime,
    options: &ScanOptions,
) -> Result<ScanOutcome> {
    let mut scanner = RangeScanner::new(begin, end, options.clone())?;
    let mut line = Vec::new();

    // Header bytes are never decoded
    if reader.read_until(b'\n', &mut line)? == 0 {
        return Err(SlopeError::NoDataInRange);
    }
    let mut line_no = 1;

    let stop = loop {
        line.clear();
        match reader.read_until(b'\n', &mut line) {
            Ok(0) => break StopReason::Exhausted,
            Ok(_) => {}
            Err(err) => return Err(scanner.interrupt(err.into())),
        }
        line_no += 1;

        let step = std::str::from_utf8(&line)
            .map_err(|_| SlopeError::InvalidEncoding)
            .and_then(|text| parse_line_with_column(text, options.pressure_column))
            .and_then(|record| scanner.feed(record));
        match step {
            Ok(ScanState::Done) => break StopReason::PastEnd,
            Ok(_) => {}
            Err(err) if err.is_line_error() => return scanner.abort(err, line_no),
            Err(err) => return Err(scanner.interrupt(err)),
        }
    };

    debug!("Scan stopped ({:?}) after {} line(s)", stop, line_no);
    scanner.finish(stop, line_no)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Read};

    const HEADER: &str = "date       time    \tAir_Temp\tBarometric_Press\n";

    fn dt(date: &str, time: &str) -> DateTime {
        DateTime::parse(date, time).unwrap()
    }

    fn log(rows: &[(&str, f64)]) -> String {
        let mut out = String::from(HEADER);
        for (stamp, pressure) in rows {
            out.push_str(&format!("{stamp}\t40.0\t{pressure}\n"));
        }
        out
    }

    fn elapsed(outcome: &ScanOutcome) -> Vec<f64> {
        outcome.buffer.iter().map(|p| p.elapsed).collect()
    }

    #[test]
    fn selects_run_between_boundaries() {
        let data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:05:00", 30.1),
            ("2012_04_01 00:07:30", 30.2),
            ("2012_04_01 00:10:00", 30.3),
            ("2012_04_01 00:15:00", 30.4),
        ]);
        let begin = dt("2012_04_01", "00:05:00");
        let end = dt("2012_04_01", "00:10:00");

        let outcome = scan(data.as_bytes(), &begin, &end, &ScanOptions::default()).unwrap();

        assert_eq!(elapsed(&outcome), vec![0.0, 150.0, 300.0]);
        let pressures: Vec<f64> = outcome.buffer.iter().map(|p| p.pressure).collect();
        assert_eq!(pressures, vec![30.1, 30.2, 30.3]);
        assert_eq!(outcome.first, begin);
        assert_eq!(outcome.last, end);
        assert_eq!(outcome.stop, StopReason::PastEnd);
        assert_eq!(outcome.lines_read, 6);
    }

    #[test]
    fn anchor_is_first_included_record_not_begin() {
        let data = log(&[
            ("2012_04_01 00:02:14", 30.0),
            ("2012_04_01 00:12:14", 30.1),
        ]);
        let begin = dt("2012_04_01", "00:00:00");
        let end = dt("2012_04_01", "23:59:59");

        let outcome = scan(data.as_bytes(), &begin, &end, &ScanOptions::default()).unwrap();

        assert_eq!(elapsed(&outcome), vec![0.0, 600.0]);
        assert_eq!(outcome.stop, StopReason::Exhausted);
    }

    #[test]
    fn records_before_range_only_yield_no_data() {
        let data = log(&[
            ("2012_03_01 00:00:00", 30.0),
            ("2012_03_02 00:00:00", 30.1),
        ]);
        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_30", "00:00:00"),
            &ScanOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::NoDataInRange));
    }

    #[test]
    fn range_falling_between_records_yields_no_data() {
        let data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 01:00:00", 30.1),
            ("this line is never read", 0.0),
        ]);
        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:10:00"),
            &dt("2012_04_01", "00:20:00"),
            &ScanOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::NoDataInRange));
    }

    #[test]
    fn reversed_boundaries_yield_no_data() {
        let data = log(&[("2012_04_01 00:10:00", 30.0)]);
        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:20:00"),
            &dt("2012_04_01", "00:00:00"),
            &ScanOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::NoDataInRange));
    }

    #[test]
    fn empty_stream_and_header_only_yield_no_data() {
        let begin = dt("2012_04_01", "00:00:00");
        let end = dt("2012_04_02", "00:00:00");
        for data in ["", HEADER] {
            let err = scan(data.as_bytes(), &begin, &end, &ScanOptions::default()).unwrap_err();
            assert!(matches!(err, SlopeError::NoDataInRange));
        }
    }

    #[test]
    fn stops_reading_after_run_ends() {
        let mut data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:10:00", 30.1),
        ]);
        data.push_str("garbage past the end\n");
        let outcome = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "00:05:00"),
            &ScanOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome.buffer.size(), 1);
        assert_eq!(outcome.stop, StopReason::PastEnd);
    }

    #[test]
    fn bad_line_keeps_prefix_when_truncating() {
        let mut data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:10:00", 30.1),
        ]);
        data.push_str("2012_04_01 00:20:00 no tab here\n");
        data.push_str("2012_04_01 00:30:00\t40.0\t30.3\n");

        let options = ScanOptions {
            truncate_on_error: true,
            ..ScanOptions::default()
        };
        let outcome = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &options,
        )
        .unwrap();

        assert_eq!(outcome.buffer.size(), 2);
        assert_eq!(outcome.stop, StopReason::BadLine { line: 4 });
        assert!(outcome.is_truncated());
    }

    #[test]
    fn bad_line_fails_when_not_truncating() {
        let mut data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:10:00", 30.1),
        ]);
        data.push_str("2012_04_01 00:20:00\t40.0\tbroken\n");

        let options = ScanOptions {
            truncate_on_error: false,
            ..ScanOptions::default()
        };
        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::MalformedPressure(_)));
    }

    #[test]
    fn bad_line_before_range_always_fails() {
        let mut data = String::from(HEADER);
        data.push_str("not a record\n");
        data.push_str("2012_04_01 00:00:00\t40.0\t30.0\n");

        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &ScanOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::MalformedDateTime { .. }));
    }

    #[test]
    fn unrepresentable_record_is_a_line_error() {
        let mut data = log(&[("2012_04_01 00:00:00", 30.0)]);
        data.push_str("2012_04_99 00:00:00\t40.0\t30.1\n");

        let outcome = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_05_01", "00:00:00"),
            &ScanOptions::default(),
        )
        .unwrap();
        assert_eq!(outcome.stop, StopReason::BadLine { line: 3 });
    }

    #[test]
    fn unordered_input_is_rejected() {
        let data = log(&[
            ("2012_04_01 00:10:00", 30.0),
            ("2012_04_01 00:05:00", 30.1),
        ]);
        let options = ScanOptions {
            truncate_on_error: false,
            ..ScanOptions::default()
        };
        let err = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &options,
        )
        .unwrap_err();
        assert!(matches!(err, SlopeError::UnorderedInput { .. }));
    }

    #[test]
    fn unordered_record_ends_run_when_allowed() {
        let data = log(&[
            ("2012_04_01 00:10:00", 30.0),
            ("2012_04_01 00:20:00", 30.1),
            ("2012_04_01 00:00:00", 30.2),
            ("2012_04_01 00:30:00", 30.3),
        ]);
        let options = ScanOptions {
            reject_unordered: false,
            ..ScanOptions::default()
        };
        let outcome = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:05:00"),
            &dt("2012_04_01", "01:00:00"),
            &options,
        )
        .unwrap();
        assert_eq!(elapsed(&outcome), vec![0.0, 600.0]);
        assert_eq!(outcome.stop, StopReason::PastEnd);
    }

    #[test]
    fn invalid_boundary_is_reported_as_boundary() {
        let err = RangeScanner::new(
            &dt("2012_02_30", "00:00:00"),
            &dt("2012_03_01", "00:00:00"),
            ScanOptions::default(),
        )
        .unwrap_err();
        match err {
            SlopeError::Boundary { which, source } => {
                assert_eq!(which, "begin");
                assert!(matches!(*source, SlopeError::UnrepresentableCalendarValue(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn feeding_after_done_is_a_no_op() {
        let mut scanner = RangeScanner::new(
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "00:00:10"),
            ScanOptions::default(),
        )
        .unwrap();
        let rec = |s: &str, p: f64| Record {
            timestamp: dt("2012_04_01", s),
            pressure: p,
        };

        assert_eq!(scanner.feed(rec("00:00:00", 1.0)).unwrap(), ScanState::InRange);
        assert_eq!(scanner.feed(rec("00:00:20", 2.0)).unwrap(), ScanState::Done);
        assert_eq!(scanner.feed(rec("00:00:05", 3.0)).unwrap(), ScanState::Done);
        assert_eq!(scanner.state(), ScanState::Done);
        assert_eq!(scanner.points().size(), 1);
    }

    #[test]
    fn run_grows_past_initial_capacity() {
        let rows: Vec<(String, f64)> = (0..50)
            .map(|i| (format!("2012_04_01 00:{:02}:00", i), 30.0 + i as f64))
            .collect();
        let borrowed: Vec<(&str, f64)> = rows.iter().map(|(s, p)| (s.as_str(), *p)).collect();
        let data = log(&borrowed);
        let options = ScanOptions {
            initial_capacity: NonZeroUsize::new(2).unwrap(),
            ..ScanOptions::default()
        };

        let outcome = scan(
            data.as_bytes(),
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &options,
        )
        .unwrap();
        assert_eq!(outcome.buffer.size(), 50);
        assert_eq!(outcome.buffer.capacity(), 64);
        assert_eq!(outcome.buffer.last().unwrap().elapsed, 49.0 * 60.0);
    }

    #[test]
    fn non_utf8_header_is_skipped() {
        let data = b"date time\tAir_Temp \xb0F\tBarometric_Press\n\
                     2012_04_01 00:00:00\t40.0\t30.0\n\
                     2012_04_01 00:10:00\t40.0\t30.6\n";
        let outcome = scan(
            &data[..],
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &ScanOptions::default(),
        )
        .unwrap();
        assert_eq!(elapsed(&outcome), vec![0.0, 600.0]);
        assert_eq!(outcome.stop, StopReason::Exhausted);
    }

    #[test]
    fn non_utf8_line_follows_truncation_policy() {
        let mut data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:10:00", 30.1),
        ])
        .into_bytes();
        data.extend_from_slice(b"2012_04_01 00:20:00\t\xff\t30.2\n");
        let begin = dt("2012_04_01", "00:00:00");
        let end = dt("2012_04_01", "01:00:00");

        let outcome = scan(&data[..], &begin, &end, &ScanOptions::default()).unwrap();
        assert_eq!(outcome.buffer.size(), 2);
        assert_eq!(outcome.stop, StopReason::BadLine { line: 4 });

        let strict = ScanOptions {
            truncate_on_error: false,
            ..ScanOptions::default()
        };
        let err = scan(&data[..], &begin, &end, &strict).unwrap_err();
        assert!(matches!(err, SlopeError::InvalidEncoding));
    }

    /// Reader that serves `data` and then fails.
    struct FailingReader {
        data: io::Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::other("device unplugged")),
                n => Ok(n),
            }
        }
    }

    #[test]
    fn read_failure_hands_back_collected_points() {
        let data = log(&[
            ("2012_04_01 00:00:00", 30.0),
            ("2012_04_01 00:10:00", 30.1),
        ]);
        let reader = BufReader::new(FailingReader {
            data: io::Cursor::new(data.into_bytes()),
        });

        let err = scan(
            reader,
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            &ScanOptions::default(),
        )
        .unwrap_err();

        match err {
            SlopeError::Aborted { source, collected } => {
                assert!(matches!(*source, SlopeError::Io(_)));
                let elapsed: Vec<f64> = collected.iter().map(|p| p.elapsed).collect();
                assert_eq!(elapsed, vec![0.0, 600.0]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn interrupt_without_points_returns_cause() {
        let scanner = RangeScanner::new(
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            ScanOptions::default(),
        )
        .unwrap();
        let err = scanner.interrupt(SlopeError::AllocationError { requested: 20 });
        assert!(matches!(err, SlopeError::AllocationError { requested: 20 }));
    }

    #[test]
    fn allocation_failure_keeps_collected_points() {
        let mut scanner = RangeScanner::new(
            &dt("2012_04_01", "00:00:00"),
            &dt("2012_04_01", "01:00:00"),
            ScanOptions::default(),
        )
        .unwrap();
        for (i, time) in ["00:00:00", "00:05:00", "00:10:00"].iter().enumerate() {
            scanner
                .feed(Record {
                    timestamp: dt("2012_04_01", time),
                    pressure: 30.0 + i as f64,
                })
                .unwrap();
        }

        let err = scanner.interrupt(SlopeError::AllocationError { requested: 20 });
        match err {
            SlopeError::Aborted { source, collected } => {
                assert!(matches!(*source, SlopeError::AllocationError { .. }));
                assert_eq!(collected.len(), 3);
                assert_eq!(collected[2].elapsed, 600.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
