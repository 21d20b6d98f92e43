//! # Baro Trend Application Entry Point
//!
//! Parses the command line, opens the data file, runs the analysis and
//! prints the slope. Failures map to distinct exit statuses so scripts can
//! tell a usage error from a missing file, a bad boundary or an empty
//! selection.


use anyhow::Context;
use baro_trend_lib::{
    analyze,
    cli::Cli,
    config::{OutputConfig, OutputFormat},
    datetime::DateTime,
    error::{FailureClass, SlopeError},
    SlopeReport,
};
use clap::Parser;
use std::fmt::{self, Write as _};
use std::fs::File;
use std::io::BufReader;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for diagnostics on stderr
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::from_default_env().add_directive(tracing::Level::DEBUG.into())
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse one begin/end boundary argument pair.
fn parse_boundary(date: &str, time: &str, which: &'static str) -> Result<DateTime, SlopeError> {
    DateTime::parse(date, time).map_err(|source| SlopeError::Boundary {
        which,
        source: Box::new(source),
    })
}

/// Render a report as plain text.
fn render_text(report: &SlopeReport, output: &OutputConfig) -> Result<String, fmt::Error> {
    let mut out = String::new();
    writeln!(out, "Range used: {} .. {}", report.first, report.last)?;
    writeln!(out, "Points used: {}", report.points)?;
    if report.truncated {
        writeln!(out, "Note: scan stopped early at a malformed line")?;
    }
    if output.show_points {
        writeln!(out, "{:>12}  {:>12}", "elapsed_s", "pressure")?;
        for p in &report.samples {
            writeln!(out, "{:>12.0}  {:>12}", p.elapsed, p.pressure)?;
        }
    }
    writeln!(out, "Slope: {:.6e} per second", report.slope)?;
    if output.per_hour {
        writeln!(out, "Slope: {:.6} per hour", report.slope_per_hour())?;
    }
    Ok(out)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.resolve_config();

    let file = File::open(&cli.file).map_err(|source| SlopeError::OpenInput {
        path: cli.file.clone(),
        source,
    })?;

    let begin = parse_boundary(&cli.begin_date, &cli.begin_time, "begin")?;
    info!("The begin of the date & time range: {}", begin);
    let end = parse_boundary(&cli.end_date, &cli.end_time, "end")?;
    info!("The end of the date & time range: {}", end);

    let report = analyze(
        BufReader::new(file),
        &begin,
        &end,
        &config.scan.options(),
        config.output.show_points,
    )
    .with_context(|| format!("analyzing '{}'", cli.file.display()))?;

    match config.output.format {
        OutputFormat::Text => print!("{}", render_text(&report, &config.output)?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

/// Main application entry point.
fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Help and version go to stdout and are not failures
            let code = if err.use_stderr() {
                FailureClass::Usage.exit_code()
            } else {
                0
            };
            let _ = err.print();
            return ExitCode::from(code);
        }
    };

    init_tracing(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("!--Error: {:#}", err);
            let class = err
                .downcast_ref::<SlopeError>()
                .map(SlopeError::failure_class)
                .unwrap_or(FailureClass::InvalidData);
            ExitCode::from(class.exit_code())
        }
    }
}
