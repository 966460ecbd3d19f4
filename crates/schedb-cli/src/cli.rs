//! CLI argument definitions for the schedb converter.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "schedb",
    version,
    about = "Transform a course catalog into a schedule database",
    long_about = "Transform a course catalog XML document (flat COURSE/SECTION/PERIOD/NOTE \
                  records) into the schedb XML document read by the scheduler.\n\n\
                  Courses are grouped by department, meeting codes are expanded, and \
                  section notes are collected per course."
)]
pub struct Cli {
    /// Course catalog XML to read.
    #[arg(value_name = "INFILE")]
    pub infile: PathBuf,

    /// Path of the schedb XML to write.
    #[arg(value_name = "OUTFILE")]
    pub outfile: PathBuf,

    /// Value for the `generated` attribute (default: catalog export time, or now).
    #[arg(long = "generated", value_name = "TEXT")]
    pub generated: Option<String>,

    /// Spaces per nesting level in the output document.
    #[arg(long = "indent", value_name = "N", default_value_t = 2)]
    pub indent: usize,

    /// Convert and report without writing OUTFILE.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Do not print the per-department summary table.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps")]
    pub log_timestamps: bool,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
