//! CLI argument definitions.

use std::path::PathBuf;

use clap::builder::TypedValueParser;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use delim_ingest::{DEFAULT_SAMPLE_LINES, DetectionPolicy};
use delim_model::DelimiterFormat;

#[derive(Parser)]
#[command(
    name = "delimkit",
    version,
    about = "Identify delimited file formats and clean metric tables for database ingestion",
    long_about = "Identify the delimiter of TSV/CSV/pipe/semicolon files and clean metric tables.\n\n\
                  Multiplier (20.8x), percentage (29%) and N/A values are normalized, then\n\
                  written out as a clean CSV and as CREATE TABLE / INSERT INTO statements."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Detect the delimiter of a file and report a confidence score.
    Identify(IdentifyArgs),

    /// Normalize a delimited file and write cleaned CSV and SQL outputs.
    Clean(CleanArgs),
}

#[derive(Args)]
pub struct IdentifyArgs {
    /// Path to the file to analyze.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Number of lines to sample.
    #[arg(
        long = "sample-lines",
        value_name = "N",
        default_value_t = DEFAULT_SAMPLE_LINES,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub sample_lines: usize,

    /// Only print the format name (for scripting).
    #[arg(long = "name-only", conflicts_with_all = ["details", "json"])]
    pub name_only: bool,

    /// Include a structural analysis of the sampled lines.
    #[arg(long = "details")]
    pub details: bool,

    /// Print the report as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct CleanArgs {
    /// Path to the file to process.
    #[arg(value_name = "INPUT_FILE")]
    pub input_file: PathBuf,

    /// Output path for the cleaned CSV file.
    #[arg(
        short = 'o',
        long = "output-csv",
        value_name = "PATH",
        default_value = "cleaned_data.csv"
    )]
    pub output_csv: PathBuf,

    /// Output path for the SQL statements.
    #[arg(
        short = 's',
        long = "output-sql",
        value_name = "PATH",
        default_value = "insert_statements.sql"
    )]
    pub output_sql: PathBuf,

    /// Name of the database table.
    #[arg(
        short = 't',
        long = "table-name",
        value_name = "NAME",
        default_value = delim_output::DEFAULT_TABLE_NAME
    )]
    pub table_name: String,

    /// Force TSV format (tab-delimited).
    #[arg(long = "tsv")]
    pub tsv: bool,

    /// Force CSV format (comma-delimited).
    #[arg(long = "csv")]
    pub csv: bool,

    /// Force pipe-delimited format.
    #[arg(long = "pipe")]
    pub pipe: bool,

    /// Force semicolon-delimited format.
    #[arg(long = "semicolon")]
    pub semicolon: bool,

    /// Force a custom delimiter character (escapes such as "\t" are decoded).
    #[arg(short = 'd', long = "delimiter", value_name = "DELIM")]
    pub delimiter: Option<String>,

    /// Auto-detection strategy.
    #[arg(long = "detection", value_enum, default_value = "highest-count")]
    pub detection: DetectionArg,

    /// Number of lines to sample for auto-detection.
    #[arg(
        long = "sample-lines",
        value_name = "N",
        default_value_t = DEFAULT_SAMPLE_LINES,
        value_parser = clap::value_parser!(u64).range(1..).map(|n| n as usize)
    )]
    pub sample_lines: usize,

    /// Number of cleaned rows to display.
    #[arg(long = "sample-rows", value_name = "N", default_value_t = 3)]
    pub sample_rows: usize,

    /// Skip CSV output generation.
    #[arg(long = "no-csv")]
    pub no_csv: bool,

    /// Skip SQL output generation.
    #[arg(long = "no-sql")]
    pub no_sql: bool,

    /// Suppress informational output.
    #[arg(long = "silent")]
    pub silent: bool,
}

impl CleanArgs {
    /// Named formats requested through flags, in flag order.
    pub fn format_flags(&self) -> Vec<DelimiterFormat> {
        [
            (self.tsv, DelimiterFormat::Tsv),
            (self.csv, DelimiterFormat::Csv),
            (self.pipe, DelimiterFormat::Pipe),
            (self.semicolon, DelimiterFormat::Semicolon),
        ]
        .into_iter()
        .filter_map(|(set, format)| set.then_some(format))
        .collect()
    }
}

/// CLI detection policy choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum DetectionArg {
    Consistent,
    HighestCount,
}

impl From<DetectionArg> for DetectionPolicy {
    fn from(arg: DetectionArg) -> Self {
        match arg {
            DetectionArg::Consistent => Self::Consistent,
            DetectionArg::HighestCount => Self::HighestCount,
        }
    }
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
