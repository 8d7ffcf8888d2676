//! Library-level pipeline stages shared by the CLI commands and tests.
//!
//! `run_identify` samples a file and reports its delimiter. `run_clean`
//! resolves a delimiter, reads and normalizes the table, then writes the
//! requested outputs.

use std::path::{Path, PathBuf};
use std::time::Instant;

use delim_ingest::{
    CandidateStats, DEFAULT_SAMPLE_LINES, DetectionPolicy, FileStructure, IngestError,
    ResolvedDelimiter, analyze_file_structure, detect_delimiter_in_file, read_table_from_path,
    resolve_delimiter, select_delimiter,
};
use delim_model::{DelimiterFormat, Table};
use delim_output::{
    DEFAULT_TABLE_NAME, OutputError, generate_sql_statements, write_csv_file, write_sql_file,
};
use serde::Serialize;
use thiserror::Error;
use tracing::{info, info_span};

/// Errors surfaced by either pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Ingest(#[from] IngestError),

    #[error(transparent)]
    Output(#[from] OutputError),
}

impl PipelineError {
    /// Short machine-readable category used in CLI error lines.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Ingest(error) => match error {
                IngestError::FileNotFound { .. } => "file-not-found",
                IngestError::FileRead { .. } => "file-read",
                IngestError::EmptyInput => "empty-input",
                IngestError::NoDelimiterDetected => "no-delimiter-detected",
                IngestError::ConflictingFormatSelection { .. } => "conflicting-format-selection",
                IngestError::UnsupportedDelimiter { .. } => "unsupported-delimiter",
                IngestError::NoHeaderRow => "no-header-row",
                IngestError::Csv(_) => "malformed-record",
            },
            Self::Output(error) => match error {
                OutputError::EmptyHeaders => "empty-headers",
                OutputError::Write { .. } | OutputError::Csv(_) => "write",
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

// =============================================================================
// Identify
// =============================================================================

/// Settings for `identify`.
#[derive(Debug, Clone)]
pub struct IdentifyConfig {
    pub input: PathBuf,
    pub sample_lines: usize,
    /// Also analyze the column structure with the detected delimiter.
    pub details: bool,
}

impl IdentifyConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            sample_lines: DEFAULT_SAMPLE_LINES,
            details: false,
        }
    }
}

/// Result of `identify`.
#[derive(Debug, Clone, Serialize)]
pub struct IdentifyReport {
    pub file: PathBuf,
    pub format: DelimiterFormat,
    pub delimiter: String,
    pub confidence: f64,
    pub sampled_lines: usize,
    pub policy: DetectionPolicy,
    /// Per-candidate statistics, in detection order.
    pub candidates: Vec<CandidateStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub structure: Option<FileStructure>,
}

/// Detect the format of a file using the consistency-based policy.
pub fn run_identify(config: &IdentifyConfig) -> Result<IdentifyReport> {
    let span = info_span!("identify", input = %config.input.display());
    let _guard = span.enter();

    let detection =
        detect_delimiter_in_file(&config.input, config.sample_lines, DetectionPolicy::Consistent)?;
    let structure = if config.details {
        analyze_file_structure(&config.input, detection.delimiter, config.sample_lines)?
    } else {
        None
    };

    Ok(IdentifyReport {
        file: config.input.clone(),
        format: detection.format,
        delimiter: detection.delimiter.escaped(),
        confidence: detection.confidence,
        sampled_lines: detection.sampled_lines,
        policy: detection.policy,
        candidates: detection.candidates,
        structure,
    })
}

// =============================================================================
// Clean
// =============================================================================

/// Settings for `clean`.
#[derive(Debug, Clone)]
pub struct CleanConfig {
    pub input: PathBuf,
    /// `None` skips the CSV output.
    pub output_csv: Option<PathBuf>,
    /// `None` skips the SQL output.
    pub output_sql: Option<PathBuf>,
    pub table_name: String,
    /// Named formats requested by flags; more than one is a conflict.
    pub formats: Vec<DelimiterFormat>,
    /// Raw custom delimiter argument, escapes not yet decoded.
    pub custom_delimiter: Option<String>,
    pub detection: DetectionPolicy,
    pub sample_lines: usize,
}

impl CleanConfig {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_csv: Some(PathBuf::from("cleaned_data.csv")),
            output_sql: Some(PathBuf::from("insert_statements.sql")),
            table_name: DEFAULT_TABLE_NAME.to_string(),
            formats: Vec::new(),
            custom_delimiter: None,
            detection: DetectionPolicy::HighestCount,
            sample_lines: DEFAULT_SAMPLE_LINES,
        }
    }
}

/// Result of `clean`.
#[derive(Debug, Clone)]
pub struct CleanOutcome {
    pub delimiter: ResolvedDelimiter,
    pub table: Table,
    pub csv_path: Option<PathBuf>,
    pub sql_path: Option<PathBuf>,
    /// Number of SQL statements written (zero when SQL is skipped).
    pub statement_count: usize,
}

/// Resolve, read, normalize, and write.
///
/// The CSV output is written before the SQL output. A failure in either aborts
/// the run with that error.
pub fn run_clean(config: &CleanConfig) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %config.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    ensure_exists(&config.input)?;

    let selection = select_delimiter(config.custom_delimiter.as_deref(), &config.formats)?;
    let delimiter = resolve_delimiter(
        selection,
        &config.input,
        config.sample_lines,
        config.detection,
    )?;
    info!(
        format = delimiter.format_name(),
        delimiter = %delimiter.delimiter,
        "using delimiter"
    );

    let table = read_table_from_path(&config.input, delimiter.delimiter)?;

    if let Some(path) = &config.output_csv {
        write_csv_file(&table, path)?;
    }

    let mut statement_count = 0;
    if let Some(path) = &config.output_sql {
        let statements = generate_sql_statements(&table, &config.table_name)?;
        write_sql_file(&statements, path)?;
        statement_count = statements.len();
    }

    info!(
        rows = table.row_count(),
        columns = table.column_count(),
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );

    Ok(CleanOutcome {
        delimiter,
        table,
        csv_path: config.output_csv.clone(),
        sql_path: config.output_sql.clone(),
        statement_count,
    })
}

/// Fail early with `FileNotFound` even when an explicit delimiter means
/// nothing else would touch the file before reading.
fn ensure_exists(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
        .into())
    }
}
