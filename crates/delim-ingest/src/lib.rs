//! Delimited file ingestion.
//!
//! This crate finds out how a delimited text file is separated and reads it into
//! a normalized [`delim_model::Table`].
//!
//! # Features
//!
//! - **Delimiter Detection**: score TAB, comma, pipe and semicolon over a sample
//!   of lines under a [`DetectionPolicy`]
//! - **Delimiter Resolution**: combine format flags, a custom delimiter and
//!   auto-detection into one [`ResolvedDelimiter`]
//! - **Table Reading**: headers plus normalized rows, blank records skipped
//! - **Structure Analysis**: per-row column counts for a quick sanity report
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use delim_ingest::{DetectionPolicy, detect_delimiter_in_file, read_table_from_path};
//!
//! let path = Path::new("metrics.txt");
//! let detection = detect_delimiter_in_file(path, 5, DetectionPolicy::Consistent)?;
//! let table = read_table_from_path(path, detection.delimiter)?;
//! println!("{} rows", table.row_count());
//! ```

mod analysis;
mod delimiter;
mod detect;
mod error;
mod sample;
mod table;

// === Error Types ===
pub use error::{IngestError, Result};

// === Sampling ===
pub use sample::{DEFAULT_SAMPLE_LINES, read_sample_lines};

// === Detection ===
pub use detect::{
    CONSISTENCY_THRESHOLD, CandidateStats, Detection, DetectionPolicy, detect_delimiter,
    detect_delimiter_in_file,
};

// === Delimiter Resolution ===
pub use delimiter::{
    DelimiterSelection, DelimiterSource, ResolvedDelimiter, parse_custom_delimiter,
    resolve_delimiter, select_delimiter,
};

// === Table Reading ===
pub use table::{normalize_header, read_table, read_table_from_path};

// === Structure Analysis ===
pub use analysis::{FileStructure, analyze_file_structure, analyze_structure};
