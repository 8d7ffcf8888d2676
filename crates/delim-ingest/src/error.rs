//! Error types for delimited file ingestion.

use std::path::PathBuf;

use delim_model::DelimiterFormat;
use thiserror::Error;

/// Errors that can occur while detecting delimiters or reading tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Detection Errors ===
    /// No lines were available to sample.
    #[error("file is empty: no lines to sample")]
    EmptyInput,

    /// No candidate delimiter passed the detection thresholds.
    #[error("could not detect delimiter; file may not be a delimited format")]
    NoDelimiterDetected,

    // === Selection Errors ===
    /// More than one named format was requested at once.
    #[error("multiple format flags specified: {}. Please specify only one.", format_names(.formats))]
    ConflictingFormatSelection { formats: Vec<DelimiterFormat> },

    /// The delimiter cannot be used by the record reader.
    #[error("unsupported delimiter {delimiter:?}: {reason}")]
    UnsupportedDelimiter { delimiter: String, reason: String },

    // === Parsing Errors ===
    /// The input yielded no first record to use as headers.
    #[error("no header row found")]
    NoHeaderRow,

    /// Malformed delimited record.
    #[error("failed to parse delimited record: {0}")]
    Csv(#[from] csv::Error),
}

fn format_names(formats: &[DelimiterFormat]) -> String {
    formats
        .iter()
        .map(|format| format.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

/// Map an open/read failure to `FileNotFound` or `FileRead`.
pub(crate) fn file_error(path: &std::path::Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/data.txt"),
        };
        assert_eq!(err.to_string(), "file not found: /path/to/data.txt");
    }

    #[test]
    fn test_conflicting_formats_display() {
        let err = IngestError::ConflictingFormatSelection {
            formats: vec![DelimiterFormat::Tsv, DelimiterFormat::Csv],
        };
        assert_eq!(
            err.to_string(),
            "multiple format flags specified: TSV, CSV. Please specify only one."
        );
    }

    #[test]
    fn test_file_error_mapping() {
        let path = std::path::Path::new("missing.txt");
        let not_found = std::io::Error::from(std::io::ErrorKind::NotFound);
        assert!(matches!(
            file_error(path, not_found),
            IngestError::FileNotFound { .. }
        ));
        let denied = std::io::Error::from(std::io::ErrorKind::PermissionDenied);
        assert!(matches!(
            file_error(path, denied),
            IngestError::FileRead { .. }
        ));
    }
}
