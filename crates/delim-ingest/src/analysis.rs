//! Quick structural report of a delimited file.

use std::path::Path;

use delim_model::Delimiter;
use serde::Serialize;

use crate::error::Result;
use crate::sample::read_sample_lines;

/// Column layout of the first few lines of a file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileStructure {
    pub num_columns: usize,
    pub headers: Vec<String>,
    /// True when every sampled data row has `num_columns` fields.
    pub consistent_columns: bool,
    pub sample_rows: usize,
    /// Field count of each sampled data row.
    pub column_counts: Vec<usize>,
}

/// Analyze the header plus up to `sample_lines` data lines of `path`.
///
/// Returns `None` when the sampled lines are all blank.
pub fn analyze_file_structure(
    path: &Path,
    delimiter: Delimiter,
    sample_lines: usize,
) -> Result<Option<FileStructure>> {
    let lines = read_sample_lines(path, sample_lines.saturating_add(1))?;
    Ok(analyze_structure(&lines, delimiter))
}

/// Analyze lines with a plain split on the delimiter (no quote handling).
pub fn analyze_structure<S: AsRef<str>>(lines: &[S], delimiter: Delimiter) -> Option<FileStructure> {
    let mut lines = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.trim().is_empty());

    let sep = delimiter.as_char();
    let headers: Vec<String> = lines
        .next()?
        .split(sep)
        .map(|h| h.trim().to_string())
        .collect();
    let num_columns = headers.len();

    let column_counts: Vec<usize> = lines.map(|line| line.split(sep).count()).collect();
    let consistent_columns = column_counts.iter().all(|&count| count == num_columns);

    Some(FileStructure {
        num_columns,
        headers,
        consistent_columns,
        sample_rows: column_counts.len(),
        column_counts,
    })
}
