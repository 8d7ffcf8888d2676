//! Reading the leading lines of a file for detection and analysis.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{Result, file_error};

/// Number of lines sampled for delimiter detection unless configured otherwise.
pub const DEFAULT_SAMPLE_LINES: usize = 5;

/// Reads up to `n` lines from the start of a file.
///
/// Line terminators are removed and a UTF-8 BOM on the first line is skipped.
/// Returns fewer lines when the file is shorter.
pub fn read_sample_lines(path: &Path, n: usize) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| file_error(path, e))?;

    let reader = BufReader::new(file);
    let mut lines = Vec::with_capacity(n);

    for line_result in reader.lines().take(n) {
        let line = line_result.map_err(|e| file_error(path, e))?;
        let cleaned = if lines.is_empty() {
            line.strip_prefix('\u{feff}').unwrap_or(&line).to_string()
        } else {
            line
        };
        lines.push(cleaned);
    }

    Ok(lines)
}
