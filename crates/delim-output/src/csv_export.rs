//! Cleaned CSV export.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use delim_model::Table;

use crate::error::{OutputError, Result};

/// Write the header line and one line per row, comma-delimited.
///
/// Null values and columns missing from truncated rows are written as empty
/// fields. Quoting is applied only where a field needs it.
pub fn write_csv<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(&table.headers)?;

    let width = table.column_count();
    for row in &table.rows {
        let fields = (0..width).map(|idx| row.get(idx).map(ToString::to_string).unwrap_or_default());
        wtr.write_record(fields)?;
    }

    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Create `path` and export the table to it.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv(table, file).map_err(|error| match error {
        OutputError::Csv(inner) if inner.is_io_error() => OutputError::Write {
            path: path.to_path_buf(),
            source: std::io::Error::other(inner),
        },
        other => other,
    })?;

    tracing::info!(path = %path.display(), rows = table.row_count(), "CSV written");
    Ok(())
}
