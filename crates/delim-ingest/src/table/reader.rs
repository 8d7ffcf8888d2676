//! Delimited record reading.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use delim_model::{Delimiter, Row, Table, Value};
use delim_transform::normalize_cell;

use crate::error::{IngestError, Result, file_error};

use super::header::headers_from_record;

/// Read delimited text into a [`Table`].
///
/// Rules:
///
/// - The first record is the header row (trimmed, duplicates kept).
/// - Records whose fields are all blank are skipped.
/// - Fields are zipped with headers by position: short records produce short
///   rows, extra fields are dropped.
/// - Column 0 is kept as trimmed text; every other field is normalized to a
///   decimal or null.
///
/// A non-ASCII delimiter is replaced by a control byte that does not occur in
/// the input, since the record reader only splits on single bytes.
pub fn read_table<R: Read>(mut input: R, delimiter: Delimiter) -> Result<Table> {
    if let Some(byte) = delimiter.as_byte() {
        return read_records(input, byte);
    }

    let mut text = String::new();
    input
        .read_to_string(&mut text)
        .map_err(csv::Error::from)?;
    let byte = substitute_byte(&text).ok_or_else(|| IngestError::UnsupportedDelimiter {
        delimiter: delimiter.as_char().to_string(),
        reason: "input contains every control byte usable as a stand-in".to_string(),
    })?;
    tracing::debug!(
        delimiter = %delimiter,
        substitute = byte,
        "reading non-ASCII delimiter through a substitute byte"
    );
    let stand_in = char::from(byte);
    let substituted = text.replace(delimiter.as_char(), &stand_in.to_string());
    let mut table = read_records(substituted.as_bytes(), byte)?;
    restore_delimiter(&mut table, stand_in, delimiter.as_char());
    Ok(table)
}

/// Put back delimiter characters that sat inside quoted fields. Only text can
/// hold them: a numeric cell containing one never parses.
fn restore_delimiter(table: &mut Table, stand_in: char, original: char) {
    let original = original.to_string();
    for header in &mut table.headers {
        if header.contains(stand_in) {
            *header = header.replace(stand_in, &original);
        }
    }
    for value in table.rows.iter_mut().flat_map(|row| row.values.iter_mut()) {
        if let Value::Text(text) = value
            && text.contains(stand_in)
        {
            *text = text.replace(stand_in, &original);
        }
    }
}

/// First ASCII control byte, from `0x1f` down, absent from `text`.
/// Tab and line terminators are never used.
fn substitute_byte(text: &str) -> Option<u8> {
    let bytes = text.as_bytes();
    (1u8..0x20)
        .rev()
        .filter(|&b| !matches!(b, b'\t' | b'\n' | b'\r'))
        .find(|&b| !bytes.contains(&b))
}

fn read_records<R: Read>(input: R, byte: u8) -> Result<Table> {
    let mut rdr = ReaderBuilder::new()
        .delimiter(byte)
        .has_headers(false)
        .flexible(true)
        .from_reader(input);

    let mut records = rdr.records();
    let header_record = records.next().ok_or(IngestError::NoHeaderRow)??;
    let headers = headers_from_record(&header_record);
    tracing::debug!(columns = headers.len(), ?headers, "read header row");

    let mut rows = Vec::new();
    let mut skipped = 0usize;
    for result in records {
        let record = result?;
        if is_blank(&record) {
            skipped += 1;
            continue;
        }

        if record.len() != headers.len() {
            tracing::warn!(
                line = record.position().map(csv::Position::line),
                fields = record.len(),
                columns = headers.len(),
                "record width differs from header; zipping by position"
            );
        }

        rows.push(build_row(&record, headers.len()));
    }

    tracing::debug!(rows = rows.len(), skipped, "read data rows");
    Ok(Table::new(headers, rows))
}

/// Open `path` and read it with [`read_table`].
pub fn read_table_from_path(path: &Path, delimiter: Delimiter) -> Result<Table> {
    let file = File::open(path).map_err(|e| file_error(path, e))?;
    let table = read_table(file, delimiter)?;
    tracing::info!(
        path = %path.display(),
        columns = table.column_count(),
        rows = table.row_count(),
        "table read"
    );
    Ok(table)
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(|field| field.trim().is_empty())
}

fn build_row(record: &StringRecord, width: usize) -> Row {
    let values = record
        .iter()
        .take(width)
        .enumerate()
        .map(|(column, raw)| normalize_cell(column, raw))
        .collect();
    Row::new(values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(content: &str, delimiter: char) -> Result<Table> {
        read_table(content.as_bytes(), Delimiter::new(delimiter))
    }

    #[test]
    fn test_reads_headers_and_rows() {
        let table = read("Company\tARR\tGrowth\nAcme\t20.5x\t30%\nBeta\t15.2x\tN/A\n", '\t').unwrap();

        assert_eq!(table.headers, vec!["Company", "ARR", "Growth"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(
            table.rows[0].values,
            vec![Value::text("Acme"), Value::Decimal(20.5), Value::Decimal(30.0)]
        );
        assert_eq!(
            table.rows[1].values,
            vec![Value::text("Beta"), Value::Decimal(15.2), Value::Null]
        );
    }

    #[test]
    fn test_headers_are_trimmed() {
        let table = read(" Company , ARR \nAcme,1\n", ',').unwrap();
        assert_eq!(table.headers, vec!["Company", "ARR"]);
    }

    #[test]
    fn test_blank_records_skipped() {
        let table = read("A,B\nx,1\n\n,\n  ,  \ny,2\n", ',').unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[1].identifier(), Some("y"));
    }

    #[test]
    fn test_short_record_is_truncated() {
        let table = read("A,B,C\nx,1\n", ',').unwrap();
        assert_eq!(table.rows[0].len(), 2);
        assert_eq!(table.value(0, "C"), None);
    }

    #[test]
    fn test_extra_fields_dropped() {
        let table = read("A,B\nx,1,2,3\n", ',').unwrap();
        assert_eq!(
            table.rows[0].values,
            vec![Value::text("x"), Value::Decimal(1.0)]
        );
    }

    #[test]
    fn test_quoted_fields() {
        let table = read("Company,ARR\n\"Acme, Inc.\",\"2.5x\"\n", ',').unwrap();
        assert_eq!(table.rows[0].identifier(), Some("Acme, Inc."));
        assert_eq!(table.rows[0].get(1), Some(&Value::Decimal(2.5)));
    }

    #[test]
    fn test_empty_input_has_no_header() {
        assert!(matches!(read("", ','), Err(IngestError::NoHeaderRow)));
        assert!(matches!(read("\n\n", ','), Err(IngestError::NoHeaderRow)));
    }

    #[test]
    fn test_header_only() {
        let table = read("A,B\n", ',').unwrap();
        assert_eq!(table.headers, vec!["A", "B"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_non_ascii_delimiter() {
        let table = read("Company§ARR\nAcme§2x\n\"Beta§Co\"§3%\n", '§').unwrap();
        assert_eq!(table.headers, vec!["Company", "ARR"]);
        assert_eq!(
            table.rows[0].values,
            vec![Value::text("Acme"), Value::Decimal(2.0)]
        );
        assert_eq!(
            table.rows[1].values,
            vec![Value::text("Beta§Co"), Value::Decimal(3.0)]
        );
    }

    #[test]
    fn test_substitute_byte_skips_bytes_in_input() {
        assert_eq!(substitute_byte("a,b"), Some(0x1f));
        assert_eq!(substitute_byte("a\u{1f}b"), Some(0x1e));
        let every: String = (1u8..0x20).map(char::from).collect();
        assert_eq!(substitute_byte(&every), None);
    }

    #[test]
    fn test_missing_file() {
        let result = read_table_from_path(Path::new("/no/such/file.tsv"), Delimiter::new('\t'));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
