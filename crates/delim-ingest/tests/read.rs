//! Integration tests for reading normalized tables from disk.

use std::io::Write;

use delim_ingest::{DetectionPolicy, detect_delimiter_in_file, read_table_from_path};
use delim_model::{Delimiter, Value};
use tempfile::NamedTempFile;

fn create_temp_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

#[test]
fn test_detect_then_read() {
    let file = create_temp_file(
        "Company|Current ARR Multiple|2024 Stock Performance\nAcme|20.8x|29%\nBeta|N/A|-6%\n",
    );
    let detection = detect_delimiter_in_file(file.path(), 5, DetectionPolicy::Consistent).unwrap();
    let table = read_table_from_path(file.path(), detection.delimiter).unwrap();

    assert_eq!(
        table.headers,
        vec!["Company", "Current ARR Multiple", "2024 Stock Performance"]
    );
    assert_eq!(table.value(0, "Current ARR Multiple"), Some(&Value::Decimal(20.8)));
    assert_eq!(table.value(1, "Current ARR Multiple"), Some(&Value::Null));
    assert_eq!(table.value(1, "2024 Stock Performance"), Some(&Value::Decimal(-6.0)));
}

#[test]
fn test_blank_line_between_rows() {
    let file = create_temp_file("Company\tARR\nAcme\t1x\n\nBeta\t2x\n");
    let table = read_table_from_path(file.path(), Delimiter::new('\t')).unwrap();

    assert_eq!(table.row_count(), 2);
    assert_eq!(table.rows[1].identifier(), Some("Beta"));
}

#[test]
fn test_bom_is_not_part_of_first_header() {
    let file = create_temp_file("\u{feff}Company,ARR\nAcme,1\n");
    let table = read_table_from_path(file.path(), Delimiter::new(',')).unwrap();

    assert_eq!(table.headers[0], "Company");
}

#[test]
fn test_malformed_cells_become_null() {
    let file = create_temp_file("Company,A,B,C\nAcme,abc,,12.5.1\n");
    let table = read_table_from_path(file.path(), Delimiter::new(',')).unwrap();

    assert_eq!(
        table.rows[0].values,
        vec![Value::text("Acme"), Value::Null, Value::Null, Value::Null]
    );
}
