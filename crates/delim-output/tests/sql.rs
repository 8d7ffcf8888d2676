//! Integration tests for the SQL and CSV emitters.

use std::fs;

use delim_model::{Row, Table, Value};
use delim_output::{
    DEFAULT_TABLE_NAME, OutputError, generate_sql_statements, write_csv_file, write_sql_file,
};

fn metrics_table() -> Table {
    Table::new(
        vec!["Company".into(), "ARR".into(), "Growth".into()],
        vec![
            Row::new(vec![
                Value::text("Acme"),
                Value::Decimal(20.5),
                Value::Decimal(30.0),
            ]),
            Row::new(vec![Value::text("Beta"), Value::Decimal(15.2), Value::Null]),
        ],
    )
}

#[test]
fn sql_file_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("insert_statements.sql");

    let statements = generate_sql_statements(&metrics_table(), DEFAULT_TABLE_NAME).unwrap();
    write_sql_file(&statements, &path).unwrap();

    let sql = fs::read_to_string(&path).unwrap();
    insta::assert_snapshot!(sql, @r"
CREATE TABLE company_metrics (
    company VARCHAR(255) PRIMARY KEY,
    arr DECIMAL(10, 2),
    growth DECIMAL(10, 2)
);

INSERT INTO company_metrics (company, arr, growth) VALUES ('Acme', 20.5, 30.0);
INSERT INTO company_metrics (company, arr, growth) VALUES ('Beta', 15.2, NULL);
");
}

#[test]
fn quotes_in_identifiers_are_doubled() {
    let table = Table::new(
        vec!["Company".into(), "ARR".into()],
        vec![Row::new(vec![Value::text("O'Reilly"), Value::Decimal(3.0)])],
    );
    let statements = generate_sql_statements(&table, "publishers").unwrap();

    assert_eq!(
        statements[1],
        "INSERT INTO publishers (company, arr) VALUES ('O''Reilly', 3.0);"
    );
}

#[test]
fn empty_headers_rejected() {
    let result = generate_sql_statements(&Table::default(), DEFAULT_TABLE_NAME);
    assert!(matches!(result, Err(OutputError::EmptyHeaders)));
}

#[test]
fn csv_file_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cleaned_data.csv");

    write_csv_file(&metrics_table(), &path).unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Company,ARR,Growth\nAcme,20.5,30.0\nBeta,15.2,\n"
    );
}

#[test]
fn unwritable_path_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("out.sql");

    let statements = generate_sql_statements(&metrics_table(), DEFAULT_TABLE_NAME).unwrap();
    let sql_result = write_sql_file(&statements, &path);
    assert!(matches!(sql_result, Err(OutputError::Write { .. })));

    let csv_result = write_csv_file(&metrics_table(), &path);
    assert!(matches!(csv_result, Err(OutputError::Write { .. })));
}
