//! SQL schema and insert statement generation.
//!
//! The schema convention is fixed: the first column is the text primary key and
//! every other column is a fixed-precision decimal.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use delim_model::{Row, Table, Value, format_decimal};
use delim_transform::normalize_column_name;

use crate::error::{OutputError, Result};

/// Table name used when none is configured.
pub const DEFAULT_TABLE_NAME: &str = "company_metrics";

/// Column type of the identifier (primary key) column.
pub const KEY_COLUMN_TYPE: &str = "VARCHAR(255)";

/// Column type of every other column.
pub const VALUE_COLUMN_TYPE: &str = "DECIMAL(10, 2)";

/// Build the `CREATE TABLE` statement for `headers`.
///
/// The statement ends with `);` followed by a newline.
pub fn create_table_statement(table_name: &str, headers: &[String]) -> Result<String> {
    let (key, values) = headers.split_first().ok_or(OutputError::EmptyHeaders)?;

    let mut columns = Vec::with_capacity(headers.len());
    columns.push(format!(
        "    {} {KEY_COLUMN_TYPE} PRIMARY KEY",
        normalize_column_name(key)
    ));
    columns.extend(
        values
            .iter()
            .map(|header| format!("    {} {VALUE_COLUMN_TYPE}", normalize_column_name(header))),
    );

    Ok(format!(
        "CREATE TABLE {table_name} (\n{}\n);\n",
        columns.join(",\n")
    ))
}

/// Render a value as a SQL literal.
pub fn sql_literal(value: &Value) -> String {
    match value {
        Value::Null => "NULL".to_string(),
        Value::Text(text) => format!("'{}'", text.replace('\'', "''")),
        Value::Decimal(number) => format_decimal(*number),
    }
}

/// Build one `INSERT INTO` statement. Columns missing from a truncated row are
/// inserted as `NULL`.
pub fn insert_statement(table_name: &str, headers: &[String], row: &Row) -> String {
    let columns = headers
        .iter()
        .map(|header| normalize_column_name(header))
        .collect::<Vec<_>>()
        .join(", ");
    let values = (0..headers.len())
        .map(|idx| row.get(idx).map_or_else(|| "NULL".to_string(), sql_literal))
        .collect::<Vec<_>>()
        .join(", ");

    format!("INSERT INTO {table_name} ({columns}) VALUES ({values});")
}

/// Schema statement followed by one insert per row, in read order.
pub fn generate_sql_statements(table: &Table, table_name: &str) -> Result<Vec<String>> {
    let mut statements = Vec::with_capacity(table.row_count() + 1);
    statements.push(create_table_statement(table_name, &table.headers)?);
    statements.extend(
        table
            .rows
            .iter()
            .map(|row| insert_statement(table_name, &table.headers, row)),
    );

    tracing::debug!(
        table_name,
        statements = statements.len(),
        "generated SQL statements"
    );
    Ok(statements)
}

/// Write statements separated by newlines.
pub fn write_sql<W: Write>(statements: &[String], mut writer: W) -> std::io::Result<()> {
    writer.write_all(statements.join("\n").as_bytes())?;
    writer.flush()
}

/// Create `path` and write the statements to it.
pub fn write_sql_file(statements: &[String], path: &Path) -> Result<()> {
    let to_write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(to_write_error)?;
    write_sql(statements, BufWriter::new(file)).map_err(to_write_error)?;

    tracing::info!(path = %path.display(), statements = statements.len(), "SQL written");
    Ok(())
}
