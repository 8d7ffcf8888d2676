//! Output generation for normalized tables.
//!
//! Two independent consumers of the same [`delim_model::Table`]:
//!
//! - [`sql`]: `CREATE TABLE` plus one `INSERT INTO` per row
//! - [`csv_export`]: comma-delimited export with nulls as empty fields
//!
//! Neither writer mutates the table, so they can run in any order.

pub mod csv_export;
pub mod error;
pub mod sql;

pub use csv_export::{write_csv, write_csv_file};
pub use error::{OutputError, Result};
pub use sql::{
    DEFAULT_TABLE_NAME, KEY_COLUMN_TYPE, VALUE_COLUMN_TYPE, create_table_statement,
    generate_sql_statements, insert_statement, sql_literal, write_sql, write_sql_file,
};
