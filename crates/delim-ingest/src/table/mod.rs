//! Reading delimited records into a normalized table.

mod header;
mod reader;

pub use header::normalize_header;
pub use reader::{read_table, read_table_from_path};
