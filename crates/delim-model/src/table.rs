//! Headers and normalized rows read from a delimited file.

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// One normalized data row.
///
/// Values are positional: `values[i]` belongs to `headers[i]`. A row read from a
/// record with fewer fields than there are headers is shorter than the header list;
/// the trailing headers are simply absent from it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub values: Vec<Value>,
}

impl Row {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    /// Value at a column position, `None` when the row was truncated before it.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The identifier (first column) text, if present.
    pub fn identifier(&self) -> Option<&str> {
        self.values.first().and_then(Value::as_text)
    }
}

/// Ordered headers plus the rows that survived reading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    /// Trimmed column names in file order. Duplicates are kept as-is.
    pub headers: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> Self {
        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first header with this exact name.
    pub fn index_of(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// Look up a cell by row index and header name.
    pub fn value(&self, row: usize, header: &str) -> Option<&Value> {
        let column = self.index_of(header)?;
        self.rows.get(row)?.get(column)
    }

    /// Iterate `(header, value)` pairs of a row in header order.
    ///
    /// Stops at the end of the row, so truncated rows yield fewer pairs.
    pub fn row_entries<'a>(&'a self, row: &'a Row) -> impl Iterator<Item = (&'a str, &'a Value)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(row.values.iter())
    }
}
