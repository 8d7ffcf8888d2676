//! Data model shared by the delimkit crates.
//!
//! Everything here is a plain value type: a [`Delimiter`] read from a source file,
//! the normalized [`Value`]s of a cell, and the [`Table`] of headers and rows that
//! the reader produces and the emitters consume.

pub mod delimiter;
pub mod table;
pub mod value;

pub use delimiter::{Delimiter, DelimiterFormat};
pub use table::{Row, Table};
pub use value::{Value, format_decimal};
