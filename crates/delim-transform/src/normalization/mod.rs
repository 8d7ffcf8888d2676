//! Normalization functions.
//!
//! - **numeric**: suffix stripping and decimal parsing
//! - **cell**: per-column dispatch (identifier text vs. decimal)
//! - **column**: header to SQL column name

pub mod cell;
pub mod column;
pub mod numeric;

pub use cell::{IDENTIFIER_COLUMN, normalize_cell, normalize_identifier, normalize_numeric};
pub use column::normalize_column_name;
pub use numeric::{SUFFIX_RULES, SuffixRule, is_null_marker, parse_decimal, strip_suffixes};
