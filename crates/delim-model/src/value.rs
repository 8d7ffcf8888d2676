//! Normalized cell values.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single normalized cell.
///
/// Only the identifier column carries [`Value::Text`]; every other column is either
/// a decimal or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Absent value (empty cell, `N/A`, or an unparseable number).
    Null,
    /// Trimmed text, used for the identifier column.
    Text(String),
    /// Decimal value with any multiplier/percentage suffix removed.
    Decimal(f64),
}

impl Value {
    /// Build a text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_decimal(&self) -> Option<f64> {
        match self {
            Self::Decimal(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value.as_str()),
            _ => None,
        }
    }
}

/// Renders the value the way it appears in a CSV cell: `Null` is the empty string.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(value) => f.write_str(value),
            Self::Decimal(value) => f.write_str(&format_decimal(*value)),
        }
    }
}

/// Default textual form of a decimal.
///
/// Finite integral values keep one fractional digit (`30.0`), everything else uses
/// the shortest representation that round-trips (`20.8`, `0.125`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
