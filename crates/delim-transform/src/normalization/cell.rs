//! Per-cell normalization.

use delim_model::Value;

use super::numeric::parse_decimal;

/// Index of the identifier column, which is never parsed as a number.
pub const IDENTIFIER_COLUMN: usize = 0;

/// Normalize the raw field found at `column` of a data row.
pub fn normalize_cell(column: usize, raw: &str) -> Value {
    if column == IDENTIFIER_COLUMN {
        normalize_identifier(raw)
    } else {
        normalize_numeric(raw)
    }
}

/// Identifier cells are kept as trimmed text, even when empty or numeric-looking.
pub fn normalize_identifier(raw: &str) -> Value {
    Value::Text(raw.trim().to_string())
}

/// Numeric cells become a decimal or `Null`.
pub fn normalize_numeric(raw: &str) -> Value {
    parse_decimal(raw).map_or(Value::Null, Value::Decimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_column_is_text() {
        assert_eq!(normalize_cell(0, "  Acme Corp "), Value::text("Acme Corp"));
        assert_eq!(normalize_cell(0, "20.8x"), Value::text("20.8x"));
        assert_eq!(normalize_cell(0, "N/A"), Value::text("N/A"));
        assert_eq!(normalize_cell(0, ""), Value::text(""));
    }

    #[test]
    fn test_other_columns_are_numeric() {
        assert_eq!(normalize_cell(1, "20.8x"), Value::Decimal(20.8));
        assert_eq!(normalize_cell(2, "29%"), Value::Decimal(29.0));
        assert_eq!(normalize_cell(3, "N/A"), Value::Null);
        assert_eq!(normalize_cell(4, "Acme"), Value::Null);
    }
}
