//! Header to column-name conversion.

/// Normalize a header for use as a SQL column name.
///
/// Lower-cases the name and replaces spaces with underscores. Other punctuation
/// passes through untouched.
pub fn normalize_column_name(name: &str) -> String {
    name.to_lowercase().replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_column_name() {
        assert_eq!(
            normalize_column_name("Current ARR Multiple"),
            "current_arr_multiple"
        );
        assert_eq!(
            normalize_column_name("2024 Stock Performance"),
            "2024_stock_performance"
        );
    }

    #[test]
    fn test_punctuation_untouched() {
        assert_eq!(normalize_column_name("Growth (%)"), "growth_(%)");
        assert_eq!(normalize_column_name("EV/Revenue"), "ev/revenue");
    }

    #[test]
    fn test_already_normalized() {
        assert_eq!(normalize_column_name("company"), "company");
    }
}
