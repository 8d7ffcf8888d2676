//! Header row normalization.

use csv::StringRecord;

/// Normalizes a header value by trimming whitespace and a leading UTF-8 BOM.
pub fn normalize_header(value: &str) -> String {
    value.trim_start_matches('\u{feff}').trim().to_string()
}

/// Builds the header list from the first record. Duplicates are kept.
pub(crate) fn headers_from_record(record: &StringRecord) -> Vec<String> {
    record.iter().map(normalize_header).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header("  hello  "), "hello");
        assert_eq!(normalize_header("hello"), "hello");
        assert_eq!(normalize_header("\u{feff}Company"), "Company");
    }

    #[test]
    fn test_headers_from_record_keeps_duplicates() {
        let record = StringRecord::from(vec![" A ", "B", "A"]);
        assert_eq!(headers_from_record(&record), vec!["A", "B", "A"]);
    }
}
