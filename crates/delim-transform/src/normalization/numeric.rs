//! Decimal parsing for suffixed metric values.
//!
//! Values such as `20.8x` (a multiple) or `-6%` (a percentage) are reduced to
//! their numeric part. The suffix is dropped, not applied: `29%` is `29.0`, not
//! `0.29`.

/// Marker used by source sheets for a missing value.
pub const NULL_MARKER: &str = "N/A";

/// A presentation suffix removed before parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    /// Short name used in trace output.
    pub name: &'static str,
    /// Any one of these characters is stripped, once, from the end of the value.
    pub suffixes: &'static [char],
}

impl SuffixRule {
    /// Strip a single trailing suffix character, if present.
    pub fn apply<'a>(&self, value: &'a str) -> &'a str {
        value
            .strip_suffix(|c: char| self.suffixes.contains(&c))
            .unwrap_or(value)
    }
}

/// Suffix rules in application order.
///
/// Each rule runs once, independently of whether an earlier rule matched, so
/// `5%x` loses both suffixes while `5x%` keeps its `x` and fails to parse.
pub const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        name: "multiplier",
        suffixes: &['x', 'X'],
    },
    SuffixRule {
        name: "percentage",
        suffixes: &['%'],
    },
];

/// Returns true for empty values and the case-insensitive `N/A` marker.
pub fn is_null_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NULL_MARKER)
}

/// Apply `rules` in order to an already trimmed value.
pub fn strip_suffixes<'a>(value: &'a str, rules: &[SuffixRule]) -> &'a str {
    rules.iter().fold(value, |acc, rule| rule.apply(acc))
}

/// Parse a raw cell into a decimal.
///
/// Returns `None` for empty cells, `N/A`, and anything that is not a number once
/// the [`SUFFIX_RULES`] have been applied.
pub fn parse_decimal(value: &str) -> Option<f64> {
    parse_decimal_with_rules(value, SUFFIX_RULES)
}

/// Like [`parse_decimal`] with a caller-supplied rule list.
pub fn parse_decimal_with_rules(value: &str, rules: &[SuffixRule]) -> Option<f64> {
    if is_null_marker(value) {
        return None;
    }

    let stripped = strip_suffixes(value.trim(), rules).trim();
    match stripped.parse::<f64>() {
        Ok(parsed) => Some(parsed),
        Err(error) => {
            tracing::trace!(raw = value, %error, "unparseable numeric cell treated as null");
            None
        }
    }
}
