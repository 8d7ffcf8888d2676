//! Turning user format choices into a concrete delimiter.

use std::path::Path;

use delim_model::{Delimiter, DelimiterFormat};

use crate::detect::{Detection, DetectionPolicy, detect_delimiter_in_file};
use crate::error::{IngestError, Result};

/// How the caller asked for the delimiter to be chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelimiterSelection {
    /// A user-supplied character.
    Explicit(Delimiter),
    /// One of the named formats.
    Format(DelimiterFormat),
    /// Sample the file and detect.
    Auto,
}

/// Where a resolved delimiter came from.
#[derive(Debug, Clone, PartialEq)]
pub enum DelimiterSource {
    Custom,
    Format(DelimiterFormat),
    Detected(Detection),
}

/// A delimiter ready for reading, plus its provenance.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedDelimiter {
    pub delimiter: Delimiter,
    pub source: DelimiterSource,
}

impl ResolvedDelimiter {
    /// `CUSTOM` for user-supplied characters, otherwise the format name.
    pub fn format_name(&self) -> &'static str {
        match &self.source {
            DelimiterSource::Custom => "CUSTOM",
            DelimiterSource::Format(format) => format.name(),
            DelimiterSource::Detected(detection) => detection.format.name(),
        }
    }

    /// Detection confidence, present only for auto-detected delimiters.
    pub fn confidence(&self) -> Option<f64> {
        match &self.source {
            DelimiterSource::Detected(detection) => Some(detection.confidence),
            _ => None,
        }
    }

    pub fn is_detected(&self) -> bool {
        matches!(self.source, DelimiterSource::Detected(_))
    }
}

/// Combine the requested format flags and optional custom delimiter.
///
/// More than one format flag is a conflict, even when a custom delimiter is also
/// given. A custom delimiter otherwise takes precedence over a format flag.
pub fn select_delimiter(
    custom: Option<&str>,
    formats: &[DelimiterFormat],
) -> Result<DelimiterSelection> {
    if formats.len() > 1 {
        return Err(IngestError::ConflictingFormatSelection {
            formats: formats.to_vec(),
        });
    }

    if let Some(raw) = custom {
        return parse_custom_delimiter(raw).map(DelimiterSelection::Explicit);
    }

    Ok(formats
        .first()
        .map_or(DelimiterSelection::Auto, |format| {
            DelimiterSelection::Format(*format)
        }))
}

/// Parse a custom delimiter argument, decoding backslash escapes such as `\t`.
pub fn parse_custom_delimiter(raw: &str) -> Result<Delimiter> {
    let decoded = unescape(raw);
    let mut chars = decoded.chars();
    let (Some(ch), None) = (chars.next(), chars.next()) else {
        return Err(IngestError::UnsupportedDelimiter {
            delimiter: raw.to_string(),
            reason: "delimiter must be a single character".to_string(),
        });
    };

    if matches!(ch, '\n' | '\r') {
        return Err(IngestError::UnsupportedDelimiter {
            delimiter: raw.to_string(),
            reason: "line terminators cannot separate fields".to_string(),
        });
    }
    Ok(Delimiter::new(ch))
}

/// Decode `\t`, `\\`, `\'`, `\"` and `\xHH`. Unknown escapes are kept verbatim.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('t') => {
                chars.next();
                out.push('\t');
            }
            Some(escaped @ ('\\' | '\'' | '"')) => {
                chars.next();
                out.push(escaped);
            }
            Some('x') => {
                let hex: String = chars.clone().skip(1).take(2).collect();
                match u8::from_str_radix(&hex, 16) {
                    Ok(byte) if hex.len() == 2 => {
                        chars.nth(2);
                        out.push(char::from(byte));
                    }
                    _ => out.push('\\'),
                }
            }
            _ => out.push('\\'),
        }
    }

    out
}

/// Resolve a selection into the delimiter used for reading.
///
/// Only [`DelimiterSelection::Auto`] touches the file.
pub fn resolve_delimiter(
    selection: DelimiterSelection,
    path: &Path,
    sample_lines: usize,
    policy: DetectionPolicy,
) -> Result<ResolvedDelimiter> {
    let resolved = match selection {
        DelimiterSelection::Explicit(delimiter) => ResolvedDelimiter {
            delimiter,
            source: DelimiterSource::Custom,
        },
        DelimiterSelection::Format(format) => ResolvedDelimiter {
            delimiter: format.delimiter(),
            source: DelimiterSource::Format(format),
        },
        DelimiterSelection::Auto => {
            let detection = detect_delimiter_in_file(path, sample_lines, policy)?;
            ResolvedDelimiter {
                delimiter: detection.delimiter,
                source: DelimiterSource::Detected(detection),
            }
        }
    };

    tracing::debug!(
        format = resolved.format_name(),
        delimiter = %resolved.delimiter,
        "delimiter resolved"
    );
    Ok(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_is_auto() {
        assert_eq!(select_delimiter(None, &[]).unwrap(), DelimiterSelection::Auto);
    }

    #[test]
    fn test_single_format_flag() {
        assert_eq!(
            select_delimiter(None, &[DelimiterFormat::Pipe]).unwrap(),
            DelimiterSelection::Format(DelimiterFormat::Pipe)
        );
    }

    #[test]
    fn test_conflicting_flags() {
        let result = select_delimiter(None, &[DelimiterFormat::Tsv, DelimiterFormat::Csv]);
        assert!(matches!(
            result,
            Err(IngestError::ConflictingFormatSelection { .. })
        ));
        // Still a conflict when a custom delimiter is present.
        let result = select_delimiter(Some(":"), &[DelimiterFormat::Tsv, DelimiterFormat::Csv]);
        assert!(matches!(
            result,
            Err(IngestError::ConflictingFormatSelection { .. })
        ));
    }

    #[test]
    fn test_custom_takes_precedence() {
        assert_eq!(
            select_delimiter(Some(":"), &[DelimiterFormat::Csv]).unwrap(),
            DelimiterSelection::Explicit(Delimiter::new(':'))
        );
    }

    #[test]
    fn test_custom_escapes() {
        assert_eq!(parse_custom_delimiter("\\t").unwrap(), Delimiter::new('\t'));
        assert_eq!(parse_custom_delimiter("\\\\").unwrap(), Delimiter::new('\\'));
        assert_eq!(parse_custom_delimiter("\\x7c").unwrap(), Delimiter::new('|'));
        assert_eq!(parse_custom_delimiter("|").unwrap(), Delimiter::new('|'));
    }

    #[test]
    fn test_custom_rejects_multi_character() {
        assert!(matches!(
            parse_custom_delimiter("||"),
            Err(IngestError::UnsupportedDelimiter { .. })
        ));
        assert!(matches!(
            parse_custom_delimiter(""),
            Err(IngestError::UnsupportedDelimiter { .. })
        ));
        assert!(matches!(
            parse_custom_delimiter("\\q"),
            Err(IngestError::UnsupportedDelimiter { .. })
        ));
    }

    #[test]
    fn test_custom_accepts_non_ascii() {
        assert_eq!(parse_custom_delimiter("§").unwrap(), Delimiter::new('§'));
    }

    #[test]
    fn test_custom_rejects_newlines() {
        assert!(parse_custom_delimiter("\n").is_err());
        assert!(parse_custom_delimiter("\r").is_err());
    }

    #[test]
    fn test_format_names() {
        let custom = ResolvedDelimiter {
            delimiter: Delimiter::new(','),
            source: DelimiterSource::Custom,
        };
        assert_eq!(custom.format_name(), "CUSTOM");
        assert_eq!(custom.confidence(), None);

        let named = ResolvedDelimiter {
            delimiter: Delimiter::new(';'),
            source: DelimiterSource::Format(DelimiterFormat::Semicolon),
        };
        assert_eq!(named.format_name(), "SEMICOLON");
        assert!(!named.is_detected());
    }

    #[test]
    fn test_explicit_selection_does_not_touch_file() {
        let resolved = resolve_delimiter(
            DelimiterSelection::Format(DelimiterFormat::Tsv),
            Path::new("/does/not/exist"),
            5,
            DetectionPolicy::Consistent,
        )
        .unwrap();
        assert_eq!(resolved.delimiter, Delimiter::new('\t'));
    }
}
