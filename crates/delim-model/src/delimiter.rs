//! Field delimiters.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The fixed set of delimiters considered during auto-detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DelimiterFormat {
    /// Tab-separated values.
    Tsv,
    /// Comma-separated values.
    Csv,
    /// Pipe-delimited.
    Pipe,
    /// Semicolon-delimited.
    Semicolon,
}

impl DelimiterFormat {
    /// Detection order. Ties between candidates resolve to the earlier entry.
    pub const ALL: [Self; 4] = [Self::Tsv, Self::Csv, Self::Pipe, Self::Semicolon];

    pub fn as_char(self) -> char {
        match self {
            Self::Tsv => '\t',
            Self::Csv => ',',
            Self::Pipe => '|',
            Self::Semicolon => ';',
        }
    }

    pub fn delimiter(self) -> Delimiter {
        Delimiter::new(self.as_char())
    }

    /// Upper-case format name (`TSV`, `CSV`, `PIPE`, `SEMICOLON`).
    pub fn name(self) -> &'static str {
        match self {
            Self::Tsv => "TSV",
            Self::Csv => "CSV",
            Self::Pipe => "PIPE",
            Self::Semicolon => "SEMICOLON",
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        Self::ALL.into_iter().find(|format| format.as_char() == ch)
    }
}

impl fmt::Display for DelimiterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single-character field delimiter. Two delimiters are equal only when their
/// characters are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Delimiter(char);

impl Delimiter {
    pub const fn new(ch: char) -> Self {
        Self(ch)
    }

    pub fn as_char(self) -> char {
        self.0
    }

    /// Byte form for the CSV reader, available for ASCII delimiters only.
    pub fn as_byte(self) -> Option<u8> {
        u8::try_from(self.0).ok().filter(u8::is_ascii)
    }

    /// The fixed format this delimiter belongs to, if any.
    pub fn format(self) -> Option<DelimiterFormat> {
        DelimiterFormat::from_char(self.0)
    }

    /// Quoted, escaped form for messages: `'\t'`, `','`.
    pub fn escaped(self) -> String {
        format!("{:?}", self.0)
    }

    /// Number of occurrences in a line.
    pub fn count_in(self, line: &str) -> usize {
        line.matches(self.0).count()
    }
}

impl From<DelimiterFormat> for Delimiter {
    fn from(format: DelimiterFormat) -> Self {
        format.delimiter()
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.escaped())
    }
}
