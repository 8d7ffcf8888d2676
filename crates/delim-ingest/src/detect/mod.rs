//! Delimiter detection over a sample of lines.
//!
//! Every fixed candidate (TAB, comma, pipe, semicolon) is counted per sampled
//! line. From those counts we derive the candidate's total, its modal per-line
//! count and a consistency ratio; a [`DetectionPolicy`] then picks the winner.

mod policy;

use std::path::Path;

use delim_model::{Delimiter, DelimiterFormat};
use serde::Serialize;

use crate::error::{IngestError, Result};
use crate::sample::read_sample_lines;

pub use policy::{CONSISTENCY_THRESHOLD, DetectionPolicy};

/// Occurrence statistics for one candidate delimiter across the sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateStats {
    pub format: DelimiterFormat,
    /// Occurrences per sampled line, in line order.
    pub line_counts: Vec<usize>,
    /// Sum of `line_counts`.
    pub total: usize,
    /// The per-line count shared by the most lines (first seen wins ties).
    pub modal_count: usize,
    /// Number of lines whose count equals `modal_count`.
    pub modal_lines: usize,
    /// `modal_lines / sampled lines`, in `[0.0, 1.0]`.
    pub consistency: f64,
}

impl CandidateStats {
    /// Count `format` in every line of the sample.
    pub fn from_lines<S: AsRef<str>>(format: DelimiterFormat, lines: &[S]) -> Self {
        let delimiter = format.delimiter();
        let line_counts: Vec<usize> = lines
            .iter()
            .map(|line| delimiter.count_in(line.as_ref()))
            .collect();
        let total = line_counts.iter().sum();
        let (modal_count, modal_lines) = modal_count(&line_counts);
        let consistency = if line_counts.is_empty() {
            0.0
        } else {
            modal_lines as f64 / line_counts.len() as f64
        };

        Self {
            format,
            line_counts,
            total,
            modal_count,
            modal_lines,
            consistency,
        }
    }
}

/// Returns `(value, frequency)` of the most common count. Ties go to the value
/// that appeared first.
fn modal_count(counts: &[usize]) -> (usize, usize) {
    let mut frequencies: Vec<(usize, usize)> = Vec::new();
    for &count in counts {
        match frequencies.iter_mut().find(|(value, _)| *value == count) {
            Some((_, freq)) => *freq += 1,
            None => frequencies.push((count, 1)),
        }
    }

    frequencies
        .into_iter()
        .fold((0, 0), |best, candidate| {
            if candidate.1 > best.1 { candidate } else { best }
        })
}

/// Outcome of a successful detection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detection {
    pub delimiter: Delimiter,
    pub format: DelimiterFormat,
    /// Consistency ratio of the winning candidate.
    pub confidence: f64,
    pub policy: DetectionPolicy,
    pub sampled_lines: usize,
    /// Statistics for all four candidates, in detection order.
    pub candidates: Vec<CandidateStats>,
}

/// Pick the most plausible delimiter for a sample of lines.
///
/// # Errors
///
/// - [`IngestError::EmptyInput`] when `lines` is empty
/// - [`IngestError::NoDelimiterDetected`] when the policy accepts no candidate
pub fn detect_delimiter<S: AsRef<str>>(lines: &[S], policy: DetectionPolicy) -> Result<Detection> {
    if lines.is_empty() {
        return Err(IngestError::EmptyInput);
    }

    let candidates: Vec<CandidateStats> = DelimiterFormat::ALL
        .into_iter()
        .map(|format| CandidateStats::from_lines(format, lines))
        .collect();

    for stats in &candidates {
        tracing::debug!(
            format = %stats.format,
            total = stats.total,
            modal_count = stats.modal_count,
            consistency = stats.consistency,
            accepted = policy.accepts(stats),
            "delimiter candidate"
        );
    }

    let winner = policy
        .select(&candidates)
        .ok_or(IngestError::NoDelimiterDetected)?;
    let format = winner.format;
    let confidence = winner.consistency;

    Ok(Detection {
        delimiter: format.delimiter(),
        format,
        confidence,
        policy,
        sampled_lines: lines.len(),
        candidates,
    })
}

/// Sample up to `sample_lines` lines of `path` and detect its delimiter.
pub fn detect_delimiter_in_file(
    path: &Path,
    sample_lines: usize,
    policy: DetectionPolicy,
) -> Result<Detection> {
    let lines = read_sample_lines(path, sample_lines)?;
    let detection = detect_delimiter(&lines, policy)?;
    tracing::info!(
        path = %path.display(),
        format = %detection.format,
        confidence = detection.confidence,
        policy = policy.name(),
        "delimiter detected"
    );
    Ok(detection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_count_first_seen_wins_ties() {
        assert_eq!(modal_count(&[2, 3, 3, 2]), (2, 2));
        assert_eq!(modal_count(&[1, 4, 4]), (4, 2));
        assert_eq!(modal_count(&[]), (0, 0));
    }

    #[test]
    fn test_candidate_stats() {
        let lines = ["a,b,c", "1,2,3", "4,5"];
        let stats = CandidateStats::from_lines(DelimiterFormat::Csv, &lines);
        assert_eq!(stats.line_counts, vec![2, 2, 1]);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.modal_count, 2);
        assert_eq!(stats.modal_lines, 2);
        assert!((stats.consistency - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_detects_each_fixed_delimiter() {
        for format in DelimiterFormat::ALL {
            let sep = format.as_char();
            let lines = vec![
                format!("Name{sep}Age{sep}City"),
                format!("Alice{sep}30{sep}NY"),
            ];
            let detection = detect_delimiter(&lines, DetectionPolicy::Consistent).unwrap();
            assert_eq!(detection.format, format);
            assert_eq!(detection.confidence, 1.0);
        }
    }

    #[test]
    fn test_tabs_beat_commas() {
        let lines = ["A\tB\tC,extra", "D\tE\tF,extra"];
        for policy in [DetectionPolicy::Consistent, DetectionPolicy::HighestCount] {
            let detection = detect_delimiter(&lines, policy).unwrap();
            assert_eq!(detection.delimiter, Delimiter::new('\t'));
        }
    }

    #[test]
    fn test_empty_sample() {
        let lines: Vec<String> = Vec::new();
        let result = detect_delimiter(&lines, DetectionPolicy::Consistent);
        assert!(matches!(result, Err(IngestError::EmptyInput)));
    }

    #[test]
    fn test_no_delimiters() {
        let lines = ["NoDelimitersHere", "JustPlainText"];
        for policy in [DetectionPolicy::Consistent, DetectionPolicy::HighestCount] {
            let result = detect_delimiter(&lines, policy);
            assert!(matches!(result, Err(IngestError::NoDelimiterDetected)));
        }
    }

    #[test]
    fn test_inconsistent_rejected_by_consistent_policy_only() {
        // Commas: 1, 3, 5, 0, 2 per line -> no count reaches 60% of lines.
        let lines = ["a,b", "a,b,c,d", "a,b,c,d,e,f", "abc", "a,b,c"];
        let strict = detect_delimiter(&lines, DetectionPolicy::Consistent);
        assert!(matches!(strict, Err(IngestError::NoDelimiterDetected)));

        let loose = detect_delimiter(&lines, DetectionPolicy::HighestCount).unwrap();
        assert_eq!(loose.format, DelimiterFormat::Csv);
        assert!((loose.confidence - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_frequent_beats_consistent() {
        // Commas are more frequent (total 6) but only 3 of 5 lines agree;
        // pipes are perfectly consistent with a lower total (5).
        let lines = ["a|b,c,d", "a|b,c,d", "a|b,c,d", "a|b", "a|b"];
        let detection = detect_delimiter(&lines, DetectionPolicy::Consistent).unwrap();
        assert_eq!(detection.format, DelimiterFormat::Csv);
        assert!((detection.confidence - 0.6).abs() < 1e-12);
    }

    #[test]
    fn test_reports_all_candidates() {
        let lines = ["a;b", "c;d"];
        let detection = detect_delimiter(&lines, DetectionPolicy::HighestCount).unwrap();
        assert_eq!(detection.candidates.len(), 4);
        assert_eq!(detection.sampled_lines, 2);
        assert_eq!(detection.policy, DetectionPolicy::HighestCount);
        assert_eq!(detection.format, DelimiterFormat::Semicolon);
    }
}
