//! Strategies for choosing between candidate delimiters.

use serde::Serialize;

use super::CandidateStats;

/// Minimum consistency ratio a candidate needs under [`DetectionPolicy::Consistent`].
pub const CONSISTENCY_THRESHOLD: f64 = 0.6;

/// How strictly a sample must agree on a delimiter.
///
/// Both policies rank by total occurrences first. They differ in which candidates
/// may take part: a file whose separators are frequent but irregular is accepted
/// by [`HighestCount`](Self::HighestCount) and rejected by
/// [`Consistent`](Self::Consistent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum DetectionPolicy {
    /// Candidates need a non-zero modal count shared by at least
    /// [`CONSISTENCY_THRESHOLD`] of the sampled lines. Ties on total go to the
    /// more consistent candidate.
    Consistent,
    /// Any candidate that occurs at all; the highest total wins.
    HighestCount,
}

impl DetectionPolicy {
    pub fn name(self) -> &'static str {
        match self {
            Self::Consistent => "consistent",
            Self::HighestCount => "highest-count",
        }
    }

    /// Whether a candidate may be selected at all.
    pub fn accepts(self, stats: &CandidateStats) -> bool {
        if stats.total == 0 {
            return false;
        }
        match self {
            Self::Consistent => stats.modal_count > 0 && stats.consistency >= CONSISTENCY_THRESHOLD,
            Self::HighestCount => true,
        }
    }

    /// Select the winning candidate. Candidates are visited in order and only a
    /// strictly better one replaces the current pick.
    pub fn select(self, candidates: &[CandidateStats]) -> Option<&CandidateStats> {
        candidates
            .iter()
            .filter(|stats| self.accepts(stats))
            .fold(None, |best, stats| match best {
                Some(current) if !self.outranks(stats, current) => Some(current),
                _ => Some(stats),
            })
    }

    fn outranks(self, challenger: &CandidateStats, current: &CandidateStats) -> bool {
        match self {
            Self::Consistent => {
                challenger.total > current.total
                    || (challenger.total == current.total
                        && challenger.modal_lines > current.modal_lines)
            }
            Self::HighestCount => challenger.total > current.total,
        }
    }
}

impl std::fmt::Display for DetectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
