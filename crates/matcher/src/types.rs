use std::collections::BTreeMap;
use std::fmt;

use canonical::CanonicalError;
use perceptual::PerceptualError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::classify::SeverityAssessment;

/// Severity assigned to a token no level matched.
pub const SEVERITY_NONE: u8 = 0;
pub const SEVERITY_WORD: u8 = 1;
pub const SEVERITY_PHRASE: u8 = 2;
pub const SEVERITY_SENTENCE: u8 = 3;

/// Descriptive label for a severity level. Renderers map these to colors or
/// markers; the core never does.
pub fn severity_label(level: u8) -> &'static str {
    match level {
        SEVERITY_NONE => "none",
        SEVERITY_WORD => "word-level",
        SEVERITY_PHRASE => "phrase-level",
        SEVERITY_SENTENCE => "sentence-level",
        _ => "custom-level",
    }
}

/// Which side of a comparison a document is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentRole {
    Reference,
    Target,
}

impl DocumentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            DocumentRole::Reference => "reference",
            DocumentRole::Target => "target",
        }
    }
}

impl fmt::Display for DocumentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token count per final severity level.
///
/// Every configured level has an entry, zero included, so reports list all
/// levels even when nothing matched at one of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MatchCounts {
    by_severity: BTreeMap<u8, usize>,
}

impl MatchCounts {
    pub(crate) fn register(&mut self, severity: u8) {
        self.by_severity.entry(severity).or_insert(0);
    }

    pub(crate) fn increment(&mut self, severity: u8) {
        *self.by_severity.entry(severity).or_insert(0) += 1;
    }

    /// `None` when no level with this severity was configured.
    pub fn get(&self, severity: u8) -> Option<usize> {
        self.by_severity.get(&severity).copied()
    }

    pub fn count(&self, severity: u8) -> usize {
        self.get(severity).unwrap_or(0)
    }

    pub fn word_level(&self) -> usize {
        self.count(SEVERITY_WORD)
    }

    pub fn phrase_level(&self) -> usize {
        self.count(SEVERITY_PHRASE)
    }

    pub fn sentence_level(&self) -> usize {
        self.count(SEVERITY_SENTENCE)
    }

    /// Tokens with any non-zero mark.
    pub fn total(&self) -> usize {
        self.by_severity.values().sum()
    }

    /// `(severity, count)` in ascending severity order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, usize)> + '_ {
        self.by_severity.iter().map(|(&s, &c)| (s, c))
    }
}

/// Matched shingles of one level, deduplicated for display.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelSummary {
    pub window: usize,
    pub severity: u8,
    pub label: String,
    /// Number of matched target windows, repeats included.
    pub window_matches: usize,
    /// Distinct matched shingles in first-seen order.
    pub shingles: Vec<String>,
}

/// Everything a caller needs to present one comparison.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DetectionReport {
    /// Share of target tokens with a non-zero mark, 0..=100.
    pub similarity_percent: f64,
    /// Bag-of-words cosine, 0..=1. Advisory only.
    pub cosine_similarity: f64,
    pub counts: MatchCounts,
    /// One severity per raw target token.
    pub marks: Vec<u8>,
    pub assessment: SeverityAssessment,
    pub levels: Vec<LevelSummary>,
    /// Raw target tokens, aligned with `marks`.
    pub target_tokens: Vec<String>,
    pub total_tokens: usize,
    pub matched_tokens: usize,
    /// Both documents normalize to identical text.
    pub exact_duplicate: bool,
}

impl DetectionReport {
    pub fn cosine_percent(&self) -> f64 {
        self.cosine_similarity * 100.0
    }

    /// Target tokens paired with their marks.
    pub fn highlighted(&self) -> impl Iterator<Item = (&str, u8)> + '_ {
        self.target_tokens
            .iter()
            .map(String::as_str)
            .zip(self.marks.iter().copied())
    }
}

/// Errors returned by the detector.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DetectError {
    #[error("{role} document has no tokens after normalization")]
    EmptyDocument { role: DocumentRole },
    #[error("canonicalization failed: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("k-gram matching failed: {0}")]
    Perceptual(#[from] PerceptualError),
}
