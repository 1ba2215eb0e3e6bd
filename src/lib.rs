//! Workspace umbrella crate for Plagiscan.
//!
//! This crate stitches canonicalization, k-gram matching, cosine scoring and
//! classification together so callers can compare two texts with a single
//! API entry point. It also carries the pieces only a front end needs: YAML
//! configuration, severity renderers and the text report.
//!
//! ```
//! let report = plagiscan::detect(
//!     "the quick brown fox jumps over the lazy dog",
//!     "a quick brown fox jumps over a sleepy dog",
//! )
//! .unwrap();
//!
//! assert_eq!(report.assessment.label, "HIGH SIMILARITY");
//! assert_eq!(report.counts.sentence_level(), 5);
//! ```

pub mod config;
pub mod render;
pub mod report;

pub use canonical::{
    canonicalize, normalize, stem, tokenize, CanonicalError, CanonicalizeConfig, Document,
    StopwordFilter, Token,
};
pub use matcher::{
    assess, categorize, severity_label, DetectError, DetectionReport, Detector, DocumentRole,
    LevelSummary, MatchCounts, SeverityAssessment, SimilarityCategory, ThresholdConfig,
};
pub use perceptual::{match_levels, LevelMatches, MatchLevel, PerceptualConfig, PerceptualError};
pub use semantic::{cosine_similarity, TermFrequencies};

pub use crate::config::{ConfigLoadError, PlagiscanConfig};
pub use crate::render::{AnsiRenderer, PlainRenderer, Renderer};
pub use crate::report::{render_report, TextReport};

/// Compare `target` against `reference` with default settings.
pub fn detect(reference: &str, target: &str) -> Result<DetectionReport, DetectError> {
    Detector::default().detect(reference, target)
}

/// Compare `target` against `reference` with settings loaded from YAML.
pub fn detect_with_config(
    config: &PlagiscanConfig,
    reference: &str,
    target: &str,
) -> Result<DetectionReport, DetectError> {
    config.detector().detect(reference, target)
}
