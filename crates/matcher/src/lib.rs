//! # Plagiscan Matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` is the detection engine. It sits on top of the canonical layer
//! (`canonical`), k-gram matching (`perceptual`) and cosine scoring
//! (`semantic`), and turns one reference text and one target text into a
//! [`DetectionReport`].
//!
//! ## Flow
//!
//! 1. Both texts are canonicalized into [`canonical::Document`]s. A side with
//!    no tokens is rejected with [`DetectError::EmptyDocument`].
//! 2. Every configured [`perceptual::MatchLevel`] is run over the stemmed
//!    tokens. The default levels are word (k=1), phrase (k=3) and sentence
//!    (k=5) with severities 1, 2 and 3.
//! 3. Per-level marks are merged by position-wise maximum ([`aggregate`]).
//!    The similarity percentage is the share of target tokens with a
//!    non-zero mark.
//! 4. The percentage is classified against four cut points
//!    ([`ThresholdConfig`]) into one of five [`SimilarityCategory`] bands.
//! 5. Cosine similarity over stopword-filtered tokens is reported alongside.
//!    It never feeds the classification.
//!
//! ## Example Usage
//!
//! ```
//! use matcher::{Detector, SimilarityCategory};
//!
//! let detector = Detector::default();
//! let report = detector
//!     .detect(
//!         "the quick brown fox jumps over the lazy dog",
//!         "a quick brown fox jumps over a sleepy dog",
//!     )
//!     .unwrap();
//!
//! assert_eq!(report.marks, vec![0, 3, 3, 3, 3, 3, 0, 0, 1]);
//! assert_eq!(report.assessment.category, SimilarityCategory::High);
//! ```
//!
//! ## Concurrency
//!
//! A [`Detector`] only holds configuration. All per-run state lives on the
//! stack of [`Detector::detect`], so independent comparisons may run on
//! separate threads against a shared detector.

pub mod aggregate;
pub mod classify;
mod engine;
pub mod types;

pub use crate::aggregate::{aggregate, merge_marks, similarity_percent, SeverityProfile};
pub use crate::classify::{
    assess, categorize, SeverityAssessment, SimilarityCategory, ThresholdConfig,
};
pub use crate::engine::Detector;
pub use crate::types::{
    severity_label, DetectError, DetectionReport, DocumentRole, LevelSummary, MatchCounts,
    SEVERITY_NONE, SEVERITY_PHRASE, SEVERITY_SENTENCE, SEVERITY_WORD,
};
