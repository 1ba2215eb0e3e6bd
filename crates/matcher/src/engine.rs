use std::time::Instant;

use canonical::{canonicalize, CanonicalError, CanonicalizeConfig, Document};
use perceptual::{match_levels, PerceptualConfig};
use semantic::cosine_similarity;
use tracing::{debug, info, warn, Level};

use crate::aggregate::aggregate;
use crate::classify::{assess, ThresholdConfig};
use crate::types::{DetectError, DetectionReport, DocumentRole, LevelSummary};

#[cfg(test)]
mod tests;

/// Compares one reference document against one target document.
///
/// Holds configuration only. Every call to [`Detector::detect`] builds its own
/// documents, hash sets and mark vectors and drops them on return, so one
/// detector can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Detector {
    canonical_cfg: CanonicalizeConfig,
    perceptual_cfg: PerceptualConfig,
    thresholds: ThresholdConfig,
}

impl Detector {
    /// Construct a detector from explicit configs.
    pub fn new(
        canonical_cfg: CanonicalizeConfig,
        perceptual_cfg: PerceptualConfig,
        thresholds: ThresholdConfig,
    ) -> Self {
        Self {
            canonical_cfg,
            perceptual_cfg,
            thresholds,
        }
    }

    /// Default normalization and levels with custom cut points.
    pub fn with_thresholds(thresholds: ThresholdConfig) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    pub fn canonical_config(&self) -> &CanonicalizeConfig {
        &self.canonical_cfg
    }

    pub fn perceptual_config(&self) -> &PerceptualConfig {
        &self.perceptual_cfg
    }

    pub fn thresholds(&self) -> &ThresholdConfig {
        &self.thresholds
    }

    /// Check the stage configs without running anything.
    pub fn validate(&self) -> Result<(), DetectError> {
        self.canonical_cfg.validate()?;
        self.perceptual_cfg.validate()?;
        Ok(())
    }

    /// Normalize both texts and compare them.
    ///
    /// Either side normalizing to zero tokens is rejected with
    /// [`DetectError::EmptyDocument`] before any matching runs.
    pub fn detect(&self, reference: &str, target: &str) -> Result<DetectionReport, DetectError> {
        let start = Instant::now();
        let span = tracing::span!(
            Level::INFO,
            "matcher.detect",
            reference_bytes = reference.len(),
            target_bytes = target.len()
        );
        let _guard = span.enter();

        match self.detect_inner(reference, target) {
            Ok(report) => {
                let elapsed_micros = start.elapsed().as_micros();
                info!(
                    similarity_percent = report.similarity_percent,
                    cosine_similarity = report.cosine_similarity,
                    category = report.assessment.label.as_str(),
                    flag_for_review = report.assessment.flag_for_review,
                    total_tokens = report.total_tokens,
                    elapsed_micros,
                    "detect_success"
                );
                Ok(report)
            }
            Err(err) => {
                let elapsed_micros = start.elapsed().as_micros();
                warn!(error = %err, elapsed_micros, "detect_failure");
                Err(err)
            }
        }
    }

    fn detect_inner(&self, reference: &str, target: &str) -> Result<DetectionReport, DetectError> {
        self.perceptual_cfg.validate()?;
        let reference = self.prepare(DocumentRole::Reference, reference)?;
        let target = self.prepare(DocumentRole::Target, target)?;
        self.compare_documents(&reference, &target)
    }

    fn prepare(&self, role: DocumentRole, text: &str) -> Result<Document, DetectError> {
        match canonicalize(role.as_str(), text, &self.canonical_cfg) {
            Ok(doc) => Ok(doc),
            Err(CanonicalError::EmptyInput { .. }) => Err(DetectError::EmptyDocument { role }),
            Err(err) => Err(err.into()),
        }
    }

    /// Compare two already canonicalized documents.
    ///
    /// Empty documents are rejected here too, for callers that build their
    /// own [`Document`]s.
    pub fn compare_documents(
        &self,
        reference: &Document,
        target: &Document,
    ) -> Result<DetectionReport, DetectError> {
        if reference.is_empty() {
            return Err(DetectError::EmptyDocument {
                role: DocumentRole::Reference,
            });
        }
        if target.is_empty() {
            return Err(DetectError::EmptyDocument {
                role: DocumentRole::Target,
            });
        }

        // Matching runs on stemmed tokens with stopwords kept.
        let levels = match_levels(&reference.stemmed, &target.stemmed, &self.perceptual_cfg)?;
        for level in &levels {
            debug!(
                window = level.window,
                severity = level.severity,
                label = level.label.as_str(),
                matched_windows = level.starts.len(),
                "level_pass"
            );
        }

        let profile = aggregate(&levels, target.len());
        // Cosine only ever sees stopword-filtered tokens.
        let cosine = cosine_similarity(&reference.filtered, &target.filtered);

        if !self.thresholds.is_ascending() {
            warn!(
                thresholds = ?self.thresholds.as_array(),
                "thresholds are not ascending; some bands are unreachable"
            );
        }
        let assessment = assess(profile.similarity_percent, &self.thresholds);

        let summaries = levels
            .iter()
            .map(|level| LevelSummary {
                window: level.window,
                severity: level.severity,
                label: level.label.clone(),
                window_matches: level.starts.len(),
                shingles: level.unique_shingles(),
            })
            .collect();

        Ok(DetectionReport {
            similarity_percent: profile.similarity_percent,
            cosine_similarity: cosine,
            counts: profile.counts,
            marks: profile.marks,
            assessment,
            levels: summaries,
            target_tokens: target.tokens.iter().map(|t| t.text.clone()).collect(),
            total_tokens: profile.total_tokens,
            matched_tokens: profile.matched_tokens,
            exact_duplicate: reference.sha256_hex == target.sha256_hex,
        })
    }
}
