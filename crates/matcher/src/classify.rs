//! Threshold classification.
//!
//! Four cut points split `[0, 100]` into five bands. Checks are strict
//! half-open intervals evaluated in cut-point order, so a percentage equal to
//! a cut point lands in the band above it. Cut points that are not ascending
//! are tolerated: bands that can no longer be reached are simply skipped.

use serde::{Deserialize, Serialize};

/// Cut points in percent. Expected, but not required, to be non-decreasing.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ThresholdConfig {
    pub low: f64,
    pub moderate: f64,
    pub high: f64,
    pub very_high: f64,
}

impl ThresholdConfig {
    pub fn new(low: f64, moderate: f64, high: f64, very_high: f64) -> Self {
        Self {
            low,
            moderate,
            high,
            very_high,
        }
    }

    /// True when `low <= moderate <= high <= very_high`.
    pub fn is_ascending(&self) -> bool {
        self.low <= self.moderate && self.moderate <= self.high && self.high <= self.very_high
    }

    pub fn as_array(&self) -> [f64; 4] {
        [self.low, self.moderate, self.high, self.very_high]
    }

    /// Lower and upper bound of a band as configured, upper exclusive except
    /// for the last band which ends at 100.
    pub fn band_range(&self, category: SimilarityCategory) -> (f64, f64) {
        match category {
            SimilarityCategory::Original => (0.0, self.low),
            SimilarityCategory::Low => (self.low, self.moderate),
            SimilarityCategory::Moderate => (self.moderate, self.high),
            SimilarityCategory::High => (self.high, self.very_high),
            SimilarityCategory::Critical => (self.very_high, 100.0),
        }
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self::new(15.0, 40.0, 60.0, 85.0)
    }
}

/// The five fixed bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityCategory {
    Original,
    Low,
    Moderate,
    High,
    Critical,
}

impl SimilarityCategory {
    pub const ALL: [SimilarityCategory; 5] = [
        SimilarityCategory::Original,
        SimilarityCategory::Low,
        SimilarityCategory::Moderate,
        SimilarityCategory::High,
        SimilarityCategory::Critical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SimilarityCategory::Original => "ORIGINAL/ACCEPTABLE",
            SimilarityCategory::Low => "LOW SIMILARITY",
            SimilarityCategory::Moderate => "MODERATE SIMILARITY",
            SimilarityCategory::High => "HIGH SIMILARITY",
            SimilarityCategory::Critical => "CRITICAL - POTENTIAL PLAGIARISM",
        }
    }

    /// Short title used in threshold tables.
    pub fn title(self) -> &'static str {
        match self {
            SimilarityCategory::Original => "Original/Acceptable",
            SimilarityCategory::Low => "Low Similarity",
            SimilarityCategory::Moderate => "Moderate Similarity",
            SimilarityCategory::High => "High Similarity",
            SimilarityCategory::Critical => "Critical/Plagiarism",
        }
    }

    pub fn recommendation(self) -> &'static str {
        match self {
            SimilarityCategory::Original => "Content appears original. No action needed.",
            SimilarityCategory::Low => {
                "Minor similarities detected. Generally acceptable with proper citations."
            }
            SimilarityCategory::Moderate => {
                "Moderate similarities found. Review and ensure proper paraphrasing and citations."
            }
            SimilarityCategory::High => {
                "High similarity detected. Significant revision and proper attribution required."
            }
            SimilarityCategory::Critical => {
                "ALERT: Very high similarity! Immediate review and major revision needed."
            }
        }
    }

    /// Moderate and above need a human look.
    pub fn requires_review(self) -> bool {
        self >= SimilarityCategory::Moderate
    }
}

/// Verdict derived from where the similarity percentage falls.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeverityAssessment {
    pub category: SimilarityCategory,
    pub label: String,
    pub recommendation: String,
    pub flag_for_review: bool,
}

impl From<SimilarityCategory> for SeverityAssessment {
    fn from(category: SimilarityCategory) -> Self {
        Self {
            category,
            label: category.label().to_string(),
            recommendation: category.recommendation().to_string(),
            flag_for_review: category.requires_review(),
        }
    }
}

/// Band for `percent` under `thresholds`.
pub fn categorize(percent: f64, thresholds: &ThresholdConfig) -> SimilarityCategory {
    if percent < thresholds.low {
        SimilarityCategory::Original
    } else if percent < thresholds.moderate {
        SimilarityCategory::Low
    } else if percent < thresholds.high {
        SimilarityCategory::Moderate
    } else if percent < thresholds.very_high {
        SimilarityCategory::High
    } else {
        SimilarityCategory::Critical
    }
}

/// Classify `percent` into a full [`SeverityAssessment`].
pub fn assess(percent: f64, thresholds: &ThresholdConfig) -> SeverityAssessment {
    categorize(percent, thresholds).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat(p: f64) -> SimilarityCategory {
        categorize(p, &ThresholdConfig::default())
    }

    #[test]
    fn boundaries_belong_to_the_upper_band() {
        assert_eq!(cat(14.999), SimilarityCategory::Original);
        assert_eq!(cat(15.0), SimilarityCategory::Low);
        assert_eq!(cat(39.999), SimilarityCategory::Low);
        assert_eq!(cat(40.0), SimilarityCategory::Moderate);
        assert_eq!(cat(59.999), SimilarityCategory::Moderate);
        assert_eq!(cat(60.0), SimilarityCategory::High);
        assert_eq!(cat(84.999), SimilarityCategory::High);
        assert_eq!(cat(85.0), SimilarityCategory::Critical);
    }

    #[test]
    fn extremes() {
        assert_eq!(cat(0.0), SimilarityCategory::Original);
        assert_eq!(cat(100.0), SimilarityCategory::Critical);
    }

    #[test]
    fn fifteen_percent_is_low_similarity() {
        let a = assess(15.0, &ThresholdConfig::default());
        assert_eq!(a.label, "LOW SIMILARITY");
        assert!(!a.flag_for_review);
    }

    #[test]
    fn review_starts_at_moderate() {
        let flags: Vec<bool> = SimilarityCategory::ALL
            .iter()
            .map(|c| c.requires_review())
            .collect();
        assert_eq!(flags, vec![false, false, true, true, true]);
    }

    #[test]
    fn assessment_carries_fixed_texts() {
        let a = assess(90.0, &ThresholdConfig::default());
        assert_eq!(a.category, SimilarityCategory::Critical);
        assert_eq!(a.label, "CRITICAL - POTENTIAL PLAGIARISM");
        assert!(a.recommendation.starts_with("ALERT"));
        assert!(a.flag_for_review);
    }

    #[test]
    fn non_ascending_thresholds_skip_unreachable_bands() {
        // moderate below low: the Low band is empty.
        let t = ThresholdConfig::new(50.0, 30.0, 70.0, 90.0);
        assert!(!t.is_ascending());
        assert_eq!(categorize(40.0, &t), SimilarityCategory::Original);
        assert_eq!(categorize(55.0, &t), SimilarityCategory::Moderate);
        assert_eq!(categorize(95.0, &t), SimilarityCategory::Critical);
    }

    #[test]
    fn fully_reversed_thresholds_are_deterministic() {
        let t = ThresholdConfig::new(85.0, 60.0, 40.0, 15.0);
        for p in [0.0, 10.0, 15.0, 50.0, 84.9, 85.0, 100.0] {
            let first = categorize(p, &t);
            assert_eq!(first, categorize(p, &t));
            assert!(matches!(
                first,
                SimilarityCategory::Original | SimilarityCategory::Critical
            ));
        }
    }

    #[test]
    fn equal_thresholds_collapse_bands() {
        let t = ThresholdConfig::new(50.0, 50.0, 50.0, 50.0);
        assert!(t.is_ascending());
        assert_eq!(categorize(49.0, &t), SimilarityCategory::Original);
        assert_eq!(categorize(50.0, &t), SimilarityCategory::Critical);
    }

    #[test]
    fn band_ranges_follow_config() {
        let t = ThresholdConfig::default();
        assert_eq!(t.band_range(SimilarityCategory::Low), (15.0, 40.0));
        assert_eq!(t.band_range(SimilarityCategory::Critical), (85.0, 100.0));
    }
}
