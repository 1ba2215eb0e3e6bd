//! Configuration for k-gram matching.
//!
//! A [`PerceptualConfig`] lists the passes to run as (window size, severity)
//! pairs. The default reproduces word (k=1), phrase (k=3) and sentence (k=5)
//! matching with severities 1, 2 and 3. When passes overlap, the larger
//! severity wins at every token position.
//!
//! # Hash constants
//!
//! Window hashes are `sum(h[i] * base^(k-1-i)) mod modulus`. Only hash
//! equality is checked unless `verify_matches` is set, so the false-positive
//! rate is bounded by roughly `1 / modulus` per window comparison. That is an
//! accepted approximation, not an error condition.
//!
//! ```rust
//! use perceptual::{MatchLevel, PerceptualConfig};
//!
//! let cfg = PerceptualConfig::new()
//!     .with_levels(vec![MatchLevel::new(2, 1, "pair"), MatchLevel::new(4, 2, "run")])
//!     .with_verify_matches(true);
//! assert!(cfg.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One matching pass: windows of `window` tokens mark positions with `severity`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MatchLevel {
    pub window: usize,
    pub severity: u8,
    /// Display label, e.g. "phrase-level".
    pub label: String,
}

impl MatchLevel {
    pub fn new(window: usize, severity: u8, label: impl Into<String>) -> Self {
        Self {
            window,
            severity,
            label: label.into(),
        }
    }

    pub fn word() -> Self {
        Self::new(1, 1, "word-level")
    }

    pub fn phrase() -> Self {
        Self::new(3, 2, "phrase-level")
    }

    pub fn sentence() -> Self {
        Self::new(5, 3, "sentence-level")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PerceptualConfig {
    pub version: u32,
    /// Passes to run. Order does not affect the merged marks.
    pub levels: Vec<MatchLevel>,
    /// Polynomial base `P`.
    pub base: u64,
    /// Modulus `M`. Any value >= 2; arithmetic is widened so nothing overflows.
    pub modulus: u64,
    /// Seed for the per-token string hash.
    pub seed: u64,
    /// Confirm every hash hit by comparing the window tokens.
    pub verify_matches: bool,
}

impl PerceptualConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_levels(mut self, levels: Vec<MatchLevel>) -> Self {
        self.levels = levels;
        self
    }

    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_verify_matches(mut self, verify_matches: bool) -> Self {
        self.verify_matches = verify_matches;
        self
    }

    pub fn validate(&self) -> Result<(), PerceptualError> {
        if self.version < 1 {
            return Err(PerceptualError::InvalidConfigVersion {
                version: self.version,
            });
        }
        if self.levels.is_empty() {
            return Err(PerceptualError::NoLevels);
        }
        if self.modulus < 2 {
            return Err(PerceptualError::InvalidModulus {
                modulus: self.modulus,
            });
        }
        if self.base % self.modulus == 0 {
            return Err(PerceptualError::InvalidBase {
                base: self.base,
                modulus: self.modulus,
            });
        }
        for (idx, level) in self.levels.iter().enumerate() {
            if level.window == 0 {
                return Err(PerceptualError::InvalidWindow { index: idx });
            }
            if level.severity == 0 {
                return Err(PerceptualError::InvalidSeverity { index: idx });
            }
            if self.levels[..idx]
                .iter()
                .any(|prev| prev.severity == level.severity)
            {
                return Err(PerceptualError::DuplicateSeverity {
                    severity: level.severity,
                });
            }
        }
        Ok(())
    }
}

impl Default for PerceptualConfig {
    fn default() -> Self {
        Self {
            version: 1,
            levels: vec![MatchLevel::word(), MatchLevel::phrase(), MatchLevel::sentence()],
            base: 1_000_003,
            modulus: 1_000_000_007,
            seed: 0xF00D_BAAD_F00D_BAAD,
            verify_matches: false,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PerceptualError {
    #[error("invalid config version {version}; expected >= 1")]
    InvalidConfigVersion { version: u32 },

    #[error("invalid config: at least one match level is required")]
    NoLevels,

    #[error("invalid config: level {index} has window 0")]
    InvalidWindow { index: usize },

    #[error("invalid config: level {index} has severity 0 (reserved for unmatched)")]
    InvalidSeverity { index: usize },

    #[error("invalid config: severity {severity} is used by more than one level")]
    DuplicateSeverity { severity: u8 },

    #[error("invalid config: modulus must be >= 2 (got {modulus})")]
    InvalidModulus { modulus: u64 },

    #[error("invalid config: base {base} is a multiple of modulus {modulus}")]
    InvalidBase { base: u64, modulus: u64 },
}
