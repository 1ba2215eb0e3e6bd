//! Configuration for the canonical text layer.
//!
//! The `version` field pins normalization behavior. Any change to how text is
//! folded or split must come with a version bump so identity hashes from
//! different versions never collide.
//!
//! ```rust
//! use canonical::CanonicalizeConfig;
//!
//! let config = CanonicalizeConfig::default();
//! assert_eq!(config.version, 1);
//! assert!(config.normalize_unicode);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::CanonicalError;

/// Configuration for normalization and tokenization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CanonicalizeConfig {
    /// Semantic version of the normalization rules. Must be >= 1.
    pub version: u32,

    /// Apply NFKC before classifying characters. Folds ligatures, full-width
    /// forms and similar compatibility variants into their plain letters.
    pub normalize_unicode: bool,
}

impl CanonicalizeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_normalize_unicode(mut self, normalize_unicode: bool) -> Self {
        self.normalize_unicode = normalize_unicode;
        self
    }

    pub fn validate(&self) -> Result<(), CanonicalError> {
        if self.version == 0 {
            return Err(CanonicalError::InvalidConfig(
                "config version must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for CanonicalizeConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
        }
    }
}
