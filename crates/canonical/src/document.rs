//! The per-run document and its derived forms.
//!
//! A [`Document`] is built once per side of a comparison and never mutated.
//! It owns every derived form:
//!
//! - `normalized`: canonical text
//! - `tokens`: raw token sequence, used for highlighting
//! - `stemmed`: stemmed tokens, used for k-gram matching
//! - `filtered`: stemmed tokens minus stopwords, used for cosine scoring
//!
//! ```rust
//! use canonical::{canonicalize, CanonicalizeConfig};
//!
//! let doc = canonicalize("target", "Walking the dogs", &CanonicalizeConfig::default()).unwrap();
//! assert_eq!(doc.normalized, "walking the dogs");
//! assert_eq!(doc.stemmed, vec!["walk", "the", "dog"]);
//! assert_eq!(doc.filtered, vec!["walk", "dog"]);
//! ```

use serde::{Deserialize, Serialize};

use crate::config::CanonicalizeConfig;
use crate::error::CanonicalError;
use crate::hash::hash_canonical_bytes;
use crate::normalize::normalize_with_config;
use crate::stem::stem_tokens;
use crate::stopwords::StopwordFilter;
use crate::token::{tokenize, Token};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Document {
    /// Caller-supplied role or name ("reference", "target", a filename).
    pub label: String,
    pub normalized: String,
    pub tokens: Vec<Token>,
    pub stemmed: Vec<String>,
    pub filtered: Vec<String>,
    /// Identity hash of `normalized` under the config version.
    pub sha256_hex: String,
    pub canonical_version: u32,
}

impl Document {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn token_texts(&self) -> Vec<&str> {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Build a [`Document`] from raw text.
///
/// Fails with [`CanonicalError::EmptyInput`] when nothing survives
/// normalization; callers treat that as a precondition violation and never
/// run matching on an empty side.
pub fn canonicalize(
    label: impl Into<String>,
    input: &str,
    cfg: &CanonicalizeConfig,
) -> Result<Document, CanonicalError> {
    cfg.validate()?;
    let label = label.into();

    let normalized = normalize_with_config(input, cfg);
    let tokens = tokenize(&normalized);
    if tokens.is_empty() {
        return Err(CanonicalError::EmptyInput { label });
    }

    let stemmed = stem_tokens(&tokens);
    let filtered = StopwordFilter::default().filter(&stemmed);
    let sha256_hex = hash_canonical_bytes(cfg.version, normalized.as_bytes());

    Ok(Document {
        label,
        normalized,
        tokens,
        stemmed,
        filtered,
        sha256_hex,
        canonical_version: cfg.version,
    })
}
