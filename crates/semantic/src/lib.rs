//! Plagiscan semantic overlap.
//!
//! Bag-of-words cosine similarity between two token multisets. Input is
//! expected to be stemmed and stopword-filtered already; this crate only
//! counts and compares.
//!
//! The score is advisory. It is reported next to the exact-match similarity
//! but never feeds into it.
//!
//! ```
//! use semantic::cosine_similarity;
//!
//! let a = ["quick", "brown", "fox"];
//! let b = ["quick", "brown", "dog"];
//! let score = cosine_similarity(&a, &b);
//! assert!((score - 2.0 / 3.0).abs() < 1e-12);
//! ```

mod cosine;

pub use crate::cosine::{cosine_similarity, TermFrequencies};
