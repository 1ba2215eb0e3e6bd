//! Plagiscan canonical text layer.
//!
//! Turns a raw document into the token streams every later stage consumes.
//! Nothing downstream touches raw text again; perceptual matching and the
//! cosine scorer both start from a [`Document`].
//!
//! ## What we do
//!
//! - Normalization: every non-alphanumeric run becomes one space, letters are
//!   lowercased, optional NFKC folding inside each word
//! - Tokenization with positions and byte offsets, so highlighting lines up
//!   with the normalized target
//! - Light suffix stemming (`ing`, `ed`, `s`)
//! - Stopword filtering for the cosine branch only
//!
//! ## Pure function guarantee
//!
//! No I/O, no clock calls, no locale dependence. Alphanumeric classification
//! uses Unicode properties, never the process locale.
//!
//! Derived forms are owned by the [`Document`] and dropped with it; nothing is
//! cached between runs.

mod config;
mod document;
mod error;
mod hash;
mod normalize;
mod stem;
mod stopwords;
mod token;

pub use crate::config::CanonicalizeConfig;
pub use crate::document::{canonicalize, Document};
pub use crate::error::CanonicalError;
pub use crate::hash::hash_canonical_bytes;
pub use crate::normalize::{normalize, normalize_with_config};
pub use crate::stem::{stem, stem_tokens};
pub use crate::stopwords::{remove_stopwords, StopwordFilter, STOPWORDS};
pub use crate::token::{tokenize, Token};
