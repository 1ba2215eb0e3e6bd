//! # Plagiscan k-gram matching
//!
//! Finds exact token runs shared between a reference and a target document
//! and turns them into per-token severity marks.
//!
//! ## Contract
//!
//! - Consumes stemmed tokens from the canonical layer. Never normalizes or
//!   tokenizes raw text.
//! - Pure function of `(reference_tokens, target_tokens, config)`: no I/O, no
//!   clocks, no global state. Hash constants are read-only and can be shared
//!   across threads.
//!
//! ## Pipeline per level
//!
//! 1.  **Rolling hash**: every `k`-token window of the reference is hashed with
//!     a Karp-Rabin polynomial and stored in a [`ReferenceIndex`].
//! 2.  **Scan**: the target is rolled with the same constants; a window whose
//!     hash is in the index is a match.
//! 3.  **Mark**: every target position covered by a matched window is raised to
//!     the level's severity.
//!
//! Matches are decided on hash equality. A collision can report a false match
//! with probability on the order of `1 / modulus`; set
//! [`PerceptualConfig::verify_matches`] to confirm hits token by token.
//!
//! ```
//! use perceptual::{match_levels, PerceptualConfig};
//!
//! let reference = ["the", "quick", "brown", "fox", "jump"];
//! let target = ["a", "quick", "brown", "fox", "jump"];
//! let levels = match_levels(&reference, &target, &PerceptualConfig::default()).unwrap();
//!
//! assert_eq!(levels.len(), 3);
//! assert_eq!(levels[1].shingles, vec!["quick brown fox", "brown fox jump"]);
//! assert!(levels[2].is_empty());
//! ```
pub mod config;
mod kgram;
mod shingles;

pub use crate::config::{MatchLevel, PerceptualConfig, PerceptualError};
pub use crate::kgram::{
    dedup_shingles, mark_positions, match_windows, matched_shingles, run_level, LevelMatches,
    ReferenceIndex,
};
pub use crate::shingles::{join_window, make_shingles_rolling, token_hashes, RollingHasher};

/// Current matching algorithm version for this crate.
pub const PERCEPTUAL_VERSION: u16 = 1;

/// Human-readable algorithm identifier.
pub const PERCEPTUAL_ALGORITHM: &str = "karp_rabin_kgram_v1";

/// Run every configured level, in configuration order.
pub fn match_levels<R, T>(
    reference: &[R],
    target: &[T],
    cfg: &PerceptualConfig,
) -> Result<Vec<LevelMatches>, PerceptualError>
where
    R: AsRef<str>,
    T: AsRef<str>,
{
    cfg.validate()?;
    Ok(cfg
        .levels
        .iter()
        .map(|level| run_level(reference, target, level, cfg))
        .collect())
}
