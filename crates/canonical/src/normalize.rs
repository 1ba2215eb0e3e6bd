//! Text normalization.
//!
//! Produces a single canonical string of lowercase alphanumeric runs joined by
//! single ASCII spaces, with no leading or trailing space. Every
//! non-alphanumeric character (punctuation, symbols, any whitespace) acts as a
//! separator, and consecutive separators collapse into one.
//!
//! ```rust
//! use canonical::normalize;
//!
//! assert_eq!(normalize("  Hello,   WORLD!! "), "hello world");
//! assert_eq!(normalize("it's 100%"), "it s 100");
//! assert_eq!(normalize(""), "");
//! ```

use unicode_normalization::UnicodeNormalization;

use crate::config::CanonicalizeConfig;

/// Normalize with the default configuration.
pub fn normalize(text: &str) -> String {
    normalize_with_config(text, &CanonicalizeConfig::default())
}

/// Normalize `text` according to `cfg`. Never fails; empty or
/// separator-only input yields an empty string.
///
/// Word boundaries come from the raw text: each maximal alphanumeric run of
/// `text` becomes exactly one output word. NFKC folding and lowercasing happen
/// inside a run and never split or create words.
pub fn normalize_with_config(text: &str, cfg: &CanonicalizeConfig) -> String {
    let mut out = String::with_capacity(text.len());

    for run in text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|run| !run.is_empty())
    {
        if !out.is_empty() {
            out.push(' ');
        }
        let word_start = out.len();
        if cfg.normalize_unicode {
            push_lowercase_alphanumeric(&mut out, run.nfkc());
        } else {
            push_lowercase_alphanumeric(&mut out, run.chars());
        }
        if out.len() == word_start {
            // Folding left nothing alphanumeric; keep the raw run.
            out.push_str(run);
        }
    }

    out
}

/// Lowercase `chars` into `out`, dropping the non-alphanumeric leftovers of
/// compatibility folding or case expansion (`İ` lowercases to `i` + U+0307).
fn push_lowercase_alphanumeric(out: &mut String, chars: impl Iterator<Item = char>) {
    for lower in chars.flat_map(char::to_lowercase) {
        if lower.is_alphanumeric() {
            out.push(lower);
        }
    }
}
