//! Closed stopword set for the cosine branch.
//!
//! Exact-sequence matching deliberately keeps stopwords so runs of common
//! words still register as phrase and sentence matches. Only the bag-of-words
//! scorer sees filtered tokens.

use fxhash::FxHashSet;

/// Function words removed before cosine scoring. Compared against stemmed
/// tokens, so entries shorter than five characters match as-is.
pub const STOPWORDS: &[&str] = &[
    "the", "is", "in", "and", "to", "a", "of", "for", "on", "at", "by", "with", "an", "that",
    "this", "it", "as", "are", "was", "were", "be", "any",
];

/// Membership filter over a fixed word set.
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    words: FxHashSet<String>,
}

impl StopwordFilter {
    /// Build a filter from a custom word list.
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Keep tokens not in the set, in their original order.
    pub fn filter<S: AsRef<str>>(&self, tokens: &[S]) -> Vec<String> {
        tokens
            .iter()
            .filter(|t| !self.contains(t.as_ref()))
            .map(|t| t.as_ref().to_string())
            .collect()
    }
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new(STOPWORDS.iter().copied())
    }
}

/// Filter `tokens` against the default [`STOPWORDS`] set.
pub fn remove_stopwords<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    StopwordFilter::default().filter(tokens)
}
