use fxhash::FxHashMap;
use serde::Serialize;

/// Term-frequency vector of a token multiset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TermFrequencies {
    counts: FxHashMap<String, u64>,
    total: u64,
}

impl TermFrequencies {
    pub fn from_tokens<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut tf = Self::default();
        for token in tokens {
            tf.add(token.as_ref());
        }
        tf
    }

    pub fn add(&mut self, term: &str) {
        *self.counts.entry(term.to_string()).or_insert(0) += 1;
        self.total += 1;
    }

    pub fn get(&self, term: &str) -> u64 {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of tokens counted, duplicates included.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Dot product over the union of terms; absent terms contribute zero.
    pub fn dot(&self, other: &Self) -> f64 {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .counts
            .iter()
            .map(|(term, &count)| count as f64 * large.get(term) as f64)
            .sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.counts
            .values()
            .map(|&c| (c as f64) * (c as f64))
            .sum::<f64>()
            .sqrt()
    }

    /// Cosine of the angle between the two frequency vectors, in `[0, 1]`.
    ///
    /// Returns 0.0 when either side is empty: no terms means no overlap, not
    /// an error.
    pub fn cosine(&self, other: &Self) -> f64 {
        if self.is_empty() || other.is_empty() {
            return 0.0;
        }
        let denom = self.l2_norm() * other.l2_norm();
        if denom == 0.0 {
            return 0.0;
        }
        (self.dot(other) / denom).clamp(0.0, 1.0)
    }
}

/// Cosine similarity of two token multisets.
pub fn cosine_similarity<A, B>(a: &[A], b: &[B]) -> f64
where
    A: AsRef<str>,
    B: AsRef<str>,
{
    TermFrequencies::from_tokens(a).cosine(&TermFrequencies::from_tokens(b))
}
