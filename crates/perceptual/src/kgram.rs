//! Reference window index and per-level matching.
//!
//! The reference side is hashed once per level into a [`ReferenceIndex`]. The
//! target side is rolled with the same constants and every window whose hash
//! is present in the index counts as a match. Two views come out of a pass:
//! the matched window strings and a severity mark per target position.

use fxhash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::config::{MatchLevel, PerceptualConfig};
use crate::shingles::{join_window, token_hashes, RollingHasher};

/// Hashes of every reference window for one window size.
///
/// Start positions are kept per hash so a hit can be confirmed against the
/// actual tokens when verification is enabled.
#[derive(Debug, Clone, Default)]
pub struct ReferenceIndex {
    window: usize,
    buckets: FxHashMap<u64, Vec<usize>>,
}

impl ReferenceIndex {
    pub fn build<S: AsRef<str>>(reference: &[S], window: usize, cfg: &PerceptualConfig) -> Self {
        let mut buckets: FxHashMap<u64, Vec<usize>> = FxHashMap::default();
        if window > 0 && reference.len() >= window {
            let hasher = RollingHasher::new(window, cfg.base, cfg.modulus);
            for (start, h) in hasher
                .hashes(&token_hashes(reference, cfg.seed))
                .into_iter()
                .enumerate()
            {
                buckets.entry(h).or_default().push(start);
            }
        }
        Self { window, buckets }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    pub fn contains(&self, hash: u64) -> bool {
        self.buckets.contains_key(&hash)
    }

    /// Number of distinct window hashes.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    fn starts(&self, hash: u64) -> &[usize] {
        self.buckets.get(&hash).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Start positions of every target window that matches a reference window.
///
/// Hash equality alone decides a match unless `cfg.verify_matches` is set.
/// Targets shorter than `window` produce no matches.
pub fn match_windows<R, T>(
    reference: &[R],
    target: &[T],
    window: usize,
    cfg: &PerceptualConfig,
) -> Vec<usize>
where
    R: AsRef<str>,
    T: AsRef<str>,
{
    if window == 0 || target.len() < window {
        return Vec::new();
    }
    let index = ReferenceIndex::build(reference, window, cfg);
    if index.is_empty() {
        return Vec::new();
    }

    let hasher = RollingHasher::new(window, cfg.base, cfg.modulus);
    hasher
        .hashes(&token_hashes(target, cfg.seed))
        .into_iter()
        .enumerate()
        .filter(|&(start, h)| {
            if !cfg.verify_matches {
                return index.contains(h);
            }
            index
                .starts(h)
                .iter()
                .any(|&ref_start| same_window(reference, ref_start, target, start, window))
        })
        .map(|(start, _)| start)
        .collect()
}

fn same_window<R: AsRef<str>, T: AsRef<str>>(
    reference: &[R],
    ref_start: usize,
    target: &[T],
    tgt_start: usize,
    window: usize,
) -> bool {
    reference[ref_start..ref_start + window]
        .iter()
        .zip(&target[tgt_start..tgt_start + window])
        .all(|(r, t)| r.as_ref() == t.as_ref())
}

/// Matched target windows as joined strings, in target order, duplicates kept.
pub fn matched_shingles<R, T>(
    reference: &[R],
    target: &[T],
    window: usize,
    cfg: &PerceptualConfig,
) -> Vec<String>
where
    R: AsRef<str>,
    T: AsRef<str>,
{
    match_windows(reference, target, window, cfg)
        .into_iter()
        .map(|start| join_window(target, start, window))
        .collect()
}

/// Raise every position covered by a matched window to at least `severity`.
pub fn mark_positions(target_len: usize, starts: &[usize], window: usize, severity: u8) -> Vec<u8> {
    let mut marks = vec![0u8; target_len];
    for &start in starts {
        let end = (start + window).min(target_len);
        for mark in &mut marks[start..end] {
            *mark = (*mark).max(severity);
        }
    }
    marks
}

/// Drop repeated shingles, keeping first-seen order.
pub fn dedup_shingles<S: AsRef<str>>(shingles: &[S]) -> Vec<String> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    let mut out = Vec::new();
    for shingle in shingles {
        let shingle = shingle.as_ref();
        if seen.insert(shingle) {
            out.push(shingle.to_string());
        }
    }
    out
}

/// Outcome of one matching pass over the target.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LevelMatches {
    pub window: usize,
    pub severity: u8,
    pub label: String,
    /// Target start position of each matched window.
    pub starts: Vec<usize>,
    /// Matched windows as text, one per entry in `starts`.
    pub shingles: Vec<String>,
    /// One mark per target token: `severity` where covered, else 0.
    pub marks: Vec<u8>,
}

impl LevelMatches {
    pub fn is_empty(&self) -> bool {
        self.starts.is_empty()
    }

    pub fn unique_shingles(&self) -> Vec<String> {
        dedup_shingles(&self.shingles)
    }
}

/// Run one level end to end.
pub fn run_level<R, T>(
    reference: &[R],
    target: &[T],
    level: &MatchLevel,
    cfg: &PerceptualConfig,
) -> LevelMatches
where
    R: AsRef<str>,
    T: AsRef<str>,
{
    let starts = match_windows(reference, target, level.window, cfg);
    let shingles = starts
        .iter()
        .map(|&start| join_window(target, start, level.window))
        .collect();
    let marks = mark_positions(target.len(), &starts, level.window, level.severity);

    LevelMatches {
        window: level.window,
        severity: level.severity,
        label: level.label.clone(),
        starts,
        shingles,
        marks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg() -> PerceptualConfig {
        PerceptualConfig::default()
    }

    #[test]
    fn word_level_matches_shared_tokens() {
        let reference = ["the", "quick", "brown", "fox"];
        let target = ["a", "brown", "dog", "quick"];
        assert_eq!(match_windows(&reference, &target, 1, &cfg()), vec![1, 3]);
    }

    #[test]
    fn phrase_level_requires_contiguous_run() {
        let reference = ["quick", "brown", "fox", "jump"];
        let target = ["quick", "fox", "brown", "quick", "brown", "fox"];
        assert_eq!(
            matched_shingles(&reference, &target, 3, &cfg()),
            vec!["quick brown fox"]
        );
    }

    #[test]
    fn short_target_has_no_matches_or_marks() {
        let reference = ["a", "b", "c", "d", "e"];
        let target = ["a", "b"];
        let level = MatchLevel::sentence();
        let out = run_level(&reference, &target, &level, &cfg());
        assert!(out.is_empty());
        assert_eq!(out.marks, vec![0, 0]);
    }

    #[test]
    fn short_reference_has_no_matches() {
        let reference = ["a", "b"];
        let target = ["a", "b", "c"];
        assert!(match_windows(&reference, &target, 3, &cfg()).is_empty());
    }

    #[test]
    fn marks_cover_every_token_of_a_window() {
        let marks = mark_positions(7, &[1, 2], 3, 2);
        assert_eq!(marks, vec![0, 2, 2, 2, 2, 0, 0]);
    }

    #[test]
    fn duplicates_are_kept_at_source_and_deduped_for_display() {
        let reference = ["echo"];
        let target = ["echo", "x", "echo"];
        let level = MatchLevel::word();
        let out = run_level(&reference, &target, &level, &cfg());
        assert_eq!(out.shingles, vec!["echo", "echo"]);
        assert_eq!(out.unique_shingles(), vec!["echo"]);
        assert_eq!(out.marks, vec![1, 0, 1]);
    }

    #[test]
    fn dedup_keeps_first_seen_order() {
        let out = dedup_shingles(&["b a", "a b", "b a", "c"]);
        assert_eq!(out, vec!["b a", "a b", "c"]);
    }

    #[test]
    fn verification_rejects_forced_collisions() {
        // Modulus 2 makes every window collide with something.
        let base = PerceptualConfig::default().with_modulus(2).with_base(1);
        let reference = ["alpha", "beta", "gamma", "delta"];
        let target = ["one", "two", "three", "four", "five", "six"];

        let unverified = match_windows(&reference, &target, 2, &base);
        let verified = match_windows(&reference, &target, 2, &base.clone().with_verify_matches(true));
        assert!(verified.is_empty());
        assert!(unverified.len() >= verified.len());
    }

    #[test]
    fn verification_keeps_true_matches() {
        let cfg = PerceptualConfig::default().with_verify_matches(true);
        let reference = ["jump", "over", "the", "lazy"];
        let target = ["we", "jump", "over", "the"];
        assert_eq!(match_windows(&reference, &target, 3, &cfg), vec![1]);
    }

    #[test]
    fn reference_index_counts_distinct_windows() {
        let index = ReferenceIndex::build(&["a", "b", "a", "b"], 2, &cfg());
        assert_eq!(index.window(), 2);
        // "a b" twice, "b a" once.
        assert_eq!(index.len(), 2);
    }
}
