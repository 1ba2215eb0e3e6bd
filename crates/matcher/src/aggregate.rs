//! Merging per-level marks into one severity per target token.
//!
//! Merging is a position-wise maximum, which is commutative and associative,
//! so the order in which levels ran never changes the result. Marks only ever
//! increase as levels accumulate.

use perceptual::LevelMatches;

use crate::types::MatchCounts;

/// Raise `into[i]` to `from[i]` wherever `from` is larger.
///
/// Positions past the shorter slice are left untouched.
pub fn merge_marks(into: &mut [u8], from: &[u8]) {
    for (dst, &src) in into.iter_mut().zip(from) {
        *dst = (*dst).max(src);
    }
}

/// `100 * matched / total`, or 0 for an empty target.
pub fn similarity_percent(matched: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    matched as f64 * 100.0 / total as f64
}

/// Final marks and tallies for one target.
#[derive(Debug, Clone, PartialEq)]
pub struct SeverityProfile {
    pub marks: Vec<u8>,
    pub counts: MatchCounts,
    pub matched_tokens: usize,
    pub total_tokens: usize,
    pub similarity_percent: f64,
}

/// Merge every level's marks over a target of `target_len` tokens.
pub fn aggregate(levels: &[LevelMatches], target_len: usize) -> SeverityProfile {
    let mut marks = vec![0u8; target_len];
    let mut counts = MatchCounts::default();
    for level in levels {
        merge_marks(&mut marks, &level.marks);
        counts.register(level.severity);
    }
    for &mark in &marks {
        if mark > 0 {
            counts.increment(mark);
        }
    }

    let matched_tokens = counts.total();
    SeverityProfile {
        similarity_percent: similarity_percent(matched_tokens, target_len),
        marks,
        counts,
        matched_tokens,
        total_tokens: target_len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(severity: u8, marks: Vec<u8>) -> LevelMatches {
        LevelMatches {
            window: severity as usize,
            severity,
            label: format!("level-{severity}"),
            starts: Vec::new(),
            shingles: Vec::new(),
            marks,
        }
    }

    #[test]
    fn merge_takes_positionwise_max() {
        let mut into = vec![0, 1, 3, 2];
        merge_marks(&mut into, &[2, 1, 1, 3]);
        assert_eq!(into, vec![2, 1, 3, 3]);
    }

    #[test]
    fn larger_severity_wins_on_overlap() {
        let levels = vec![
            level(1, vec![1, 1, 1, 0, 1]),
            level(2, vec![0, 2, 2, 2, 0]),
            level(3, vec![0, 0, 0, 0, 0]),
        ];
        let profile = aggregate(&levels, 5);
        assert_eq!(profile.marks, vec![1, 2, 2, 2, 1]);
        assert_eq!(profile.counts.word_level(), 2);
        assert_eq!(profile.counts.phrase_level(), 3);
        assert_eq!(profile.counts.sentence_level(), 0);
        assert_eq!(profile.matched_tokens, 5);
        assert!((profile.similarity_percent - 100.0).abs() < 1e-9);
    }

    #[test]
    fn order_of_levels_does_not_matter() {
        let a = level(1, vec![1, 0, 1, 1, 0, 0]);
        let b = level(2, vec![0, 2, 2, 2, 0, 0]);
        let c = level(3, vec![0, 0, 3, 3, 3, 0]);
        let orders = [
            vec![a.clone(), b.clone(), c.clone()],
            vec![c.clone(), b.clone(), a.clone()],
            vec![b.clone(), a.clone(), c.clone()],
            vec![c.clone(), a.clone(), b.clone()],
        ];
        let expected = aggregate(&orders[0], 6);
        for order in &orders[1..] {
            assert_eq!(aggregate(order, 6), expected);
        }
        assert_eq!(expected.marks, vec![1, 2, 3, 3, 3, 0]);
    }

    #[test]
    fn unmatched_levels_still_report_zero_counts() {
        let profile = aggregate(&[level(1, vec![0, 0]), level(3, vec![0, 0])], 2);
        assert_eq!(profile.counts.get(1), Some(0));
        assert_eq!(profile.counts.get(3), Some(0));
        assert_eq!(profile.similarity_percent, 0.0);
    }

    #[test]
    fn empty_target_is_zero_percent() {
        assert_eq!(similarity_percent(0, 0), 0.0);
        let profile = aggregate(&[], 0);
        assert!(profile.marks.is_empty());
        assert_eq!(profile.similarity_percent, 0.0);
    }

    #[test]
    fn percent_is_share_of_marked_tokens() {
        assert!((similarity_percent(6, 9) - 66.666_666_666).abs() < 1e-6);
    }
}
