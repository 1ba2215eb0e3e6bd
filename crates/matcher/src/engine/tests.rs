use super::*;

use perceptual::MatchLevel;

use crate::classify::SimilarityCategory;

const REFERENCE: &str = "the quick brown fox jumps over the lazy dog";
const TARGET: &str = "a quick brown fox jumps over a sleepy dog";

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn golden_fox_example() {
    let report = Detector::default()
        .detect(REFERENCE, TARGET)
        .expect("detection succeeds");

    assert_eq!(report.marks, vec![0, 3, 3, 3, 3, 3, 0, 0, 1]);
    assert_eq!(report.counts.word_level(), 1);
    assert_eq!(report.counts.phrase_level(), 0);
    assert_eq!(report.counts.sentence_level(), 5);
    assert_eq!(report.matched_tokens, 6);
    assert_eq!(report.total_tokens, 9);
    assert!(approx(report.similarity_percent, 600.0 / 9.0));
    assert!(approx(report.cosine_similarity, 6.0 / 7.0));
    assert_eq!(report.assessment.category, SimilarityCategory::High);
    assert_eq!(report.assessment.label, "HIGH SIMILARITY");
    assert!(report.assessment.flag_for_review);
    assert!(!report.exact_duplicate);
}

#[test]
fn golden_fox_shingles_per_level() {
    let report = Detector::default().detect(REFERENCE, TARGET).unwrap();

    let word = &report.levels[0];
    assert_eq!(word.label, "word-level");
    assert_eq!(
        word.shingles,
        vec!["quick", "brown", "fox", "jump", "over", "dog"]
    );

    let phrase = &report.levels[1];
    assert_eq!(
        phrase.shingles,
        vec!["quick brown fox", "brown fox jump", "fox jump over"]
    );

    let sentence = &report.levels[2];
    assert_eq!(sentence.shingles, vec!["quick brown fox jump over"]);
    assert_eq!(sentence.window_matches, 1);
}

#[test]
fn marks_align_with_raw_target_tokens() {
    let report = Detector::default().detect(REFERENCE, TARGET).unwrap();
    assert_eq!(report.marks.len(), report.target_tokens.len());
    assert_eq!(report.target_tokens[1], "quick");
    // Raw tokens keep their surface form; only matching used stems.
    assert_eq!(report.target_tokens[4], "jumps");
    let highlighted: Vec<(&str, u8)> = report.highlighted().collect();
    assert_eq!(highlighted[8], ("dog", 1));
}

#[test]
fn identical_documents_are_fully_sentence_matched() {
    let text = "Plagiarism detection compares documents token by token, then phrase by phrase.";
    let report = Detector::default().detect(text, text).unwrap();

    assert!(report.marks.iter().all(|&m| m == 3));
    assert!(approx(report.similarity_percent, 100.0));
    assert!(approx(report.cosine_similarity, 1.0));
    assert!(report.exact_duplicate);
    assert_eq!(
        report.assessment.category,
        SimilarityCategory::Critical
    );
}

#[test]
fn identical_short_documents_top_out_at_largest_fitting_window() {
    let report = Detector::default()
        .detect("quick brown fox", "Quick, brown fox!")
        .unwrap();
    assert_eq!(report.marks, vec![2, 2, 2]);
    assert!(approx(report.similarity_percent, 100.0));
    assert!(report.exact_duplicate);
}

#[test]
fn disjoint_documents_score_zero() {
    let report = Detector::default()
        .detect("alpha beta gamma delta", "one two three four five")
        .unwrap();
    assert_eq!(report.similarity_percent, 0.0);
    assert_eq!(report.cosine_similarity, 0.0);
    assert!(report.marks.iter().all(|&m| m == 0));
    assert_eq!(report.assessment.category, SimilarityCategory::Original);
    assert!(report.levels.iter().all(|l| l.shingles.is_empty()));
}

#[test]
fn stopword_only_overlap_counts_for_matching_not_cosine() {
    let report = Detector::default()
        .detect("the cat and the hat", "the dog and the log")
        .unwrap();
    // "the", "and", "the" match at word level.
    assert_eq!(report.marks, vec![1, 0, 1, 1, 0]);
    assert_eq!(report.cosine_similarity, 0.0);
}

#[test]
fn empty_reference_rejected() {
    let err = Detector::default().detect(" ... ", TARGET).unwrap_err();
    assert_eq!(
        err,
        DetectError::EmptyDocument {
            role: DocumentRole::Reference
        }
    );
}

#[test]
fn empty_target_rejected() {
    let err = Detector::default().detect(REFERENCE, "").unwrap_err();
    assert_eq!(
        err,
        DetectError::EmptyDocument {
            role: DocumentRole::Target
        }
    );
}

#[test]
fn invalid_perceptual_config_rejected() {
    let detector = Detector::new(
        CanonicalizeConfig::default(),
        PerceptualConfig::default().with_levels(Vec::new()),
        ThresholdConfig::default(),
    );
    assert!(detector.validate().is_err());
    assert!(matches!(
        detector.detect(REFERENCE, TARGET),
        Err(DetectError::Perceptual(_))
    ));
}

#[test]
fn invalid_canonical_config_rejected() {
    let detector = Detector::new(
        CanonicalizeConfig {
            version: 0,
            ..Default::default()
        },
        PerceptualConfig::default(),
        ThresholdConfig::default(),
    );
    assert!(matches!(
        detector.detect(REFERENCE, TARGET),
        Err(DetectError::Canonical(CanonicalError::InvalidConfig(_)))
    ));
}

#[test]
fn custom_thresholds_change_only_the_assessment() {
    let strict = Detector::with_thresholds(ThresholdConfig::new(5.0, 10.0, 20.0, 50.0));
    let default_report = Detector::default().detect(REFERENCE, TARGET).unwrap();
    let strict_report = strict.detect(REFERENCE, TARGET).unwrap();

    assert_eq!(strict_report.marks, default_report.marks);
    assert_eq!(
        strict_report.assessment.category,
        SimilarityCategory::Critical
    );
}

#[test]
fn non_ascending_thresholds_still_classify() {
    let detector = Detector::with_thresholds(ThresholdConfig::new(90.0, 10.0, 20.0, 30.0));
    let report = detector.detect(REFERENCE, TARGET).unwrap();
    assert_eq!(report.assessment.category, SimilarityCategory::Original);
}

#[test]
fn level_order_does_not_change_marks() {
    let forward = Detector::default();
    let reversed = Detector::new(
        CanonicalizeConfig::default(),
        PerceptualConfig::default().with_levels(vec![
            MatchLevel::sentence(),
            MatchLevel::phrase(),
            MatchLevel::word(),
        ]),
        ThresholdConfig::default(),
    );
    let a = forward.detect(REFERENCE, TARGET).unwrap();
    let b = reversed.detect(REFERENCE, TARGET).unwrap();
    assert_eq!(a.marks, b.marks);
    assert_eq!(a.counts, b.counts);
    assert!(approx(a.similarity_percent, b.similarity_percent));
}

#[test]
fn custom_levels_generalize_the_three_passes() {
    let detector = Detector::new(
        CanonicalizeConfig::default(),
        PerceptualConfig::default()
            .with_levels(vec![MatchLevel::new(2, 1, "pair"), MatchLevel::new(4, 2, "run")]),
        ThresholdConfig::default(),
    );
    let report = detector.detect(REFERENCE, TARGET).unwrap();
    // pair windows over quick..over and nothing else; the four-token runs
    // cover quick..over as well.
    assert_eq!(report.marks, vec![0, 2, 2, 2, 2, 2, 0, 0, 0]);
    assert_eq!(report.counts.get(1), Some(0));
    assert_eq!(report.counts.get(2), Some(5));
}

#[test]
fn verified_matching_agrees_on_real_matches() {
    let verified = Detector::new(
        CanonicalizeConfig::default(),
        PerceptualConfig::default().with_verify_matches(true),
        ThresholdConfig::default(),
    );
    let a = verified.detect(REFERENCE, TARGET).unwrap();
    let b = Detector::default().detect(REFERENCE, TARGET).unwrap();
    assert_eq!(a.marks, b.marks);
}

#[test]
fn compare_documents_rejects_hand_built_empty_document() {
    let detector = Detector::default();
    let reference = canonicalize("reference", REFERENCE, detector.canonical_config()).unwrap();
    let mut target = reference.clone();
    target.tokens.clear();
    target.stemmed.clear();
    target.filtered.clear();
    assert_eq!(
        detector.compare_documents(&reference, &target),
        Err(DetectError::EmptyDocument {
            role: DocumentRole::Target
        })
    );
}

#[test]
fn report_serializes_to_json() {
    let report = Detector::default().detect(REFERENCE, TARGET).unwrap();
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["assessment"]["category"], "high");
    assert_eq!(json["counts"]["3"], 5);
    assert_eq!(json["marks"].as_array().map(Vec::len), Some(9));
}
