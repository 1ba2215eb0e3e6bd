use std::io::Write;

use plagiscan::{detect_with_config, PlagiscanConfig, SimilarityCategory};
use tempfile::NamedTempFile;

const REFERENCE: &str = "the quick brown fox jumps over the lazy dog";
const TARGET: &str = "a quick brown fox jumps over a sleepy dog";

fn write_config(yaml: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(yaml.as_bytes()).expect("write yaml");
    file
}

#[test]
fn strict_thresholds_from_file_escalate_category() {
    let file = write_config(
        r#"
version: "1.0"
name: "strict"
thresholds:
  low: 5
  moderate: 10
  high: 20
  very_high: 50
"#,
    );
    let config = PlagiscanConfig::from_file(file.path()).unwrap();
    let report = detect_with_config(&config, REFERENCE, TARGET).unwrap();
    assert_eq!(report.assessment.category, SimilarityCategory::Critical);
}

#[test]
fn custom_levels_from_file_are_used() {
    let file = write_config(
        r#"
version: "1"
perceptual:
  levels:
    - { window: 2, severity: 1, label: "pair" }
    - { window: 6, severity: 2, label: "long run" }
"#,
    );
    let config = PlagiscanConfig::from_file(file.path()).unwrap();
    let report = detect_with_config(&config, REFERENCE, TARGET).unwrap();

    // No six-token run is shared, so everything matched stays at the pair level.
    assert_eq!(report.marks, vec![0, 1, 1, 1, 1, 1, 0, 0, 0]);
    assert_eq!(report.counts.get(2), Some(0));
    assert_eq!(report.levels[1].label, "long run");
}

#[test]
fn disabling_unicode_normalization_changes_matching() {
    let file = write_config(
        r#"
version: "1.0"
canonical:
  normalize_unicode: false
"#,
    );
    let config = PlagiscanConfig::from_file(file.path()).unwrap();
    let report = detect_with_config(&config, "ｆｏｘ", "fox").unwrap();
    assert_eq!(report.marks, vec![0]);

    let normalized = plagiscan::detect("ｆｏｘ", "fox").unwrap();
    assert_eq!(normalized.marks, vec![1]);
}

#[test]
fn invalid_file_reports_validation_error() {
    let file = write_config(
        r#"
version: "1.0"
thresholds:
  low: -1
"#,
    );
    let err = PlagiscanConfig::from_file(file.path()).unwrap_err();
    assert!(err.to_string().contains("thresholds.low"));
}
