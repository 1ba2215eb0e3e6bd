//! Human-readable analysis report.
//!
//! Sections, in order: similarity score bar, severity assessment, threshold
//! table, match statistics, recommendation, required actions (flagged reports
//! only), matched shingles per level, additional metrics and the highlighted
//! target text.

use std::fmt;

use matcher::{severity_label, DetectionReport, SimilarityCategory, ThresholdConfig};

use crate::render::Renderer;

const BAR_WIDTH: usize = 50;
const RULE: &str = "====================================================================";
const TABLE_RULE: &str = "+-----------------------------+-----------+----------+";

const REQUIRED_ACTIONS: [&str; 4] = [
    "Manual review recommended",
    "Check proper citations and attributions",
    "Revise heavily matched sections",
    "Consider paraphrasing flagged content",
];

/// A report bound to the thresholds it was classified under and a renderer.
pub struct TextReport<'a> {
    report: &'a DetectionReport,
    thresholds: &'a ThresholdConfig,
    renderer: &'a dyn Renderer,
    sources: Option<(&'a str, &'a str)>,
}

impl<'a> TextReport<'a> {
    pub fn new(
        report: &'a DetectionReport,
        thresholds: &'a ThresholdConfig,
        renderer: &'a dyn Renderer,
    ) -> Self {
        Self {
            report,
            thresholds,
            renderer,
            sources: None,
        }
    }

    /// Name the compared inputs in the header.
    pub fn with_sources(mut self, reference: &'a str, target: &'a str) -> Self {
        self.sources = Some((reference, target));
        self
    }

    fn write_header(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+{RULE}+")?;
        writeln!(
            f,
            "|           PLAGIARISM DETECTION ANALYSIS REPORT                     |"
        )?;
        writeln!(f, "+{RULE}+")?;
        writeln!(f)?;
        if let Some((reference, target)) = self.sources {
            writeln!(f, "Reference File: {reference}")?;
            writeln!(f, "Target File: {target}")?;
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_score(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.renderer;
        let acceptable = !self.report.assessment.flag_for_review;
        writeln!(f, "{}", r.heading("SIMILARITY SCORE:"))?;
        let bar = format!(
            "[{}] {:.2}%",
            progress_bar(self.report.similarity_percent),
            self.report.similarity_percent
        );
        writeln!(f, "{}", r.status(&bar, acceptable))?;
        writeln!(f)?;

        writeln!(f, "{}", r.heading("SEVERITY ASSESSMENT:"))?;
        writeln!(
            f,
            "Category: {}",
            r.status(&self.report.assessment.label, acceptable)
        )?;
        let status = if acceptable {
            "* ACCEPTABLE"
        } else {
            "! FLAGGED FOR REVIEW"
        };
        writeln!(f, "Status: {}", r.status(status, acceptable))?;
        writeln!(f)
    }

    fn write_thresholds(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.renderer;
        writeln!(f, "{}", r.heading("THRESHOLD COMPARISON:"))?;
        writeln!(f, "{TABLE_RULE}")?;
        writeln!(f, "| Threshold Level             | Range     | Status   |")?;
        writeln!(f, "{TABLE_RULE}")?;
        for category in SimilarityCategory::ALL {
            let (min, max) = self.thresholds.band_range(category);
            let range = format!("{}-{}%", min as i64, max as i64);
            let passed = category == self.report.assessment.category;
            let cell = if passed { "  PASS  " } else { "  FAIL  " };
            writeln!(
                f,
                "| {:<27} | {:<9} | {} |",
                category.title(),
                range,
                r.status(cell, passed)
            )?;
        }
        writeln!(f, "{TABLE_RULE}")?;
        writeln!(f)
    }

    fn write_statistics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.renderer;
        writeln!(f, "{}", r.heading("MATCH STATISTICS:"))?;
        for (severity, count) in self.report.counts.iter() {
            let name = format!("{} matches:", capitalize(self.level_label(severity)));
            let value = format!("{count} tokens");
            writeln!(f, "{name:<24}{}", r.tint(&value, severity))?;
        }
        writeln!(
            f,
            "{:<24}{}",
            "Total tokens analyzed:", self.report.total_tokens
        )?;
        writeln!(f)?;

        writeln!(f, "{}", r.heading("RECOMMENDATION:"))?;
        writeln!(
            f,
            "{}",
            r.status(
                &self.report.assessment.recommendation,
                !self.report.assessment.flag_for_review
            )
        )?;
        writeln!(f)?;

        if self.report.assessment.flag_for_review {
            writeln!(f, "{}", r.status("! REQUIRED ACTIONS:", false))?;
            for action in REQUIRED_ACTIONS {
                writeln!(f, "  * {action}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_shingles(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.renderer;
        writeln!(f, "{}", r.heading("MATCHED SHINGLES:"))?;
        for level in &self.report.levels {
            writeln!(f, "--- {} (k={}) ---", capitalize(&level.label), level.window)?;
            if level.shingles.is_empty() {
                writeln!(f, "No matches found.")?;
                continue;
            }
            for shingle in &level.shingles {
                writeln!(f, "{}", r.tint(shingle, level.severity))?;
            }
        }
        writeln!(f)
    }

    fn write_metrics(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.renderer;
        writeln!(f, "{}", r.heading("ADDITIONAL METRICS:"))?;
        writeln!(
            f,
            "Cosine Similarity (semantic): {:.2}%",
            self.report.cosine_percent()
        )?;
        writeln!(
            f,
            "Token Match Similarity (exact): {:.2}%",
            self.report.similarity_percent
        )?;
        if self.report.exact_duplicate {
            writeln!(f, "Exact Duplicate: yes")?;
        }
        writeln!(f)?;

        writeln!(f, "{}", r.heading("HIGHLIGHTED TARGET TEXT:"))?;
        writeln!(f, "{}", r.legend())?;
        writeln!(f)?;
        writeln!(f, "{}", r.highlight_report(self.report))?;
        writeln!(f)?;
        writeln!(f, "{RULE}")
    }

    /// Label of the configured level with this severity, if any.
    fn level_label(&self, severity: u8) -> &str {
        self.report
            .levels
            .iter()
            .find(|level| level.severity == severity)
            .map(|level| level.label.as_str())
            .unwrap_or_else(|| severity_label(severity))
    }
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_header(f)?;
        self.write_score(f)?;
        self.write_thresholds(f)?;
        self.write_statistics(f)?;
        self.write_shingles(f)?;
        self.write_metrics(f)
    }
}

/// Render the full text report.
pub fn render_report(
    report: &DetectionReport,
    thresholds: &ThresholdConfig,
    renderer: &dyn Renderer,
) -> String {
    TextReport::new(report, thresholds, renderer).to_string()
}

/// `#` up to and including the filled position, `-` after.
fn progress_bar(percent: f64) -> String {
    let filled = (BAR_WIDTH as f64 * (percent / 100.0)) as usize;
    (0..BAR_WIDTH)
        .map(|i| if i <= filled { '#' } else { '-' })
        .collect()
}

fn capitalize(label: &str) -> String {
    let mut chars = label.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
