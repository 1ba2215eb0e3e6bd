//! Presentation of severity marks.
//!
//! The detector only produces raw target tokens and one severity per token.
//! A [`Renderer`] decides how a severity looks: the plain renderer tags runs
//! with brackets, the ANSI renderer colors them the way a terminal report
//! expects (word red, phrase yellow, sentence magenta).

use colored::Colorize;
use matcher::{DetectionReport, SEVERITY_NONE, SEVERITY_PHRASE, SEVERITY_SENTENCE, SEVERITY_WORD};

/// Maps severities and report chrome to display strings.
pub trait Renderer {
    /// Style `text` for a run of tokens that share `severity`.
    fn paint(&self, text: &str, severity: u8) -> String;

    /// Color `text` after a severity without tagging it. Used for report
    /// chrome such as counts and shingle listings.
    fn tint(&self, text: &str, _severity: u8) -> String {
        text.to_string()
    }

    /// Style a section heading.
    fn heading(&self, text: &str) -> String {
        text.to_string()
    }

    /// Style a pass/fail or acceptable/flagged status.
    fn status(&self, text: &str, _ok: bool) -> String {
        text.to_string()
    }

    /// One-line key explaining the severity styles.
    fn legend(&self) -> String {
        format!(
            "{} {} {}",
            self.paint("Word-level", SEVERITY_WORD),
            self.paint("Phrase-level", SEVERITY_PHRASE),
            self.paint("Sentence-level", SEVERITY_SENTENCE)
        )
    }

    /// Join `tokens` with single spaces, styling each maximal run of equal
    /// severity as one unit.
    fn highlight(&self, tokens: &[&str], marks: &[u8]) -> String {
        let mut out = String::new();
        for (run, severity) in severity_runs(tokens, marks) {
            if !out.is_empty() {
                out.push(' ');
            }
            let text = run.join(" ");
            if severity == SEVERITY_NONE {
                out.push_str(&text);
            } else {
                out.push_str(&self.paint(&text, severity));
            }
        }
        out
    }

    /// Highlight the target side of a finished report.
    fn highlight_report(&self, report: &DetectionReport) -> String {
        let tokens: Vec<&str> = report.target_tokens.iter().map(String::as_str).collect();
        self.highlight(&tokens, &report.marks)
    }
}

/// Split `tokens` into maximal runs of equal mark. Tokens past the end of
/// `marks` count as unmarked.
pub fn severity_runs<'a>(tokens: &[&'a str], marks: &[u8]) -> Vec<(Vec<&'a str>, u8)> {
    let mut runs: Vec<(Vec<&'a str>, u8)> = Vec::new();
    for (i, &token) in tokens.iter().enumerate() {
        let severity = marks.get(i).copied().unwrap_or(SEVERITY_NONE);
        match runs.last_mut() {
            Some((run, current)) if *current == severity => run.push(token),
            _ => runs.push((vec![token], severity)),
        }
    }
    runs
}

/// Uncolored output. Marked runs become `[severity: text]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Renderer for PlainRenderer {
    fn paint(&self, text: &str, severity: u8) -> String {
        if severity == SEVERITY_NONE {
            return text.to_string();
        }
        format!("[{severity}: {text}]")
    }

    fn legend(&self) -> String {
        "[1: word-level] [2: phrase-level] [3: sentence-level]".to_string()
    }
}

/// Terminal colors via `colored`.
///
/// Whether escape codes are actually emitted follows `colored`'s global
/// control (`NO_COLOR`, `CLICOLOR_FORCE`, or an explicit override).
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiRenderer;

impl Renderer for AnsiRenderer {
    fn paint(&self, text: &str, severity: u8) -> String {
        match severity {
            SEVERITY_NONE => text.to_string(),
            SEVERITY_WORD => text.red().to_string(),
            SEVERITY_PHRASE => text.yellow().to_string(),
            SEVERITY_SENTENCE => text.magenta().to_string(),
            _ => text.magenta().bold().to_string(),
        }
    }

    fn tint(&self, text: &str, severity: u8) -> String {
        self.paint(text, severity)
    }

    fn heading(&self, text: &str) -> String {
        text.green().bold().to_string()
    }

    fn status(&self, text: &str, ok: bool) -> String {
        if ok {
            text.green().to_string()
        } else {
            text.red().bold().to_string()
        }
    }

    fn legend(&self) -> String {
        format!(
            "{} {} {}",
            "[Red = Word-level]".red(),
            "[Yellow = Phrase-level]".yellow(),
            "[Magenta = Sentence-level]".magenta()
        )
    }
}
