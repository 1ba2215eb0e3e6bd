use serde::{Deserialize, Serialize};

/// A word from the normalized text.
///
/// `position` is the index in the raw token sequence; highlighting relies on it
/// to line marks up with the original document. `start`/`end` are UTF-8 byte
/// offsets into the normalized text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Token {
    /// The token text content.
    pub text: String,
    /// Zero-based index in the raw token sequence.
    pub position: usize,
    /// Byte offset (inclusive) in the normalized text.
    pub start: usize,
    /// Byte offset (exclusive) in the normalized text.
    pub end: usize,
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        self.text.as_str()
    }
}

/// Splits normalized text into ordered, non-empty tokens.
///
/// Expects output of [`normalize`](crate::normalize), where words are separated
/// by single spaces. Runs of whitespace are still tolerated so the function is
/// safe on arbitrary input.
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;

    for (idx, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(token_start) = start.take() {
                let position = tokens.len();
                tokens.push(Token {
                    text: text[token_start..idx].to_string(),
                    position,
                    start: token_start,
                    end: idx,
                });
            }
        } else if start.is_none() {
            start = Some(idx);
        }
    }

    if let Some(token_start) = start {
        let position = tokens.len();
        tokens.push(Token {
            text: text[token_start..].to_string(),
            position,
            start: token_start,
            end: text.len(),
        });
    }

    tokens
}
