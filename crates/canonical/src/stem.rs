//! Lightweight suffix stripping.
//!
//! Not a linguistic stemmer. It only unifies the most common English
//! inflections so "walked", "walking" and "walks" share a key. False stems
//! ("this" -> "thi") are expected.
//!
//! Rules, by character length:
//!
//! | length | rule                                          |
//! |--------|-----------------------------------------------|
//! | > 4    | strip `ing`, else strip `ed`, else strip `s`  |
//! | 4      | strip a trailing `s`                          |
//! | <= 3   | unchanged                                     |

/// Stem a single token.
///
/// ```rust
/// use canonical::stem;
///
/// assert_eq!(stem("playing"), "play");
/// assert_eq!(stem("walked"), "walk");
/// assert_eq!(stem("cats"), "cat");
/// assert_eq!(stem("as"), "as");
/// ```
pub fn stem(word: &str) -> String {
    let len = word.chars().count();
    if len > 4 {
        if let Some(base) = word.strip_suffix("ing") {
            return base.to_string();
        }
        if let Some(base) = word.strip_suffix("ed") {
            return base.to_string();
        }
        if let Some(base) = word.strip_suffix('s') {
            return base.to_string();
        }
    } else if len == 4 {
        if let Some(base) = word.strip_suffix('s') {
            return base.to_string();
        }
    }
    word.to_string()
}

/// Stem every token, preserving order and count.
pub fn stem_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens.iter().map(|t| stem(t.as_ref())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_words_strip_in_precedence_order() {
        assert_eq!(stem("playing"), "play");
        assert_eq!(stem("walked"), "walk");
        assert_eq!(stem("jumps"), "jump");
        // `ing` wins over `s` handling; `ed` only when `ing` is absent.
        assert_eq!(stem("sings"), "sing");
        assert_eq!(stem("things"), "thing");
    }

    #[test]
    fn four_char_words_only_lose_s() {
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("this"), "thi");
        assert_eq!(stem("sing"), "sing");
        assert_eq!(stem("used"), "used");
    }

    #[test]
    fn short_words_unchanged() {
        for w in ["as", "is", "was", "gas", "a", ""] {
            assert_eq!(stem(w), w);
        }
    }

    #[test]
    fn five_char_ing_word_strips() {
        assert_eq!(stem("thing"), "th");
    }

    #[test]
    fn length_counts_characters() {
        // Four characters, six bytes.
        assert_eq!(stem("déjs"), "déj");
        assert_eq!(stem("niño"), "niño");
    }

    #[test]
    fn stem_tokens_preserves_length() {
        let out = stem_tokens(&["running", "dogs", "ran"]);
        assert_eq!(out, vec!["runn", "dog", "ran"]);
    }
}
