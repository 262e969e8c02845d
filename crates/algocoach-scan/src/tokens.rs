//! Whole-token lexical primitives.
//!
//! A "token" here is a maximal run of identifier bytes: ASCII alphanumerics,
//! `_`, `$` and any non-ASCII byte (so UTF-8 identifiers are never split).

use std::collections::HashSet;

#[inline]
pub fn is_word_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$' || b >= 0x80
}

/// True when `token` is a non-empty run of identifier bytes.
pub fn is_word(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(is_word_byte)
}

/// Byte offsets of every whole-token occurrence of `token` (case-sensitive).
pub fn token_positions<'a>(text: &'a str, token: &'a str) -> impl Iterator<Item = usize> + 'a {
    let bytes = text.as_bytes();
    text.match_indices(token).filter_map(move |(start, _)| {
        let end = start + token.len();
        let before_ok = start == 0 || !is_word_byte(bytes[start - 1]);
        let after_ok = end >= bytes.len() || !is_word_byte(bytes[end]);
        (before_ok && after_ok).then_some(start)
    })
}

/// Number of whole-token occurrences of `token` (case-sensitive).
pub fn count_token(text: &str, token: &str) -> usize {
    if token.is_empty() {
        return 0;
    }
    token_positions(text, token).count()
}

pub fn contains_token(text: &str, token: &str) -> bool {
    !token.is_empty() && token_positions(text, token).next().is_some()
}

/// The set of distinct tokens in `text`, lower-cased.
pub fn word_tokens(text: &str) -> HashSet<String> {
    text.split(|c: char| c.is_ascii() && !is_word_byte(c as u8))
        .filter(|w| !w.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_token_ignores_longer_identifiers() {
        let text = "if (iffy) { elif = if_ready; } if";
        assert_eq!(count_token(text, "if"), 2);
    }

    #[test]
    fn token_at_text_edges() {
        assert_eq!(count_token("for", "for"), 1);
        assert_eq!(count_token("for(;;)", "for"), 1);
        assert_eq!(count_token("xfor", "for"), 0);
    }

    #[test]
    fn dollar_is_part_of_identifiers() {
        assert_eq!(count_token("$left + left", "left"), 1);
    }

    #[test]
    fn empty_token_never_matches() {
        assert_eq!(count_token("abc", ""), 0);
        assert!(!contains_token("abc", ""));
    }

    #[test]
    fn word_tokens_are_lowercased_and_split_on_punctuation() {
        let words = word_tokens("let Mid = (Left+right)/2; dp[i]");
        for w in ["let", "mid", "left", "right", "2", "dp", "i"] {
            assert!(words.contains(w), "missing {w}");
        }
        assert!(!words.contains("Mid"));
    }

    #[test]
    fn word_tokens_keep_unicode_identifiers_whole() {
        let words = word_tokens("größe = 1");
        assert!(words.contains("größe"));
    }

    #[test]
    fn is_word_rejects_spaces_and_symbols() {
        assert!(is_word("two_pointer"));
        assert!(!is_word("two pointer"));
        assert!(!is_word("a-b"));
        assert!(!is_word(""));
    }
}
