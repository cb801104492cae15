//! Phrase containment search
//!
//! A query is looked up in two phases, in this order:
//!
//! 1. **Window**: the query's words are aligned against every run of as many
//!    consecutive tokens, left to right. A window matches when the average
//!    word score reaches the threshold; the first matching window wins.
//! 2. **Merged**: the query with all whitespace removed is scored against
//!    each single token, so a run-together spelling ("denbosch") still
//!    matches a phrase query ("den bosch").
//!
//! Everything here is a pure function of `(tokens, query, threshold)`.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::score::{compare_words, meets_threshold};
use crate::skeleton::{normalize_whitespace, split_words, strip_whitespace};

/// Which phase produced a match, and where
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchKind {
    /// Query words aligned against `len` tokens starting at `start`
    Window { start: usize, len: usize },
    /// Whitespace-stripped query matched the single token at `index`
    Merged { index: usize },
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Window { start, len } => write!(f, "window[{}..{}]", start, start + len),
            Self::Merged { index } => write!(f, "merged[{}]", index),
        }
    }
}

/// A successful containment lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub kind: MatchKind,
    pub score: f64,
}

/// Look `query` up in `tokens` under `threshold`
pub fn find<S: AsRef<str>>(tokens: &[S], query: &str, threshold: f64) -> Option<Match> {
    let normalized = normalize_whitespace(query);
    let words = split_words(&normalized);

    find_window(tokens, &words, threshold)
        .or_else(|| find_merged(tokens, &strip_whitespace(query), threshold))
}

/// Whether `query` occurs in `tokens` under `threshold`
pub fn contains<S: AsRef<str>>(tokens: &[S], query: &str, threshold: f64) -> bool {
    find(tokens, query, threshold).is_some()
}

/// Slide a window of `words.len()` tokens over `tokens`, returning the first
/// window whose average word score meets `threshold`.
///
/// A window longer than the token sequence yields no candidates.
pub fn find_window<S: AsRef<str>>(tokens: &[S], words: &[&str], threshold: f64) -> Option<Match> {
    let n = words.len();
    if n == 0 || n > tokens.len() {
        return None;
    }

    for start in 0..=tokens.len() - n {
        let window = &tokens[start..start + n];
        let score: f64 = words
            .iter()
            .zip(window)
            .map(|(word, token)| compare_words(word, token.as_ref()) / n as f64)
            .sum();

        if meets_threshold(score, threshold) {
            trace!(start, len = n, score, "window match");
            return Some(Match {
                kind: MatchKind::Window { start, len: n },
                score,
            });
        }
    }

    None
}

/// Score `merged` against every single token, returning the first token
/// that meets `threshold`
pub fn find_merged<S: AsRef<str>>(tokens: &[S], merged: &str, threshold: f64) -> Option<Match> {
    tokens.iter().enumerate().find_map(|(index, token)| {
        let score = compare_words(merged, token.as_ref());
        if meets_threshold(score, threshold) {
            trace!(index, score, "merged match");
            Some(Match {
                kind: MatchKind::Merged { index },
                score,
            })
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::skeleton::tokenize;
    use pretty_assertions::assert_eq;

    fn sentence() -> Vec<String> {
        tokenize("ik reis vandaag naar den bosch en naar eindhovuuuh!")
    }

    #[test]
    fn test_single_word_window() {
        let m = find(&sentence(), "eindhoven", 0.7).unwrap();
        assert_eq!(m.kind, MatchKind::Window { start: 8, len: 1 });
        assert_eq!(m.score, 0.75);
    }

    #[test]
    fn test_two_word_window() {
        let m = find(&sentence(), "den bosch", 0.7).unwrap();
        assert_eq!(m.kind, MatchKind::Window { start: 4, len: 2 });
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_first_window_wins() {
        // "naar" occurs at 3 and 7
        let m = find(&sentence(), "naar", 0.7).unwrap();
        assert_eq!(m.kind, MatchKind::Window { start: 3, len: 1 });
    }

    #[test]
    fn test_query_whitespace_is_normalized() {
        // leading run becomes an empty first word, widening the window to 3
        assert!(find(&sentence(), "  den \t bosch", 0.7).is_none());

        let m = find(&sentence(), "den \t bosch", 0.7).unwrap();
        assert_eq!(m.kind, MatchKind::Window { start: 4, len: 2 });
    }

    #[test]
    fn test_trailing_query_whitespace_is_dropped() {
        for query in ["den bosch ", "den bosch\n", "den bosch \t\r\n"] {
            let m = find(&sentence(), query, 0.7).unwrap();
            assert_eq!(m.kind, MatchKind::Window { start: 4, len: 2 });
            assert_eq!(m.score, 1.0);
        }
    }

    #[test]
    fn test_single_channel_abstains_at_zero_threshold() {
        // "ai" has no consonants and "!" has no letters: the consonant
        // channel abstains and the vowel channel scores 0.0
        let tokens = ["!"];
        let m = find(&tokens, "ai", 0.0).unwrap();
        assert_eq!(m.kind, MatchKind::Window { start: 0, len: 1 });
        assert_eq!(m.score, 0.0);
        assert!(!contains(&tokens, "ai", f64::MIN_POSITIVE));
        // both channels abstain: never a match, even at 0.0
        assert!(!contains(&tokens, "?", 0.0));
    }

    #[test]
    fn test_merged_phase() {
        let tokens = tokenize("welkom in denbosch vandaag");
        let m = find(&tokens, "den bosch", 0.7).unwrap();
        assert_eq!(m.kind, MatchKind::Merged { index: 2 });
        assert_eq!(m.score, 1.0);
    }

    #[test]
    fn test_no_match() {
        assert!(find(&sentence(), "den haag", 0.7).is_none());
        assert!(find(&sentence(), "amsterdam", 0.7).is_none());
    }

    #[test]
    fn test_threshold_one_rejects_elongation() {
        assert!(!contains(&sentence(), "eindhoven", 1.0));
        assert!(contains(&sentence(), "den bosch", 1.0));
    }

    #[test]
    fn test_oversized_window_falls_through() {
        let tokens = tokenize("a b");
        assert!(find_window(&tokens, &["a", "b", "c"], 0.0).is_none());
        assert!(!contains(&tokens, "a b c d", 0.7));
    }

    #[test]
    fn test_empty_inputs_never_fault() {
        let empty = tokenize("");
        assert!(!contains(&empty, "", 0.7));
        assert!(!contains(&empty, "abc", 0.7));
        assert!(!contains(&sentence(), "", 0.7));
        let none: Vec<String> = Vec::new();
        assert!(!contains(&none, "abc", 0.0));
    }

    #[test]
    fn test_works_on_str_slices() {
        let tokens = ["den", "bosch"];
        assert!(contains(&tokens, "den bosch", 0.7));
    }

    #[test]
    fn test_match_kind_display() {
        assert_eq!(MatchKind::Window { start: 4, len: 2 }.to_string(), "window[4..6]");
        assert_eq!(MatchKind::Merged { index: 2 }.to_string(), "merged[2]");
    }
}
