//! Word similarity scoring
//!
//! Two words are compared on their vowel skeletons and their consonant
//! skeletons separately. Each channel is scored by position-wise alignment
//! and the lower of the two wins, so either channel can veto a match.
//!
//! Scores are `f64` in `[0, 1]`, or NaN when there is nothing to compare.
//! NaN never satisfies `score >= threshold`, which is how empty input
//! resolves to "no match" without an error path.

use crate::skeleton::{skeleton, SkeletonKind};

/// Fraction of positions where `a` and `b` hold the same character,
/// measured against the longer string.
///
/// Returns NaN when both strings are empty.
pub fn alignment_score(a: &str, b: &str) -> f64 {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    let (longest_len, longest, shortest) = if a_len > b_len {
        (a_len, a, b)
    } else {
        (b_len, b, a)
    };

    let same = longest
        .chars()
        .zip(shortest.chars())
        .filter(|(l, s)| l == s)
        .count();

    // 0 / 0 is NaN
    same as f64 / longest_len as f64
}

/// Similarity of two words: the minimum of the vowel-channel and
/// consonant-channel alignment scores.
///
/// A channel where both skeletons are empty scores NaN and abstains; the
/// other channel decides alone. If both channels abstain the result is NaN.
pub fn compare_words(word1: &str, word2: &str) -> f64 {
    SkeletonKind::ALL
        .iter()
        .map(|&kind| alignment_score(&skeleton(word1, kind), &skeleton(word2, kind)))
        .fold(f64::NAN, f64::min)
}

/// Threshold test shared by every containment decision
#[inline]
pub fn meets_threshold(score: f64, threshold: f64) -> bool {
    score >= threshold
}
