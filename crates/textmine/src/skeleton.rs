//! Tokenizer and skeleton extraction
//!
//! Text is split into tokens by collapsing whitespace runs to a single space
//! and splitting on that space. A leading whitespace run yields an empty
//! first token; trailing empty pieces are dropped.
//!
//! A skeleton is a word reduced to one character class, lowercased, with
//! repeated neighbours collapsed:
//!
//! ```rust
//! use textmine::skeleton::{skeleton, SkeletonKind};
//!
//! assert_eq!(skeleton("Eindhovuuuh!", SkeletonKind::Vowel), "eiou");
//! assert_eq!(skeleton("Eindhovuuuh!", SkeletonKind::Consonant), "ndhvh");
//! ```

/// Character class a skeleton is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonKind {
    /// `e i u o a j`
    Vowel,
    /// `q w r t p s d f g h k l z x c v b n m`
    Consonant,
}

impl SkeletonKind {
    /// Both kinds, in the order they are scored
    pub const ALL: [SkeletonKind; 2] = [SkeletonKind::Vowel, SkeletonKind::Consonant];

    /// Whether `c` (already lowercased) belongs to this class
    #[inline]
    pub fn admits(self, c: char) -> bool {
        match self {
            Self::Vowel => matches!(c, 'e' | 'i' | 'u' | 'o' | 'a' | 'j'),
            Self::Consonant => matches!(
                c,
                'q' | 'w'
                    | 'r'
                    | 't'
                    | 'p'
                    | 's'
                    | 'd'
                    | 'f'
                    | 'g'
                    | 'h'
                    | 'k'
                    | 'l'
                    | 'z'
                    | 'x'
                    | 'c'
                    | 'v'
                    | 'b'
                    | 'n'
                    | 'm'
            ),
        }
    }
}

impl std::fmt::Display for SkeletonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Vowel => write!(f, "vowel"),
            Self::Consonant => write!(f, "consonant"),
        }
    }
}

/// Whitespace as the tokenizer sees it: ASCII space, tab, newline,
/// vertical tab, form feed and carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// Replace every maximal whitespace run with a single space.
///
/// Leading and trailing runs are not trimmed; they become one space each.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_run = false;

    for c in text.chars() {
        if is_whitespace(c) {
            if !in_run {
                out.push(' ');
                in_run = true;
            }
        } else {
            out.push(c);
            in_run = false;
        }
    }

    out
}

/// Remove all whitespace, merging a phrase into a single word
pub fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|&c| !is_whitespace(c)).collect()
}

/// Split already-normalized text on single spaces.
///
/// Trailing empty pieces are removed, so `"a "` gives `["a"]` and `" "` gives
/// nothing. Input without any space is returned whole, so `""` gives `[""]`.
pub fn split_words(normalized: &str) -> Vec<&str> {
    let mut words: Vec<&str> = normalized.split(' ').collect();
    if words.len() > 1 {
        while words.last() == Some(&"") {
            words.pop();
        }
    }
    words
}

/// Split text into tokens, preserving order and a leading empty token
pub fn tokenize(text: &str) -> Vec<String> {
    split_words(&normalize_whitespace(text))
        .into_iter()
        .map(str::to_owned)
        .collect()
}

/// Reduce `word` to its `kind` skeleton.
///
/// Single linear scan: lowercase, drop characters outside the class, and emit
/// a character only when it differs from the last one emitted.
pub fn skeleton(word: &str, kind: SkeletonKind) -> String {
    let mut out = String::new();
    let mut last: Option<char> = None;

    for c in word.chars().flat_map(char::to_lowercase) {
        if !kind.admits(c) || last == Some(c) {
            continue;
        }
        out.push(c);
        last = Some(c);
    }

    out
}
