//! Corpus - parsed text plus the configuration it is matched under

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use ahash::AHasher;
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::MatcherConfig;
use crate::matcher::{self, Match};
use crate::score;
use crate::skeleton::tokenize;

/// A text and its cached token sequence.
///
/// Tokens are produced once per [`parse`](Corpus::parse). [`set_text`](Corpus::set_text)
/// replaces the stored text only and leaves the tokens untouched; use
/// [`is_stale`](Corpus::is_stale) to detect the divergence.
///
/// Lookups take `&self` and may run concurrently. `parse` and the setters
/// take `&mut self`.
#[derive(Debug, Clone)]
pub struct Corpus {
    text: String,
    tokens: Vec<String>,
    fingerprint: String,
    config: MatcherConfig,
}

impl Corpus {
    /// Parse `text` with the default configuration
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_config(text, MatcherConfig::default())
    }

    /// Parse `text` under a custom configuration
    pub fn with_config(text: impl Into<String>, config: MatcherConfig) -> Self {
        let mut corpus = Self {
            text: String::new(),
            tokens: Vec::new(),
            fingerprint: String::new(),
            config,
        };
        corpus.parse(text);
        corpus
    }

    /// Replace text and tokens together
    pub fn parse(&mut self, text: impl Into<String>) {
        let text = text.into();
        let tokens = tokenize(&text);
        let fingerprint = compute_fingerprint(&tokens);

        debug!(tokens = tokens.len(), fingerprint = %fingerprint, "parsed corpus");

        self.text = text;
        self.tokens = tokens;
        self.fingerprint = fingerprint;
    }

    /// Whether `query` occurs in the text under the current threshold
    pub fn contains(&self, query: &str) -> bool {
        self.contains_with(query, self.config.similarity_threshold)
    }

    /// Whether `query` occurs in the text under an explicit threshold
    pub fn contains_with(&self, query: &str, threshold: f64) -> bool {
        matcher::contains(&self.tokens, query, threshold)
    }

    /// Locate `query`, reporting which phase matched and the score
    pub fn find(&self, query: &str) -> Option<Match> {
        matcher::find(&self.tokens, query, self.config.similarity_threshold)
    }

    /// Look up each query, keyed by the query string as given
    pub fn contains_all<I, S>(&self, queries: I) -> HashMap<String, bool>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let queries: Vec<String> = queries.into_iter().map(Into::into).collect();
        debug!(queries = queries.len(), "batch lookup");
        self.lookup_batch(queries)
    }

    #[cfg(feature = "parallel")]
    fn lookup_batch(&self, queries: Vec<String>) -> HashMap<String, bool> {
        if queries.len() >= self.config.parallel_threshold {
            queries
                .into_par_iter()
                .map(|q| {
                    let found = self.contains(&q);
                    (q, found)
                })
                .collect()
        } else {
            self.lookup_sequential(queries)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn lookup_batch(&self, queries: Vec<String>) -> HashMap<String, bool> {
        self.lookup_sequential(queries)
    }

    fn lookup_sequential(&self, queries: Vec<String>) -> HashMap<String, bool> {
        queries
            .into_iter()
            .map(|q| {
                let found = self.contains(&q);
                (q, found)
            })
            .collect()
    }

    /// Word similarity score, see [`score::compare_words`]
    pub fn compare_words(&self, word1: &str, word2: &str) -> f64 {
        score::compare_words(word1, word2)
    }

    /// Text as last parsed or set
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the stored text without re-tokenizing
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Tokens from the last parse
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Threshold applied by [`contains`](Corpus::contains) and [`find`](Corpus::find)
    pub fn similarity_threshold(&self) -> f64 {
        self.config.similarity_threshold
    }

    /// Set the threshold used by later lookups. Not validated; see
    /// [`MatcherConfig::new`] for a checked constructor.
    pub fn set_similarity_threshold(&mut self, threshold: f64) {
        self.config.similarity_threshold = threshold;
    }

    /// Configuration lookups run under
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Fingerprint of the token sequence from the last parse
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    /// True when the stored text no longer tokenizes to the cached tokens
    pub fn is_stale(&self) -> bool {
        compute_fingerprint(&tokenize(&self.text)) != self.fingerprint
    }
}

fn compute_fingerprint(tokens: &[String]) -> String {
    let mut hasher = AHasher::default();
    tokens.hash(&mut hasher);
    format!("{:016x}", hasher.finish())
}
