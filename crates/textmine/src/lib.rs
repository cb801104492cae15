//! textmine - fuzzy containment matching over text
//!
//! Decides whether a word or short phrase occurs in a body of text while
//! tolerating typos, elongated letters and phonetic drift.
//!
//! Words are compared through two skeletons: the vowel-class letters and the
//! consonant-class letters, each lowercased with repeated neighbours
//! collapsed. A pair of words scores the lower of the two channel alignments.
//! Phrases are matched by sliding a window of the query's length over the
//! text's tokens, then by comparing the run-together query against single
//! tokens.
//!
//! # Features
//!
//! - `parallel` - Fan large [`Corpus::contains_all`] batches out with rayon
//!
//! # Example
//!
//! ```rust
//! use textmine::Corpus;
//!
//! let mut corpus = Corpus::new("ik reis vandaag naar den bosch en naar eindhovuuuh!");
//!
//! assert!(corpus.contains("eindhoven"));
//! assert!(corpus.contains("den bosch"));
//! assert!(!corpus.contains("den haag"));
//!
//! corpus.set_similarity_threshold(1.0);
//! assert!(!corpus.contains("eindhoven"));
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod matcher;
pub mod score;
pub mod skeleton;
pub mod tracing;

// Re-export main types at crate root
pub use config::MatcherConfig;
pub use corpus::Corpus;
pub use error::{Error, Result};
pub use matcher::{Match, MatchKind};
pub use score::{alignment_score, compare_words};
pub use skeleton::{normalize_whitespace, skeleton, tokenize, SkeletonKind};
