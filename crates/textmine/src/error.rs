//! Error types for textmine configuration.
//!
//! Matching itself never fails; errors only arise while building a
//! [`MatcherConfig`](crate::config::MatcherConfig) from outside input.

use thiserror::Error;

/// Common error type for textmine operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Similarity threshold outside `[0, 1]` or not finite
    #[error("similarity threshold must be within [0, 1], got {0}")]
    InvalidThreshold(f64),

    /// Configuration value could not be read or parsed
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using textmine Error.
pub type Result<T> = std::result::Result<T, Error>;
