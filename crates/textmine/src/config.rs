//! Matcher configuration
//!
//! Environment variables read by [`MatcherConfig::from_env`]:
//! - `TEXTMINE_SIMILARITY_THRESHOLD`: minimum score 0.0-1.0 (default: 0.7)
//! - `TEXTMINE_PARALLEL_THRESHOLD`: batch size at which lookups fan out
//!   across threads when the `parallel` feature is on (default: 64)

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub const ENV_SIMILARITY_THRESHOLD: &str = "TEXTMINE_SIMILARITY_THRESHOLD";
pub const ENV_PARALLEL_THRESHOLD: &str = "TEXTMINE_PARALLEL_THRESHOLD";

/// Configuration a corpus is matched under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatcherConfig {
    /// Minimum score for a word, window or merged phrase to count as a match
    pub similarity_threshold: f64,
    /// Minimum batch size for parallel lookup
    pub parallel_threshold: usize,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: 0.7,
            parallel_threshold: 64,
        }
    }
}

impl MatcherConfig {
    /// Default configuration with a validated similarity threshold
    pub fn new(similarity_threshold: f64) -> Result<Self> {
        let config = Self {
            similarity_threshold,
            ..Default::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Read configuration from `TEXTMINE_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, falling back to defaults for
    /// unset keys
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup(ENV_SIMILARITY_THRESHOLD) {
            config.similarity_threshold = raw.trim().parse().map_err(|_| {
                Error::Config(format!("{ENV_SIMILARITY_THRESHOLD}: not a number: {raw:?}"))
            })?;
        }

        if let Some(raw) = lookup(ENV_PARALLEL_THRESHOLD) {
            config.parallel_threshold = raw.trim().parse().map_err(|_| {
                Error::Config(format!(
                    "{ENV_PARALLEL_THRESHOLD}: not a non-negative integer: {raw:?}"
                ))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parse a JSON object; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the similarity threshold is a finite value in `[0, 1]`
    pub fn validate(&self) -> Result<()> {
        let t = self.similarity_threshold;
        if !t.is_finite() || !(0.0..=1.0).contains(&t) {
            return Err(Error::InvalidThreshold(t));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_default() {
        let config = MatcherConfig::default();
        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.parallel_threshold, 64);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_new_validates() {
        assert!(MatcherConfig::new(0.0).is_ok());
        assert!(MatcherConfig::new(1.0).is_ok());
        assert!(matches!(
            MatcherConfig::new(1.5),
            Err(Error::InvalidThreshold(t)) if t == 1.5
        ));
        assert!(MatcherConfig::new(-0.1).is_err());
        assert!(MatcherConfig::new(f64::NAN).is_err());
    }

    #[test]
    fn test_from_lookup_unset_uses_defaults() {
        let config = MatcherConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, MatcherConfig::default());
    }

    #[test]
    fn test_from_lookup_overrides() {
        let config = MatcherConfig::from_lookup(lookup_from(&[
            (ENV_SIMILARITY_THRESHOLD, " 0.85 "),
            (ENV_PARALLEL_THRESHOLD, "8"),
        ]))
        .unwrap();
        assert_eq!(config.similarity_threshold, 0.85);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_from_lookup_rejects_garbage() {
        let err = MatcherConfig::from_lookup(lookup_from(&[(ENV_SIMILARITY_THRESHOLD, "high")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains(ENV_SIMILARITY_THRESHOLD));

        let err = MatcherConfig::from_lookup(lookup_from(&[(ENV_PARALLEL_THRESHOLD, "-1")]))
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_from_lookup_rejects_out_of_range() {
        let err = MatcherConfig::from_lookup(lookup_from(&[(ENV_SIMILARITY_THRESHOLD, "2")]))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidThreshold(_)));
    }

    #[test]
    fn test_from_json() {
        let config = MatcherConfig::from_json(r#"{"similarity_threshold": 0.9}"#).unwrap();
        assert_eq!(config.similarity_threshold, 0.9);
        assert_eq!(config.parallel_threshold, 64);

        assert!(matches!(
            MatcherConfig::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            MatcherConfig::from_json(r#"{"similarity_threshold": -3}"#),
            Err(Error::InvalidThreshold(_))
        ));
    }
}
