//! Recommendation service configuration.

use secrecy::SecretString;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Recommendation service configuration and query defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationConfig {
    /// Service endpoint; when absent the demo falls back to the static
    /// catalog.
    pub endpoint: Option<String>,

    /// Bearer token for the service.
    pub api_key: Option<SecretString>,

    /// Maximum results per query.
    #[serde(default = "default_limit")]
    pub limit: u32,

    /// Relevance threshold passed to the ranking service.
    #[serde(default = "default_threshold")]
    pub threshold: f32,

    /// Catalog language.
    #[serde(default = "default_language")]
    pub language: String,

    /// Persona filter defaults.
    #[serde(default = "default_persona")]
    pub target_persona: Vec<String>,

    /// Phase filter defaults.
    #[serde(default = "default_phase")]
    pub startup_phase: Vec<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_limit() -> u32 {
    10
}

fn default_threshold() -> f32 {
    0.3
}

fn default_language() -> String {
    "en".to_string()
}

fn default_persona() -> Vec<String> {
    vec!["founder".to_string()]
}

fn default_phase() -> Vec<String> {
    vec!["early".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

impl RecommendationConfig {
    /// Request timeout as a Duration.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validates the section.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.limit == 0 {
            return Err(ValidationError::ZeroLimit);
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(ValidationError::ThresholdOutOfRange);
        }
        if self.language.trim().is_empty() {
            return Err(ValidationError::EmptyLanguage);
        }
        Ok(())
    }
}

impl Default for RecommendationConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            api_key: None,
            limit: default_limit(),
            threshold: default_threshold(),
            language: default_language(),
            target_persona: default_persona(),
            startup_phase: default_phase(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(RecommendationConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_limit_is_rejected() {
        let config = RecommendationConfig {
            limit: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::ZeroLimit));
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = RecommendationConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::ThresholdOutOfRange));
    }

    #[test]
    fn empty_language_is_rejected() {
        let config = RecommendationConfig {
            language: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyLanguage));
    }
}
