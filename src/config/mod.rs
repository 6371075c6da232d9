//! Application configuration module.
//!
//! Type-safe configuration loading from environment variables using the
//! `config` and `dotenvy` crates. Values use the `DECISION_SPRINT`
//! prefix with `__` (double underscore) separating nested keys, e.g.
//! `DECISION_SPRINT__RECOMMENDATION__LIMIT=10`.

mod error;
mod recommendation;
mod storage;

pub use error::{ConfigError, ValidationError};
pub use recommendation::RecommendationConfig;
pub use storage::StorageConfig;

use serde::Deserialize;

/// Root application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Snapshot storage (data directory).
    #[serde(default)]
    pub storage: StorageConfig,

    /// Recommendation service (endpoint, key, query defaults).
    #[serde(default)]
    pub recommendation: RecommendationConfig,
}

impl AppConfig {
    /// Loads configuration from the environment.
    ///
    /// Reads a `.env` file if present (development convenience), then
    /// environment variables with the `DECISION_SPRINT` prefix.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix("DECISION_SPRINT")
                    .separator("__")
                    .list_separator(",")
                    .try_parsing(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Validates all sections.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.recommendation.validate()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            recommendation: RecommendationConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
    }
}
