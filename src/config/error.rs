//! Configuration error types.

use thiserror::Error;

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Validation(#[from] ValidationError),
}

/// Errors from validating loaded configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("recommendation.limit must be at least 1")]
    ZeroLimit,

    #[error("recommendation.threshold must be between 0.0 and 1.0")]
    ThresholdOutOfRange,

    #[error("recommendation.language must not be empty")]
    EmptyLanguage,
}
