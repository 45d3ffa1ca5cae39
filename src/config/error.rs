//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Score precision {0} exceeds the maximum of {max}", max = super::engine::MAX_SCORE_PRECISION)]
    ScorePrecisionTooLarge(usize),

    #[error("Log level cannot be empty")]
    EmptyLogLevel,

    #[error("Invalid log filter directive: {0}")]
    InvalidLogFilter(String),
}
