//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `TOPSIS` prefix and nested values use double underscores as separators.
//!
//! # Example
//!
//! ```no_run
//! use topsis_ranker::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Ranking with the {} convention", config.engine.ranking_method);
//! ```

mod engine;
mod error;
mod logging;

pub use engine::{EngineConfig, MAX_SCORE_PRECISION};
pub use error::{ConfigError, ValidationError};
pub use logging::LoggingConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration. Load using [`AppConfig::load()`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Ranking engine configuration (tie-break convention, degeneracy handling)
    #[serde(default)]
    pub engine: EngineConfig,

    /// Logging configuration (filter directive, output format)
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `TOPSIS` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `TOPSIS__ENGINE__RANKING_METHOD=dense` -> `engine.ranking_method = dense`
    /// - `TOPSIS__LOGGING__JSON=true` -> `logging.json = true`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("TOPSIS")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Load and validate in one step.
    pub fn load_validated() -> Result<Self, ConfigError> {
        let config = Self::load()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if any configuration value is invalid.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.engine.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::topsis::{DegeneratePolicy, RankingMethod};
    use std::env;
    use std::sync::Mutex;

    // Mutex to ensure tests don't run in parallel (env vars are global)
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    const KEYS: &[&str] = &[
        "TOPSIS__ENGINE__RANKING_METHOD",
        "TOPSIS__ENGINE__DEGENERATE_POLICY",
        "TOPSIS__ENGINE__SCORE_PRECISION",
        "TOPSIS__LOGGING__LEVEL",
        "TOPSIS__LOGGING__JSON",
    ];

    /// Helper to clear environment variables after testing
    fn clear_env() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_load_defaults_from_empty_environment() {
        let _guard = ENV_MUTEX.lock().unwrap();
        clear_env();
        let result = AppConfig::load();

        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        let config = result.unwrap();
        assert_eq!(config.engine.ranking_method, RankingMethod::Max);
        assert_eq!(config.engine.degenerate_policy, DegeneratePolicy::Reject);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_engine_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__ENGINE__RANKING_METHOD", "dense");
        env::set_var("TOPSIS__ENGINE__DEGENERATE_POLICY", "propagate");
        env::set_var("TOPSIS__ENGINE__SCORE_PRECISION", "4");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.engine.ranking_method, RankingMethod::Dense);
        assert_eq!(config.engine.degenerate_policy, DegeneratePolicy::Propagate);
        assert_eq!(config.engine.score_precision, Some(4));
    }

    #[test]
    fn test_load_logging_overrides() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__LOGGING__LEVEL", "debug");
        env::set_var("TOPSIS__LOGGING__JSON", "true");
        let result = AppConfig::load();
        clear_env();

        let config = result.unwrap();
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json);
    }

    #[test]
    fn test_load_rejects_unknown_ranking_method() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__ENGINE__RANKING_METHOD", "average");
        let result = AppConfig::load();
        clear_env();

        assert!(matches!(result, Err(ConfigError::LoadError(_))));
    }

    #[test]
    fn test_load_validated_rejects_bad_precision() {
        let _guard = ENV_MUTEX.lock().unwrap();
        env::set_var("TOPSIS__ENGINE__SCORE_PRECISION", "40");
        let result = AppConfig::load_validated();
        clear_env();

        assert!(matches!(
            result,
            Err(ConfigError::ValidationFailed(
                ValidationError::ScorePrecisionTooLarge(40)
            ))
        ));
    }

    #[test]
    fn test_validate_default_config() {
        assert!(AppConfig::default().validate().is_ok());
    }
}
