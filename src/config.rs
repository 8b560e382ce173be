//! Configuration management for the contact manager binary.
//!
//! This module handles loading and validating configuration from environment
//! variables, reading a `.env` file first when one is present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Environment name that marks a developer test machine.
pub const TEST_ENVIRONMENT: &str = "TEST";

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment name (default: "DEV")
    pub environment: String,

    /// Log level (default: "error")
    pub log_level: String,

    /// CSV file imported at startup
    pub seed_file: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `ENV`: Environment name (default: "DEV")
    /// - `LOG_LEVEL`: Logging level (default: "error")
    /// - `CONTACTS_SEED_FILE`: Path to a `.csv` file of contacts to import
    pub fn from_env() -> ConfigResult<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        let environment = env::var("ENV").unwrap_or_else(|_| "DEV".to_string());

        let log_level = env::var("LOG_LEVEL")
            .unwrap_or_else(|_| "error".to_string())
            .to_lowercase();

        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: "LOG_LEVEL".to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), log_level),
            });
        }

        let seed_file = Self::parse_seed_file("CONTACTS_SEED_FILE")?;

        Ok(Config {
            environment,
            log_level,
            seed_file,
        })
    }

    /// Whether this process runs on a developer test machine.
    pub fn is_test_environment(&self) -> bool {
        self.environment == TEST_ENVIRONMENT
    }

    /// Parse an optional path to a `.csv` file.
    fn parse_seed_file(var_name: &str) -> ConfigResult<Option<PathBuf>> {
        let Ok(val) = env::var(var_name) else {
            return Ok(None);
        };

        if val.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let path = PathBuf::from(val);
        if !path.extension().is_some_and(|ext| ext == "csv") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must point to a .csv file, got: {}", path.display()),
            });
        }

        Ok(Some(path))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            environment: "DEV".to_string(),
            log_level: "error".to_string(),
            seed_file: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.environment, "DEV");
        assert_eq!(config.log_level, "error");
        assert!(config.seed_file.is_none());
        assert!(!config.is_test_environment());
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("ENV", "TEST");
        guard.set("LOG_LEVEL", "DEBUG");
        guard.set("CONTACTS_SEED_FILE", "data/contacts.csv");

        let config = Config::from_env().unwrap();
        assert!(config.is_test_environment());
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.seed_file, Some(PathBuf::from("data/contacts.csv")));
    }

    #[test]
    #[serial]
    fn test_config_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("LOG_LEVEL", "loud");

        let result = Config::from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "LOG_LEVEL");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_parse_seed_file_rejects_other_extensions() {
        let mut guard = EnvGuard::new();
        guard.set("TEST_SEED_JSON", "contacts.json");
        guard.set("TEST_SEED_EMPTY", "  ");

        assert!(Config::parse_seed_file("TEST_SEED_JSON").is_err());
        assert!(Config::parse_seed_file("TEST_SEED_EMPTY").is_err());
        assert_eq!(Config::parse_seed_file("NONEXISTENT_SEED").unwrap(), None);
    }

    #[test]
    fn test_environment_match_is_exact() {
        let config = Config {
            environment: "test".to_string(),
            ..Config::default()
        };
        assert!(!config.is_test_environment());
    }
}
