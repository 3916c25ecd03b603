//! Configuration management for the contact assistant.
//!
//! This module handles loading and validating configuration from environment
//! variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use crate::models::UPCOMING_WINDOW_DAYS;
use std::env;
use std::path::PathBuf;

/// Default location of the address book snapshot.
pub const DEFAULT_BOOK_PATH: &str = "addressbook.json";

/// Configuration for the contact assistant.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the address book snapshot file (default: addressbook.json)
    pub book_path: PathBuf,

    /// Days after today covered by the `birthdays` command (default: 7)
    pub upcoming_days: u64,

    /// Maximum number of search results to show (default: 5)
    pub search_max_results: usize,

    /// Search confidence threshold (0-100, default: 30)
    pub search_min_confidence: u8,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// All variables are optional:
    /// - `ADDRESS_BOOK_PATH`: Snapshot file path (default: addressbook.json)
    /// - `UPCOMING_BIRTHDAYS_DAYS`: Birthday lookahead in days (default: 7, max 366)
    /// - `SEARCH_MAX_RESULTS`: Max search results (default: 5)
    /// - `SEARCH_MIN_CONFIDENCE`: Min search confidence score (default: 30)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let book_path = match env::var("ADDRESS_BOOK_PATH") {
            Ok(path) if path.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "ADDRESS_BOOK_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(path) => PathBuf::from(path),
            Err(_) => PathBuf::from(DEFAULT_BOOK_PATH),
        };

        let upcoming_days = Self::parse_env_u64("UPCOMING_BIRTHDAYS_DAYS", UPCOMING_WINDOW_DAYS)?;
        if upcoming_days > 366 {
            return Err(ConfigError::InvalidValue {
                var: "UPCOMING_BIRTHDAYS_DAYS".to_string(),
                reason: "Must be between 0 and 366".to_string(),
            });
        }

        let search_max_results = Self::parse_env_usize("SEARCH_MAX_RESULTS", 5)?;
        let search_min_confidence = Self::parse_env_u8("SEARCH_MIN_CONFIDENCE", 30)?;

        // Validate confidence threshold is 0-100
        if search_min_confidence > 100 {
            return Err(ConfigError::InvalidValue {
                var: "SEARCH_MIN_CONFIDENCE".to_string(),
                reason: "Must be between 0 and 100".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "error".to_string());

        Ok(Config {
            book_path,
            upcoming_days,
            search_max_results,
            search_min_confidence,
            log_level,
        })
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as u8 with a default value.
    fn parse_env_u8(var_name: &str, default: u8) -> ConfigResult<u8> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u8>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a number between 0-255, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from(DEFAULT_BOOK_PATH),
            upcoming_days: UPCOMING_WINDOW_DAYS,
            search_max_results: 5,
            search_min_confidence: 30,
            log_level: "error".to_string(),
        }
    }
}
