//! Configuration management for the address book.
//!
//! This module handles loading and validating configuration from environment
//! variables, after reading an optional `.env` file.

use crate::book::DEFAULT_WINDOW_DAYS;
use crate::error::{ConfigError, ConfigResult};
use crate::repl::DEFAULT_PROMPT;
use std::env;

/// Largest accepted birthday look-ahead window.
pub const MAX_WINDOW_DAYS: i64 = 366;

/// Configuration for the address book binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level used when `RUST_LOG` is unset (default: "warn")
    pub log_level: String,

    /// Prompt printed before each input line (default: ">>> ")
    pub prompt: String,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_window_days: i64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    /// - `ADDRESS_BOOK_PROMPT`: REPL prompt (default: ">>> ")
    /// - `BIRTHDAY_WINDOW_DAYS`: birthday look-ahead, 0 to 366 (default: 7)
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env is fine; dotenvy doesn't print to stdout
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);
        let prompt = env::var("ADDRESS_BOOK_PROMPT").unwrap_or(defaults.prompt);
        let birthday_window_days =
            Self::parse_env_i64("BIRTHDAY_WINDOW_DAYS", defaults.birthday_window_days)?;

        if !(0..=MAX_WINDOW_DAYS).contains(&birthday_window_days) {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_WINDOW_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_WINDOW_DAYS),
            });
        }

        Ok(Config {
            log_level,
            prompt,
            birthday_window_days,
        })
    }

    /// Parse an environment variable as i64 with a default value.
    fn parse_env_i64(var_name: &str, default: i64) -> ConfigResult<i64> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<i64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a whole number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "warn".to_string(),
            prompt: DEFAULT_PROMPT.to_string(),
            birthday_window_days: DEFAULT_WINDOW_DAYS,
        }
    }
}
