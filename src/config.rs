//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment
//! variables, with an optional `.env` file in the working directory.

use crate::error::{ConfigError, ConfigResult};
use crate::models::{WeekendPolicy, DEFAULT_HORIZON_DAYS};
use std::env;
use std::path::PathBuf;

/// Longest accepted birthday horizon, one leap year.
const MAX_HORIZON_DAYS: u32 = 366;

/// Configuration for the contact book.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file the address book is loaded from and saved to
    pub book_path: PathBuf,

    /// Days ahead the `birthdays` command looks (default: 7)
    pub birthday_horizon_days: u32,

    /// How weekend birthdays are reported (default: keep)
    pub weekend_policy: WeekendPolicy,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_PATH`: Address book file (default: `addressbook.json`)
    /// - `BIRTHDAY_HORIZON_DAYS`: Upcoming-birthday window, 0-366 (default: 7)
    /// - `BIRTHDAY_WEEKEND_POLICY`: `keep` or `shift-to-monday` (default: `keep`)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine; a malformed one is not
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(ConfigError::DotenvError(e.to_string()));
            }
        }

        let defaults = Config::default();

        let book_path = env::var("CONTACT_BOOK_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.book_path);

        if book_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "CONTACT_BOOK_PATH".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let birthday_horizon_days =
            Self::parse_env_u32("BIRTHDAY_HORIZON_DAYS", defaults.birthday_horizon_days)?;

        if birthday_horizon_days > MAX_HORIZON_DAYS {
            return Err(ConfigError::InvalidValue {
                var: "BIRTHDAY_HORIZON_DAYS".to_string(),
                reason: format!("Must be between 0 and {}", MAX_HORIZON_DAYS),
            });
        }

        let weekend_policy = match env::var("BIRTHDAY_WEEKEND_POLICY") {
            Ok(val) => val
                .parse::<WeekendPolicy>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "BIRTHDAY_WEEKEND_POLICY".to_string(),
                    reason,
                })?,
            Err(_) => defaults.weekend_policy,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            book_path,
            birthday_horizon_days,
            weekend_policy,
            log_level,
        })
    }

    /// Parse an environment variable as u32 with a default value.
    fn parse_env_u32(var_name: &str, default: u32) -> ConfigResult<u32> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<u32>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            book_path: PathBuf::from("addressbook.json"),
            birthday_horizon_days: DEFAULT_HORIZON_DAYS,
            weekend_policy: WeekendPolicy::Keep,
            log_level: "error".to_string(),
        }
    }
}
