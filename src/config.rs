//! Command-line configuration.
//!
//! Handles loading configuration from environment variables and .env files.

use dotenv::dotenv;
use std::env;

use crate::constants::cli::{DEFAULT_LOG_FILTER, DEFAULT_PREVIEW_VERSES};
use crate::error::{Error, Result};

/// Configuration for the `parse_passage` front end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The application name
    app_name: String,
    /// The application version
    app_version: String,
    /// Log filter used when `RUST_LOG` is unset
    pub log_filter: String,
    /// Pretty-print JSON output
    pub pretty_json: bool,
    /// Verses listed in the preview
    pub preview_verses: usize,
}

impl Config {
    /// Get the application name.
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// Get the application version.
    #[must_use]
    pub fn app_version(&self) -> &str {
        &self.app_version
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            app_name: env!("CARGO_PKG_NAME").to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            pretty_json: false,
            preview_verses: DEFAULT_PREVIEW_VERSES,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn load() -> Result<Self> {
        // Try to load .env file if present
        dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(filter) = lookup("PASSAGE_LOG").filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(pretty) = lookup("PASSAGE_PRETTY") {
            config.pretty_json = parse_flag(&pretty);
        }

        if let Some(count) = lookup("PASSAGE_PREVIEW_VERSES") {
            config.preview_verses = count.trim().parse().map_err(|_| {
                Error::config(
                    format!("PASSAGE_PREVIEW_VERSES must be a whole number, got {count:?}"),
                    "Set it to a count such as 5, or unset it",
                )
            })?;
        }

        Ok(config)
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.log_filter, "warn");
        assert!(!config.pretty_json);
        assert_eq!(config.preview_verses, 5);
        assert_eq!(config.app_name(), "passage_parser");
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PASSAGE_LOG", "passage_parser=debug"),
            ("PASSAGE_PRETTY", "Yes"),
            ("PASSAGE_PREVIEW_VERSES", " 3 "),
        ])
        .unwrap();
        assert_eq!(config.log_filter, "passage_parser=debug");
        assert!(config.pretty_json);
        assert_eq!(config.preview_verses, 3);
    }

    #[test]
    fn test_invalid_preview_count() {
        match config_from(&[("PASSAGE_PREVIEW_VERSES", "many")]) {
            Err(Error::Config { message, .. }) => assert!(message.contains("many")),
            other => panic!("Expected config error, got {other:?}"),
        }
    }
}
