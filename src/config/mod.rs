//! Configuration management
//!
//! This module handles loading and managing configuration from
//! TOML files and CLI arguments.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::core::constants::timeouts;
use crate::core::error::{Result, UrlShortError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Timeout in seconds for each provider request
    pub timeout: Option<u64>,

    /// Providers to try, in order (subset of the built-in catalog)
    pub providers: Option<Vec<String>>,

    /// Custom User-Agent header
    pub user_agent: Option<String>,

    /// Enable verbose logging
    pub verbose: Option<bool>,

    /// Disable the progress spinner
    pub no_progress: Option<bool>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timeout: Some(timeouts::DEFAULT_TIMEOUT_SECONDS),
            providers: None, // Will default to the full catalog
            user_agent: None,
            verbose: Some(false),
            no_progress: Some(false),
        }
    }
}

impl Config {
    /// Load configuration from file, falling back to defaults
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            UrlShortError::Config(format!(
                "Could not read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&content)?;

        config.validate()?;
        Ok(config)
    }

    /// Try to find and load a config file in standard locations
    pub fn load_from_standard_locations() -> Self {
        // Check for .urlshort.toml in current directory
        if let Ok(config) = Self::load_from_file(".urlshort.toml") {
            return config;
        }

        // Check for .urlshort.toml in parent directories (up to 3 levels)
        for i in 1..=3 {
            let path = format!("{}.urlshort.toml", "../".repeat(i));
            if let Ok(config) = Self::load_from_file(&path) {
                return config;
            }
        }

        // Fall back to defaults
        Self::default()
    }

    /// Merge this config with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli_config: &CliConfig) {
        if let Some(timeout) = cli_config.timeout {
            self.timeout = Some(timeout);
        }
        if let Some(ref providers) = cli_config.providers {
            self.providers = Some(providers.clone());
        }
        if let Some(ref user_agent) = cli_config.user_agent {
            self.user_agent = Some(user_agent.clone());
        }
        if cli_config.verbose {
            self.verbose = Some(true);
        }
        if cli_config.no_progress {
            self.no_progress = Some(true);
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if let Some(timeout) = self.timeout {
            if timeout < timeouts::MIN_TIMEOUT_SECONDS {
                return Err(UrlShortError::Config(format!(
                    "Timeout must be at least {} second(s), got {}",
                    timeouts::MIN_TIMEOUT_SECONDS,
                    timeout
                )));
            }
            if timeout > timeouts::MAX_TIMEOUT_SECONDS {
                return Err(UrlShortError::Config(format!(
                    "Timeout must be at most {} seconds, got {}",
                    timeouts::MAX_TIMEOUT_SECONDS,
                    timeout
                )));
            }
        }

        if let Some(ref providers) = self.providers {
            if providers.is_empty() {
                return Err(UrlShortError::Config(
                    "Provider list must not be empty".to_string(),
                ));
            }
            if providers.iter().any(|name| name.trim().is_empty()) {
                return Err(UrlShortError::Config(
                    "Provider names must not be blank".to_string(),
                ));
            }
        }

        Ok(())
    }

    /// The per-provider request timeout as a `Duration`
    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout.unwrap_or(timeouts::DEFAULT_TIMEOUT_SECONDS))
    }

    /// The User-Agent header to send, falling back to `urlshort/<version>`
    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(|| {
            concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string()
        })
    }
}

/// Configuration sourced from CLI arguments, merged over file configuration
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub timeout: Option<u64>,
    pub providers: Option<Vec<String>>,
    pub user_agent: Option<String>,
    pub verbose: bool,
    pub quiet: bool,
    pub no_progress: bool,
    pub config_file: Option<String>,
    pub no_config: bool,
}
