use std::env;
use std::time::Duration;

use anyhow::{Context, Result};

pub const DEFAULT_BASE_URL: &str = "http://localhost:33875/api";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Client configuration, fixed once the client is built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    ///
    /// `from_env` is this with the process environment plugged in.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = lookup("BOOKMARK_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let timeout_ms = match lookup("BOOKMARK_API_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .context("BOOKMARK_API_TIMEOUT_MS must be a whole number of milliseconds")?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Config {
            base_url,
            timeout: Duration::from_millis(timeout_ms),
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Bookmark API: {}", self.base_url);
        tracing::info!("  Request timeout: {} ms", self.timeout.as_millis());
    }
}
