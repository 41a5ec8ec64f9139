//! Runtime configuration for fetching pages.

use std::time::Duration;

use crate::error::{CliError, Result};

/// Default HTTP timeout in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default maximum HTTP response size in bytes (100 MB).
pub const DEFAULT_MAX_RESPONSE_SIZE: u64 = 100 * 1024 * 1024;

/// Environment variable overriding the HTTP timeout.
pub const HTTP_TIMEOUT_ENV: &str = "WEBTOOLS_HTTP_TIMEOUT_SECS";

/// Environment variable overriding the maximum response size.
pub const MAX_RESPONSE_SIZE_ENV: &str = "WEBTOOLS_MAX_RESPONSE_SIZE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub max_response_size: u64,
}

impl FetchConfig {
    /// Build a configuration from the environment, falling back to defaults.
    ///
    /// # Errors
    /// Returns `Config` if a variable is set but not a non-negative integer.
    pub fn from_env() -> Result<Self> {
        let timeout_secs = env_u64(HTTP_TIMEOUT_ENV)?.unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
        let max_response_size =
            env_u64(MAX_RESPONSE_SIZE_ENV)?.unwrap_or(DEFAULT_MAX_RESPONSE_SIZE);

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            max_response_size,
        })
    }

    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            max_response_size: DEFAULT_MAX_RESPONSE_SIZE,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_size(mut self, max_response_size: u64) -> Self {
        self.max_response_size = max_response_size;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn env_u64(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => parse_u64(name, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_u64(name: &str, raw: &str) -> Result<u64> {
    raw.trim()
        .parse()
        .map_err(|_| CliError::Config(format!("{name} must be a non-negative integer, got '{raw}'")))
}
