//! Error types for the webtools command line.
//!
//! Wraps [`CaptureError`] from the engine and adds the failures that only
//! exist at the edges: fetching pages, reading parameter files and runtime
//! configuration.

use thiserror::Error;
use webtools_capture::CaptureError;

/// Main error type for the CLI crate.
#[derive(Debug, Error)]
pub enum CliError {
    /// The capture engine failed.
    #[error(transparent)]
    Capture(#[from] CaptureError),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body exceeds the configured limit.
    #[error("Response too large: {size} bytes exceeds limit of {limit} bytes")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// All retry attempts failed.
    #[error("Request failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// JSON parameter file could not be parsed, or a result not serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parameter file could not be parsed.
    #[error("YAML parsing failed: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid runtime configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
