//! Webtools CLI - capture structured values from files, stdin and URLs.
//!
//! Thin front end over [`webtools_capture`]: it reads markup or messages,
//! loads capture parameters from JSON or YAML files, fetches pages over HTTP
//! and prints results as JSON.
//!
//! # Architecture
//!
//! - [`cli`]: Command-line interface
//! - [`config`]: Fetch configuration from the environment
//! - [`error`]: Error types and Result alias
//! - [`http`]: HTTP client and HTML page fetching
//! - [`parameters`]: Capture parameter files

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod parameters;

// Re-export commonly used items
pub use config::FetchConfig;
pub use error::{CliError, Result};
pub use http::{create_client, fetch_html};
pub use parameters::load_parameters;
