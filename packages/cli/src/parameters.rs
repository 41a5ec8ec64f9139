//! Loading capture parameter files.
//!
//! A parameter file holds a `capture` object and, for email, an optional
//! top-level `pattern`. Files ending in `.yaml` or `.yml` are read as YAML,
//! everything else as JSON.

use std::fs;
use std::path::Path;

use webtools_capture::Value;

use crate::error::Result;

/// Input format of a parameter file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterFormat {
    Json,
    Yaml,
}

impl ParameterFormat {
    /// Pick the format from a file extension.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Self::Yaml
            }
            _ => Self::Json,
        }
    }

    /// Parse parameter text in this format.
    pub fn parse(self, text: &str) -> Result<Value> {
        let value = match self {
            Self::Json => serde_json::from_str(text)?,
            Self::Yaml => serde_yaml_ng::from_str(text)?,
        };
        Ok(value)
    }
}

/// Read and parse a parameter file.
pub fn load_parameters(path: &Path) -> Result<Value> {
    let format = ParameterFormat::from_path(path);
    tracing::debug!(path = %path.display(), ?format, "Loading capture parameters");

    let text = fs::read_to_string(path)?;
    format.parse(&text)
}
