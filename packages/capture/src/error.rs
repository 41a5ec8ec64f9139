//! Error types for the capture engine.
//!
//! Only hard failures live here. A selector that matches nothing, a missing
//! attribute or a pattern that does not match are not errors: they resolve
//! to [`Value::Undefined`](crate::value::Value::Undefined) and are dropped
//! from the result.

use thiserror::Error;

/// Main error type for the capture library.
#[derive(Debug, Error)]
pub enum CaptureError {
    /// A capture pattern failed to compile.
    #[error("Invalid regular expression '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The MIME message could not be parsed.
    #[error("MIME parsing failed: {0}")]
    MimeParse(#[from] mailparse::MailParseError),

    /// The requested character encoding label is not known.
    #[error("Unknown character encoding: '{0}'")]
    UnknownEncoding(String),

    /// IO error while acquiring content.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No action is registered under the given name.
    #[error("Unknown action: '{0}'. Expected one of: parseHtml, parseEmail")]
    UnknownAction(String),
}

/// Result type alias for capture operations.
pub type Result<T> = std::result::Result<T, CaptureError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_pattern_display() {
        let source = regex::Regex::new("(unclosed").unwrap_err();
        let err = CaptureError::InvalidPattern {
            pattern: "(unclosed".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("Invalid regular expression '(unclosed'"));
    }

    #[test]
    fn test_unknown_encoding_display() {
        let err = CaptureError::UnknownEncoding("klingon".to_string());
        assert_eq!(err.to_string(), "Unknown character encoding: 'klingon'");
    }

    #[test]
    fn test_unknown_action_display() {
        let err = CaptureError::UnknownAction("parseXml".to_string());
        assert!(err.to_string().contains("parseXml"));
        assert!(err.to_string().contains("parseHtml"));
    }
}
