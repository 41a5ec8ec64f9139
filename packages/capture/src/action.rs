//! Host-facing actions.
//!
//! A workflow host exposes two named actions, `parseHtml` and `parseEmail`.
//! Each takes the document content, a `capture` object and, for email, an
//! optional plain-text `pattern`, and yields one result value.

use crate::config::{CAPTURE_KEY, PATTERN_KEY};
use crate::error::{CaptureError, Result};
use crate::parser::{parse_email, parse_html};
use crate::value::Value;

/// The actions available to a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ParseHtml,
    ParseEmail,
}

impl Action {
    /// Every action, in registration order.
    pub const ALL: [Action; 2] = [Action::ParseHtml, Action::ParseEmail];

    /// The name a host registers this action under.
    pub fn name(self) -> &'static str {
        match self {
            Action::ParseHtml => "parseHtml",
            Action::ParseEmail => "parseEmail",
        }
    }

    /// Look up an action by its registered name.
    ///
    /// # Errors
    /// Returns `UnknownAction` for any other name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name() == name)
            .ok_or_else(|| CaptureError::UnknownAction(name.to_string()))
    }

    /// Run the action.
    ///
    /// # Arguments
    /// * `content` - Document or message text; `None` yields `Null`
    /// * `capture` - The capture object
    /// * `pattern` - Plain-text email pattern, ignored by `parseHtml`
    pub fn evaluate(
        self,
        content: Option<&str>,
        capture: &Value,
        pattern: Option<&str>,
    ) -> Result<Value> {
        let Some(content) = content else {
            tracing::debug!(action = self.name(), "No content supplied");
            return Ok(Value::Null);
        };

        let parameters = build_parameters(capture, pattern);

        match self {
            Action::ParseHtml => parse_html(content, &parameters),
            Action::ParseEmail => parse_email(content, &parameters),
        }
    }
}

/// Build a parameter block from action arguments.
fn build_parameters(capture: &Value, pattern: Option<&str>) -> Value {
    Value::object([
        (CAPTURE_KEY, capture.clone()),
        (PATTERN_KEY, Value::from(pattern)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_name() {
        assert_eq!(Action::from_name("parseHtml").unwrap(), Action::ParseHtml);
        assert_eq!(Action::from_name("parseEmail").unwrap(), Action::ParseEmail);
        assert!(matches!(
            Action::from_name("parsehtml"),
            Err(CaptureError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_missing_content_is_null() {
        let capture: Value = serde_json::from_str(r#"{"t": {"paths": "title"}}"#).unwrap();
        assert_eq!(
            Action::ParseHtml.evaluate(None, &capture, None).unwrap(),
            Value::Null
        );
        assert_eq!(
            Action::ParseEmail.evaluate(None, &capture, None).unwrap(),
            Value::Null
        );
    }

    #[test]
    fn test_parse_html_action() {
        let capture: Value = serde_json::from_str(r#"{"t": {"paths": "title"}}"#).unwrap();
        let result = Action::ParseHtml
            .evaluate(Some("<title>Inbox</title>"), &capture, None)
            .unwrap();
        assert_eq!(result, Value::object([("t", vec!["Inbox"])]));
    }

    #[test]
    fn test_non_object_capture_is_empty() {
        let result = Action::ParseHtml
            .evaluate(Some("<p>x</p>"), &Value::from("title"), None)
            .unwrap();
        assert!(result.is_undefined());
    }

    #[test]
    fn test_parse_email_action_uses_pattern() {
        let result = Action::ParseEmail
            .evaluate(
                Some("Subject: code\r\n\r\nYour code is 834201."),
                &Value::Undefined,
                Some(r"\d{6}"),
            )
            .unwrap();
        assert_eq!(result, Value::from("834201"));
    }
}
