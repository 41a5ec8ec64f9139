//! Entry points that tie content acquisition, parsing and resolution together.

use std::io::Read;

use crate::config::PATTERN_KEY;
use crate::content::{ascii_bytes, read_markup};
use crate::email::EmailBody;
use crate::error::Result;
use crate::html::HtmlDocument;
use crate::refine::TextRefiner;
use crate::resolver::resolve;
use crate::types::CaptureSet;
use crate::value::Value;

/// Resolve the captures of a parameter block against HTML markup.
///
/// # Arguments
/// * `html` - The markup to parse
/// * `parameters` - Parameter block with a `capture` object
///
/// # Returns
/// The capture result object, or `Undefined` when no captures are defined
///
/// # Examples
/// ```
/// use webtools_capture::{parse_html, Value};
///
/// let params: Value = serde_json::from_str(
///     r#"{"capture": {"title": {"paths": "h1"}}}"#,
/// ).unwrap();
/// let result = parse_html("<h1>Hello</h1>", &params).unwrap();
///
/// assert_eq!(result.get("title"), &Value::from(vec!["Hello"]));
/// ```
pub fn parse_html(html: &str, parameters: &Value) -> Result<Value> {
    let captures = CaptureSet::from_parameters(parameters);
    if captures.is_empty() {
        return Ok(Value::Undefined);
    }

    let document = HtmlDocument::parse(html);
    resolve(&document, &captures)
}

/// Read markup from a stream, decode it and resolve the captures.
///
/// # Arguments
/// * `reader` - Markup byte stream, read to its end before parsing
/// * `encoding` - Optional encoding label; UTF-8 with BOM sniffing otherwise
/// * `parameters` - Parameter block with a `capture` object
pub fn parse_html_bytes<R: Read>(
    reader: R,
    encoding: Option<&str>,
    parameters: &Value,
) -> Result<Value> {
    let html = read_markup(reader, encoding)?;
    parse_html(&html, parameters)
}

/// Capture from an email given as text.
///
/// The text is encoded as 7-bit ASCII before MIME parsing.
pub fn parse_email(content: &str, parameters: &Value) -> Result<Value> {
    parse_email_bytes(&ascii_bytes(content), parameters)
}

/// Capture from a raw MIME message.
///
/// An HTML body is resolved like any HTML document. A plain-text body only
/// supports the top-level `pattern` of the parameter block: the whole body is
/// refined with it, or returned verbatim when there is no pattern. A message
/// without either body yields `Undefined`.
pub fn parse_email_bytes(raw: &[u8], parameters: &Value) -> Result<Value> {
    match EmailBody::extract(raw)? {
        Some(EmailBody::Html(html)) => parse_html(&html, parameters),
        Some(EmailBody::Text(text)) => {
            let pattern = parameters.get(PATTERN_KEY).as_str();
            TextRefiner::new().refine(&text, pattern)
        }
        None => Ok(Value::Undefined),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn params(json: &str) -> Value {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_parse_html_without_captures_is_undefined() {
        assert_eq!(parse_html("<p>x</p>", &params("{}")).unwrap(), Value::Undefined);
        assert_eq!(
            parse_html("<p>x</p>", &params(r#"{"capture": {}}"#)).unwrap(),
            Value::Undefined
        );
    }

    #[test]
    fn test_parse_html_bytes_with_encoding() {
        let result = parse_html_bytes(
            &b"<p class=\"name\">Jos\xE9</p>"[..],
            Some("iso-8859-1"),
            &params(r#"{"capture": {"name": {"paths": "p.name"}}}"#),
        )
        .unwrap();
        assert_eq!(result.get("name"), &Value::from(vec!["José"]));
    }

    #[test]
    fn test_parse_email_text_with_pattern() {
        let raw = "Subject: Order\r\n\r\nYour order #A-1001 has shipped.\r\n";
        let result = parse_email(
            raw,
            &params(r##"{"pattern": "#(?<order>[A-Z]-\\d+)"}"##),
        )
        .unwrap();
        assert_eq!(result, Value::object([("order", "A-1001")]));
    }

    #[test]
    fn test_parse_email_text_without_pattern_returns_body() {
        let raw = "Subject: Note\r\n\r\nremember the milk";
        let result = parse_email(raw, &params("{}")).unwrap();
        assert_eq!(result, Value::from("remember the milk"));
    }

    #[test]
    fn test_parse_email_text_ignores_captures() {
        let raw = "Subject: Note\r\n\r\nplain body";
        let result = parse_email(
            raw,
            &params(r#"{"capture": {"x": {"paths": "p"}}, "pattern": "body"}"#),
        )
        .unwrap();
        assert_eq!(result, Value::from("body"));
    }

    #[test]
    fn test_parse_email_text_no_match_is_undefined() {
        let raw = "Subject: Note\r\n\r\nnothing numeric";
        let result = parse_email(raw, &params(r#"{"pattern": "\\d+"}"#)).unwrap();
        assert!(result.is_undefined());
    }

    #[test]
    fn test_parse_email_html_uses_captures() {
        let raw = "Subject: Html\r\nContent-Type: text/html\r\n\r\n<a href=\"https://example.com/confirm?t=abc\">Confirm</a>";
        let result = parse_email(
            raw,
            &params(r#"{"capture": {"link": {"paths": "a", "attributes": "href", "pattern": "t=(?<token>\\w+)"}}}"#),
        )
        .unwrap();
        assert_eq!(
            result.get("link"),
            &Value::Array(vec![Value::object([(
                "href",
                Value::object([("token", "abc")])
            )])])
        );
    }

    #[test]
    fn test_parse_email_non_ascii_becomes_question_mark() {
        let raw = "Subject: x\r\n\r\nprice: 5€";
        let result = parse_email(raw, &params("{}")).unwrap();
        assert_eq!(result, Value::from("price: 5?"));
    }
}
