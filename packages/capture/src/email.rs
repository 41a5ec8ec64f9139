//! Email body extraction.
//!
//! Built on [mailparse](https://crates.io/crates/mailparse). A message yields
//! its HTML body when it has one, otherwise its plain-text body.

use mailparse::{DispositionType, ParsedMail};

use crate::config::{MEDIA_TYPE_TEXT_HTML, MEDIA_TYPE_TEXT_PLAIN};
use crate::error::Result;

const MULTIPART_ALTERNATIVE: &str = "multipart/alternative";

/// The body chosen from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmailBody {
    /// An HTML body, to be resolved as a document.
    Html(String),
    /// A plain-text body, to be refined with a single pattern.
    Text(String),
}

impl EmailBody {
    /// Extract the preferred body from raw message bytes.
    ///
    /// # Returns
    /// * `Ok(Some(EmailBody::Html))` if the message has an HTML body
    /// * `Ok(Some(EmailBody::Text))` if it only has a plain-text body
    /// * `Ok(None)` if it has neither
    ///
    /// # Errors
    /// Returns `MimeParse` if the bytes are not a MIME message or a body part
    /// cannot be decoded.
    ///
    /// # Examples
    /// ```
    /// use webtools_capture::email::EmailBody;
    ///
    /// let raw = b"Subject: Hi\r\nContent-Type: text/plain\r\n\r\nHello there";
    /// let body = EmailBody::extract(raw).unwrap();
    /// assert_eq!(body, Some(EmailBody::Text("Hello there".to_string())));
    /// ```
    pub fn extract(raw: &[u8]) -> Result<Option<Self>> {
        let message = mailparse::parse_mail(raw)?;

        if let Some(part) = find_body(&message, MEDIA_TYPE_TEXT_HTML) {
            return Ok(Some(Self::Html(part.get_body()?)));
        }

        if let Some(part) = find_body(&message, MEDIA_TYPE_TEXT_PLAIN) {
            return Ok(Some(Self::Text(part.get_body()?)));
        }

        tracing::debug!(
            mimetype = %message.ctype.mimetype,
            "Message has neither an HTML nor a plain-text body"
        );
        Ok(None)
    }

    /// The body content regardless of its kind.
    pub fn content(&self) -> &str {
        match self {
            Self::Html(content) | Self::Text(content) => content,
        }
    }
}

/// Find the body part with the given media type.
///
/// Attachments never count as bodies. Inside `multipart/alternative` the
/// last matching alternative wins, since alternatives are ordered from
/// plainest to richest; elsewhere the first match wins.
fn find_body<'m, 'a>(part: &'m ParsedMail<'a>, mimetype: &str) -> Option<&'m ParsedMail<'a>> {
    if part.subparts.is_empty() {
        return (part.ctype.mimetype.eq_ignore_ascii_case(mimetype) && !is_attachment(part))
            .then_some(part);
    }

    if part.ctype.mimetype.eq_ignore_ascii_case(MULTIPART_ALTERNATIVE) {
        part.subparts
            .iter()
            .rev()
            .find_map(|sub| find_body(sub, mimetype))
    } else {
        part.subparts.iter().find_map(|sub| find_body(sub, mimetype))
    }
}

fn is_attachment(part: &ParsedMail<'_>) -> bool {
    part.get_content_disposition().disposition == DispositionType::Attachment
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_message() {
        let raw = b"From: a@example.com\r\nSubject: Plain\r\n\r\nJust text.\r\n";
        let body = EmailBody::extract(raw).unwrap().unwrap();
        assert!(matches!(body, EmailBody::Text(_)));
        assert_eq!(body.content().trim_end(), "Just text.");
    }

    #[test]
    fn test_html_message() {
        let raw = b"Subject: Html\r\nContent-Type: text/html; charset=utf-8\r\n\r\n<p>Hi</p>";
        let body = EmailBody::extract(raw).unwrap();
        assert_eq!(body, Some(EmailBody::Html("<p>Hi</p>".to_string())));
    }

    #[test]
    fn test_alternative_prefers_html() {
        let raw = concat!(
            "Subject: Both\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/alternative; boundary=\"sep\"\r\n",
            "\r\n",
            "--sep\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "plain version\r\n",
            "--sep\r\n",
            "Content-Type: text/html\r\n",
            "\r\n",
            "<b>html version</b>\r\n",
            "--sep--\r\n",
        );
        let body = EmailBody::extract(raw.as_bytes()).unwrap().unwrap();
        assert!(matches!(body, EmailBody::Html(_)));
        assert_eq!(body.content().trim_end(), "<b>html version</b>");
    }

    #[test]
    fn test_html_attachment_is_not_a_body() {
        let raw = concat!(
            "Subject: Attached\r\n",
            "MIME-Version: 1.0\r\n",
            "Content-Type: multipart/mixed; boundary=\"sep\"\r\n",
            "\r\n",
            "--sep\r\n",
            "Content-Type: text/plain\r\n",
            "\r\n",
            "see attachment\r\n",
            "--sep\r\n",
            "Content-Type: text/html\r\n",
            "Content-Disposition: attachment; filename=\"page.html\"\r\n",
            "\r\n",
            "<p>attached</p>\r\n",
            "--sep--\r\n",
        );
        let body = EmailBody::extract(raw.as_bytes()).unwrap().unwrap();
        assert!(matches!(body, EmailBody::Text(_)));
        assert_eq!(body.content().trim_end(), "see attachment");
    }

    #[test]
    fn test_quoted_printable_body_is_decoded() {
        let raw = concat!(
            "Subject: QP\r\n",
            "Content-Type: text/plain; charset=utf-8\r\n",
            "Content-Transfer-Encoding: quoted-printable\r\n",
            "\r\n",
            "Total: 42 =E2=82=AC\r\n",
        );
        let body = EmailBody::extract(raw.as_bytes()).unwrap().unwrap();
        assert_eq!(body.content().trim_end(), "Total: 42 €");
    }

    #[test]
    fn test_no_text_body() {
        let raw = concat!(
            "Subject: Image only\r\n",
            "Content-Type: image/png\r\n",
            "Content-Transfer-Encoding: base64\r\n",
            "\r\n",
            "iVBORw0KGgo=\r\n",
        );
        assert_eq!(EmailBody::extract(raw.as_bytes()).unwrap(), None);
    }
}
