//! Content acquisition: turning caller-supplied bytes into text.
//!
//! Content is read fully into memory before any parsing starts.

use std::io::Read;

use encoding_rs::Encoding;

use crate::config::{ASCII_REPLACEMENT, DEFAULT_MARKUP_ENCODING};
use crate::error::{CaptureError, Result};

/// Look up an encoding by its WHATWG label (e.g. `utf-8`, `iso-8859-1`).
///
/// # Errors
/// Returns `UnknownEncoding` if the label is not recognized.
pub fn encoding_for_label(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| CaptureError::UnknownEncoding(label.to_string()))
}

/// Decode markup bytes.
///
/// Uses the given encoding label, or UTF-8 when none is given. A byte order
/// mark at the start of the content takes precedence over both. Malformed
/// sequences are replaced rather than rejected.
///
/// # Examples
/// ```
/// use webtools_capture::content::decode_markup;
///
/// assert_eq!(decode_markup(b"\xEF\xBB\xBF<p>bom</p>", None).unwrap(), "<p>bom</p>");
/// assert_eq!(decode_markup(b"caf\xE9", Some("iso-8859-1")).unwrap(), "café");
/// ```
pub fn decode_markup(bytes: &[u8], encoding: Option<&str>) -> Result<String> {
    let encoding = match encoding {
        Some(label) => encoding_for_label(label)?,
        None => encoding_for_label(DEFAULT_MARKUP_ENCODING)?,
    };

    let (text, used, had_errors) = encoding.decode(bytes);
    if had_errors {
        tracing::warn!(
            encoding = used.name(),
            "Content contained malformed sequences, replaced"
        );
    }

    Ok(text.into_owned())
}

/// Read a markup stream to its end and decode it.
///
/// # Errors
/// Returns `Io` if reading fails and `UnknownEncoding` for an unknown label.
pub fn read_markup<R: Read>(mut reader: R, encoding: Option<&str>) -> Result<String> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    decode_markup(&bytes, encoding)
}

/// Encode text as 7-bit ASCII bytes for MIME parsing.
///
/// Characters outside ASCII become `?`.
///
/// # Examples
/// ```
/// use webtools_capture::content::ascii_bytes;
///
/// assert_eq!(ascii_bytes("naïve"), b"na?ve");
/// ```
pub fn ascii_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| {
            if c.is_ascii() {
                c as u8
            } else {
                ASCII_REPLACEMENT
            }
        })
        .collect()
}
