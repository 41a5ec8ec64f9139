//! Configuration constants shared by the capture engine.

/// Marker that turns an attribute name into a computed pseudo-attribute.
pub const PSEUDO_ATTRIBUTE_PREFIX: &str = "::";

/// Pseudo-attribute holding the effective submitted value of a form control.
pub const VALUE_PSEUDO_ATTRIBUTE: &str = "::value";

/// Parameter block key holding the capture definitions.
pub const CAPTURE_KEY: &str = "capture";

/// Key for the selector list of a single capture.
pub const PATHS_KEY: &str = "paths";

/// Key for the attribute list of a single capture.
pub const ATTRIBUTES_KEY: &str = "attributes";

/// Key for the refinement pattern.
///
/// Used inside a capture definition and, for plain-text email bodies, at the
/// top level of the parameter block.
pub const PATTERN_KEY: &str = "pattern";

/// Media type accepted by the HTML handlers.
pub const MEDIA_TYPE_TEXT_HTML: &str = "text/html";

/// Media type of plain-text email bodies.
pub const MEDIA_TYPE_TEXT_PLAIN: &str = "text/plain";

/// Encoding label assumed for markup when the caller does not provide one.
pub const DEFAULT_MARKUP_ENCODING: &str = "utf-8";

/// Replacement byte for characters that do not fit 7-bit ASCII.
pub const ASCII_REPLACEMENT: u8 = b'?';

/// Tag name reported for the document node itself.
pub const DOCUMENT_TAG_NAME: &str = "#document";

/// Check whether an attribute name refers to a pseudo-attribute.
///
/// # Examples
/// ```
/// use webtools_capture::config::is_pseudo_attribute;
///
/// assert!(is_pseudo_attribute("::value"));
/// assert!(!is_pseudo_attribute("href"));
/// ```
pub fn is_pseudo_attribute(name: &str) -> bool {
    name.starts_with(PSEUDO_ATTRIBUTE_PREFIX)
}
