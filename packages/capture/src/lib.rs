//! Webtools Capture - extract structured values from HTML and email.
//!
//! A caller describes what to extract as a set of named captures. Each
//! capture selects nodes with CSS selectors, optionally reads attributes (or
//! computed pseudo-attributes such as `::value`) and optionally refines the
//! captured text with a regular expression. The result is a single
//! [`Value`] tree.
//!
//! # Example
//!
//! ```
//! use webtools_capture::{parse_html, Value};
//!
//! let params: Value = serde_json::from_str(r#"{
//!     "capture": {
//!         "links": {"paths": "a", "attributes": "href"},
//!         "total": {"paths": ".total", "pattern": "(?<amount>\\d+)\\.(?<cents>\\d{2})"}
//!     }
//! }"#).unwrap();
//!
//! let html = r#"<a href="/a">A</a><a>no href</a><span class="total">12.50</span>"#;
//! let result = parse_html(html, &params).unwrap();
//!
//! assert_eq!(result.get("links"), &Value::from(vec![Value::object([("href", "/a")])]));
//! assert_eq!(
//!     result.get("total"),
//!     &Value::from(vec![Value::object([("amount", "12"), ("cents", "50")])])
//! );
//! ```
//!
//! # Architecture
//!
//! - [`value`]: The value tree used for parameters and results
//! - [`types`]: Capture specifications
//! - [`html`]: HTML document adapter
//! - [`resolver`]: Capture resolution
//! - [`refine`]: Regex refinement
//! - [`special`]: Form control pseudo-attributes
//! - [`email`]: MIME body extraction
//! - [`content`]: Byte decoding
//! - [`parser`]: Entry points
//! - [`action`]: Host-facing `parseHtml` / `parseEmail` actions
//! - [`config`]: Constants
//! - [`error`]: Error types and Result alias

pub mod action;
pub mod config;
pub mod content;
pub mod email;
pub mod error;
pub mod html;
pub mod parser;
pub mod refine;
pub mod resolver;
pub mod special;
pub mod types;
pub mod value;

// Re-export commonly used items
pub use action::Action;
pub use email::EmailBody;
pub use error::{CaptureError, Result};
pub use html::{HtmlDocument, HtmlNode};
pub use parser::{parse_email, parse_email_bytes, parse_html, parse_html_bytes};
pub use refine::TextRefiner;
pub use resolver::resolve;
pub use types::{Capture, CaptureSet};
pub use value::{Map, Value};
