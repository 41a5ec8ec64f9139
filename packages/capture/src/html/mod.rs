//! HTML document adapter.
//!
//! Wraps the `scraper` DOM so the resolver only sees [`HtmlDocument`] and
//! [`HtmlNode`]. Paths are CSS selectors evaluated from the document root.

mod utils;

pub use utils::{
    child_elements, get_attribute, get_tag_name, has_attribute, inner_markup, inner_text,
};

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML document.
///
/// HTML parsing never fails: malformed markup is repaired the way browsers
/// repair it. Recovered parse errors are only logged.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    /// Parse a full HTML document.
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        if !html.errors.is_empty() {
            tracing::debug!(errors = html.errors.len(), "Recovered from malformed markup");
        }
        Self { html }
    }

    /// The document node itself.
    pub fn root(&self) -> HtmlNode<'_> {
        HtmlNode::Document(&self.html)
    }

    /// Select all elements matching a CSS selector, in document order.
    ///
    /// A selector that fails to parse selects nothing.
    pub fn select(&self, path: &str) -> Vec<HtmlNode<'_>> {
        let selector = match Selector::parse(path) {
            Ok(selector) => selector,
            Err(err) => {
                tracing::warn!(path, error = %err, "Unparseable selector, selecting nothing");
                return Vec::new();
            }
        };

        self.html.select(&selector).map(HtmlNode::Element).collect()
    }
}

/// A node the resolver can capture from: the document itself or an element.
#[derive(Clone, Copy)]
pub enum HtmlNode<'a> {
    Document(&'a Html),
    Element(ElementRef<'a>),
}

impl std::fmt::Debug for HtmlNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HtmlNode(<{}>)", get_tag_name(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_in_document_order() {
        let doc = HtmlDocument::parse("<ul><li>a</li><li>b</li></ul><p><li>c</li></p>");
        let texts: Vec<String> = doc.select("li").into_iter().map(inner_text).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[test]
    fn test_select_no_match() {
        let doc = HtmlDocument::parse("<p>text</p>");
        assert!(doc.select("table").is_empty());
    }

    #[test]
    fn test_select_invalid_selector_selects_nothing() {
        let doc = HtmlDocument::parse("<p>text</p>");
        assert!(doc.select("p[").is_empty());
        assert!(doc.select("//p").is_empty());
    }

    #[test]
    fn test_root_is_document_node() {
        let doc = HtmlDocument::parse("<p>text</p>");
        assert_eq!(get_tag_name(doc.root()), "#document");
        assert!(inner_markup(doc.root()).contains("<p>text</p>"));
    }
}
