//! Utility functions for reading data from HTML nodes.

use scraper::ElementRef;

use super::HtmlNode;
use crate::config::DOCUMENT_TAG_NAME;

/// Get the lowercase tag name of a node.
///
/// The document node reports `#document`.
pub fn get_tag_name<'a>(node: HtmlNode<'a>) -> &'a str {
    match node {
        HtmlNode::Document(_) => DOCUMENT_TAG_NAME,
        HtmlNode::Element(el) => el.value().name(),
    }
}

/// Get an attribute value from a node.
///
/// Attribute names are matched case-insensitively. The document node has no
/// attributes.
///
/// # Returns
/// Attribute value, or `None` if not present
pub fn get_attribute<'a>(node: HtmlNode<'a>, name: &str) -> Option<&'a str> {
    match node {
        HtmlNode::Document(_) => None,
        HtmlNode::Element(el) => el
            .value()
            .attrs()
            .find(|(attr, _)| attr.eq_ignore_ascii_case(name))
            .map(|(_, value)| value),
    }
}

/// Check whether a node carries an attribute, whatever its value.
///
/// Used for boolean markers such as `checked` and `selected`.
pub fn has_attribute(node: HtmlNode<'_>, name: &str) -> bool {
    get_attribute(node, name).is_some()
}

/// Serialize the markup inside a node, tags included.
pub fn inner_markup(node: HtmlNode<'_>) -> String {
    match node {
        HtmlNode::Document(html) => html.html(),
        HtmlNode::Element(el) => el.inner_html(),
    }
}

/// Concatenate all text inside a node, without tags.
pub fn inner_text(node: HtmlNode<'_>) -> String {
    match node {
        HtmlNode::Document(html) => html.root_element().text().collect(),
        HtmlNode::Element(el) => el.text().collect(),
    }
}

/// Get the element children of a node, skipping text and comments.
pub fn child_elements(node: HtmlNode<'_>) -> Vec<HtmlNode<'_>> {
    let children = match node {
        HtmlNode::Document(html) => html.tree.root().children(),
        HtmlNode::Element(el) => el.children(),
    };

    children
        .filter_map(ElementRef::wrap)
        .map(HtmlNode::Element)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::html::HtmlDocument;

    fn first<'a>(doc: &'a HtmlDocument, path: &str) -> HtmlNode<'a> {
        doc.select(path).into_iter().next().unwrap()
    }

    #[test]
    fn test_get_tag_name() {
        let doc = HtmlDocument::parse("<DIV><Span>x</Span></DIV>");
        assert_eq!(get_tag_name(first(&doc, "div")), "div");
        assert_eq!(get_tag_name(first(&doc, "span")), "span");
    }

    #[test]
    fn test_get_attribute() {
        let doc = HtmlDocument::parse(r#"<a href="/home" data-id="7">home</a>"#);
        let a = first(&doc, "a");

        assert_eq!(get_attribute(a, "href"), Some("/home"));
        assert_eq!(get_attribute(a, "HREF"), Some("/home"));
        assert_eq!(get_attribute(a, "data-id"), Some("7"));
        assert_eq!(get_attribute(a, "title"), None);
        assert_eq!(get_attribute(doc.root(), "href"), None);
    }

    #[test]
    fn test_has_attribute_for_boolean_markers() {
        let doc = HtmlDocument::parse(r#"<input type="checkbox" checked><input type="radio">"#);
        let inputs = doc.select("input");

        assert!(has_attribute(inputs[0], "checked"));
        assert!(!has_attribute(inputs[1], "checked"));
    }

    #[test]
    fn test_inner_markup_keeps_tags() {
        let doc = HtmlDocument::parse("<p>Hello <b>world</b>!</p>");
        assert_eq!(inner_markup(first(&doc, "p")), "Hello <b>world</b>!");
    }

    #[test]
    fn test_inner_text_strips_tags() {
        let doc = HtmlDocument::parse("<p>Hello <b>world</b>!</p>");
        assert_eq!(inner_text(first(&doc, "p")), "Hello world!");
    }

    #[test]
    fn test_child_elements() {
        let doc = HtmlDocument::parse("<select>text<option>a</option><option>b</option></select>");
        let children = child_elements(first(&doc, "select"));

        assert_eq!(children.len(), 2);
        assert!(children.iter().all(|c| get_tag_name(*c) == "option"));
    }

    #[test]
    fn test_document_children_is_html_element() {
        let doc = HtmlDocument::parse("<p>x</p>");
        let children = child_elements(doc.root());

        assert_eq!(children.len(), 1);
        assert_eq!(get_tag_name(children[0]), "html");
    }
}
