//! Pseudo-attributes computed from form control state.
//!
//! Dispatch is a closed table keyed by pseudo-attribute and control kind.
//! Anything outside the table resolves to `None`, never to an error.

use crate::config::VALUE_PSEUDO_ATTRIBUTE;
use crate::html::{child_elements, get_attribute, get_tag_name, has_attribute, inner_text, HtmlNode};

/// Known pseudo-attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoAttribute {
    /// `::value`, the effective submitted value of a form control.
    Value,
}

impl PseudoAttribute {
    /// Parse a full pseudo-attribute name, prefix included.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            VALUE_PSEUDO_ATTRIBUTE => Some(Self::Value),
            _ => None,
        }
    }
}

/// Form control kinds with a computable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormControl {
    Input,
    TextArea,
    Select,
}

impl FormControl {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "input" => Some(Self::Input),
            "textarea" => Some(Self::TextArea),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}

/// Resolve a pseudo-attribute on a node.
///
/// # Returns
/// The computed value, or `None` when the pseudo-attribute is unknown, the
/// node is not a supported form control, or the control has no value (an
/// unchecked checkbox, a `select` without options).
///
/// # Examples
/// ```
/// use webtools_capture::html::HtmlDocument;
/// use webtools_capture::special::resolve_special;
///
/// let doc = HtmlDocument::parse(r#"<input type="checkbox" value="x" checked>"#);
/// let input = doc.select("input")[0];
/// assert_eq!(resolve_special(input, "::value"), Some("x".to_string()));
/// ```
pub fn resolve_special(node: HtmlNode<'_>, name: &str) -> Option<String> {
    let attribute = PseudoAttribute::parse(name)?;
    let control = FormControl::from_tag(get_tag_name(node))?;

    match (attribute, control) {
        (PseudoAttribute::Value, FormControl::Input | FormControl::TextArea) => input_value(node),
        (PseudoAttribute::Value, FormControl::Select) => select_value(node),
    }
}

/// Value of an `input` or `textarea`.
///
/// Radio buttons and checkboxes only have a value while checked.
fn input_value(node: HtmlNode<'_>) -> Option<String> {
    let checkable = get_attribute(node, "type")
        .is_some_and(|t| t.eq_ignore_ascii_case("radio") || t.eq_ignore_ascii_case("checkbox"));

    if checkable && !has_attribute(node, "checked") {
        return None;
    }

    Some(literal_value(node))
}

/// Value of the selected `option`, or of the first one when none is selected.
fn select_value(node: HtmlNode<'_>) -> Option<String> {
    let options: Vec<HtmlNode<'_>> = child_elements(node)
        .into_iter()
        .filter(|child| get_tag_name(*child) == "option")
        .collect();

    let option = options
        .iter()
        .find(|option| has_attribute(**option, "selected"))
        .or_else(|| options.first())?;

    Some(literal_value(*option))
}

/// The `value` attribute, falling back to the text content.
fn literal_value(node: HtmlNode<'_>) -> String {
    get_attribute(node, "value")
        .map(String::from)
        .unwrap_or_else(|| inner_text(node))
}
