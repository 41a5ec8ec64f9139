//! Capture resolution: turns a document and a capture set into one value.
//!
//! Missing data never raises an error. A node that lacks any requested
//! attribute, or whose text does not match the pattern, contributes nothing;
//! a capture whose value is undefined contributes no key.

use crate::config::is_pseudo_attribute;
use crate::error::Result;
use crate::html::{get_attribute, inner_markup, HtmlDocument, HtmlNode};
use crate::refine::TextRefiner;
use crate::special::resolve_special;
use crate::types::{Capture, CaptureSet};
use crate::value::{Map, Value};

/// Resolve every capture of `captures` against `document`.
///
/// # Returns
/// An object with one key per capture that produced a value, in capture
/// order, or `Undefined` when the capture set is empty.
///
/// # Errors
/// Returns `InvalidPattern` when a pattern that is needed fails to compile.
/// The error aborts the whole call.
pub fn resolve(document: &HtmlDocument, captures: &CaptureSet) -> Result<Value> {
    if captures.is_empty() {
        return Ok(Value::Undefined);
    }

    let mut refiner = TextRefiner::new();
    let mut result = Map::new();

    for capture in captures.captures() {
        let value = capture_entry(document, capture, &mut refiner)?;

        if value.is_undefined() {
            tracing::debug!(capture = %capture.name, "Capture produced no value, omitting");
            continue;
        }

        result.insert(capture.name.clone(), value);
    }

    Ok(Value::Object(result))
}

/// Resolve one capture.
///
/// Without paths the capture runs on the document root and its per-node
/// result is returned as is. With paths the per-node results of all selected
/// nodes are collected into an array, in path order then document order.
fn capture_entry(
    document: &HtmlDocument,
    capture: &Capture,
    refiner: &mut TextRefiner,
) -> Result<Value> {
    if capture.paths.is_empty() {
        return capture_in_node(document.root(), capture, refiner);
    }

    let mut items = Vec::new();

    for path in &capture.paths {
        let nodes = document.select(path);
        if nodes.is_empty() {
            tracing::debug!(capture = %capture.name, path = %path, "Path selected no nodes");
            continue;
        }

        for node in nodes {
            let value = capture_in_node(node, capture, refiner)?;
            if !value.is_undefined() {
                items.push(value);
            }
        }
    }

    Ok(Value::Array(items))
}

/// Compute the per-node result.
///
/// Without attributes this refines the raw inner markup. With attributes it
/// is all-or-nothing: the first attribute that cannot be resolved, or whose
/// value does not match the pattern, makes the whole node undefined.
fn capture_in_node(
    node: HtmlNode<'_>,
    capture: &Capture,
    refiner: &mut TextRefiner,
) -> Result<Value> {
    let pattern = capture.pattern.as_deref();

    if capture.attributes.is_empty() {
        return refiner.refine(&inner_markup(node), pattern);
    }

    let mut attributes = Map::new();

    for name in &capture.attributes {
        let value = if is_pseudo_attribute(name) {
            resolve_special(node, name)
        } else {
            get_attribute(node, name).map(String::from)
        };

        let Some(value) = value else {
            return Ok(Value::Undefined);
        };

        let refined = refiner.refine(&value, pattern)?;
        if refined.is_undefined() {
            return Ok(Value::Undefined);
        }

        attributes.insert(name.clone(), refined);
    }

    Ok(Value::Object(attributes))
}
