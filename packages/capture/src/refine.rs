//! Regex refinement of captured text.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use regex::Regex;

use crate::error::{CaptureError, Result};
use crate::value::{Map, Value};

/// Applies optional patterns to captured text.
///
/// Compiled patterns are kept for the lifetime of the refiner, which is a
/// single resolution call. Patterns are compiled on first use, so an invalid
/// pattern only fails a call that actually needs it.
#[derive(Debug, Default)]
pub struct TextRefiner {
    compiled: HashMap<String, Regex>,
}

impl TextRefiner {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Refine `text` with an optional pattern.
    ///
    /// # Errors
    /// Returns `InvalidPattern` if the pattern does not compile.
    pub fn refine(&mut self, text: &str, pattern: Option<&str>) -> Result<Value> {
        let Some(pattern) = pattern else {
            return Ok(Value::String(text.to_string()));
        };

        let regex = self.compile(pattern)?;
        Ok(refine_with(regex, text))
    }

    fn compile(&mut self, pattern: &str) -> Result<&Regex> {
        match self.compiled.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let regex = Regex::new(pattern).map_err(|source| CaptureError::InvalidPattern {
                    pattern: pattern.to_string(),
                    source,
                })?;
                Ok(entry.insert(regex))
            }
        }
    }
}

/// Shape the first match of `regex` in `text` into a value.
///
/// - no match: `Undefined`
/// - a pattern without capture groups: the whole match as a string
/// - otherwise: an object of the *named* groups in definition order; unnamed
///   groups are never surfaced, so a pattern with only numbered groups yields
///   an empty object
///
/// Named groups that did not participate in the match map to an empty string.
///
/// # Examples
/// ```
/// use regex::Regex;
/// use webtools_capture::refine::refine_with;
/// use webtools_capture::Value;
///
/// let dashed = Regex::new(r"(?<a>\d+)-(?<b>\d+)").unwrap();
/// assert_eq!(refine_with(&dashed, "12-34"), Value::object([("a", "12"), ("b", "34")]));
///
/// let digits = Regex::new(r"\d+").unwrap();
/// assert_eq!(refine_with(&digits, "12-34"), Value::from("12"));
/// assert!(refine_with(&digits, "ab").is_undefined());
/// ```
pub fn refine_with(regex: &Regex, text: &str) -> Value {
    let Some(captures) = regex.captures(text) else {
        return Value::Undefined;
    };

    if regex.captures_len() == 1 {
        return captures
            .get(0)
            .map(|m| Value::String(m.as_str().to_string()))
            .unwrap_or_default();
    }

    let groups: Map = regex
        .capture_names()
        .flatten()
        .map(|name| {
            let text = captures.name(name).map(|m| m.as_str()).unwrap_or_default();
            (name.to_string(), Value::String(text.to_string()))
        })
        .collect();

    Value::Object(groups)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_no_pattern_returns_text_verbatim() {
        let mut refiner = TextRefiner::new();
        assert_eq!(
            refiner.refine("  <b>raw</b> ", None).unwrap(),
            Value::from("  <b>raw</b> ")
        );
    }

    #[test]
    fn test_named_groups_become_object() {
        let mut refiner = TextRefiner::new();
        let value = refiner
            .refine("12-34", Some(r"(?<a>\d+)-(?<b>\d+)"))
            .unwrap();
        assert_eq!(value, Value::object([("a", "12"), ("b", "34")]));
    }

    #[test]
    fn test_named_groups_keep_definition_order() {
        let mut refiner = TextRefiner::new();
        let value = refiner
            .refine("x=1 y=2", Some(r"y=(?<y>\d) ?|x=(?<x>\d) y=(?<later>\d)"))
            .unwrap();

        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["y", "x", "later"]);
        assert_eq!(value.get("y"), &Value::from(""));
        assert_eq!(value.get("x"), &Value::from("1"));
        assert_eq!(value.get("later"), &Value::from("2"));
    }

    #[test]
    fn test_plain_pattern_returns_first_whole_match() {
        let mut refiner = TextRefiner::new();
        assert_eq!(
            refiner.refine("12-34", Some(r"\d+")).unwrap(),
            Value::from("12")
        );
    }

    #[test]
    fn test_no_match_is_undefined() {
        let mut refiner = TextRefiner::new();
        assert!(refiner.refine("ab", Some(r"\d+")).unwrap().is_undefined());
    }

    #[test]
    fn test_numbered_groups_only_yield_empty_object() {
        let mut refiner = TextRefiner::new();
        let value = refiner.refine("12-34", Some(r"(\d+)-(\d+)")).unwrap();
        assert_eq!(value, Value::Object(Map::new()));
    }

    #[test]
    fn test_mixed_groups_surface_only_named() {
        let mut refiner = TextRefiner::new();
        let value = refiner
            .refine("id: 42 (draft)", Some(r"(\w+): (?<id>\d+) \((\w+)\)"))
            .unwrap();
        assert_eq!(value, Value::object([("id", "42")]));
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let mut refiner = TextRefiner::new();
        let err = refiner.refine("text", Some("(unclosed")).unwrap_err();
        assert!(matches!(err, CaptureError::InvalidPattern { ref pattern, .. } if pattern == "(unclosed"));
    }

    #[test]
    fn test_invalid_pattern_not_compiled_without_pattern_use() {
        let mut refiner = TextRefiner::new();
        assert!(refiner.refine("text", None).is_ok());
    }

    #[test]
    fn test_pattern_compiled_once() {
        let mut refiner = TextRefiner::new();
        refiner.refine("a1", Some(r"\d")).unwrap();
        refiner.refine("b2", Some(r"\d")).unwrap();
        assert_eq!(refiner.compiled.len(), 1);
    }
}
