//! Capture specifications built from a caller's parameter block.

use crate::config::{ATTRIBUTES_KEY, CAPTURE_KEY, PATHS_KEY, PATTERN_KEY};
use crate::value::Value;

/// One named extraction rule.
///
/// Built fresh for every call from the caller's parameters and never mutated
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    /// Key of this capture in the result object.
    pub name: String,
    /// Selectors to evaluate; empty means "use the document root".
    pub paths: Vec<String>,
    /// Attributes to read per node; empty means "use the inner markup".
    pub attributes: Vec<String>,
    /// Optional refinement pattern.
    pub pattern: Option<String>,
}

impl Capture {
    /// Create a capture that returns the raw inner markup of the document root.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            paths: Vec::new(),
            attributes: Vec::new(),
            pattern: None,
        }
    }

    /// Add a selector.
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.paths.push(path.into());
        self
    }

    /// Add an attribute (or `::`-prefixed pseudo-attribute) to read.
    #[must_use]
    pub fn with_attribute(mut self, attribute: impl Into<String>) -> Self {
        self.attributes.push(attribute.into());
        self
    }

    /// Set the refinement pattern.
    #[must_use]
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Build a capture from its definition value.
    ///
    /// A definition that is not an object yields a capture with no paths, no
    /// attributes and no pattern.
    pub fn from_definition(name: impl Into<String>, definition: &Value) -> Self {
        Self {
            name: name.into(),
            paths: string_list(definition.get(PATHS_KEY)),
            attributes: string_list(definition.get(ATTRIBUTES_KEY)),
            pattern: definition.get(PATTERN_KEY).as_str().map(String::from),
        }
    }
}

/// Ordered list of captures parsed from a parameter block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaptureSet {
    captures: Vec<Capture>,
}

impl CaptureSet {
    /// Create a set from already-built captures.
    #[must_use]
    pub fn new(captures: Vec<Capture>) -> Self {
        Self { captures }
    }

    /// Parse the `capture` object of a parameter block.
    ///
    /// A missing or non-object `capture` entry yields an empty set.
    ///
    /// # Examples
    /// ```
    /// use webtools_capture::{CaptureSet, Value};
    ///
    /// let params: Value = serde_json::from_str(
    ///     r#"{"capture": {"links": {"paths": "a", "attributes": ["href", ""]}}}"#,
    /// ).unwrap();
    /// let set = CaptureSet::from_parameters(&params);
    ///
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.captures()[0].paths, ["a"]);
    /// assert_eq!(set.captures()[0].attributes, ["href"]);
    /// ```
    pub fn from_parameters(parameters: &Value) -> Self {
        let captures = parameters
            .get(CAPTURE_KEY)
            .as_object()
            .map(|entries| {
                entries
                    .iter()
                    .map(|(name, definition)| Capture::from_definition(name.as_str(), definition))
                    .collect()
            })
            .unwrap_or_default();

        Self { captures }
    }

    /// The captures in definition order.
    #[must_use]
    pub fn captures(&self) -> &[Capture] {
        &self.captures
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.captures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.captures.is_empty()
    }
}

/// Normalize a scalar-or-list parameter into a list of non-blank strings.
fn string_list(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => vec![s.clone()],
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.trim().is_empty())
            .map(String::from)
            .collect(),
        _ => Vec::new(),
    }
}
