//! Projection of a document tree into colon-joined configuration paths.
//!
//! Sections contribute their keys as path segments and lists contribute the
//! zero-based index of each element, so
//!
//! ```text
//! server
//! 	host	localhost
//! ```
//!
//! flattens to `server:host = localhost`. Every leaf produces exactly one entry,
//! null leaves included. Empty sections and lists produce none.
//!
//! The result is a [`KeyMap`], so later lookups ignore case the way
//! configuration consumers expect.

use crate::{Document, KeyMap, Value};

/// Separator between path segments.
pub const KEY_DELIMITER: char = ':';

/// Flattened view of a document: colon paths to leaf values.
pub type Flattened = KeyMap<Value>;

/// Joins a parent path and a child segment.
fn join(prefix: Option<&str>, segment: &str) -> String {
    match prefix {
        Some(prefix) if !prefix.is_empty() => format!("{}{}{}", prefix, KEY_DELIMITER, segment),
        _ => segment.to_string(),
    }
}

fn flatten_value(path: String, value: &Value, out: &mut Flattened) {
    match value {
        Value::Section(doc) => flatten_into(doc, Some(&path), out),
        Value::List(items) => {
            for (index, item) in items.iter().enumerate() {
                flatten_value(join(Some(&path), &index.to_string()), item, out);
            }
        }
        leaf => {
            out.insert(path, leaf.clone());
        }
    }
}

fn flatten_into(doc: &Document, prefix: Option<&str>, out: &mut Flattened) {
    for (key, value) in doc.iter() {
        flatten_value(join(prefix, key), value, out);
    }
}

impl Document {
    /// Flattens the document into a single-level map keyed by colon paths.
    ///
    /// An optional `prefix` is joined in front of every path; an empty prefix
    /// is the same as none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{parse, Value};
    ///
    /// let doc = parse("section\n\tnested1\tvalue1\n\tnested2\tvalue2");
    /// let flat = doc.flatten(None);
    ///
    /// assert_eq!(flat.len(), 2);
    /// assert_eq!(flat["section:nested1"], "value1");
    /// assert_eq!(flat["SECTION:NESTED2"], "value2");
    ///
    /// let prefixed = doc.flatten(Some("app"));
    /// assert_eq!(prefixed["app:section:nested1"], "value1");
    /// ```
    #[must_use]
    pub fn flatten(&self, prefix: Option<&str>) -> Flattened {
        let mut out = KeyMap::with_capacity(self.len());
        flatten_into(self, prefix, &mut out);
        out
    }
}
