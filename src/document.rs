//! The public value store wrapped around a TAML tree.
//!
//! A [`Document`] owns a case-insensitive, insertion-ordered map from keys to
//! [`Value`]s. Nested sections are themselves documents, owned exclusively by
//! their parent.
//!
//! Reads never fail: a missing key indexes to [`Value::Null`], typed reads fall
//! back to the type's default, and [`Document::get_section`] returns `None` for
//! anything that is not a section.
//!
//! A `Document` is an ordinary owned tree with no interior locking. Share one
//! across threads behind your own `Mutex`/`RwLock`.
//!
//! ## Examples
//!
//! ```rust
//! use taml::Document;
//!
//! let doc = Document::parse("name\tapp\nserver\n\thost\tlocalhost\n\tport\t8080");
//!
//! assert_eq!(doc["name"], "app");
//! assert_eq!(doc["NAME"], "app");
//!
//! let server = doc.get_section("server").unwrap();
//! assert_eq!(server.get_value::<u16>("port"), 8080);
//! assert_eq!(server.get_value::<u16>("missing"), 0);
//! ```

use crate::coerce::Coerce;
use crate::{KeyMap, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::ops::{Index, IndexMut};

static NULL: Value = Value::Null;

/// A TAML document: a case-insensitive map from keys to values.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    entries: KeyMap<Value>,
}

impl Document {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Document {
            entries: KeyMap::new(),
        }
    }

    /// Parses TAML text into a document. See [`crate::parse`].
    #[must_use]
    pub fn parse(text: &str) -> Self {
        crate::parser::parse(text)
    }

    /// Returns the value stored under `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Returns a mutable reference to the value stored under `key`, if any.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.entries.get_mut(key)
    }

    /// Looks up `key`, reporting whether it was found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{Document, Value};
    ///
    /// let mut doc = Document::new();
    /// doc.set_value("key", "value");
    ///
    /// assert_eq!(doc.try_get_value("KEY"), Some(&Value::from("value")));
    /// assert_eq!(doc.try_get_value("nonexistent"), None);
    /// ```
    #[must_use]
    pub fn try_get_value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Reads `key` as `T`, falling back to `T::default()` when the key is absent
    /// or its value does not convert.
    ///
    /// The stored value is returned as-is when it already has the requested
    /// type; otherwise its canonical text is parsed as `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Document;
    ///
    /// let mut doc = Document::new();
    /// doc.set_value("number", "42");
    /// doc.set_value("word", "not a number");
    /// doc.set_value("answer", 42);
    ///
    /// assert_eq!(doc.get_value::<i32>("number"), 42);
    /// assert_eq!(doc.get_value::<i32>("word"), 0);
    /// assert_eq!(doc.get_value::<i32>("absent"), 0);
    /// assert_eq!(doc.get_value::<String>("answer"), "42");
    /// ```
    #[must_use]
    pub fn get_value<T>(&self, key: &str) -> T
    where
        T: Coerce + Default,
    {
        self.get_value_or(key, T::default())
    }

    /// Reads `key` as `T`, falling back to `default` when absent or unconvertible.
    #[must_use]
    pub fn get_value_or<T>(&self, key: &str, default: T) -> T
    where
        T: Coerce,
    {
        match self.entries.get(key) {
            Some(value) => match T::coerce(value) {
                Some(converted) => converted,
                None => {
                    tracing::trace!(
                        key,
                        found = value.kind(),
                        ty = std::any::type_name::<T>(),
                        "value did not convert, using default"
                    );
                    default
                }
            },
            None => default,
        }
    }

    /// Stores `value` under `key`, replacing any existing value.
    ///
    /// `Value::Null` is stored verbatim; the key stays present.
    pub fn set_value(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key, value.into());
    }

    /// Stores `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key, value.into())
    }

    /// Removes `key`, returning its value.
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    /// Returns `true` if `key` is present, even when it holds null.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the top-level keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.keys()
    }

    /// Returns the nested document under `key` if that value is a section.
    ///
    /// Missing keys and non-section values both yield `None`.
    #[must_use]
    pub fn get_section(&self, key: &str) -> Option<&Document> {
        self.entries.get(key).and_then(Value::as_section)
    }

    /// Mutable counterpart of [`Document::get_section`].
    pub fn get_section_mut(&mut self, key: &str) -> Option<&mut Document> {
        self.entries.get_mut(key).and_then(Value::as_section_mut)
    }

    /// Returns the number of top-level entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over top-level `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> + '_ {
        self.entries.iter()
    }

    /// Iterates over top-level pairs with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut Value)> + '_ {
        self.entries.iter_mut()
    }

    /// Borrows the underlying map.
    #[must_use]
    pub fn entries(&self) -> &KeyMap<Value> {
        &self.entries
    }

    /// Consumes the document, returning the underlying map.
    #[must_use]
    pub fn into_entries(self) -> KeyMap<Value> {
        self.entries
    }
}

impl Index<&str> for Document {
    type Output = Value;

    /// Missing keys index to [`Value::Null`].
    fn index(&self, key: &str) -> &Value {
        self.entries.get(key).unwrap_or(&NULL)
    }
}

impl IndexMut<&str> for Document {
    /// Missing keys are inserted as [`Value::Null`] first, so assignment
    /// through the index inserts or overwrites.
    fn index_mut(&mut self, key: &str) -> &mut Value {
        self.entries.get_or_insert_with(key, || Value::Null)
    }
}

/// Renders the document as TAML text with default options.
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::render(self, &crate::TamlOptions::default()))
    }
}

impl From<KeyMap<Value>> for Document {
    fn from(entries: KeyMap<Value>) -> Self {
        Document { entries }
    }
}

impl<V: Into<Value>> From<HashMap<String, V>> for Document {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V: Into<Value>> From<IndexMap<String, V>> for Document {
    fn from(map: IndexMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut doc = Document::new();
        doc.extend(iter);
        doc
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Document {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set_value(key, value);
        }
    }
}

impl IntoIterator for Document {
    type Item = (String, Value);
    type IntoIter = <KeyMap<Value> as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Section(doc) => Ok(doc),
            Value::Null => Ok(Document::new()),
            other => Err(serde::de::Error::custom(format!(
                "expected a map for a TAML document, found {}",
                other.kind()
            ))),
        }
    }
}
