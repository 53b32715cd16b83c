//! Case-insensitive ordered map used for document keys and flattened output.
//!
//! [`KeyMap`] stores each entry under a folded (lower-cased) form of its key and
//! keeps the original spelling next to the value. Lookups fold the requested key
//! the same way, so `"Key"`, `"key"` and `"KEY"` all reach one entry, while
//! iteration and serialization still see the casing that was first written.
//!
//! Insertion order is preserved through [`IndexMap`], which keeps rendered
//! output deterministic.
//!
//! ## Examples
//!
//! ```rust
//! use taml::KeyMap;
//!
//! let mut map = KeyMap::new();
//! map.insert("Name", "Alice");
//! map.insert("AGE", "30");
//!
//! assert_eq!(map.get("name"), Some(&"Alice"));
//! assert_eq!(map.get("age"), Some(&"30"));
//! assert_eq!(map.keys().collect::<Vec<_>>(), vec!["Name", "AGE"]);
//! ```

use indexmap::IndexMap;
use std::collections::HashMap;
use std::ops::Index;

/// An insertion-ordered map with case-insensitive string keys.
///
/// Writing a key that matches an existing one case-insensitively replaces the
/// value in place; the first-seen spelling and position are kept.
///
/// # Examples
///
/// ```rust
/// use taml::KeyMap;
///
/// let mut map = KeyMap::new();
/// map.insert("Key", 1);
/// assert_eq!(map.insert("KEY", 2), Some(1));
///
/// assert_eq!(map.len(), 1);
/// assert_eq!(map["key"], 2);
/// assert_eq!(map.keys().next(), Some("Key"));
/// ```
#[derive(Debug, Clone)]
pub struct KeyMap<V> {
    entries: IndexMap<String, (String, V)>,
}

#[inline]
fn fold(key: &str) -> String {
    key.to_lowercase()
}

impl<V> KeyMap<V> {
    /// Creates an empty `KeyMap`.
    #[must_use]
    pub fn new() -> Self {
        KeyMap {
            entries: IndexMap::new(),
        }
    }

    /// Creates an empty `KeyMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        KeyMap {
            entries: IndexMap::with_capacity(capacity),
        }
    }

    /// Inserts a value, returning the previous value stored under an equal key.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        let folded = fold(&key);
        match self.entries.get_mut(&folded) {
            Some(slot) => Some(std::mem::replace(&mut slot.1, value)),
            None => {
                self.entries.insert(folded, (key, value));
                None
            }
        }
    }

    /// Returns a reference to the value stored under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries.get(&fold(key)).map(|(_, value)| value)
    }

    /// Returns a mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut V> {
        self.entries.get_mut(&fold(key)).map(|(_, value)| value)
    }

    /// Returns the stored spelling of `key` together with its value.
    #[must_use]
    pub fn get_key_value(&self, key: &str) -> Option<(&str, &V)> {
        self.entries
            .get(&fold(key))
            .map(|(original, value)| (original.as_str(), value))
    }

    /// Returns the value under `key`, inserting the result of `default` first if absent.
    pub fn get_or_insert_with<F>(&mut self, key: &str, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        &mut self
            .entries
            .entry(fold(key))
            .or_insert_with(|| (key.to_string(), default()))
            .1
    }

    /// Returns `true` if an entry exists under `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(&fold(key))
    }

    /// Removes the entry under `key`, preserving the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        self.entries
            .shift_remove(&fold(key))
            .map(|(_, value)| value)
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates over the stored keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.values().map(|(key, _)| key.as_str())
    }

    /// Iterates over the values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries.values().map(|(_, value)| value)
    }

    /// Iterates over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> + '_ {
        self.entries
            .values()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Iterates over `(key, value)` pairs with mutable values.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut V)> + '_ {
        self.entries
            .values_mut()
            .map(|(key, value)| (key.as_str(), value))
    }
}

impl<V> Default for KeyMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Maps are equal when they hold the same keys (compared case-insensitively)
/// with equal values. Order and key spelling do not matter.
impl<V: PartialEq> PartialEq for KeyMap<V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len()
            && self
                .entries
                .iter()
                .all(|(folded, (_, value))| match other.entries.get(folded) {
                    Some((_, theirs)) => value == theirs,
                    None => false,
                })
    }
}

impl<V> Index<&str> for KeyMap<V> {
    type Output = V;

    /// # Panics
    ///
    /// Panics if `key` is not present.
    fn index(&self, key: &str) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in KeyMap: {:?}", key),
        }
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for KeyMap<V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = KeyMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K: Into<String>, V> Extend<(K, V)> for KeyMap<V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<V> From<HashMap<String, V>> for KeyMap<V> {
    fn from(map: HashMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> From<IndexMap<String, V>> for KeyMap<V> {
    fn from(map: IndexMap<String, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<V> IntoIterator for KeyMap<V> {
    type Item = (String, V);
    type IntoIter = indexmap::map::IntoValues<String, (String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_values()
    }
}
