//! Exposing a TAML file as flat configuration key/value pairs.
//!
//! A configuration system consumes settings as colon-separated paths such as
//! `server:port`. [`TamlConfigurationProvider`] loads a file, flattens it with
//! [`Document::flatten`], and answers lookups from the flattened map, ignoring
//! key case.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{ConfigurationProvider, TamlConfigurationProvider};
//!
//! let doc = taml::parse("server\n\thost\tlocalhost\n\tport\t8080");
//! let provider = TamlConfigurationProvider::from_document(&doc);
//!
//! assert_eq!(provider.try_get("Server:Port"), Some("8080"));
//! assert_eq!(provider.try_get("server:missing"), None);
//! ```

use crate::map::KeyMap;
use crate::{fs, Document, Result};
use std::path::{Path, PathBuf};

/// A source of flat configuration values.
pub trait ConfigurationProvider {
    /// Looks up `key`. A present key with a null value yields `None` as well;
    /// use [`keys`](Self::keys) to tell the two apart.
    fn try_get(&self, key: &str) -> Option<&str>;

    /// All keys currently held, in load order.
    fn keys(&self) -> Vec<&str>;

    /// (Re)reads the underlying data, replacing what was held.
    fn load(&mut self) -> Result<()>;
}

/// Describes where a [`TamlConfigurationProvider`] reads from.
///
/// # Examples
///
/// ```rust
/// use taml::{ConfigurationProvider, TamlConfigurationSource};
///
/// let mut provider = TamlConfigurationSource::new("missing.taml")
///     .optional(true)
///     .build();
/// provider.load().unwrap();
/// assert!(provider.keys().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TamlConfigurationSource {
    path: PathBuf,
    optional: bool,
}

impl TamlConfigurationSource {
    /// A required source reading `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        TamlConfigurationSource {
            path: path.into(),
            optional: false,
        }
    }

    /// Whether a missing file loads as empty instead of failing.
    #[must_use]
    pub fn optional(mut self, optional: bool) -> Self {
        self.optional = optional;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    /// Creates an empty provider for this source. Call
    /// [`load`](ConfigurationProvider::load) to read the file.
    pub fn build(self) -> TamlConfigurationProvider {
        TamlConfigurationProvider {
            source: Some(self),
            data: KeyMap::new(),
        }
    }
}

/// Flattened configuration read from a TAML document.
#[derive(Debug, Clone)]
pub struct TamlConfigurationProvider {
    source: Option<TamlConfigurationSource>,
    data: KeyMap<Option<String>>,
}

impl TamlConfigurationProvider {
    /// Builds a provider directly from an in-memory document.
    ///
    /// [`load`](ConfigurationProvider::load) is a no-op for such a provider.
    pub fn from_document(doc: &Document) -> Self {
        TamlConfigurationProvider {
            source: None,
            data: flatten_to_strings(doc),
        }
    }

    /// The flattened data, null leaves held as `None`.
    pub fn data(&self) -> &KeyMap<Option<String>> {
        &self.data
    }
}

fn flatten_to_strings(doc: &Document) -> KeyMap<Option<String>> {
    doc.flatten(None)
        .into_iter()
        .map(|(key, value)| (key, value.to_text()))
        .collect()
}

impl ConfigurationProvider for TamlConfigurationProvider {
    fn try_get(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(|value| value.as_deref())
    }

    fn keys(&self) -> Vec<&str> {
        self.data.keys().collect()
    }

    fn load(&mut self) -> Result<()> {
        let Some(source) = &self.source else {
            return Ok(());
        };

        let doc = match fs::load_from_file(&source.path) {
            Ok(doc) => doc,
            Err(err) if err.is_not_found() && source.optional => {
                tracing::debug!(
                    path = %source.path.display(),
                    "optional TAML configuration file not found"
                );
                Document::new()
            }
            Err(err) => return Err(err),
        };

        self.data = flatten_to_strings(&doc);
        tracing::debug!(
            path = %source.path.display(),
            entries = self.data.len(),
            "loaded TAML configuration"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{parse, Error, Value};

    #[test]
    fn test_lookups_ignore_case() {
        let doc = parse("Logging\n\tLevel\tDebug");
        let provider = TamlConfigurationProvider::from_document(&doc);

        assert_eq!(provider.try_get("logging:level"), Some("Debug"));
        assert_eq!(provider.try_get("LOGGING:LEVEL"), Some("Debug"));
        assert_eq!(provider.keys(), vec!["Logging:Level"]);
    }

    #[test]
    fn test_null_leaf_is_a_key_without_value() {
        let mut doc = Document::new();
        doc.set_value("unset", Value::Null);
        doc.set_value("count", 3);
        let provider = TamlConfigurationProvider::from_document(&doc);

        assert_eq!(provider.try_get("unset"), None);
        assert_eq!(provider.data().get("unset"), Some(&None));
        assert_eq!(provider.try_get("count"), Some("3"));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.taml");
        std::fs::write(&path, "app\n\tname\tdemo\n\tports\n\t\t0\t80\n\t\t1\t443").unwrap();

        let mut provider = TamlConfigurationSource::new(&path).build();
        provider.load().unwrap();

        assert_eq!(provider.try_get("app:name"), Some("demo"));
        assert_eq!(provider.try_get("app:ports:1"), Some("443"));
    }

    #[test]
    fn test_missing_required_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut provider = TamlConfigurationSource::new(dir.path().join("none.taml")).build();
        assert!(matches!(provider.load(), Err(Error::NotFound { .. })));
    }

    #[test]
    fn test_reload_replaces_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.taml");
        std::fs::write(&path, "a\t1").unwrap();

        let mut provider = TamlConfigurationSource::new(&path).optional(true).build();
        provider.load().unwrap();
        assert_eq!(provider.try_get("a"), Some("1"));

        std::fs::write(&path, "b\t2").unwrap();
        provider.load().unwrap();
        assert_eq!(provider.try_get("a"), None);
        assert_eq!(provider.try_get("b"), Some("2"));
    }
}
