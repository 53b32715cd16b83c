//! Loading and saving documents on disk.
//!
//! Each operation comes in a blocking form built on `std::fs` and an `_async`
//! form built on `tokio::fs`. The async forms only await the file I/O itself;
//! parsing and rendering run synchronously once the bytes are in memory.
//!
//! A missing file on load is reported as [`Error::NotFound`]. Saving creates
//! the file or replaces its contents.

use crate::{parser, ser, Document, Error, Result, TamlOptions};
use std::path::Path;

fn decode(bytes: Vec<u8>, path: &Path) -> Result<String> {
    String::from_utf8(bytes)
        .map_err(|e| Error::io(&format!("{}: invalid UTF-8: {}", path.display(), e)))
}

/// Reads and parses the file at `path`.
///
/// # Examples
///
/// ```rust
/// use taml::load_from_file;
///
/// let err = load_from_file("does/not/exist.taml").unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn load_from_file(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::from_io(&e, path))?;
    let size = bytes.len();
    let doc = parser::parse(&decode(bytes, path)?);
    tracing::debug!(path = %path.display(), bytes = size, "loaded TAML document");
    Ok(doc)
}

/// Async variant of [`load_from_file`].
pub async fn load_from_file_async(path: impl AsRef<Path>) -> Result<Document> {
    let path = path.as_ref();
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::from_io(&e, path))?;
    let size = bytes.len();
    let doc = parser::parse(&decode(bytes, path)?);
    tracing::debug!(path = %path.display(), bytes = size, "loaded TAML document");
    Ok(doc)
}

/// Renders `doc` with default options and writes it to `path`.
pub fn save_to_file(path: impl AsRef<Path>, doc: &Document) -> Result<()> {
    save_to_file_with_options(path, doc, &TamlOptions::default())
}

pub fn save_to_file_with_options(
    path: impl AsRef<Path>,
    doc: &Document,
    options: &TamlOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = ser::render(doc, options);
    std::fs::write(path, text.as_bytes()).map_err(|e| write_error(&e, path))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved TAML document");
    Ok(())
}

/// Async variant of [`save_to_file`].
pub async fn save_to_file_async(path: impl AsRef<Path>, doc: &Document) -> Result<()> {
    save_to_file_with_options_async(path, doc, &TamlOptions::default()).await
}

pub async fn save_to_file_with_options_async(
    path: impl AsRef<Path>,
    doc: &Document,
    options: &TamlOptions,
) -> Result<()> {
    let path = path.as_ref();
    let text = ser::render(doc, options);
    tokio::fs::write(path, text.as_bytes())
        .await
        .map_err(|e| write_error(&e, path))?;
    tracing::debug!(path = %path.display(), bytes = text.len(), "saved TAML document");
    Ok(())
}

/// A failed write is always an I/O error, even when a parent directory is missing.
fn write_error(err: &std::io::Error, path: &Path) -> Error {
    Error::io(&format!("{}: {}", path.display(), err))
}

impl Document {
    /// Loads a document from `path`. See [`load_from_file`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        load_from_file(path)
    }

    /// Saves the document to `path`. See [`save_to_file`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_to_file(path, self)
    }
}
