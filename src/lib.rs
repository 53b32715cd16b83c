//! # taml
//!
//! A parser, serializer and typed accessor layer for TAML, the tab-indented
//! configuration format.
//!
//! ## What is TAML?
//!
//! TAML is a minimal configuration format meant to be written by hand. A tab
//! separates each key from its value, and leading tabs nest lines under a
//! section:
//!
//! ```text
//! name	demo
//! server
//! 	host	localhost
//! 	port	8080
//! ```
//!
//! See the [`syntax`] module for the full format reference.
//!
//! ## Key Features
//!
//! - **Forgiving**: [`parse`] accepts any input; [`validate`](validate()) reports
//!   what looks wrong without failing
//! - **Case-insensitive keys**: lookups ignore case, output keeps the casing written
//! - **Typed reads**: [`Document::get_value`] coerces text to the requested type and
//!   falls back to the type's default
//! - **Flattening**: [`Document::flatten`] produces `section:key` paths for
//!   configuration consumers
//! - **Serde Compatible**: read and write `#[derive(Serialize, Deserialize)]` types
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! taml = "0.1"
//! ```
//!
//! ### Working with documents
//!
//! ```rust
//! use taml::{parse, Document};
//!
//! let doc = parse("name\tdemo\nserver\n\thost\tlocalhost\n\tport\t8080");
//!
//! assert_eq!(doc["NAME"], "demo");
//! let server = doc.get_section("server").unwrap();
//! assert_eq!(server.get_value::<u16>("port"), 8080);
//! assert_eq!(server.get_value::<u16>("missing"), 0);
//!
//! let flat = doc.flatten(None);
//! assert_eq!(flat["server:host"], "localhost");
//!
//! let mut copy = Document::new();
//! copy.set_value("name", "demo");
//! assert_eq!(copy.to_string(), "name\tdemo");
//! ```
//!
//! ### Serde
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use taml::{from_str, to_string};
//!
//! #[derive(Serialize, Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//! }
//!
//! let server = Server { host: "localhost".to_string(), port: 8080 };
//! let text = to_string(&server).unwrap();
//! assert_eq!(text, "host\tlocalhost\nport\t8080");
//!
//! let back: Server = from_str(&text).unwrap();
//! assert_eq!(back, server);
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (document loads and saves, parse
//! summaries, coercion fallbacks) and never installs a subscriber.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - parsing, reading and writing a document
//! - **`configuration.rs`** - flattened configuration through the provider
//! - **`typed_config.rs`** - loading a file into a serde struct
//!
//! Run any demo with: `cargo run --example <name>`

pub mod coerce;
pub mod de;
pub mod document;
pub mod error;
pub mod flatten;
pub mod fs;
pub mod line;
pub mod macros;
pub mod map;
pub mod options;
pub mod parser;
pub mod provider;
pub mod ser;
pub mod syntax;
pub mod validate;
pub mod value;

pub use coerce::Coerce;
pub use de::{from_document, from_value, Deserializer};
pub use document::Document;
pub use error::{Error, Result};
pub use flatten::{Flattened, KEY_DELIMITER};
pub use fs::{
    load_from_file, load_from_file_async, save_to_file, save_to_file_async,
    save_to_file_with_options, save_to_file_with_options_async,
};
pub use map::KeyMap;
pub use options::{LineEnding, TamlOptions};
pub use parser::{parse, parse_strict};
pub use provider::{ConfigurationProvider, TamlConfigurationProvider, TamlConfigurationSource};
pub use ser::{to_document, to_value, Serializer, ValueSerializer};
pub use validate::{validate, ValidationError, ValidationReport};
pub use value::{Scalar, Value};

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::io;

/// Serialize any `T: Serialize` to a TAML string.
///
/// `T` must serialize as a struct or map; see [`to_document`].
///
/// # Errors
///
/// Returns an error if the value has no document form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    to_string_with_options(value, TamlOptions::default())
}

/// Serialize any `T: Serialize` to a TAML string with custom options.
///
/// # Errors
///
/// Returns an error if the value has no document form.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: TamlOptions) -> Result<String>
where
    T: ?Sized + Serialize,
{
    let doc = to_document(value)?;
    Ok(ser::render(&doc, &options))
}

/// Serialize any `T: Serialize` to a writer in TAML format.
///
/// # Examples
///
/// ```rust
/// use taml::{parse, to_writer};
///
/// let doc = parse("a\t1");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"a\t1");
/// ```
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    to_writer_with_options(writer, value, TamlOptions::default())
}

/// Serialize any `T: Serialize` to a writer in TAML format with custom options.
///
/// # Errors
///
/// Returns an error if serialization fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: TamlOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Serialize,
{
    let text = to_string_with_options(value, options)?;
    writer
        .write_all(text.as_bytes())
        .map_err(|e| Error::io(&e.to_string()))?;
    Ok(())
}

/// Deserialize an instance of type `T` from TAML text.
///
/// The text is parsed with [`parse`] first, so malformed indentation never
/// fails here; only values that do not fit `T` do.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use taml::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("x\t1\ny\t2").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the document cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(s: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    from_document(parse(s))
}

/// Deserialize an instance of type `T` from an I/O stream of TAML.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use std::io::Cursor;
/// use taml::from_reader;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_reader(Cursor::new(b"x\t1\ny\t2")).unwrap();
/// assert_eq!(point, Point { x: 1, y: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if reading from the reader fails or the data cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut string = String::new();
    reader
        .read_to_string(&mut string)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&string)
}

/// Deserialize an instance of type `T` from bytes of TAML text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8 or cannot be deserialized
/// to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let s = std::str::from_utf8(v).map_err(|e| Error::custom(e.to_string()))?;
    from_str(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct User {
        id: u32,
        name: String,
        active: bool,
        tags: Vec<String>,
        manager: Option<String>,
    }

    fn alice() -> User {
        User {
            id: 123,
            name: "Alice".to_string(),
            active: true,
            tags: vec!["admin".to_string(), "user".to_string()],
            manager: None,
        }
    }

    #[test]
    fn test_serialize_deserialize_point() {
        let point = Point { x: 1, y: 2 };
        let text = to_string(&point).unwrap();
        assert_eq!(text, "x\t1\ny\t2");
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_serialize_deserialize_user() {
        let user = alice();
        let text = to_string(&user).unwrap();
        assert_eq!(
            text,
            "id\t123\nname\tAlice\nactive\ttrue\ntags\n\t0\tadmin\n\t1\tuser\nmanager\t"
        );

        let user_back: User = from_str(&text).unwrap();
        assert_eq!(user, user_back);
    }

    #[test]
    fn test_top_level_sequence_is_unsupported() {
        assert!(matches!(
            to_string(&vec![1, 2, 3]),
            Err(Error::UnsupportedType(_))
        ));
    }

    #[test]
    fn test_custom_options() {
        let options = TamlOptions::new()
            .with_line_ending(LineEnding::CrLf)
            .with_trailing_newline(true);

        let text = to_string_with_options(&Point { x: 1, y: 2 }, options).unwrap();
        assert_eq!(text, "x\t1\r\ny\t2\r\n");
        let point_back: Point = from_str(&text).unwrap();
        assert_eq!(point_back, Point { x: 1, y: 2 });
    }

    #[test]
    fn test_writer_and_slice() {
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &alice()).unwrap();
        let user: User = from_slice(&buffer).unwrap();
        assert_eq!(user, alice());

        assert!(from_slice::<Point>(&[0xff, 0xfe]).is_err());
    }

    #[test]
    fn test_document_serializes_as_itself() {
        let doc = parse("a\t1\nsection\n\tb\t2");
        assert_eq!(to_string(&doc).unwrap(), doc.to_string());
    }
}
