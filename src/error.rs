//! Error types for TAML documents.
//!
//! The core engine is forgiving: [`parse`](crate::parse), flattening and rendering
//! never fail, and typed reads through [`Document::get_value`](crate::Document::get_value)
//! fall back to a default instead of erroring. The variants below cover the few
//! places where a failure has to reach the caller.
//!
//! ## Error Categories
//!
//! - **Not found**: a load target does not exist
//! - **I/O errors**: any other file reading/writing failure
//! - **Syntax errors**: reported by the validator and [`parse_strict`](crate::parse_strict)
//! - **Type mismatches**: a typed (serde) read could not coerce a value
//!
//! ## Examples
//!
//! ```rust
//! use taml::{parse_strict, Error};
//!
//! let err = parse_strict("name\tJohn\n  age\t25").unwrap_err();
//! assert!(matches!(err, Error::Syntax { line: 2, .. }));
//! assert!(err.to_string().starts_with("Line 2: Indentation must use tabs"));
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Longest line excerpt shown in a syntax error before it is cut off.
const MAX_EXCERPT: usize = 50;

/// Represents all possible errors surfaced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// A document was loaded from a path that does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// IO error during reading or writing
    #[error("IO error: {0}")]
    Io(String),

    /// Structural problem in the text, with the offending line
    #[error("Line {line}: {msg}{}", excerpt(.line_text))]
    Syntax {
        line: usize,
        msg: String,
        line_text: Option<String>,
    },

    /// A value could not be coerced into the requested type
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// Unsupported shape for a TAML document
    #[error("Unsupported type: {0}")]
    UnsupportedType(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a not-found error for `path`.
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Error::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates a syntax error for a 1-based line number.
    ///
    /// When the line text is given it is shown under the message, cut to
    /// 50 characters.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Error;
    ///
    /// let err = Error::syntax(15, "Error with line and text", Some("invalid\tline"));
    /// assert_eq!(err.to_string(), "Line 15: Error with line and text\n  invalid\tline");
    /// ```
    pub fn syntax(line: usize, msg: &str, line_text: Option<&str>) -> Self {
        Error::Syntax {
            line,
            msg: msg.to_string(),
            line_text: line_text.map(str::to_string),
        }
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::Error;
    ///
    /// let err = Error::type_mismatch("integer", "section");
    /// assert!(err.to_string().contains("expected integer"));
    /// ```
    pub fn type_mismatch(expected: &str, found: &str) -> Self {
        Error::TypeMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }

    /// Creates an unsupported type error for shapes TAML cannot represent.
    pub fn unsupported_type(msg: &str) -> Self {
        Error::UnsupportedType(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for file reading/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Maps an I/O error raised while reading `path`, keeping not-found distinct.
    pub(crate) fn from_io(err: &std::io::Error, path: &Path) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Error::not_found(path)
        } else {
            Error::io(&format!("{}: {}", path.display(), err))
        }
    }

    /// Returns `true` if this error reports a missing file.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

/// The offending line shown under a syntax error message, if any.
fn excerpt(line_text: &Option<String>) -> String {
    match line_text {
        Some(text) if text.chars().count() > MAX_EXCERPT => {
            let cut: String = text.chars().take(MAX_EXCERPT).collect();
            format!("\n  {}...", cut)
        }
        Some(text) => format!("\n  {}", text),
        None => String::new(),
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl serde::de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
