//! Configuration options for TAML output.
//!
//! The text format itself is fixed (one tab per level, one tab between key and
//! value). [`TamlOptions`] only controls how lines are terminated.
//!
//! ## Examples
//!
//! ```rust
//! use taml::{to_string_with_options, Document, LineEnding, TamlOptions};
//!
//! let mut doc = Document::new();
//! doc.set_value("a", "1");
//! doc.set_value("b", "2");
//!
//! let options = TamlOptions::new()
//!     .with_line_ending(LineEnding::CrLf)
//!     .with_trailing_newline(true);
//! assert_eq!(to_string_with_options(&doc, options).unwrap(), "a\t1\r\nb\t2\r\n");
//! ```

/// Line terminator written between lines.
///
/// # Examples
///
/// ```rust
/// use taml::LineEnding;
///
/// assert_eq!(LineEnding::Lf.as_str(), "\n");
/// assert_eq!(LineEnding::CrLf.as_str(), "\r\n");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf,
}

impl LineEnding {
    /// Returns the string representation of this line ending.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }
}

/// Configuration options for TAML serialization.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TamlOptions {
    pub line_ending: LineEnding,
    /// Terminate the last line as well.
    pub trailing_newline: bool,
}

impl TamlOptions {
    /// Creates default options (`\n` between lines, no trailing newline).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::{LineEnding, TamlOptions};
    ///
    /// let options = TamlOptions::new();
    /// assert_eq!(options.line_ending, LineEnding::Lf);
    /// assert!(!options.trailing_newline);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the line terminator.
    #[must_use]
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Sets whether the output ends with a line terminator.
    #[must_use]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}
