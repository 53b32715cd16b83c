//! Tree construction from classified lines.
//!
//! The builder walks the lines once, keeping a stack of sections that are still
//! open. Before a line is stored, every open section at the same depth or deeper
//! is closed, so the line lands in its nearest shallower ancestor. Indentation is
//! therefore relative: a line indented several levels past its parent simply
//! becomes that parent's child, and no indentation error is ever raised here.
//! Use [`parse_strict`] to reject such input instead.

use crate::line::{lines, Line};
use crate::{validate, Document, Result, Value};

/// A section that has been opened but not yet attached to its parent.
struct OpenSection {
    depth: usize,
    key: String,
    doc: Document,
}

struct TreeBuilder {
    root: Document,
    open: Vec<OpenSection>,
}

impl TreeBuilder {
    fn new() -> Self {
        TreeBuilder {
            root: Document::new(),
            open: Vec::new(),
        }
    }

    /// The section new entries currently go into.
    fn current(&mut self) -> &mut Document {
        match self.open.last_mut() {
            Some(section) => &mut section.doc,
            None => &mut self.root,
        }
    }

    /// Closes the innermost open section, attaching it to its parent.
    fn close(&mut self) {
        if let Some(section) = self.open.pop() {
            self.current()
                .set_value(section.key, Value::Section(section.doc));
        }
    }

    fn push(&mut self, line: Line<'_>) {
        while self
            .open
            .last()
            .is_some_and(|section| section.depth >= line.depth)
        {
            self.close();
        }

        match line.value {
            Some(value) => self.current().set_value(line.key, value),
            None => self.open.push(OpenSection {
                depth: line.depth,
                key: line.key.to_string(),
                doc: Document::new(),
            }),
        }
    }

    fn finish(mut self) -> Document {
        while !self.open.is_empty() {
            self.close();
        }
        self.root
    }
}

/// Parses TAML text into a [`Document`].
///
/// Parsing is total: any input produces a document, and empty or
/// whitespace-only input produces an empty one. Values are kept as raw text
/// and interpreted on read.
///
/// # Examples
///
/// ```rust
/// use taml::parse;
///
/// let doc = parse("key\tvalue\nnumber\t42");
/// assert_eq!(doc["key"], "value");
/// assert_eq!(doc.get_value::<i32>("number"), 42);
///
/// let doc = parse("section\n\tkey\tvalue\n\tnumber\t42");
/// assert_eq!(doc.get_section("section").unwrap()["key"], "value");
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    let mut builder = TreeBuilder::new();
    let mut count = 0usize;

    for line in lines(text) {
        tracing::trace!(
            line = line.number,
            depth = line.depth,
            key = line.key,
            section = line.opens_section(),
            "classified line"
        );
        builder.push(line);
        count += 1;
    }

    let doc = builder.finish();
    tracing::debug!(lines = count, keys = doc.len(), "parsed TAML document");
    doc
}

/// Validates `text` and parses it only if no problems were found.
///
/// The first problem reported by [`validate`](crate::validate()) is returned as
/// [`Error::Syntax`](crate::Error::Syntax). Valid input yields the same
/// document as [`parse`].
///
/// # Examples
///
/// ```rust
/// use taml::parse_strict;
///
/// assert!(parse_strict("a\n\tb\t1").is_ok());
/// assert!(parse_strict("a\n\t\t\tb\t1").is_err());
/// ```
pub fn parse_strict(text: &str) -> Result<Document> {
    let report = validate::validate(text);
    match report.into_errors().into_iter().next() {
        Some(problem) => Err(problem.into()),
        None => Ok(parse(text)),
    }
}
