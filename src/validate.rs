//! Structural checks for hand-edited TAML.
//!
//! [`parse`](crate::parse) accepts anything. The validator points out the input
//! that parses in a way the author probably did not intend:
//!
//! - indentation written with spaces, or with spaces mixed into tabs;
//! - a line indented more than one level past the line before it;
//! - a value containing a further tab, usually a column-alignment slip.
//!
//! Every problem is collected; validation itself never fails.
//!
//! ## Examples
//!
//! ```rust
//! use taml::validate;
//!
//! assert!(validate("name\tJohn\nage\t25").is_valid());
//!
//! let report = validate("name\tJohn\n  age\t25");
//! assert!(!report.is_valid());
//! assert_eq!(report.errors()[0].line, 2);
//! ```

use crate::line::Line;
use crate::Error;
use std::fmt;

/// A single problem found by [`validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// 1-based line number.
    pub line: usize,
    pub line_text: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Line {}: {}", self.line, self.message)
    }
}

impl From<ValidationError> for Error {
    fn from(problem: ValidationError) -> Self {
        Error::syntax(problem.line, &problem.message, problem.line_text.as_deref())
    }
}

/// The outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<ValidationError>,
}

impl ValidationReport {
    /// Returns `true` if no problems were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The problems found, in line order.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }

    fn push(&mut self, line: usize, message: String, text: &str) {
        self.errors.push(ValidationError {
            message,
            line,
            line_text: Some(text.to_string()),
        });
    }
}

/// What the previous accepted line allows for the next one.
#[derive(Clone, Copy)]
struct Previous {
    depth: usize,
    opens_section: bool,
}

impl Previous {
    fn max_depth(previous: Option<Previous>) -> usize {
        match previous {
            Some(p) if p.opens_section => p.depth + 1,
            Some(p) => p.depth,
            None => 0,
        }
    }
}

/// Checks `text` and reports every structural problem found.
#[must_use]
pub fn validate(text: &str) -> ValidationReport {
    let mut report = ValidationReport::default();
    let mut previous: Option<Previous> = None;

    for (index, raw) in text.split('\n').enumerate() {
        let number = index + 1;
        let raw = raw.trim_end_matches('\r');
        if raw.trim().is_empty() {
            continue;
        }

        let indent = &raw[..raw.len() - raw.trim_start_matches([' ', '\t']).len()];
        if indent.contains(' ') {
            let message = if indent.contains('\t') {
                "Mixed spaces and tabs in indentation"
            } else {
                "Indentation must use tabs, not spaces"
            };
            report.push(number, message.to_string(), raw);
            continue;
        }

        let Some(line) = Line::classify(number, raw) else {
            continue;
        };

        let allowed = Previous::max_depth(previous);
        if line.depth > allowed {
            let from = previous.map_or(0, |p| p.depth);
            report.push(
                number,
                format!("Indentation jumps from level {} to level {}", from, line.depth),
                raw,
            );
        }

        if line.value.is_some_and(|value| value.contains('\t')) {
            report.push(
                number,
                "Value contains invalid tab character".to_string(),
                raw,
            );
        }

        previous = Some(Previous {
            depth: line.depth,
            opens_section: line.opens_section(),
        });
    }

    if !report.is_valid() {
        tracing::debug!(problems = report.errors.len(), "TAML validation failed");
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_document() {
        let report = validate("name\tJohn\nsection\n\tkey\tvalue\n\tnested\n\t\tdeep\t1\nafter\t2");
        assert!(report.is_valid(), "{:?}", report);
    }

    #[test]
    fn test_space_indentation() {
        let report = validate("name\tJohn\n  age\t25");
        assert_eq!(report.errors().len(), 1);

        let problem = &report.errors()[0];
        assert_eq!(problem.line, 2);
        assert_eq!(problem.message, "Indentation must use tabs, not spaces");
        assert_eq!(problem.line_text.as_deref(), Some("  age\t25"));
    }

    #[test]
    fn test_mixed_indentation() {
        let report = validate("section\n\t key\tvalue");
        assert_eq!(
            report.errors()[0].message,
            "Mixed spaces and tabs in indentation"
        );
    }

    #[test]
    fn test_indentation_jump() {
        let report = validate("section\n\t\t\tkey\tvalue");
        assert_eq!(report.errors().len(), 1);
        assert_eq!(
            report.errors()[0].message,
            "Indentation jumps from level 0 to level 3"
        );
    }

    #[test]
    fn test_child_of_scalar_line_is_a_jump() {
        let report = validate("key\tvalue\n\tchild\t1");
        assert_eq!(report.errors().len(), 1);
        assert_eq!(report.errors()[0].line, 2);
    }

    #[test]
    fn test_first_line_indented() {
        let report = validate("\tkey\tvalue");
        assert_eq!(
            report.errors()[0].message,
            "Indentation jumps from level 0 to level 1"
        );
    }

    #[test]
    fn test_value_with_tab() {
        let report = validate("key\t\tvalue");
        assert_eq!(report.errors()[0].message, "Value contains invalid tab character");
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        assert!(validate("a\t1\n\n   \nb\t2\r\n").is_valid());
    }

    #[test]
    fn test_repeated_carriage_returns_are_line_endings() {
        assert!(validate("s\r\r\n\tx\t1\r\r\ny\t2").is_valid());
    }

    #[test]
    fn test_into_error() {
        let problem = validate("  x\t1").into_errors().remove(0);
        let err: Error = problem.into();
        assert_eq!(
            err.to_string(),
            "Line 1: Indentation must use tabs, not spaces\n    x\t1"
        );
    }
}
