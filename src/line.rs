//! Line classification.
//!
//! Every non-blank line of TAML text is reduced to a depth, a key and an
//! optional value:
//!
//! - the depth is the number of leading tab characters;
//! - the rest of the line is split at its first tab: the key comes before it,
//!   the value after it;
//! - a line with no further tab has no value and opens a section.
//!
//! Blank and whitespace-only lines are dropped before depth tracking sees them.

/// One classified line of TAML text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based position in the source text.
    pub number: usize,
    /// Count of leading tab characters.
    pub depth: usize,
    pub key: &'a str,
    /// `None` when the line opens a section.
    pub value: Option<&'a str>,
}

impl<'a> Line<'a> {
    /// Classifies a single line, with any trailing `\r` already allowed for.
    ///
    /// Returns `None` for blank and whitespace-only lines.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use taml::line::Line;
    ///
    /// let line = Line::classify(1, "\t\tport\t8080").unwrap();
    /// assert_eq!(line.depth, 2);
    /// assert_eq!(line.key, "port");
    /// assert_eq!(line.value, Some("8080"));
    ///
    /// let section = Line::classify(2, "server\r").unwrap();
    /// assert_eq!(section.value, None);
    ///
    /// assert!(Line::classify(3, " \t ").is_none());
    /// ```
    #[must_use]
    pub fn classify(number: usize, raw: &'a str) -> Option<Self> {
        let raw = raw.trim_end_matches('\r');
        if raw.trim().is_empty() {
            return None;
        }

        let content = raw.trim_start_matches('\t');
        let depth = raw.len() - content.len();
        let (key, value) = match content.split_once('\t') {
            Some((key, value)) => (key, Some(value)),
            None => (content, None),
        };

        Some(Line {
            number,
            depth,
            key,
            value,
        })
    }

    /// Returns `true` if this line opens a section.
    #[inline]
    #[must_use]
    pub const fn opens_section(&self) -> bool {
        self.value.is_none()
    }
}

/// Iterates over the classified lines of `text`, skipping blank ones.
pub fn lines(text: &str) -> impl Iterator<Item = Line<'_>> {
    text.split('\n')
        .enumerate()
        .filter_map(|(index, raw)| Line::classify(index + 1, raw))
}
