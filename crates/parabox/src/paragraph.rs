//! The [`Paragraph`] container: an ordered sequence of text lines.
//!
//! A paragraph is the unit every transformation in this crate operates on.
//! Lines never contain an embedded `'\n'`; splitting on newlines is how a
//! paragraph is built from raw text. All transformations borrow their input
//! and return a fresh value, so chains like
//! `p.limit(30).pad_right(".", 30).surround("(", ")")` never surprise the
//! caller by mutating `p`.

use std::fmt;

use crate::width::display_width;

/// Upper bound on the width accepted by the layout operations.
///
/// Operations given a width of zero or above this ceiling leave their input
/// unchanged instead of failing; layout is best-effort formatting, not a
/// contract that rejects bad input.
pub const MAX_WIDTH: usize = 1000;

/// Returns true when `width` is a usable layout width.
pub(crate) fn width_in_bounds(width: usize) -> bool {
    (1..=MAX_WIDTH).contains(&width)
}

/// An ordered sequence of text lines.
///
/// # Example
///
/// ```rust
/// use parabox::Paragraph;
///
/// let p = Paragraph::from_text("first line\nsecond");
/// assert_eq!(p.len(), 2);
/// assert_eq!(p.width(), 10);
/// assert_eq!(p.join(" | "), "first line | second");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Paragraph {
    lines: Vec<String>,
}

impl Paragraph {
    /// Creates an empty paragraph.
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Creates an empty paragraph with room for `capacity` lines.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            lines: Vec::with_capacity(capacity),
        }
    }

    /// Creates a paragraph of `count` copies of `line`.
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let rule = Paragraph::repeat("----", 3);
    /// assert_eq!(rule.join("\n"), "----\n----\n----");
    /// ```
    pub fn repeat(line: impl Into<String>, count: usize) -> Self {
        let line = line.into();
        Self {
            lines: vec![line; count],
        }
    }

    /// Creates a paragraph from any sequence of strings.
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates a paragraph by splitting `text` at each newline.
    ///
    /// The empty string produces a single empty line, mirroring how a text
    /// file with no newline still has one (empty) line.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.split('\n').map(String::from).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// True when the paragraph has no lines at all.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The lines as a slice.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Iterates over the lines.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Appends one line.
    pub fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    /// The display width of the widest line, in terminal columns.
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let p = Paragraph::from_lines(["abcde12345", "", "¨", "世界"]);
    /// assert_eq!(p.width(), 10);
    /// ```
    pub fn width(&self) -> usize {
        self.lines
            .iter()
            .map(|line| display_width(line))
            .max()
            .unwrap_or(0)
    }

    /// Joins the lines with `separator` placed between them.
    ///
    /// `Paragraph::from_text(p.join("\n"))` reproduces `p` exactly.
    pub fn join(&self, separator: &str) -> String {
        self.lines.join(separator)
    }

    /// Returns a copy with the lines in lexicographic (byte) order.
    pub fn sorted(&self) -> Paragraph {
        let mut lines = self.lines.clone();
        lines.sort_unstable();
        Paragraph { lines }
    }

    /// Returns a copy with `other`'s lines appended after this paragraph's.
    pub fn concat(&self, other: &Paragraph) -> Paragraph {
        let mut lines = Vec::with_capacity(self.lines.len() + other.lines.len());
        lines.extend_from_slice(&self.lines);
        lines.extend_from_slice(&other.lines);
        Paragraph { lines }
    }

    /// Prepends `left` and appends `right` to every line, verbatim.
    ///
    /// No width math happens here; this is how uniform outer margins are
    /// built before boxing.
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let p = Paragraph::from_lines(["a", "b"]).surround("(", ")");
    /// assert_eq!(p.lines(), ["(a)", "(b)"]);
    /// ```
    pub fn surround(&self, left: &str, right: &str) -> Paragraph {
        self.lines
            .iter()
            .map(|line| format!("{left}{line}{right}"))
            .collect()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("\n"))
    }
}

impl From<Vec<String>> for Paragraph {
    fn from(lines: Vec<String>) -> Self {
        Self { lines }
    }
}

impl FromIterator<String> for Paragraph {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().collect(),
        }
    }
}

impl<'a> FromIterator<&'a str> for Paragraph {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            lines: iter.into_iter().map(String::from).collect(),
        }
    }
}

impl IntoIterator for Paragraph {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}

impl<'a> IntoIterator for &'a Paragraph {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
