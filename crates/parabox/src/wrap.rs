//! Width-limiting transformations: hard truncation and word-aware reflow.

use crate::width::{clip_to_width, display_width, split_at_nearest_space};
use crate::Paragraph;

impl Paragraph {
    /// Truncates every line wider than `max_width` columns.
    ///
    /// This is lossy: the clipped tail is discarded. Lines that fit pass
    /// through unchanged, and the output always has the same line count as
    /// the input. A `max_width` of zero is the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let p = Paragraph::from_lines([
    ///     "Ceci est une ligne relativement longue",
    ///     "Ligne courte ¨",
    /// ]);
    /// assert_eq!(p.cut(10).lines(), ["Ceci est u", "Ligne cour"]);
    /// assert_eq!(p.cut(0), p);
    /// ```
    pub fn cut(&self, max_width: usize) -> Paragraph {
        if max_width == 0 {
            return self.clone();
        }
        self.iter()
            .map(|line| {
                if display_width(line) > max_width {
                    clip_to_width(line, max_width).to_string()
                } else {
                    line.clone()
                }
            })
            .collect()
    }

    /// Reflows every line wider than `max_width` columns by splitting at
    /// word boundaries.
    ///
    /// Unlike [`cut`](Self::cut) this is lossless: a long line expands into
    /// several lines rather than losing its tail, so the output line count
    /// is at least the input's. Short lines pass through as-is, including
    /// empty lines, which stay a single empty line. A `max_width` of zero
    /// is the identity.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let p = Paragraph::from_text("Ceci est une  ligne relativement longue");
    /// assert_eq!(
    ///     p.limit(30).lines(),
    ///     ["Ceci est une  ligne", "relativement longue"],
    /// );
    /// ```
    pub fn limit(&self, max_width: usize) -> Paragraph {
        if max_width == 0 {
            return self.clone();
        }
        let mut out = Paragraph::with_capacity(self.len());
        for line in self.iter() {
            let mut rest: &str = line;
            while display_width(rest) > max_width {
                let (head, tail) = split_at_nearest_space(rest, max_width);
                out.push(head);
                rest = tail;
            }
            out.push(rest);
        }
        out
    }
}
