//! Padding to a uniform width.

use crate::paragraph::width_in_bounds;
use crate::width::{self, display_width};
use crate::Paragraph;

impl Paragraph {
    /// Right-pads every line to exactly `width` columns using `fill` tiled
    /// character-by-character.
    ///
    /// Lines already at or beyond `width` are left alone; padding never
    /// truncates. The operation is the identity when `fill` is empty or
    /// zero-width, or when `width` is outside `[1, MAX_WIDTH]`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::Paragraph;
    ///
    /// let p = Paragraph::from_lines(["abc", "a"]).pad_right(".", 5);
    /// assert_eq!(p.lines(), ["abc..", "a...."]);
    /// ```
    pub fn pad_right(&self, fill: &str, width: usize) -> Paragraph {
        if display_width(fill) == 0 || !width_in_bounds(width) {
            return self.clone();
        }
        self.iter()
            .map(|line| width::pad_right(line, fill, width))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::{Paragraph, MAX_WIDTH};

    #[test]
    fn pads_every_line_to_exact_width() {
        let p = Paragraph::from_lines(["Ligne courte ¨", "Ceci est la troisième ligne"]);
        let padded = p.pad_right(".", 30);
        assert_eq!(
            padded.lines(),
            ["Ligne courte ¨................", "Ceci est la troisième ligne..."],
        );
    }

    #[test]
    fn multi_char_fill_tiles_with_partial_unit() {
        let p = Paragraph::from_text("Ligne courte ¨").pad_right("-.¨", 27);
        assert_eq!(p.lines(), ["Ligne courte ¨-.¨-.¨-.¨-.¨-"]);
    }

    #[test]
    fn overwide_lines_are_untouched() {
        let p = Paragraph::from_text("Ceci est la troisième ligne").pad_right(".", 10);
        assert_eq!(p.lines(), ["Ceci est la troisième ligne"]);
    }

    #[test]
    fn empty_fill_is_identity() {
        let p = Paragraph::from_lines(["a", "b"]);
        assert_eq!(p.pad_right("", 10), p);
    }

    #[test]
    fn out_of_bounds_width_is_identity() {
        let p = Paragraph::from_lines(["a", "b"]);
        assert_eq!(p.pad_right(".", 0), p);
        assert_eq!(p.pad_right(".", MAX_WIDTH + 10), p);
    }
}
