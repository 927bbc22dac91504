//! Tall curly-brace decorations.
//!
//! An accolade is a multi-line brace drawn down both sides of a paragraph.
//! The glyph picked for each line depends on the total line count: the top
//! and bottom lines get curls, one or two middle lines form the waist that
//! visually centers the brace, and everything in between gets a vertical
//! bar. Small paragraphs have hand-tuned shapes.

use std::fmt;
use std::str::FromStr;

use crate::boxes::ParseStyleError;
use crate::Paragraph;

/// Which glyph vocabulary the brace is drawn with.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AccoladeStyle {
    /// Draw nothing; decorating with this style is a no-op.
    #[default]
    None,
    /// Slashes, angle brackets, and an eighth-block bar.
    Ascii,
    /// The Unicode curly-bracket section glyphs (`⎧⎪⎨⎩` family).
    Unicode,
}

impl AccoladeStyle {
    const ALL: [AccoladeStyle; 3] = [
        AccoladeStyle::None,
        AccoladeStyle::Ascii,
        AccoladeStyle::Unicode,
    ];

    fn name(self) -> &'static str {
        match self {
            AccoladeStyle::None => "None",
            AccoladeStyle::Ascii => "Ascii",
            AccoladeStyle::Unicode => "Unicode",
        }
    }
}

impl fmt::Display for AccoladeStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AccoladeStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// Left and right glyph columns for a paragraph of `len` lines, in the
/// Unicode vocabulary.
///
/// Shapes for up to four lines are hand-tuned; from five lines on, the
/// waist pair sits at `(len - 2) / 2`.
fn unicode_rails(len: usize) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut left = vec![""; len];
    let mut right = vec![""; len];
    match len {
        0 => {}
        1 => {
            left[0] = "{";
            right[0] = "}";
        }
        2 => {
            left[0] = "⎰";
            left[1] = "⎱";
            right[0] = "⎱";
            right[1] = "⎰";
        }
        3 => {
            left[0] = "⎧";
            left[1] = "⎫";
            left[2] = "⎩";
            right[0] = "⎫";
            right[1] = "⎧";
            right[2] = "⎭";
        }
        4 => {
            left[0] = "⎧";
            left[1] = "⎭";
            left[2] = "⎫";
            left[3] = "⎩";
            right[0] = "⎫";
            right[1] = "⎩";
            right[2] = "⎧";
            right[3] = "⎭";
        }
        _ => {
            let p = (len - 2) / 2;
            left[0] = "⎧";
            left[p] = "⎭";
            left[p + 1] = "⎫";
            left[len - 1] = "⎩";
            right[0] = "⎫";
            right[p] = "⎩";
            right[p + 1] = "⎧";
            right[len - 1] = "⎭";
            for i in 1..len - 1 {
                if left[i].is_empty() {
                    left[i] = "⎪";
                    right[i] = "⎪";
                }
            }
        }
    }
    (left, right)
}

/// Left and right glyph columns in the Ascii vocabulary.
///
/// Unlike the Unicode shape this one has a single waist line, and from four
/// lines on it sits at `1 + (len - 2) / 2`, one lower than the Unicode
/// waist. The two vocabularies center differently on purpose; keep the
/// offsets distinct.
fn ascii_rails(len: usize) -> (Vec<&'static str>, Vec<&'static str>) {
    let mut left = vec![""; len];
    let mut right = vec![""; len];
    match len {
        0 => {}
        1 => {
            left[0] = "<";
            right[0] = ">";
        }
        2 => {
            left[0] = "/";
            left[1] = "\\";
            right[0] = "\\";
            right[1] = "/";
        }
        3 => {
            left[0] = " /";
            left[1] = "< ";
            left[2] = " \\";
            right[0] = "\\";
            right[1] = " >";
            right[2] = "/";
        }
        _ => {
            let p = 1 + (len - 2) / 2;
            left[0] = " /";
            left[p] = "< ";
            left[len - 1] = " \\";
            right[0] = "\\";
            right[p] = " >";
            right[len - 1] = "/";
            for i in 1..len - 1 {
                if left[i].is_empty() {
                    left[i] = "▕ ";
                    right[i] = "▕";
                }
            }
        }
    }
    (left, right)
}

impl Paragraph {
    /// Draws a tall brace down both sides of the paragraph.
    ///
    /// Line `i` of the output is `left[i] + line + right[i]` where the glyph
    /// columns come from the style's shape for this line count. The output
    /// always has the same number of lines as the input;
    /// [`AccoladeStyle::None`] is the identity.
    ///
    /// Lines are combined as-is; pad them to a uniform width first (or use
    /// [`auto_accolades`](Self::auto_accolades)) if the right-hand glyphs
    /// should line up.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::{AccoladeStyle, Paragraph};
    ///
    /// let p = Paragraph::from_lines(["a", "b", "c"]);
    /// assert_eq!(
    ///     p.accolades(AccoladeStyle::Unicode).lines(),
    ///     ["⎧a⎫", "⎫b⎧", "⎩c⎭"],
    /// );
    /// ```
    pub fn accolades(&self, style: AccoladeStyle) -> Paragraph {
        let (left, right) = match style {
            AccoladeStyle::None => return self.clone(),
            AccoladeStyle::Ascii => ascii_rails(self.len()),
            AccoladeStyle::Unicode => unicode_rails(self.len()),
        };
        self.iter()
            .enumerate()
            .map(|(i, line)| format!("{}{}{}", left[i], line, right[i]))
            .collect()
    }

    /// Pads to the natural width, adds a one-space margin on both sides,
    /// then draws the brace.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::{AccoladeStyle, Paragraph};
    ///
    /// let p = Paragraph::from_lines(["ab", "c"]);
    /// assert_eq!(
    ///     p.auto_accolades(AccoladeStyle::Unicode).lines(),
    ///     ["⎰ ab ⎱", "⎱ c  ⎰"],
    /// );
    /// ```
    pub fn auto_accolades(&self, style: AccoladeStyle) -> Paragraph {
        if style == AccoladeStyle::None {
            return self.clone();
        }
        let width = self.width();
        self.pad_right(" ", width)
            .surround(" ", " ")
            .accolades(style)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(len: usize) -> Paragraph {
        (0..len).map(|i| i.to_string()).collect()
    }

    #[test]
    fn none_style_is_identity() {
        let p = numbered(5);
        assert_eq!(p.accolades(AccoladeStyle::None), p);
        assert_eq!(p.auto_accolades(AccoladeStyle::None), p);
    }

    #[test]
    fn empty_paragraph_stays_empty() {
        let p = Paragraph::new();
        assert!(p.accolades(AccoladeStyle::Unicode).is_empty());
        assert!(p.accolades(AccoladeStyle::Ascii).is_empty());
        assert!(p.auto_accolades(AccoladeStyle::Unicode).is_empty());
    }

    #[test]
    fn unicode_small_shapes() {
        assert_eq!(numbered(1).accolades(AccoladeStyle::Unicode).lines(), ["{0}"]);
        assert_eq!(
            numbered(2).accolades(AccoladeStyle::Unicode).lines(),
            ["⎰0⎱", "⎱1⎰"],
        );
        assert_eq!(
            numbered(3).accolades(AccoladeStyle::Unicode).lines(),
            ["⎧0⎫", "⎫1⎧", "⎩2⎭"],
        );
        assert_eq!(
            numbered(4).accolades(AccoladeStyle::Unicode).lines(),
            ["⎧0⎫", "⎭1⎩", "⎫2⎧", "⎩3⎭"],
        );
    }

    #[test]
    fn unicode_general_shape_places_waist_pair() {
        assert_eq!(
            numbered(5).accolades(AccoladeStyle::Unicode).lines(),
            ["⎧0⎫", "⎭1⎩", "⎫2⎧", "⎪3⎪", "⎩4⎭"],
        );
        assert_eq!(
            numbered(6).accolades(AccoladeStyle::Unicode).lines(),
            ["⎧0⎫", "⎪1⎪", "⎭2⎩", "⎫3⎧", "⎪4⎪", "⎩5⎭"],
        );
        assert_eq!(
            numbered(9).accolades(AccoladeStyle::Unicode).lines(),
            ["⎧0⎫", "⎪1⎪", "⎪2⎪", "⎭3⎩", "⎫4⎧", "⎪5⎪", "⎪6⎪", "⎪7⎪", "⎩8⎭"],
        );
    }

    #[test]
    fn ascii_small_shapes() {
        assert_eq!(numbered(1).accolades(AccoladeStyle::Ascii).lines(), ["<0>"]);
        assert_eq!(
            numbered(2).accolades(AccoladeStyle::Ascii).lines(),
            ["/0\\", "\\1/"],
        );
        assert_eq!(
            numbered(3).accolades(AccoladeStyle::Ascii).lines(),
            [" /0\\", "< 1 >", " \\2/"],
        );
    }

    #[test]
    fn ascii_general_shape_has_single_waist_one_below_unicode() {
        assert_eq!(
            numbered(4).accolades(AccoladeStyle::Ascii).lines(),
            [" /0\\", "▕ 1▕", "< 2 >", " \\3/"],
        );
        assert_eq!(
            numbered(6).accolades(AccoladeStyle::Ascii).lines(),
            [" /0\\", "▕ 1▕", "▕ 2▕", "< 3 >", "▕ 4▕", " \\5/"],
        );
    }

    #[test]
    fn length_is_always_preserved() {
        for len in 0..12 {
            let p = numbered(len);
            assert_eq!(p.accolades(AccoladeStyle::Unicode).len(), len);
            assert_eq!(p.accolades(AccoladeStyle::Ascii).len(), len);
        }
    }

    #[test]
    fn style_names_round_trip() {
        for style in AccoladeStyle::ALL {
            assert_eq!(style.to_string().parse::<AccoladeStyle>().unwrap(), style);
        }
        assert!("Fancy".parse::<AccoladeStyle>().is_err());
        assert!("".parse::<AccoladeStyle>().is_err());
    }
}
