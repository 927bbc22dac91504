//! Rectangular borders with optional labels.
//!
//! A [`BoxPattern`] is a fixed set of eight border glyph strings; a
//! [`BoxStyle`] names one of the built-in patterns. [`Paragraph::boxed`]
//! draws the border around a paragraph, optionally working a label into the
//! top and bottom edges.

use std::fmt;
use std::str::FromStr;

use crate::paragraph::width_in_bounds;
use crate::width::{self, clip_to_width, display_width};
use crate::Paragraph;

/// How the leftover space around a label is split between the fill on its
/// left and the fill on its right.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LabelAlign {
    /// Label flush against the left corner; all fill on the right.
    #[default]
    Left,
    /// Fill split evenly; the left side gets the extra column on odd totals.
    Center,
    /// Label flush against the right corner; all fill on the left.
    Right,
}

/// The eight glyph strings of a box border.
///
/// The `top` and `bottom` fill units may be multi-character motifs; edges
/// tile them character-by-character to hit the exact column count, cutting
/// the final copy short when needed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoxPattern {
    pub top_left: &'static str,
    pub top: &'static str,
    pub top_right: &'static str,
    pub left: &'static str,
    pub right: &'static str,
    pub bottom_left: &'static str,
    pub bottom: &'static str,
    pub bottom_right: &'static str,
}

impl BoxPattern {
    /// The all-empty sentinel pattern. Boxing with it is a no-op.
    pub const NONE: BoxPattern = BoxPattern {
        top_left: "",
        top: "",
        top_right: "",
        left: "",
        right: "",
        bottom_left: "",
        bottom: "",
        bottom_right: "",
    };

    fn is_none(&self) -> bool {
        *self == Self::NONE
    }
}

macro_rules! pattern {
    ($tl:literal $t:literal $tr:literal $l:literal $r:literal $bl:literal $b:literal $br:literal) => {
        BoxPattern {
            top_left: $tl,
            top: $t,
            top_right: $tr,
            left: $l,
            right: $r,
            bottom_left: $bl,
            bottom: $b,
            bottom_right: $br,
        }
    };
}

/// The built-in border styles.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxStyle {
    /// All-empty glyphs; boxing with this style is a no-op.
    None,
    /// A border made of spaces.
    Space,
    #[default]
    SingleLine,
    SingleLineRounded,
    Bold,
    /// Single vertical strokes, double horizontal strokes.
    SingleVDoubleH,
    /// Single horizontal strokes, double vertical strokes.
    SingleHDoubleV,
    DoubleLine,
    ExtraBold,
    ExtraBoldRounded,
    MaxBold,
    BlocksLightShade,
    BlocksMediumShade,
    BlocksDarkShade,
    Blocks,
    Dots,
    Diamonds,
    Fantasy1,
    Fantasy2,
    Fantasy3,
    Fantasy4,
}

impl BoxStyle {
    const ALL: [BoxStyle; 21] = [
        BoxStyle::None,
        BoxStyle::Space,
        BoxStyle::SingleLine,
        BoxStyle::SingleLineRounded,
        BoxStyle::Bold,
        BoxStyle::SingleVDoubleH,
        BoxStyle::SingleHDoubleV,
        BoxStyle::DoubleLine,
        BoxStyle::ExtraBold,
        BoxStyle::ExtraBoldRounded,
        BoxStyle::MaxBold,
        BoxStyle::BlocksLightShade,
        BoxStyle::BlocksMediumShade,
        BoxStyle::BlocksDarkShade,
        BoxStyle::Blocks,
        BoxStyle::Dots,
        BoxStyle::Diamonds,
        BoxStyle::Fantasy1,
        BoxStyle::Fantasy2,
        BoxStyle::Fantasy3,
        BoxStyle::Fantasy4,
    ];

    /// Looks a style up by table index, falling back to
    /// [`BoxStyle::SingleLine`] when the index is out of range.
    ///
    /// ```rust
    /// use parabox::BoxStyle;
    ///
    /// assert_eq!(BoxStyle::from_index(7), BoxStyle::DoubleLine);
    /// assert_eq!(BoxStyle::from_index(1000), BoxStyle::SingleLine);
    /// ```
    pub fn from_index(index: usize) -> BoxStyle {
        Self::ALL.get(index).copied().unwrap_or_default()
    }

    /// The glyph table for this style.
    pub fn pattern(self) -> BoxPattern {
        match self {
            BoxStyle::None => BoxPattern::NONE,
            BoxStyle::Space => pattern!(" " " " " " " " " " " " " " " "),
            BoxStyle::SingleLine => pattern!("┌" "─" "┐" "│" "│" "└" "─" "┘"),
            BoxStyle::SingleLineRounded => pattern!("╭" "─" "╮" "│" "│" "╰" "─" "╯"),
            BoxStyle::Bold => pattern!("┏" "━" "┓" "┃" "┃" "┗" "━" "┛"),
            BoxStyle::SingleVDoubleH => pattern!("╒" "═" "╕" "│" "│" "╘" "═" "╛"),
            BoxStyle::SingleHDoubleV => pattern!("╓" "─" "╖" "║" "║" "╙" "─" "╜"),
            BoxStyle::DoubleLine => pattern!("╔" "═" "╗" "║" "║" "╚" "═" "╝"),
            BoxStyle::ExtraBold => pattern!("▛" "▀" "▜" "▌" "▐" "▙" "▄" "▟"),
            BoxStyle::ExtraBoldRounded => pattern!("▞" "▀" "▚" "▌" "▐" "▚" "▄" "▞"),
            BoxStyle::MaxBold => pattern!("█" "▀" "█" "█" "█" "█" "▄" "█"),
            BoxStyle::BlocksLightShade => pattern!("░" "░" "░" "░" "░" "░" "░" "░"),
            BoxStyle::BlocksMediumShade => pattern!("▒" "▒" "▒" "▒" "▒" "▒" "▒" "▒"),
            BoxStyle::BlocksDarkShade => pattern!("▓" "▓" "▓" "▓" "▓" "▓" "▓" "▓"),
            BoxStyle::Blocks => pattern!("█" "█" "█" "█" "█" "█" "█" "█"),
            BoxStyle::Dots => pattern!("." "." "." ":" ":" ":" "." ":"),
            BoxStyle::Diamonds => pattern!("◆" "◆" "◆" "◆" "◆" "◆" "◆" "◆"),
            BoxStyle::Fantasy1 => pattern!("╭" "╼" "╮" "╽" "╿" "╰" "╾" "╯"),
            BoxStyle::Fantasy2 => pattern!("╱" "▔" "╲" "│" "│" "╲" "▁" "╱"),
            BoxStyle::Fantasy3 => pattern!("▁▂▃" "▃" "▃▂▁" "▌" "▐" "▜▃▂▁" "▁" "▁▂▃▛"),
            BoxStyle::Fantasy4 => pattern!("" "▁▂▃▂" "" "█" "█" "█" "▃▂▁▂" "█"),
        }
    }

    fn name(self) -> &'static str {
        match self {
            BoxStyle::None => "None",
            BoxStyle::Space => "Space",
            BoxStyle::SingleLine => "SingleLine",
            BoxStyle::SingleLineRounded => "SingleLineRounded",
            BoxStyle::Bold => "Bold",
            BoxStyle::SingleVDoubleH => "SingleVDoubleH",
            BoxStyle::SingleHDoubleV => "SingleHDoubleV",
            BoxStyle::DoubleLine => "DoubleLine",
            BoxStyle::ExtraBold => "ExtraBold",
            BoxStyle::ExtraBoldRounded => "ExtraBoldRounded",
            BoxStyle::MaxBold => "MaxBold",
            BoxStyle::BlocksLightShade => "BlocksLightShade",
            BoxStyle::BlocksMediumShade => "BlocksMediumShade",
            BoxStyle::BlocksDarkShade => "BlocksDarkShade",
            BoxStyle::Blocks => "Blocks",
            BoxStyle::Dots => "Dots",
            BoxStyle::Diamonds => "Diamonds",
            BoxStyle::Fantasy1 => "Fantasy1",
            BoxStyle::Fantasy2 => "Fantasy2",
            BoxStyle::Fantasy3 => "Fantasy3",
            BoxStyle::Fantasy4 => "Fantasy4",
        }
    }
}

impl fmt::Display for BoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a style name does not match any variant.
#[derive(Debug, thiserror::Error)]
#[error("unknown style name: {0:?}")]
pub struct ParseStyleError(pub String);

impl FromStr for BoxStyle {
    type Err = ParseStyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|style| style.name() == s)
            .ok_or_else(|| ParseStyleError(s.to_string()))
    }
}

/// Target width and labels for a box border.
///
/// `width` is the interior width in columns and must lie in
/// `[1, MAX_WIDTH]`; [`Paragraph::boxed`] leaves its input unchanged
/// otherwise.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoxSettings {
    pub width: usize,
    pub top_label: String,
    pub top_align: LabelAlign,
    pub bottom_label: String,
    pub bottom_align: LabelAlign,
}

impl BoxSettings {
    /// Settings for an unlabeled box of the given interior width.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            ..Self::default()
        }
    }

    /// Sets the label worked into the top edge.
    pub fn top_label(mut self, label: impl Into<String>, align: LabelAlign) -> Self {
        self.top_label = label.into();
        self.top_align = align;
        self
    }

    /// Sets the label worked into the bottom edge.
    pub fn bottom_label(mut self, label: impl Into<String>, align: LabelAlign) -> Self {
        self.bottom_label = label.into();
        self.bottom_align = align;
        self
    }
}

/// A label plus the fill column counts on either side of it.
fn lay_out_label(
    label: &str,
    align: LabelAlign,
    width: usize,
    borders_width: usize,
    corners_width: usize,
) -> (String, usize, usize) {
    let total = width + borders_width;
    let used = display_width(label) + corners_width;
    if used >= total {
        // No room for fill; the label itself gets clipped to the interior.
        return (clip_to_width(label, width).to_string(), 0, 0);
    }
    let fill = total - used;
    match align {
        LabelAlign::Left => (label.to_string(), 0, fill),
        LabelAlign::Center => (label.to_string(), fill / 2 + fill % 2, fill / 2),
        LabelAlign::Right => (label.to_string(), fill, 0),
    }
}

impl Paragraph {
    /// Draws a rectangular border around the paragraph.
    ///
    /// Body lines keep their content and order between the left and right
    /// border glyphs; the top and bottom edges tile their fill unit around
    /// the optional labels. The output has exactly two more lines than the
    /// input. The operation is the identity when `settings.width` is outside
    /// `[1, MAX_WIDTH]` or `pattern` is [`BoxPattern::NONE`].
    ///
    /// Lines are expected to be pre-padded to `settings.width` (see
    /// [`pad_right`](Self::pad_right), or use
    /// [`auto_boxed`](Self::auto_boxed) which pads for you); the border
    /// itself never reflows content.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::{BoxSettings, BoxStyle, Paragraph};
    ///
    /// let p = Paragraph::from_lines(["abc", "de "]);
    /// let boxed = p.boxed(&BoxSettings::new(3), &BoxStyle::SingleLine.pattern());
    /// assert_eq!(boxed.lines(), ["┌───┐", "│abc│", "│de │", "└───┘"]);
    /// ```
    pub fn boxed(&self, settings: &BoxSettings, pattern: &BoxPattern) -> Paragraph {
        if !width_in_bounds(settings.width) || pattern.is_none() {
            return self.clone();
        }
        let borders_width = display_width(pattern.left) + display_width(pattern.right);
        let (top_label, top_left_fill, top_right_fill) = lay_out_label(
            &settings.top_label,
            settings.top_align,
            settings.width,
            borders_width,
            display_width(pattern.top_left) + display_width(pattern.top_right),
        );
        let (bottom_label, bottom_left_fill, bottom_right_fill) = lay_out_label(
            &settings.bottom_label,
            settings.bottom_align,
            settings.width,
            borders_width,
            display_width(pattern.bottom_left) + display_width(pattern.bottom_right),
        );

        let mut out = Paragraph::with_capacity(self.len() + 2);
        out.push(format!(
            "{}{}{}{}{}",
            pattern.top_left,
            width::pad_right("", pattern.top, top_left_fill),
            top_label,
            width::pad_right("", pattern.top, top_right_fill),
            pattern.top_right,
        ));
        for line in self.iter() {
            out.push(format!("{}{}{}", pattern.left, line, pattern.right));
        }
        out.push(format!(
            "{}{}{}{}{}",
            pattern.bottom_left,
            width::pad_right("", pattern.bottom, bottom_left_fill),
            bottom_label,
            width::pad_right("", pattern.bottom, bottom_right_fill),
            pattern.bottom_right,
        ));
        out
    }

    /// Pads the paragraph to its natural width, then boxes it.
    ///
    /// The width in `settings` only participates in the validity guard; the
    /// border is always drawn at the width of the widest line.
    ///
    /// # Example
    ///
    /// ```rust
    /// use parabox::{BoxSettings, BoxStyle, Paragraph};
    ///
    /// let p = Paragraph::from_lines(["abc", "d"]);
    /// let boxed = p.auto_boxed(&BoxSettings::new(30), &BoxStyle::SingleLine.pattern());
    /// assert_eq!(boxed.lines(), ["┌───┐", "│abc│", "│d  │", "└───┘"]);
    /// ```
    pub fn auto_boxed(&self, settings: &BoxSettings, pattern: &BoxPattern) -> Paragraph {
        if !width_in_bounds(settings.width) || pattern.is_none() {
            return self.clone();
        }
        let natural = self.width();
        let settings = BoxSettings {
            width: natural,
            ..settings.clone()
        };
        self.pad_right(" ", natural).boxed(&settings, pattern)
    }
}
