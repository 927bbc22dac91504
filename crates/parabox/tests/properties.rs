//! Property-based tests for the layout invariants.

use parabox::width::display_width;
use parabox::{AccoladeStyle, BoxSettings, BoxStyle, LabelAlign, Paragraph, MAX_WIDTH};
use proptest::prelude::*;

/// Printable-ASCII lines (spaces included, no newlines).
fn ascii_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[ -~]{0,60}", 0..8)
}

/// Lines mixing ASCII with accented and double-width characters.
fn unicode_lines() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z é¨世界]{0,30}", 0..8)
}

fn accolade_style_strategy() -> impl Strategy<Value = AccoladeStyle> {
    prop_oneof![
        Just(AccoladeStyle::None),
        Just(AccoladeStyle::Ascii),
        Just(AccoladeStyle::Unicode),
    ]
}

proptest! {
    /// `cut` never leaves a line wider than the budget, and never changes
    /// the line count.
    #[test]
    fn cut_bounds_width_and_preserves_count(lines in unicode_lines(), max in 1usize..50) {
        let p = Paragraph::from_lines(lines);
        let out = p.cut(max);
        prop_assert_eq!(out.len(), p.len());
        for line in out.iter() {
            prop_assert!(display_width(line) <= max);
        }
    }

    /// Cutting twice is the same as cutting once.
    #[test]
    fn cut_is_idempotent(lines in unicode_lines(), max in 1usize..50) {
        let once = Paragraph::from_lines(lines).cut(max);
        prop_assert_eq!(once.cut(max), once.clone());
    }

    /// `limit` with an ASCII alphabet respects the width budget exactly.
    #[test]
    fn limit_bounds_width(lines in ascii_lines(), max in 1usize..50) {
        let out = Paragraph::from_lines(lines).limit(max);
        for line in out.iter() {
            prop_assert!(
                display_width(line) <= max,
                "line {:?} wider than {}", line, max,
            );
        }
    }

    /// `limit` never loses non-space content: dropping every space, each
    /// input line's character sequence survives in its wrapped lines.
    #[test]
    fn limit_is_lossless_modulo_spaces(lines in ascii_lines(), max in 1usize..50) {
        let p = Paragraph::from_lines(lines.clone());
        let out = p.limit(max);
        prop_assert!(out.len() >= p.len());

        let squash = |s: &str| s.replace(' ', "");
        let rewrapped: String = out.iter().map(|s| squash(s)).collect();
        let original: String = lines.iter().map(|s| squash(s)).collect();
        prop_assert_eq!(rewrapped, original);
    }

    /// A line never wider than the budget passes through `limit` untouched.
    #[test]
    fn limit_keeps_fitting_lines(lines in unicode_lines(), max in 1usize..80) {
        let p = Paragraph::from_lines(lines);
        prop_assume!(p.width() <= max);
        prop_assert_eq!(p.limit(max), p);
    }

    /// Padded lines land on exactly the requested width; wider lines are
    /// not touched.
    #[test]
    fn pad_right_hits_exact_width(lines in ascii_lines(), width in 1usize..80) {
        let p = Paragraph::from_lines(lines);
        let out = p.pad_right(".", width);
        for (before, after) in p.iter().zip(out.iter()) {
            let w = display_width(before);
            if w <= width {
                prop_assert_eq!(display_width(after), width);
            } else {
                prop_assert_eq!(after, before);
            }
        }
    }

    /// An invalid width makes `pad_right` the identity.
    #[test]
    fn pad_right_invalid_width_is_identity(lines in ascii_lines()) {
        let p = Paragraph::from_lines(lines);
        prop_assert_eq!(p.pad_right(".", 0), p.clone());
        prop_assert_eq!(p.pad_right(".", MAX_WIDTH + 1), p.clone());
        prop_assert_eq!(p.pad_right("", 10), p);
    }

    /// Boxing adds exactly two lines and every row of a single-glyph style
    /// shares one width.
    #[test]
    fn boxed_rows_are_uniform(
        lines in ascii_lines(),
        style_index in 2usize..=16,
        label in "[ -~]{0,10}",
    ) {
        let p = Paragraph::from_lines(lines);
        prop_assume!(p.width() >= 1);
        let pattern = BoxStyle::from_index(style_index).pattern();
        let settings = BoxSettings::new(1).top_label(label, LabelAlign::Center);
        let out = p.auto_boxed(&settings, &pattern);
        prop_assert_eq!(out.len(), p.len() + 2);

        let expected = p.width()
            + display_width(pattern.left)
            + display_width(pattern.right);
        for line in out.iter() {
            prop_assert_eq!(display_width(line), expected, "line {:?}", line);
        }
    }

    /// Decorating with braces preserves the line count for every style.
    #[test]
    fn accolades_preserve_length(lines in unicode_lines(), style in accolade_style_strategy()) {
        let p = Paragraph::from_lines(lines);
        prop_assert_eq!(p.accolades(style).len(), p.len());
        prop_assert_eq!(p.auto_accolades(style).len(), p.len());
    }

    /// Parsing the joined text reproduces the paragraph line for line.
    #[test]
    fn join_round_trips(lines in ascii_lines()) {
        let p = Paragraph::from_lines(lines);
        prop_assume!(!p.is_empty());
        prop_assert_eq!(Paragraph::from_text(&p.join("\n")), p);
    }
}
