//! # Parabox - Paragraph Layout Toolkit
//!
//! `parabox` shapes blocks of terminal text. Its unit of work is the
//! [`Paragraph`], an ordered sequence of lines, and everything else is a
//! transformation over one: wrap long lines, pad to a uniform width, draw a
//! bordered box with labels, or hug the block with a tall curly brace.
//!
//! All width math is in terminal columns (wide CJK characters count as two,
//! zero-width marks as none), so decorations stay aligned for non-ASCII
//! content.
//!
//! ## Core Concepts
//!
//! - [`Paragraph`]: the line container; every transform borrows it and
//!   returns a fresh value, so chains never mutate their input
//! - [`Paragraph::cut`] vs [`Paragraph::limit`]: lossy truncation vs
//!   lossless word-aware reflow
//! - [`BoxStyle`] / [`BoxPattern`]: named border glyph tables and the data
//!   they resolve to
//! - [`AccoladeStyle`]: the brace vocabularies
//!
//! ## Quick Start
//!
//! ```rust
//! use parabox::{BoxSettings, BoxStyle, LabelAlign, Paragraph};
//!
//! let report = Paragraph::from_text("a fairly long line that needs wrapping\nshort");
//! let framed = report
//!     .limit(20)
//!     .pad_right(" ", 20)
//!     .surround(" ", " ")
//!     .boxed(
//!         &BoxSettings::new(22).top_label("report", LabelAlign::Center),
//!         &BoxStyle::SingleLineRounded.pattern(),
//!     );
//!
//! assert_eq!(framed.lines()[0], "╭────────report────────╮");
//! assert_eq!(framed.lines()[1], "│ a fairly long line   │");
//! ```
//!
//! The `auto_` variants measure the paragraph and pad for you:
//!
//! ```rust
//! use parabox::{AccoladeStyle, Paragraph};
//!
//! let p = Paragraph::from_lines(["one", "two", "three"]);
//! assert_eq!(
//!     p.auto_accolades(AccoladeStyle::Unicode).lines(),
//!     ["⎧ one   ⎫", "⎫ two   ⎧", "⎩ three ⎭"],
//! );
//! ```
//!
//! ## Placeholders and Output
//!
//! Lines can carry `{{ name }}` placeholders, substituted per line against
//! any serializable bindings with [`Paragraph::substitute`]; failing lines
//! keep their content and every failure is reported, not just the first.
//! [`Paragraph::write_to_file`] writes the result line by line.
//!
//! ## Error Philosophy
//!
//! Layout operations never fail: a zero or oversized width, an empty fill
//! pattern, or the all-empty border pattern make the operation return its
//! input unchanged. Hard errors are reserved for the file and template
//! boundaries, where they wrap the underlying cause.

mod accolade;
mod boxes;
mod output;
mod pad;
mod paragraph;
mod template;
pub mod width;
mod wrap;

pub use accolade::AccoladeStyle;
pub use boxes::{BoxPattern, BoxSettings, BoxStyle, LabelAlign, ParseStyleError};
pub use output::WriteError;
pub use paragraph::{Paragraph, MAX_WIDTH};
pub use template::{LineFailure, SubstituteError};
