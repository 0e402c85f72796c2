//! Unicode "styled text" substitution.
//!
//! Post bodies render plain text only, so bold and italic are faked with
//! glyphs from the Mathematical Alphanumeric Symbols block. Each [`Style`] is
//! a static table covering ASCII letters (and digits for bold); any other
//! char passes through untouched, so the output has the same char count as
//! the input.
//!
//! Strikethrough and underline have no glyph tables. They are built from
//! combining marks instead, see [`strikethrough`] and [`underline`].

mod combining;
mod tables;

pub use self::combining::{STRIKE_MARK, UNDERLINE_MARK, strikethrough, underline};
use self::tables::{BOLD, BOLD_ITALIC, ITALIC, StyleTable};

/// A glyph-substitution style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Style {
	/// Mathematical bold letters and digits.
	Bold,
	/// Mathematical italic letters.
	Italic,
	/// Mathematical bold italic letters.
	BoldItalic,
}

impl Style {
	fn table(self) -> &'static StyleTable {
		match self {
			Style::Bold => &BOLD,
			Style::Italic => &ITALIC,
			Style::BoldItalic => &BOLD_ITALIC,
		}
	}

	/// Returns the styled form of `ch`, or `ch` itself when unmapped.
	#[inline]
	pub fn map_char(self, ch: char) -> char {
		self.table().lookup(ch).unwrap_or(ch)
	}
}

/// Rewrites every mapped char of `text` in `style`.
pub fn map_style(text: &str, style: Style) -> String {
	text.chars().map(|ch| style.map_char(ch)).collect()
}
