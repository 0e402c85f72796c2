//! Read-only views of the caption for the post preview and status line.

use std::borrow::Cow;
use std::fmt;

use quill_primitives::graphemes::grapheme_count;
use quill_primitives::{CharLen, RopeSlice, visible_line_count};

/// Size figures for the status line under the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CaptionStats {
	/// Length in chars, the unit used for selection offsets.
	pub chars: CharLen,
	/// User-perceived characters; styled and combining clusters count once.
	pub graphemes: usize,
	/// Line count, including the empty line after a trailing newline.
	pub lines: usize,
}

impl CaptionStats {
	/// Measures `text`.
	pub fn of(text: RopeSlice) -> Self {
		Self {
			chars: text.len_chars(),
			graphemes: grapheme_count(text),
			lines: visible_line_count(text),
		}
	}
}

impl fmt::Display for CaptionStats {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} characters, {} symbols, {} lines",
			self.chars, self.graphemes, self.lines
		)
	}
}

/// The caption as shown inside the post card.
///
/// Non-empty text is shown verbatim; an empty caption shows the placeholder.
#[derive(Debug, Clone, Copy)]
pub struct Preview<'a> {
	text: RopeSlice<'a>,
	placeholder: &'a str,
}

impl<'a> Preview<'a> {
	/// Creates a preview over `text`.
	pub fn new(text: RopeSlice<'a>, placeholder: &'a str) -> Self {
		Self { text, placeholder }
	}

	/// Returns true if the placeholder is shown instead of the caption.
	pub fn is_placeholder(&self) -> bool {
		self.text.len_chars() == 0
	}

	/// Returns the text to display.
	pub fn body(&self) -> Cow<'a, str> {
		if self.is_placeholder() {
			Cow::Borrowed(self.placeholder)
		} else {
			self.text.into()
		}
	}
}

impl fmt::Display for Preview<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.body())
	}
}
