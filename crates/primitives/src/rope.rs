//! Rope utilities and extensions.

use std::ops::Range;

use ropey::{Rope, RopeSlice};

use crate::range::{CharIdx, CharLen};

/// Returns the number of lines, including the empty line after a trailing newline.
#[inline]
pub fn visible_line_count(text: RopeSlice) -> usize {
	text.len_lines()
}

/// Returns the length of `text` in characters, the unit used for offsets.
#[inline]
pub fn char_len(text: &str) -> CharLen {
	text.chars().count()
}

/// Replaces the chars in `range` with `replacement`.
///
/// Both ends of `range` are clamped to the rope length first. Returns the
/// char index just past the inserted text.
pub fn splice(rope: &mut Rope, range: Range<CharIdx>, replacement: &str) -> CharIdx {
	let len = rope.len_chars();
	let start = range.start.min(len);
	let end = range.end.clamp(start, len);
	if start < end {
		rope.remove(start..end);
	}
	if !replacement.is_empty() {
		rope.insert(start, replacement);
	}
	start + char_len(replacement)
}
