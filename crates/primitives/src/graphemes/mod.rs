use std::borrow::Cow;

use ropey::RopeSlice;
use unicode_segmentation::UnicodeSegmentation;

use crate::range::CharIdx;

/// Returns whether `char_idx` is at a grapheme cluster boundary.
///
/// Boundaries occur at the start/end of text and between grapheme clusters.
/// A combining mark or an emoji modifier sits inside a cluster, so the index
/// just before it is not a boundary.
pub fn is_grapheme_boundary(text: RopeSlice, char_idx: CharIdx) -> bool {
	if char_idx == 0 || char_idx >= text.len_chars() {
		return true;
	}

	let start: CharIdx = char_idx.saturating_sub(1);
	let end: CharIdx = (char_idx + 1).min(text.len_chars());
	let chunk: Cow<str> = text.slice(start..end).into();

	chunk.graphemes(true).count() > 1
}

/// Returns the number of user-perceived characters in `text`.
pub fn grapheme_count(text: RopeSlice) -> usize {
	let text: Cow<str> = text.into();
	text.graphemes(true).count()
}
