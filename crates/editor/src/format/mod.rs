//! Selection-scoped formatting.
//!
//! A [`FormatOp`] is a pure transform over a substring. [`apply_format`]
//! runs one over the selected span of the buffer, splices the result back,
//! and reports the span the transformed text now occupies so the editing
//! surface can reselect it.
//!
//! Glyph styles keep the char count. Strikethrough and underline double it,
//! and the list ops add prefixes, so the returned selection is always
//! measured from the transformed text rather than the original selection.

use std::str::FromStr;

use quill_primitives::graphemes::is_grapheme_boundary;
use quill_primitives::{CharLen, Rope, Selection, char_len, splice};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use tracing::{debug, trace};

use crate::list::{bullet_list, numbered_list};
use crate::style::{Style, map_style, strikethrough, underline};

#[cfg(test)]
mod tests;

/// A toolbar formatting action.
#[derive(Debug, Display, EnumIter, IntoStaticStr, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "kebab-case")]
pub enum FormatOp {
	/// Mathematical bold glyphs.
	Bold,
	/// Mathematical italic glyphs.
	Italic,
	/// Mathematical bold italic glyphs.
	BoldItalic,
	/// Combining long stroke overlay after every char.
	Strikethrough,
	/// Combining low line after every char.
	Underline,
	/// `• ` before every non-blank line.
	BulletList,
	/// `1. `, `2. `, ... before every non-blank line.
	NumberedList,
}

impl FormatOp {
	/// Returns the canonical kebab-case name.
	pub fn name(self) -> &'static str {
		self.into()
	}

	/// Transforms `text`.
	pub fn apply(self, text: &str) -> String {
		match self {
			FormatOp::Bold => map_style(text, Style::Bold),
			FormatOp::Italic => map_style(text, Style::Italic),
			FormatOp::BoldItalic => map_style(text, Style::BoldItalic),
			FormatOp::Strikethrough => strikethrough(text),
			FormatOp::Underline => underline(text),
			FormatOp::BulletList => bullet_list(text),
			FormatOp::NumberedList => numbered_list(text),
		}
	}

	/// Returns true if the transform never changes the char count.
	pub fn preserves_length(self) -> bool {
		matches!(self, FormatOp::Bold | FormatOp::Italic | FormatOp::BoldItalic)
	}
}

impl FromStr for FormatOp {
	type Err = FormatOpError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let key = s.trim().to_ascii_lowercase();
		match key.as_str() {
			"bullet" => return Ok(FormatOp::BulletList),
			"numbered" => return Ok(FormatOp::NumberedList),
			_ => {}
		}
		FormatOp::iter()
			.find(|op| op.name() == key)
			.ok_or_else(|| FormatOpError::Unknown {
				suggestion: suggest_op(&key),
				name: s.to_owned(),
			})
	}
}

/// Suggests a similar op name using fuzzy matching.
fn suggest_op(name: &str) -> Option<&'static str> {
	FormatOp::iter()
		.map(FormatOp::name)
		.min_by_key(|k| strsim::levenshtein(name, k))
		.filter(|k| strsim::levenshtein(name, k) <= 3)
}

/// Errors from parsing a [`FormatOp`] name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatOpError {
	/// The name matches no format operation.
	#[error("unknown format operation: {name}{}", suggestion.as_ref().map(|s| format!(" (did you mean '{s}'?)")).unwrap_or_default())]
	Unknown {
		/// The name as given.
		name: String,
		/// Closest known name, if one is near enough.
		suggestion: Option<&'static str>,
	},
}

/// What [`apply_format`] changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOutcome {
	/// Span of the transformed text in the new buffer.
	pub selection: Selection,
	/// Chars removed from the buffer.
	pub removed: CharLen,
	/// Chars inserted into the buffer.
	pub inserted: CharLen,
	/// The original selection started or ended inside a grapheme cluster,
	/// e.g. between a letter and its combining mark.
	pub splits_cluster: bool,
}

/// Applies `op` to the `selection` span of `buffer` in place.
///
/// The selection is clamped to the buffer first. Returns `None` without
/// touching the buffer when the (clamped) selection is empty.
pub fn apply_format(buffer: &mut Rope, selection: Selection, op: FormatOp) -> Option<FormatOutcome> {
	let len = buffer.len_chars();
	let sel = selection.clamp(len);
	if !selection.fits(len) {
		debug!(op = %op, ?selection, clamped = ?sel, len, "format selection clamped");
	}
	if sel.is_empty() {
		debug!(op = %op, "format skipped: empty selection");
		return None;
	}

	let text = buffer.slice(..);
	let splits_cluster =
		!is_grapheme_boundary(text, sel.start()) || !is_grapheme_boundary(text, sel.end());

	let original = buffer.slice(sel.range()).to_string();
	let formatted = op.apply(&original);
	let inserted = char_len(&formatted);
	debug_assert!(!op.preserves_length() || inserted == sel.len());
	splice(buffer, sel.range(), &formatted);

	let outcome = FormatOutcome {
		selection: Selection::new(sel.start(), sel.start() + inserted),
		removed: sel.len(),
		inserted,
		splits_cluster,
	};
	trace!(
		op = %op,
		start = sel.start(),
		removed = outcome.removed,
		inserted = outcome.inserted,
		splits_cluster,
		"format applied"
	);
	Some(outcome)
}
