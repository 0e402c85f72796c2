//! The caption editing session.
//!
//! [`CaptionSession`] owns the caption buffer and its [`History`] for the
//! lifetime of one generated caption. Every user action maps to one
//! synchronous method; every method that changes the text records the new
//! buffer, so undo can always step back over it.
//!
//! Methods that change what should be selected return the new selection or
//! caret. Restoring focus and selection on the editing surface is up to the
//! caller.

use quill_primitives::{CharIdx, EditOrigin, Rope, RopeSlice, Selection};
use tracing::{debug, trace};

use crate::config::EditorConfig;
use crate::emoji;
use crate::format::{self, FormatOp, FormatOutcome};
use crate::history::History;
use crate::preview::{CaptionStats, Preview};

#[cfg(test)]
mod tests;

/// Editing state for one caption.
#[derive(Debug)]
pub struct CaptionSession {
	text: Rope,
	history: History,
	placeholder: String,
}

impl Default for CaptionSession {
	fn default() -> Self {
		Self::new()
	}
}

impl CaptionSession {
	/// Creates an empty session with default configuration.
	pub fn new() -> Self {
		Self::with_config(&EditorConfig::default())
	}

	/// Creates an empty session using `config`.
	pub fn with_config(config: &EditorConfig) -> Self {
		Self {
			text: Rope::new(),
			history: History::with_config(&config.history),
			placeholder: config.preview.placeholder.clone(),
		}
	}

	/// Starts over with a freshly generated caption.
	///
	/// The history is reset to a single entry holding `caption`.
	pub fn set_caption(&mut self, caption: &str) {
		self.text = Rope::from(caption);
		self.history.reset(self.text.clone());
		debug!(chars = self.text.len_chars(), "caption loaded");
	}

	/// Discards the current caption while a new one is being generated.
	pub fn begin_generation(&mut self) {
		self.text = Rope::new();
		self.history.clear();
		debug!("session reset for generation");
	}

	/// Formats the `start..end` span with `op`.
	///
	/// Returns `None` (and records nothing) when the selection is empty.
	/// Otherwise the returned outcome holds the selection covering the
	/// transformed text.
	pub fn apply_format(&mut self, op: FormatOp, start: CharIdx, end: CharIdx) -> Option<FormatOutcome> {
		let outcome = format::apply_format(&mut self.text, Selection::new(start, end), op)?;
		self.commit(EditOrigin::Format);
		Some(outcome)
	}

	/// Inserts `symbol` at `caret` and returns the caret after it.
	pub fn insert_emoji(&mut self, symbol: &str, caret: CharIdx) -> CharIdx {
		if symbol.is_empty() {
			debug!("emoji skipped: empty symbol");
			return caret.min(self.text.len_chars());
		}
		let caret = emoji::insert_emoji(&mut self.text, caret, symbol);
		self.commit(EditOrigin::Emoji);
		caret
	}

	/// Replaces the buffer with text edited directly on the editing surface.
	///
	/// Identical text is ignored, so redundant change events leave the
	/// history alone.
	pub fn replace_text(&mut self, text: &str) {
		if self.text == text {
			trace!("typing skipped: text unchanged");
			return;
		}
		self.text = Rope::from(text);
		self.commit(EditOrigin::Typing);
	}

	/// Empties the buffer. The emptied state is recorded, so it can be undone.
	pub fn clear_all(&mut self) {
		self.text = Rope::new();
		self.commit(EditOrigin::Clear);
	}

	/// Steps back one history entry. Returns true if the text changed.
	pub fn undo(&mut self) -> bool {
		if !self.history.can_undo() {
			debug!("undo: nothing to undo");
			return false;
		}
		self.restore(History::undo)
	}

	/// Steps forward one history entry. Returns true if the text changed.
	pub fn redo(&mut self) -> bool {
		if !self.history.can_redo() {
			debug!("redo: nothing to redo");
			return false;
		}
		self.restore(History::redo)
	}

	/// Returns the caption as a string.
	pub fn text(&self) -> String {
		self.text.to_string()
	}

	/// Returns a slice over the whole caption.
	pub fn slice(&self) -> RopeSlice<'_> {
		self.text.slice(..)
	}

	/// Returns the caption length in chars.
	pub fn len_chars(&self) -> usize {
		self.text.len_chars()
	}

	/// Returns true if undo would change the text.
	pub fn can_undo(&self) -> bool {
		self.history.can_undo()
	}

	/// Returns true if redo would change the text.
	pub fn can_redo(&self) -> bool {
		self.history.can_redo()
	}

	/// Returns the edit history.
	pub fn history(&self) -> &History {
		&self.history
	}

	/// Returns size figures for the caption.
	pub fn stats(&self) -> CaptionStats {
		CaptionStats::of(self.slice())
	}

	/// Returns the post preview of the caption.
	pub fn preview(&self) -> Preview<'_> {
		Preview::new(self.slice(), &self.placeholder)
	}

	fn commit(&mut self, origin: EditOrigin) {
		self.history.record(self.text.clone(), origin);
	}

	fn restore(&mut self, step: fn(&mut History) -> Option<&Rope>) -> bool {
		match step(&mut self.history) {
			Some(snapshot) => {
				self.text = snapshot.clone();
				true
			}
			None => false,
		}
	}
}
