//! Linear undo/redo history over full-text snapshots.
//!
//! The history is a sequence of [`HistoryEntry`] snapshots and a cursor
//! pointing at the one currently shown. Undo and redo only move the cursor.
//! [`History::record`] is the only way to add a snapshot: it first drops
//! everything after the cursor (the redo branch) and then appends.
//!
//! Snapshots are [`Rope`] clones, which share structure with the live
//! buffer, so recording on every keystroke stays cheap.

use quill_primitives::{EditOrigin, Rope};
use tracing::trace;

use crate::config::HistoryConfig;


/// One recorded buffer state.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
	/// Buffer content at this point in history.
	pub text: Rope,
	/// The action that produced this content.
	pub origin: EditOrigin,
}

/// Undo/redo stack of caption snapshots.
#[derive(Debug, Default)]
pub struct History {
	entries: Vec<HistoryEntry>,
	/// Position of the current snapshot; `None` only while `entries` is empty.
	index: Option<usize>,
	coalesce_typing: bool,
	/// The top entry is a typing burst still accepting keystrokes. Closed by
	/// any undo, redo, reset, or non-typing record.
	coalesce_open: bool,
	max_entries: Option<usize>,
}

impl History {
	/// Creates an empty history with default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates an empty history using `config`.
	pub fn with_config(config: &HistoryConfig) -> Self {
		Self {
			coalesce_typing: config.coalesce_typing,
			max_entries: config.max_entries.map(|max| max.max(1)),
			..Self::default()
		}
	}

	/// Drops every snapshot.
	pub fn clear(&mut self) {
		trace!(dropped = self.entries.len(), "history cleared");
		self.entries.clear();
		self.index = None;
		self.coalesce_open = false;
	}

	/// Replaces the whole history with a single caption snapshot.
	pub fn reset(&mut self, text: Rope) {
		self.clear();
		self.entries.push(HistoryEntry {
			text,
			origin: EditOrigin::Caption,
		});
		self.index = Some(0);
	}

	/// Records `text` as the newest snapshot.
	///
	/// Snapshots after the current one are discarded first. With typing
	/// coalescing enabled, a typing edit directly after another typing edit
	/// replaces it instead of appending. Undo and redo end the burst, so an
	/// entry reached by navigating history is never overwritten.
	pub fn record(&mut self, text: Rope, origin: EditOrigin) {
		let keep = self.index.map_or(0, |i| i + 1);
		let pruned = self.entries.len() - keep;
		if pruned > 0 {
			self.entries.truncate(keep);
			trace!(cleared = pruned, "redo branch pruned");
		}

		let typing = origin == EditOrigin::Typing;
		if self.coalesce_typing
			&& self.coalesce_open
			&& pruned == 0
			&& typing
			&& let Some(top) = self.entries.last_mut()
			&& top.origin == EditOrigin::Typing
		{
			top.text = text;
			trace!(index = keep - 1, "typing coalesced into top entry");
			return;
		}
		self.coalesce_open = typing;

		self.entries.push(HistoryEntry { text, origin });
		if let Some(max) = self.max_entries
			&& self.entries.len() > max
		{
			let excess = self.entries.len() - max;
			self.entries.drain(..excess);
			trace!(dropped = excess, max, "oldest history entries dropped");
		}
		let index = self.entries.len() - 1;
		self.index = Some(index);
		trace!(%origin, index, len = self.entries.len(), "history entry recorded");
	}

	/// Steps back one snapshot and returns it.
	///
	/// At the oldest snapshot this is a no-op returning the current one.
	/// Returns `None` only when the history is empty.
	pub fn undo(&mut self) -> Option<&Rope> {
		match self.index {
			Some(i) if i > 0 => {
				self.index = Some(i - 1);
				self.coalesce_open = false;
				trace!(index = i - 1, redo = self.entries.len() - i, "undo");
			}
			_ => trace!("undo: nothing to undo"),
		}
		self.current()
	}

	/// Steps forward one snapshot and returns it.
	///
	/// At the newest snapshot this is a no-op returning the current one.
	/// Returns `None` only when the history is empty.
	pub fn redo(&mut self) -> Option<&Rope> {
		match self.index {
			Some(i) if i + 1 < self.entries.len() => {
				self.index = Some(i + 1);
				self.coalesce_open = false;
				trace!(index = i + 1, "redo");
			}
			_ => trace!("redo: nothing to redo"),
		}
		self.current()
	}

	/// Returns the snapshot under the cursor.
	pub fn current(&self) -> Option<&Rope> {
		self.index.map(|i| &self.entries[i].text)
	}

	/// Returns true if [`undo`](Self::undo) would move.
	pub fn can_undo(&self) -> bool {
		self.index.is_some_and(|i| i > 0)
	}

	/// Returns true if [`redo`](Self::redo) would move.
	pub fn can_redo(&self) -> bool {
		self.index.is_some_and(|i| i + 1 < self.entries.len())
	}

	/// Returns the cursor position, or `None` when empty.
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	/// Returns the number of stored snapshots.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns true if no snapshot is stored.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns all stored snapshots, oldest first.
	pub fn entries(&self) -> &[HistoryEntry] {
		&self.entries
	}
}
