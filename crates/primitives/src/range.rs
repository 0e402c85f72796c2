use std::ops::Range;

/// A position in the text, measured in characters (not bytes).
///
/// Every offset exchanged with the editing surface uses this unit, so a
/// multi-code-point emoji advances the caret by more than one.
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// A selected span `[start, end)` of the caption buffer.
///
/// `start <= end` always holds: the fields are private and every
/// constructor orders swapped offsets. A zero-width selection is a plain
/// caret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Selection {
	start: CharIdx,
	end: CharIdx,
}

impl Selection {
	/// Creates a selection spanning `a..b`, ordering the offsets.
	pub fn new(a: CharIdx, b: CharIdx) -> Self {
		Self {
			start: a.min(b),
			end: a.max(b),
		}
	}

	/// Creates a zero-width selection (caret) at `pos`.
	pub fn point(pos: CharIdx) -> Self {
		Self { start: pos, end: pos }
	}

	/// Returns the inclusive start offset.
	#[inline]
	pub fn start(&self) -> CharIdx {
		self.start
	}

	/// Returns the exclusive end offset.
	#[inline]
	pub fn end(&self) -> CharIdx {
		self.end
	}

	/// Returns the number of selected characters.
	#[inline]
	pub fn len(&self) -> CharLen {
		self.end - self.start
	}

	/// Returns true if nothing is selected.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// Returns the selection with both ends pulled into `0..=len`.
	pub fn clamp(self, len: CharLen) -> Self {
		Self {
			start: self.start.min(len),
			end: self.end.min(len),
		}
	}

	/// Returns true if both ends already lie within `0..=len`.
	#[inline]
	pub fn fits(&self, len: CharLen) -> bool {
		self.end <= len
	}

	/// Returns the selection as a char range for slicing.
	#[inline]
	pub fn range(&self) -> Range<CharIdx> {
		self.start..self.end
	}
}
