use std::fmt;

/// Where a buffer mutation came from.
///
/// Carried alongside every history snapshot so traces can tell a toolbar
/// action from a keystroke, and so consecutive typing can be grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOrigin {
	/// A freshly generated caption replaced the buffer.
	Caption,
	/// Manual edit reported by the editing surface.
	Typing,
	/// A toolbar format action over a selection.
	Format,
	/// A symbol inserted at the caret.
	Emoji,
	/// The whole buffer was emptied.
	Clear,
}

impl EditOrigin {
	/// Returns the lowercase tag used in logs.
	pub const fn as_str(self) -> &'static str {
		match self {
			EditOrigin::Caption => "caption",
			EditOrigin::Typing => "typing",
			EditOrigin::Format => "format",
			EditOrigin::Emoji => "emoji",
			EditOrigin::Clear => "clear",
		}
	}
}

impl fmt::Display for EditOrigin {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}
