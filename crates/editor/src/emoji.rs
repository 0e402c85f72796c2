//! Emoji palette and caret insertion.

use quill_primitives::{CharIdx, Rope, Selection, splice};
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};
use tracing::debug;

/// A tab of the emoji palette.
#[derive(
	Debug, Default, Display, EnumString, EnumIter, IntoStaticStr, Deserialize, Clone, Copy, PartialEq, Eq, Hash,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum EmojiCategory {
	/// General purpose reactions.
	#[default]
	Common,
	/// Work and office symbols.
	Professional,
	/// Parties, awards, and music.
	Celebration,
	/// Devices and tools.
	Tech,
}

impl EmojiCategory {
	/// Returns the tab label.
	pub fn label(self) -> &'static str {
		match self {
			EmojiCategory::Common => "Common",
			EmojiCategory::Professional => "Professional",
			EmojiCategory::Celebration => "Celebration",
			EmojiCategory::Tech => "Tech",
		}
	}

	/// Returns the symbols in this tab, in display order.
	pub fn emojis(self) -> &'static [&'static str] {
		match self {
			EmojiCategory::Common => &[
				"🚀", "✨", "🎯", "💡", "🔥", "👏", "🎉", "💪", "📍", "🎤", "📚", "💻", "🌟", "🎊", "🎈", "❤️", "👍",
				"🙌", "🎓", "🏆", "💼", "🤝", "🌱", "⚡",
			],
			EmojiCategory::Professional => &[
				"💼", "📊", "📈", "🎯", "🏆", "💡", "🔧", "⚙️", "📋", "📝", "💻", "🖥️", "⌨️", "🖱️", "📱", "💾",
				"🔍", "📞", "📧", "📅", "⏰", "💰", "💳", "🏦",
			],
			EmojiCategory::Celebration => &[
				"🎉", "🎊", "🥳", "🎈", "🎁", "🍾", "🥂", "🎂", "🎭", "🎪", "🎨", "🎵", "🎶", "🎸", "🎤", "🎧",
				"🎬", "🎮", "🏅", "🥇", "🥈", "🥉", "👑", "🌟",
			],
			EmojiCategory::Tech => &[
				"💻", "🖥️", "📱", "⌨️", "🖱️", "💾", "💿", "📀", "🔌", "🔋", "📡", "📺", "📷", "📹", "🎥", "💡",
				"🔧", "⚙️", "🛠️", "🔩", "⚡", "🌐", "📶", "📊",
			],
		}
	}
}

/// Inserts `symbol` at `caret`, returning the caret position after it.
///
/// `caret` is clamped to the buffer. Nothing is replaced: with a ranged
/// selection the caller passes its start. The returned caret advances by the
/// symbol's char count, so sequences with variation selectors or modifiers
/// move it by more than one.
pub fn insert_emoji(buffer: &mut Rope, caret: CharIdx, symbol: &str) -> CharIdx {
	let len = buffer.len_chars();
	let at = Selection::point(caret);
	if !at.fits(len) {
		debug!(caret, len, "emoji caret clamped");
	}
	splice(buffer, at.clamp(len).range(), symbol)
}
