use pretty_assertions::assert_eq;

use super::*;
use crate::config::HistoryConfig;

fn session_with(caption: &str) -> CaptionSession {
	let mut session = CaptionSession::new();
	session.set_caption(caption);
	session
}

#[test]
fn new_session_is_empty() {
	let mut session = CaptionSession::new();
	assert_eq!(session.text(), "");
	assert!(session.history().is_empty());
	assert!(!session.undo());
	assert!(!session.redo());
}

#[test]
fn set_caption_resets_history() {
	let mut session = session_with("first");
	session.replace_text("first!");
	session.set_caption("second");
	assert_eq!(session.text(), "second");
	assert_eq!(session.history().len(), 1);
	assert!(!session.can_undo());
}

#[test]
fn begin_generation_drops_everything() {
	let mut session = session_with("draft");
	session.clear_all();
	session.begin_generation();
	assert_eq!(session.text(), "");
	assert!(session.history().is_empty());
	assert!(session.preview().is_placeholder());
}

#[test]
fn format_records_and_reselects() {
	let mut session = session_with("big news today");
	let outcome = session.apply_format(FormatOp::Bold, 0, 8).unwrap();
	assert_eq!(session.text(), "𝐛𝐢𝐠 𝐧𝐞𝐰𝐬 today");
	assert_eq!(outcome.selection, Selection::new(0, 8));
	assert_eq!(session.history().len(), 2);
	assert_eq!(
		session.history().entries()[1].origin,
		EditOrigin::Format
	);
}

#[test]
fn underline_selection_uses_transformed_length() {
	let mut session = session_with("go team");
	let outcome = session.apply_format(FormatOp::Underline, 3, 7).unwrap();
	assert_eq!(outcome.selection, Selection::new(3, 11));
	assert_eq!(session.len_chars(), 11);
}

#[test]
fn empty_selection_changes_nothing() {
	let mut session = session_with("hello");
	assert_eq!(session.apply_format(FormatOp::Italic, 2, 2), None);
	assert_eq!(session.text(), "hello");
	assert_eq!(session.history().len(), 1);
}

#[test]
fn reversed_offsets_are_ordered() {
	let mut session = session_with("abc");
	let outcome = session.apply_format(FormatOp::Bold, 3, 1).unwrap();
	assert_eq!(session.text(), "a𝐛𝐜");
	assert_eq!(outcome.selection, Selection::new(1, 3));
}

#[test]
fn emoji_inserts_at_caret_and_records() {
	let mut session = session_with("abcdef");
	let caret = session.insert_emoji("🚀", 3);
	assert_eq!(session.text(), "abc🚀def");
	assert_eq!(caret, 4);
	assert!(session.undo());
	assert_eq!(session.text(), "abcdef");
}

#[test]
fn empty_emoji_is_ignored() {
	let mut session = session_with("abc");
	assert_eq!(session.insert_emoji("", 9), 3);
	assert_eq!(session.history().len(), 1);
}

#[test]
fn clear_all_is_undoable() {
	let mut session = session_with("keep me");
	session.clear_all();
	assert_eq!(session.text(), "");
	assert_eq!(session.history().len(), 2);
	assert!(session.undo());
	assert_eq!(session.text(), "keep me");
	assert!(session.redo());
	assert_eq!(session.text(), "");
}

#[test]
fn typing_records_each_change() {
	let mut session = session_with("");
	session.replace_text("h");
	session.replace_text("hi");
	session.replace_text("hi");
	assert_eq!(session.history().len(), 3);
}

#[test]
fn typing_after_undo_prunes_redo() {
	let mut session = session_with("A");
	session.replace_text("B");
	session.undo();
	session.replace_text("C");
	assert!(!session.can_redo());
	assert!(!session.redo());
	assert_eq!(session.text(), "C");
	let texts: Vec<String> = session
		.history()
		.entries()
		.iter()
		.map(|e| e.text.to_string())
		.collect();
	assert_eq!(texts, ["A", "C"]);
}

#[test]
fn coalescing_config_is_honored() {
	let config = EditorConfig {
		history: HistoryConfig {
			coalesce_typing: true,
			max_entries: None,
		},
		..EditorConfig::default()
	};
	let mut session = CaptionSession::with_config(&config);
	session.set_caption("x");
	session.replace_text("xy");
	session.replace_text("xyz");
	assert_eq!(session.history().len(), 2);
	session.undo();
	assert_eq!(session.text(), "x");
}

#[test]
fn preview_and_stats_follow_text() {
	let mut session = session_with("hi");
	session.apply_format(FormatOp::Strikethrough, 0, 2);
	assert_eq!(session.preview().to_string(), "h\u{0336}i\u{0336}");
	let stats = session.stats();
	assert_eq!(stats.chars, 4);
	assert_eq!(stats.graphemes, 2);
}
