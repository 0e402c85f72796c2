use pretty_assertions::assert_eq;
use proptest::prelude::*;
use rstest::rstest;

use super::*;

#[rstest]
#[case("bold", FormatOp::Bold)]
#[case("italic", FormatOp::Italic)]
#[case("bold-italic", FormatOp::BoldItalic)]
#[case("strikethrough", FormatOp::Strikethrough)]
#[case("underline", FormatOp::Underline)]
#[case("bullet", FormatOp::BulletList)]
#[case("bullet-list", FormatOp::BulletList)]
#[case("numbered", FormatOp::NumberedList)]
#[case("Numbered-List", FormatOp::NumberedList)]
#[case(" BOLD ", FormatOp::Bold)]
fn parses_op_names(#[case] name: &str, #[case] expected: FormatOp) {
	assert_eq!(name.parse::<FormatOp>(), Ok(expected));
}

#[test]
fn unknown_op_suggests_nearest() {
	let err = "itallic".parse::<FormatOp>().unwrap_err();
	assert_eq!(
		err,
		FormatOpError::Unknown {
			name: "itallic".into(),
			suggestion: Some("italic"),
		}
	);
	assert_eq!(
		err.to_string(),
		"unknown format operation: itallic (did you mean 'italic'?)"
	);
}

#[test]
fn unrelated_op_has_no_suggestion() {
	let err = "superscript".parse::<FormatOp>().unwrap_err();
	assert_eq!(err.to_string(), "unknown format operation: superscript");
}

#[test]
fn bold_replaces_selection_in_place() {
	let mut buffer = Rope::from("say hello now");
	let outcome = apply_format(&mut buffer, Selection::new(4, 9), FormatOp::Bold).unwrap();
	assert_eq!(buffer.to_string(), "say 𝐡𝐞𝐥𝐥𝐨 now");
	assert_eq!(outcome.selection, Selection::new(4, 9));
	assert_eq!(outcome.removed, 5);
	assert_eq!(outcome.inserted, 5);
}

#[test]
fn strikethrough_selection_covers_expanded_text() {
	let mut buffer = Rope::from("ohhi!");
	let outcome =
		apply_format(&mut buffer, Selection::new(2, 4), FormatOp::Strikethrough).unwrap();
	assert_eq!(buffer.to_string(), "ohh\u{0336}i\u{0336}!");
	assert_eq!(outcome.selection, Selection::new(2, 6));
	assert_eq!(buffer.slice(2..6).to_string(), "h\u{0336}i\u{0336}");
}

#[test]
fn underline_selection_covers_expanded_text() {
	let mut buffer = Rope::from("hi");
	let outcome = apply_format(&mut buffer, Selection::new(0, 2), FormatOp::Underline).unwrap();
	assert_eq!(buffer.len_chars(), 4);
	assert_eq!(outcome.selection, Selection::new(0, 4));
}

#[test]
fn list_ops_grow_selection() {
	let mut buffer = Rope::from("Intro\nx\ny\nOutro");
	let outcome =
		apply_format(&mut buffer, Selection::new(6, 9), FormatOp::NumberedList).unwrap();
	assert_eq!(buffer.to_string(), "Intro\n1. x\n2. y\nOutro");
	assert_eq!(outcome.selection, Selection::new(6, 15));
}

#[test]
fn reversed_offsets_format_the_ordered_span() {
	let mut buffer = Rope::from("abc");
	let outcome = apply_format(&mut buffer, Selection::new(3, 1), FormatOp::Bold).unwrap();
	assert_eq!(buffer.to_string(), "a𝐛𝐜");
	assert_eq!(outcome.selection, Selection::new(1, 3));

	let outcome = apply_format(&mut buffer, Selection::new(99, 2), FormatOp::Italic).unwrap();
	assert_eq!(outcome.selection, Selection::new(2, 3));
}

#[test]
fn selection_inside_cluster_is_reported() {
	let mut buffer = Rope::from("h\u{0336}i");
	let outcome = apply_format(&mut buffer, Selection::new(0, 1), FormatOp::Bold).unwrap();
	assert!(outcome.splits_cluster);
	assert_eq!(buffer.to_string(), "𝐡\u{0336}i");

	let outcome = apply_format(&mut buffer, Selection::new(2, 3), FormatOp::Bold).unwrap();
	assert!(!outcome.splits_cluster);
}

#[test]
fn empty_selection_is_noop() {
	let mut buffer = Rope::from("unchanged");
	assert_eq!(apply_format(&mut buffer, Selection::point(3), FormatOp::Bold), None);
	assert_eq!(buffer.to_string(), "unchanged");
}

#[test]
fn out_of_range_selection_is_clamped() {
	let mut buffer = Rope::from("abc");
	let outcome = apply_format(&mut buffer, Selection::new(1, 50), FormatOp::Bold).unwrap();
	assert_eq!(buffer.to_string(), "a𝐛𝐜");
	assert_eq!(outcome.selection, Selection::new(1, 3));

	assert_eq!(apply_format(&mut buffer, Selection::new(10, 20), FormatOp::Bold), None);
}

#[test]
fn only_glyph_styles_preserve_length() {
	let preserving: Vec<_> = FormatOp::iter().filter(|op| op.preserves_length()).collect();
	assert_eq!(preserving, [FormatOp::Bold, FormatOp::Italic, FormatOp::BoldItalic]);
}

proptest! {
	#[test]
	fn selection_matches_transformed_len(
		text in "[a-z \n]{1,40}",
		a in 0usize..48,
		b in 0usize..48,
		op_idx in 0usize..7,
	) {
		let op = FormatOp::iter().nth(op_idx).unwrap();
		let mut buffer = Rope::from(text.as_str());
		let before = buffer.len_chars();
		let sel = Selection::new(a, b).clamp(before);
		let original = buffer.slice(sel.range()).to_string();

		match apply_format(&mut buffer, Selection::new(a, b), op) {
			None => {
				prop_assert!(sel.is_empty());
				prop_assert_eq!(buffer.to_string(), text);
			}
			Some(outcome) => {
				let formatted = op.apply(&original);
				prop_assert_eq!(outcome.selection.start(), sel.start());
				prop_assert_eq!(outcome.selection.len(), formatted.chars().count());
				prop_assert_eq!(buffer.slice(outcome.selection.range()).to_string(), formatted);
				prop_assert_eq!(buffer.len_chars(), before - sel.len() + outcome.inserted);
			}
		}
	}
}
