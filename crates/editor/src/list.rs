//! Line-oriented list formatting.

use itertools::Itertools;

/// Marker placed before every non-blank line by [`bullet_list`].
pub const BULLET: &str = "• ";

/// Prefixes every non-blank line of `text` with [`BULLET`].
///
/// Lines are trimmed before prefixing; blank lines are kept as they are so
/// paragraph breaks survive.
pub fn bullet_list(text: &str) -> String {
	prefix_lines(text, || BULLET.to_owned())
}

/// Numbers every non-blank line of `text` as `1. `, `2. `, ...
///
/// Blank lines are kept and do not advance the counter.
pub fn numbered_list(text: &str) -> String {
	let mut counter = 0usize;
	prefix_lines(text, || {
		counter += 1;
		format!("{counter}. ")
	})
}

fn prefix_lines(text: &str, mut marker: impl FnMut() -> String) -> String {
	text.split('\n')
		.map(|line| {
			let trimmed = line.trim();
			if trimmed.is_empty() {
				line.to_owned()
			} else {
				let mut out = marker();
				out.push_str(trimmed);
				out
			}
		})
		.join("\n")
}
