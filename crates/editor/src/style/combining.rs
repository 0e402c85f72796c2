/// U+0336 COMBINING LONG STROKE OVERLAY.
pub const STRIKE_MARK: char = '\u{0336}';

/// U+0332 COMBINING LOW LINE.
pub const UNDERLINE_MARK: char = '\u{0332}';

/// Strikes through `text` by following every char with [`STRIKE_MARK`].
///
/// The result has twice as many chars as the input.
pub fn strikethrough(text: &str) -> String {
	overlay(text, STRIKE_MARK)
}

/// Underlines `text` by following every char with [`UNDERLINE_MARK`].
///
/// The result has twice as many chars as the input.
pub fn underline(text: &str) -> String {
	overlay(text, UNDERLINE_MARK)
}

fn overlay(text: &str, mark: char) -> String {
	let mut out = String::with_capacity(text.len() * (1 + mark.len_utf8()));
	for ch in text.chars() {
		out.push(ch);
		out.push(mark);
	}
	out
}
