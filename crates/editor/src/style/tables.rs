/// Substitution table for one style, indexed by ASCII offset.
pub(super) struct StyleTable {
	upper: [char; 26],
	lower: [char; 26],
	digits: Option<[char; 10]>,
}

impl StyleTable {
	/// Returns the styled glyph for `ch`, or `None` when the table has no entry.
	pub(super) fn lookup(&self, ch: char) -> Option<char> {
		match ch {
			'A'..='Z' => Some(self.upper[ascii_offset(ch, b'A')]),
			'a'..='z' => Some(self.lower[ascii_offset(ch, b'a')]),
			'0'..='9' => self.digits.map(|digits| digits[ascii_offset(ch, b'0')]),
			_ => None,
		}
	}
}

#[inline]
fn ascii_offset(ch: char, base: u8) -> usize {
	usize::from(ch as u8 - base)
}

/// Mathematical bold.
pub(super) static BOLD: StyleTable = StyleTable {
	upper: [
		'𝐀', '𝐁', '𝐂', '𝐃', '𝐄', '𝐅', '𝐆', '𝐇', '𝐈', '𝐉', '𝐊', '𝐋', '𝐌',
		'𝐍', '𝐎', '𝐏', '𝐐', '𝐑', '𝐒', '𝐓', '𝐔', '𝐕', '𝐖', '𝐗', '𝐘', '𝐙',
	],
	lower: [
		'𝐚', '𝐛', '𝐜', '𝐝', '𝐞', '𝐟', '𝐠', '𝐡', '𝐢', '𝐣', '𝐤', '𝐥', '𝐦',
		'𝐧', '𝐨', '𝐩', '𝐪', '𝐫', '𝐬', '𝐭', '𝐮', '𝐯', '𝐰', '𝐱', '𝐲', '𝐳',
	],
	digits: Some([
		'𝟎', '𝟏', '𝟐', '𝟑', '𝟒', '𝟓', '𝟔', '𝟕', '𝟖', '𝟗',
	]),
};

/// Mathematical italic. Lowercase `h` lives in the Letterlike Symbols block.
pub(super) static ITALIC: StyleTable = StyleTable {
	upper: [
		'𝐴', '𝐵', '𝐶', '𝐷', '𝐸', '𝐹', '𝐺', '𝐻', '𝐼', '𝐽', '𝐾', '𝐿', '𝑀',
		'𝑁', '𝑂', '𝑃', '𝑄', '𝑅', '𝑆', '𝑇', '𝑈', '𝑉', '𝑊', '𝑋', '𝑌', '𝑍',
	],
	lower: [
		'𝑎', '𝑏', '𝑐', '𝑑', '𝑒', '𝑓', '𝑔', 'ℎ', '𝑖', '𝑗', '𝑘', '𝑙', '𝑚',
		'𝑛', '𝑜', '𝑝', '𝑞', '𝑟', '𝑠', '𝑡', '𝑢', '𝑣', '𝑤', '𝑥', '𝑦', '𝑧',
	],
	digits: None,
};

/// Mathematical bold italic.
pub(super) static BOLD_ITALIC: StyleTable = StyleTable {
	upper: [
		'𝑨', '𝑩', '𝑪', '𝑫', '𝑬', '𝑭', '𝑮', '𝑯', '𝑰', '𝑱', '𝑲', '𝑳', '𝑴',
		'𝑵', '𝑶', '𝑷', '𝑸', '𝑹', '𝑺', '𝑻', '𝑼', '𝑽', '𝑾', '𝑿', '𝒀', '𝒁',
	],
	lower: [
		'𝒂', '𝒃', '𝒄', '𝒅', '𝒆', '𝒇', '𝒈', '𝒉', '𝒊', '𝒋', '𝒌', '𝒍', '𝒎',
		'𝒏', '𝒐', '𝒑', '𝒒', '𝒓', '𝒔', '𝒕', '𝒖', '𝒗', '𝒘', '𝒙', '𝒚', '𝒛',
	],
	digits: None,
};
