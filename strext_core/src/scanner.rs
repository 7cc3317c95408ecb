use std::ops::Range;

/// An opening and closing delimiter pair matched by depth counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Delimiters {
	pub open: char,
	pub close: char,
}

impl Delimiters {
	pub const ANGLES: Self = Self::new('<', '>');
	pub const BRACES: Self = Self::new('{', '}');
	pub const BRACKETS: Self = Self::new('[', ']');
	pub const PARENTHESES: Self = Self::new('(', ')');

	pub const fn new(open: char, close: char) -> Self {
		Self { open, close }
	}
}

impl Default for Delimiters {
	fn default() -> Self {
		Self::BRACES
	}
}

/// One balanced-delimiter region found by [`scan`].
///
/// `start..end` are byte offsets into the scanned text. When the region is
/// `terminated`, the final character of the span is the matching closing
/// delimiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentSpan {
	pub start: usize,
	pub end: usize,
	pub terminated: bool,
}

impl ComponentSpan {
	pub fn range(&self) -> Range<usize> {
		self.start..self.end
	}

	pub fn len(&self) -> usize {
		self.end - self.start
	}

	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}

	/// The spanned text, including the closing delimiter when terminated.
	pub fn as_str<'a>(&self, text: &'a str) -> &'a str {
		&text[self.range()]
	}

	/// The spanned text without its closing delimiter.
	pub fn body<'a>(&self, text: &'a str) -> &'a str {
		let spanned = self.as_str(text);
		if !self.terminated {
			return spanned;
		}

		spanned
			.char_indices()
			.next_back()
			.map_or(spanned, |(index, _)| &spanned[..index])
	}
}

/// Scan for the `}` that balances an already consumed `{`.
///
/// `start` is the byte offset just past the opening brace.
pub fn scan(text: &str, start: usize, end: usize) -> ComponentSpan {
	scan_delimited(text, start, end, Delimiters::BRACES)
}

/// Scan `text[start..end]` for the closing delimiter that balances an opening
/// delimiter the caller has already consumed.
///
/// Every `open` increments the depth and every `close` decrements it. The
/// returned span ends just after the closing delimiter that brings the depth
/// to zero, or at `end` when the input runs out first. When `open` and
/// `close` are the same character, each occurrence closes the region.
///
/// Bounds past the input or off a character boundary give an empty,
/// unterminated span that still slices `text` cleanly.
pub fn scan_delimited(text: &str, start: usize, end: usize, delimiters: Delimiters) -> ComponentSpan {
	let end = end.min(text.len());
	let start = start.min(end);
	let Some(region) = text.get(start..end) else {
		let anchor = (0..=start)
			.rev()
			.find(|&index| text.is_char_boundary(index))
			.unwrap_or_default();
		return ComponentSpan {
			start: anchor,
			end: anchor,
			terminated: false,
		};
	};

	let mut depth = 1usize;
	for (offset, ch) in region.char_indices() {
		if ch == delimiters.close {
			depth -= 1;
			if depth == 0 {
				return ComponentSpan {
					start,
					end: start + offset + ch.len_utf8(),
					terminated: true,
				};
			}
		} else if ch == delimiters.open {
			depth += 1;
		}
	}

	ComponentSpan {
		start,
		end,
		terminated: false,
	}
}
