//! Splitting of bracketed lists such as `[a, {b, c}, "d,e"]` into their
//! top-level elements.

use crate::text::trim;

const ELEMENT_SEPARATOR: u8 = b',';
const QUOTE: u8 = b'"';
const STRING_ESCAPE: u8 = b'\\';

/// Return the next element of `text[start..end]`.
///
/// The element ends before a comma at the outermost level, or just after a
/// closing delimiter that balances more closers than openers seen so far.
/// Nesting is tracked across `[]`, `{}`, `()`, and `<>` without pairing them by
/// kind. Commas and delimiters inside double-quoted strings are ignored, and a
/// `\` inside a string escapes the next character.
pub fn parse_element(text: &str, start: usize, end: usize) -> &str {
	let end = end.min(text.len());
	let Some(region) = text.get(start..end) else {
		return "";
	};

	let mut in_string = false;
	let mut escaped = false;
	let mut level = 1usize;
	let mut length = 0;

	for &byte in region.as_bytes() {
		if in_string {
			if escaped {
				escaped = false;
			} else if byte == STRING_ESCAPE {
				escaped = true;
			} else if byte == QUOTE {
				in_string = false;
			}
		} else {
			match byte {
				ELEMENT_SEPARATOR if level == 1 => break,
				QUOTE => in_string = true,
				b'[' | b'{' | b'(' | b'<' => level += 1,
				b']' | b'}' | b')' | b'>' => level -= 1,
				_ => {}
			}
		}

		length += 1;
		if level == 0 {
			break;
		}
	}

	&region[..length]
}

/// Split a delimited list into its trimmed, non-empty top-level elements.
///
/// The first and last characters of `text` are taken to be the list's own
/// delimiters and are not part of any element.
pub fn split_elements(text: &str) -> Vec<&str> {
	let mut bounds = text.char_indices();
	let (Some((_, first)), Some((last, _))) = (bounds.next(), bounds.next_back()) else {
		return Vec::new();
	};

	let end = last;
	let mut index = first.len_utf8();
	let mut elements = Vec::new();

	while index < end {
		let element = parse_element(text, index, end);
		let value = trim(element);
		if !value.is_empty() {
			elements.push(value);
		}

		let next = index + element.len();
		index = if text.as_bytes().get(next) == Some(&ELEMENT_SEPARATOR) {
			next + 1
		} else {
			next
		};
	}

	elements
}
