use std::collections::BTreeSet;

/// The escape character used by the template engine and as the default for
/// [`EscapeSpec`].
pub const DEFAULT_ESCAPE_CHARACTER: char = '\\';

/// An escape character together with the characters that must be prefixed
/// by it when producing escaped output.
///
/// The escape character is always treated as a member of the escaped set,
/// whether or not it was supplied, so that [`EscapeSpec::escape`] output can
/// always be reversed by [`EscapeSpec::unescape`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscapeSpec {
	escape_character: char,
	characters: BTreeSet<char>,
}

impl EscapeSpec {
	pub fn new(escape_character: char, characters: impl IntoIterator<Item = char>) -> Self {
		Self {
			escape_character,
			characters: characters.into_iter().collect(),
		}
	}

	pub fn escape_character(&self) -> char {
		self.escape_character
	}

	/// The explicitly configured characters. This does not include the escape
	/// character unless it was passed in.
	pub fn characters(&self) -> &BTreeSet<char> {
		&self.characters
	}

	/// Returns true if `ch` must be preceded by the escape character.
	pub fn requires_escape(&self, ch: char) -> bool {
		ch == self.escape_character || self.characters.contains(&ch)
	}

	pub fn escape(&self, text: &str) -> String {
		escape(text, self.escape_character, &self.characters)
	}

	pub fn unescape(&self, text: &str) -> String {
		unescape(text, self.escape_character)
	}
}

impl Default for EscapeSpec {
	fn default() -> Self {
		Self::new(DEFAULT_ESCAPE_CHARACTER, [])
	}
}

/// Prefix every character of `text` that is the escape character or a member
/// of `characters` with `escape_character`.
pub fn escape(text: &str, escape_character: char, characters: &BTreeSet<char>) -> String {
	let mut output = String::with_capacity(text.len());

	for ch in text.chars() {
		if ch == escape_character || characters.contains(&ch) {
			output.push(escape_character);
		}
		output.push(ch);
	}

	output
}

/// Remove escape characters from `text`.
///
/// The character following an escape character is copied verbatim and never
/// starts another escape, so `^^` becomes `^`. A lone escape character at the
/// very end of the input is dropped.
pub fn unescape(text: &str, escape_character: char) -> String {
	let mut output = String::with_capacity(text.len());
	let mut chars = text.chars();

	while let Some(ch) = chars.next() {
		if ch == escape_character {
			if let Some(escaped) = chars.next() {
				output.push(escaped);
			}
		} else {
			output.push(ch);
		}
	}

	output
}
