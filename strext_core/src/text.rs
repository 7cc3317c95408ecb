//! Small helpers for splitting, joining, trimming, and indenting text.

/// The line terminator recognised and produced by [`indent`].
pub const LINE_TERMINATOR: &str = "\r\n";

/// Split `text` at each non-overlapping occurrence of `delimiter`, scanning
/// left to right.
///
/// Empty pieces are kept, including a leading or trailing one when `text`
/// starts or ends with the delimiter. An empty delimiter never matches, so the
/// whole text comes back as a single piece.
pub fn split<'a>(text: &'a str, delimiter: &str) -> Vec<&'a str> {
	if delimiter.is_empty() {
		return vec![text];
	}

	text.split(delimiter).collect()
}

/// Join `pieces` with `delimiter` between each adjacent pair.
pub fn join<S: AsRef<str>>(pieces: &[S], delimiter: &str) -> String {
	let mut output = String::new();

	for (index, piece) in pieces.iter().enumerate() {
		if index > 0 {
			output.push_str(delimiter);
		}
		output.push_str(piece.as_ref());
	}

	output
}

/// Remove leading and trailing spaces, tabs, carriage returns, and newlines.
pub fn trim(text: &str) -> &str {
	text.trim_matches(|ch| matches!(ch, ' ' | '\t' | '\r' | '\n'))
}

/// Prefix every line except the first with `columns` spaces.
///
/// Lines end at `\r\n`, and each terminator stays attached to its line.
pub fn indent(text: &str, columns: usize) -> String {
	let padding = " ".repeat(columns);
	let mut output = String::with_capacity(text.len());

	for (index, line) in text.split_inclusive(LINE_TERMINATOR).enumerate() {
		if index > 0 {
			output.push_str(&padding);
		}
		output.push_str(line);
	}

	output
}

/// Lower-case ASCII letters. Every other character is left as it is.
pub fn to_lower(text: &str) -> String {
	text.to_ascii_lowercase()
}
