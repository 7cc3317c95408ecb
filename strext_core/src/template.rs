use std::collections::BTreeSet;
use std::collections::HashMap;
use std::ops::Range;

use derive_more::Deref;
use derive_more::DerefMut;

use crate::escape::DEFAULT_ESCAPE_CHARACTER;
use crate::scanner::scan;

/// Variable names mapped to the values substituted for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deref, DerefMut)]
pub struct TemplateBindings(HashMap<String, String>);

impl TemplateBindings {
	pub fn new() -> Self {
		Self::default()
	}

	/// Bind `name` to `value`, returning the previous value if there was one.
	pub fn bind(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
		self.0.insert(name.into(), value.into())
	}

	pub fn lookup(&self, name: &str) -> Option<&str> {
		self.0.get(name).map(String::as_str)
	}
}

impl From<HashMap<String, String>> for TemplateBindings {
	fn from(map: HashMap<String, String>) -> Self {
		Self(map)
	}
}

impl<K, V> FromIterator<(K, V)> for TemplateBindings
where
	K: Into<String>,
	V: Into<String>,
{
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into()))
				.collect(),
		)
	}
}

impl<K, V> Extend<(K, V)> for TemplateBindings
where
	K: Into<String>,
	V: Into<String>,
{
	fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
		self.0.extend(
			iter.into_iter()
				.map(|(name, value)| (name.into(), value.into())),
		);
	}
}

/// A piece of a parsed template. Every piece borrows from the template text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePart<'a> {
	/// Literal text copied to the output unchanged.
	Text(&'a str),
	/// The name inside a `${...}` token.
	Variable(&'a str),
	/// A `${` with no matching `}`. `offset` is the byte offset of its `$`.
	/// Nothing from the offset to the end of the template is rendered.
	Unterminated { offset: usize },
}

const TOKEN_START: char = '$';
const TOKEN_OPEN: char = '{';

/// Split `text` into literal text and `${name}` tokens.
///
/// `\$` yields a literal `$` that never starts a token. A backslash before any
/// other character is kept along with that character, and neither one is
/// treated as part of a token. The name of a token runs to the `}` that
/// balances its `{`, so `${a{b}c}` names the variable `a{b}c`.
pub fn parse_template(text: &str) -> Vec<TemplatePart<'_>> {
	let mut parts = Vec::new();
	let mut literal_start = 0;
	let mut chars = text.char_indices().peekable();

	while let Some((index, ch)) = chars.next() {
		match ch {
			DEFAULT_ESCAPE_CHARACTER => {
				match chars.peek() {
					Some(&(next_index, TOKEN_START)) => {
						push_text(&mut parts, text, literal_start..index);
						literal_start = next_index;
						chars.next();
					}
					Some(_) => {
						chars.next();
					}
					None => {}
				}
			}
			TOKEN_START => {
				let Some(&(open_index, TOKEN_OPEN)) = chars.peek() else {
					continue;
				};

				push_text(&mut parts, text, literal_start..index);
				let span = scan(text, open_index + TOKEN_OPEN.len_utf8(), text.len());
				if !span.terminated {
					tracing::debug!(offset = index, "dropping unterminated template token");
					parts.push(TemplatePart::Unterminated { offset: index });
					return parts;
				}

				parts.push(TemplatePart::Variable(span.body(text)));
				literal_start = span.end;
				while chars.next_if(|&(next_index, _)| next_index < span.end).is_some() {}
			}
			_ => {}
		}
	}

	push_text(&mut parts, text, literal_start..text.len());
	parts
}

fn push_text<'a>(parts: &mut Vec<TemplatePart<'a>>, text: &'a str, range: Range<usize>) {
	if !range.is_empty() {
		parts.push(TemplatePart::Text(&text[range]));
	}
}

/// Replace every `${name}` in `text` with its bound value.
///
/// Undefined names expand to nothing. An unterminated token drops everything
/// from its `$` to the end of the text. This never fails.
pub fn instantiate(text: &str, bindings: &TemplateBindings) -> String {
	let mut output = String::with_capacity(text.len());

	for part in parse_template(text) {
		match part {
			TemplatePart::Text(literal) => output.push_str(literal),
			TemplatePart::Variable(name) => {
				if let Some(value) = bindings.lookup(name) {
					output.push_str(value);
				} else {
					tracing::trace!(name, "undefined template variable");
				}
			}
			TemplatePart::Unterminated { .. } => break,
		}
	}

	output
}

/// The names referenced by terminated tokens, in order of appearance.
pub fn template_variables(text: &str) -> Vec<&str> {
	parse_template(text)
		.into_iter()
		.filter_map(|part| {
			match part {
				TemplatePart::Variable(name) => Some(name),
				_ => None,
			}
		})
		.collect()
}

/// The sorted, de-duplicated names referenced in `text` that `bindings` does
/// not define.
pub fn find_undefined_variables(text: &str, bindings: &TemplateBindings) -> Vec<String> {
	template_variables(text)
		.into_iter()
		.filter(|name| !bindings.contains_key(*name))
		.map(str::to_string)
		.collect::<BTreeSet<_>>()
		.into_iter()
		.collect()
}
