use std::collections::BTreeSet;

use crate::TemplateBindings;

/// A template touching every substitution rule: bound and unbound names,
/// braces in literal text, escaped `$` and `{`, and an unterminated token.
pub const GREETING_TEMPLATE: &str = r"
Hello, ${who}!
The $10,000 {which you owe ${who}}
is due to \${someone}
$\{when}.  ${something} This one ends ${early
    ";

pub const GREETING_INSTANCE: &str = r"
Hello, World!
The $10,000 {which you owe World}
is due to ${someone}
$\{when}.   This one ends ";

pub fn greeting_bindings() -> TemplateBindings {
	[("who", "World"), ("when", "tomorrow"), ("what", "example")]
		.into_iter()
		.collect()
}

pub fn caret_escaped() -> BTreeSet<char> {
	BTreeSet::from([' ', '!', '^'])
}

/// The decimal text of `value + 1` for a non-negative `value`, or of
/// `value - 1` for a negative one, computed on the digits so that it works
/// past the type's range.
pub fn step_away_from_zero(value: &str) -> String {
	let (sign, digits) = value.strip_prefix('-').map_or(("", value), |rest| ("-", rest));
	let mut digits: Vec<u8> = digits.bytes().collect();

	let mut carry = true;
	for digit in digits.iter_mut().rev() {
		if *digit == b'9' {
			*digit = b'0';
		} else {
			*digit += 1;
			carry = false;
			break;
		}
	}

	if carry {
		digits.insert(0, b'1');
	}

	format!("{sign}{}", String::from_utf8_lossy(&digits))
}
