use serde::Serialize;

use crate::StrextError;
use crate::StrextResult;

/// The result of parsing text as a signed integer.
///
/// `Overflow` and `Underflow` are kept apart, but callers that only care
/// whether the value fits can use [`ParseOutcome::is_out_of_range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "outcome", content = "value", rename_all = "snake_case")]
pub enum ParseOutcome<T = i64> {
	/// The text was a well-formed integer within range.
	Success(T),
	/// The text was well formed but larger than the type's maximum.
	Overflow,
	/// The text was well formed but smaller than the type's minimum.
	Underflow,
	/// The text was not an optionally signed sequence of decimal digits.
	Invalid,
}

impl<T> ParseOutcome<T> {
	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success(_))
	}

	pub fn is_out_of_range(&self) -> bool {
		matches!(self, Self::Overflow | Self::Underflow)
	}

	pub fn value(self) -> Option<T> {
		match self {
			Self::Success(value) => Some(value),
			_ => None,
		}
	}

	/// Convert into a `Result`, using `text` (the parsed input) to describe the
	/// failure.
	pub fn into_result(self, text: &str) -> StrextResult<T> {
		match self {
			Self::Success(value) => Ok(value),
			Self::Overflow => Err(StrextError::Overflow(text.to_string())),
			Self::Underflow => Err(StrextError::Underflow(text.to_string())),
			Self::Invalid => Err(StrextError::InvalidNumber(text.to_string())),
		}
	}
}

/// Signed primitive integers that [`parse_integer`] can produce.
pub trait SignedInteger: Copy + sealed::Sealed {
	#[doc(hidden)]
	const ZERO: Self;
	#[doc(hidden)]
	const TEN: Self;

	#[doc(hidden)]
	fn from_digit(digit: u8) -> Self;
	#[doc(hidden)]
	fn checked_mul(self, rhs: Self) -> Option<Self>;
	#[doc(hidden)]
	fn checked_add(self, rhs: Self) -> Option<Self>;
	#[doc(hidden)]
	fn checked_sub(self, rhs: Self) -> Option<Self>;
}

mod sealed {
	pub trait Sealed {}
}

macro_rules! impl_signed_integer {
	($($ty:ty),* $(,)?) => {
		$(
			impl sealed::Sealed for $ty {}

			impl SignedInteger for $ty {
				const ZERO: Self = 0;
				const TEN: Self = 10;

				fn from_digit(digit: u8) -> Self {
					digit as Self
				}

				fn checked_mul(self, rhs: Self) -> Option<Self> {
					<$ty>::checked_mul(self, rhs)
				}

				fn checked_add(self, rhs: Self) -> Option<Self> {
					<$ty>::checked_add(self, rhs)
				}

				fn checked_sub(self, rhs: Self) -> Option<Self> {
					<$ty>::checked_sub(self, rhs)
				}
			}
		)*
	};
}

impl_signed_integer!(i8, i16, i32, i64, i128, isize);

/// Parse `text` as an `i64`, the widest native signed integer.
pub fn to_integer(text: &str) -> ParseOutcome<i64> {
	parse_integer(text)
}

/// Parse `text` as a `T`.
///
/// Accepts an optional `+` or `-` followed by one or more ASCII digits and
/// nothing else. Negative numbers are accumulated downwards from zero so that
/// `T::MIN` parses even though its magnitude exceeds `T::MAX`. Parsing stops
/// at the first digit that cannot be folded in without leaving `T`'s range.
pub fn parse_integer<T: SignedInteger>(text: &str) -> ParseOutcome<T> {
	let (negative, digits) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	if digits.is_empty() {
		return ParseOutcome::Invalid;
	}

	let mut value = T::ZERO;
	for byte in digits.bytes() {
		if !byte.is_ascii_digit() {
			return ParseOutcome::Invalid;
		}

		let digit = T::from_digit(byte - b'0');
		let next = value.checked_mul(T::TEN).and_then(|shifted| {
			if negative {
				shifted.checked_sub(digit)
			} else {
				shifted.checked_add(digit)
			}
		});

		match next {
			Some(next) => value = next,
			None if negative => return ParseOutcome::Underflow,
			None => return ParseOutcome::Overflow,
		}
	}

	ParseOutcome::Success(value)
}
