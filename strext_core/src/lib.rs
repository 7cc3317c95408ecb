//! `strext_core` is a small text-processing toolkit. It provides reversible
//! character escaping, a balanced-delimiter scanner, strict string to integer
//! conversion with overflow and underflow detection, and a `${name}`
//! substitution engine built on the scanner.
//!
//! Every operation is a pure function of its arguments. Nothing is shared
//! between calls, so all of them are safe to use from any number of threads.
//!
//! ## Modules
//!
//! - [`escape`] — escape and unescape characters with a single escape
//!   character.
//! - [`scanner`] — find the closing delimiter that balances an opening one.
//! - [`number`] — parse decimal text into signed integers.
//! - [`template`] — substitute `${name}` tokens from a set of bindings.
//! - [`text`] — split, join, trim, indent, and lower-case text.
//! - [`elements`] — split bracketed lists into top-level elements.
//! - [`config`] — defaults loaded from `strext.toml`.
//!
//! ## Quick Start
//!
//! ```rust
//! use strext_core::ParseOutcome;
//! use strext_core::TemplateBindings;
//! use strext_core::instantiate;
//! use strext_core::to_integer;
//!
//! let bindings: TemplateBindings = [("who", "World")].into_iter().collect();
//! assert_eq!(instantiate("Hello, ${who}!", &bindings), "Hello, World!");
//!
//! assert_eq!(to_integer("-42"), ParseOutcome::Success(-42));
//! assert_eq!(to_integer("4.2"), ParseOutcome::Invalid);
//! ```

pub use config::*;
pub use elements::*;
pub use error::*;
pub use escape::*;
pub use number::*;
pub use scanner::*;
pub use template::*;
pub use text::*;

pub mod config;
pub mod elements;
#[allow(unused_assignments)]
mod error;
pub mod escape;
pub mod number;
pub mod scanner;
pub mod template;
pub mod text;

#[cfg(test)]
mod __fixtures;
