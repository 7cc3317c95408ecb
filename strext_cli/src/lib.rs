use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;
use clap::ValueEnum;
use strext_core::StrextError;
use strext_core::StrextResult;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Escape, scan, parse, and template text from the command line.",
	long_about = "strext exposes a small string toolkit: reversible escaping, strict integer \
	              parsing, `${name}` template substitution, and helpers for splitting, joining, \
	              trimming, and indenting text.\n\nWhen TEXT is omitted it is read from \
	              stdin.\n\nDefaults for template variables and escaping can be set in a \
	              `strext.toml` file at the project root."
)]
pub struct StrextCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Directory searched for `strext.toml`.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Enable verbose output.
	#[arg(long, short, global = true, default_value_t = false)]
	pub verbose: bool,

	/// Disable colored output.
	#[arg(long, global = true, default_value_t = false)]
	pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Prefix selected characters with an escape character.
	///
	/// The escape character itself is always escaped, so the output can be
	/// restored with `strext unescape`.
	Escape {
		/// Text to escape.
		text: Option<String>,

		/// The escape character. Overrides `[escape] character`.
		#[arg(long)]
		escape_char: Option<String>,

		/// Characters that must be escaped. Overrides `[escape] characters`.
		#[arg(long)]
		chars: Option<String>,
	},
	/// Remove escape characters, keeping the characters they protect.
	Unescape {
		/// Text to unescape.
		text: Option<String>,

		/// The escape character. Overrides `[escape] character`.
		#[arg(long)]
		escape_char: Option<String>,
	},
	/// Substitute `${name}` tokens.
	///
	/// Bindings come from `[variables]` in `strext.toml` and from `--var`
	/// flags, with flags taking precedence. Undefined variables expand to
	/// nothing unless `--strict` is set. An unterminated `${` drops the rest
	/// of the text.
	Instantiate {
		/// Template text.
		#[arg(conflicts_with = "file")]
		text: Option<String>,

		/// Read the template from a file.
		#[arg(long)]
		file: Option<PathBuf>,

		/// Bind a variable, written as `name=value`. May be repeated.
		#[arg(long = "var", value_name = "NAME=VALUE", value_parser = parse_binding)]
		vars: Vec<(String, String)>,

		/// Fail when the template references undefined variables.
		#[arg(long, default_value_t = false)]
		strict: bool,
	},
	/// Parse text as a signed 64-bit integer.
	///
	/// Exits with a non-zero status when the text is not a number or is out
	/// of range.
	#[command(allow_negative_numbers = true)]
	ToInteger {
		/// Text to parse.
		text: Option<String>,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Split text at each occurrence of a delimiter.
	Split {
		/// Text to split.
		text: Option<String>,

		/// One or more characters to split at.
		#[arg(long, short)]
		delimiter: String,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
	/// Join pieces with a delimiter.
	Join {
		/// Pieces to join.
		pieces: Vec<String>,

		/// Text placed between each piece.
		#[arg(long, short)]
		delimiter: String,
	},
	/// Remove leading and trailing whitespace.
	Trim {
		/// Text to trim.
		text: Option<String>,
	},
	/// Indent every line but the first. Lines end at `\r\n`.
	Indent {
		/// Text to indent.
		text: Option<String>,

		/// Number of spaces to insert.
		#[arg(long, short, default_value_t = 2)]
		columns: usize,
	},
	/// Lower-case ASCII letters.
	Lower {
		/// Text to lower-case.
		text: Option<String>,
	},
	/// Split a bracketed list such as `[a, {b, c}]` into its top-level
	/// elements.
	Elements {
		/// The list text, including its outer delimiters.
		text: Option<String>,

		#[arg(long, value_enum, default_value_t = OutputFormat::Text)]
		format: OutputFormat,
	},
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
	/// Human-readable text output, one item per line.
	Text,
	/// JSON output for programmatic consumption.
	Json,
}

/// Parse a `name=value` binding. The value may itself contain `=`.
pub fn parse_binding(binding: &str) -> StrextResult<(String, String)> {
	let Some((name, value)) = binding.split_once('=') else {
		return Err(StrextError::InvalidVariable(binding.to_string()));
	};

	Ok((name.to_string(), value.to_string()))
}
