use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum StrextError {
	#[error(transparent)]
	#[diagnostic(code(strext::io_error))]
	Io(#[from] std::io::Error),

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(strext::config_parse),
		help("check that strext.toml is valid TOML with [variables] and/or [escape] sections")
	)]
	ConfigParse(String),

	#[error("not a number: `{0}`")]
	#[diagnostic(
		code(strext::invalid_number),
		help("expected an optional `+` or `-` sign followed by decimal digits")
	)]
	InvalidNumber(String),

	#[error("number is too large to represent: `{0}`")]
	#[diagnostic(code(strext::overflow))]
	Overflow(String),

	#[error("number is too small to represent: `{0}`")]
	#[diagnostic(code(strext::underflow))]
	Underflow(String),

	#[error("invalid variable binding: `{0}`")]
	#[diagnostic(
		code(strext::invalid_variable),
		help("bindings are written as `name=value`")
	)]
	InvalidVariable(String),

	#[error("escape character must be exactly one character, got `{0}`")]
	#[diagnostic(code(strext::invalid_escape_character))]
	InvalidEscapeCharacter(String),

	#[error("template references undefined variable(s): {}", .0.join(", "))]
	#[diagnostic(
		code(strext::undefined_variables),
		help("bind them with `--var name=value` or under [variables] in strext.toml")
	)]
	UndefinedVariables(Vec<String>),
}

pub type StrextResult<T> = Result<T, StrextError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
