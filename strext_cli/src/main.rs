use std::io::Read;
use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use owo_colors::OwoColorize;
use strext_cli::Commands;
use strext_cli::OutputFormat;
use strext_cli::StrextCli;
use strext_core::AnyEmptyResult;
use strext_core::AnyResult;
use strext_core::EscapeSpec;
use strext_core::StrextConfig;
use strext_core::StrextError;
use strext_core::find_undefined_variables;
use strext_core::indent;
use strext_core::instantiate;
use strext_core::join;
use strext_core::single_character;
use strext_core::split;
use strext_core::split_elements;
use strext_core::to_integer;
use strext_core::to_lower;
use strext_core::trim;
use strext_core::unescape;
use tracing_subscriber::EnvFilter;

static USE_COLOR: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(true);

fn color_enabled() -> bool {
	USE_COLOR.load(std::sync::atomic::Ordering::Relaxed)
}

/// Apply ANSI color codes only when color is enabled.
macro_rules! colored {
	($text:expr,red) => {
		if color_enabled() {
			format!("{}", $text.red())
		} else {
			format!("{}", $text)
		}
	};
	($text:expr,yellow) => {
		if color_enabled() {
			format!("{}", $text.yellow())
		} else {
			format!("{}", $text)
		}
	};
}

fn main() {
	let args = StrextCli::parse();

	// Respect NO_COLOR env var and --no-color flag.
	let use_color = !args.no_color && std::env::var_os("NO_COLOR").is_none();
	if !use_color {
		USE_COLOR.store(false, std::sync::atomic::Ordering::Relaxed);
	}

	init_tracing(args.verbose);

	// Install miette's fancy handler for rich error diagnostics.
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let Some(command) = &args.command else {
		eprintln!("No subcommand specified. Run `strext --help` for usage.");
		process::exit(1);
	};

	let result = match command {
		Commands::Escape {
			text,
			escape_char,
			chars,
		} => run_escape(&args, text.as_deref(), escape_char.as_deref(), chars.as_deref()),
		Commands::Unescape { text, escape_char } => {
			run_unescape(&args, text.as_deref(), escape_char.as_deref())
		}
		Commands::Instantiate {
			text,
			file,
			vars,
			strict,
		} => run_instantiate(&args, text.as_deref(), file.as_deref(), vars, *strict),
		Commands::ToInteger { text, format } => run_to_integer(text.as_deref(), *format),
		Commands::Split {
			text,
			delimiter,
			format,
		} => run_split(text.as_deref(), delimiter, *format),
		Commands::Join { pieces, delimiter } => {
			println!("{}", join(pieces, delimiter));
			Ok(())
		}
		Commands::Trim { text } => {
			read_input(text.as_deref()).map(|input| println!("{}", trim(&input)))
		}
		Commands::Indent { text, columns } => {
			read_input(text.as_deref()).map(|input| println!("{}", indent(&input, *columns)))
		}
		Commands::Lower { text } => {
			read_input(text.as_deref()).map(|input| println!("{}", to_lower(&input)))
		}
		Commands::Elements { text, format } => run_elements(text.as_deref(), *format),
	};

	if let Err(e) = result {
		// Try to render through miette for rich diagnostics with help text
		// and error codes.
		match e.downcast::<StrextError>() {
			Ok(strext_err) => {
				let code = exit_code(&strext_err);
				let report: miette::Report = (*strext_err).into();
				eprintln!("{report:?}");
				process::exit(code);
			}
			Err(e) => {
				eprintln!("{} {e}", colored!("error:", red));
			}
		}
		process::exit(2);
	}
}

fn init_tracing(verbose: bool) {
	let default_filter = if verbose { "debug" } else { "warn" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Failed checks exit with 1, everything else with 2.
fn exit_code(error: &StrextError) -> i32 {
	match error {
		StrextError::InvalidNumber(_)
		| StrextError::Overflow(_)
		| StrextError::Underflow(_)
		| StrextError::UndefinedVariables(_) => 1,
		_ => 2,
	}
}

fn resolve_root(args: &StrextCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

fn load_config(args: &StrextCli) -> AnyResult<StrextConfig> {
	let root = resolve_root(args);
	tracing::debug!(root = %root.display(), "searching for config");

	Ok(StrextConfig::load(&root)?.unwrap_or_default())
}

/// Use `text` when given, otherwise read all of stdin. One trailing line
/// ending is removed from stdin since every command prints one back.
fn read_input(text: Option<&str>) -> AnyResult<String> {
	if let Some(text) = text {
		return Ok(text.to_string());
	}

	let mut input = String::new();
	std::io::stdin().read_to_string(&mut input)?;
	if input.ends_with('\n') {
		input.pop();
		if input.ends_with('\r') {
			input.pop();
		}
	}

	Ok(input)
}

fn escape_spec(
	config: &StrextConfig,
	escape_char: Option<&str>,
	chars: Option<&str>,
) -> AnyResult<EscapeSpec> {
	let escape_character = match escape_char {
		Some(value) => single_character(value)?,
		None => config.escape.escape_character()?,
	};
	let characters = chars.unwrap_or(&config.escape.characters);

	Ok(EscapeSpec::new(escape_character, characters.chars()))
}

fn run_escape(
	args: &StrextCli,
	text: Option<&str>,
	escape_char: Option<&str>,
	chars: Option<&str>,
) -> AnyEmptyResult {
	let config = load_config(args)?;
	let spec = escape_spec(&config, escape_char, chars)?;
	let input = read_input(text)?;

	println!("{}", spec.escape(&input));
	Ok(())
}

fn run_unescape(
	args: &StrextCli,
	text: Option<&str>,
	escape_char: Option<&str>,
) -> AnyEmptyResult {
	let config = load_config(args)?;
	let spec = escape_spec(&config, escape_char, None)?;
	let input = read_input(text)?;

	println!("{}", unescape(&input, spec.escape_character()));
	Ok(())
}

fn run_instantiate(
	args: &StrextCli,
	text: Option<&str>,
	file: Option<&Path>,
	vars: &[(String, String)],
	strict: bool,
) -> AnyEmptyResult {
	let config = load_config(args)?;
	let template = match file {
		Some(path) => std::fs::read_to_string(path).map_err(StrextError::from)?,
		None => read_input(text)?,
	};

	let mut bindings = config.bindings();
	bindings.extend(vars.iter().cloned());

	let undefined = find_undefined_variables(&template, &bindings);
	if !undefined.is_empty() {
		if strict {
			return Err(StrextError::UndefinedVariables(undefined).into());
		}

		if args.verbose {
			eprintln!(
				"{} undefined variable(s) expand to nothing: {}",
				colored!("warning:", yellow),
				undefined.join(", ")
			);
		}
	}

	println!("{}", instantiate(&template, &bindings));
	Ok(())
}

fn run_to_integer(text: Option<&str>, format: OutputFormat) -> AnyEmptyResult {
	let input = read_input(text)?;
	let outcome = to_integer(&input);

	match format {
		OutputFormat::Text => {
			let value = outcome.into_result(&input)?;
			println!("{value}");
		}
		OutputFormat::Json => {
			println!("{}", serde_json::to_string(&outcome)?);
			if !outcome.is_success() {
				process::exit(1);
			}
		}
	}

	Ok(())
}

fn print_pieces(pieces: &[&str], format: OutputFormat) -> AnyEmptyResult {
	match format {
		OutputFormat::Text => {
			for piece in pieces {
				println!("{piece}");
			}
		}
		OutputFormat::Json => println!("{}", serde_json::to_string(pieces)?),
	}

	Ok(())
}

fn run_split(text: Option<&str>, delimiter: &str, format: OutputFormat) -> AnyEmptyResult {
	let input = read_input(text)?;
	print_pieces(&split(&input, delimiter), format)
}

fn run_elements(text: Option<&str>, format: OutputFormat) -> AnyEmptyResult {
	let input = read_input(text)?;
	print_pieces(&split_elements(trim(&input)), format)
}
