use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

use serde::Deserialize;

use crate::EscapeSpec;
use crate::StrextError;
use crate::StrextResult;
use crate::TemplateBindings;
use crate::escape::DEFAULT_ESCAPE_CHARACTER;

/// Supported config file locations in discovery order (highest precedence
/// first).
pub const CONFIG_FILE_CANDIDATES: [&str; 3] = ["strext.toml", ".strext.toml", ".config/strext.toml"];

/// Configuration loaded from `strext.toml`.
///
/// ```toml
/// [variables]
/// who = "World"
///
/// [escape]
/// character = "^"
/// characters = " !"
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct StrextConfig {
	/// Default template bindings.
	#[serde(default)]
	pub variables: BTreeMap<String, String>,
	#[serde(default)]
	pub escape: EscapeConfig,
}

/// The `[escape]` section.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EscapeConfig {
	/// Must hold exactly one character.
	#[serde(default = "default_escape_character")]
	pub character: String,
	/// Each character of this string is escaped.
	#[serde(default)]
	pub characters: String,
}

fn default_escape_character() -> String {
	DEFAULT_ESCAPE_CHARACTER.to_string()
}

impl Default for EscapeConfig {
	fn default() -> Self {
		Self {
			character: default_escape_character(),
			characters: String::new(),
		}
	}
}

impl EscapeConfig {
	pub fn escape_character(&self) -> StrextResult<char> {
		single_character(&self.character)
	}

	pub fn to_spec(&self) -> StrextResult<EscapeSpec> {
		Ok(EscapeSpec::new(
			self.escape_character()?,
			self.characters.chars(),
		))
	}
}

/// Interpret `value` as a single character.
pub fn single_character(value: &str) -> StrextResult<char> {
	let mut chars = value.chars();
	match (chars.next(), chars.next()) {
		(Some(ch), None) => Ok(ch),
		_ => Err(StrextError::InvalidEscapeCharacter(value.to_string())),
	}
}

impl StrextConfig {
	/// Return the first config file that exists under `root`.
	pub fn resolve_path(root: &Path) -> Option<PathBuf> {
		CONFIG_FILE_CANDIDATES
			.iter()
			.map(|candidate| root.join(candidate))
			.find(|path| path.is_file())
	}

	/// Load the config from the first discovered config file at `root`.
	/// Returns `None` if no config file exists.
	pub fn load(root: &Path) -> StrextResult<Option<StrextConfig>> {
		let Some(config_path) = Self::resolve_path(root) else {
			return Ok(None);
		};

		let content = std::fs::read_to_string(&config_path)?;
		let config = Self::parse(&content)?;
		tracing::debug!(path = %config_path.display(), "loaded config");

		Ok(Some(config))
	}

	pub fn parse(content: &str) -> StrextResult<StrextConfig> {
		let config: StrextConfig =
			toml::from_str(content).map_err(|e| StrextError::ConfigParse(e.to_string()))?;
		config.escape.escape_character()?;

		Ok(config)
	}

	/// The configured `[variables]` as template bindings.
	pub fn bindings(&self) -> TemplateBindings {
		self.variables
			.iter()
			.map(|(name, value)| (name.as_str(), value.as_str()))
			.collect()
	}
}
