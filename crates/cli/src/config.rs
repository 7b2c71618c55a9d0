//! `quire.toml` configuration.

use std::fs;
use std::path::{Path, PathBuf};

use quire_matcher::{HighlightMarkup, Scoring};
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "quire.toml";
const DEFAULT_LISTING: &str = "pages.txt";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},

	/// Error parsing TOML or an unknown key.
	#[error("invalid configuration: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
	/// Page listing used when `--listing` is not given.
	pub listing: PathBuf,
	/// Maximum number of printed results.
	pub limit: Option<usize>,
	/// Markers used by `--html` output.
	pub highlight: HighlightMarkup,
	pub scoring: Scoring,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			listing: PathBuf::from(DEFAULT_LISTING),
			limit: None,
			highlight: HighlightMarkup::default(),
			scoring: Scoring::default(),
		}
	}
}

impl Config {
	pub fn parse(text: &str) -> Result<Self> {
		Ok(toml::from_str(text)?)
	}

	pub fn load(path: &Path) -> Result<Self> {
		let text = fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::parse(&text)?;
		tracing::debug!(path = %path.display(), "Loaded configuration");
		Ok(config)
	}

	/// Loads `explicit` if given, else `quire.toml` in `dir` if present, else defaults.
	pub fn discover(explicit: Option<&Path>, dir: &Path) -> Result<Self> {
		if let Some(path) = explicit {
			return Self::load(path);
		}
		let fallback = dir.join(DEFAULT_CONFIG_FILE);
		if fallback.is_file() {
			return Self::load(&fallback);
		}
		Ok(Self::default())
	}
}
