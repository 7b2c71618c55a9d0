use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by picker operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
	/// Commit was requested while the ranked list is empty.
	#[error("no entry is selected")]
	NoSelection,
}

/// Result type for picker operations.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors raised while reading candidate sources.
#[derive(Debug, Error)]
pub enum LoadError {
	/// The source file could not be read.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path of the source that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}
