use std::fs;
use std::path::Path;

use crate::error::LoadError;

/// One searchable entry: a navigation target and the text matched against queries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Candidate {
	/// Opaque navigation target, e.g. a document path or heading anchor.
	pub id: String,
	/// Text matched against the query and shown to the user.
	pub display_text: String,
}

impl Candidate {
	pub fn new(id: impl Into<String>, display_text: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			display_text: display_text.into(),
		}
	}

	/// Candidate whose display text is its id, as produced by page listings.
	pub fn from_id(id: impl Into<String>) -> Self {
		let id = id.into();
		Self {
			display_text: id.clone(),
			id,
		}
	}
}

impl AsRef<str> for Candidate {
	fn as_ref(&self) -> &str {
		&self.display_text
	}
}

/// Parses a newline-delimited page listing.
///
/// Surrounding whitespace and a leading `./` are stripped from every line and blank lines are
/// dropped. Order is preserved; the picker sorts on load.
pub fn parse_listing(text: &str) -> Vec<Candidate> {
	text.lines()
		.map(str::trim)
		.filter(|line| !line.is_empty())
		.map(|line| line.strip_prefix("./").unwrap_or(line))
		.filter(|line| !line.is_empty())
		.map(Candidate::from_id)
		.collect()
}

/// Reads and parses a page listing file.
pub fn load_listing(path: impl AsRef<Path>) -> Result<Vec<Candidate>, LoadError> {
	let path = path.as_ref();
	let text = fs::read_to_string(path).map_err(|error| LoadError::Io {
		path: path.to_path_buf(),
		error,
	})?;
	let candidates = parse_listing(&text);
	tracing::debug!(path = %path.display(), count = candidates.len(), "Loaded page listing");
	Ok(candidates)
}
