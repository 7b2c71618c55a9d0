use quire_matcher::Highlighted;

use crate::Candidate;

/// A candidate that survived the current query, with its score and highlighted rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredMatch {
	pub candidate: Candidate,
	pub score: u32,
	pub highlighted: Highlighted,
}

/// Whether a query is narrowing the candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
	/// Empty query: every candidate is listed with equal score.
	Idle,
	/// Non-empty query: only matching candidates are listed, best first.
	Filtering,
}

/// Direction of a selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Previous,
	Next,
}

/// Result of a selection step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
	/// The active entry moved to this index.
	Moved(usize),
	/// Already at the first entry; the view should scroll to its top.
	ScrollToTop,
	/// Nothing to move (last entry, or empty list).
	Unchanged,
}

/// One entry of the rendered output feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedEntry {
	pub id: String,
	/// Display text with highlight markers applied.
	pub markup: String,
	/// Exactly one entry is active whenever the feed is non-empty.
	pub active: bool,
}
