//! Ranked, navigable view over a candidate set.

use quire_matcher::{HighlightMarkup, Scoring, fold, match_greedy, match_list};

use crate::Candidate;
use crate::error::{PickerError, Result};
use crate::model::{Direction, MoveOutcome, PickerState, RenderedEntry, ScoredMatch};

/// Re-ranks a candidate set on every query change and tracks one active entry.
///
/// Candidates are kept sorted by display text, so entries with equal scores list
/// alphabetically. The ranked list is always rebuilt from scratch; nothing carries over from
/// the previous query except the query itself.
#[derive(Debug, Clone, Default)]
pub struct IncrementalPicker {
	candidates: Vec<Candidate>,
	scoring: Scoring,
	query: String,
	/// Needle of the last filter pass, `None` until the first pass or after a reload.
	applied: Option<String>,
	matches: Vec<ScoredMatch>,
	selected: Option<usize>,
}

impl IncrementalPicker {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_scoring(scoring: Scoring) -> Self {
		Self {
			scoring,
			..Self::default()
		}
	}

	/// Replaces the candidate set and re-filters with the current query.
	///
	/// Candidates are sorted by display text (ordinal, stable).
	pub fn load(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
		let mut candidates: Vec<Candidate> = candidates.into_iter().collect();
		candidates.sort_by(|a, b| a.display_text.cmp(&b.display_text));
		tracing::debug!(count = candidates.len(), "Loaded picker candidates");

		self.candidates = candidates;
		self.applied = None;
		self.filter();
	}

	/// Updates the query and re-filters if its normalized value changed.
	///
	/// Returns whether the ranked list was rebuilt.
	pub fn set_query(&mut self, text: &str) -> bool {
		self.query = normalize_query(text);
		self.filter()
	}

	/// Ranks every candidate against the current query.
	///
	/// No-op when the query has not changed since the last pass, so the ranked list and the
	/// active entry are left untouched. Otherwise the active entry resets to the first match.
	pub fn filter(&mut self) -> bool {
		if self.applied.as_deref() == Some(self.query.as_str()) {
			return false;
		}

		let ranked = match_list(&self.query, &self.candidates, &self.scoring);
		self.matches = ranked
			.into_iter()
			.map(|hit| {
				let candidate = &self.candidates[hit.index];
				let scored = match_greedy(&self.query, &candidate.display_text, &self.scoring);
				ScoredMatch {
					candidate: candidate.clone(),
					score: hit.score,
					highlighted: scored.highlighted,
				}
			})
			.collect();
		self.selected = (!self.matches.is_empty()).then_some(0);
		self.applied = Some(self.query.clone());

		tracing::trace!(
			needle = %self.query,
			candidates = self.candidates.len(),
			matches = self.matches.len(),
			"Filtered picker candidates"
		);
		true
	}

	/// Moves the active entry one step in render order. Never wraps.
	pub fn move_selection(&mut self, direction: Direction) -> MoveOutcome {
		let Some(current) = self.selected else {
			return MoveOutcome::Unchanged;
		};

		let next = match direction {
			Direction::Previous if current == 0 => return MoveOutcome::ScrollToTop,
			Direction::Previous => current - 1,
			Direction::Next if current + 1 >= self.matches.len() => return MoveOutcome::Unchanged,
			Direction::Next => current + 1,
		};
		self.selected = Some(next);
		MoveOutcome::Moved(next)
	}

	/// Id of the active entry.
	pub fn commit_selection(&self) -> Result<&str> {
		self.selected_match()
			.map(|selected| selected.candidate.id.as_str())
			.ok_or(PickerError::NoSelection)
	}

	/// Activates the entry at `index` of the ranked list and returns its id.
	pub fn commit_at(&mut self, index: usize) -> Result<&str> {
		if index >= self.matches.len() {
			return Err(PickerError::NoSelection);
		}
		self.selected = Some(index);
		Ok(self.matches[index].candidate.id.as_str())
	}

	/// Output feed for the current ranked list.
	pub fn render(&self, markup: &HighlightMarkup) -> Vec<RenderedEntry> {
		self.matches
			.iter()
			.enumerate()
			.map(|(idx, entry)| RenderedEntry {
				id: entry.candidate.id.clone(),
				markup: markup.render(&entry.highlighted),
				active: self.selected == Some(idx),
			})
			.collect()
	}

	pub fn state(&self) -> PickerState {
		match self.applied.as_deref() {
			None | Some("") => PickerState::Idle,
			Some(_) => PickerState::Filtering,
		}
	}

	/// Normalized query, as last passed to [`Self::set_query`].
	pub fn query(&self) -> &str {
		&self.query
	}

	/// Candidates in load order (sorted by display text).
	pub fn candidates(&self) -> &[Candidate] {
		&self.candidates
	}

	pub fn matches(&self) -> &[ScoredMatch] {
		&self.matches
	}

	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn selected_match(&self) -> Option<&ScoredMatch> {
		self.selected.and_then(|idx| self.matches.get(idx))
	}

	pub fn scoring(&self) -> &Scoring {
		&self.scoring
	}

	pub fn len(&self) -> usize {
		self.matches.len()
	}

	pub fn is_empty(&self) -> bool {
		self.matches.is_empty()
	}
}

fn normalize_query(text: &str) -> String {
	fold(text)
}
