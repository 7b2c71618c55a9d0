//! Keyboard-driven finder overlay around one [`IncrementalPicker`].
//!
//! Text edits never filter synchronously. They schedule a single deferred pass that the host
//! runs after the current event turn via [`Finder::run_deferred`]; the pass reads the live input
//! at that point, so a burst of keystrokes collapses into one filter. Navigation keys act on the
//! ranked list immediately.

mod key;

pub use key::{Key, KeyCode, Modifiers};

use crate::model::{Direction, MoveOutcome};
use crate::{Candidate, IncrementalPicker};

/// Which candidate set the finder is searching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FinderMode {
	/// Document pages from the site listing.
	#[default]
	Pages,
	/// Headings of the current document.
	Headings,
}

/// What the host should do after a key was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
	/// The key was not for the finder.
	Ignored,
	/// The finder became visible with an empty query.
	Opened,
	/// The current document should be reloaded.
	Reload,
	/// The query was cleared and the full list restored.
	Cleared,
	/// The finder was hidden without navigating.
	Hidden,
	/// The finder was hidden; navigate to this id.
	Navigate(String),
	/// Enter was pressed with an empty ranked list.
	NothingSelected,
	/// The active entry was moved (or hit a boundary).
	Moved(MoveOutcome),
	/// The input changed; a deferred re-filter is pending.
	Deferred,
}

#[derive(Debug, Clone, Default)]
pub struct Finder {
	picker: IncrementalPicker,
	mode: FinderMode,
	input: String,
	visible: bool,
	pending_refilter: bool,
}

impl Finder {
	pub fn new(mode: FinderMode) -> Self {
		Self {
			mode,
			..Self::default()
		}
	}

	/// Finder over a prepared picker, e.g. one built with custom scoring.
	pub fn with_picker(mode: FinderMode, picker: IncrementalPicker) -> Self {
		Self {
			picker,
			mode,
			..Self::default()
		}
	}

	/// Switches mode and replaces the candidate set, re-filtering immediately.
	pub fn set_mode(&mut self, mode: FinderMode, candidates: impl IntoIterator<Item = Candidate>) {
		tracing::debug!(from = ?self.mode, to = ?mode, "Switching finder mode");
		self.mode = mode;
		self.picker.load(candidates);
	}

	/// Replaces the candidate set of the current mode.
	pub fn load(&mut self, candidates: impl IntoIterator<Item = Candidate>) {
		self.picker.load(candidates);
	}

	pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
		if !self.visible {
			return self.handle_hidden_key(key);
		}

		match key.code {
			KeyCode::Escape if !self.input.is_empty() => {
				self.input.clear();
				self.pending_refilter = false;
				self.picker.set_query("");
				KeyOutcome::Cleared
			}
			KeyCode::Escape => {
				self.hide();
				KeyOutcome::Hidden
			}
			KeyCode::Enter => match self.picker.commit_selection() {
				Ok(id) => {
					let id = id.to_string();
					self.hide();
					KeyOutcome::Navigate(id)
				}
				Err(_) => KeyOutcome::NothingSelected,
			},
			KeyCode::Up => KeyOutcome::Moved(self.picker.move_selection(Direction::Previous)),
			KeyCode::Down => KeyOutcome::Moved(self.picker.move_selection(Direction::Next)),
			KeyCode::Char(ch) if !key.modifiers.ctrl && !key.modifiers.alt && !key.modifiers.meta => {
				self.input.push(ch);
				self.schedule_refilter()
			}
			KeyCode::Backspace => {
				self.input.pop();
				self.schedule_refilter()
			}
			KeyCode::Char(_) | KeyCode::Other => self.schedule_refilter(),
		}
	}

	fn handle_hidden_key(&mut self, key: Key) -> KeyOutcome {
		if !key.modifiers.is_empty() {
			return KeyOutcome::Ignored;
		}
		match key.code {
			KeyCode::Char('f') => {
				self.open();
				KeyOutcome::Opened
			}
			KeyCode::Char('r') => KeyOutcome::Reload,
			_ => KeyOutcome::Ignored,
		}
	}

	/// Replaces the live input, as on paste or an external change notification.
	pub fn set_input(&mut self, text: impl Into<String>) {
		self.input = text.into();
		self.schedule_refilter();
	}

	fn schedule_refilter(&mut self) -> KeyOutcome {
		self.pending_refilter = true;
		KeyOutcome::Deferred
	}

	/// Runs the pending re-filter, if any, against the live input.
	///
	/// Returns whether the ranked list was rebuilt.
	pub fn run_deferred(&mut self) -> bool {
		if !std::mem::take(&mut self.pending_refilter) {
			return false;
		}
		let rebuilt = self.picker.set_query(&self.input);
		tracing::trace!(input = %self.input, rebuilt, "Ran deferred finder filter");
		rebuilt
	}

	pub fn has_pending_refilter(&self) -> bool {
		self.pending_refilter
	}

	/// Shows the finder with an empty input and filters synchronously.
	pub fn open(&mut self) {
		self.visible = true;
		self.input.clear();
		self.pending_refilter = false;
		self.picker.set_query("");
	}

	pub fn hide(&mut self) {
		self.visible = false;
	}

	/// Commits the entry at `index` of the ranked list, as on a click, and hides the finder.
	pub fn click(&mut self, index: usize) -> Option<String> {
		let id = self.picker.commit_at(index).ok()?.to_string();
		self.hide();
		Some(id)
	}

	pub fn picker(&self) -> &IncrementalPicker {
		&self.picker
	}

	pub fn mode(&self) -> FinderMode {
		self.mode
	}

	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn is_visible(&self) -> bool {
		self.visible
	}
}
