//! Incremental fuzzy picker over document pages and headings.
//!
//! [`IncrementalPicker`] owns a sorted candidate set, re-ranks it on every query change and
//! tracks one active entry. [`Finder`] wraps a picker with the keyboard behavior of a page
//! finder overlay: open, type, navigate, commit.

/// Candidate records and the newline-delimited listing feed.
pub mod candidate;
/// Error types.
pub mod error;
/// Keyboard-driven finder overlay.
pub mod finder;
/// Heading extraction from Markdown documents.
pub mod headings;
/// Navigation and output types shared by pickers.
pub mod model;
mod picker;

pub use candidate::{Candidate, load_listing, parse_listing};
pub use error::{LoadError, PickerError, Result};
pub use finder::{Finder, FinderMode, Key, KeyCode, KeyOutcome, Modifiers};
pub use headings::extract_headings;
pub use model::{Direction, MoveOutcome, PickerState, RenderedEntry, ScoredMatch};
pub use picker::IncrementalPicker;
pub use quire_matcher::{HighlightMarkup, Highlighted, Scoring, Segment};
