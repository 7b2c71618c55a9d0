//! Greedy subsequence fuzzy scoring for page and heading finders.
//!
//! A needle matches a haystack when its characters appear in order, case-insensitively. Each
//! matched character earns points, with bonuses for adjacency, word boundaries and prefixes, and
//! a final bonus favors short haystacks. Matching is a single left-to-right greedy scan: the
//! earliest occurrence of every needle character is taken and never reconsidered.
//!
//! ```
//! let scored = quire_matcher::score("Apple Pie", "ap");
//! assert!(scored.is_match());
//! assert_eq!(scored.highlighted.text(), "Apple Pie");
//! ```

pub mod r#const;
pub mod greedy;
mod highlight;
mod markup;
mod one_shot;

pub use greedy::{Scored, fold, match_greedy};
pub use highlight::{Highlighted, Segment};
pub use markup::HighlightMarkup;
pub use one_shot::{match_indices, match_list};

use r#const::*;

/// Scores `needle` against `haystack` with the default [`Scoring`].
///
/// A score of `0` means no match and the result must be excluded from any ranking.
pub fn score(haystack: &str, needle: &str) -> Scored {
	match_greedy(needle, haystack, &Scoring::default())
}

/// Scores `needle` against `haystack` with a custom [`Scoring`].
pub fn score_with(haystack: &str, needle: &str, scoring: &Scoring) -> Scored {
	match_greedy(needle, haystack, scoring)
}

/// Point values awarded by the greedy scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct Scoring {
	/// Base score for every matched character.
	pub match_score: u32,
	/// Awarded when a match directly follows the previous matched position.
	pub adjacency_bonus: u32,
	/// Awarded when the matched character starts a word.
	pub boundary_bonus: u32,
	/// Stacks on the boundary bonus for the first needle character.
	pub leading_boundary_bonus: u32,
	/// Stacks on the boundary bonus for a match at haystack position 0.
	pub prefix_bonus: u32,
	/// Numerator of the `ceil(scale * needle_len / haystack_len)` length bonus.
	pub length_bonus_scale: u32,
	/// Characters that start a new word when they precede a match.
	pub delimiters: String,
}

impl Default for Scoring {
	fn default() -> Self {
		Scoring {
			match_score: MATCH_SCORE,
			adjacency_bonus: ADJACENCY_BONUS,
			boundary_bonus: BOUNDARY_BONUS,
			leading_boundary_bonus: LEADING_BOUNDARY_BONUS,
			prefix_bonus: PREFIX_BONUS,
			length_bonus_scale: LENGTH_BONUS_SCALE,
			delimiters: DEFAULT_DELIMITERS.to_string(),
		}
	}
}

impl Scoring {
	#[inline]
	pub(crate) fn is_delimiter(&self, ch: char) -> bool {
		self.delimiters.contains(ch)
	}
}

/// Score of one haystack out of a list, see [`match_list`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Match {
	/// Position of the haystack in the input slice.
	pub index: usize,
	pub score: u32,
}

/// Matched character positions of a single haystack, see [`match_indices`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchIndices {
	pub score: u32,
	/// Char (not byte) offsets into the haystack, ascending.
	pub indices: Vec<usize>,
}

#[cfg(test)]
mod tests;
