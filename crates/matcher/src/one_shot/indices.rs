use crate::greedy::match_greedy;
use crate::{MatchIndices, Scoring};

/// Gets the matched char positions for the needle on a single haystack.
///
/// The empty needle matches with no indices. Returns `None` when the needle is not a
/// subsequence of the haystack.
pub fn match_indices<S1: AsRef<str>, S2: AsRef<str>>(needle: S1, haystack: S2, scoring: &Scoring) -> Option<MatchIndices> {
	let scored = match_greedy(needle.as_ref(), haystack.as_ref(), scoring);
	scored.is_match().then_some(MatchIndices {
		score: scored.score,
		indices: scored.indices,
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn indices_are_char_offsets() {
		let matched = match_indices("éb", "xÉab", &Scoring::default()).expect("expected match");
		assert_eq!(matched.indices, vec![1, 3]);
	}

	#[test]
	fn greedy_scan_binds_earliest_occurrence() {
		// [2, 3] would be contiguous, but the scan keeps the first `a`.
		let matched = match_indices("ab", "a-ab", &Scoring::default()).expect("expected match");
		assert_eq!(matched.indices, vec![0, 3]);
	}

	#[test]
	fn empty_needle_has_no_indices() {
		let matched = match_indices("", "anything", &Scoring::default()).expect("empty needle matches");
		assert_eq!(matched.score, 1);
		assert!(matched.indices.is_empty());
	}

	#[test]
	fn missing_char_is_none() {
		assert!(match_indices("xyz", "index.md", &Scoring::default()).is_none());
	}
}
