//! Single-pass greedy subsequence scan.
//!
//! The needle cursor only advances on a match and the haystack cursor always advances, so every
//! needle character binds to its earliest remaining occurrence. There is no backtracking: a
//! later, better-scoring alignment is never considered.

use crate::r#const::EMPTY_NEEDLE_SCORE;
use crate::{Highlighted, Scoring};

/// Outcome of scoring one haystack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scored {
	/// Relevance, `0` when the needle is not a subsequence of the haystack.
	pub score: u32,
	/// Haystack split into matched and unmatched runs.
	pub highlighted: Highlighted,
	/// Char offsets of the matched haystack characters.
	pub indices: Vec<usize>,
}

impl Scored {
	pub fn is_match(&self) -> bool {
		self.score > 0
	}
}

/// Scores `needle` against `haystack`, building the highlighted rendering as it scans.
pub fn match_greedy(needle: &str, haystack: &str, scoring: &Scoring) -> Scored {
	if needle.is_empty() {
		return Scored {
			score: EMPTY_NEEDLE_SCORE,
			highlighted: Highlighted::plain(haystack),
			indices: Vec::new(),
		};
	}

	let needle = fold_needle(needle);
	let mut highlighted = Highlighted::default();
	let mut indices = Vec::with_capacity(needle.len());

	let scanned = scan(&needle, haystack, scoring, |idx, ch, matched| {
		highlighted.push(ch, matched);
		if matched {
			indices.push(idx);
		}
	});

	let Some((score, consumed)) = scanned else {
		return Scored {
			score: 0,
			highlighted: Highlighted::plain(fold(haystack)),
			indices: Vec::new(),
		};
	};

	highlighted.push_str(&haystack[consumed..], false);
	Scored {
		score,
		highlighted,
		indices,
	}
}

/// Score-only variant of [`match_greedy`] for callers that rank before rendering.
pub(crate) fn score_only(needle: &[char], haystack: &str, scoring: &Scoring) -> u32 {
	if needle.is_empty() {
		return EMPTY_NEEDLE_SCORE;
	}
	scan(needle, haystack, scoring, |_, _, _| {}).map_or(0, |(score, _)| score)
}

/// Case-folds `text` the way the scan compares it, one char for one char.
pub fn fold(text: &str) -> String {
	text.chars().map(fold_case).collect()
}

pub(crate) fn fold_needle(needle: &str) -> Vec<char> {
	needle.chars().map(fold_case).collect()
}

/// Lowercases a char when it maps to exactly one char, otherwise keeps it.
///
/// Keeps haystack positions aligned one-to-one with the folded text.
#[inline]
pub(crate) fn fold_case(ch: char) -> char {
	let mut lower = ch.to_lowercase();
	match (lower.next(), lower.next()) {
		(Some(folded), None) => folded,
		_ => ch,
	}
}

/// Runs the scan, reporting every visited haystack char to `visit`.
///
/// Sums saturate at `u32::MAX`, so oversized [`Scoring`] values never wrap a match to `0`.
///
/// Returns the final score and the byte offset where the scan stopped, or `None` when the needle
/// was not fully consumed. `needle` must be non-empty and already folded.
fn scan<F>(needle: &[char], haystack: &str, scoring: &Scoring, mut visit: F) -> Option<(u32, usize)>
where
	F: FnMut(usize, char, bool),
{
	let mut i = 0;
	let mut score = 0u32;
	let mut last_matched: Option<usize> = None;
	let mut prev_char: Option<char> = None;
	let mut consumed = haystack.len();
	let mut haystack_len = 0;

	for (j, (byte_idx, ch)) in haystack.char_indices().enumerate() {
		if i == needle.len() {
			consumed = byte_idx;
			break;
		}

		let matched = needle[i] == fold_case(ch);
		if matched {
			score = score.saturating_add(scoring.match_score);

			if last_matched.is_some_and(|last| last + 1 == j) {
				score = score.saturating_add(scoring.adjacency_bonus);
			}

			let at_boundary = prev_char.is_none_or(|prev| scoring.is_delimiter(prev));
			if at_boundary {
				score = score.saturating_add(scoring.boundary_bonus);
				if i == 0 {
					score = score.saturating_add(scoring.leading_boundary_bonus);
				}
				if j == 0 {
					score = score.saturating_add(scoring.prefix_bonus);
				}
			}

			i += 1;
			last_matched = Some(j);
		}

		visit(j, ch, matched);
		prev_char = Some(ch);
		haystack_len = j + 1;
	}

	if i < needle.len() {
		return None;
	}

	// Counted chars stop at the break above, so finish counting the untouched tail.
	let haystack_len = haystack_len + haystack[consumed..].chars().count();
	let length_bonus = (u64::from(scoring.length_bonus_scale) * needle.len() as u64).div_ceil(haystack_len as u64);
	let length_bonus = u32::try_from(length_bonus).unwrap_or(u32::MAX);
	Some((score.saturating_add(length_bonus), consumed))
}
