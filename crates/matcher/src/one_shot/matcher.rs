use crate::greedy::{fold_needle, score_only};
use crate::{Match, Scoring};

/// Scores the needle against every haystack, keeping only matches.
///
/// Results are sorted by descending score. The sort is stable, so haystacks with equal scores
/// keep their input order; callers that pre-sort their haystacks rely on this for tie-breaking.
pub fn match_list<S1: AsRef<str>, S2: AsRef<str>>(needle: S1, haystacks: &[S2], scoring: &Scoring) -> Vec<Match> {
	let needle = fold_needle(needle.as_ref());

	let mut matches: Vec<Match> = haystacks
		.iter()
		.enumerate()
		.filter_map(|(index, haystack)| {
			let score = score_only(&needle, haystack.as_ref(), scoring);
			(score > 0).then_some(Match { index, score })
		})
		.collect();

	matches.sort_by(|a, b| b.score.cmp(&a.score));
	matches
}
