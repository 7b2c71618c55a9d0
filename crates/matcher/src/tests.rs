use proptest::prelude::*;

use crate::greedy::fold_case;
use crate::{Scoring, match_greedy, score};

fn arb_haystack() -> impl Strategy<Value = String> {
	"[a-zA-Z0-9 ./_-]{0,40}"
}

fn arb_needle() -> impl Strategy<Value = String> {
	"[a-z0-9 ./]{1,6}"
}

/// A haystack and a needle picked from its chars by a keep mask, so the needle always matches.
fn arb_matching_pair() -> impl Strategy<Value = (String, String)> {
	(arb_haystack(), prop::collection::vec(any::<bool>(), 40)).prop_map(|(haystack, keep)| {
		let needle: String = haystack.chars().zip(keep).filter_map(|(ch, keep)| keep.then_some(ch)).collect();
		(haystack, needle)
	})
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
	let mut haystack = haystack.chars().map(fold_case);
	needle.chars().map(fold_case).all(|n| haystack.any(|h| h == n))
}

proptest! {
	/// The empty needle always matches with score 1 and leaves the haystack untouched.
	#[test]
	fn prop_empty_needle_is_identity(haystack in arb_haystack()) {
		let scored = score(&haystack, "");
		prop_assert_eq!(scored.score, 1);
		prop_assert_eq!(scored.highlighted.text(), haystack);
		prop_assert!(scored.highlighted.is_plain());
	}

	/// A match exists exactly when the needle is a case-insensitive subsequence.
	#[test]
	fn prop_score_zero_iff_not_subsequence(haystack in arb_haystack(), needle in arb_needle()) {
		let scored = score(&haystack, &needle);
		prop_assert_eq!(scored.score > 0, is_subsequence(&needle, &haystack));
	}

	/// Successful matches reproduce the haystack verbatim and highlight one char per needle char.
	#[test]
	fn prop_highlight_reconstructs_haystack((haystack, needle) in arb_matching_pair()) {
		let scored = score(&haystack, &needle);
		prop_assert!(scored.is_match());

		prop_assert_eq!(scored.highlighted.text(), haystack);
		let highlighted_chars: usize = scored.highlighted.highlighted_text().map(|run| run.chars().count()).sum();
		prop_assert_eq!(highlighted_chars, needle.chars().count());
		prop_assert_eq!(scored.indices.len(), needle.chars().count());
	}

	/// Adjacent segments always alternate between matched and unmatched.
	#[test]
	fn prop_segments_are_maximal_runs(haystack in arb_haystack(), needle in arb_needle()) {
		let scored = score(&haystack, &needle);
		for pair in scored.highlighted.segments().windows(2) {
			prop_assert_ne!(pair[0].highlighted, pair[1].highlighted);
		}
		prop_assert!(scored.highlighted.segments().iter().all(|segment| !segment.text.is_empty()));
	}

	/// Needle casing never changes the outcome.
	#[test]
	fn prop_needle_case_is_ignored(haystack in arb_haystack(), needle in arb_needle()) {
		let lower = score(&haystack, &needle);
		let upper = score(&haystack, &needle.to_uppercase());
		prop_assert_eq!(lower, upper);
	}

	/// Scoring is a pure function of its inputs.
	#[test]
	fn prop_deterministic(haystack in arb_haystack(), needle in arb_needle()) {
		let scoring = Scoring::default();
		prop_assert_eq!(match_greedy(&needle, &haystack, &scoring), match_greedy(&needle, &haystack, &scoring));
	}
}
