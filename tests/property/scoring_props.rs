//! Field scoring properties.
//!
//! The tiers are fixed: exact 100, prefix 80, substring 60, otherwise
//! 10 per character of a complete subsequence match.

use folio::scoring::{field_score, fuzzy_score, CONTAINS_SCORE, EXACT_SCORE, PREFIX_SCORE};
use proptest::prelude::*;

fn word() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z]{1,10}").unwrap()
}

/// Oracle: is `needle` a subsequence of `haystack`?
fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|c| rest.any(|h| h == c))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn prop_exact_is_100(text in word()) {
        prop_assert_eq!(field_score(&text.to_uppercase(), &text), EXACT_SCORE);
    }

    #[test]
    fn prop_prefix_is_80(text in word(), tail in word()) {
        let field = format!("{}{}", text, tail);
        prop_assert_eq!(field_score(&field, &text), PREFIX_SCORE);
    }

    #[test]
    fn prop_strict_substring_is_60(head in "[0-9]{1,3}", text in word(), tail in word()) {
        let field = format!("{}{}{}", head, text, tail);
        prop_assert_eq!(field_score(&field, &text), CONTAINS_SCORE);
    }

    /// Fuzzy is all-or-nothing and 10 per query character.
    #[test]
    fn prop_fuzzy_matches_oracle(text in word(), query in word()) {
        let expected = if is_subsequence(&query, &text) {
            10 * query.chars().count() as u64
        } else {
            0
        };
        prop_assert_eq!(fuzzy_score(&text, &query), expected);
    }

    /// Anything that contains the query scores at least the substring tier.
    #[test]
    fn prop_containment_beats_nothing(text in word(), query in word()) {
        let score = field_score(&text, &query);
        if text.contains(&query) {
            prop_assert!(score >= CONTAINS_SCORE);
        } else if !is_subsequence(&query, &text) {
            prop_assert_eq!(score, 0);
        }
    }

    /// Extending a substring query never lifts the field above exact.
    #[test]
    fn prop_substring_scores_capped(text in word(), cut in 1usize..10) {
        let cut = cut.min(text.len());
        for end in 1..=cut {
            prop_assert!(field_score(&text, &text[..end]) <= EXACT_SCORE);
        }
    }
}
