// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for field scoring.
//!
//! Every field score must land on one of the fixed tiers, and lower-casing
//! the field must never change the outcome.

#![no_main]

use arbitrary::Arbitrary;
use folio::scoring::{
    field_score, fuzzy_score, CONTAINS_SCORE, EXACT_SCORE, FUZZY_CHAR_SCORE, PREFIX_SCORE,
};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    field: String,
    query: String,
}

fuzz_target!(|input: Input| {
    let field: String = input.field.chars().take(200).collect();
    let query = input.query.chars().take(50).collect::<String>().to_lowercase();

    let query_len = query.chars().count() as u64;

    let score = field_score(&field, &query);

    // INVARIANT 1: the score is a known tier
    let fuzzy_tier = score == FUZZY_CHAR_SCORE * query_len;
    assert!(
        score == 0
            || score == EXACT_SCORE
            || score == PREFIX_SCORE
            || score == CONTAINS_SCORE
            || fuzzy_tier,
        "unexpected score {} for {:?} / {:?}",
        score,
        field,
        query
    );

    // INVARIANT 2: scoring is case-insensitive on the field side
    assert_eq!(score, field_score(&field.to_lowercase(), &query));

    // INVARIANT 3: fuzzy is all-or-nothing
    let fuzzy = fuzzy_score(&field.to_lowercase(), &query);
    assert!(fuzzy == 0 || fuzzy == FUZZY_CHAR_SCORE * query_len);
});
