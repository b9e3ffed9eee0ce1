// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary byte sequences at the ranker over the built-in site to
//! check that it never panics and never breaks its result bounds.

#![no_main]

use folio::index::catalog::default_catalog;
use folio::testing::make_post;
use folio::SearchIndex;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static INDEX: std::sync::OnceLock<SearchIndex> = std::sync::OnceLock::new();
    let index = INDEX.get_or_init(|| {
        let posts = [
            make_post("rust-search", "Writing a Search Ranker in Rust", "Scoring short queries"),
            make_post("swift-concurrency", "Swift Concurrency", "Actors in practice"),
        ];
        SearchIndex::builder()
            .items(default_catalog(&posts))
            .build()
            .expect("built-in catalog is valid")
    });

    let query = String::from_utf8_lossy(query);
    // Cap by characters, not bytes, to stay on a char boundary.
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: ranking never panics
    let results = index.rank(&query);

    // INVARIANT 2: bounded by the browse or result cap
    let cap = if query.trim().is_empty() { 8 } else { 10 };
    assert!(results.len() <= cap, "{} results for {:?}", results.len(), query);

    // INVARIANT 3: every hit is a real catalog position with a positive score
    for scored in &results {
        assert!(scored.position < index.len());
        assert_eq!(&index[scored.position], scored.item);
        assert!(scored.score > 0);
    }

    // INVARIANT 4: sorted descending
    assert!(results.windows(2).all(|pair| pair[0].score >= pair[1].score));
});
