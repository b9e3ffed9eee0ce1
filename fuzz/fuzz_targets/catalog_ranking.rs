// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking arbitrary catalogs.
//!
//! The ranker trusts its input, so it must stay total on catalogs that would
//! never pass index validation: empty titles, repeated ids, huge priorities.

#![no_main]

use arbitrary::Arbitrary;
use folio::{search_items, ItemKind, SearchItem};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct RawItem {
    title: String,
    description: Option<String>,
    tags: Vec<String>,
    priority: Option<u32>,
}

#[derive(Debug, Arbitrary)]
struct Input {
    items: Vec<RawItem>,
    query: String,
}

fuzz_target!(|input: Input| {
    let items: Vec<SearchItem> = input
        .items
        .into_iter()
        .take(64)
        .map(|raw| SearchItem {
            id: String::new(),
            title: raw.title,
            description: raw.description,
            href: String::new(),
            kind: ItemKind::Page,
            tags: raw.tags,
            priority: raw.priority,
            icon: None,
        })
        .collect();
    let query: String = input.query.chars().take(64).collect();

    let first = search_items(&query, &items);
    let cap = if query.trim().is_empty() { 8 } else { 10 };
    assert!(first.len() <= cap);

    // Deterministic, even with u32::MAX priorities saturating the score
    assert_eq!(first, search_items(&query, &items));
});
