// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::content::{Category, Post};
use crate::index::SearchIndex;
use crate::types::{ItemKind, SearchItem};

/// Create a page item with a priority and no description.
pub fn make_item(id: &str, title: &str, priority: u32) -> SearchItem {
    SearchItem::new(id, title, format!("/{}", id), ItemKind::Page).with_priority(priority)
}

/// Create an item with no priority at all (weight 1).
pub fn make_item_unweighted(id: &str, title: &str) -> SearchItem {
    SearchItem::new(id, title, format!("/{}", id), ItemKind::Page)
}

/// Create a post the way the content loader would produce one.
pub fn make_post(slug: &str, title: &str, summary: &str) -> Post {
    Post {
        slug: slug.to_string(),
        title: title.to_string(),
        date: "2024-01-01".to_string(),
        summary: summary.to_string(),
        cover: format!("/images/{}.jpg", slug),
        cover_alt: title.to_string(),
        category: Category::Blog,
        content: None,
    }
}

/// The small mixed catalog most behavioural tests run against.
///
/// Browsing it yields `home`, `blog`, `about`; the two posts sit below the
/// browse threshold.
pub fn sample_items() -> Vec<SearchItem> {
    vec![
        make_item("home", "Home", 10).with_description("Home page"),
        make_item("blog", "Blog", 8).with_description("Blog posts and writings"),
        make_item("about", "About", 7).with_description("About me and my projects"),
        make_item("contact", "Contact", 6).with_description("Get in touch"),
        SearchItem::new("post-1", "Understanding TypeScript", "/blog/typescript", ItemKind::Post)
            .with_description("Learn TypeScript fundamentals")
            .with_priority(4)
            .with_tags(["typescript", "programming"]),
        SearchItem::new("post-2", "React Best Practices", "/blog/react", ItemKind::Post)
            .with_description("Tips for writing better React code")
            .with_priority(4)
            .with_tags(["react", "javascript"]),
    ]
}

pub fn sample_index() -> SearchIndex {
    SearchIndex::builder()
        .items(sample_items())
        .build()
        .expect("sample items are valid")
}
