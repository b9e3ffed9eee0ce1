// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! Every text field is scored on the same four-tier scale:
//!
//! | Tier     | Condition                                  | Score      |
//! |----------|--------------------------------------------|------------|
//! | Exact    | field equals the query                     | 100        |
//! | Prefix   | field starts with the query                | 80         |
//! | Contains | field contains the query                   | 60         |
//! | Fuzzy    | every query char found in order            | 10 × chars |
//!
//! Comparisons are case-insensitive; the caller lower-cases the query once and
//! each field is lower-cased here. The fuzzy tier is all-or-nothing: one
//! missing character zeroes the field.
//!
//! The fuzzy tier is not capped below the substring tiers. A 7+ character
//! subsequence match scores 70 or more and beats a plain substring hit; a
//! 10+ character one ties or beats an exact match. That ordering is observable
//! behavior and stays as is.
//!
//! An item's match score is the best of its title, its description and its
//! best tag. Priority multiplies that score; it never adds to it.

use crate::types::SearchItem;

/// Field equals the query.
pub const EXACT_SCORE: u64 = 100;

/// Field starts with the query.
pub const PREFIX_SCORE: u64 = 80;

/// Field contains the query somewhere.
pub const CONTAINS_SCORE: u64 = 60;

/// Awarded per query character when the whole query is a subsequence of the field.
pub const FUZZY_CHAR_SCORE: u64 = 10;

/// Score one field against an already lower-cased query.
pub fn field_score(text: &str, query_lower: &str) -> u64 {
    let text_lower = text.to_lowercase();

    if text_lower == query_lower {
        return EXACT_SCORE;
    }
    if text_lower.starts_with(query_lower) {
        return PREFIX_SCORE;
    }
    if text_lower.contains(query_lower) {
        return CONTAINS_SCORE;
    }

    fuzzy_score(&text_lower, query_lower)
}

/// Subsequence match: walk the query, advancing a cursor through `text_lower`
/// to the next occurrence of each character. Any miss scores 0.
pub fn fuzzy_score(text_lower: &str, query_lower: &str) -> u64 {
    let mut cursor = text_lower.chars();
    let mut matched: u64 = 0;

    for qc in query_lower.chars() {
        // `position` consumes up to and including the hit, so the next
        // search starts right after it.
        if cursor.by_ref().position(|tc| tc == qc).is_none() {
            return 0;
        }
        matched += 1;
    }

    matched.saturating_mul(FUZZY_CHAR_SCORE)
}

/// Per-field breakdown of an item's match against one query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchScores {
    pub title: u64,
    pub description: u64,
    /// Best score across all tags; 0 when the item has none.
    pub tag: u64,
}

impl MatchScores {
    pub fn for_item(item: &SearchItem, query_lower: &str) -> Self {
        Self {
            title: field_score(&item.title, query_lower),
            description: field_score(item.description_or_empty(), query_lower),
            tag: best_tag_score(&item.tags, query_lower),
        }
    }

    /// The item's match score: the best of the three fields.
    pub fn best(&self) -> u64 {
        self.title.max(self.description).max(self.tag)
    }
}

pub fn best_tag_score(tags: &[String], query_lower: &str) -> u64 {
    tags.iter()
        .map(|tag| field_score(tag, query_lower))
        .max()
        .unwrap_or(0)
}

/// Added when a post's summary contains the query.
pub const SUMMARY_BONUS: u64 = 40;

/// Terminal post score: the title's exact/prefix/contains tier plus
/// [`SUMMARY_BONUS`] when the summary contains the query. Only when both miss
/// does the title get a fuzzy pass. Tags and priority play no part.
pub fn post_score(title: &str, summary: &str, query_lower: &str) -> u64 {
    let title_lower = title.to_lowercase();

    let mut score = if title_lower == query_lower {
        EXACT_SCORE
    } else if title_lower.starts_with(query_lower) {
        PREFIX_SCORE
    } else if title_lower.contains(query_lower) {
        CONTAINS_SCORE
    } else {
        0
    };

    if summary.to_lowercase().contains(query_lower) {
        score += SUMMARY_BONUS;
    }

    if score == 0 {
        score = fuzzy_score(&title_lower, query_lower);
    }
    score
}

/// Match score scaled by the item's priority weight.
pub fn final_score(match_score: u64, item: &SearchItem) -> u64 {
    match_score.saturating_mul(u64::from(item.weight()))
}
