// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored items get sorted.
//!
//! Sort order:
//! 1. **Final score** - descending
//! 2. **Position** - the item's index in the candidate list, ascending
//!
//! Position as the last key makes the order total, so ranking is deterministic
//! and equal scores keep the order the catalog was assembled in.

use crate::types::SearchItem;
use std::cmp::Ordering;

/// An item that passed the admission filter, with the numbers that ranked it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredItem<'a> {
    pub item: &'a SearchItem,
    /// Index of the item in the candidate list it was ranked from.
    pub position: usize,
    /// Best field score before priority weighting.
    pub match_score: u64,
    /// `match_score` × priority weight. What the ranking sorts on.
    pub score: u64,
}

impl ScoredItem<'_> {
    pub fn relevance(&self) -> Relevance {
        Relevance::from_match_score(self.match_score)
    }
}

/// Compare two scored items for ranking (`Less` means `a` ranks first).
pub fn compare_results(a: &ScoredItem<'_>, b: &ScoredItem<'_>) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Three-star relevance shown next to terminal search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Relevance {
    Low,
    Medium,
    High,
}

impl Relevance {
    /// 80 and up is high, 60 up medium. Long fuzzy matches can reach high.
    pub fn from_match_score(match_score: u64) -> Self {
        if match_score >= 80 {
            Relevance::High
        } else if match_score >= 60 {
            Relevance::Medium
        } else {
            Relevance::Low
        }
    }

    pub fn stars(self) -> &'static str {
        match self {
            Relevance::High => "★★★",
            Relevance::Medium => "★★☆",
            Relevance::Low => "★☆☆",
        }
    }
}
