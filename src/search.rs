// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The ranking function.
//!
//! Two paths, picked by whether the trimmed query is empty:
//!
//! - **Browse**: no scoring at all. Items with a priority of at least
//!   [`BROWSE_MIN_PRIORITY`] are listed by priority, highest first, capped at
//!   [`BROWSE_LIMIT`]. This is what the palette shows before the user types.
//! - **Ranked**: every item is scored (see [`crate::scoring`]), zero scores are
//!   dropped, the rest sorted by score and capped at [`MAX_RESULTS`].
//!
//! Both paths are pure and total. Any string is a valid query; the worst case
//! is an empty result list. Equal keys keep the candidate list's order.

use serde::{Deserialize, Serialize};

use crate::scoring::ranking::{compare_results, ScoredItem};
use crate::scoring::{final_score, MatchScores};
use crate::types::SearchItem;

/// Result cap for a non-empty query.
pub const MAX_RESULTS: usize = 10;

/// Result cap for the empty-query browse view.
pub const BROWSE_LIMIT: usize = 8;

/// Lowest priority shown in the browse view.
pub const BROWSE_MIN_PRIORITY: u32 = 7;

/// Size bounds for result lists.
///
/// The defaults are the ones the site ships with; [`SiteConfig`](crate::SiteConfig)
/// can override them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchLimits {
    pub max_results: usize,
    pub browse_limit: usize,
    pub browse_min_priority: u32,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_results: MAX_RESULTS,
            browse_limit: BROWSE_LIMIT,
            browse_min_priority: BROWSE_MIN_PRIORITY,
        }
    }
}

/// Rank `items` against `query` with the default limits.
///
/// ```
/// use folio::{search_items, ItemKind, SearchItem};
///
/// let items = vec![
///     SearchItem::new("home", "Home", "/", ItemKind::Page).with_priority(10),
///     SearchItem::new("blog", "Blog", "/blog", ItemKind::Page).with_priority(8),
/// ];
///
/// let results = search_items("BLOG", &items);
/// assert_eq!(results[0].id, "blog");
/// ```
pub fn search_items<'a>(query: &str, items: &'a [SearchItem]) -> Vec<&'a SearchItem> {
    rank(query, items, &SearchLimits::default())
        .into_iter()
        .map(|scored| scored.item)
        .collect()
}

/// Rank `items` against `query`, keeping the scores.
///
/// For browse results `match_score` is 0 and `score` carries the priority,
/// since nothing was matched.
pub fn rank<'a>(query: &str, items: &'a [SearchItem], limits: &SearchLimits) -> Vec<ScoredItem<'a>> {
    if query.trim().is_empty() {
        return browse(items, limits);
    }

    let query_lower = query.to_lowercase();

    let mut scored: Vec<ScoredItem<'a>> = items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| {
            let match_score = MatchScores::for_item(item, &query_lower).best();
            let score = final_score(match_score, item);
            (score > 0).then_some(ScoredItem {
                item,
                position,
                match_score,
                score,
            })
        })
        .collect();

    scored.sort_by(compare_results);
    scored.truncate(limits.max_results);
    scored
}

/// The empty-query view: high-priority items, most important first.
pub fn browse<'a>(items: &'a [SearchItem], limits: &SearchLimits) -> Vec<ScoredItem<'a>> {
    let mut featured: Vec<ScoredItem<'a>> = items
        .iter()
        .enumerate()
        .filter_map(|(position, item)| match item.priority {
            Some(priority) if priority >= limits.browse_min_priority => Some(ScoredItem {
                item,
                position,
                match_score: 0,
                score: u64::from(priority),
            }),
            _ => None,
        })
        .collect();

    featured.sort_by(compare_results);
    featured.truncate(limits.browse_limit);
    featured
}
