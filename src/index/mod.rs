// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the immutable catalog every search reads.
//!
//! An index is assembled exactly once at start-up (static site entries plus
//! posts from the content source), validated, and frozen into an
//! `Arc<[SearchItem]>`. Cloning a [`SearchIndex`] clones the pointer, so the
//! palette, the terminal and the CLI can all hold the same snapshot.
//!
//! Validation lives here and only here. The ranker trusts its input.

pub mod catalog;

use std::collections::HashSet;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::scoring::ranking::ScoredItem;
use crate::search::{rank, SearchLimits};
use crate::types::SearchItem;

/// A frozen, validated catalog plus the limits its searches use.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    items: Arc<[SearchItem]>,
    limits: SearchLimits,
}

impl SearchIndex {
    pub fn builder() -> IndexBuilder {
        IndexBuilder::default()
    }

    /// Ranked items for `query`. See [`crate::search`] for the policy.
    pub fn search(&self, query: &str) -> Vec<&SearchItem> {
        self.rank(query).into_iter().map(|scored| scored.item).collect()
    }

    /// Like [`search`](Self::search), keeping scores and positions.
    pub fn rank(&self, query: &str) -> Vec<ScoredItem<'_>> {
        rank(query, &self.items, &self.limits)
    }

    pub fn items(&self) -> &[SearchItem] {
        &self.items
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    pub fn get(&self, position: usize) -> Option<&SearchItem> {
        self.items.get(position)
    }

    pub fn find(&self, id: &str) -> Option<&SearchItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Deref for SearchIndex {
    type Target = [SearchItem];

    fn deref(&self) -> &[SearchItem] {
        &self.items
    }
}

/// Collects items in insertion order and validates them on [`build`](Self::build).
///
/// Insertion order matters: it is the tie-break for equal scores.
#[derive(Debug, Default)]
pub struct IndexBuilder {
    items: Vec<SearchItem>,
    limits: SearchLimits,
}

impl IndexBuilder {
    pub fn item(mut self, item: SearchItem) -> Self {
        self.items.push(item);
        self
    }

    pub fn items<I: IntoIterator<Item = SearchItem>>(mut self, items: I) -> Self {
        self.items.extend(items);
        self
    }

    pub fn limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Check every invariant and freeze the catalog.
    ///
    /// Fails on the first item with an empty title or href, or whose id was
    /// already used.
    pub fn build(self) -> Result<SearchIndex> {
        validate_items(&self.items)?;

        tracing::debug!(
            items = self.items.len(),
            max_results = self.limits.max_results,
            "search index assembled"
        );

        Ok(SearchIndex {
            items: self.items.into(),
            limits: self.limits,
        })
    }
}

/// Catalog invariants: unique ids, non-empty titles and hrefs.
pub fn validate_items(items: &[SearchItem]) -> Result<()> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(items.len());

    for item in items {
        if item.title.is_empty() {
            return Err(Error::EmptyTitle {
                id: item.id.clone(),
            });
        }
        if item.href.is_empty() {
            return Err(Error::EmptyHref {
                id: item.id.clone(),
            });
        }
        if !seen.insert(item.id.as_str()) {
            return Err(Error::DuplicateId {
                id: item.id.clone(),
            });
        }
    }

    Ok(())
}
