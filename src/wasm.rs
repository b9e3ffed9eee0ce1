// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the site search.
//!
//! `FolioSearcher` takes the catalog as a plain JS array of items (the same
//! camelCase shape the config file uses) and answers queries with arrays of
//! items, best first. The palette's debounce and key handling stay in JS.

use serde::Serialize;
use serde_wasm_bindgen::{from_value, to_value};
use wasm_bindgen::prelude::*;

use crate::index::SearchIndex;
use crate::search::SearchLimits;
use crate::types::SearchItem;

/// A hit with its scores, for callers that want to show relevance.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ScoredOutput<'a> {
    #[serde(flatten)]
    item: &'a SearchItem,
    score: u64,
    match_score: u64,
}

#[wasm_bindgen]
pub struct FolioSearcher {
    index: SearchIndex,
}

#[wasm_bindgen]
impl FolioSearcher {
    /// Build from an array of items and optional limits
    /// (`{ maxResults, browseLimit, browseMinPriority }`).
    ///
    /// Throws on duplicate ids or items without a title or href.
    #[wasm_bindgen(constructor)]
    pub fn new(items: JsValue, limits: JsValue) -> Result<FolioSearcher, JsValue> {
        let items: Vec<SearchItem> = from_value(items).map_err(|e| e.to_string())?;
        let limits: SearchLimits = if limits.is_undefined() || limits.is_null() {
            SearchLimits::default()
        } else {
            from_value(limits).map_err(|e| e.to_string())?
        };

        let index = SearchIndex::builder()
            .items(items)
            .limits(limits)
            .build()
            .map_err(|e| e.to_string())?;
        Ok(FolioSearcher { index })
    }

    /// Ranked items for `query`. An empty query returns the browse view.
    #[wasm_bindgen]
    pub fn search(&self, query: &str) -> Result<JsValue, JsValue> {
        to_value(&self.index.search(query)).map_err(|e| e.to_string().into())
    }

    /// Like `search`, with `score` and `matchScore` on every hit.
    #[wasm_bindgen(js_name = searchScored)]
    pub fn search_scored(&self, query: &str) -> Result<JsValue, JsValue> {
        let hits: Vec<ScoredOutput<'_>> = self
            .index
            .rank(query)
            .into_iter()
            .map(|scored| ScoredOutput {
                item: scored.item,
                score: scored.score,
                match_score: scored.match_score,
            })
            .collect();
        to_value(&hits).map_err(|e| e.to_string().into())
    }

    #[wasm_bindgen]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[wasm_bindgen(js_name = isEmpty)]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
