// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Site configuration: which items to index and how searches are bounded.
//!
//! Every field has a default, so an empty JSON object is a valid config and
//! no config file at all means "the built-in site". A config file can replace
//! the built-in pages and links, point at a content directory, and tune the
//! result limits and the palette debounce.
//!
//! ```json
//! {
//!   "version": 1,
//!   "items": [{ "id": "home", "title": "Home", "href": "/", "type": "page", "priority": 10 }],
//!   "posts": "content/posts",
//!   "search": { "maxResults": 10, "browseLimit": 8, "browseMinPriority": 7 },
//!   "palette": { "debounceMs": 150 }
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::content::{load_posts, Post};
use crate::error::{Error, Result};
use crate::index::catalog;
use crate::index::SearchIndex;
use crate::search::SearchLimits;
use crate::types::SearchItem;

pub const CONFIG_VERSION: u32 = 1;

/// Quiet period before the palette searches what was typed.
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub version: u32,
    /// Static pages and links. `None` keeps the built-in site entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<SearchItem>>,
    /// Content directory with a post manifest. Relative paths resolve
    /// against the config file's directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub posts: Option<PathBuf>,
    pub search: SearchLimits,
    pub palette: PaletteConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            items: None,
            posts: None,
            search: SearchLimits::default(),
            palette: PaletteConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaletteConfig {
    pub debounce_ms: u64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl PaletteConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl SiteConfig {
    /// Read a config file. A relative `posts` path is rebased onto the
    /// file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let mut config = Self::from_json(&raw).map_err(|e| match e {
            Error::Json { source, .. } => Error::json(path, source),
            other => other,
        })?;

        if let (Some(posts), Some(base)) = (config.posts.as_ref(), path.parent()) {
            if posts.is_relative() {
                config.posts = Some(base.join(posts));
            }
        }

        Ok(config)
    }

    /// Parse config JSON without touching the filesystem.
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(raw).map_err(|e| Error::json("<inline>", e))?;
        if config.version != CONFIG_VERSION {
            return Err(Error::UnsupportedVersion {
                what: "config",
                found: config.version,
                expected: CONFIG_VERSION,
            });
        }
        Ok(config)
    }

    /// Assemble the index this config describes: configured (or built-in)
    /// pages, then posts, then (built-in only) external links.
    pub fn build_index(&self) -> Result<SearchIndex> {
        let posts = match &self.posts {
            Some(dir) => load_posts(dir)?,
            None => Vec::new(),
        };
        self.index_with_posts(&posts)
    }

    /// Same as [`build_index`](Self::build_index) with posts the caller
    /// already loaded. `self.posts` is ignored.
    pub fn index_with_posts(&self, posts: &[Post]) -> Result<SearchIndex> {
        let items = match &self.items {
            Some(items) => {
                let mut all = items.clone();
                all.extend(catalog::post_items(posts));
                all
            }
            None => catalog::default_catalog(posts),
        };

        SearchIndex::builder().items(items).limits(self.search).build()
    }
}
