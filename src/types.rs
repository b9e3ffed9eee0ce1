// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search catalog.
//!
//! A catalog is a flat list of [`SearchItem`]s: site pages, blog posts, projects
//! and external links. Items are immutable once they enter a
//! [`SearchIndex`](crate::SearchIndex); the ranker only ever reads them.
//!
//! # Invariants
//!
//! - **id**: unique across the index.
//! - **href**: non-empty. Internal paths start with `/`, anything else is opened
//!   externally (see [`Target`]).
//! - **title**: non-empty. It is the primary matching field.
//!
//! These are checked once by [`IndexBuilder`](crate::IndexBuilder), never by
//! the search functions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// What kind of destination an item points at.
///
/// Only affects display (the prompt shown in front of a result). Scoring never
/// looks at the kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Page,
    Post,
    Project,
    External,
}

impl ItemKind {
    /// Terminal-style prompt rendered before a result: pages are the most
    /// prominent, external links the least.
    pub fn prompt(self) -> &'static str {
        match self {
            ItemKind::Page => ">>>",
            ItemKind::Post | ItemKind::Project => ">>",
            ItemKind::External => ">",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ItemKind::Page => "page",
            ItemKind::Post => "post",
            ItemKind::Project => "project",
            ItemKind::External => "external",
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigable entry in the search catalog.
///
/// Optional fields are genuinely optional: an item with only `id`, `title`,
/// `href` and `kind` is matchable by title and never causes an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchItem {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub href: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Base importance. `None` scores as weight 1 and is never part of the
    /// empty-query browse view.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    /// Display glyph. Never scored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl SearchItem {
    /// Minimal item: everything optional left empty.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        href: impl Into<String>,
        kind: ItemKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: None,
            href: href.into(),
            kind,
            tags: Vec::new(),
            priority: None,
            icon: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Description or the empty string, which is how the scorer sees it.
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Multiplier applied to the match score. Absent priority weighs 1.
    ///
    /// An explicit 0 weighs 0 and is kept on purpose: such an item never
    /// ranks, rather than being treated like an absent priority.
    pub fn weight(&self) -> u32 {
        self.priority.unwrap_or(1)
    }

    /// Where confirming this item should take the user.
    pub fn target(&self) -> Target {
        Target::from_href(&self.href)
    }
}

/// How a presentation layer should act on a confirmed item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Client-side navigation to a site path (`/blog`, `/blog/some-post`).
    Internal(String),
    /// Open in a new tab or the platform handler (`https://…`, `mailto:…`).
    External(String),
}

impl Target {
    pub fn from_href(href: &str) -> Self {
        if href.starts_with('/') {
            Target::Internal(href.to_string())
        } else {
            Target::External(href.to_string())
        }
    }

    pub fn href(&self) -> &str {
        match self {
            Target::Internal(href) | Target::External(href) => href,
        }
    }

    pub fn is_external(&self) -> bool {
        matches!(self, Target::External(_))
    }
}
