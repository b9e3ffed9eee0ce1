// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use serde::{Deserialize, Serialize};

/// Words per minute used for reading-time estimates.
pub const WORDS_PER_MINUTE: usize = 200;

#[derive(Deserialize, Serialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Blog,
    Notes,
}

/// Front matter of one blog/notes entry, as written by the site build.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub slug: String,
    pub title: String,
    /// Publication date, `YYYY-MM-DD`. Sorts lexicographically.
    pub date: String,
    pub summary: String,
    pub cover: String,
    pub cover_alt: String,
    #[serde(default)]
    pub category: Category,
    /// Body text, when the build exports it. Only used for reading time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Post {
    /// Estimated minutes to read the body, rounded up.
    pub fn reading_time(&self) -> Option<usize> {
        self.content.as_deref().map(reading_time)
    }
}

/// Minutes to read `content` at [`WORDS_PER_MINUTE`], rounded up.
///
/// Words are the pieces between whitespace runs. Leading or trailing
/// whitespace adds an empty piece, and empty content counts as one piece.
pub fn reading_time(content: &str) -> usize {
    let mut pieces: usize = 1;
    let mut in_space = false;
    for c in content.chars() {
        if c.is_whitespace() {
            if !in_space {
                pieces += 1;
                in_space = true;
            }
        } else {
            in_space = false;
        }
    }
    pieces.div_ceil(WORDS_PER_MINUTE)
}
