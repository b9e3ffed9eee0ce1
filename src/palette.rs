// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Command palette controller.
//!
//! Everything the palette overlay does except drawing: the open flag, the
//! query as typed, the debounced query that actually gets searched, the
//! current results and which one is highlighted. A UI feeds it key events and
//! text changes with a timestamp, calls [`CommandPalette::tick`] from its
//! event loop, and renders whatever state it finds.
//!
//! Keys:
//!
//! | Key             | When   | Effect                      |
//! |-----------------|--------|-----------------------------|
//! | `meta+k`/`ctrl+k` | always | toggle open/closed        |
//! | `Escape`        | always | close                       |
//! | `ArrowDown`     | open   | next result (stops at last) |
//! | `ArrowUp`       | open   | previous result (stops at 0)|
//! | `Enter`         | open   | confirm highlighted result  |

use std::time::Instant;

use crate::config::PaletteConfig;
use crate::debounce::Debouncer;
use crate::index::SearchIndex;
use crate::types::{SearchItem, Target};

/// Modifier keys held during a key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        ctrl: false,
        alt: false,
        shift: false,
        meta: false,
    };

    pub const CTRL: Modifiers = Modifiers {
        ctrl: true,
        ..Modifiers::NONE
    };

    pub const META: Modifiers = Modifiers {
        meta: true,
        ..Modifiers::NONE
    };

    /// Every modifier set in `self` is also held in `held`.
    fn satisfied_by(self, held: Modifiers) -> bool {
        (!self.ctrl || held.ctrl)
            && (!self.alt || held.alt)
            && (!self.shift || held.shift)
            && (!self.meta || held.meta)
    }
}

/// A key press, named the way browsers name `KeyboardEvent.key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyEvent {
    pub key: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    pub fn with(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// A global shortcut: a key plus the modifiers that must be held.
///
/// Extra modifiers do not prevent a match, and key names compare
/// case-insensitively (`K` with shift still matches `k`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: &'static str,
    pub modifiers: Modifiers,
}

impl Shortcut {
    pub const fn new(key: &'static str, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        event.key.eq_ignore_ascii_case(self.key) && self.modifiers.satisfied_by(event.modifiers)
    }
}

pub const TOGGLE_META: Shortcut = Shortcut::new("k", Modifiers::META);
pub const TOGGLE_CTRL: Shortcut = Shortcut::new("k", Modifiers::CTRL);
pub const CLOSE: Shortcut = Shortcut::new("Escape", Modifiers::NONE);

/// The result the user confirmed, and what to do with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub item: SearchItem,
    pub target: Target,
}

pub struct CommandPalette {
    index: SearchIndex,
    open: bool,
    query: String,
    debounced: Debouncer<String>,
    /// Query behind `results`.
    searched: String,
    /// Positions into `index`, best first.
    results: Vec<usize>,
    selected: usize,
}

impl CommandPalette {
    /// Closed palette showing the browse view.
    pub fn new(index: SearchIndex, config: &PaletteConfig) -> Self {
        let mut palette = Self {
            index,
            open: false,
            query: String::new(),
            debounced: Debouncer::new(String::new(), config.debounce()),
            searched: String::new(),
            results: Vec::new(),
            selected: 0,
        };
        palette.refresh();
        palette
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Hide the overlay. The query and results are kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// The query as typed, not yet debounced.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The query the current results were computed for.
    pub fn searched_query(&self) -> &str {
        &self.searched
    }

    pub fn set_query(&mut self, query: impl Into<String>, now: Instant) {
        self.query = query.into();
        self.debounced.push(self.query.clone(), now);
    }

    /// Re-run the search if the debounced query settled on a new value.
    /// Returns true when the results were replaced; the highlight then moves
    /// back to the top.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.debounced.poll(now) {
            Some(settled) if *settled != self.searched => {
                self.searched = settled.clone();
                self.refresh();
                true
            }
            _ => false,
        }
    }

    fn refresh(&mut self) {
        self.results = self
            .index
            .rank(&self.searched)
            .into_iter()
            .map(|scored| scored.position)
            .collect();
        self.selected = 0;
    }

    pub fn results(&self) -> impl Iterator<Item = &SearchItem> + '_ {
        self.results
            .iter()
            .filter_map(move |&position| self.index.get(position))
    }

    pub fn result_count(&self) -> usize {
        self.results.len()
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&SearchItem> {
        self.results
            .get(self.selected)
            .and_then(|&position| self.index.get(position))
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.results.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Confirm the highlighted result: close, clear the query, and hand the
    /// item back for the caller to navigate to.
    pub fn confirm(&mut self, now: Instant) -> Option<Selection> {
        let item = self.selected()?.clone();

        self.open = false;
        self.set_query(String::new(), now);
        self.selected = 0;

        tracing::debug!(id = %item.id, href = %item.href, "palette selection");
        let target = item.target();
        Some(Selection { item, target })
    }

    /// Route one key press. Global shortcuts always apply; navigation keys only
    /// while open. Returns a selection when `Enter` confirmed one.
    pub fn handle_key(&mut self, event: &KeyEvent, now: Instant) -> Option<Selection> {
        if TOGGLE_META.matches(event) || TOGGLE_CTRL.matches(event) {
            self.toggle();
            return None;
        }
        if CLOSE.matches(event) {
            self.close();
            return None;
        }
        if !self.open {
            return None;
        }

        match event.key.as_str() {
            "ArrowDown" => self.select_next(),
            "ArrowUp" => self.select_previous(),
            "Enter" => return self.confirm(now),
            _ => {}
        }
        None
    }

    /// Placeholder shown instead of a result list, if any.
    pub fn status(&self) -> Option<String> {
        if !self.results.is_empty() {
            return None;
        }
        if self.query.is_empty() {
            Some("Type a command or search...".to_string())
        } else {
            Some(format!("No results found for \"{}\"", self.query))
        }
    }
}
