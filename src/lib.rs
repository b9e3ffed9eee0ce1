// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy search and navigation for a personal site.
//!
//! A small, fixed catalog of pages, posts and links is ranked against a short
//! query typed into a command palette. The ranker is deliberately simple and
//! fully deterministic: the same query over the same catalog always produces
//! the same list in the same order.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  content/   │────▶│   index/     │────▶│  search.rs  │
//! │ (manifest,  │     │ (catalog,    │     │ (rank,      │
//! │  posts)     │     │  validation) │     │  browse)    │
//! └─────────────┘     └──────────────┘     └─────────────┘
//!                            │                    │
//!                            ▼                    ▼
//!                  ┌──────────────────┐   ┌──────────────┐
//!                  │ palette.rs       │   │ scoring/     │
//!                  │ terminal.rs      │   │ (match tiers,│
//!                  │ (+ debounce.rs)  │   │  ordering)   │
//!                  └──────────────────┘   └──────────────┘
//! ```
//!
//! | Module      | Role                                              |
//! |-------------|---------------------------------------------------|
//! | `types`     | `SearchItem`, `ItemKind`, navigation `Target`     |
//! | `scoring`   | Per-field match tiers and result ordering         |
//! | `search`    | Empty-query browse and query ranking              |
//! | `index`     | Validated, shared catalog and the built-in site   |
//! | `content`   | Post manifest loading                             |
//! | `config`    | Site configuration file                           |
//! | `debounce`  | Trailing-edge debounce with an injected clock     |
//! | `palette`   | Command palette state machine                     |
//! | `terminal`  | Retro terminal command interpreter                |
//!
//! # Usage
//!
//! ```
//! use folio::{SearchIndex, SearchItem, ItemKind};
//!
//! let index = SearchIndex::builder()
//!     .item(SearchItem::new("home", "Home", "/", ItemKind::Page).with_priority(10))
//!     .item(SearchItem::new("blog", "Blog", "/blog", ItemKind::Page).with_priority(8))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(index.search("blog")[0].id, "blog");
//! assert_eq!(index.search("").len(), 2);
//! ```

pub mod config;
pub mod content;
pub mod debounce;
pub mod error;
pub mod index;
pub mod palette;
pub mod scoring;
pub mod search;
pub mod terminal;
pub mod testing;
pub mod types;

#[cfg(feature = "wasm")]
mod wasm;

// Re-exports for public API
pub use config::{PaletteConfig, SiteConfig};
pub use content::{load_posts, Category, Post};
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use index::{IndexBuilder, SearchIndex};
pub use palette::{CommandPalette, KeyEvent, Modifiers, Selection};
pub use scoring::ranking::{Relevance, ScoredItem};
pub use search::{browse, rank, search_items, SearchLimits};
pub use terminal::{Effect, Terminal};
pub use types::{ItemKind, SearchItem, Target};
