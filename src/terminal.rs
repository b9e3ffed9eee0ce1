// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The retro terminal easter egg: a tiny line-oriented shell over the index.
//!
//! `search <query>` scores posts by title and summary (no tags, no priority)
//! and remembers the hits so a bare number can open one. Everything else is a
//! handful of fixed commands. Output is a list of typed [`Line`]s; what a
//! command asks the host to do (close, navigate) comes back as an [`Effect`].

use crate::index::SearchIndex;
use crate::scoring::post_score;
use crate::scoring::ranking::Relevance;
use crate::types::{ItemKind, SearchItem, Target};

/// Hits shown (and selectable) per `search`.
pub const TERMINAL_RESULTS: usize = 8;

/// Summary characters shown under each hit.
const SUMMARY_PREVIEW: usize = 60;

pub const WELCOME_ART: [&str; 6] = [
    "    ___    __    ________  ___________",
    "   /   |  / /   /  _/ __ \\/ ____/ ___/",
    "  / /| | / /    / // / / / __/  \\__ \\ ",
    " / ___ |/ /____/ // /_/ / /___ ___/ / ",
    "/_/  |_/_____/___/_____/_____//____/  ",
    "                                       ",
];

const HELP_HINT: &str = "Type \"help\" for available commands.";

const ABOUT: &str = "Allen Lee — Software Developer & Designer

Building digital experiences at the intersection of
aesthetics and functionality. Based in Taipei.

Type 'blog' to read my posts or 'search <query>' to find content.";

/// Built-in commands in help order.
pub const COMMANDS: [(&str, &str); 6] = [
    ("help", "Show available commands"),
    ("about", "Display information about Allen"),
    ("blog", "Navigate to blog"),
    ("search", "Search blog posts (usage: search <query>)"),
    ("clear", "Clear terminal"),
    ("exit", "Close terminal"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Input,
    Output,
    Error,
    System,
    SearchResult,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub kind: LineKind,
    pub text: String,
    /// Set on search hits so a host can make them clickable.
    pub href: Option<String>,
}

impl Line {
    fn new(kind: LineKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
            href: None,
        }
    }

    fn output(text: impl Into<String>) -> Self {
        Self::new(LineKind::Output, text)
    }

    fn error(text: impl Into<String>) -> Self {
        Self::new(LineKind::Error, text)
    }
}

/// What the host should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Close,
    /// Close the terminal and go here.
    Navigate(Target),
}

pub struct Terminal {
    index: SearchIndex,
    lines: Vec<Line>,
    history: Vec<String>,
    /// `None` while not browsing history; `Some(0)` is the newest entry.
    history_cursor: Option<usize>,
    /// Positions into `index` from the last `search`.
    last_hits: Vec<usize>,
}

impl Terminal {
    /// A fresh session, already showing the welcome banner.
    pub fn new(index: SearchIndex) -> Self {
        let mut terminal = Self {
            index,
            lines: Vec::new(),
            history: Vec::new(),
            history_cursor: None,
            last_hits: Vec::new(),
        };
        terminal.welcome();
        terminal
    }

    fn welcome(&mut self) {
        self.lines
            .extend(WELCOME_ART.iter().map(|art| Line::new(LineKind::System, *art)));
        self.lines
            .push(Line::new(LineKind::System, "Welcome to Allen. Terminal v1.0"));
        self.lines.push(Line::new(LineKind::System, HELP_HINT));
        self.lines.push(Line::new(LineKind::System, ""));
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    /// Run one line of input.
    pub fn execute(&mut self, input: &str) -> Effect {
        let command = input.trim().to_lowercase();
        self.lines.push(Line::new(LineKind::Input, format!("> {}", input)));

        if command.is_empty() {
            return Effect::None;
        }

        self.history.push(command.clone());
        self.history_cursor = None;

        if let Some(effect) = self.open_hit(&command) {
            return effect;
        }

        match command.as_str() {
            "help" => {
                self.help();
                Effect::None
            }
            "about" => {
                self.lines.push(Line::output(ABOUT));
                Effect::None
            }
            "clear" => {
                self.lines.clear();
                self.last_hits.clear();
                Effect::None
            }
            "exit" => Effect::Close,
            "blog" => Effect::Navigate(Target::Internal("/blog".to_string())),
            _ if command == "search" || command.starts_with("search ") => {
                // Slice the raw input so the query keeps its casing in messages.
                let query = input.trim_start().get("search".len()..).unwrap_or("").trim();
                self.search(query);
                Effect::None
            }
            _ => {
                self.lines
                    .push(Line::error(format!("Command not found: {}", command)));
                self.lines.push(Line::error(HELP_HINT));
                Effect::None
            }
        }
    }

    /// A number naming one of the last search hits opens it.
    fn open_hit(&mut self, command: &str) -> Option<Effect> {
        let n: usize = command.parse().ok()?;
        let position = *self.last_hits.get(n.checked_sub(1)?)?;
        let item = self.index.get(position)?;
        let target = item.target();
        self.last_hits.clear();
        Some(Effect::Navigate(target))
    }

    fn help(&mut self) {
        let listing = COMMANDS
            .iter()
            .map(|(name, description)| format!("  {:<12} {}", name, description))
            .collect::<Vec<_>>()
            .join("\n");
        self.lines.push(Line::output("Available commands:"));
        self.lines.push(Line::output(listing));
    }

    fn search(&mut self, query: &str) {
        if query.is_empty() {
            self.lines.push(Line::error("Usage: search <query>"));
            self.lines.push(Line::output("Example: search AI"));
            return;
        }

        let hits = search_posts(&self.index, query);
        self.last_hits = hits.iter().map(|hit| hit.position).collect();

        if hits.is_empty() {
            self.lines
                .push(Line::output(format!("No results found for \"{}\"", query)));
            return;
        }

        let plural = if hits.len() == 1 { "" } else { "s" };
        self.lines.push(Line::output(format!(
            "Found {} result{} for \"{}\":",
            hits.len(),
            plural,
            query
        )));
        self.lines.push(Line::output(""));

        for (n, hit) in hits.iter().enumerate() {
            self.lines.push(Line {
                kind: LineKind::SearchResult,
                text: format!("  [{}] {} {}", n + 1, hit.item.title, hit.relevance().stars()),
                href: Some(hit.item.href.clone()),
            });
            self.lines.push(Line::output(format!(
                "      {}",
                preview(hit.item.description_or_empty())
            )));
            self.lines.push(Line::output(""));
        }

        self.lines.push(Line::output(format!(
            "Type a number (1-{}) to open a post.",
            TERMINAL_RESULTS
        )));
    }

    /// Shell-style history: step back to older commands.
    pub fn history_prev(&mut self) -> Option<&str> {
        let next = self.history_cursor.map_or(0, |cursor| cursor + 1);
        if next >= self.history.len() {
            return None;
        }
        self.history_cursor = Some(next);
        self.history_entry(next)
    }

    /// Step forward again. Past the newest entry the input is empty.
    pub fn history_next(&mut self) -> Option<&str> {
        match self.history_cursor {
            Some(0) => {
                self.history_cursor = None;
                Some("")
            }
            Some(cursor) => {
                self.history_cursor = Some(cursor - 1);
                self.history_entry(cursor - 1)
            }
            None => None,
        }
    }

    fn history_entry(&self, from_newest: usize) -> Option<&str> {
        let idx = self.history.len().checked_sub(from_newest + 1)?;
        self.history.get(idx).map(String::as_str)
    }
}

/// One post hit as the terminal prints it.
#[derive(Debug, Clone, Copy)]
pub struct PostHit<'a> {
    pub item: &'a SearchItem,
    pub position: usize,
    /// [`post_score`] of the hit.
    pub score: u64,
}

impl PostHit<'_> {
    pub fn relevance(&self) -> Relevance {
        Relevance::from_match_score(self.score)
    }
}

/// Score the posts in `index` with [`post_score`], best first, capped at
/// [`TERMINAL_RESULTS`]. Equal scores keep catalog order.
pub fn search_posts<'a>(index: &'a SearchIndex, query: &str) -> Vec<PostHit<'a>> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    let query_lower = query.to_lowercase();

    let mut hits: Vec<PostHit<'a>> = index
        .items()
        .iter()
        .enumerate()
        .filter(|(_, item)| item.kind == ItemKind::Post)
        .filter_map(|(position, item)| {
            let score = post_score(&item.title, item.description_or_empty(), &query_lower);
            (score > 0).then_some(PostHit {
                item,
                position,
                score,
            })
        })
        .collect();

    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits.truncate(TERMINAL_RESULTS);
    hits
}

fn preview(summary: &str) -> String {
    if summary.chars().count() > SUMMARY_PREVIEW {
        let cut: String = summary.chars().take(SUMMARY_PREVIEW).collect();
        format!("{}...", cut)
    } else {
        summary.to_string()
    }
}
