// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use folio::content::{self, Post};
use folio::terminal::Effect;
use folio::{ItemKind, ScoredItem, SearchIndex, SearchItem, SiteConfig, Target, Terminal};

mod cli;
use cli::display::*;
use cli::{Cli, Commands, SourceArgs};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("FOLIO_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            query,
            source,
            limit,
            json,
        } => run_search(&query, &source, limit, json),
        Commands::Browse { source, json } => run_browse(&source, json),
        Commands::Inspect { source } => run_inspect(&source),
        Commands::Terminal { source } => run_terminal(&source),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// CATALOG
// ═══════════════════════════════════════════════════════════════════════════

fn load_config(source: &SourceArgs) -> Result<SiteConfig> {
    let mut config = match &source.config {
        Some(path) => SiteConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SiteConfig::default(),
    };
    if let Some(posts) = &source.posts {
        config.posts = Some(posts.clone());
    }
    Ok(config)
}

#[cfg(feature = "parallel")]
fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    use indicatif::{ProgressBar, ProgressStyle};

    let manifest = content::read_manifest(dir)?;

    let pb = ProgressBar::new(manifest.documents.len() as u64);
    let style = ProgressStyle::with_template(
        "{spinner:.cyan} {prefix:<12} [{bar:40.cyan/dim}] {pos}/{len} {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("━━╸");
    pb.set_style(style);
    pb.set_prefix("Loading");
    pb.set_message("posts...");

    let posts = content::load_documents_with_progress(dir, &manifest, &pb)?;
    pb.finish_with_message(format!("loaded {} posts", posts.len()));
    Ok(posts)
}

#[cfg(not(feature = "parallel"))]
fn load_posts(dir: &Path) -> Result<Vec<Post>> {
    Ok(content::load_posts(dir)?)
}

fn build_index(source: &SourceArgs) -> Result<SearchIndex> {
    let config = load_config(source)?;

    let posts = match &config.posts {
        Some(dir) => load_posts(dir)
            .with_context(|| format!("Failed to load posts from {}", dir.display()))?,
        None => Vec::new(),
    };
    if config.posts.is_some() && posts.is_empty() {
        eprintln!("⚠️  Manifest lists no posts; searching site pages only");
    }

    Ok(config.index_with_posts(&posts)?)
}

// ═══════════════════════════════════════════════════════════════════════════
// SEARCH / BROWSE
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonHit<'a> {
    #[serde(flatten)]
    item: &'a SearchItem,
    score: u64,
    match_score: u64,
}

fn run_search(query: &str, source: &SourceArgs, limit: Option<usize>, json: bool) -> Result<()> {
    let index = build_index(source)?;
    let mut results = index.rank(query);
    if let Some(limit) = limit {
        results.truncate(limit);
    }

    if json {
        return print_json(&results);
    }

    if results.is_empty() {
        eprintln!("No results found for \"{}\"", query);
        return Ok(());
    }

    print_results(&format!("SEARCH \"{}\"", query), &results, true);
    Ok(())
}

fn run_browse(source: &SourceArgs, json: bool) -> Result<()> {
    let index = build_index(source)?;
    let results = index.rank("");

    if json {
        return print_json(&results);
    }
    if results.is_empty() {
        eprintln!("⚠️  Nothing has a high enough priority to browse");
        return Ok(());
    }

    print_results("BROWSE", &results, false);
    Ok(())
}

fn print_json(results: &[ScoredItem<'_>]) -> Result<()> {
    let hits: Vec<JsonHit<'_>> = results
        .iter()
        .map(|scored| JsonHit {
            item: scored.item,
            score: scored.score,
            match_score: scored.match_score,
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&hits)?);
    Ok(())
}

fn print_results(label: &str, results: &[ScoredItem<'_>], show_relevance: bool) {
    section_top(label);
    for (n, scored) in results.iter().enumerate() {
        let item = scored.item;
        let relevance = if show_relevance {
            format!(" {}", stars(scored.relevance()))
        } else {
            String::new()
        };
        row(&format!(
            " {:>2}. {} {} {}{}",
            n + 1,
            kind_label(item.kind),
            score_value(scored.score),
            themed(BRIGHT_CYAN, &[BOLD], &truncate(&item.title, 32)),
            relevance
        ));
        let description = item.description_or_empty();
        let detail = if description.is_empty() {
            item.href.clone()
        } else {
            format!("{} · {}", truncate(description, 40), item.href)
        };
        row(&format!("     {}", themed(GRAY, &[DIM], &detail)));
    }
    section_bot();
}

// ═══════════════════════════════════════════════════════════════════════════
// INSPECT
// ═══════════════════════════════════════════════════════════════════════════

fn run_inspect(source: &SourceArgs) -> Result<()> {
    let index = build_index(source)?;
    let limits = index.limits();

    let count = |kind: ItemKind| index.iter().filter(|item| item.kind == kind).count();
    let browsable = index
        .iter()
        .filter(|item| item.priority.unwrap_or(0) >= limits.browse_min_priority)
        .count();

    section_top("CATALOG");
    row(&format!(" {} {}", pad_right("items", 14), index.len()));
    for kind in [ItemKind::Page, ItemKind::Post, ItemKind::Project, ItemKind::External] {
        row(&format!("   {} {}", kind_label(kind), count(kind)));
    }
    row(&format!(" {} {}", pad_right("browsable", 14), browsable));
    row(&format!(
        " {} max {} / browse {} at priority ≥ {}",
        pad_right("limits", 14),
        limits.max_results,
        limits.browse_limit,
        limits.browse_min_priority
    ));
    section_bot();

    section_top("ITEMS");
    for item in index.iter() {
        let priority = item
            .priority
            .map_or_else(|| "-".to_string(), |priority| priority.to_string());
        row(&format!(
            " {} {:>3} {} {}",
            kind_label(item.kind),
            priority,
            pad_right(&truncate(&item.id, 22), 22),
            themed(GRAY, &[DIM], &truncate(&item.href, 36))
        ));
    }
    section_bot();

    eprintln!("✓ {} items valid", index.len());
    Ok(())
}

// ═══════════════════════════════════════════════════════════════════════════
// TERMINAL
// ═══════════════════════════════════════════════════════════════════════════

fn run_terminal(source: &SourceArgs) -> Result<()> {
    let index = build_index(source)?;
    let mut terminal = Terminal::new(index);
    let mut printed = 0;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        let lines = terminal.lines();
        if lines.len() < printed {
            // `clear` dropped the scrollback
            printed = 0;
        }
        for line in &lines[printed..] {
            // Echoed input is already on screen
            if line.kind != folio::terminal::LineKind::Input {
                println!("{}", terminal_line(line));
            }
        }
        printed = terminal.lines().len();

        print!("{}", themed(GREEN, &[BOLD], "> "));
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        match terminal.execute(input.trim_end_matches(['\r', '\n'])) {
            Effect::None => {}
            Effect::Close => break,
            Effect::Navigate(target) => {
                let verb = match target {
                    Target::Internal(_) => "navigate",
                    Target::External(_) => "open",
                };
                println!("{} {}", themed(CYAN, &[], verb), target.href());
                break;
            }
        }
    }

    Ok(())
}
