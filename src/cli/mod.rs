// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the folio command-line interface.
//!
//! Four subcommands over the same catalog: `search` ranks a query, `browse`
//! shows the empty-query view, `inspect` summarizes what got indexed, and
//! `terminal` runs the retro terminal on stdin. Every subcommand builds its
//! catalog the same way, from an optional config file plus an optional posts
//! directory.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Fuzzy search over a personal site's pages, posts and links",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the catalog comes from. Shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Site config JSON (items, posts directory, limits)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Content directory containing manifest.json and post files
    ///
    /// Overrides the config file's `posts` entry.
    #[arg(short, long)]
    pub posts: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the catalog against a query
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        /// Maximum number of results to return (overrides config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show what the palette lists before anything is typed
    Browse {
        #[command(flatten)]
        source: SourceArgs,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Summarize the assembled catalog
    Inspect {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Interactive retro terminal on stdin/stdout
    Terminal {
        #[command(flatten)]
        source: SourceArgs,
    },
}
