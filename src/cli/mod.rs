// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lectern command-line interface.
//!
//! Three subcommands: `search` to query a book, `themes` to score it against a
//! taxonomy, and `inspect` to summarize what was loaded. Every command reads the
//! same book analysis JSON and can print JSON instead of the terminal view.

pub mod display;

use clap::{Parser, Subcommand};
use lectern::SearchType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "lectern",
    about = "Search and theme analysis for a single book",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a book for words, phrases, chapters or verse references
    Search {
        /// Path to the book analysis JSON
        book: PathBuf,

        /// Search query (`luz`, `a luz eterna`, `3`, `3:16`, ...)
        query: String,

        /// Which searches to run
        #[arg(short = 't', long = "type", default_value = "all")]
        search_type: SearchType,

        /// Maximum number of results to return
        #[arg(short, long)]
        limit: Option<usize>,

        /// Word search matches whole terms only (implies `--type word`)
        #[arg(long)]
        exact: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,

        /// Reader config JSON (thresholds, excerpt widths, highlight markers)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Score a book, or one page of it, against a theme taxonomy
    Themes {
        /// Path to the book analysis JSON
        book: PathBuf,

        /// Score only this page (1-indexed)
        #[arg(short, long)]
        page: Option<usize>,

        /// Custom taxonomy JSON instead of the bundled extended one
        #[arg(long)]
        taxonomy: Option<PathBuf>,

        /// Number of themes to show
        #[arg(long, default_value = "10")]
        top: usize,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Summarize a book: pages, chapters and index statistics
    Inspect {
        /// Path to the book analysis JSON
        book: PathBuf,
    },
}
