// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Whole-book analysis report.
//!
//! Scores every page against a taxonomy, scores the book as one text, and
//! rolls up the precomputed per-page metrics. Page scoring is independent per
//! page, so with the `parallel` feature it runs on the rayon pool.

use crate::book::Book;
use crate::scoring::ThemeScorer;
use crate::types::Segment;
use crate::utils::count_words;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

#[cfg(feature = "parallel")]
use indicatif::ProgressBar;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "parallel")]
use std::sync::atomic::{AtomicUsize, Ordering};

/// One page's line in the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageReport {
    pub page: usize,
    pub word_count: usize,
    pub difficulty: f64,
    pub readability: f64,
    /// Scores computed here from the page text.
    pub themes: BTreeMap<String, f64>,
    /// Highest theme among the page's precomputed scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_theme: Option<String>,
}

impl PageReport {
    fn build(page: usize, segment: &Segment, scorer: &ThemeScorer) -> Self {
        PageReport {
            page,
            word_count: count_words(&segment.text),
            difficulty: segment.difficulty,
            readability: segment.analysis.readability_score,
            themes: scorer.score(&segment.text),
            top_theme: segment.top_theme().map(|(name, _)| name.to_string()),
        }
    }
}

/// The full report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookReport {
    pub title: String,
    pub page_count: usize,
    pub chapter_count: usize,
    pub word_count: usize,
    /// Theme scores over the concatenated text of every page.
    pub book_themes: BTreeMap<String, f64>,
    pub average_difficulty: f64,
    pub average_readability: f64,
    pub pages: Vec<PageReport>,
}

impl BookReport {
    pub fn build(book: &Book, scorer: &ThemeScorer) -> Self {
        let start = Instant::now();

        #[cfg(feature = "parallel")]
        let pages: Vec<PageReport> = book
            .segments
            .par_iter()
            .enumerate()
            .map(|(i, segment)| PageReport::build(i + 1, segment, scorer))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let pages: Vec<PageReport> = book
            .segments
            .iter()
            .enumerate()
            .map(|(i, segment)| PageReport::build(i + 1, segment, scorer))
            .collect();

        let report = Self::assemble(book, scorer, pages);
        info!(
            pages = report.page_count,
            themes = report.book_themes.len(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "built book report"
        );
        report
    }

    /// Same as [`BookReport::build`], advancing `progress` once per page.
    #[cfg(feature = "parallel")]
    pub fn build_with_progress(book: &Book, scorer: &ThemeScorer, progress: &ProgressBar) -> Self {
        let counter = AtomicUsize::new(0);
        let total = book.page_count();

        let pages: Vec<PageReport> = book
            .segments
            .par_iter()
            .enumerate()
            .map(|(i, segment)| {
                let page = PageReport::build(i + 1, segment, scorer);
                let count = counter.fetch_add(1, Ordering::Relaxed) + 1;
                progress.set_position(count as u64);
                if count % 100 == 0 || count == total {
                    progress.set_message(format!("{}/{}", count, total));
                }
                page
            })
            .collect();

        Self::assemble(book, scorer, pages)
    }

    fn assemble(book: &Book, scorer: &ThemeScorer, pages: Vec<PageReport>) -> Self {
        BookReport {
            title: book.title().to_string(),
            page_count: book.page_count(),
            chapter_count: book.chapters.len(),
            word_count: pages.iter().map(|p| p.word_count).sum(),
            book_themes: scorer.score(&book.full_text()),
            average_difficulty: mean(book.segments.iter().map(|s| s.difficulty)),
            average_readability: mean(book.segments.iter().map(|s| s.analysis.readability_score)),
            pages,
        }
    }

    /// The `n` highest book-level themes, best first, ties by name.
    pub fn top_themes(&self, n: usize) -> Vec<(&str, f64)> {
        let mut themes: Vec<(&str, f64)> = self
            .book_themes
            .iter()
            .map(|(name, score)| (name.as_str(), *score))
            .collect();
        themes.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        themes.truncate(n);
        themes
    }

    pub fn page(&self, page: usize) -> Option<&PageReport> {
        page.checked_sub(1).and_then(|i| self.pages.get(i))
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = values.fold((0.0, 0usize), |(sum, n), v| (sum + v, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
