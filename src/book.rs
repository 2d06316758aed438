// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Loading a book analysis document.
//!
//! ```json
//! {
//!   "metadata": { "title": "...", "author": "..." },
//!   "pages":    [ { "text": "...", "difficulty": 42.0, "themes": {...} } ],
//!   "chapters": [ { "number": 1, "title": "...", "start_page": 1, "end_page": 12 } ]
//! }
//! ```
//!
//! `segments` is accepted in place of `pages`. When `chapters` is missing the
//! chapter list is detected from headings in the page text. Chapter ranges that
//! point past the last page are clamped, so every range a [`Book`] hands out
//! stays inside `1..=page_count`.

use crate::chapters::detect_chapters;
use crate::config::ReaderConfig;
use crate::error::{LecternError, Result};
use crate::search::SearchEngine;
use crate::types::{Chapter, Segment};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Descriptive fields about the book. Unknown keys are kept in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
struct RawBook {
    #[serde(default)]
    metadata: BookMetadata,
    #[serde(default, alias = "segments")]
    pages: Vec<Segment>,
    #[serde(default)]
    chapters: Option<Vec<Chapter>>,
}

/// A loaded book: pages, chapter ranges and metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Book {
    pub metadata: BookMetadata,
    pub segments: Vec<Segment>,
    pub chapters: Vec<Chapter>,
}

impl Book {
    /// Assemble a book. `None` chapters are detected from the page text.
    pub fn new(metadata: BookMetadata, segments: Vec<Segment>, chapters: Option<Vec<Chapter>>) -> Self {
        let chapters = match chapters {
            Some(chapters) => clamp_chapters(chapters, segments.len()),
            None => detect_chapters(&segments),
        };
        Book {
            metadata,
            segments,
            chapters,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: RawBook = serde_json::from_str(json).map_err(|e| LecternError::json("book", e))?;
        let book = Book::new(raw.metadata, raw.pages, raw.chapters);
        debug!(
            pages = book.page_count(),
            chapters = book.chapters.len(),
            "loaded book"
        );
        Ok(book)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| LecternError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn page_count(&self) -> usize {
        self.segments.len()
    }

    /// Page `n` (1-indexed).
    pub fn page(&self, page: usize) -> Option<&Segment> {
        page.checked_sub(1).and_then(|i| self.segments.get(i))
    }

    pub fn title(&self) -> &str {
        self.metadata.title.as_deref().unwrap_or("Untitled")
    }

    /// All page texts joined by blank lines.
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// A search engine over this book's pages and chapters.
    pub fn search_engine(&self, config: &ReaderConfig) -> SearchEngine {
        SearchEngine::with_config(self.segments.clone(), self.chapters.clone(), config)
    }

    pub fn into_search_engine(self, config: &ReaderConfig) -> SearchEngine {
        SearchEngine::with_config(self.segments, self.chapters, config)
    }
}

/// Pull every range inside `1..=page_count`. Member page lists are re-derived
/// for clamped ranges and filled in when absent.
fn clamp_chapters(chapters: Vec<Chapter>, page_count: usize) -> Vec<Chapter> {
    chapters
        .into_iter()
        .map(|mut chapter| {
            let (start, end) = (chapter.start_page, chapter.end_page);
            let clamped_start = start.max(1);
            let clamped_end = end.min(page_count);

            if (clamped_start, clamped_end) != (start, end) {
                warn!(
                    chapter = %chapter.number,
                    start_page = start,
                    end_page = end,
                    page_count,
                    "chapter range outside the book, clamping"
                );
                chapter.start_page = clamped_start;
                chapter.end_page = clamped_end;
                chapter.segments = chapter.pages().collect();
            } else if chapter.segments.is_empty() {
                chapter.segments = chapter.pages().collect();
            }
            chapter
        })
        .collect()
}
