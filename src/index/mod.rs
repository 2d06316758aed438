// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the structures that answer word, phrase and chapter lookups.
//!
//! A [`BookIndex`] holds three inverted maps built once per book:
//! - **words**: lowercase token → postings (`page` + positions or a count)
//! - **phrases**: trimmed sentence fragment (15-200 chars) → pages
//! - **chapters**: canonical chapter number → title and page range
//!
//! Two [`IndexingStrategy`] implementations fill it:
//! - [`EagerIndexer`]: full character-offset position lists for every token
//! - [`BatchedIndexer`]: per-page counts, stop words and short tokens skipped,
//!   pages processed in batches with periodic shrink-to-fit
//!
//! [`select_strategy`] picks one from the page count. Both produce the same
//! logical shape, so queries never care which built the index.
//!
//! # Invariants
//!
//! 1. **BUILD_ONCE**: an index is never updated after `build` returns
//! 2. **PAGE_ORDER**: each posting list is sorted by page (pages are visited in order)
//! 3. **ONE_POSTING_PER_PAGE**: a term has at most one posting per page
//! 4. **NON_EMPTY**: every posting has `count() >= 1`

mod batched;
mod eager;
pub mod stop_words;

pub use batched::BatchedIndexer;
pub use eager::EagerIndexer;

use crate::types::{Chapter, ChapterNumber, Segment};
use crate::utils::split_phrases;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// =============================================================================
// POSTINGS
// =============================================================================

/// How a posting records its hits on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordHits {
    /// Character offsets of every occurrence in the lowercased page text.
    Positions(Vec<usize>),
    /// Occurrence count only.
    Count(usize),
}

/// A term's hits on one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordPosting {
    pub page: usize,
    pub hits: WordHits,
}

impl WordPosting {
    pub fn count(&self) -> usize {
        match &self.hits {
            WordHits::Positions(positions) => positions.len(),
            WordHits::Count(count) => *count,
        }
    }

    /// Character offsets, when the building strategy kept them.
    pub fn positions(&self) -> Option<&[usize]> {
        match &self.hits {
            WordHits::Positions(positions) => Some(positions),
            WordHits::Count(_) => None,
        }
    }
}

/// What the chapter map stores per chapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChapterEntry {
    pub number: ChapterNumber,
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
}

// =============================================================================
// BOOK INDEX
// =============================================================================

/// The complete, read-only index of one book.
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    words: HashMap<String, Vec<WordPosting>>,
    phrases: HashMap<String, Vec<usize>>,
    /// Chapters in first-seen order. A repeated number replaces the entry in place.
    chapters: Vec<ChapterEntry>,
    chapter_slots: HashMap<ChapterNumber, usize>,
    /// Lowercased page texts, `lowered[page - 1]`.
    lowered: Vec<String>,
}

impl BookIndex {
    pub(crate) fn with_capacity(pages: usize) -> Self {
        BookIndex {
            lowered: Vec::with_capacity(pages),
            ..BookIndex::default()
        }
    }

    pub(crate) fn add_chapters(&mut self, chapters: &[Chapter]) {
        for chapter in chapters {
            let entry = ChapterEntry {
                number: chapter.number.clone(),
                title: chapter.title.clone(),
                start_page: chapter.start_page,
                end_page: chapter.end_page,
            };
            match self.chapter_slots.get(&chapter.number) {
                Some(&slot) => self.chapters[slot] = entry,
                None => {
                    self.chapter_slots
                        .insert(chapter.number.clone(), self.chapters.len());
                    self.chapters.push(entry);
                }
            }
        }
    }

    pub(crate) fn add_posting(&mut self, word: &str, posting: WordPosting) {
        match self.words.get_mut(word) {
            Some(postings) => postings.push(posting),
            None => {
                self.words.insert(word.to_string(), vec![posting]);
            }
        }
    }

    /// Record every indexable phrase of a lowercased page. A phrase repeated on
    /// the same page is recorded once.
    pub(crate) fn add_phrases(&mut self, page: usize, lowered: &str) {
        for phrase in split_phrases(lowered) {
            let pages = self.phrases.entry(phrase.to_string()).or_default();
            if pages.last() != Some(&page) {
                pages.push(page);
            }
        }
    }

    pub(crate) fn push_page(&mut self, lowered: String) {
        self.lowered.push(lowered);
    }

    /// Release slack capacity in the posting and phrase lists.
    pub(crate) fn reclaim(&mut self) {
        for postings in self.words.values_mut() {
            postings.shrink_to_fit();
        }
        for pages in self.phrases.values_mut() {
            pages.shrink_to_fit();
        }
        self.words.shrink_to_fit();
        self.phrases.shrink_to_fit();
    }

    /// Postings for an exact (already lowercased) term.
    pub fn word(&self, term: &str) -> Option<&[WordPosting]> {
        self.words.get(term).map(Vec::as_slice)
    }

    /// Every indexed term with its postings, in arbitrary order.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &[WordPosting])> {
        self.words
            .iter()
            .map(|(term, postings)| (term.as_str(), postings.as_slice()))
    }

    /// Pages containing an exact (already lowercased, trimmed) phrase.
    pub fn phrase(&self, phrase: &str) -> Option<&[usize]> {
        self.phrases.get(phrase).map(Vec::as_slice)
    }

    pub fn chapter(&self, number: &ChapterNumber) -> Option<&ChapterEntry> {
        self.chapter_slots
            .get(number)
            .map(|&slot| &self.chapters[slot])
    }

    pub fn chapters(&self) -> &[ChapterEntry] {
        &self.chapters
    }

    /// Lowercased text of a 1-indexed page.
    pub fn lowered_page(&self, page: usize) -> Option<&str> {
        page.checked_sub(1)
            .and_then(|i| self.lowered.get(i))
            .map(String::as_str)
    }

    pub fn page_count(&self) -> usize {
        self.lowered.len()
    }

    pub fn term_count(&self) -> usize {
        self.words.len()
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

// =============================================================================
// STRATEGIES
// =============================================================================

/// A way of turning pages and chapters into a [`BookIndex`].
pub trait IndexingStrategy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn build(&self, segments: &[Segment], chapters: &[Chapter]) -> BookIndex;
}

/// Tunables for strategy selection and the batched build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IndexThresholds {
    /// Above this page count, use the batched indexer.
    pub batched_min_pages: usize,
    /// Pages per batch.
    pub batch_size: usize,
    /// Pages between reclaim passes.
    pub reclaim_every: usize,
    /// Shortest token (in characters) the batched indexer keeps.
    pub min_word_len: usize,
    /// Smallest per-page count the batched indexer keeps.
    pub min_count: usize,
}

impl Default for IndexThresholds {
    fn default() -> Self {
        Self {
            batched_min_pages: 1000,
            batch_size: 100,
            reclaim_every: 1000,
            min_word_len: 4,
            min_count: 1,
        }
    }
}

/// Pick the indexing strategy for a book of `page_count` pages.
///
/// Small books get full position lists. Past `batched_min_pages`, position lists
/// cost more memory than they are worth, so the batched counting build is used.
pub fn select_strategy(
    page_count: usize,
    thresholds: &IndexThresholds,
) -> Box<dyn IndexingStrategy> {
    if page_count > thresholds.batched_min_pages {
        Box::new(BatchedIndexer::new(thresholds.clone()))
    } else {
        Box::new(EagerIndexer)
    }
}
