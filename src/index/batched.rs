//! Count-only build for large books.
//!
//! Position lists are what make the eager index big: a 3000-page book holds
//! millions of offsets that no query reads (excerpts re-scan the page text).
//! This build keeps one count per (term, page) instead, drops stop words and
//! short tokens, and walks the pages in fixed-size batches, releasing slack
//! capacity every `reclaim_every` pages to keep the peak down.
//!
//! Consequence for queries: terms shorter than `min_word_len` or on the stop
//! list are simply absent, so an exact lookup of "de" finds nothing here.

use super::stop_words::is_stop_word;
use super::{BookIndex, IndexThresholds, IndexingStrategy, WordHits, WordPosting};
use crate::types::{Chapter, Segment};
use crate::utils::{lowercase, tokenize};
use std::collections::HashMap;
use tracing::{debug, trace};

/// Batched, count-only indexer.
#[derive(Debug, Clone, Default)]
pub struct BatchedIndexer {
    thresholds: IndexThresholds,
}

impl BatchedIndexer {
    pub fn new(thresholds: IndexThresholds) -> Self {
        Self { thresholds }
    }

    pub fn thresholds(&self) -> &IndexThresholds {
        &self.thresholds
    }

    fn keeps(&self, token: &str) -> bool {
        token.chars().count() >= self.thresholds.min_word_len && !is_stop_word(token)
    }
}

impl IndexingStrategy for BatchedIndexer {
    fn name(&self) -> &'static str {
        "batched"
    }

    fn build(&self, segments: &[Segment], chapters: &[Chapter]) -> BookIndex {
        let batch_size = self.thresholds.batch_size.max(1);
        let reclaim_every = self.thresholds.reclaim_every.max(1);
        let min_count = self.thresholds.min_count.max(1);

        let mut index = BookIndex::with_capacity(segments.len());
        index.add_chapters(chapters);

        for (batch_no, batch) in segments.chunks(batch_size).enumerate() {
            for (offset, segment) in batch.iter().enumerate() {
                let page = batch_no * batch_size + offset + 1;
                let lowered = lowercase(&segment.text);

                let mut order: Vec<&str> = Vec::new();
                let mut counts: HashMap<&str, usize> = HashMap::new();
                for token in tokenize(&lowered).filter(|t| self.keeps(t)) {
                    *counts.entry(token).or_insert_with(|| {
                        order.push(token);
                        0
                    }) += 1;
                }

                for word in order {
                    let count = counts.get(word).copied().unwrap_or(0);
                    if count >= min_count {
                        index.add_posting(
                            word,
                            WordPosting {
                                page,
                                hits: WordHits::Count(count),
                            },
                        );
                    }
                }

                index.add_phrases(page, &lowered);
                index.push_page(lowered);

                if page % reclaim_every == 0 {
                    index.reclaim();
                    debug!(page, terms = index.term_count(), "reclaimed index slack");
                }
            }
            trace!(batch = batch_no, pages = batch.len(), "indexed batch");
        }

        index.reclaim();
        index
    }
}
