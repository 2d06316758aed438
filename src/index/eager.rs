//! Full position-list build.
//!
//! Every distinct token of every page gets a posting holding the character
//! offsets of all its occurrences in the lowercased page. This is the index
//! the position-aware guarantees are stated against: a word that appears on
//! page `p` always has a posting for `p`.

use super::{BookIndex, IndexingStrategy, WordHits, WordPosting};
use crate::types::{Chapter, Segment};
use crate::utils::{lowercase, tokens_with_offsets};
use std::collections::HashMap;

/// Builds position lists for every token. Right for books up to about a
/// thousand pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct EagerIndexer;

impl IndexingStrategy for EagerIndexer {
    fn name(&self) -> &'static str {
        "eager"
    }

    fn build(&self, segments: &[Segment], chapters: &[Chapter]) -> BookIndex {
        let mut index = BookIndex::with_capacity(segments.len());
        index.add_chapters(chapters);

        for (i, segment) in segments.iter().enumerate() {
            let page = i + 1;
            let lowered = lowercase(&segment.text);

            // First-seen order keeps posting insertion deterministic.
            let mut order: Vec<&str> = Vec::new();
            let mut positions: HashMap<&str, Vec<usize>> = HashMap::new();
            for (word, offset) in tokens_with_offsets(&lowered) {
                positions
                    .entry(word)
                    .or_insert_with(|| {
                        order.push(word);
                        Vec::new()
                    })
                    .push(offset);
            }

            for word in order {
                if let Some(offsets) = positions.remove(word) {
                    index.add_posting(
                        word,
                        WordPosting {
                            page,
                            hits: WordHits::Positions(offsets),
                        },
                    );
                }
            }

            index.add_phrases(page, &lowered);
            index.push_page(lowered);
        }

        index
    }
}
