// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Searching a book: words, phrases, chapters and `chapter:verse` references.
//!
//! The [`SearchEngine`] owns its pages and chapters and builds its [`BookIndex`]
//! lazily, on the first query. Rendering a page never pays for indexing; the
//! first search does, once. Every later query reuses the same index.
//!
//! # Query semantics
//!
//! | Method            | Finds                                                        |
//! |-------------------|--------------------------------------------------------------|
//! | `search_word`     | exact term, or every indexed term containing the query       |
//! | `search_phrase`   | exact indexed sentence, else first-word candidates + scan    |
//! | `search_chapter`  | chapter by number *and* chapters whose title contains the ref |
//! | `search_verse`    | `C:V` / `C.V` → pages of chapter C containing token V         |
//! | `advanced_search` | the above in order word → phrase → chapter → verse, capped   |
//!
//! No query returns an error. Nothing found is an empty `Vec`.

pub mod excerpt;

pub use excerpt::{excerpt, highlight_term};

use crate::config::{ExcerptConfig, Highlight, ReaderConfig};
use crate::index::{select_strategy, BookIndex, IndexingStrategy};
use crate::types::{Chapter, ChapterNumber, ChapterRef, SearchResult, SearchType, Segment};
use crate::utils::tokenize;
use regex::Regex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{LazyLock, OnceLock};
use std::time::Instant;
use tracing::debug;

/// `chapter[:.]verse` anywhere in the input.
static VERSE_REF_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)[:.](\d+)").expect("verse pattern is a valid regex"));

/// Phrase queries need at least this many words to fall back to a first-word scan.
const PHRASE_FALLBACK_MIN_WORDS: usize = 4;

/// Lazily indexed search over one book.
pub struct SearchEngine {
    segments: Vec<Segment>,
    chapters: Vec<Chapter>,
    strategy: Box<dyn IndexingStrategy>,
    excerpts: ExcerptConfig,
    highlight: Highlight,
    max_results: usize,
    index: OnceLock<BookIndex>,
    builds: AtomicUsize,
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("pages", &self.segments.len())
            .field("chapters", &self.chapters.len())
            .field("strategy", &self.strategy.name())
            .field("index_loaded", &self.index_loaded())
            .finish()
    }
}

impl SearchEngine {
    /// Engine with the default config; the strategy is picked from the page count.
    pub fn new(segments: Vec<Segment>, chapters: Vec<Chapter>) -> Self {
        Self::with_config(segments, chapters, &ReaderConfig::default())
    }

    pub fn with_config(segments: Vec<Segment>, chapters: Vec<Chapter>, config: &ReaderConfig) -> Self {
        let strategy = select_strategy(segments.len(), &config.thresholds);
        Self::with_strategy(segments, chapters, strategy, config)
    }

    /// Engine with an explicitly chosen indexing strategy.
    pub fn with_strategy(
        segments: Vec<Segment>,
        chapters: Vec<Chapter>,
        strategy: Box<dyn IndexingStrategy>,
        config: &ReaderConfig,
    ) -> Self {
        SearchEngine {
            segments,
            chapters,
            strategy,
            excerpts: config.excerpt.clone(),
            highlight: config.highlight.clone(),
            max_results: config.max_results,
            index: OnceLock::new(),
            builds: AtomicUsize::new(0),
        }
    }

    // ========================================================================
    // Index lifecycle
    // ========================================================================

    /// Has the first query built the index yet?
    pub fn index_loaded(&self) -> bool {
        self.index.get().is_some()
    }

    /// How many times the index has been built. Never more than 1.
    pub fn index_build_count(&self) -> usize {
        self.builds.load(Ordering::Acquire)
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    /// The index, building it on first use.
    pub fn index(&self) -> &BookIndex {
        self.index.get_or_init(|| {
            let started = Instant::now();
            let index = self.strategy.build(&self.segments, &self.chapters);
            self.builds.fetch_add(1, Ordering::AcqRel);
            debug!(
                strategy = self.strategy.name(),
                pages = index.page_count(),
                terms = index.term_count(),
                phrases = index.phrase_count(),
                chapters = index.chapters().len(),
                elapsed_ms = started.elapsed().as_millis() as u64,
                "built search index"
            );
            index
        })
    }

    pub fn page_count(&self) -> usize {
        self.segments.len()
    }

    /// Original text of a 1-indexed page.
    pub fn page_text(&self, page: usize) -> Option<&str> {
        page.checked_sub(1)
            .and_then(|i| self.segments.get(i))
            .map(|s| s.text.as_str())
    }

    fn excerpt_for(&self, page: usize, term: &str, context_words: usize) -> String {
        excerpt(
            self.page_text(page).unwrap_or_default(),
            term,
            context_words,
            self.excerpts.fallback_chars,
            &self.highlight,
        )
    }

    // ========================================================================
    // Word search
    // ========================================================================

    /// Find pages containing `word`.
    ///
    /// `exact_match` looks the lowercased word up directly. Otherwise every
    /// indexed term containing the word is a hit and carries `matched_term`.
    /// Results are sorted by descending count; ties keep page order (and, in
    /// substring mode, alphabetical term order).
    pub fn search_word(&self, word: &str, exact_match: bool) -> Vec<SearchResult> {
        let query = word.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let index = self.index();
        let context = self.excerpts.word_context;

        let mut results: Vec<SearchResult> = if exact_match {
            index
                .word(&query)
                .unwrap_or_default()
                .iter()
                .map(|posting| SearchResult::Word {
                    page: posting.page,
                    count: posting.count(),
                    excerpt: self.excerpt_for(posting.page, &query, context),
                    matched_term: None,
                })
                .collect()
        } else {
            let mut matched: Vec<_> = index
                .terms()
                .filter(|(term, _)| term.contains(query.as_str()))
                .collect();
            matched.sort_unstable_by(|a, b| a.0.cmp(b.0));

            matched
                .into_iter()
                .flat_map(|(term, postings)| {
                    postings.iter().map(move |posting| (term, posting))
                })
                .map(|(term, posting)| SearchResult::Word {
                    page: posting.page,
                    count: posting.count(),
                    excerpt: self.excerpt_for(posting.page, &query, context),
                    matched_term: Some(term.to_string()),
                })
                .collect()
        };

        results.sort_by(|a, b| result_count(b).cmp(&result_count(a)));
        results
    }

    // ========================================================================
    // Phrase search
    // ========================================================================

    /// Find pages containing `phrase`.
    ///
    /// An exact indexed sentence wins. Failing that, a query of more than three
    /// words is checked against every page holding its first word, with a wider
    /// excerpt. Shorter queries with no exact hit find nothing.
    pub fn search_phrase(&self, phrase: &str) -> Vec<SearchResult> {
        let query = phrase.trim().to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let index = self.index();

        if let Some(pages) = index.phrase(&query) {
            return pages
                .iter()
                .map(|&page| SearchResult::Phrase {
                    page,
                    phrase: query.clone(),
                    excerpt: self.excerpt_for(page, &query, self.excerpts.phrase_context),
                    approximate: false,
                })
                .collect();
        }

        if query.split_whitespace().count() < PHRASE_FALLBACK_MIN_WORDS {
            return Vec::new();
        }

        // first token, so leading quotes or dashes don't hide the word
        let Some(first_word) = tokenize(&query).next() else {
            return Vec::new();
        };

        index
            .word(first_word)
            .unwrap_or_default()
            .iter()
            .filter(|posting| {
                index
                    .lowered_page(posting.page)
                    .is_some_and(|text| text.contains(query.as_str()))
            })
            .map(|posting| SearchResult::Phrase {
                page: posting.page,
                phrase: query.clone(),
                excerpt: self.excerpt_for(posting.page, &query, self.excerpts.fallback_context),
                approximate: true,
            })
            .collect()
    }

    // ========================================================================
    // Chapter search
    // ========================================================================

    /// Find chapters by number and by title.
    ///
    /// Both lookups run: a numeric ref (or all-digit text) matches the chapter
    /// with that number, and any text ref also matches every chapter whose title
    /// contains it, case-insensitively. `"3"` can therefore return chapter 3
    /// *and* "Os 3 Mosqueteiros", or chapter 3 twice if its title holds a "3".
    /// The ambiguity is returned as-is for the caller to resolve.
    pub fn search_chapter(&self, chapter_ref: impl Into<ChapterRef>) -> Vec<SearchResult> {
        let chapter_ref = chapter_ref.into();
        let index = self.index();
        let mut results = Vec::new();

        if let Some(number) = chapter_ref.as_number() {
            if let Some(entry) = index.chapter(&ChapterNumber::from(number)) {
                results.push(SearchResult::Chapter {
                    chapter: entry.number.clone(),
                    title: entry.title.clone(),
                    start_page: entry.start_page,
                    end_page: entry.end_page,
                });
            }
        }

        if let Some(text) = chapter_ref.as_title_query() {
            let needle = text.to_lowercase();
            results.extend(
                index
                    .chapters()
                    .iter()
                    .filter(|entry| entry.title.to_lowercase().contains(&needle))
                    .map(|entry| SearchResult::Chapter {
                        chapter: entry.number.clone(),
                        title: entry.title.clone(),
                        start_page: entry.start_page,
                        end_page: entry.end_page,
                    }),
            );
        }

        results
    }

    // ========================================================================
    // Verse search
    // ========================================================================

    /// Find `chapter:verse` (or `chapter.verse`) inside the chapter's pages.
    ///
    /// A page matches when the verse number appears as a standalone token
    /// (`16`, `16.`, `16:` but not `160`). One result per matching page.
    pub fn search_verse(&self, verse_ref: &str) -> Vec<SearchResult> {
        let Some((chapter, verse)) = parse_verse_ref(verse_ref) else {
            return Vec::new();
        };
        let index = self.index();
        let Some(entry) = index.chapter(&ChapterNumber::from(chapter)) else {
            return Vec::new();
        };

        let verse_token = verse.to_string();
        let last_page = entry.end_page.min(index.page_count());

        (entry.start_page.max(1)..=last_page)
            .filter(|&page| {
                index
                    .lowered_page(page)
                    .is_some_and(|text| tokenize(text).any(|token| token == verse_token))
            })
            .map(|page| SearchResult::Verse {
                chapter,
                verse,
                page,
                excerpt: self.excerpt_for(page, &verse_token, self.excerpts.verse_context),
            })
            .collect()
    }

    // ========================================================================
    // Combined search
    // ========================================================================

    /// Run the searches selected by `search_type`, concatenated in the order
    /// word → phrase → chapter → verse and truncated to `max_results`.
    ///
    /// Phrase search only runs for multi-word queries; verse search only when
    /// the query contains a `C:V` reference. The word pass uses substring mode.
    pub fn advanced_search(
        &self,
        query: &str,
        search_type: SearchType,
        max_results: usize,
    ) -> Vec<SearchResult> {
        let query = query.trim();
        if query.is_empty() || max_results == 0 {
            return Vec::new();
        }

        let mut results = Vec::new();

        if search_type.includes(SearchType::Word) {
            results.extend(self.search_word(query, false));
        }
        if search_type.includes(SearchType::Phrase) && query.split_whitespace().count() > 1 {
            results.extend(self.search_phrase(query));
        }
        if search_type.includes(SearchType::Chapter) {
            results.extend(self.search_chapter(query));
        }
        if search_type.includes(SearchType::Verse) && VERSE_REF_RE.is_match(query) {
            results.extend(self.search_verse(query));
        }

        results.truncate(max_results);
        results
    }

    /// [`advanced_search`](Self::advanced_search) capped at the configured `max_results`.
    pub fn advanced_search_default(&self, query: &str, search_type: SearchType) -> Vec<SearchResult> {
        self.advanced_search(query, search_type, self.max_results)
    }
}

fn result_count(result: &SearchResult) -> usize {
    match result {
        SearchResult::Word { count, .. } => *count,
        _ => 0,
    }
}

/// Pull `(chapter, verse)` out of the first `C:V` / `C.V` in `input`.
pub fn parse_verse_ref(input: &str) -> Option<(u32, u32)> {
    let caps = VERSE_REF_RE.captures(input)?;
    let chapter = caps.get(1)?.as_str().parse().ok()?;
    let verse = caps.get(2)?.as_str().parse().ok()?;
    Some((chapter, verse))
}
