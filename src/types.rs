// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a book and of a search answer.
//!
//! A book is an ordered list of [`Segment`]s (pages) plus [`Chapter`] ranges over
//! them. Pages are 1-indexed everywhere: page `n` is `segments[n - 1]`. Nothing in
//! the core mutates a segment after loading.
//!
//! # Invariants
//!
//! - **Page numbers**: `1 <= page <= segments.len()` for every page a result carries.
//! - **Chapter ranges**: `start_page >= 1` and `end_page <= segments.len()`. A range
//!   with `end_page < start_page` is legal (two headings detected on one page) and
//!   simply covers no pages.
//! - **ChapterNumber**: numeric chapter numbers are stored in canonical form
//!   (`"03"` and `3` both become `"3"`), so lookups by number are exact.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

// =============================================================================
// SEGMENTS
// =============================================================================

/// A named entity as `(text, label)`, serialized as a two-element array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity(pub String, pub String);

impl Entity {
    pub fn text(&self) -> &str {
        &self.0
    }

    pub fn label(&self) -> &str {
        &self.1
    }
}

/// Precomputed per-page analysis produced upstream.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentAnalysis {
    pub keywords: Vec<String>,
    pub entities: Vec<Entity>,
    pub readability_score: f64,
}

/// One page of the book with its precomputed metrics.
///
/// Every field defaults, so a page with no `text` still loads and simply
/// tokenizes to nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Segment {
    pub text: String,
    /// 0-100, higher is harder.
    pub difficulty: f64,
    /// Precomputed theme name -> score (0-100).
    pub themes: BTreeMap<String, f64>,
    pub analysis: SegmentAnalysis,
    /// Opaque metrics carried through for the renderer.
    pub complexity_metrics: BTreeMap<String, serde_json::Value>,
}

impl Segment {
    /// A page with only text, everything else defaulted.
    pub fn from_text(text: impl Into<String>) -> Self {
        Segment {
            text: text.into(),
            ..Segment::default()
        }
    }

    /// The highest precomputed theme, ties broken by name.
    pub fn top_theme(&self) -> Option<(&str, f64)> {
        self.themes
            .iter()
            .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(name, score)| (name.as_str(), *score))
    }
}

// =============================================================================
// CHAPTERS
// =============================================================================

/// Chapter number as written in the source: `3`, `"3"`, `"III"`, `"Prólogo"`.
///
/// Numeric values are canonicalized so that `"03"` and `3` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawChapterNumber", into = "String")]
pub struct ChapterNumber(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawChapterNumber {
    Int(u64),
    Text(String),
}

impl From<RawChapterNumber> for ChapterNumber {
    fn from(raw: RawChapterNumber) -> Self {
        match raw {
            RawChapterNumber::Int(n) => ChapterNumber(n.to_string()),
            RawChapterNumber::Text(s) => ChapterNumber::new(&s),
        }
    }
}

impl From<ChapterNumber> for String {
    fn from(number: ChapterNumber) -> Self {
        number.0
    }
}

impl From<u32> for ChapterNumber {
    fn from(n: u32) -> Self {
        ChapterNumber(n.to_string())
    }
}

impl ChapterNumber {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim();
        match trimmed.parse::<u64>() {
            Ok(n) => ChapterNumber(n.to_string()),
            Err(_) => ChapterNumber(trimmed.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The numeric value, if this chapter number is numeric.
    pub fn as_u32(&self) -> Option<u32> {
        self.0.parse().ok()
    }
}

impl fmt::Display for ChapterNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A chapter: a titled, inclusive page range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub number: ChapterNumber,
    pub title: String,
    pub start_page: usize,
    pub end_page: usize,
    /// Constituent page numbers. Derived from the range when absent.
    #[serde(default)]
    pub segments: Vec<usize>,
}

impl Chapter {
    pub fn new(
        number: impl Into<ChapterNumber>,
        title: impl Into<String>,
        start_page: usize,
        end_page: usize,
    ) -> Self {
        Chapter {
            number: number.into(),
            title: title.into(),
            start_page,
            end_page,
            segments: (start_page..=end_page).collect(),
        }
    }

    /// Pages covered by this chapter. Empty when `end_page < start_page`.
    pub fn pages(&self) -> RangeInclusive<usize> {
        self.start_page..=self.end_page
    }

    pub fn is_empty(&self) -> bool {
        self.end_page < self.start_page
    }
}

/// A reference to a chapter, as typed by a reader.
///
/// A `Text` ref that is all ASCII digits is looked up *both* by number and by
/// title substring; see [`crate::SearchEngine::search_chapter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChapterRef {
    Number(u32),
    Text(String),
}

impl ChapterRef {
    /// Numeric interpretation: a `Number`, or a `Text` made only of ASCII digits.
    pub fn as_number(&self) -> Option<u32> {
        match self {
            ChapterRef::Number(n) => Some(*n),
            ChapterRef::Text(s) if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) => {
                s.parse().ok()
            }
            ChapterRef::Text(_) => None,
        }
    }

    /// Title interpretation: only `Text` refs match titles.
    pub fn as_title_query(&self) -> Option<&str> {
        match self {
            ChapterRef::Text(s) => Some(s.as_str()),
            ChapterRef::Number(_) => None,
        }
    }
}

impl From<u32> for ChapterRef {
    fn from(n: u32) -> Self {
        ChapterRef::Number(n)
    }
}

impl From<&str> for ChapterRef {
    fn from(s: &str) -> Self {
        ChapterRef::Text(s.to_string())
    }
}

impl From<String> for ChapterRef {
    fn from(s: String) -> Self {
        ChapterRef::Text(s)
    }
}

// =============================================================================
// SEARCH RESULTS
// =============================================================================

/// One search hit.
///
/// Serializes as a flat JSON object with a `"type"` discriminator
/// (`"word" | "phrase" | "chapter" | "verse"`). Excerpts carry inline highlight
/// markers (see [`crate::config::Highlight`]).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchResult {
    Word {
        page: usize,
        count: usize,
        excerpt: String,
        /// The indexed term that contained the query (substring mode only).
        #[serde(default, skip_serializing_if = "Option::is_none")]
        matched_term: Option<String>,
    },
    Phrase {
        page: usize,
        phrase: String,
        excerpt: String,
        /// True when found by the first-word fallback rather than the phrase index.
        approximate: bool,
    },
    Chapter {
        chapter: ChapterNumber,
        title: String,
        start_page: usize,
        end_page: usize,
    },
    Verse {
        chapter: u32,
        verse: u32,
        page: usize,
        excerpt: String,
    },
}

impl SearchResult {
    /// The page a reader should jump to.
    pub fn page(&self) -> usize {
        match self {
            SearchResult::Word { page, .. }
            | SearchResult::Phrase { page, .. }
            | SearchResult::Verse { page, .. } => *page,
            SearchResult::Chapter { start_page, .. } => *start_page,
        }
    }

    pub fn kind(&self) -> SearchType {
        match self {
            SearchResult::Word { .. } => SearchType::Word,
            SearchResult::Phrase { .. } => SearchType::Phrase,
            SearchResult::Chapter { .. } => SearchType::Chapter,
            SearchResult::Verse { .. } => SearchType::Verse,
        }
    }

    pub fn excerpt(&self) -> Option<&str> {
        match self {
            SearchResult::Word { excerpt, .. }
            | SearchResult::Phrase { excerpt, .. }
            | SearchResult::Verse { excerpt, .. } => Some(excerpt),
            SearchResult::Chapter { .. } => None,
        }
    }
}

/// Which searches `advanced_search` runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    #[default]
    All,
    Word,
    Phrase,
    Chapter,
    Verse,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::All => "all",
            SearchType::Word => "word",
            SearchType::Phrase => "phrase",
            SearchType::Chapter => "chapter",
            SearchType::Verse => "verse",
        }
    }

    /// Does this selection include searches of `kind`?
    pub fn includes(self, kind: SearchType) -> bool {
        self == SearchType::All || self == kind
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(SearchType::All),
            "word" => Ok(SearchType::Word),
            "phrase" => Ok(SearchType::Phrase),
            "chapter" => Ok(SearchType::Chapter),
            "verse" => Ok(SearchType::Verse),
            other => Err(format!(
                "unknown search type '{}' (expected all, word, phrase, chapter or verse)",
                other
            )),
        }
    }
}
