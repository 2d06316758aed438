//! In-memory search and theme analysis for a single book.
//!
//! A book is a list of analyzed pages plus chapter ranges. This crate answers
//! reader queries over it (words, phrases, chapters, `3:16` verse references)
//! and scores how strongly any text leans toward each theme of a keyword
//! taxonomy.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │   book.rs   │────▶│  index/      │────▶│  search/     │
//! │ (load JSON, │     │ (BookIndex,  │     │ (SearchEngine│
//! │  chapters)  │     │  strategies) │     │  excerpts)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────┐     ┌──────────────┐
//! │  scoring/   │────▶│  report.rs   │
//! │ (ThemeScorer│     │ (BookReport) │
//! │  taxonomy)  │     │              │
//! └─────────────┘     └──────────────┘
//! ```
//!
//! The index is built lazily on the first query and at most once per engine.
//! Books over a thousand pages switch to a batched, count-only index that skips
//! stop words; see [`index`].
//!
//! # Usage
//!
//! ```ignore
//! use lectern::{Book, ReaderConfig, SearchType, ThemeScorer};
//!
//! let book = Book::load("analysis.json")?;
//! let engine = book.search_engine(&ReaderConfig::default());
//! let hits = engine.advanced_search("luz", SearchType::All, 10);
//!
//! let scorer = ThemeScorer::extended()?;
//! let scores = scorer.score(&book.full_text());
//! ```

pub mod book;
pub mod chapters;
pub mod config;
pub mod error;
pub mod index;
pub mod report;
pub mod scoring;
pub mod search;
pub mod session;
pub mod types;
pub mod utils;

pub use book::{Book, BookMetadata};
pub use chapters::detect_chapters;
pub use config::{ExcerptConfig, Highlight, ReaderConfig};
pub use error::{LecternError, Result};
pub use index::{
    select_strategy, BatchedIndexer, BookIndex, EagerIndexer, IndexThresholds, IndexingStrategy,
};
pub use report::{BookReport, PageReport};
pub use scoring::{ThemeBreakdown, ThemeScorer, ThemeSpec, ThemeTaxonomy};
pub use search::{parse_verse_ref, SearchEngine};
pub use session::ReaderSession;
pub use types::{
    Chapter, ChapterNumber, ChapterRef, Entity, SearchResult, SearchType, Segment, SegmentAnalysis,
};
