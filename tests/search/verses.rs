//! `chapter:verse` references.

use crate::common::{engine, gospel_engine, pages};
use lectern::{Book, BookMetadata, Chapter, ReaderConfig, SearchEngine, SearchResult};

#[test]
fn test_john_3_16() {
    let engine = gospel_engine();
    let results = engine.search_verse("3:16");
    assert_eq!(results.len(), 1);
    match &results[0] {
        SearchResult::Verse {
            chapter,
            verse,
            page,
            excerpt,
        } => {
            assert_eq!((*chapter, *verse, *page), (3, 16, 14));
            assert!(excerpt.contains("**16** Porque Deus"), "{}", excerpt);
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_dot_separator_and_surrounding_text() {
    let engine = gospel_engine();
    assert_eq!(engine.search_verse("João 3.16"), engine.search_verse("3:16"));
}

#[test]
fn test_verse_outside_chapter_range_is_ignored() {
    // "1" appears on page 12 (chapter 3) but chapter 1 covers pages 1-5 only
    let engine = gospel_engine();
    let pages_found: Vec<usize> = engine.search_verse("1:1").iter().map(SearchResult::page).collect();
    assert_eq!(pages_found, vec![1]);
}

#[test]
fn test_every_matching_page_is_reported() {
    let engine = SearchEngine::new(
        pages(&["2 início", "nada", "2 de novo"]),
        vec![Chapter::new(5u32, "Cinco", 1, 3)],
    );
    let found: Vec<usize> = engine.search_verse("5:2").iter().map(SearchResult::page).collect();
    assert_eq!(found, vec![1, 3]);
}

#[test]
fn test_no_chapters_no_verses() {
    assert!(engine(&["3 16"]).search_verse("3:16").is_empty());
}

#[test]
fn test_zero_length_chapter_has_no_verses() {
    let engine = SearchEngine::new(
        pages(&["1 um", "1 dois", "1 tres"]),
        vec![
            Chapter::new(1u32, "Começo", 1, 2),
            Chapter::new(2u32, "Intervalo", 3, 2),
        ],
    );
    assert!(engine.search_verse("2:1").is_empty());
    assert_eq!(engine.search_verse("1:1").len(), 2);
}

#[test]
fn test_shared_page_is_reported_for_each_overlapping_chapter() {
    let engine = SearchEngine::new(
        pages(&["7 a", "7 b", "nada", "7 d"]),
        vec![
            Chapter::new(1u32, "Um", 1, 3),
            Chapter::new(2u32, "Dois", 2, 4),
        ],
    );
    let found = |r: &str| -> Vec<usize> { engine.search_verse(r).iter().map(SearchResult::page).collect() };
    assert_eq!(found("1:7"), vec![1, 2]);
    assert_eq!(found("2:7"), vec![2, 4]);
}

#[test]
fn test_clamped_and_zero_length_chapters_through_book() {
    let book = Book::new(
        BookMetadata::default(),
        pages(&["3 a", "3 b", "3 c"]),
        Some(vec![
            Chapter::new(1u32, "Um", 1, 2),
            Chapter::new(2u32, "Dois", 2, 30),
            Chapter::new(3u32, "Vazio", 3, 2),
        ]),
    );
    let engine = book.into_search_engine(&ReaderConfig::default());
    let found = |r: &str| -> Vec<usize> { engine.search_verse(r).iter().map(SearchResult::page).collect() };

    assert_eq!(found("1:3"), vec![1, 2]);
    assert_eq!(found("2:3"), vec![2, 3]);
    assert!(found("3:3").is_empty());
}
