//! Combined search.

use crate::common::gospel_engine;
use lectern::{ReaderConfig, SearchResult, SearchType};

fn kinds(results: &[SearchResult]) -> Vec<SearchType> {
    results.iter().map(SearchResult::kind).collect()
}

#[test]
fn test_word_hits_come_before_chapter_hits() {
    let engine = gospel_engine();
    let results = engine.advanced_search("nicodemos", SearchType::All, 50);
    assert_eq!(kinds(&results), vec![SearchType::Word, SearchType::Chapter]);
}

#[test]
fn test_verse_reference_in_all_mode() {
    let engine = gospel_engine();
    let results = engine.advanced_search("3:16", SearchType::All, 50);
    // the word pass sees "3:16" as one query string and finds no such term
    assert_eq!(kinds(&results), vec![SearchType::Verse]);
    assert_eq!(results[0].page(), 14);
}

#[test]
fn test_type_filter() {
    let engine = gospel_engine();
    let words_only = engine.advanced_search("nicodemos", SearchType::Word, 50);
    assert_eq!(kinds(&words_only), vec![SearchType::Word]);

    let chapters_only = engine.advanced_search("nicodemos", SearchType::Chapter, 50);
    assert_eq!(kinds(&chapters_only), vec![SearchType::Chapter]);
}

#[test]
fn test_cap_applies_to_the_concatenation() {
    let engine = gospel_engine();
    let all = engine.advanced_search("página", SearchType::All, 50);
    assert!(all.len() > 5);
    let capped = engine.advanced_search("página", SearchType::All, 5);
    assert_eq!(capped, all[..5].to_vec());
}

#[test]
fn test_default_cap_comes_from_config() {
    let config = ReaderConfig {
        max_results: 3,
        ..ReaderConfig::default()
    };
    let engine = crate::common::gospel().into_search_engine(&config);
    assert_eq!(engine.advanced_search_default("página", SearchType::All).len(), 3);
}

#[test]
fn test_blank_query() {
    let engine = gospel_engine();
    assert!(engine.advanced_search("   ", SearchType::All, 50).is_empty());
    assert!(!engine.index_loaded());
}
