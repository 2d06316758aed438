//! Word search: exact and substring modes.

use crate::common::{engine, gospel_engine};
use lectern::SearchResult;

fn pages_and_counts(results: &[SearchResult]) -> Vec<(usize, usize)> {
    results
        .iter()
        .map(|r| match r {
            SearchResult::Word { page, count, .. } => (*page, *count),
            other => panic!("expected a word hit, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_word_found_on_every_page_it_appears() {
    let engine = gospel_engine();
    // heading plus two mentions in the body
    let results = engine.search_word("verbo", true);
    assert_eq!(pages_and_counts(&results), vec![(1, 3)]);
}

#[test]
fn test_case_and_whitespace_are_ignored() {
    let engine = gospel_engine();
    assert_eq!(
        engine.search_word("  DEUS ", true),
        engine.search_word("deus", true)
    );
}

#[test]
fn test_ties_keep_page_order() {
    let engine = engine(&["sol", "chuva", "sol", "sol sol"]);
    let results = engine.search_word("sol", true);
    assert_eq!(pages_and_counts(&results), vec![(4, 2), (1, 1), (3, 1)]);
}

#[test]
fn test_accented_words_are_single_terms() {
    let engine = engine(&["A coração e o coração", "corações"]);
    let exact = engine.search_word("coração", true);
    assert_eq!(pages_and_counts(&exact), vec![(1, 2)]);

    let substring = engine.search_word("cora", false);
    assert_eq!(substring.len(), 2);
}

#[test]
fn test_substring_mode_lists_each_matching_term() {
    let engine = engine(&["página e páginas", "paginação"]);
    let results = engine.search_word("págin", false);
    let terms: Vec<&str> = results
        .iter()
        .filter_map(|r| match r {
            SearchResult::Word { matched_term, .. } => matched_term.as_deref(),
            _ => None,
        })
        .collect();
    assert_eq!(terms, vec!["página", "páginas"]);
}

#[test]
fn test_excerpt_centers_on_the_word() {
    let engine = gospel_engine();
    let results = engine.search_word("nicodemos", true);
    let excerpt = results[0].excerpt().unwrap();
    assert!(excerpt.contains("**Nicodemos**"), "{}", excerpt);
}

#[test]
fn test_results_serialize_with_type_tag() {
    let engine = engine(&["o mar"]);
    let json = serde_json::to_value(engine.search_word("mar", true)).unwrap();
    assert_eq!(json[0]["type"], "word");
    assert_eq!(json[0]["page"], 1);
    assert_eq!(json[0]["count"], 1);
    assert!(json[0].get("matched_term").is_none());
}
