//! Phrase search: indexed sentences first, first-word scan as fallback.

use crate::common::{engine, gospel_engine};
use lectern::SearchResult;

fn phrase_hits(results: &[SearchResult]) -> Vec<(usize, bool)> {
    results
        .iter()
        .map(|r| match r {
            SearchResult::Phrase {
                page, approximate, ..
            } => (*page, *approximate),
            other => panic!("expected a phrase hit, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_indexed_sentence_is_found_on_every_page() {
    let engine = engine(&[
        "Era uma vez um reino distante. Fim.",
        "Nada a ver.",
        "Ninguém sabia. Era uma vez um reino distante!",
    ]);
    let results = engine.search_phrase("Era uma vez um reino distante");
    assert_eq!(phrase_hits(&results), vec![(1, false), (3, false)]);
}

#[test]
fn test_fragment_inside_a_sentence_uses_fallback() {
    let engine = gospel_engine();
    let results = engine.search_phrase("Deus amou o mundo");
    assert_eq!(phrase_hits(&results), vec![(14, true)]);

    let excerpt = results[0].excerpt().unwrap();
    assert!(excerpt.contains("**Deus amou o mundo**"), "{}", excerpt);
}

#[test]
fn test_fallback_needs_the_whole_phrase_on_the_page() {
    let engine = engine(&[
        "deus criou a luz e viu que era boa",
        "deus amou o mundo inteiro",
    ]);
    let results = engine.search_phrase("deus amou o mundo");
    assert_eq!(phrase_hits(&results), vec![(2, true)]);
}

#[test]
fn test_short_fragment_finds_nothing() {
    let engine = gospel_engine();
    assert!(engine.search_phrase("amou o mundo").is_empty());
}

#[test]
fn test_phrase_field_is_the_normalized_query() {
    let engine = engine(&["A casa amarela fica ali."]);
    match &engine.search_phrase("  A CASA amarela fica ali ")[0] {
        SearchResult::Phrase { phrase, .. } => assert_eq!(phrase, "a casa amarela fica ali"),
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_fallback_ignores_leading_punctuation() {
    let engine = engine(&["Ele disse “Deus amou o mundo” e calou."]);
    let results = engine.search_phrase("“deus amou o mundo");
    assert_eq!(phrase_hits(&results), vec![(1, true)]);
}
