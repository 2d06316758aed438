//! Books past the batched threshold.

use lectern::{IndexThresholds, ReaderConfig, SearchEngine, SearchResult, SearchType, Segment};

fn long_book(pages: usize) -> Vec<Segment> {
    (1..=pages)
        .map(|n| {
            if n % 250 == 0 {
                Segment::from_text("A montanha de pedra e a montanha de gelo. Fim.")
            } else {
                Segment::from_text("O rio corre para o mar de manhã.")
            }
        })
        .collect()
}

#[test]
fn test_large_book_uses_batched_index() {
    let engine = SearchEngine::new(long_book(1001), Vec::new());
    assert_eq!(engine.strategy_name(), "batched");

    let results = engine.search_word("montanha", true);
    let hits: Vec<(usize, usize)> = results
        .iter()
        .map(|r| match r {
            SearchResult::Word { page, count, .. } => (*page, *count),
            _ => unreachable!(),
        })
        .collect();
    assert_eq!(hits, vec![(250, 2), (500, 2), (750, 2), (1000, 2)]);
}

#[test]
fn test_batched_index_skips_stop_words_and_short_tokens() {
    let engine = SearchEngine::new(long_book(1001), Vec::new());
    assert!(engine.search_word("de", true).is_empty());
    assert!(engine.search_word("rio", true).is_empty());
    assert_eq!(engine.search_word("corre", true).len(), 997);
}

#[test]
fn test_threshold_is_configurable() {
    let config = ReaderConfig {
        thresholds: IndexThresholds {
            batched_min_pages: 2,
            ..IndexThresholds::default()
        },
        ..ReaderConfig::default()
    };
    let pages = vec![Segment::from_text("um"), Segment::from_text("dois"), Segment::from_text("três")];
    let engine = SearchEngine::with_config(pages, Vec::new(), &config);
    assert_eq!(engine.strategy_name(), "batched");
}

#[test]
fn test_phrases_still_work_on_large_books() {
    let engine = SearchEngine::new(long_book(1001), Vec::new());
    let results = engine.advanced_search("a montanha de pedra e a montanha de gelo", SearchType::Phrase, 10);
    assert_eq!(results.len(), 4);
}
