//! Chapter lookup by number and by title.

use crate::common::{gospel, gospel_engine, pages};
use lectern::{Book, BookMetadata, Chapter, ChapterRef, ReaderConfig, SearchResult};

fn chapter_titles(results: &[SearchResult]) -> Vec<&str> {
    results
        .iter()
        .map(|r| match r {
            SearchResult::Chapter { title, .. } => title.as_str(),
            other => panic!("expected a chapter hit, got {:?}", other),
        })
        .collect()
}

#[test]
fn test_lookup_by_number() {
    let engine = gospel_engine();
    let results = engine.search_chapter(2u32);
    assert_eq!(chapter_titles(&results), vec!["As Bodas"]);
    assert!(matches!(
        results[0],
        SearchResult::Chapter {
            start_page: 6,
            end_page: 11,
            ..
        }
    ));
}

#[test]
fn test_lookup_by_title_substring() {
    let engine = gospel_engine();
    assert_eq!(chapter_titles(&engine.search_chapter("BODAS")), vec!["As Bodas"]);
    assert_eq!(
        chapter_titles(&engine.search_chapter(ChapterRef::from("o"))),
        vec!["O Verbo", "As Bodas", "Nicodemos"]
    );
}

#[test]
fn test_numeric_text_runs_both_lookups() {
    let book = Book::new(
        BookMetadata::default(),
        pages(&["a", "b", "c"]),
        Some(vec![
            Chapter::new(1u32, "Prólogo", 1, 1),
            Chapter::new(2u32, "Os 1001 Dias", 2, 2),
            Chapter::new(3u32, "Epílogo", 3, 3),
        ]),
    );
    let engine = book.into_search_engine(&ReaderConfig::default());

    let numeric = engine.search_chapter(1u32);
    assert_eq!(chapter_titles(&numeric), vec!["Prólogo"]);

    let text = engine.search_chapter("1");
    assert_eq!(chapter_titles(&text), vec!["Prólogo", "Os 1001 Dias"]);
}

#[test]
fn test_detected_chapters_match_declared_ones() {
    let declared = gospel();
    let detected = Book::new(declared.metadata.clone(), declared.segments.clone(), None);

    let ranges = |book: &Book| -> Vec<(String, String, usize, usize)> {
        book.chapters
            .iter()
            .map(|c| (c.number.to_string(), c.title.clone(), c.start_page, c.end_page))
            .collect()
    };
    assert_eq!(ranges(&detected), ranges(&declared));
}

#[test]
fn test_unknown_chapter() {
    let engine = gospel_engine();
    assert!(engine.search_chapter(42u32).is_empty());
    assert!(engine.search_chapter("Apocalipse").is_empty());
}

#[test]
fn test_zero_length_chapter_keeps_its_bounds() {
    let engine = lectern::SearchEngine::new(
        pages(&["um", "dois", "tres", "quatro"]),
        vec![
            Chapter::new(1u32, "Começo", 1, 2),
            Chapter::new(2u32, "Intervalo", 3, 2),
            Chapter::new(3u32, "Resto", 3, 4),
        ],
    );
    let results = engine.search_chapter(2u32);
    assert_eq!(chapter_titles(&results), vec!["Intervalo"]);
    assert!(matches!(
        results[0],
        SearchResult::Chapter {
            start_page: 3,
            end_page: 2,
            ..
        }
    ));
}

#[test]
fn test_overlapping_and_zero_length_chapters_through_book() {
    let book = Book::new(
        BookMetadata::default(),
        pages(&["um", "dois", "tres", "quatro"]),
        Some(vec![
            Chapter::new(1u32, "Começo", 1, 3),
            Chapter::new(2u32, "Meio", 2, 9),
            Chapter::new(3u32, "Vazio", 4, 3),
        ]),
    );
    let engine = book.into_search_engine(&ReaderConfig::default());

    let bounds = |n: u32| match engine.search_chapter(n).first() {
        Some(SearchResult::Chapter {
            start_page,
            end_page,
            ..
        }) => (*start_page, *end_page),
        other => panic!("expected chapter {}, got {:?}", n, other),
    };
    assert_eq!(bounds(1), (1, 3));
    assert_eq!(bounds(2), (2, 4));
    assert_eq!(bounds(3), (4, 3));
}
