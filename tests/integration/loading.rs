//! Reading analysis documents and configs from disk.

use crate::common::{gospel, gospel_json, json_file};
use lectern::{Book, LecternError, ReaderConfig, SearchType};

#[test]
fn test_book_round_trips_through_a_file() {
    let file = json_file(&gospel_json());
    let loaded = Book::load(file.path()).unwrap();
    let original = gospel();

    assert_eq!(loaded.page_count(), original.page_count());
    assert_eq!(loaded.chapters, original.chapters);
    assert_eq!(loaded.title(), "Evangelho");
    assert_eq!(loaded.metadata.author.as_deref(), Some("João"));
}

#[test]
fn test_loaded_book_answers_queries() {
    let file = json_file(&gospel_json());
    let engine = Book::load(file.path())
        .unwrap()
        .into_search_engine(&ReaderConfig::default());
    let results = engine.advanced_search("3:16", SearchType::Verse, 10);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].page(), 14);
}

#[test]
fn test_minimal_document_with_integer_and_text_chapter_numbers() {
    let file = json_file(
        r#"{
            "segments": [{"text": "um"}, {"text": "dois"}, {"text": "três"}],
            "chapters": [
                {"number": 1, "title": "Abertura", "start_page": 1, "end_page": 1},
                {"number": "02", "title": "Meio", "start_page": 2, "end_page": 2},
                {"number": "Epílogo", "title": "Fim", "start_page": 3, "end_page": 3}
            ]
        }"#,
    );
    let book = Book::load(file.path()).unwrap();
    let numbers: Vec<&str> = book.chapters.iter().map(|c| c.number.as_str()).collect();
    assert_eq!(numbers, vec!["1", "2", "Epílogo"]);

    let engine = book.into_search_engine(&ReaderConfig::default());
    assert_eq!(engine.search_chapter(2u32).len(), 1);
}

#[test]
fn test_config_file_changes_highlight_and_widths() {
    let config_file = json_file(
        r#"{"highlight": {"open": "<b>", "close": "</b>"}, "excerpt": {"wordContext": 1}}"#,
    );
    let config = ReaderConfig::load(config_file.path()).unwrap();
    let engine = gospel().into_search_engine(&config);

    let results = engine.search_word("fariseu", true);
    assert_eq!(results[0].excerpt(), Some("um <b>fariseu</b> chamado Nicodemos."));
}

#[test]
fn test_invalid_config_is_rejected() {
    let config_file = json_file(r#"{"thresholds": {"batchSize": 0}}"#);
    let err = ReaderConfig::load(config_file.path()).unwrap_err();
    assert!(matches!(err, LecternError::InvalidConfig(_)));
}

#[test]
fn test_errors_name_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let err = Book::load(&path).unwrap_err();
    assert!(err.to_string().contains("missing.json"));
}
