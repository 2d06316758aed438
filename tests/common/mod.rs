//! Shared test fixtures.

#![allow(dead_code)]

use lectern::{Book, BookMetadata, Chapter, ReaderConfig, SearchEngine, Segment};
use std::io::Write;
use tempfile::NamedTempFile;

// ============================================================================
// PAGES
// ============================================================================

pub fn page(text: &str) -> Segment {
    Segment::from_text(text)
}

pub fn pages(texts: &[&str]) -> Vec<Segment> {
    texts.iter().map(|t| page(t)).collect()
}

/// Engine over bare pages, no chapters.
pub fn engine(texts: &[&str]) -> SearchEngine {
    SearchEngine::new(pages(texts), Vec::new())
}

// ============================================================================
// BOOK FIXTURE
// ============================================================================

/// A 20-page book in three chapters. Chapter 3 covers pages 12-20 and
/// verse 16 of it sits on page 14.
pub fn gospel() -> Book {
    let mut texts: Vec<String> = vec!["Mais uma página do livro, texto corrido sem nada notável.".to_string(); 20];

    texts[0] = "Capítulo 1 - O Verbo\n\nNo princípio era o Verbo, e o Verbo estava com Deus.".into();
    texts[5] = "Capítulo 2 - As Bodas\n\nHouve um casamento em Caná da Galileia.".into();
    texts[11] = "Capítulo 3 - Nicodemos\n\n1 Havia um fariseu chamado Nicodemos.".into();
    texts[13] =
        "15 Para que todo aquele que nele crê tenha a vida eterna. 16 Porque Deus amou o mundo de tal maneira. 17 Fim."
            .into();

    let chapters = vec![
        Chapter::new(1u32, "O Verbo", 1, 5),
        Chapter::new(2u32, "As Bodas", 6, 11),
        Chapter::new(3u32, "Nicodemos", 12, 20),
    ];

    Book::new(
        BookMetadata {
            title: Some("Evangelho".into()),
            author: Some("João".into()),
            ..BookMetadata::default()
        },
        texts.into_iter().map(Segment::from_text).collect(),
        Some(chapters),
    )
}

pub fn gospel_engine() -> SearchEngine {
    gospel().into_search_engine(&ReaderConfig::default())
}

// ============================================================================
// FILES
// ============================================================================

/// Write `json` to a temporary file that lives as long as the handle.
pub fn json_file(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(json.as_bytes()).expect("write temp file");
    file
}

/// The gospel fixture as an analysis document (chapters included).
pub fn gospel_json() -> String {
    let book = gospel();
    serde_json::to_string(&serde_json::json!({
        "metadata": book.metadata,
        "pages": book.segments,
        "chapters": book.chapters,
    }))
    .expect("fixture serializes")
}
