//! Utility functions for string processing.
//!
//! Tokenization is deliberately plain: a token is a maximal run of Unicode word
//! characters (`\b\w+\b`), no stemming, no diacritic folding. Callers lowercase
//! first; nothing here lowercases for them except [`lowercase`].

use regex::Regex;
use std::sync::LazyLock;

/// Shortest sentence-like phrase that gets indexed (in characters, after trimming).
pub const MIN_PHRASE_CHARS: usize = 15;

/// Longest sentence-like phrase that gets indexed (in characters, after trimming).
pub const MAX_PHRASE_CHARS: usize = 200;

const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?'];

static WORD_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"));

/// Lowercase for indexing and matching.
pub fn lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// Iterate the word tokens of `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    WORD_RE.find_iter(text).map(|m| m.as_str())
}

/// Number of word tokens in `text`.
pub fn count_words(text: &str) -> usize {
    WORD_RE.find_iter(text).count()
}

/// Word tokens with the *character* offset where each one starts.
///
/// Offsets count Unicode scalar values, not bytes, so "ação é" yields
/// `[("ação", 0), ("é", 5)]`.
pub fn tokens_with_offsets(text: &str) -> Vec<(&str, usize)> {
    let mut tokens = Vec::new();
    let mut byte_cursor = 0;
    let mut char_cursor = 0;

    for m in WORD_RE.find_iter(text) {
        char_cursor += text[byte_cursor..m.start()].chars().count();
        byte_cursor = m.start();
        tokens.push((m.as_str(), char_cursor));
    }

    tokens
}

/// Split text on sentence terminators (`.`, `!`, `?`) and keep the trimmed pieces
/// whose length falls in `[MIN_PHRASE_CHARS, MAX_PHRASE_CHARS]`.
pub fn split_phrases(text: &str) -> impl Iterator<Item = &str> {
    text.split(SENTENCE_TERMINATORS)
        .map(str::trim)
        .filter(|phrase| is_indexable_phrase(phrase))
}

/// Does this (already trimmed) phrase fall within the indexed length window?
pub fn is_indexable_phrase(phrase: &str) -> bool {
    let len = phrase.chars().count();
    (MIN_PHRASE_CHARS..=MAX_PHRASE_CHARS).contains(&len)
}

/// First `max_chars` characters of `text`, with `...` appended when cut.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_end, _)) => format!("{}...", &text[..byte_end]),
        None => text.to_string(),
    }
}
