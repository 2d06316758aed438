//! Stop words skipped by the batched indexer.
//!
//! Loaded once from `data/stop_words.json`, a `{ "lang": ["word", ...] }` map.
//! All languages are flattened into one set: a Portuguese book quoting English
//! still loses "the" and "of".

use std::collections::{BTreeMap, HashSet};
use std::sync::LazyLock;

static STOP_WORDS: LazyLock<HashSet<String>> =
    LazyLock::new(|| parse_stop_words_json(include_str!("../../data/stop_words.json")));

fn parse_stop_words_json(json_str: &str) -> HashSet<String> {
    let by_language: BTreeMap<String, Vec<String>> = match serde_json::from_str(json_str) {
        Ok(lists) => lists,
        Err(err) => {
            tracing::warn!(error = %err, "bundled stop word list is unreadable; no stop words applied");
            return HashSet::new();
        }
    };

    by_language
        .into_values()
        .flatten()
        .map(|word| word.to_lowercase())
        .filter(|word| !word.is_empty())
        .collect()
}

/// Is `word` (lowercase) a stop word?
#[inline]
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}
