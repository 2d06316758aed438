// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Excerpts: a few words of page text around a hit, with the hit emphasized.
//!
//! The window is located by counting whitespace-separated words in the text
//! before the first case-insensitive occurrence of the term. A match that
//! starts mid-word counts that word as "before", so the window opens at the
//! word holding the match.
//!
//! ```text
//! words:   w0 w1 w2 [term] w4 w5 w6 ... w9
//!               ^start                     ^end = before + term_words + 2*context
//! ```

use crate::config::Highlight;
use crate::utils::truncate_chars;
use regex::{Captures, RegexBuilder};

/// Cut an excerpt of `text` around the first occurrence of `term`.
///
/// - Term absent: the first `fallback_chars` characters, with `...` when cut.
/// - Term present: `context_words` words before the match, then the term and
///   `2 * context_words` words after it, every occurrence of `term` inside wrapped in
///   the highlight markers, with a trailing `...` when the window stops short of
///   the end of the page.
pub fn excerpt(
    text: &str,
    term: &str,
    context_words: usize,
    fallback_chars: usize,
    highlight: &Highlight,
) -> String {
    let lowered_text = text.to_lowercase();
    let lowered_term = term.trim().to_lowercase();

    let Some(pos) = (!lowered_term.is_empty())
        .then(|| lowered_text.find(&lowered_term))
        .flatten()
    else {
        return truncate_chars(text, fallback_chars);
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    let words_before = lowered_text[..pos].split_whitespace().count();
    let term_words = term.split_whitespace().count();

    let mid_word = lowered_text[..pos]
        .chars()
        .next_back()
        .is_some_and(|c| !c.is_whitespace());
    let match_word = if mid_word {
        words_before.saturating_sub(1)
    } else {
        words_before
    };

    let start = match_word.saturating_sub(context_words).min(words.len());
    let end = (words_before + term_words + 2 * context_words).min(words.len());

    let window = words[start..end].join(" ");
    let mut out = highlight_term(&window, term.trim(), highlight);
    if end < words.len() {
        out.push_str("...");
    }
    out
}

/// Wrap every case-insensitive occurrence of `term` in `text` with the markers,
/// keeping the original casing of each occurrence.
pub fn highlight_term(text: &str, term: &str, highlight: &Highlight) -> String {
    if term.is_empty() {
        return text.to_string();
    }

    match RegexBuilder::new(&regex::escape(term))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re
            .replace_all(text, |caps: &Captures<'_>| highlight.wrap(&caps[0]))
            .into_owned(),
        Err(_) => text.to_string(),
    }
}
