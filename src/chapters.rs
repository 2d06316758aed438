// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Chapter detection for books that arrive without a chapter list.
//!
//! Pages are scanned paragraph by paragraph for headings such as
//! `Capítulo 3 - O Mar`, `CHAPTER IV: Ashes`, `Cap. 12` or a bare `VII`.
//! Each heading opens a chapter at its page and closes the previous one on the
//! page before.
//!
//! ```text
//! page:      1     2     3     4     5
//! heading:   I           II,III      IV
//! chapter:   [1..2]      [3..2] [3..4] [5..5]
//! ```
//!
//! Two headings on one page produce a range with `end_page < start_page`. That
//! range is kept as is: it records that the chapter exists even though it
//! owns no page of its own.

use crate::types::{Chapter, Segment};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Paragraphs longer than this are body text, never headings.
pub const MAX_HEADING_CHARS: usize = 300;

const TOC_MARKERS: &[&str] = &["sumário", "índice", "contents", "table of contents"];

static PARAGRAPH_BREAK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t\r]*\n").expect("paragraph break regex is valid"));

static PREFIXED_HEADING_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?is)^(?:cap[íi]tulo|chapter|cap\.)\s*([0-9]+|[ivxlcdm]+)\b\s*[-:.]?\s*(.*)$",
    )
    .expect("chapter heading regex is valid")
});

static ROMAN_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([IVXLCDM]+)\.?$").expect("roman heading regex is valid"));

/// A heading found on a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub page: usize,
    pub number: u32,
    pub title: Option<String>,
}

/// Derive chapters from headings in page text.
///
/// Returns an empty list when no heading is found.
pub fn detect_chapters(segments: &[Segment]) -> Vec<Chapter> {
    let headings: Vec<Heading> = segments
        .iter()
        .enumerate()
        .flat_map(|(i, segment)| {
            paragraphs(&segment.text)
                .filter_map(parse_heading)
                .map(move |(number, title)| Heading {
                    page: i + 1,
                    number,
                    title,
                })
                .collect::<Vec<_>>()
        })
        .collect();

    let chapters = chapters_from_headings(&headings, segments.len());
    debug!(
        pages = segments.len(),
        chapters = chapters.len(),
        "detected chapters from headings"
    );
    chapters
}

/// Turn headings (in page order) into chapter ranges over `page_count` pages.
pub fn chapters_from_headings(headings: &[Heading], page_count: usize) -> Vec<Chapter> {
    headings
        .iter()
        .enumerate()
        .map(|(i, heading)| {
            let end_page = match headings.get(i + 1) {
                Some(next) => next.page - 1,
                None => page_count,
            };
            let title = heading
                .title
                .clone()
                .unwrap_or_else(|| format!("Chapter {}", heading.number));
            Chapter::new(heading.number, title, heading.page, end_page)
        })
        .collect()
}

/// Blank-line separated paragraphs, or single lines when the page has no blank line.
fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    let parts: Vec<&str> = if PARAGRAPH_BREAK_RE.is_match(text) {
        PARAGRAPH_BREAK_RE.split(text).collect()
    } else {
        text.lines().collect()
    };
    parts.into_iter().map(str::trim).filter(|p| !p.is_empty())
}

/// Parse one paragraph as a heading: `(number, title)`.
pub fn parse_heading(paragraph: &str) -> Option<(u32, Option<String>)> {
    let paragraph = paragraph.trim();
    if paragraph.is_empty() || paragraph.chars().count() > MAX_HEADING_CHARS {
        return None;
    }
    let lowered = paragraph.to_lowercase();
    if TOC_MARKERS.iter().any(|marker| lowered.contains(marker)) {
        return None;
    }

    if let Some(caps) = PREFIXED_HEADING_RE.captures(paragraph) {
        let number = parse_number(&caps[1])?;
        let title = caps
            .get(2)
            .map(|m| collapse_whitespace(m.as_str()))
            .filter(|t| !t.is_empty());
        return Some((number, title));
    }

    let caps = ROMAN_HEADING_RE.captures(paragraph)?;
    Some((roman_to_arabic(&caps[1])?, None))
}

fn parse_number(raw: &str) -> Option<u32> {
    if raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        roman_to_arabic(raw)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Convert a roman numeral (any case) to its value.
///
/// Only canonical numerals are accepted: `IV` is 4, `IIII` is rejected.
pub fn roman_to_arabic(numeral: &str) -> Option<u32> {
    let upper = numeral.to_ascii_uppercase();
    let mut total = 0u32;
    let mut previous = 0u32;

    for c in upper.chars().rev() {
        let value = match c {
            'I' => 1,
            'V' => 5,
            'X' => 10,
            'L' => 50,
            'C' => 100,
            'D' => 500,
            'M' => 1000,
            _ => return None,
        };
        if value < previous {
            total = total.checked_sub(value)?;
        } else {
            total += value;
            previous = value;
        }
    }

    (total > 0 && arabic_to_roman(total) == upper).then_some(total)
}

/// Canonical roman numeral for `n` (uppercase).
pub fn arabic_to_roman(mut n: u32) -> String {
    const TABLE: &[(u32, &str)] = &[
        (1000, "M"),
        (900, "CM"),
        (500, "D"),
        (400, "CD"),
        (100, "C"),
        (90, "XC"),
        (50, "L"),
        (40, "XL"),
        (10, "X"),
        (9, "IX"),
        (5, "V"),
        (4, "IV"),
        (1, "I"),
    ];

    let mut out = String::new();
    for &(value, symbol) in TABLE {
        while n >= value {
            out.push_str(symbol);
            n -= value;
        }
    }
    out
}
