// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Theme scoring: how strongly a text is "about" each theme in a taxonomy.
//!
//! Keyword hits are counted on word boundaries, turned into a density, and
//! log-normalized (see [`core`]). The same scorer runs on a single page and on
//! the whole book, and the results are comparable because density ignores length.
//!
//! Keyword matchers are compiled once in [`ThemeScorer::new`]. A keyword that
//! cannot be compiled is a taxonomy fault and fails there, never while scoring.

mod core;
pub mod taxonomy;

pub use self::core::*;
pub use taxonomy::{ThemeSpec, ThemeTaxonomy};

use crate::error::{LecternError, Result};
use crate::utils::count_words;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Every intermediate value behind one theme's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemeBreakdown {
    /// Unweighted keyword hits.
    pub raw_hits: usize,
    /// Hits × theme weight × common-word penalty. Reported, not scored.
    pub weighted_hits: f64,
    pub density: f64,
    pub normalized: f64,
    pub diversity_bonus: f64,
    pub score: f64,
}

impl ThemeBreakdown {
    fn empty() -> Self {
        ThemeBreakdown {
            raw_hits: 0,
            weighted_hits: 0.0,
            density: 0.0,
            normalized: 0.0,
            diversity_bonus: 1.0,
            score: 0.0,
        }
    }
}

struct CompiledKeyword {
    keyword: String,
    matcher: Regex,
}

struct CompiledTheme {
    name: String,
    weight: f64,
    keywords: Vec<CompiledKeyword>,
}

/// Scores texts against a fixed taxonomy.
pub struct ThemeScorer {
    themes: Vec<CompiledTheme>,
    common_words: HashSet<String>,
}

impl std::fmt::Debug for ThemeScorer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeScorer")
            .field(
                "themes",
                &self.themes.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
            )
            .field("common_words", &self.common_words.len())
            .finish()
    }
}

impl ThemeScorer {
    /// Compile every keyword into a `\bkeyword\b` matcher.
    pub fn new(taxonomy: &ThemeTaxonomy) -> Result<Self> {
        let themes = taxonomy
            .themes()
            .map(|(name, spec)| {
                let keywords = spec
                    .keywords
                    .iter()
                    .map(|keyword| {
                        Regex::new(&format!(r"\b{}\b", regex::escape(keyword)))
                            .map(|matcher| CompiledKeyword {
                                keyword: keyword.clone(),
                                matcher,
                            })
                            .map_err(|source| LecternError::InvalidKeyword {
                                theme: name.to_string(),
                                keyword: keyword.clone(),
                                source,
                            })
                    })
                    .collect::<Result<Vec<_>>>()?;
                Ok(CompiledTheme {
                    name: name.to_string(),
                    weight: spec.weight,
                    keywords,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ThemeScorer {
            themes,
            common_words: DEFAULT_COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        })
    }

    /// Scorer over the bundled extended taxonomy.
    pub fn extended() -> Result<Self> {
        Self::new(&ThemeTaxonomy::default_extended())
    }

    /// Replace the common-word penalty list.
    pub fn with_common_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.common_words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .collect();
        self
    }

    pub fn theme_names(&self) -> impl Iterator<Item = &str> {
        self.themes.iter().map(|t| t.name.as_str())
    }

    /// Theme name → score in `[0, 100]`.
    pub fn score(&self, text: &str) -> BTreeMap<String, f64> {
        self.breakdown(text)
            .into_iter()
            .map(|(name, breakdown)| (name, breakdown.score))
            .collect()
    }

    /// Theme name → full breakdown of the score.
    pub fn breakdown(&self, text: &str) -> BTreeMap<String, ThemeBreakdown> {
        let lowered = text.to_lowercase();
        let total_words = count_words(&lowered);

        self.themes
            .iter()
            .map(|theme| {
                let breakdown = if total_words == 0 {
                    ThemeBreakdown::empty()
                } else {
                    self.score_theme(theme, &lowered, total_words)
                };
                (theme.name.clone(), breakdown)
            })
            .collect()
    }

    fn score_theme(&self, theme: &CompiledTheme, lowered: &str, total_words: usize) -> ThemeBreakdown {
        let mut raw_hits = 0usize;
        let mut weighted_hits = 0.0;

        for keyword in &theme.keywords {
            let count = keyword.matcher.find_iter(lowered).count();
            if count == 0 {
                continue;
            }
            let penalty = if self.common_words.contains(&keyword.keyword) {
                COMMON_WORD_PENALTY
            } else {
                1.0
            };
            weighted_hits += count as f64 * theme.weight * penalty;
            raw_hits += count;
        }

        let density = keyword_density(raw_hits, total_words);
        let normalized = normalize_density(density);
        let bonus = diversity_bonus(raw_hits);

        ThemeBreakdown {
            raw_hits,
            weighted_hits,
            density,
            normalized,
            diversity_bonus: bonus,
            score: (normalized * bonus).min(MAX_THEME_SCORE),
        }
    }
}
