// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Reader configuration.
//!
//! Every knob has a default that reproduces the reference behavior, so an empty
//! `{}` (or no config file at all) is a valid configuration. Keys are camelCase
//! to match the rest of the JSON the reader consumes.
//!
//! ```json
//! {
//!   "thresholds": { "batchedMinPages": 1000, "batchSize": 100 },
//!   "excerpt": { "wordContext": 5, "phraseContext": 10 },
//!   "highlight": { "open": "<mark>", "close": "</mark>" },
//!   "maxResults": 50
//! }
//! ```

use crate::error::{LecternError, Result};
use crate::index::IndexThresholds;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Context widths (in words) for each kind of excerpt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ExcerptConfig {
    pub word_context: usize,
    pub phrase_context: usize,
    /// Wider window for phrases found by the first-word fallback.
    pub fallback_context: usize,
    pub verse_context: usize,
    /// Characters shown when the term is not on the page at all.
    pub fallback_chars: usize,
}

impl Default for ExcerptConfig {
    fn default() -> Self {
        Self {
            word_context: 5,
            phrase_context: 10,
            fallback_context: 15,
            verse_context: 5,
            fallback_chars: 200,
        }
    }
}

/// Inline markers wrapped around highlighted terms.
///
/// Defaults to Markdown bold; a renderer can swap in `<mark>`/`</mark>` or ANSI codes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub open: String,
    pub close: String,
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            open: "**".to_string(),
            close: "**".to_string(),
        }
    }
}

impl Highlight {
    pub fn wrap(&self, text: &str) -> String {
        format!("{}{}{}", self.open, text, self.close)
    }
}

/// Everything tunable about indexing and searching one book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReaderConfig {
    pub thresholds: IndexThresholds,
    pub excerpt: ExcerptConfig,
    pub highlight: Highlight,
    /// Default result cap for `advanced_search`.
    pub max_results: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            thresholds: IndexThresholds::default(),
            excerpt: ExcerptConfig::default(),
            highlight: Highlight::default(),
            max_results: 50,
        }
    }
}

impl ReaderConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: ReaderConfig =
            serde_json::from_str(json).map_err(|e| LecternError::json("reader config", e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| LecternError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        if self.thresholds.batch_size == 0 {
            return Err(LecternError::InvalidConfig(
                "thresholds.batchSize must be at least 1".into(),
            ));
        }
        if self.thresholds.reclaim_every == 0 {
            return Err(LecternError::InvalidConfig(
                "thresholds.reclaimEvery must be at least 1".into(),
            ));
        }
        Ok(())
    }
}
