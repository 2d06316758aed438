// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors for the loading side of the crate.
//!
//! Queries never fail: an unmatched search is an empty `Vec`, an empty text is a
//! zero score. Everything that *can* fail happens before the first query, while
//! reading the book document, the reader config, or a theme taxonomy. Those
//! faults surface here so callers can stop before a broken engine exists.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while loading inputs.
#[derive(Debug, Error)]
pub enum LecternError {
    /// A file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A JSON document did not match the expected shape.
    #[error("invalid {what} JSON: {source}")]
    Json {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A taxonomy keyword could not be compiled into a word-boundary matcher.
    #[error("theme '{theme}' has an unusable keyword '{keyword}': {source}")]
    InvalidKeyword {
        theme: String,
        keyword: String,
        #[source]
        source: regex::Error,
    },

    /// A taxonomy is structurally wrong (negative weight, empty keyword, ...).
    #[error("invalid theme taxonomy: {0}")]
    InvalidTaxonomy(String),

    /// A reader config value is out of range.
    #[error("invalid reader config: {0}")]
    InvalidConfig(String),
}

impl LecternError {
    pub(crate) fn json(what: &'static str, source: serde_json::Error) -> Self {
        LecternError::Json { what, source }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        LecternError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, LecternError>;
