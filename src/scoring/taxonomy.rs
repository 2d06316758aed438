//! Theme taxonomies: weighted keyword lists per theme.
//!
//! A taxonomy is configuration, not user data. It is loaded once, validated
//! up front, and never changes for the life of a scorer.
//!
//! JSON shape (theme name → spec):
//!
//! ```json
//! { "ciencia": { "keywords": ["energia", "quântico"], "weight": 0.7 } }
//! ```

use crate::error::{LecternError, Result};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// One theme's keywords and weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeSpec {
    pub keywords: BTreeSet<String>,
    pub weight: f64,
}

/// Theme name → spec. Ordered by name so scores iterate deterministically.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeTaxonomy {
    themes: BTreeMap<String, ThemeSpec>,
}

impl ThemeTaxonomy {
    /// Build from `(theme, keywords, weight)` triples. Keywords are lowercased.
    pub fn new<I, K>(themes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (String, K, f64)>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        let themes = themes
            .into_iter()
            .map(|(name, keywords, weight)| {
                let keywords = keywords
                    .into_iter()
                    .map(|k| k.as_ref().trim().to_lowercase())
                    .collect();
                (name, ThemeSpec { keywords, weight })
            })
            .collect();
        let taxonomy = ThemeTaxonomy { themes };
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    /// The bundled extended taxonomy (`data/extended_themes.json`).
    pub fn default_extended() -> Self {
        Self::from_json_str(include_str!("../../data/extended_themes.json"))
            .expect("bundled extended theme taxonomy is valid")
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let mut taxonomy: ThemeTaxonomy =
            serde_json::from_str(json).map_err(|e| LecternError::json("theme taxonomy", e))?;
        for spec in taxonomy.themes.values_mut() {
            spec.keywords = spec
                .keywords
                .iter()
                .map(|k| k.trim().to_lowercase())
                .collect();
        }
        taxonomy.validate()?;
        Ok(taxonomy)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|e| LecternError::io(path, e))?;
        Self::from_json_str(&raw)
    }

    fn validate(&self) -> Result<()> {
        for (name, spec) in &self.themes {
            if name.trim().is_empty() {
                return Err(LecternError::InvalidTaxonomy("empty theme name".into()));
            }
            if !spec.weight.is_finite() || spec.weight < 0.0 {
                return Err(LecternError::InvalidTaxonomy(format!(
                    "theme '{}' has weight {}; weights must be finite and non-negative",
                    name, spec.weight
                )));
            }
            if spec.keywords.iter().any(|k| k.is_empty()) {
                return Err(LecternError::InvalidTaxonomy(format!(
                    "theme '{}' has an empty keyword",
                    name
                )));
            }
        }
        Ok(())
    }

    pub fn themes(&self) -> impl Iterator<Item = (&str, &ThemeSpec)> {
        self.themes.iter().map(|(name, spec)| (name.as_str(), spec))
    }

    pub fn get(&self, theme: &str) -> Option<&ThemeSpec> {
        self.themes.get(theme)
    }

    pub fn len(&self) -> usize {
        self.themes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}
