// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind theme scores.
//!
//! A theme score is a function of keyword *density*, not keyword count, so a
//! 200-word page and the whole 80,000-word book land on the same 0-100 scale.
//! Density is compressed with a logarithm: the first few hits per thousand words
//! move the score a lot, the hundredth barely moves it.
//!
//! ```text
//! density    = hits / total_words * 1000
//! normalized = min(100, 20 * ln(1 + density))        (0 when density = 0)
//! score      = min(100, normalized * bonus)           bonus = 1.2 if hits > 5
//! ```
//!
//! # Properties
//!
//! - **Bounded**: `0 <= score <= 100` for every input.
//! - **Zero in, zero out**: no hits (or no words) means exactly `0.0`.
//! - **Monotone in hits**: for fixed `total_words`, more hits never lowers the
//!   score. `ln` is increasing and the bonus only switches on, never off.
//!
//! # Constants
//!
//! | Constant                | Value | Role |
//! |-------------------------|-------|------|
//! | `DENSITY_SCALE`         | 1000  | hits per thousand words |
//! | `LOG_SCALE`             | 20.0  | `20 * ln(1 + d)` reaches 100 near d ≈ 147 |
//! | `DIVERSITY_BONUS`       | 1.2   | reward for broad evidence |
//! | `DIVERSITY_MIN_HITS`    | 5     | bonus applies strictly above this |
//! | `COMMON_WORD_PENALTY`   | 0.6   | weight multiplier for generic keywords |

// =============================================================================
// SCORING CONSTANTS
// =============================================================================

/// Highest possible theme score.
pub const MAX_THEME_SCORE: f64 = 100.0;

/// Density is expressed as hits per this many words.
pub const DENSITY_SCALE: f64 = 1000.0;

/// Multiplier on `ln(1 + density)`.
pub const LOG_SCALE: f64 = 20.0;

/// Multiplier applied when a theme has more than `DIVERSITY_MIN_HITS` hits.
pub const DIVERSITY_BONUS: f64 = 1.2;

/// Hit count the diversity bonus must exceed.
pub const DIVERSITY_MIN_HITS: usize = 5;

/// Weight multiplier for keywords on the common-word list.
pub const COMMON_WORD_PENALTY: f64 = 0.6;

/// Keywords generic enough to show up in any text. Hits on these are
/// down-weighted in the weighted tally.
pub const DEFAULT_COMMON_WORDS: &[&str] = &["poder", "estado", "lei", "corpo", "valor"];

/// Hits per thousand words. Zero when there are no words.
pub fn keyword_density(hits: usize, total_words: usize) -> f64 {
    if total_words == 0 {
        return 0.0;
    }
    (hits as f64 / total_words as f64) * DENSITY_SCALE
}

/// Log-compressed density, capped at 100.
pub fn normalize_density(density: f64) -> f64 {
    if density > 0.0 {
        (LOG_SCALE * density.ln_1p()).min(MAX_THEME_SCORE)
    } else {
        0.0
    }
}

/// `DIVERSITY_BONUS` above `DIVERSITY_MIN_HITS` hits, `1.0` otherwise.
pub fn diversity_bonus(hits: usize) -> f64 {
    if hits > DIVERSITY_MIN_HITS {
        DIVERSITY_BONUS
    } else {
        1.0
    }
}

/// The full pipeline: density → log normalization → bonus → cap.
pub fn theme_score(hits: usize, total_words: usize) -> f64 {
    let normalized = normalize_density(keyword_density(hits, total_words));
    (normalized * diversity_bonus(hits)).min(MAX_THEME_SCORE)
}
