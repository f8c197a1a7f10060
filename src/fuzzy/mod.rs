// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! The tolerance is a fraction of the query term's length, so a four-letter
//! word gets at most one edit at the default 0.2 and a ten-letter word gets two.

mod levenshtein;

pub use levenshtein::*;

/// Hard cap on edits, whatever the tolerance says. Past this point a "match"
/// shares little with the query.
pub const MAX_FUZZY_DISTANCE: usize = 6;

/// Maximum edit distance for a term of `term_len` characters.
///
/// `round(tolerance × len)`, capped at [`MAX_FUZZY_DISTANCE`]. Callers validate
/// that `tolerance` lies in `[0, 1]`.
pub fn max_edit_distance(term_len: usize, tolerance: f64) -> usize {
    let distance = (tolerance * term_len as f64).round() as usize;
    distance.min(MAX_FUZZY_DISTANCE)
}
