// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term normalization for the search index.
//!
//! Catalog text is full of accented names ("Māori", "Lutruwita"). With the
//! `unicode-normalization` feature, diacritics are folded on both the
//! indexed and the query side, so "maori" finds "Māori" without spending any
//! fuzzy budget on it. Without the feature, terms are only lowercased.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

/// Decompose, drop combining marks, lowercase.
#[cfg(feature = "unicode-normalization")]
pub fn normalize_term(value: &str) -> String {
    value
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(not(feature = "unicode-normalization"))]
pub fn normalize_term(value: &str) -> String {
    value.to_lowercase()
}
