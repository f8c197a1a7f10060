// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind search ranking.
//!
//! A single contribution to a document's score is
//!
//! ```text
//! match_weight × field_weight × bm25+(tf, df, N, field_len, avg_field_len)
//! ```
//!
//! and a document's score is the sum over every (query term, matched term,
//! field) triple it has.
//!
//! # Match weights
//!
//! | Kind   | Weight                                   |
//! |--------|------------------------------------------|
//! | Exact  | 1.0                                      |
//! | Prefix | 0.375 × q / (q + 0.3 × (t − q))          |
//! | Fuzzy  | 0.45 × q / (q + d)                       |
//!
//! where `q` is the query term length, `t` the matched term length and `d` the
//! edit distance. Longer completions and larger typos weigh less.

/// BM25 term-frequency saturation.
pub const BM25_K1: f64 = 1.2;

/// BM25 length normalization.
pub const BM25_B: f64 = 0.7;

/// BM25+ lower bound on the term-frequency component.
pub const BM25_DELTA: f64 = 0.5;

/// Weight of an exact term match.
pub const EXACT_MATCH_WEIGHT: f64 = 1.0;

/// Base weight of a prefix completion.
pub const PREFIX_MATCH_WEIGHT: f64 = 0.375;

/// Base weight of a fuzzy (edit-distance) match.
pub const FUZZY_MATCH_WEIGHT: f64 = 0.45;

/// How a query term reached an indexed term.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    /// Indexed term extends the query term by this many characters.
    Prefix { extra_chars: usize },
    /// Indexed term is this many edits away.
    Fuzzy { distance: usize },
}

/// Relative weight of a match kind for a query term of `query_len` characters.
pub fn match_weight(kind: MatchKind, query_len: usize) -> f64 {
    let q = query_len as f64;
    match kind {
        MatchKind::Exact => EXACT_MATCH_WEIGHT,
        MatchKind::Prefix { extra_chars } => {
            PREFIX_MATCH_WEIGHT * q / (q + 0.3 * extra_chars as f64)
        }
        MatchKind::Fuzzy { distance } => FUZZY_MATCH_WEIGHT * q / (q + distance as f64),
    }
}

/// BM25+ score of one term in one field of one document.
///
/// - `term_freq`: occurrences of the term in this field of this document
/// - `doc_freq`: documents whose field contains the term
/// - `num_docs`: documents in the index
/// - `field_len`: tokens in this field of this document
/// - `avg_field_len`: mean tokens per document for this field
pub fn bm25_plus(
    term_freq: u32,
    doc_freq: usize,
    num_docs: usize,
    field_len: u32,
    avg_field_len: f64,
) -> f64 {
    let tf = term_freq as f64;
    let df = doc_freq as f64;
    let n = num_docs as f64;
    let len_ratio = if avg_field_len > 0.0 {
        field_len as f64 / avg_field_len
    } else {
        1.0
    };

    // IDF component: ln(1 + (N - df + 0.5) / (df + 0.5))
    let idf = (1.0 + (n - df + 0.5) / (df + 0.5)).ln();

    let tf_norm = BM25_DELTA
        + (tf * (BM25_K1 + 1.0)) / (tf + BM25_K1 * (1.0 - BM25_B + BM25_B * len_ratio));

    idf * tf_norm
}
