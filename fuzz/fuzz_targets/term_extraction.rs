// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for both tokenizers.
//!
//! Field values come from spreadsheets typed by people, so anything goes.

#![no_main]

use catalog_search::tokenize::{extract_terms, tokenize, TERM_DELIMITERS, TERM_EDGE_PUNCTUATION};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    for term in extract_terms(&text) {
        assert!(!term.is_empty());
        assert!(!term.chars().any(char::is_whitespace), "whitespace in {:?}", term);
        assert!(!term.contains(TERM_DELIMITERS), "delimiter in {:?}", term);
        assert!(!term.starts_with(TERM_EDGE_PUNCTUATION), "edge punctuation in {:?}", term);
        assert!(!term.ends_with(TERM_EDGE_PUNCTUATION), "edge punctuation in {:?}", term);
    }

    for token in tokenize(&text) {
        assert!(!token.is_empty());
        assert!(!token.chars().any(char::is_whitespace), "whitespace in {:?}", token);
        assert_eq!(token, token.to_lowercase());
    }
});
