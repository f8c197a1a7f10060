// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for bounded edit distance.
//!
//! The bounded computation must agree with the bound: a reported distance is
//! never above `max`, is symmetric, and is zero only for equal strings.

#![no_main]

use arbitrary::Arbitrary;
use catalog_search::fuzzy::{levenshtein_bounded, levenshtein_within};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct MatchInput {
    query: String,
    target: String,
    max: u8,
}

fuzz_target!(|input: MatchInput| {
    // Cap lengths to avoid timeouts
    let query: String = input.query.chars().take(50).collect();
    let target: String = input.target.chars().take(50).collect();
    let max = usize::from(input.max % 8);

    let forward = levenshtein_bounded(&query, &target, max);
    let backward = levenshtein_bounded(&target, &query, max);
    assert_eq!(forward, backward, "asymmetric distance for {:?} / {:?}", query, target);
    assert_eq!(forward.is_some(), levenshtein_within(&query, &target, max));

    if let Some(distance) = forward {
        assert!(distance <= max);
        assert_eq!(distance == 0, query == target);
    }
});
