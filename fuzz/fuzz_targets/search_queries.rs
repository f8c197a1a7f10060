// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Arbitrary queries against a fixed catalog must never panic, must only
//! return loaded ids, and must come back ranked.

#![no_main]

use catalog_search::testing::sample_records;
use catalog_search::{Catalog, Fuzzy, SearchConfig, SearchOptions};
use libfuzzer_sys::fuzz_target;
use std::sync::OnceLock;

fuzz_target!(|data: (&[u8], bool, bool)| {
    static CATALOG: OnceLock<Catalog> = OnceLock::new();
    let catalog = CATALOG.get_or_init(|| {
        Catalog::from_records(SearchConfig::default(), &sample_records()).unwrap()
    });

    let (query, prefix, fuzzy) = data;
    // Cap query length to avoid timeouts
    let query: String = String::from_utf8_lossy(query).chars().take(200).collect();
    let options = SearchOptions::new().prefix(prefix).fuzzy(Fuzzy::Enabled(fuzzy));

    let results = catalog.search(&query, &options).unwrap();

    for result in &results {
        assert!(catalog.get_object_by_id(&result.id).is_some());
        assert!(result.score.is_finite() && result.score > 0.0);
        assert!(!result.matched_fields.is_empty());
    }
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }

    let suggestions = catalog.suggestions(&query, 10);
    assert!(suggestions.len() <= 10);
});
