// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for JSON option parsing.
//!
//! Whatever a host passes, parsing either fails with a typed error or yields
//! options that validate.

#![no_main]

use catalog_search::SearchOptions;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(value) = serde_json::from_slice::<serde_json::Value>(data) else {
        return;
    };
    if let Ok(options) = SearchOptions::from_json(&value) {
        assert!(options.validate().is_ok());
    }
});
