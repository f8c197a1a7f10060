// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::config::DEFAULT_ID_FIELD;
use crate::types::Record;

pub const TITLE: &str = "dcterms:title";
pub const ALTERNATIVE: &str = "dcterms:alternative";
pub const CREATOR: &str = "dcterms:creator";
pub const DESCRIPTION: &str = "dcterms:description";

/// A record with the default identifier field and a title.
pub fn make_record(id: &str, title: &str) -> Record {
    Record::new().with(DEFAULT_ID_FIELD, id).with(TITLE, title)
}

/// A record with title, creator and description.
pub fn make_full_record(id: &str, title: &str, creator: &str, description: &str) -> Record {
    make_record(id, title)
        .with(CREATOR, creator)
        .with(DESCRIPTION, description)
}

/// Five valid objects plus one without an identifier and one duplicate.
pub fn sample_records() -> Vec<Record> {
    vec![
        make_full_record(
            "MO-001",
            "Stone axe head",
            "Unknown maker",
            "Polished greenstone axe head, hafted with resin.",
        ),
        make_full_record(
            "MO-002",
            "Woven basket",
            "Ngarrindjeri weavers",
            "Coiled sedge basket with a stone-tempered base.",
        )
        .with(ALTERNATIVE, "Dilly bag"),
        make_full_record(
            "MO-003",
            "Carved shield",
            "Unknown maker",
            "Hardwood shield carved with ochre bands.",
        ),
        make_full_record(
            "MO-004",
            "Shell necklace",
            "Lola Greeno",
            "Multi-strand necklace of maireener shells.",
        )
        .with(ALTERNATIVE, "Kanganapuri"),
        make_full_record(
            "MO-005",
            "Grinding stone",
            "Unknown maker",
            "Sandstone grindstone used for seed processing.",
        ),
        Record::new().with(TITLE, "Unaccessioned stone flake"),
        make_record("MO-001", "Duplicate entry"),
    ]
}

/// Records whose titles are generated, for benches and larger tests.
pub fn generated_records(count: usize) -> Vec<Record> {
    const WORDS: &[&str] = &[
        "stone", "axe", "basket", "shield", "necklace", "shell", "carved", "woven", "ochre",
        "resin", "sedge", "grinding", "polished", "hardwood", "fibre", "string", "bark", "canoe",
    ];
    (0..count)
        .map(|i| {
            let title = format!(
                "{} {} {}",
                WORDS[i % WORDS.len()],
                WORDS[(i * 7 + 3) % WORDS.len()],
                WORDS[(i * 13 + 5) % WORDS.len()]
            );
            let description = format!(
                "Object {i} made of {} with {} detail",
                WORDS[(i * 3 + 1) % WORDS.len()],
                WORDS[(i * 5 + 2) % WORDS.len()]
            );
            make_full_record(&format!("GEN-{i:05}"), &title, "Unknown maker", &description)
        })
        .collect()
}
