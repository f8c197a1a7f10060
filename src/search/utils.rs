// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query parsing and multi-term score merging.

use crate::tokenize::tokenize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

/// Score and matched terms a document earned from one or more query terms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocMatch {
    pub score: f64,
    /// Field ordinal -> indexed terms that matched in that field.
    pub matched: BTreeMap<u16, BTreeSet<String>>,
}

impl DocMatch {
    pub fn absorb(&mut self, other: DocMatch) {
        self.score += other.score;
        for (field, terms) in other.matched {
            self.matched.entry(field).or_default().extend(terms);
        }
    }
}

/// Split a query with the same tokenizer the index uses.
///
/// # Example
///
/// ```
/// use catalog_search::search::utils::parse_query;
///
/// assert_eq!(parse_query("Stone-Axe  head"), vec!["stone", "axe", "head"]);
/// ```
pub fn parse_query(query: &str) -> Vec<String> {
    tokenize(query)
}

/// Merge per-term matches with AND semantics.
///
/// A document survives only if every query term matched it. Scores are summed
/// and matched terms are unioned per field.
pub fn merge_term_matches(match_sets: Vec<HashMap<u32, DocMatch>>) -> HashMap<u32, DocMatch> {
    let mut sets = match_sets.into_iter();
    let Some(mut doc_matches) = sets.next() else {
        return HashMap::new();
    };

    for mut term_matches in sets {
        doc_matches.retain(|doc, _| term_matches.contains_key(doc));
        for (doc, entry) in doc_matches.iter_mut() {
            if let Some(additional) = term_matches.remove(doc) {
                entry.absorb(additional);
            }
        }

        if doc_matches.is_empty() {
            break;
        }
    }

    doc_matches
}
