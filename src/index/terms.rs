// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terms index: the vocabulary behind type-ahead suggestions.
//!
//! Independent of the search index on purpose. It always covers the full set of
//! configured fields, whatever the user has toggled off for ranking, and it uses
//! its own tokenizer so hyphenated words survive as single suggestions.
//!
//! Terms are ranked once at build time (frequency descending, then
//! alphabetical), so a suggestion lookup is a filtered walk over a sorted list
//! that stops as soon as it has enough matches.

use crate::config::SearchConfig;
use crate::tokenize::extract_terms;
use crate::types::{Record, TermSuggestion};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{BTreeSet, HashMap};
use tracing::info;

/// Terms shorter than this (in characters, after lowercasing) are never indexed.
pub const MIN_TERM_LENGTH: usize = 2;

type TermCounts = HashMap<String, (u32, BTreeSet<String>)>;

/// Frequency-ranked vocabulary over the configured searchable fields.
#[derive(Debug, Clone, Default)]
pub struct TermsIndex {
    fields: Vec<String>,
    terms: HashMap<String, TermSuggestion>,
    /// All terms, by frequency descending then alphabetically.
    ranked: Vec<String>,
    built: bool,
}

impl TermsIndex {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            fields: config.field_names(),
            ..Self::default()
        }
    }

    /// Replace the vocabulary with the terms of `records`.
    ///
    /// Missing or null field values are skipped. Every occurrence counts toward
    /// frequency; the field set records where a term was seen. Records are not
    /// filtered by identifier here; [`Catalog`](crate::catalog::Catalog) passes
    /// only the records its store kept.
    pub fn build(&mut self, records: &[Record]) {
        let counts = self.count_terms(records);

        self.terms = counts
            .into_iter()
            .map(|(term, (frequency, fields))| {
                let entry = TermSuggestion {
                    term: term.clone(),
                    frequency,
                    fields,
                };
                (term, entry)
            })
            .collect();

        let mut ranked: Vec<&TermSuggestion> = self.terms.values().collect();
        ranked.sort_by(|a, b| {
            b.frequency
                .cmp(&a.frequency)
                .then_with(|| a.term.cmp(&b.term))
        });
        self.ranked = ranked.into_iter().map(|t| t.term.clone()).collect();
        self.built = true;

        info!(
            records = records.len(),
            terms = self.terms.len(),
            "terms index built"
        );
    }

    #[cfg(not(feature = "parallel"))]
    fn count_terms(&self, records: &[Record]) -> TermCounts {
        let mut counts = TermCounts::new();
        for record in records {
            self.count_record(record, &mut counts);
        }
        counts
    }

    /// Per-thread partial counts merged pairwise. Sums and set unions are
    /// order-independent, so the result matches the sequential build exactly.
    #[cfg(feature = "parallel")]
    fn count_terms(&self, records: &[Record]) -> TermCounts {
        records
            .par_iter()
            .fold(TermCounts::new, |mut counts, record| {
                self.count_record(record, &mut counts);
                counts
            })
            .reduce(TermCounts::new, |mut left, right| {
                for (term, (frequency, fields)) in right {
                    let entry = left.entry(term).or_default();
                    entry.0 += frequency;
                    entry.1.extend(fields);
                }
                left
            })
    }

    fn count_record(&self, record: &Record, counts: &mut TermCounts) {
        for field in &self.fields {
            let Some(value) = record.get(field) else {
                continue;
            };
            for raw in extract_terms(value) {
                let term = raw.to_lowercase();
                if term.chars().count() < MIN_TERM_LENGTH {
                    continue;
                }
                let entry = counts.entry(term).or_default();
                entry.0 += 1;
                if !entry.1.contains(field) {
                    entry.1.insert(field.clone());
                }
            }
        }
    }

    /// Up to `max_results` terms starting with `prefix`, case-insensitively,
    /// best first. An empty prefix or a zero limit yields nothing.
    pub fn suggestions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        if prefix.is_empty() || max_results == 0 {
            return Vec::new();
        }
        let prefix = prefix.to_lowercase();

        self.ranked
            .iter()
            .filter(|term| term.starts_with(&prefix))
            .take(max_results)
            .cloned()
            .collect()
    }

    /// Frequency and field membership of a term, case-insensitively.
    pub fn term_details(&self, term: &str) -> Option<&TermSuggestion> {
        self.terms.get(&term.to_lowercase())
    }

    /// The whole vocabulary in rank order.
    pub fn all_terms(&self) -> &[String] {
        &self.ranked
    }

    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// True once built, even from zero records.
    pub fn is_ready(&self) -> bool {
        self.built
    }

    /// Back to the never-built state.
    pub fn clear(&mut self) {
        self.terms.clear();
        self.ranked.clear();
        self.built = false;
    }
}
