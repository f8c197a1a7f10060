// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field-scoped inverted index.
//!
//! Only configured fields are tokenized. Each posting remembers which field the
//! term came from, so a query can drop a field entirely by giving it weight 0.
//! The vocabulary lives in a `BTreeMap`, which turns a prefix lookup into a
//! range scan.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **POSTING_LIST_SORTED**: Each posting list is sorted by (doc, field)
//! 2. **ONE_POSTING_PER_FIELD**: At most one posting per (term, doc, field)
//! 3. **DOC_FREQ_CORRECT**: `field_doc_freqs[f]` equals the number of postings with field `f`
//! 4. **NON_EMPTY**: Every term has at least one posting

use crate::tokenize::tokenize;
use crate::types::Record;
use std::collections::{BTreeMap, HashMap};
use std::ops::Bound;

/// One (document, field) occurrence of a term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Document ordinal (load order).
    pub doc: u32,
    /// Field ordinal (weight table order).
    pub field: u16,
    /// Occurrences of the term in this field of this document.
    pub term_freq: u32,
}

/// All occurrences of a term, plus per-field document frequencies.
#[derive(Debug, Clone, Default)]
pub struct TermPostings {
    pub postings: Vec<Posting>,
    pub field_doc_freqs: Vec<usize>,
}

/// Inverted index over a fixed, ordered set of fields.
#[derive(Debug, Clone, Default)]
pub struct InvertedIndex {
    fields: Vec<String>,
    vocabulary: BTreeMap<String, TermPostings>,
    /// `field_lengths[doc][field]` = token count.
    field_lengths: Vec<Vec<u32>>,
    avg_field_lengths: Vec<f64>,
}

impl InvertedIndex {
    /// Tokenize `fields` of every record into postings.
    ///
    /// Documents are numbered in iteration order. Fields with no value count as
    /// zero-length.
    pub fn build<'a, I>(fields: &[String], records: I) -> Self
    where
        I: IntoIterator<Item = &'a Record>,
    {
        let num_fields = fields.len();
        let mut vocabulary: BTreeMap<String, TermPostings> = BTreeMap::new();
        let mut field_lengths: Vec<Vec<u32>> = Vec::new();
        let mut counts: HashMap<String, u32> = HashMap::new();

        for (doc, record) in records.into_iter().enumerate() {
            let mut lengths = vec![0u32; num_fields];

            for (field_idx, field) in fields.iter().enumerate() {
                let Some(text) = record.get(field) else {
                    continue;
                };

                counts.clear();
                let tokens = tokenize(text);
                lengths[field_idx] = tokens.len() as u32;
                for token in tokens {
                    *counts.entry(token).or_insert(0) += 1;
                }

                for (term, term_freq) in counts.drain() {
                    let entry = vocabulary.entry(term).or_insert_with(|| TermPostings {
                        postings: Vec::new(),
                        field_doc_freqs: vec![0; num_fields],
                    });
                    entry.postings.push(Posting {
                        doc: doc as u32,
                        field: field_idx as u16,
                        term_freq,
                    });
                    entry.field_doc_freqs[field_idx] += 1;
                }
            }

            field_lengths.push(lengths);
        }

        let avg_field_lengths = (0..num_fields)
            .map(|f| {
                if field_lengths.is_empty() {
                    0.0
                } else {
                    let total: u64 = field_lengths.iter().map(|l| u64::from(l[f])).sum();
                    total as f64 / field_lengths.len() as f64
                }
            })
            .collect();

        Self {
            fields: fields.to_vec(),
            vocabulary,
            field_lengths,
            avg_field_lengths,
        }
    }

    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    pub fn num_docs(&self) -> usize {
        self.field_lengths.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn field_length(&self, doc: u32, field: u16) -> u32 {
        self.field_lengths
            .get(doc as usize)
            .and_then(|lengths| lengths.get(field as usize))
            .copied()
            .unwrap_or(0)
    }

    pub fn avg_field_length(&self, field: u16) -> f64 {
        self.avg_field_lengths
            .get(field as usize)
            .copied()
            .unwrap_or(0.0)
    }

    /// Postings of an exact term.
    pub fn get(&self, term: &str) -> Option<&TermPostings> {
        self.vocabulary.get(term)
    }

    /// Every term that starts with `prefix` (including `prefix` itself), in
    /// lexicographic order.
    pub fn with_prefix<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = (&'a str, &'a TermPostings)> + 'a {
        self.vocabulary
            .range::<str, _>((Bound::Included(prefix), Bound::Unbounded))
            .take_while(move |(term, _)| term.starts_with(prefix))
            .map(|(term, postings)| (term.as_str(), postings))
    }

    /// Full vocabulary scan, for fuzzy matching.
    pub fn terms(&self) -> impl Iterator<Item = (&str, &TermPostings)> {
        self.vocabulary
            .iter()
            .map(|(term, postings)| (term.as_str(), postings))
    }
}
