// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search index: records in, ranked identifiers out.
//!
//! Every query term is expanded in three tiers against the vocabulary:
//!
//! 1. **Exact**: the term itself
//! 2. **Prefix**: indexed terms that extend it (BTreeMap range scan)
//! 3. **Fuzzy**: indexed terms within the edit budget (full vocabulary scan)
//!
//! A vocabulary term is claimed by the first tier that reaches it. Each
//! (matched term, field) posting then contributes
//! `match_weight × field_weight × bm25+` to the document, and the per-term
//! document sets are intersected.

use crate::config::SearchConfig;
use crate::error::{ConfigError, SearchError};
use crate::fuzzy::{levenshtein_bounded, max_edit_distance};
use crate::index::{InvertedIndex, TermPostings};
use crate::records::RecordStore;
use crate::scoring::{bm25_plus, match_weight, MatchKind};
use crate::types::{Record, SearchResult};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, info};

use super::options::{ResolvedOptions, SearchOptions};
use super::utils::{merge_term_matches, parse_query, DocMatch};

/// Source of build generations. Shared by every index so two different
/// builds never carry the same stamp.
static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

fn next_generation() -> u64 {
    NEXT_GENERATION.fetch_add(1, Ordering::Relaxed)
}

#[derive(Debug, Clone)]
struct BuiltIndex {
    store: RecordStore,
    inverted: InvertedIndex,
}

/// Full-text index over the configured fields of a record collection.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    config: SearchConfig,
    built: Option<BuiltIndex>,
    /// 0 until the first build; a fresh value on every build and clear.
    generation: u64,
}

impl Default for SearchIndex {
    fn default() -> Self {
        Self {
            config: SearchConfig::default(),
            built: None,
            generation: 0,
        }
    }
}

impl SearchIndex {
    /// An empty, not-yet-built index.
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            built: None,
            generation: 0,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Replace the indexed collection with `records`.
    ///
    /// Records without an identifier are skipped, and so are repeats of an
    /// identifier already seen. An empty collection still leaves the index
    /// ready.
    pub fn build(&mut self, records: &[Record]) {
        let store = RecordStore::from_records(&self.config.id_field, records.iter().cloned());
        self.build_from_store(store);
    }

    /// Index an already filtered store. Its id field must match the config.
    pub(crate) fn build_from_store(&mut self, store: RecordStore) {
        let inverted = InvertedIndex::build(&self.config.field_names(), store.iter());

        info!(
            documents = store.len(),
            vocabulary = inverted.vocabulary_size(),
            "search index built"
        );

        self.built = Some(BuiltIndex { store, inverted });
        self.generation = next_generation();
    }

    /// Ranked identifiers of the records that match every query term.
    ///
    /// Fields outside `active_fields` never contribute, and unknown field
    /// names are ignored. A blank query or an empty field list yields an
    /// empty result rather than an error.
    pub fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let built = self.built.as_ref().ok_or(SearchError::NotInitialized)?;
        let options = options.resolve(&self.config)?;

        let boosts = self.field_boosts(&built.inverted, &options.active_fields);
        if boosts.iter().all(|&b| b == 0.0) {
            return Ok(Vec::new());
        }

        let terms = parse_query(query);
        if terms.is_empty() {
            return Ok(Vec::new());
        }

        let mut match_sets = Vec::with_capacity(terms.len());
        for term in &terms {
            let matches = score_term(&built.inverted, term, &boosts, &options);
            if matches.is_empty() {
                debug!(term = term.as_str(), "query term matched nothing");
                return Ok(Vec::new());
            }
            match_sets.push(matches);
        }

        let mut ranked: Vec<(u32, DocMatch)> = merge_term_matches(match_sets).into_iter().collect();
        ranked.sort_by(|(doc_a, a), (doc_b, b)| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| doc_a.cmp(doc_b))
        });

        let fields = built.inverted.fields();
        let results = ranked
            .into_iter()
            .filter_map(|(doc, hit)| {
                let record = built.store.records().get(doc as usize)?;
                let id = record.id(built.store.id_field())?.to_string();
                let matched_fields = hit
                    .matched
                    .into_iter()
                    .filter_map(|(field, terms)| {
                        let name = fields.get(field as usize)?.clone();
                        Some((name, terms.into_iter().collect()))
                    })
                    .collect();
                Some(SearchResult {
                    id,
                    score: hit.score,
                    matched_fields,
                })
            })
            .collect();

        Ok(results)
    }

    /// Per-field multiplier: the configured weight for active fields, 0 otherwise.
    fn field_boosts(&self, inverted: &InvertedIndex, active_fields: &[String]) -> Vec<f64> {
        let active: HashSet<&str> = active_fields.iter().map(String::as_str).collect();
        inverted
            .fields()
            .iter()
            .map(|field| {
                if active.contains(field.as_str()) {
                    self.config.weight_of(field)
                } else {
                    0.0
                }
            })
            .collect()
    }

    /// The full record for an identifier. `None` before build, for an empty
    /// id, or for an id that was never loaded.
    pub fn get_object_by_id(&self, id: &str) -> Option<&Record> {
        self.built.as_ref()?.store.get(id)
    }

    /// Indexed document count; 0 before build.
    pub fn size(&self) -> usize {
        self.built.as_ref().map_or(0, |b| b.store.len())
    }

    pub fn document_count(&self) -> usize {
        self.size()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.built
            .as_ref()
            .map_or(0, |b| b.inverted.vocabulary_size())
    }

    pub fn is_ready(&self) -> bool {
        self.built.is_some()
    }

    /// Drop the indexed collection. Searching afterwards fails until the next
    /// build.
    pub fn clear(&mut self) {
        self.built = None;
        self.generation = next_generation();
    }

    /// Changes on every build and clear. Holders of derived state compare it
    /// to tell whether the indexed collection was replaced.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Every document one query term reaches, with its score contributions.
fn score_term(
    inverted: &InvertedIndex,
    term: &str,
    boosts: &[f64],
    options: &ResolvedOptions,
) -> HashMap<u32, DocMatch> {
    let query_len = term.chars().count();
    let mut matches: HashMap<u32, DocMatch> = HashMap::new();
    let mut claimed: HashSet<&str> = HashSet::new();

    if let Some(postings) = inverted.get(term) {
        accumulate(inverted, term, postings, MatchKind::Exact, query_len, boosts, &mut matches);
        claimed.insert(term);
    }

    if options.prefix {
        for (candidate, postings) in inverted.with_prefix(term) {
            if candidate == term {
                continue;
            }
            let extra_chars = candidate.chars().count().saturating_sub(query_len);
            let kind = MatchKind::Prefix { extra_chars };
            accumulate(inverted, candidate, postings, kind, query_len, boosts, &mut matches);
            claimed.insert(candidate);
        }
    }

    let max_distance = max_edit_distance(query_len, options.fuzzy_tolerance);
    if max_distance > 0 {
        for (candidate, postings) in inverted.terms() {
            if claimed.contains(candidate) {
                continue;
            }
            if let Some(distance) = levenshtein_bounded(term, candidate, max_distance) {
                let kind = MatchKind::Fuzzy { distance };
                accumulate(inverted, candidate, postings, kind, query_len, boosts, &mut matches);
            }
        }
    }

    matches
}

fn accumulate(
    inverted: &InvertedIndex,
    matched_term: &str,
    postings: &TermPostings,
    kind: MatchKind,
    query_len: usize,
    boosts: &[f64],
    matches: &mut HashMap<u32, DocMatch>,
) {
    let weight = match_weight(kind, query_len);
    let num_docs = inverted.num_docs();

    for posting in &postings.postings {
        let boost = boosts.get(posting.field as usize).copied().unwrap_or(0.0);
        if boost == 0.0 {
            continue;
        }
        let doc_freq = postings.field_doc_freqs[posting.field as usize];
        let relevance = bm25_plus(
            posting.term_freq,
            doc_freq,
            num_docs,
            inverted.field_length(posting.doc, posting.field),
            inverted.avg_field_length(posting.field),
        );

        let entry = matches.entry(posting.doc).or_default();
        entry.score += weight * boost * relevance;
        entry
            .matched
            .entry(posting.field)
            .or_default()
            .insert(matched_term.to_string());
    }
}
