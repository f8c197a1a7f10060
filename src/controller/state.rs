// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Observable query state and the pure function that derives results from it.

use crate::config::SearchConfig;
use crate::error::SearchError;
use crate::search::{SearchIndex, SearchOptions};
use crate::types::SearchResult;

/// What the presentation layer sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryState {
    /// Text as typed, not yet committed.
    pub raw_text: String,
    /// Trimmed text of the last commit. Results always belong to this.
    pub committed_text: String,
    /// Fields that contribute to ranking, in toggle order.
    pub active_fields: Vec<String>,
    /// Whether the controller has seen a built index.
    pub index_ready: bool,
    pub results: Vec<SearchResult>,
}

impl QueryState {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            active_fields: config.field_names(),
            ..Self::default()
        }
    }

    /// Raw text differs from what was last committed.
    pub fn is_dirty(&self) -> bool {
        self.raw_text.trim() != self.committed_text
    }
}

/// Whether `state` warrants running a query at all.
pub fn should_search(state: &QueryState, index: &SearchIndex, config: &SearchConfig) -> bool {
    state.committed_text.trim().chars().count() >= config.min_query_length
        && !state.active_fields.is_empty()
        && state.index_ready
        && index.is_ready()
}

/// Results for the committed text and active fields of `state`.
///
/// Empty whenever [`should_search`] says no, so results never outlive the
/// query or field set that produced them.
pub fn compute_results(
    state: &QueryState,
    index: &SearchIndex,
    config: &SearchConfig,
) -> Result<Vec<SearchResult>, SearchError> {
    if !should_search(state, index, config) {
        return Ok(Vec::new());
    }
    let options = SearchOptions::new().fields(state.active_fields.iter().cloned());
    index.search(state.committed_text.trim(), &options)
}
