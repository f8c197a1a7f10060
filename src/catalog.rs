// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A loaded catalog: both indices built from the same record set.
//!
//! [`SharedCatalog`] is the handle for hosts with more than one caller. A
//! reload builds the new indices off to the side and swaps them in under the
//! write lock, so a reader sees either the old catalog or the new one, never
//! a half-built mix.

use crate::config::SearchConfig;
use crate::error::{ConfigError, SearchError};
use crate::index::TermsIndex;
use crate::records::RecordStore;
use crate::search::{SearchIndex, SearchOptions};
use crate::types::{Record, SearchResult};
use parking_lot::{RwLock, RwLockReadGuard};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Catalog {
    config: SearchConfig,
    search: SearchIndex,
    terms: TermsIndex,
}

impl Catalog {
    pub fn new(config: SearchConfig) -> Result<Self, ConfigError> {
        let search = SearchIndex::new(config.clone())?;
        let terms = TermsIndex::new(&config);
        Ok(Self {
            config,
            search,
            terms,
        })
    }

    /// Build a catalog from `records` in one step.
    pub fn from_records(config: SearchConfig, records: &[Record]) -> Result<Self, ConfigError> {
        let mut catalog = Self::new(config)?;
        catalog.load(records);
        Ok(catalog)
    }

    /// Rebuild both indices from `records`, replacing whatever was loaded.
    ///
    /// Records are filtered once: those without an identifier, and repeats of
    /// an identifier, reach neither index.
    pub fn load(&mut self, records: &[Record]) {
        let store = RecordStore::from_records(&self.config.id_field, records.iter().cloned());
        self.terms.build(store.records());
        self.search.build_from_store(store);
    }

    pub fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.search.search(query, options)
    }

    pub fn suggestions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        self.terms.suggestions(prefix, max_results)
    }

    pub fn get_object_by_id(&self, id: &str) -> Option<&Record> {
        self.search.get_object_by_id(id)
    }

    pub fn search_index(&self) -> &SearchIndex {
        &self.search
    }

    pub fn terms_index(&self) -> &TermsIndex {
        &self.terms
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        self.search.is_ready() && self.terms.is_ready()
    }

    pub fn size(&self) -> usize {
        self.search.size()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.terms.clear();
    }
}

/// Catalog shared between threads. Clones share the same catalog.
#[derive(Debug, Clone)]
pub struct SharedCatalog {
    inner: Arc<RwLock<Catalog>>,
}

impl SharedCatalog {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            inner: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Build replacement indices without holding the lock, then swap them in.
    pub fn load(&self, records: &[Record]) -> Result<(), ConfigError> {
        let config = self.inner.read().config.clone();
        let fresh = Catalog::from_records(config, records)?;
        *self.inner.write() = fresh;
        Ok(())
    }

    /// Read access for callers that need several lookups against one snapshot.
    pub fn read(&self) -> RwLockReadGuard<'_, Catalog> {
        self.inner.read()
    }

    pub fn search(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<SearchResult>, SearchError> {
        self.inner.read().search(query, options)
    }

    pub fn suggestions(&self, prefix: &str, max_results: usize) -> Vec<String> {
        self.inner.read().suggestions(prefix, max_results)
    }

    pub fn get_object_by_id(&self, id: &str) -> Option<Record> {
        self.inner.read().get_object_by_id(id).cloned()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.read().is_ready()
    }

    pub fn clear(&self) {
        self.inner.write().clear();
    }
}
