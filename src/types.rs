// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The data that flows in and out of the indices.
//!
//! Records are deliberately schemaless: a catalog sheet can grow columns at any
//! time, and the only field the core insists on is the identifier. Everything
//! else is looked up by name through the field weight table.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// RECORD
// =============================================================================

/// One catalog object: field name → optional string value.
///
/// Field names are namespaced (`dcterms:title`). When deserialized from JSON,
/// strings become `Some`, and `null` or any non-string value becomes `None`, so
/// downstream code only ever sees text or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, Value>", into = "BTreeMap<String, Option<String>>")]
pub struct Record {
    fields: BTreeMap<String, Option<String>>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter used heavily by tests and loaders.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), Some(value.into()));
        self
    }

    pub fn insert(&mut self, field: impl Into<String>, value: Option<String>) {
        self.fields.insert(field.into(), value);
    }

    /// The string value of a field, if present and non-null.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(|v| v.as_deref())
    }

    /// The identifier under `id_field`, if present and not blank.
    pub fn id(&self, id_field: &str) -> Option<&str> {
        self.get(id_field).filter(|id| !id.trim().is_empty())
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl From<BTreeMap<String, Value>> for Record {
    fn from(raw: BTreeMap<String, Value>) -> Self {
        let fields = raw
            .into_iter()
            .map(|(field, value)| {
                let text = match value {
                    Value::String(s) => Some(s),
                    _ => None,
                };
                (field, text)
            })
            .collect();
        Self { fields }
    }
}

impl From<Record> for BTreeMap<String, Option<String>> {
    fn from(record: Record) -> Self {
        record.fields
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), Some(v.into())))
                .collect(),
        }
    }
}

// =============================================================================
// SEARCH RESULT
// =============================================================================

/// A ranked hit. Recomputed per query, never stored.
///
/// `matched_fields` lists, per field, the indexed terms that matched one of the
/// query terms (after prefix/fuzzy expansion). Hosts use it for highlighting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub id: String,
    pub score: f64,
    pub matched_fields: BTreeMap<String, Vec<String>>,
}

// =============================================================================
// TERM SUGGESTION
// =============================================================================

/// A vocabulary entry of the terms index.
///
/// `frequency` counts occurrences, not documents: a term that appears twice in
/// one title and once in another record's description has frequency 3.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermSuggestion {
    pub term: String,
    pub frequency: u32,
    pub fields: BTreeSet<String>,
}
