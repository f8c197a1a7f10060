// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The record store: the authoritative set of catalog objects.
//!
//! Built once per data load and replaced wholesale on reload. Construction is
//! where bad rows get dropped, so every record inside a store is guaranteed to
//! carry a unique, non-blank identifier.

use crate::types::Record;
use serde::Deserialize;
use std::collections::HashMap;
use tracing::warn;

/// The two shapes a record file comes in.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RecordPayload {
    /// `[{"field": "value", ...}, ...]`
    Records(Vec<Record>),
    /// `{"values": [[header...], [row...], ...]}`, as exported from a sheet.
    Sheet { values: Vec<Vec<String>> },
}

/// Decode a record payload: a JSON array of objects or a sheet export.
///
/// Nothing is filtered here; that happens when a store is built.
pub fn records_from_json(value: serde_json::Value) -> Result<Vec<Record>, serde_json::Error> {
    Ok(match serde_json::from_value(value)? {
        RecordPayload::Records(records) => records,
        RecordPayload::Sheet { values } => match values.split_first() {
            Some((header, rows)) => rows_to_records(header, rows),
            None => Vec::new(),
        },
    })
}

/// Convert sheet-style rows into records.
///
/// Short rows are padded with `None`, empty cells become `None`, and cells
/// beyond the header are ignored.
pub fn rows_to_records(header: &[String], rows: &[Vec<String>]) -> Vec<Record> {
    rows.iter()
        .map(|row| {
            let mut record = Record::new();
            for (col, field) in header.iter().enumerate() {
                if field.trim().is_empty() {
                    continue;
                }
                let value = row.get(col).filter(|cell| !cell.is_empty()).cloned();
                record.insert(field.clone(), value);
            }
            record
        })
        .collect()
}

/// Validated, id-addressable collection of records in load order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    id_field: String,
    records: Vec<Record>,
    by_id: HashMap<String, usize>,
}

impl RecordStore {
    /// Keep records with a non-blank, not-yet-seen identifier.
    ///
    /// Records without an identifier are skipped. On duplicate identifiers the
    /// first record wins. Neither case fails the load.
    pub fn from_records<I>(id_field: &str, records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        let mut store = Self {
            id_field: id_field.to_string(),
            records: Vec::new(),
            by_id: HashMap::new(),
        };
        let mut missing_id = 0usize;

        for record in records {
            let Some(id) = record.id(id_field) else {
                missing_id += 1;
                continue;
            };
            if store.by_id.contains_key(id) {
                warn!(id, "skipping record with duplicate identifier");
                continue;
            }
            store.by_id.insert(id.to_string(), store.records.len());
            store.records.push(record);
        }

        if missing_id > 0 {
            warn!(
                skipped = missing_id,
                id_field, "skipping records with missing identifier"
            );
        }

        store
    }

    /// Build a store from sheet-style rows. See [`rows_to_records`].
    pub fn from_rows(id_field: &str, header: &[String], rows: &[Vec<String>]) -> Self {
        Self::from_records(id_field, rows_to_records(header, rows))
    }

    /// Look up a record by identifier. Empty or unknown ids yield `None`.
    pub fn get(&self, id: &str) -> Option<&Record> {
        if id.is_empty() {
            return None;
        }
        self.by_id.get(id).map(|&i| &self.records[i])
    }

    pub fn id_field(&self) -> &str {
        &self.id_field
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
