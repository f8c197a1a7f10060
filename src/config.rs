// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Field weight configuration: which record fields are searchable and how much
//! each one counts.
//!
//! The table is ordered and exhaustive. A field that is not listed here is never
//! tokenized, never scored and never suggested. Weights are relative multipliers,
//! not probabilities: a title hit at weight 3 counts three times a description
//! hit at weight 1.
//!
//! | Field                 | Weight |
//! |-----------------------|--------|
//! | `dcterms:title`       | 3      |
//! | `dcterms:alternative` | 2      |
//! | `dcterms:creator`     | 2      |
//! | `dcterms:description` | 1      |

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Field that uniquely identifies a catalog object.
pub const DEFAULT_ID_FIELD: &str = "dcterms:identifier.moooi";

/// Committed queries shorter than this (after trimming) never run.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Default fuzzy tolerance as a fraction of query term length.
pub const FUZZY_TOLERANCE: f64 = 0.2;

/// Default number of type-ahead suggestions.
pub const MAX_SUGGESTIONS: usize = 10;

/// Window after a commit during which competing commits are suppressed.
pub const COMMIT_COOLDOWN_MS: u64 = 100;

/// One row of the weight table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldWeight {
    pub field_name: String,
    pub weight: f64,
}

impl FieldWeight {
    pub fn new(field_name: impl Into<String>, weight: f64) -> Self {
        Self {
            field_name: field_name.into(),
            weight,
        }
    }
}

/// Static, load-time configuration shared by both indices and the controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchConfig {
    pub id_field: String,
    pub fields: Vec<FieldWeight>,
    pub min_query_length: usize,
    pub fuzzy_tolerance: f64,
    pub max_suggestions: usize,
    pub commit_cooldown_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            id_field: DEFAULT_ID_FIELD.to_string(),
            fields: vec![
                FieldWeight::new("dcterms:title", 3.0),
                FieldWeight::new("dcterms:alternative", 2.0),
                FieldWeight::new("dcterms:creator", 2.0),
                FieldWeight::new("dcterms:description", 1.0),
            ],
            min_query_length: MIN_QUERY_LENGTH,
            fuzzy_tolerance: FUZZY_TOLERANCE,
            max_suggestions: MAX_SUGGESTIONS,
            commit_cooldown_ms: COMMIT_COOLDOWN_MS,
        }
    }
}

impl SearchConfig {
    /// Build a config from `(field, weight)` pairs, keeping the other defaults.
    pub fn with_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            fields: fields
                .into_iter()
                .map(|(name, weight)| FieldWeight::new(name, weight))
                .collect(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON config. Missing keys fall back to defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_field.trim().is_empty() {
            return Err(ConfigError::EmptyIdField);
        }

        let mut seen = HashSet::with_capacity(self.fields.len());
        for field in &self.fields {
            if !seen.insert(field.field_name.as_str()) {
                return Err(ConfigError::DuplicateField(field.field_name.clone()));
            }
            if !field.weight.is_finite() || field.weight <= 0.0 {
                return Err(ConfigError::InvalidWeight {
                    field: field.field_name.clone(),
                    weight: field.weight,
                });
            }
        }

        if !(0.0..=1.0).contains(&self.fuzzy_tolerance) {
            return Err(ConfigError::InvalidFuzzyTolerance(self.fuzzy_tolerance));
        }

        Ok(())
    }

    /// All searchable field names, in table order.
    pub fn field_names(&self) -> Vec<String> {
        self.fields.iter().map(|f| f.field_name.clone()).collect()
    }

    /// Weight of a field, or 0 when it is not searchable.
    pub fn weight_of(&self, field_name: &str) -> f64 {
        self.fields
            .iter()
            .find(|f| f.field_name == field_name)
            .map_or(0.0, |f| f.weight)
    }

    pub fn is_searchable(&self, field_name: &str) -> bool {
        self.fields.iter().any(|f| f.field_name == field_name)
    }

    /// True when `fields` names every searchable field, in any order.
    ///
    /// Hosts use this to write "no restriction" instead of enumerating the set.
    pub fn is_full_set<S: AsRef<str>>(&self, fields: &[S]) -> bool {
        let selected: HashSet<&str> = fields.iter().map(AsRef::as_ref).collect();
        selected.len() == self.fields.len()
            && self
                .fields
                .iter()
                .all(|f| selected.contains(f.field_name.as_str()))
    }

    /// Keep only searchable names, drop duplicates, preserve order.
    pub fn sanitize_fields<S: AsRef<str>>(&self, fields: &[S]) -> Vec<String> {
        let mut seen = HashSet::new();
        fields
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| self.is_searchable(name))
            .filter(|name| seen.insert(*name))
            .map(str::to_string)
            .collect()
    }

    /// Serialize an active-field subset as a comma-separated parameter.
    ///
    /// `None` means "all fields" and should be omitted by the host. An empty
    /// string means the user explicitly deselected everything.
    pub fn fields_to_param<S: AsRef<str>>(&self, fields: &[S]) -> Option<String> {
        if self.is_full_set(fields) {
            return None;
        }
        Some(
            fields
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(","),
        )
    }

    /// Inverse of [`fields_to_param`](Self::fields_to_param).
    ///
    /// A missing parameter selects every field; a present one is parsed
    /// strictly, so `Some("")` yields an empty selection.
    pub fn fields_from_param(&self, param: Option<&str>) -> Vec<String> {
        match param {
            None => self.field_names(),
            Some(list) => {
                let names: Vec<&str> = list.split(',').filter(|s| !s.is_empty()).collect();
                self.sanitize_fields(&names)
            }
        }
    }
}
