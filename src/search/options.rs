// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-query options and their validation.
//!
//! Typed callers build [`SearchOptions`] directly and can only get the fuzzy
//! tolerance wrong. Loosely typed callers (WASM, JSON) go through
//! [`SearchOptions::from_json`], which also rejects wrongly typed values.

use crate::config::SearchConfig;
use crate::error::SearchError;
use serde_json::Value;

/// Typo tolerance for a query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fuzzy {
    /// `true` uses the configured default tolerance, `false` disables it.
    Enabled(bool),
    /// Fraction of the term length allowed as edits, in `[0, 1]`.
    Tolerance(f64),
}

/// Options for a single search. Unset values fall back to the config.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Fields that contribute to ranking. `None` means every configured field.
    pub active_fields: Option<Vec<String>>,
    pub fuzzy: Option<Fuzzy>,
    /// Prefix matching, on unless set to `false`.
    pub prefix: Option<bool>,
}

/// Options after defaults are applied and values checked.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ResolvedOptions {
    pub active_fields: Vec<String>,
    pub fuzzy_tolerance: f64,
    pub prefix: bool,
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.active_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn fuzzy(mut self, fuzzy: Fuzzy) -> Self {
        self.fuzzy = Some(fuzzy);
        self
    }

    pub fn prefix(mut self, prefix: bool) -> Self {
        self.prefix = Some(prefix);
        self
    }

    /// Parse options from a JSON object with camelCase keys
    /// (`activeFields`, `fuzzy`, `prefix`).
    ///
    /// `null` means "all defaults". Unknown keys are ignored. Non-string
    /// entries in `activeFields` are dropped.
    pub fn from_json(value: &Value) -> Result<Self, SearchError> {
        let object = match value {
            Value::Null => return Ok(Self::default()),
            Value::Object(object) => object,
            other => return Err(SearchError::InvalidOptions(json_type_name(other).into())),
        };

        let active_fields = match object.get("activeFields") {
            None | Some(Value::Null) => None,
            Some(Value::Array(items)) => Some(
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect(),
            ),
            Some(other) => {
                return Err(SearchError::InvalidOptions(format!(
                    "activeFields as {}",
                    json_type_name(other)
                )))
            }
        };

        let fuzzy = match object.get("fuzzy") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(enabled)) => Some(Fuzzy::Enabled(*enabled)),
            Some(Value::Number(n)) => {
                let tolerance = n.as_f64().unwrap_or(f64::NAN);
                Some(Fuzzy::Tolerance(tolerance))
            }
            Some(other) => return Err(SearchError::InvalidFuzzy(json_type_name(other).into())),
        };

        let prefix = match object.get("prefix") {
            None | Some(Value::Null) => None,
            Some(Value::Bool(prefix)) => Some(*prefix),
            Some(other) => return Err(SearchError::InvalidPrefix(json_type_name(other).into())),
        };

        let options = Self {
            active_fields,
            fuzzy,
            prefix,
        };
        options.validate()?;
        Ok(options)
    }

    /// Check values a typed caller can still get wrong.
    pub fn validate(&self) -> Result<(), SearchError> {
        if let Some(Fuzzy::Tolerance(tolerance)) = self.fuzzy {
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(SearchError::InvalidFuzzyTolerance(tolerance));
            }
        }
        Ok(())
    }

    pub(crate) fn resolve(&self, config: &SearchConfig) -> Result<ResolvedOptions, SearchError> {
        self.validate()?;

        let fuzzy_tolerance = match self.fuzzy {
            None | Some(Fuzzy::Enabled(true)) => config.fuzzy_tolerance,
            Some(Fuzzy::Enabled(false)) => 0.0,
            Some(Fuzzy::Tolerance(tolerance)) => tolerance,
        };

        Ok(ResolvedOptions {
            active_fields: self
                .active_fields
                .clone()
                .unwrap_or_else(|| config.field_names()),
            fuzzy_tolerance,
            prefix: self.prefix.unwrap_or(true),
        })
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
