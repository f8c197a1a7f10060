// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Only precondition violations are errors. Bad records are skipped at build
//! time and unknown ids or terms come back as `None`, so nothing in here is
//! ever raised because of the data itself.

use thiserror::Error;

/// A query was issued with options the caller should have validated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// `search` was called before `build`, or after `clear`.
    #[error("search index not initialized: call build() first or check is_ready()")]
    NotInitialized,

    /// Numeric fuzzy tolerance outside `[0, 1]` (or NaN).
    #[error("fuzzy tolerance must be between 0 and 1, got {0}")]
    InvalidFuzzyTolerance(f64),

    /// `fuzzy` option that is neither a boolean nor a number.
    #[error("fuzzy must be a boolean or a number, got {0}")]
    InvalidFuzzy(String),

    /// Options passed as something other than an object.
    #[error("search options must be an object, got {0}")]
    InvalidOptions(String),

    /// `prefix` option that is not a boolean.
    #[error("prefix must be a boolean, got {0}")]
    InvalidPrefix(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// The field weight table (or one of its derived constants) is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("identifier field name must not be empty")]
    EmptyIdField,

    #[error("searchable field '{0}' is listed more than once")]
    DuplicateField(String),

    #[error("weight for field '{field}' must be a positive finite number, got {weight}")]
    InvalidWeight { field: String, weight: f64 },

    #[error("default fuzzy tolerance must be between 0 and 1, got {0}")]
    InvalidFuzzyTolerance(f64),

    #[error("failed to parse search config: {0}")]
    Parse(String),
}
