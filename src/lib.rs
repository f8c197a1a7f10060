// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search and type-ahead suggestions for museum catalogs.
//!
//! Records are flat maps of field name to optional text. A weight table
//! decides which fields are searchable and how much each counts. From the same
//! records two independent indices are built:
//!
//! - [`SearchIndex`]: field-scoped inverted index ranked with BM25+, with
//!   prefix and fuzzy expansion and AND semantics across query terms
//! - [`TermsIndex`]: frequency-ranked vocabulary for suggestions, which keeps
//!   hyphenated words whole
//!
//! [`QueryController`] sits on top and turns UI events into exactly one commit
//! per user intent, recomputing results only from committed text.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ RecordStore  │────▶│ SearchIndex  │◀────│ QueryController  │
//! │ (records.rs) │     │ (search/)    │     │ (controller/)    │
//! └──────────────┘     └──────────────┘     └──────────────────┘
//!        │                                      │
//!        ▼                                      ▼
//! ┌──────────────┐                      ┌──────────────────┐
//! │ TermsIndex   │◀─────────────────────│  suggestions     │
//! │ (index/)     │                      │                  │
//! └──────────────┘                      └──────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use catalog_search::{Catalog, SearchConfig, SearchOptions, Record};
//!
//! let records = vec![
//!     Record::new()
//!         .with("dcterms:identifier.moooi", "MO-1")
//!         .with("dcterms:title", "Stone axe head"),
//!     Record::new()
//!         .with("dcterms:identifier.moooi", "MO-2")
//!         .with("dcterms:title", "Woven basket"),
//! ];
//! let catalog = Catalog::from_records(SearchConfig::default(), &records).unwrap();
//!
//! let results = catalog.search("ston", &SearchOptions::new()).unwrap();
//! assert_eq!(results[0].id, "MO-1");
//! assert_eq!(catalog.suggestions("ba", 5), vec!["basket"]);
//! ```

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod records;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod tokenize;
pub mod types;
pub mod util;

#[cfg(feature = "wasm")]
mod wasm;

pub use catalog::{Catalog, SharedCatalog};
pub use config::{FieldWeight, SearchConfig};
pub use controller::{EventOutcome, InputEvent, QueryController, QueryState};
pub use error::{ConfigError, SearchError};
pub use index::TermsIndex;
pub use records::RecordStore;
pub use search::{Fuzzy, SearchIndex, SearchOptions};
pub use types::{Record, SearchResult, TermSuggestion};
