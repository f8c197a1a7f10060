// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions and record file loading.
//!
//! Every subcommand takes a record file and builds the catalog in memory
//! before answering. Record files are either a JSON array of objects or a
//! `{"values": [[header...], [row...]]}` sheet export.

pub mod display;

use anyhow::{Context, Result};
use catalog_search::catalog::Catalog;
use catalog_search::config::SearchConfig;
use catalog_search::records::records_from_json;
use catalog_search::types::Record;
use clap::{Parser, Subcommand};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "catalog-search",
    about = "Full-text search and type-ahead suggestions over museum catalog records",
    version
)]
pub struct Cli {
    /// Field weight config (JSON); defaults to the built-in catalog fields
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search records and print ranked results
    Search {
        /// Record file (JSON array or sheet export)
        records: PathBuf,

        /// Search query
        query: String,

        /// Restrict ranking to these fields (comma-separated)
        #[arg(long, value_delimiter = ',')]
        fields: Option<Vec<String>>,

        /// Fuzzy tolerance between 0 and 1
        #[arg(long, conflicts_with = "no_fuzzy")]
        fuzzy: Option<f64>,

        /// Exact and prefix matches only
        #[arg(long)]
        no_fuzzy: bool,

        /// Disable prefix matching
        #[arg(long)]
        no_prefix: bool,

        /// Maximum number of results to print
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Suggest completions for a prefix
    Suggest {
        /// Record file (JSON array or sheet export)
        records: PathBuf,

        /// Prefix to complete
        prefix: String,

        /// Maximum number of suggestions
        #[arg(short = 'n', long, default_value = "10")]
        limit: usize,

        /// Print suggestions as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show frequency and fields of a single term
    Term {
        /// Record file (JSON array or sheet export)
        records: PathBuf,

        /// Term to look up
        term: String,
    },

    /// Summarize a record file: documents, vocabulary, top terms
    Inspect {
        /// Record file (JSON array or sheet export)
        records: PathBuf,
    },
}

/// Read the config file, or fall back to the default table.
pub fn load_config(path: Option<&Path>) -> Result<SearchConfig> {
    match path {
        Some(path) => SearchConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(SearchConfig::default()),
    }
}

/// Read and decode a record file without filtering it.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&text)
        .with_context(|| format!("{} is not valid JSON", path.display()))?;
    records_from_json(value).with_context(|| {
        format!(
            "{} is neither a record array nor a {{\"values\": [...]}} sheet export",
            path.display()
        )
    })
}

/// Load config and records and build the catalog.
pub fn load_catalog(records: &Path, config: Option<&Path>) -> Result<Catalog> {
    let config = load_config(config)?;
    let records = load_records(records)?;
    Catalog::from_records(config, &records).context("invalid search config")
}
