// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search: where the indexes actually get used.
//!
//! The three-tier expansion (exact → prefix → fuzzy) finds typo'd and
//! half-typed words, and AND semantics across query terms keeps multi-word
//! queries precise.

mod engine;
mod options;
pub mod utils;

pub use engine::SearchIndex;
pub use options::{Fuzzy, SearchOptions};
