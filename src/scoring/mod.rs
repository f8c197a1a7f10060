// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how a hit in one field turns into a number.
//!
//! Relevance is linear in the configured field weight. Within a field, BM25+
//! rewards rare terms and short fields; across match kinds, an exact hit beats
//! a prefix hit, which beats a typo.

mod core;

pub use self::core::*;
