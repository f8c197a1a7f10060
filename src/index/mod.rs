// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index construction: the data structures behind queries and suggestions.
//!
//! Two structures, built from the same records and the same field table:
//! - **Inverted index**: field-scoped postings for ranked search
//! - **Terms index**: frequency-ranked vocabulary for autocomplete

mod inverted;
mod terms;

pub use inverted::*;
pub use terms::*;
