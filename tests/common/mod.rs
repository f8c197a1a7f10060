//! Shared test utilities and fixtures.

#![allow(dead_code)]

use catalog_search::controller::{ManualClock, QueryController};
use catalog_search::{Catalog, Record, SearchConfig, SearchIndex, SearchResult, TermsIndex};

// Re-export canonical fixtures from catalog_search::testing
pub use catalog_search::testing::{
    make_full_record, make_record, sample_records, ALTERNATIVE, CREATOR, DESCRIPTION, TITLE,
};

// ============================================================================
// BUILDERS
// ============================================================================

/// Search index over the sample records with the default config.
pub fn sample_index() -> SearchIndex {
    build_index(&sample_records())
}

pub fn build_index(records: &[Record]) -> SearchIndex {
    let mut index = SearchIndex::new(SearchConfig::default()).unwrap();
    index.build(records);
    index
}

pub fn build_terms(records: &[Record]) -> TermsIndex {
    let mut terms = TermsIndex::new(&SearchConfig::default());
    terms.build(records);
    terms
}

pub fn sample_catalog() -> Catalog {
    Catalog::from_records(SearchConfig::default(), &sample_records()).unwrap()
}

/// Controller on a manual clock, so cooldowns only pass when a test says so.
pub fn manual_controller() -> QueryController<ManualClock> {
    QueryController::with_clock(SearchConfig::default(), ManualClock::new())
}

// ============================================================================
// ASSERTIONS
// ============================================================================

pub fn ids(results: &[SearchResult]) -> Vec<&str> {
    results.iter().map(|r| r.id.as_str()).collect()
}

/// Results are sorted by descending score.
pub fn assert_ranked(results: &[SearchResult]) {
    for pair in results.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "results out of order: {} ({}) before {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}
