//! Option validation at the typed and JSON boundaries.

use super::common::sample_index;
use catalog_search::{Fuzzy, SearchError, SearchOptions};
use serde_json::json;

#[test]
fn test_out_of_range_tolerance_fails_before_searching() {
    let index = sample_index();
    for bad in [-0.5, 1.01] {
        let options = SearchOptions::new().fuzzy(Fuzzy::Tolerance(bad));
        assert_eq!(
            index.search("stone", &options),
            Err(SearchError::InvalidFuzzyTolerance(bad))
        );
    }

    let nan = SearchOptions::new().fuzzy(Fuzzy::Tolerance(f64::NAN));
    assert!(matches!(
        index.search("stone", &nan),
        Err(SearchError::InvalidFuzzyTolerance(_))
    ));
}

#[test]
fn test_boundary_tolerances_are_accepted() {
    let index = sample_index();
    for ok in [0.0, 1.0] {
        let options = SearchOptions::new().fuzzy(Fuzzy::Tolerance(ok));
        assert!(index.search("stone", &options).is_ok());
    }
}

#[test]
fn test_json_options_enforce_types() {
    assert_eq!(
        SearchOptions::from_json(&json!({ "prefix": "true" })),
        Err(SearchError::InvalidPrefix("string".into()))
    );
    assert_eq!(
        SearchOptions::from_json(&json!({ "prefix": 1 })),
        Err(SearchError::InvalidPrefix("number".into()))
    );
    assert_eq!(
        SearchOptions::from_json(&json!({ "fuzzy": [0.2] })),
        Err(SearchError::InvalidFuzzy("array".into()))
    );
}

#[test]
fn test_json_options_drive_search() {
    let index = sample_index();
    let options = SearchOptions::from_json(&json!({
        "activeFields": ["dcterms:description"],
        "fuzzy": false,
        "prefix": true,
    }))
    .unwrap();

    let results = index.search("green", &options).unwrap();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].id, "MO-001");
}

#[test]
fn test_error_messages() {
    assert_eq!(
        SearchError::NotInitialized.to_string(),
        "search index not initialized: call build() first or check is_ready()"
    );
    assert_eq!(
        SearchError::InvalidPrefix("string".into()).to_string(),
        "prefix must be a boolean, got string"
    );
}
