//! Only active, configured fields ever contribute to a match.

use super::common::{build_index, ids, make_record, sample_index, ALTERNATIVE, DESCRIPTION, TITLE};
use catalog_search::SearchOptions;

#[test]
fn test_inactive_field_cannot_match() {
    let index = sample_index();

    let title_only = SearchOptions::new().fields([TITLE]);
    assert!(index.search("greenstone", &title_only).unwrap().is_empty());

    let description = SearchOptions::new().fields([DESCRIPTION]);
    assert_eq!(ids(&index.search("greenstone", &description).unwrap()), vec!["MO-001"]);
}

#[test]
fn test_matched_fields_exclude_inactive_fields() {
    let options = SearchOptions::new().fields([DESCRIPTION]);
    let results = sample_index().search("stone", &options).unwrap();

    assert_eq!(ids(&results), vec!["MO-002"]);
    assert!(results
        .iter()
        .all(|r| r.matched_fields.keys().all(|f| f == DESCRIPTION)));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let index = sample_index();
    let with_bogus = SearchOptions::new().fields([TITLE, "dcterms:bogus"]);
    let title_only = SearchOptions::new().fields([TITLE]);
    assert_eq!(
        index.search("stone", &with_bogus).unwrap(),
        index.search("stone", &title_only).unwrap()
    );

    let only_bogus = SearchOptions::new().fields(["dcterms:bogus"]);
    assert!(index.search("stone", &only_bogus).unwrap().is_empty());
}

#[test]
fn test_empty_field_set_returns_nothing() {
    let options = SearchOptions::new().fields(Vec::<String>::new());
    assert!(sample_index().search("stone", &options).unwrap().is_empty());
}

#[test]
fn test_unconfigured_fields_are_never_indexed() {
    let index = build_index(&[make_record("S1", "Bark shield").with("dcterms:subject", "canoe")]);
    assert!(index.search("canoe", &SearchOptions::new()).unwrap().is_empty());

    let options = SearchOptions::new().fields(["dcterms:subject"]);
    assert!(index.search("canoe", &options).unwrap().is_empty());
}

#[test]
fn test_alternative_title_is_searchable() {
    let index = sample_index();
    assert_eq!(ids(&index.search("kanganapuri", &SearchOptions::new()).unwrap()), vec!["MO-004"]);

    let options = SearchOptions::new().fields([TITLE, DESCRIPTION]);
    assert!(index.search("kanganapuri", &options).unwrap().is_empty());

    let options = SearchOptions::new().fields([ALTERNATIVE]);
    assert_eq!(ids(&index.search("dilly", &options).unwrap()), vec!["MO-002"]);
}
