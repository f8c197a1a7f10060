//! Prefix, fuzzy and AND matching, tokenization and case handling.

use super::common::{build_index, ids, make_record, sample_index};
use catalog_search::{Fuzzy, SearchOptions};

#[test]
fn test_prefix_completes_partial_words() {
    let index = sample_index();
    assert_eq!(ids(&index.search("neck", &SearchOptions::new()).unwrap()), vec!["MO-004"]);
    assert!(index
        .search("neck", &SearchOptions::new().prefix(false))
        .unwrap()
        .is_empty());
}

#[test]
fn test_fuzzy_tolerates_a_typo() {
    let index = sample_index();
    assert_eq!(ids(&index.search("shielf", &SearchOptions::new()).unwrap()), vec!["MO-003"]);

    let exact = SearchOptions::new().fuzzy(Fuzzy::Enabled(false));
    assert!(index.search("shielf", &exact).unwrap().is_empty());
}

#[test]
fn test_fuzzy_budget_scales_with_tolerance() {
    let index = sample_index();

    // Two edits from "grindstone"
    let default = index.search("grimdstome", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&default), vec!["MO-005"]);

    let tight = SearchOptions::new().fuzzy(Fuzzy::Tolerance(0.1));
    assert!(index.search("grimdstome", &tight).unwrap().is_empty());
}

#[test]
fn test_zero_tolerance_equals_fuzzy_off() {
    let index = sample_index();
    let zero = SearchOptions::new().fuzzy(Fuzzy::Tolerance(0.0));
    let off = SearchOptions::new().fuzzy(Fuzzy::Enabled(false));
    for query in ["shielf", "stone", "bas"] {
        assert_eq!(index.search(query, &zero).unwrap(), index.search(query, &off).unwrap());
    }
}

#[test]
fn test_every_term_must_match() {
    let index = sample_index();
    assert_eq!(ids(&index.search("basket stone", &SearchOptions::new()).unwrap()), vec!["MO-002"]);
    assert!(index
        .search("basket shield", &SearchOptions::new())
        .unwrap()
        .is_empty());
}

#[test]
fn test_terms_may_match_in_different_fields() {
    // "lola" is in the creator, "maireener" in the description
    let results = sample_index().search("lola maireener", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["MO-004"]);
    assert_eq!(results[0].matched_fields.len(), 2);
}

#[test]
fn test_hyphenated_query_splits_into_terms() {
    let results = sample_index()
        .search("stone-tempered", &SearchOptions::new())
        .unwrap();
    assert_eq!(ids(&results), vec!["MO-002"]);
}

#[test]
fn test_query_is_case_insensitive() {
    let index = sample_index();
    let lower = index.search("stone", &SearchOptions::new()).unwrap();
    assert_eq!(index.search("STONE", &SearchOptions::new()).unwrap(), lower);
    assert_eq!(index.search("  Stone ", &SearchOptions::new()).unwrap(), lower);
}

#[test]
fn test_diacritics_fold() {
    let index = build_index(&[make_record("D1", "Café table"), make_record("D2", "Naïve painting")]);
    assert_eq!(ids(&index.search("cafe", &SearchOptions::new()).unwrap()), vec!["D1"]);
    assert_eq!(ids(&index.search("naïve", &SearchOptions::new()).unwrap()), vec!["D2"]);
}

#[test]
fn test_punctuation_only_query_is_empty() {
    let index = sample_index();
    assert!(index.search("?!,;", &SearchOptions::new()).unwrap().is_empty());
    assert!(index.search("", &SearchOptions::new()).unwrap().is_empty());
}

#[test]
fn test_repeated_query_terms_do_not_change_membership() {
    let index = sample_index();
    let once = index.search("stone", &SearchOptions::new()).unwrap();
    let twice = index.search("stone stone", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&once), ids(&twice));
}
