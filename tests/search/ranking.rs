//! Ranking: field weights, match kinds and tie order.

use super::common::{assert_ranked, build_index, ids, make_record, sample_index, DESCRIPTION, TITLE};
use catalog_search::{Fuzzy, SearchOptions};

fn exact_only() -> SearchOptions {
    SearchOptions::new().prefix(false).fuzzy(Fuzzy::Enabled(false))
}

#[test]
fn test_title_hits_outrank_description_hits() {
    let results = sample_index().search("stone", &exact_only()).unwrap();

    assert_eq!(results.len(), 3);
    assert_ranked(&results);
    // MO-002 only mentions stone in its description
    assert_eq!(results.last().unwrap().id, "MO-002");
}

#[test]
fn test_exact_outranks_prefix() {
    let index = build_index(&[make_record("A", "shellfish"), make_record("B", "shell")]);
    let results = index.search("shell", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["B", "A"]);
}

#[test]
fn test_exact_outranks_fuzzy() {
    let index = build_index(&[make_record("A", "bosket"), make_record("B", "basket")]);
    let results = index.search("basket", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["B", "A"]);
}

#[test]
fn test_shorter_completion_outranks_longer() {
    let index = build_index(&[make_record("A", "carvings"), make_record("B", "carved")]);
    let results = index.search("carv", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["B", "A"]);
}

#[test]
fn test_ties_keep_load_order() {
    let index = build_index(&[
        make_record("C2", "bark canoe"),
        make_record("C1", "bark canoe"),
        make_record("C3", "bark canoe"),
    ]);
    let results = index.search("canoe", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["C2", "C1", "C3"]);
    assert_eq!(results[0].score, results[2].score);
}

#[test]
fn test_matched_fields_report_terms_per_field() {
    let results = sample_index().search("stone axe", &SearchOptions::new()).unwrap();
    assert_eq!(ids(&results), vec!["MO-001"]);

    let matched = &results[0].matched_fields;
    assert_eq!(matched[TITLE], vec!["axe", "stone"]);
    assert_eq!(matched[DESCRIPTION], vec!["axe"]);
    assert_eq!(matched.len(), 2);
}

#[test]
fn test_multi_term_scores_add_up() {
    let index = sample_index();
    let single = index.search("shield", &exact_only()).unwrap();
    let both = index.search("carved shield", &exact_only()).unwrap();
    assert_eq!(ids(&both), vec!["MO-003"]);
    assert!(both[0].score > single[0].score);
}
