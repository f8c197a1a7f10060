//! Suggestion ordering, limits and lifecycle.

use super::common::{build_terms, make_record, sample_records};
use catalog_search::{SearchConfig, TermsIndex};

#[test]
fn test_suggestions_rank_by_frequency_then_alphabet() {
    let terms = build_terms(&[
        make_record("P1", "canoe canoe carving"),
        make_record("P2", "canoe cape carving"),
        make_record("P3", "cabinet"),
    ]);
    assert_eq!(
        terms.suggestions("ca", 10),
        vec!["canoe", "carving", "cabinet", "cape"]
    );
}

#[test]
fn test_suggestions_respect_limit() {
    let terms = build_terms(&sample_records());
    let all = terms.suggestions("s", 100);
    assert!(all.len() > 2);
    assert_eq!(terms.suggestions("s", 2), all[..2].to_vec());
    assert!(terms.suggestions("s", 0).is_empty());
}

#[test]
fn test_suggestions_are_case_insensitive() {
    let terms = build_terms(&sample_records());
    assert_eq!(terms.suggestions("NECK", 5), terms.suggestions("neck", 5));
    assert_eq!(terms.suggestions("Neck", 5), vec!["necklace"]);
}

#[test]
fn test_suggestions_for_empty_or_unknown_prefix() {
    let terms = build_terms(&sample_records());
    assert!(terms.suggestions("", 10).is_empty());
    assert!(terms.suggestions("zz", 10).is_empty());
}

#[test]
fn test_suggestions_complete_hyphenated_words() {
    let terms = build_terms(&sample_records());
    assert_eq!(terms.suggestions("multi", 5), vec!["multi-strand"]);
}

#[test]
fn test_unbuilt_index_is_not_ready() {
    let terms = TermsIndex::new(&SearchConfig::default());
    assert!(!terms.is_ready());
    assert!(terms.suggestions("st", 10).is_empty());

    let empty = build_terms(&[]);
    assert!(empty.is_ready());
    assert_eq!(empty.term_count(), 0);
}

#[test]
fn test_rebuild_and_clear() {
    let mut terms = build_terms(&sample_records());
    terms.build(&[make_record("X1", "Bark canoe")]);
    assert_eq!(terms.term_count(), 2);
    assert!(terms.suggestions("st", 10).is_empty());

    terms.clear();
    assert!(!terms.is_ready());
    assert_eq!(terms.term_count(), 0);
}
