//! What counts as a term, and how often.

use super::common::{
    build_terms, make_full_record, make_record, sample_catalog, sample_records, CREATOR,
    DESCRIPTION, TITLE,
};
use catalog_search::{Record, SearchConfig, SearchOptions, TermsIndex};
use std::collections::BTreeSet;

#[test]
fn test_hyphenated_words_stay_whole() {
    let terms = build_terms(&sample_records());
    assert!(terms.term_details("stone-tempered").is_some());
    assert!(terms.term_details("multi-strand").is_some());
    assert!(terms.term_details("tempered").is_none());
}

#[test]
fn test_edge_punctuation_is_trimmed() {
    let terms = build_terms(&[make_record("P1", "'Quoted' word: note! (aside) end.")]);
    let all: BTreeSet<&str> = terms.all_terms().iter().map(String::as_str).collect();
    assert_eq!(all, BTreeSet::from(["aside", "end", "note", "quoted", "word"]));
}

#[test]
fn test_frequency_counts_every_occurrence() {
    let terms = build_terms(&[
        make_full_record("P1", "Stone stone", "Unknown", "A stone tool"),
        make_record("P2", "Grinding stone"),
    ]);
    let stone = terms.term_details("STONE").unwrap();
    assert_eq!(stone.frequency, 4);
    assert_eq!(
        stone.fields,
        BTreeSet::from([TITLE.to_string(), DESCRIPTION.to_string()])
    );
}

#[test]
fn test_fields_record_where_a_term_was_seen() {
    let terms = build_terms(&sample_records());
    let maker = terms.term_details("maker").unwrap();
    assert_eq!(maker.fields, BTreeSet::from([CREATOR.to_string()]));
    assert_eq!(maker.frequency, 3);
}

#[test]
fn test_single_characters_are_dropped() {
    let terms = build_terms(&[make_record("P1", "A b c axe")]);
    assert_eq!(terms.all_terms(), &["axe".to_string()]);
}

#[test]
fn test_non_searchable_fields_are_ignored() {
    let record = make_record("P1", "Canoe").with("dcterms:subject", "watercraft");
    let terms = build_terms(&[record]);
    assert!(terms.term_details("watercraft").is_none());
    // The identifier field is not searchable either
    assert!(terms.term_details("p1").is_none());
}

#[test]
fn test_null_values_are_skipped() {
    let mut record = Record::new();
    record.insert(TITLE, None);
    record.insert(DESCRIPTION, Some("Bark".into()));
    let terms = build_terms(&[record]);
    assert_eq!(terms.term_count(), 1);
}

#[test]
fn test_custom_field_table_limits_the_vocabulary() {
    let config = SearchConfig::with_fields([(TITLE, 1.0)]);
    let mut terms = TermsIndex::new(&config);
    terms.build(&sample_records());
    assert!(terms.term_details("basket").is_some());
    assert!(terms.term_details("greenstone").is_none());
}

#[test]
fn test_records_dropped_at_load_add_no_terms() {
    let catalog = sample_catalog();
    let terms = catalog.terms_index();

    // Only in the record without an identifier
    assert!(terms.term_details("unaccessioned").is_none());
    assert!(catalog.suggestions("unacc", 10).is_empty());
    // Only in the record repeating MO-001
    assert!(terms.term_details("duplicate").is_none());
    assert!(terms.term_details("entry").is_none());
    // Still counted once per kept record
    assert_eq!(terms.term_details("stone").unwrap().frequency, 2);
}

#[test]
fn test_every_suggestion_finds_a_record() {
    let catalog = sample_catalog();
    for term in catalog.terms_index().all_terms() {
        let results = catalog.search(term, &SearchOptions::new()).unwrap();
        assert!(!results.is_empty(), "suggested {:?} finds nothing", term);
    }
}
