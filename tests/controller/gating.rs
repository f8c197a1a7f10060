//! When queries run, and that results never go stale.

use super::common::{
    ids, make_record, manual_controller, sample_catalog, sample_records, DESCRIPTION, TITLE,
};
use catalog_search::{Catalog, InputEvent, SearchConfig};
use std::time::Duration;

const PAST_COOLDOWN: Duration = Duration::from_millis(150);

#[test]
fn test_short_queries_do_not_run() {
    let catalog = sample_catalog();
    let index = catalog.search_index();
    let mut c = manual_controller();

    c.commit_with_text(" s ", index);
    assert_eq!(c.committed_text(), "s");
    assert!(c.results().is_empty());

    c.clock().advance(PAST_COOLDOWN);
    c.commit_with_text("st", index);
    assert!(!c.results().is_empty());
}

#[test]
fn test_results_follow_the_latest_commit() {
    let catalog = sample_catalog();
    let index = catalog.search_index();
    let mut c = manual_controller();

    c.commit_with_text("stone", index);
    assert!(!c.results().is_empty());

    c.clock().advance(PAST_COOLDOWN);
    c.commit_with_text("x", index);
    assert!(c.results().is_empty());
}

#[test]
fn test_query_before_index_ready_runs_once_ready() {
    let mut catalog = Catalog::new(SearchConfig::default()).unwrap();
    let mut c = manual_controller();

    c.handle(InputEvent::TextChanged("basket".into()), &catalog);
    c.handle(InputEvent::Submit, &catalog);
    assert_eq!(c.committed_text(), "basket");
    assert!(c.results().is_empty());
    assert!(!c.state().index_ready);

    catalog.load(&sample_records());
    assert!(c.sync_index(catalog.search_index()));
    assert!(c.state().index_ready);
    assert_eq!(ids(c.results()), vec!["MO-002"]);

    // No change, no recompute
    assert!(!c.sync_index(catalog.search_index()));
}

#[test]
fn test_reload_recomputes_results() {
    let mut catalog = sample_catalog();
    let mut c = manual_controller();
    c.commit_with_text("basket", catalog.search_index());
    assert_eq!(ids(c.results()), vec!["MO-002"]);

    // Still ready after the reload, but the collection is different
    catalog.load(&[make_record("NEW-1", "Carved canoe")]);
    assert!(c.sync_index(catalog.search_index()));
    assert!(c.state().index_ready);
    assert!(c.results().is_empty());

    catalog.load(&[
        make_record("NEW-1", "Carved canoe"),
        make_record("NEW-2", "Coiled basket"),
    ]);
    assert!(c.sync_index(catalog.search_index()));
    assert_eq!(ids(c.results()), vec!["NEW-2"]);
}

#[test]
fn test_reload_is_picked_up_by_the_next_event() {
    let mut catalog = sample_catalog();
    let mut c = manual_controller();
    c.handle(InputEvent::TextChanged("basket".into()), &catalog);
    c.handle(InputEvent::Submit, &catalog);
    assert_eq!(ids(c.results()), vec!["MO-002"]);

    catalog.load(&[make_record("NEW-2", "Coiled basket")]);
    c.handle(InputEvent::NavigateDown, &catalog);
    assert_eq!(ids(c.results()), vec!["NEW-2"]);
    assert_eq!(c.commit_count(), 1);
}

#[test]
fn test_direct_api_sees_a_ready_index() {
    let catalog = sample_catalog();
    let index = catalog.search_index();

    let mut c = manual_controller();
    c.set_raw_text("basket", catalog.terms_index());
    c.commit(index);
    assert!(c.state().index_ready);
    assert_eq!(ids(c.results()), vec!["MO-002"]);

    let mut c = manual_controller();
    c.toggle_field(DESCRIPTION, index);
    assert!(c.state().index_ready);

    let mut c = manual_controller();
    c.set_active_fields(&[TITLE], index);
    assert!(c.state().index_ready);
}

#[test]
fn test_index_cleared_empties_results() {
    let mut catalog = sample_catalog();
    let mut c = manual_controller();
    c.commit_with_text("stone", catalog.search_index());
    assert!(!c.results().is_empty());

    catalog.clear();
    assert!(c.sync_index(catalog.search_index()));
    assert!(c.results().is_empty());
}

#[test]
fn test_field_toggle_reruns_without_cooldown() {
    let catalog = sample_catalog();
    let index = catalog.search_index();
    let mut c = manual_controller();

    c.commit_with_text("stone", index);
    assert_eq!(c.results().len(), 3);

    // Immediately after the commit, still inside the cooldown
    c.toggle_field(TITLE, index);
    assert_eq!(ids(c.results()), vec!["MO-002"]);
    assert_eq!(c.commit_count(), 1);

    c.toggle_field(TITLE, index);
    assert_eq!(c.results().len(), 3);
    assert_eq!(c.active_fields().last().map(String::as_str), Some(TITLE));
    assert!(c.has_all_fields());
}

#[test]
fn test_no_active_fields_means_no_results() {
    let catalog = sample_catalog();
    let index = catalog.search_index();
    let mut c = manual_controller();
    c.commit_with_text("stone", index);

    c.set_active_fields(&["dcterms:bogus"], index);
    assert!(c.active_fields().is_empty());
    assert!(c.results().is_empty());

    c.set_active_fields(&[DESCRIPTION], index);
    assert_eq!(ids(c.results()), vec!["MO-002"]);
    assert!(!c.has_all_fields());
}

#[test]
fn test_clear_empties_everything() {
    let catalog = sample_catalog();
    let mut c = manual_controller();
    c.handle(InputEvent::TextChanged("stone".into()), &catalog);
    c.handle(InputEvent::Submit, &catalog);
    assert!(!c.results().is_empty());

    c.clear();
    assert_eq!(c.raw_text(), "");
    assert_eq!(c.committed_text(), "");
    assert!(c.results().is_empty());
    assert!(c.suggestions().is_empty());
    assert_eq!(c.commit_count(), 1);
}
