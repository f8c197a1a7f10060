//! Suggestions while typing, and keyboard navigation.

use super::common::{manual_controller, sample_catalog};
use catalog_search::controller::InputMode;
use catalog_search::{EventOutcome, InputEvent};

#[test]
fn test_suggestions_follow_the_last_word() {
    let catalog = sample_catalog();
    let mut c = manual_controller();

    c.handle(InputEvent::TextChanged("stone sh".into()), &catalog);
    assert_eq!(c.suggestions(), &["shield", "shell", "shells"]);

    c.handle(InputEvent::TextChanged("stone ".into()), &catalog);
    assert!(c.suggestions().is_empty());
}

#[test]
fn test_suggestions_capped_by_config() {
    let catalog = sample_catalog();
    let mut c = manual_controller();
    c.handle(InputEvent::TextChanged("s".into()), &catalog);
    assert!(c.suggestions().len() <= catalog.config().max_suggestions);
    assert!(!c.suggestions().is_empty());
}

#[test]
fn test_navigation_and_escape() {
    let catalog = sample_catalog();
    let mut c = manual_controller();

    c.handle(InputEvent::TextChanged("sh".into()), &catalog);
    c.handle(InputEvent::NavigateDown, &catalog);
    c.handle(InputEvent::NavigateDown, &catalog);
    assert_eq!(c.highlighted(), Some(1));

    // First escape closes the list, the second clears the query
    assert_eq!(c.handle(InputEvent::Escape, &catalog), EventOutcome::Updated);
    assert!(c.suggestions().is_empty());
    assert_eq!(c.raw_text(), "sh");
    assert_eq!(c.mode(), InputMode::Typing);

    c.handle(InputEvent::Escape, &catalog);
    assert_eq!(c.raw_text(), "");
    assert_eq!(c.commit_count(), 0);
}

#[test]
fn test_navigating_up_past_the_top_returns_to_typing() {
    let catalog = sample_catalog();
    let mut c = manual_controller();

    c.handle(InputEvent::TextChanged("shie".into()), &catalog);
    c.handle(InputEvent::NavigateDown, &catalog);
    c.handle(InputEvent::NavigateUp, &catalog);
    assert_eq!(c.highlighted(), None);

    // Submit now commits the typed text, not a suggestion
    c.handle(InputEvent::Submit, &catalog);
    assert_eq!(c.committed_text(), "shie");
    assert_eq!(c.results()[0].id, "MO-003");
}

#[test]
fn test_navigation_without_suggestions_is_ignored() {
    let catalog = sample_catalog();
    let mut c = manual_controller();
    c.handle(InputEvent::TextChanged("zzz".into()), &catalog);
    assert_eq!(c.handle(InputEvent::NavigateDown, &catalog), EventOutcome::Ignored);
    assert_eq!(c.highlighted(), None);
}
