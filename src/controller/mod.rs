// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query controller: user input in, results and suggestions out.
//!
//! Text changes never query on their own. Results are recomputed on a
//! commit, a field change and the index becoming ready, and always from the
//! committed text, so what is shown never belongs to an older query or field
//! set.
//!
//! ```
//! use catalog_search::catalog::Catalog;
//! use catalog_search::config::SearchConfig;
//! use catalog_search::controller::{InputEvent, QueryController};
//! use catalog_search::testing::sample_records;
//!
//! let catalog = Catalog::from_records(SearchConfig::default(), &sample_records()).unwrap();
//! let mut controller = QueryController::new(catalog.config().clone());
//!
//! controller.handle(InputEvent::TextChanged("basket".into()), &catalog);
//! assert!(controller.results().is_empty());
//!
//! controller.handle(InputEvent::Submit, &catalog);
//! assert_eq!(controller.results()[0].id, "MO-002");
//! ```

mod clock;
mod input;
mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use input::{settle, transition, Action, InputEvent, InputMode, TransitionContext};
pub use state::{compute_results, should_search, QueryState};

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::index::TermsIndex;
use crate::search::SearchIndex;
use crate::types::SearchResult;
use std::time::Duration;
use tracing::{debug, error};

/// What an event did to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// Committed text changed (or was re-committed) and results were recomputed.
    Committed,
    /// A commit attempt arrived inside the cooldown and was dropped.
    Suppressed,
    /// Something other than a commit changed.
    Updated,
    Ignored,
}

#[derive(Debug)]
pub struct QueryController<C: Clock = SystemClock> {
    config: SearchConfig,
    state: QueryState,
    mode: InputMode,
    suggestions: Vec<String>,
    commits: usize,
    /// Generation of the index the current results were computed against.
    seen_generation: u64,
    clock: C,
}

impl QueryController<SystemClock> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> QueryController<C> {
    pub fn with_clock(config: SearchConfig, clock: C) -> Self {
        Self {
            state: QueryState::new(&config),
            config,
            mode: InputMode::Typing,
            suggestions: Vec::new(),
            commits: 0,
            seen_generation: 0,
            clock,
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn raw_text(&self) -> &str {
        &self.state.raw_text
    }

    pub fn committed_text(&self) -> &str {
        &self.state.committed_text
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.state.results
    }

    pub fn active_fields(&self) -> &[String] {
        &self.state.active_fields
    }

    /// Every configured field is active, i.e. no restriction.
    pub fn has_all_fields(&self) -> bool {
        self.config.is_full_set(&self.state.active_fields)
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self.mode {
            InputMode::NavigatingSuggestions { highlighted } => Some(highlighted),
            _ => None,
        }
    }

    /// Current mode, with an expired cooldown already lapsed to `Typing`.
    pub fn mode(&self) -> InputMode {
        settle(self.mode, self.clock.now(), self.cooldown())
    }

    /// Logical commits since construction.
    pub fn commit_count(&self) -> usize {
        self.commits
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn cooldown(&self) -> Duration {
        Duration::from_millis(self.config.commit_cooldown_ms)
    }

    /// Route a UI event through the transition table.
    pub fn handle(&mut self, event: InputEvent, catalog: &Catalog) -> EventOutcome {
        self.sync_index(catalog.search_index());

        let ctx = TransitionContext {
            suggestion_count: self.suggestions.len(),
            dirty: self.state.is_dirty(),
            now: self.clock.now(),
            cooldown: self.cooldown(),
        };
        let (mode, action) = transition(self.mode, &event, &ctx);
        debug!(?event, ?action, "input event");
        self.mode = mode;

        match action {
            Action::None => EventOutcome::Ignored,
            Action::EditText => {
                if let InputEvent::TextChanged(text) = event {
                    self.set_raw_text(text, catalog.terms_index());
                }
                EventOutcome::Updated
            }
            Action::Highlight(_) => EventOutcome::Updated,
            Action::AcceptSuggestion(i) => match self.suggestions.get(i).cloned() {
                Some(suggestion) => {
                    let text = complete_last_word(&self.state.raw_text, &suggestion);
                    self.apply_commit(Some(text), catalog.search_index())
                }
                None => EventOutcome::Ignored,
            },
            Action::Commit => self.apply_commit(None, catalog.search_index()),
            Action::Suppress => {
                debug!("commit suppressed during cooldown");
                EventOutcome::Suppressed
            }
            Action::ClearQuery => {
                self.clear();
                EventOutcome::Updated
            }
            Action::DismissSuggestions => {
                self.suggestions.clear();
                EventOutcome::Updated
            }
        }
    }

    /// Update the typed text and refresh suggestions for its last word.
    /// Never queries.
    pub fn set_raw_text(&mut self, text: impl Into<String>, terms: &TermsIndex) {
        self.state.raw_text = text.into();
        self.mode = InputMode::Typing;

        let last_word = self
            .state
            .raw_text
            .rsplit(char::is_whitespace)
            .next()
            .unwrap_or_default();
        self.suggestions = terms.suggestions(last_word, self.config.max_suggestions);
    }

    /// Commit the raw text, unless another commit just happened.
    pub fn commit(&mut self, index: &SearchIndex) -> EventOutcome {
        self.guarded_commit(None, index)
    }

    /// Replace the raw text and commit it, unless another commit just happened.
    pub fn commit_with_text(&mut self, text: impl Into<String>, index: &SearchIndex) -> EventOutcome {
        self.guarded_commit(Some(text.into()), index)
    }

    fn guarded_commit(&mut self, text: Option<String>, index: &SearchIndex) -> EventOutcome {
        self.sync_index(index);
        self.mode = self.mode();
        if let InputMode::Committing { .. } = self.mode {
            debug!("commit suppressed during cooldown");
            return EventOutcome::Suppressed;
        }
        self.apply_commit(text, index)
    }

    fn apply_commit(&mut self, text: Option<String>, index: &SearchIndex) -> EventOutcome {
        if let Some(text) = text {
            self.state.raw_text = text;
        }
        self.state.committed_text = self.state.raw_text.trim().to_string();
        self.mode = InputMode::Committing {
            since: self.clock.now(),
        };
        self.commits += 1;
        self.suggestions.clear();

        debug!(query = self.state.committed_text.as_str(), "query committed");
        self.refresh_results(index);
        EventOutcome::Committed
    }

    /// Add or remove a field and re-run the committed query. Unconfigured
    /// field names are ignored.
    pub fn toggle_field(&mut self, field: &str, index: &SearchIndex) -> EventOutcome {
        self.sync_index(index);
        if !self.config.is_searchable(field) {
            return EventOutcome::Ignored;
        }
        let fields = &mut self.state.active_fields;
        match fields.iter().position(|f| f == field) {
            Some(i) => {
                fields.remove(i);
            }
            None => fields.push(field.to_string()),
        }
        self.refresh_results(index);
        EventOutcome::Updated
    }

    /// Replace the active fields (unconfigured names dropped) and re-run the
    /// committed query.
    pub fn set_active_fields<S: AsRef<str>>(&mut self, fields: &[S], index: &SearchIndex) {
        self.sync_index(index);
        self.state.active_fields = self.config.sanitize_fields(fields);
        self.refresh_results(index);
    }

    /// Empty the query, its results and the suggestions. Not a commit.
    pub fn clear(&mut self) {
        self.state.raw_text.clear();
        self.state.committed_text.clear();
        self.state.results.clear();
        self.suggestions.clear();
        self.mode = InputMode::Typing;
    }

    /// Pick up a rebuilt, cleared or newly ready index. Any change re-runs the
    /// committed query, so a query typed during loading produces results once
    /// the index is built and results never outlive a reload.
    ///
    /// Returns whether the index changed since the last sync.
    pub fn sync_index(&mut self, index: &SearchIndex) -> bool {
        let generation = index.generation();
        if generation == self.seen_generation {
            return false;
        }
        self.seen_generation = generation;
        self.state.index_ready = index.is_ready();
        debug!(generation, ready = self.state.index_ready, "index changed");
        self.refresh_results(index);
        true
    }

    fn refresh_results(&mut self, index: &SearchIndex) {
        match compute_results(&self.state, index, &self.config) {
            Ok(results) => self.state.results = results,
            Err(err) => {
                error!(error = %err, "query failed");
                self.state.results.clear();
            }
        }
    }
}

/// Replace the last whitespace-delimited word of `text` with `word`.
fn complete_last_word(text: &str, word: &str) -> String {
    match text.rsplit_once(char::is_whitespace) {
        Some((head, _)) => format!("{head} {word}"),
        None => word.to_string(),
    }
}
