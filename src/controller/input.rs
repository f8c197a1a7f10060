// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Input modes and the transition table.
//!
//! Three independent events can commit a query: submit, blur and picking a
//! suggestion. A single keystroke often fires several of them, so after any
//! commit the mode sits in `Committing` for a short cooldown and every commit
//! attempt seen in that window is suppressed. While the user walks the
//! suggestion list with the keyboard, submit accepts the highlighted
//! suggestion instead of committing the typed text.
//!
//! ```text
//!              NavigateDown/Up (suggestions > 0)
//!   ┌────────┐ ─────────────────────────────────▶ ┌───────────────────────┐
//!   │ Typing │                                    │ NavigatingSuggestions │
//!   └────────┘ ◀───────────────────────────────── └───────────────────────┘
//!     │   ▲       Escape / Up past top / text          │
//!     │   │                                            │ Submit, Pick
//!     │   └──── cooldown elapsed, text change ───┐     ▼
//!     │ Submit, Pick, dirty Blur               ┌─┴───────────┐
//!     └──────────────────────────────────────▶ │ Committing  │ ◀─ commits suppressed
//!                                              └─────────────┘
//! ```

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    NavigatingSuggestions { highlighted: usize },
    Committing { since: Instant },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    TextChanged(String),
    NavigateDown,
    NavigateUp,
    Submit,
    Blur,
    PickSuggestion(usize),
    Escape,
}

/// Side effect the controller performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    EditText,
    Highlight(Option<usize>),
    AcceptSuggestion(usize),
    Commit,
    Suppress,
    ClearQuery,
    DismissSuggestions,
}

/// Facts about the controller a transition depends on.
#[derive(Debug, Clone, Copy)]
pub struct TransitionContext {
    pub suggestion_count: usize,
    /// Raw text differs from committed text.
    pub dirty: bool,
    pub now: Instant,
    pub cooldown: Duration,
}

/// `Committing` falls back to `Typing` once the cooldown has elapsed.
pub fn settle(mode: InputMode, now: Instant, cooldown: Duration) -> InputMode {
    match mode {
        InputMode::Committing { since } if now.saturating_duration_since(since) >= cooldown => {
            InputMode::Typing
        }
        other => other,
    }
}

pub fn transition(
    mode: InputMode,
    event: &InputEvent,
    ctx: &TransitionContext,
) -> (InputMode, Action) {
    use InputEvent as E;
    use InputMode as M;

    let committing = M::Committing { since: ctx.now };
    let count = ctx.suggestion_count;

    match (settle(mode, ctx.now, ctx.cooldown), event) {
        (_, E::TextChanged(_)) => (M::Typing, Action::EditText),

        (mode @ M::Committing { .. }, E::Submit | E::Blur | E::PickSuggestion(_)) => {
            (mode, Action::Suppress)
        }
        (mode @ M::Committing { .. }, E::NavigateDown | E::NavigateUp) => (mode, Action::None),
        (M::Committing { .. }, E::Escape) => (M::Typing, Action::ClearQuery),

        (M::Typing, E::NavigateDown) if count > 0 => {
            (M::NavigatingSuggestions { highlighted: 0 }, Action::Highlight(Some(0)))
        }
        (M::Typing, E::NavigateUp) if count > 0 => {
            let last = count - 1;
            (M::NavigatingSuggestions { highlighted: last }, Action::Highlight(Some(last)))
        }
        (M::Typing, E::NavigateDown | E::NavigateUp) => (M::Typing, Action::None),

        (M::NavigatingSuggestions { .. }, E::NavigateDown | E::NavigateUp) if count == 0 => {
            (M::Typing, Action::Highlight(None))
        }
        (M::NavigatingSuggestions { highlighted }, E::NavigateDown) => {
            let next = (highlighted + 1).min(count - 1);
            (M::NavigatingSuggestions { highlighted: next }, Action::Highlight(Some(next)))
        }
        (M::NavigatingSuggestions { highlighted: 0 }, E::NavigateUp) => {
            (M::Typing, Action::Highlight(None))
        }
        (M::NavigatingSuggestions { highlighted }, E::NavigateUp) => {
            let prev = highlighted.min(count) - 1;
            (M::NavigatingSuggestions { highlighted: prev }, Action::Highlight(Some(prev)))
        }

        (M::NavigatingSuggestions { highlighted }, E::Submit) if highlighted < count => {
            (committing, Action::AcceptSuggestion(highlighted))
        }
        (M::Typing | M::NavigatingSuggestions { .. }, E::Submit) => (committing, Action::Commit),

        (M::Typing | M::NavigatingSuggestions { .. }, E::PickSuggestion(i)) if *i < count => {
            (committing, Action::AcceptSuggestion(*i))
        }
        (mode, E::PickSuggestion(_)) => (mode, Action::None),

        (_, E::Blur) if ctx.dirty => (committing, Action::Commit),
        (M::NavigatingSuggestions { .. }, E::Blur) => (M::Typing, Action::DismissSuggestions),
        (mode, E::Blur) => (mode, Action::None),

        (M::NavigatingSuggestions { .. }, E::Escape) => (M::Typing, Action::DismissSuggestions),
        (M::Typing, E::Escape) => (M::Typing, Action::ClearQuery),
    }
}
