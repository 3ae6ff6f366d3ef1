//! Event handling and state transition logic.
//!
//! This module implements the interaction controller: it processes user
//! input, timer expiries and retrieval results, translating them into state
//! changes and action sequences.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. Events arrive from the plugin runtime
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `AppState` methods
//! 4. Actions are collected and returned for execution
//!
//! Some events are refined into others before they touch state: a timer
//! expiry becomes `SettledQueryChanged` when the debouncer emits, a
//! retrieval result becomes `LoadSucceeded` or `LoadFailed` once decoded,
//! and `ActivateTag` becomes `TagClicked` for the tag under the cursor.
//!
//! # Event Types
//!
//! - **Query**: `QueryChanged`, `Char`, `Backspace`, `DebounceElapsed`,
//!   `SettledQueryChanged`, `Reset`, `TagClicked`
//! - **Navigation**: `SelectNext`, `SelectPrevious`, `TagNext`, `TagPrevious`,
//!   `ActivateTag`, `FocusSearch`, `FocusResults`, `CloseFocus`
//! - **Load**: `LoadStarted`, `ResponseReceived`, `LoadSucceeded`, `LoadFailed`
//! - **Lifecycle**: `Teardown`
//!
//! Once `Teardown` has been handled every later event is ignored.
//!
//! # Example
//!
//! ```rust
//! use advocate_directory::{handle_event, AppState, Event, Theme};
//! use std::time::Duration;
//!
//! let mut state = AppState::new(Theme::default(), "http://localhost:3000/api/advocates", Duration::from_millis(300));
//! let (_render, actions) = handle_event(&mut state, &Event::LoadStarted)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), advocate_directory::DirectoryError>(())
//! ```

use crate::app::{Action, AppState, InputMode, RequestContext};
use crate::domain::error::Result;
use crate::domain::Advocate;
use crate::storage::{decode_response, RequestId};

/// Events triggered by user input, host timers, or retrieval results.
///
/// Each event represents a discrete occurrence that may cause state changes
/// and action emissions. Events are processed sequentially, so transitions
/// are deterministic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Replaces the live query and restarts the debounce window.
    QueryChanged(String),
    /// Appends a character to the query (Search mode only).
    Char(char),
    /// Removes the last character of the query (Search mode only).
    Backspace,
    /// One armed debounce timer fired.
    DebounceElapsed,
    /// The debouncer settled on a query; the filtered set follows it.
    SettledQueryChanged(String),
    /// Clears both queries and shows every record.
    Reset,
    /// Filters by one specialty, bypassing the debouncer.
    TagClicked(String),

    /// Moves the row cursor down (wraps to top).
    SelectNext,
    /// Moves the row cursor up (wraps to bottom).
    SelectPrevious,
    /// Moves the tag cursor right within the selected row.
    TagNext,
    /// Moves the tag cursor left within the selected row.
    TagPrevious,
    /// Applies the tag under the cursor as a `TagClicked`.
    ActivateTag,
    /// Gives the search input focus.
    FocusSearch,
    /// Returns focus to the results table, keeping the query.
    FocusResults,
    /// Hides the plugin pane.
    CloseFocus,

    /// Starts the one retrieval of the advocate list.
    LoadStarted,
    /// Raw result of the retrieval request.
    ResponseReceived {
        /// HTTP status code.
        status: u16,
        /// Response body bytes.
        body: Vec<u8>,
        /// Request id echoed back in the request context, if any.
        request_id: Option<RequestId>,
    },
    /// The retrieval produced a well-formed record list.
    LoadSucceeded(Vec<Advocate>),
    /// The retrieval failed; carries a human-readable reason.
    LoadFailed(String),

    /// The plugin is closing.
    Teardown,
}

/// Processes an event, mutates application state, and returns actions to execute.
///
/// Returns whether the UI should re-render, and the actions to execute in
/// order. The action list is empty when the event has no side effects.
///
/// # Errors
///
/// Decoding failures of a retrieval result are not errors here: they are
/// folded into the load state as `LoadFailed`. The `Result` is kept for
/// host-facing failures surfaced by future events.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event type.
#[allow(clippy::cognitive_complexity, clippy::too_many_lines)]
pub fn handle_event(state: &mut AppState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = %event_name(event)).entered();

    if state.torn_down {
        tracing::debug!("event after teardown ignored");
        return Ok((false, vec![]));
    }

    match event {
        Event::QueryChanged(text) => {
            state.query.clone_from(text);
            let delay = state.debouncer.schedule(text.clone());

            tracing::trace!(query = %state.query, delay_ms = delay.as_millis(), "query changed");

            Ok((true, vec![Action::ScheduleTimer { delay }]))
        }
        Event::Char(c) => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            let mut query = state.query.clone();
            query.push(*c);
            handle_event(state, &Event::QueryChanged(query))
        }
        Event::Backspace => {
            if !state.input_mode.is_typing() {
                return Ok((false, vec![]));
            }

            let mut query = state.query.clone();
            if query.pop().is_none() {
                return Ok((false, vec![]));
            }
            handle_event(state, &Event::QueryChanged(query))
        }
        Event::DebounceElapsed => match state.debouncer.on_timer() {
            Some(settled) => handle_event(state, &Event::SettledQueryChanged(settled)),
            None => {
                tracing::trace!("debounce window still open");
                Ok((false, vec![]))
            }
        },
        Event::SettledQueryChanged(settled) => {
            tracing::debug!(settled_query = %settled, "query settled");
            state.settled_query.clone_from(settled);
            state.apply_filter();
            Ok((true, vec![]))
        }
        Event::Reset => {
            tracing::debug!("resetting search");
            state.debouncer.cancel();
            state.query.clear();
            state.settled_query.clear();
            state.show_all();
            Ok((true, vec![]))
        }
        Event::TagClicked(tag) => {
            tracing::debug!(tag = %tag, "filtering by specialty");
            state.debouncer.cancel();
            state.query.clone_from(tag);
            state.settled_query.clone_from(tag);
            state.apply_specialty_filter(tag);
            Ok((true, vec![]))
        }
        Event::SelectNext => {
            state.move_selection_down();
            Ok((true, vec![]))
        }
        Event::SelectPrevious => {
            state.move_selection_up();
            Ok((true, vec![]))
        }
        Event::TagNext => {
            state.move_tag_next();
            Ok((true, vec![]))
        }
        Event::TagPrevious => {
            state.move_tag_previous();
            Ok((true, vec![]))
        }
        Event::ActivateTag => {
            let Some(tag) = state.focused_tag().map(String::from) else {
                tracing::debug!("no tag under cursor");
                return Ok((false, vec![]));
            };
            handle_event(state, &Event::TagClicked(tag))
        }
        Event::FocusSearch => {
            state.input_mode = InputMode::Search;
            Ok((true, vec![]))
        }
        Event::FocusResults => {
            state.input_mode = InputMode::Normal;
            Ok((true, vec![]))
        }
        Event::CloseFocus => Ok((false, vec![Action::CloseFocus])),
        Event::LoadStarted => {
            let Some(request_id) = state.store.begin_load() else {
                tracing::debug!(status = %state.store.status(), "load already started");
                return Ok((false, vec![]));
            };

            let _load_span =
                tracing::info_span!("load_advocates", request_id, endpoint = %state.endpoint)
                    .entered();
            tracing::info!("requesting advocate list");

            Ok((
                true,
                vec![Action::FetchAdvocates {
                    url: state.endpoint.clone(),
                    request: RequestContext::new(request_id),
                }],
            ))
        }
        Event::ResponseReceived {
            status,
            body,
            request_id,
        } => {
            if !state.store.accepts(*request_id) {
                tracing::debug!(request_id = ?request_id, "discarding stale response");
                return Ok((false, vec![]));
            }

            match decode_response(*status, body) {
                Ok(records) => handle_event(state, &Event::LoadSucceeded(records)),
                Err(e) => handle_event(state, &Event::LoadFailed(e.reason())),
            }
        }
        Event::LoadSucceeded(records) => {
            if !state.store.succeed(records.clone()) {
                return Ok((false, vec![]));
            }
            state.refilter();
            Ok((true, vec![]))
        }
        Event::LoadFailed(reason) => {
            if !state.store.fail(reason.clone()) {
                return Ok((false, vec![]));
            }
            tracing::error!(reason = %reason, "failed to load advocates");
            Ok((true, vec![]))
        }
        Event::Teardown => {
            tracing::debug!("tearing down");
            state.debouncer.cancel();
            state.torn_down = true;
            Ok((false, vec![]))
        }
    }
}

/// Short event label for spans; avoids dumping response bodies.
const fn event_name(event: &Event) -> &'static str {
    match event {
        Event::QueryChanged(_) => "QueryChanged",
        Event::Char(_) => "Char",
        Event::Backspace => "Backspace",
        Event::DebounceElapsed => "DebounceElapsed",
        Event::SettledQueryChanged(_) => "SettledQueryChanged",
        Event::Reset => "Reset",
        Event::TagClicked(_) => "TagClicked",
        Event::SelectNext => "SelectNext",
        Event::SelectPrevious => "SelectPrevious",
        Event::TagNext => "TagNext",
        Event::TagPrevious => "TagPrevious",
        Event::ActivateTag => "ActivateTag",
        Event::FocusSearch => "FocusSearch",
        Event::FocusResults => "FocusResults",
        Event::CloseFocus => "CloseFocus",
        Event::LoadStarted => "LoadStarted",
        Event::ResponseReceived { .. } => "ResponseReceived",
        Event::LoadSucceeded(_) => "LoadSucceeded",
        Event::LoadFailed(_) => "LoadFailed",
        Event::Teardown => "Teardown",
    }
}
