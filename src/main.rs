//! Zellij plugin wrapper and entry point.
//!
//! Thin integration layer between the library and Zellij: it translates host
//! events into library events, runs the handler, and executes the returned
//! actions through the plugin API.
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Permissions**: Request `WebAccess`; once granted, start the load
//! 3. **Update**: Map host events, delegate to `handle_event`, run actions
//! 4. **Render**: Call the library render function
//! 5. **Close**: `BeforeClose` tears the controller down
//!
//! # Event Mapping
//!
//! - `PermissionRequestResult(Granted)` → `Event::LoadStarted`
//! - `PermissionRequestResult(Denied)` → `Event::LoadFailed`
//! - `WebRequestResult` → `Event::ResponseReceived`
//! - `Timer` → `Event::DebounceElapsed`
//! - `BeforeClose` → `Event::Teardown`
//! - `Key` → see below
//!
//! # Keybindings
//!
//! Global:
//! - `Ctrl+n` / `Down`: Next row
//! - `Ctrl+p` / `Up`: Previous row
//! - `Ctrl+r`: Reset search
//!
//! Normal mode:
//! - `j` / `k`: Next / previous row
//! - `l` / `Right` / `Tab`: Next specialty tag
//! - `h` / `Left` / `Shift+Tab`: Previous specialty tag
//! - `Enter`: Filter by the focused tag
//! - `/`: Focus the search input
//! - `r`: Reset search
//! - `q`: Close plugin
//!
//! Search mode:
//! - Characters and `Backspace`: Edit the query
//! - `Enter` / `Esc`: Return to the table, keeping the query

#![allow(clippy::multiple_crate_versions)]

use std::collections::BTreeMap;
use zellij_tile::prelude::*;

use advocate_directory::{handle_event, Action, AppState, Config, Event, InputMode, RequestContext};

register_plugin!(State);

/// Plugin state wrapper around the library's `AppState`.
struct State {
    app: AppState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            app: advocate_directory::initialize(&Config::default()),
        }
    }
}

impl ZellijPlugin for State {
    /// Parses configuration, initializes tracing and state, requests web
    /// access and subscribes to events. Loading starts once permission is
    /// granted.
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        advocate_directory::observability::init_tracing(&config);

        let _span = tracing::debug_span!("plugin_load").entered();

        tracing::debug!(endpoint = %config.endpoint, "parsed configuration");
        self.app = advocate_directory::initialize(&config);

        request_permission(&[PermissionType::WebAccess]);
        subscribe(&[
            EventType::Key,
            EventType::Timer,
            EventType::WebRequestResult,
            EventType::PermissionRequestResult,
            EventType::BeforeClose,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Translates a Zellij event, handles it, and executes the resulting
    /// actions. Returns `true` if the UI should re-render.
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);

        // Attached before the span so response handling joins the request's trace.
        let mut _trace_guard = None;

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match self.map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::Timer(_elapsed) => Event::DebounceElapsed,
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                let request = RequestContext::from_map(&context);
                _trace_guard = request
                    .as_ref()
                    .and_then(|r| r.trace_context.as_ref())
                    .and_then(advocate_directory::observability::TraceContext::attach);
                Event::ResponseReceived {
                    status,
                    body,
                    request_id: request.map(|r| r.request_id),
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::map_permission_result(status)
            }
            zellij_tile::prelude::Event::BeforeClose => Event::Teardown,
            _ => return false,
        };

        let span = tracing::debug_span!("plugin_update_event", event_type = %event_name);
        let _guard = span.entered();

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for action in actions {
                    Self::execute_action(action);
                }
                should_render
            }
            Err(e) => {
                tracing::error!(error = %e, "error handling event");
                false
            }
        }
    }

    fn render(&mut self, rows: usize, cols: usize) {
        advocate_directory::ui::render(&self.app, rows, cols);
    }
}

impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            zellij_tile::prelude::Event::BeforeClose => "BeforeClose".to_string(),
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(&self, key: &KeyWithModifier) -> Option<Event> {
        tracing::trace!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectNext),
                BareKey::Char('p') => Some(Event::SelectPrevious),
                BareKey::Char('r') => Some(Event::Reset),
                _ => None,
            };
        }

        match (self.app.input_mode, key.bare_key) {
            (_, BareKey::Down) => Some(Event::SelectNext),
            (_, BareKey::Up) => Some(Event::SelectPrevious),

            (InputMode::Search, BareKey::Enter | BareKey::Esc) => Some(Event::FocusResults),
            (InputMode::Search, BareKey::Backspace) => Some(Event::Backspace),
            (InputMode::Search, BareKey::Char(c)) => Some(Event::Char(c)),

            (InputMode::Normal, BareKey::Char('j')) => Some(Event::SelectNext),
            (InputMode::Normal, BareKey::Char('k')) => Some(Event::SelectPrevious),
            (InputMode::Normal, BareKey::Tab) if key.has_modifiers(&[KeyModifier::Shift]) => {
                Some(Event::TagPrevious)
            }
            (InputMode::Normal, BareKey::Char('l') | BareKey::Right | BareKey::Tab) => {
                Some(Event::TagNext)
            }
            (InputMode::Normal, BareKey::Char('h') | BareKey::Left) => Some(Event::TagPrevious),
            (InputMode::Normal, BareKey::Enter) => Some(Event::ActivateTag),
            (InputMode::Normal, BareKey::Char('/')) => Some(Event::FocusSearch),
            (InputMode::Normal, BareKey::Char('r')) => Some(Event::Reset),
            (InputMode::Normal, BareKey::Char('q')) => Some(Event::CloseFocus),
            _ => None,
        }
    }

    /// Starts the load once web access is granted; a denial is reported as
    /// a load failure.
    fn map_permission_result(status: PermissionStatus) -> Event {
        match status {
            PermissionStatus::Granted => {
                tracing::debug!("web access granted - starting load");
                Event::LoadStarted
            }
            PermissionStatus::Denied => {
                tracing::warn!("web access denied");
                Event::LoadFailed("Web access permission denied".to_string())
            }
        }
    }

    /// Executes an action returned from event handling.
    #[tracing::instrument(level = "debug")]
    fn execute_action(action: Action) {
        match action {
            Action::CloseFocus => {
                hide_self();
            }
            Action::FetchAdvocates { url, request } => {
                tracing::debug!(url = %url, request_id = request.request_id, "issuing web request");
                web_request(
                    url,
                    HttpVerb::Get,
                    BTreeMap::new(),
                    vec![],
                    request.to_map(),
                );
            }
            Action::ScheduleTimer { delay } => {
                set_timeout(delay.as_secs_f64());
            }
        }
    }
}
