//! Advocate Directory: a Zellij plugin for browsing and searching advocates.
//!
//! The plugin fetches the advocate list once from a JSON endpoint and shows
//! it as a searchable table:
//! - Free-text search across names, city, degree and specialties, with
//!   numeric queries also matching years of experience and phone numbers
//! - Debounced query updates so typing bursts filter once
//! - Specialty tags that filter the table when activated
//! - Loading and failure states in place of the table
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Interaction controller
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ Search Layer  │
//! │ (ui/)         │   │ (storage/)    │   │ (search/)     │
//! │ - Rendering   │   │ - Load state  │   │ - Filtering   │
//! │ - Theming     │   │ - Decoding    │   │ - Debouncing  │
//! │ - Components  │   │ - Records     │   │ - Highlights  │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Sandbox paths (infrastructure/)                  │
//! │  - Advocate model, errors (domain/)                 │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - OpenTelemetry tracing to a local OTLP JSON file  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! ```kdl
//! pane {
//!     plugin location="file:/path/to/advocate-directory.wasm" {
//!         endpoint "http://localhost:3000/api/advocates"
//!         debounce_ms "300"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! # Example
//!
//! ```rust
//! use advocate_directory::{handle_event, initialize, Config, Event};
//!
//! let mut state = initialize(&Config::default());
//! let (_render, actions) = handle_event(&mut state, &Event::LoadStarted)?;
//! // The shim executes `actions`: here, one `FetchAdvocates`.
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), advocate_directory::DirectoryError>(())
//! ```

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod storage;
pub mod ui;

pub use app::{
    handle_event, Action, AppState, DirectorySnapshot, Event, FilterSource, InputMode, RequestContext,
};
pub use domain::{Advocate, DirectoryError, Result, RowKey};
pub use storage::{LoadState, LoadStatus};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::time::Duration;

/// Endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api/advocates";

/// Plugin configuration parsed from Zellij's configuration system.
///
/// ```kdl
/// plugin location="file:/path/to/advocate-directory.wasm" {
///     endpoint "https://example.com/api/advocates"
///     debounce_ms "250"
///     theme "catppuccin-latte"
///     theme_file "~/.config/zellij/advocates-theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// URL returning `{ "data": [Advocate, ...] }`.
    pub endpoint: String,

    /// Quiet period before a typed query is applied.
    pub debounce: Duration,

    /// Built-in theme name. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file; `~` refers to the host home.
    pub theme_file: Option<String>,

    /// `EnvFilter` directive for exported spans. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            debounce: search::DEFAULT_DELAY,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Blank values count as unset. An unparsable `debounce_ms` falls back to
    /// the default delay.
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use std::time::Duration;
    /// use advocate_directory::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("endpoint".to_string(), "http://api.local/advocates".to_string());
    /// map.insert("debounce_ms".to_string(), "150".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.endpoint, "http://api.local/advocates");
    /// assert_eq!(config.debounce, Duration::from_millis(150));
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let value = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let debounce = value("debounce_ms").map_or(search::DEFAULT_DELAY, |raw| {
            raw.parse::<u64>().map(Duration::from_millis).unwrap_or_else(|e| {
                tracing::warn!(debounce_ms = %raw, error = %e, "invalid debounce_ms, using default");
                search::DEFAULT_DELAY
            })
        });

        Self {
            endpoint: value("endpoint").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            debounce,
            theme_name: value("theme"),
            theme_file: value("theme_file"),
            trace_level: value("trace_level"),
        }
    }

    /// Resolves the configured theme.
    ///
    /// `theme_file` wins over `theme`; anything that fails to load falls back
    /// to the default theme with a warning.
    #[must_use]
    pub fn theme(&self) -> Theme {
        if let Some(theme_file) = &self.theme_file {
            let path = infrastructure::expand_tilde(theme_file);
            return Theme::from_file(&path).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %path, error = %e, "failed to load theme from file, using default");
                Theme::default()
            });
        }

        self.theme_name.as_ref().map_or_else(Theme::default, |name| {
            Theme::from_name(name).unwrap_or_else(|| {
                tracing::warn!(theme_name = %name, "unknown theme, using default");
                Theme::default()
            })
        })
    }
}

/// Creates the idle application state for `config`.
///
/// Tracing is not initialized here; the plugin shim does that first so this
/// call is already traced.
#[must_use]
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!(endpoint = %config.endpoint, debounce_ms = config.debounce.as_millis(), "initializing advocate directory");
    AppState::new(config.theme(), config.endpoint.clone(), config.debounce)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_yields_defaults() {
        assert_eq!(Config::from_zellij(&BTreeMap::new()), Config::default());
    }

    #[test]
    fn blank_and_invalid_values_fall_back() {
        let config = Config::from_zellij(&map(&[
            ("endpoint", "  "),
            ("debounce_ms", "soon"),
            ("theme", ""),
        ]));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn unknown_theme_uses_default() {
        let config = Config::from_zellij(&map(&[("theme", "solarized")]));
        assert_eq!(config.theme(), Theme::default());
    }

    #[test]
    fn named_theme_is_loaded() {
        let config = Config::from_zellij(&map(&[("theme", "catppuccin-latte")]));
        assert_eq!(config.theme().name, "catppuccin-latte");
    }

    #[test]
    fn initialize_starts_idle() {
        let state = initialize(&Config::default());
        assert_eq!(state.store.status(), LoadStatus::Idle);
        assert_eq!(state.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(state.debouncer.delay(), search::DEFAULT_DELAY);
    }
}
