//! Input mode state for the application.
//!
//! The search input and the results table compete for the same keys, so the
//! plugin is always in exactly one of two modes:
//! - **Normal**: keys navigate rows and specialty tags
//! - **Search**: printable keys edit the query
//!
//! # Example
//!
//! ```rust
//! use advocate_directory::InputMode;
//!
//! let mode = InputMode::Search;
//! assert!(mode.is_typing());
//! ```

/// Current input handling mode.
///
/// Controls which keybindings are active and how the footer and search bar
/// are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    /// Navigation mode.
    ///
    /// Available keybindings: j/k (rows), h/l/Tab (tags), Enter (filter by
    /// tag), / (search), r (reset), q (quit).
    #[default]
    Normal,

    /// The search input has focus.
    ///
    /// Printable characters and backspace edit the query; Enter or Esc
    /// return to Normal mode without clearing it.
    Search,
}

impl InputMode {
    #[must_use]
    pub const fn is_typing(self) -> bool {
        matches!(self, Self::Search)
    }
}
