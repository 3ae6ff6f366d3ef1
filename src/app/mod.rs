//! Application layer coordinating state, events, and actions.
//!
//! This module sits between the plugin runtime (main.rs) and the
//! domain/storage/search layers. It implements the event-driven interaction
//! controller behind the UI.
//!
//! # Architecture
//!
//! ```text
//! User Input / Timers → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                      ↑                                        ↓
//!                                      └──────────── Retrieval Results ─────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing logic and state transitions
//! - [`modes`]: Input mode state
//! - [`request`]: Context round-tripped with the retrieval request
//! - [`state`]: Central application state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod request;
pub mod state;

#[cfg(test)]
mod flow_tests;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use modes::InputMode;
pub use request::RequestContext;
pub use state::{AppState, DirectorySnapshot, FilterSource};
