//! Load state models for the record store.
//!
//! [`LoadState`] carries the data of each lifecycle stage; [`LoadStatus`] is
//! its data-free projection used by the rendering boundary.

use crate::domain::Advocate;
use std::sync::Arc;

/// Lifecycle of the one-shot advocate retrieval.
///
/// ```text
/// Idle ──begin──▶ Loading ──succeed──▶ Success(records)
///   │                │
///   └─────fail───────┴──────fail──────▶ Error(reason)
/// ```
///
/// `Success` and `Error` are terminal for the plugin's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadState {
    /// No retrieval has been started yet.
    #[default]
    Idle,
    /// The retrieval request is in flight.
    Loading,
    /// The full record list, frozen for the session.
    Success(Arc<[Advocate]>),
    /// Human-readable failure reason.
    Error(String),
}

/// Data-free projection of [`LoadState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl LoadState {
    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        match self {
            Self::Idle => LoadStatus::Idle,
            Self::Loading => LoadStatus::Loading,
            Self::Success(_) => LoadStatus::Success,
            Self::Error(_) => LoadStatus::Error,
        }
    }
}

impl std::fmt::Display for LoadStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Success => "success",
            Self::Error => "error",
        };
        f.write_str(label)
    }
}
