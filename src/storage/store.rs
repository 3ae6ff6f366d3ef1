//! The record store.
//!
//! [`RecordStore`] owns the one retrieval the plugin performs per lifetime. It
//! hands out a request id when loading starts and only accepts a response that
//! carries that id, so late or duplicated host callbacks cannot overwrite a
//! settled state.

use crate::domain::Advocate;
use crate::storage::models::{LoadState, LoadStatus};
use chrono::{DateTime, Utc};

/// Identifier attached to the in-flight retrieval request.
pub type RequestId = u64;

/// Holds the loaded advocates and the retrieval lifecycle.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    state: LoadState,
    in_flight: Option<RequestId>,
    next_request_id: RequestId,
    loaded_at: Option<DateTime<Utc>>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the retrieval.
    ///
    /// Returns the id the response must carry, or `None` when a retrieval
    /// was already started (the store is single-shot).
    pub fn begin_load(&mut self) -> Option<RequestId> {
        if self.state != LoadState::Idle {
            tracing::debug!(status = %self.status(), "load already started, ignoring");
            return None;
        }

        self.next_request_id += 1;
        let request_id = self.next_request_id;
        self.in_flight = Some(request_id);
        self.state = LoadState::Loading;

        tracing::debug!(request_id, "record load started");
        Some(request_id)
    }

    /// Returns `true` if a response tagged with `request_id` should be applied.
    #[must_use]
    pub fn accepts(&self, request_id: Option<RequestId>) -> bool {
        self.state == LoadState::Loading && request_id.is_some() && self.in_flight == request_id
    }

    /// Freezes `records` as the session snapshot.
    ///
    /// Returns `false` (and changes nothing) unless a load is in flight.
    pub fn succeed(&mut self, records: Vec<Advocate>) -> bool {
        if self.state != LoadState::Loading {
            tracing::debug!(status = %self.status(), "unexpected load success, ignoring");
            return false;
        }

        tracing::debug!(record_count = records.len(), "record load succeeded");
        self.state = LoadState::Success(records.into());
        self.in_flight = None;
        self.loaded_at = Some(Utc::now());
        true
    }

    /// Records a failure reason.
    ///
    /// Accepted while idle (the request could not even be issued) or loading.
    pub fn fail(&mut self, reason: impl Into<String>) -> bool {
        if !matches!(self.state, LoadState::Idle | LoadState::Loading) {
            tracing::debug!(status = %self.status(), "unexpected load failure, ignoring");
            return false;
        }

        let reason = reason.into();
        tracing::warn!(reason = %reason, "record load failed");
        self.state = LoadState::Error(reason);
        self.in_flight = None;
        true
    }

    #[must_use]
    pub const fn status(&self) -> LoadStatus {
        self.state.status()
    }

    /// All loaded records; empty unless the load succeeded.
    #[must_use]
    pub fn records(&self) -> &[Advocate] {
        match &self.state {
            LoadState::Success(records) => &records[..],
            _ => &[],
        }
    }

    /// Failure reason, present only in the `Error` state.
    #[must_use]
    pub fn failure_reason(&self) -> Option<&str> {
        match &self.state {
            LoadState::Error(reason) => Some(reason.as_str()),
            _ => None,
        }
    }

    /// When the records arrived; `None` unless the load succeeded.
    #[must_use]
    pub const fn loaded_at(&self) -> Option<DateTime<Utc>> {
        self.loaded_at
    }

    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self.state, LoadState::Success(_))
    }
}
