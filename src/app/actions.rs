//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never calls the host directly. It returns a `Vec<Action>`
//! after processing each event and the plugin shim executes them in order:
//! issuing the HTTP request, arming debounce timers, or hiding the pane.
//!
//! # Example
//!
//! ```rust
//! use advocate_directory::Action;
//! use std::time::Duration;
//!
//! let actions = vec![Action::ScheduleTimer {
//!     delay: Duration::from_millis(300),
//! }];
//! ```

use crate::app::request::RequestContext;
use std::time::Duration;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Closes the focused floating pane, hiding the plugin UI.
    CloseFocus,

    /// Issues the one `GET` retrieval of the advocate list.
    ///
    /// The response arrives later as a `WebRequestResult` event carrying the
    /// encoded `request` context.
    FetchAdvocates {
        /// Endpoint returning `{ "data": [...] }`.
        url: String,
        /// Context echoed back with the response.
        request: RequestContext,
    },

    /// Arms one host timer for the debouncer.
    ///
    /// Its expiry must be reported back as `Event::DebounceElapsed`.
    ScheduleTimer {
        /// Time until the timer fires.
        delay: Duration,
    },
}
