//! Search layer: filtering, debouncing and match highlighting.
//!
//! Everything here is pure or single-threaded and free of host calls, so the
//! application layer can drive it from Zellij events and tests can drive it
//! directly.
//!
//! # Modules
//!
//! - [`filter`]: Boolean inclusion matching over advocate fields
//! - [`debounce`]: Deferred emission of the settled query
//! - [`highlight`]: Character ranges of matches for display

pub mod debounce;
pub mod filter;
pub mod highlight;

#[cfg(test)]
mod properties;

pub use debounce::{Debouncer, DEFAULT_DELAY};
pub use filter::{filter, filter_by_specialty, is_numeric, matches};
pub use highlight::match_ranges;
