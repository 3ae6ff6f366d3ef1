//! Record storage layer.
//!
//! This module holds the advocate list loaded from the backend and the state
//! of that one-shot retrieval. Nothing is persisted: the list lives for the
//! plugin's lifetime and is never mutated after a successful load.
//!
//! # Modules
//!
//! - `models`: Load state types
//! - `envelope`: HTTP response decoding into records
//! - `store`: The [`RecordStore`] lifecycle owner

pub mod envelope;
pub mod models;
pub mod store;

pub use envelope::decode_response;
pub use models::{LoadState, LoadStatus};
pub use store::{RecordStore, RequestId};
