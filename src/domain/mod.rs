//! Domain layer for the advocate directory plugin.
//!
//! This module contains the core domain types, independent of Zellij-specific
//! APIs or rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`advocate`]: Advocate record model and row identity

pub mod advocate;
pub mod error;

pub use advocate::{Advocate, RowKey};
pub use error::{DirectoryError, Result};
