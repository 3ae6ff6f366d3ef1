//! Error types for the advocate directory plugin.
//!
//! This module defines the centralized error type [`DirectoryError`] and a type
//! alias [`Result`] for convenient error handling throughout the plugin. All
//! errors are implemented using the `thiserror` crate.
//!
//! Load failures never escape the record store as errors: both
//! [`DirectoryError::LoadFailure`] and [`DirectoryError::MalformedResponse`]
//! collapse into the `Error` load state with their display text as the reason.

use thiserror::Error;

/// The main error type for advocate directory operations.
///
/// # Examples
///
/// ```
/// use advocate_directory::DirectoryError;
///
/// let err = DirectoryError::LoadFailure("HTTP error! Status: 500".to_string());
/// assert_eq!(err.reason(), "HTTP error! Status: 500");
/// ```
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// The retrieval request failed.
    ///
    /// Covers transport errors reported by the host and non-2xx responses.
    /// The string is the human-readable reason shown to the user.
    #[error("{0}")]
    LoadFailure(String),

    /// The response arrived but does not have the `{ "data": [...] }` shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Theme parsing or application failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    /// Returns the reason string stored in the `Error` load state.
    #[must_use]
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedResponse(err.to_string())
    }
}

/// A specialized `Result` type for advocate directory operations.
pub type Result<T> = std::result::Result<T, DirectoryError>;
