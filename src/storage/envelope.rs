//! Response envelope decoding.
//!
//! The backend answers `GET /api/advocates` with `{ "data": [Advocate, ...] }`.
//! This module turns the raw `(status, body)` pair delivered by the host into
//! either the record list or a [`DirectoryError`] whose text becomes the load
//! failure reason.

use crate::domain::error::{DirectoryError, Result};
use crate::domain::Advocate;
use serde::Deserialize;

/// Longest host-supplied error detail appended to a failure reason.
const MAX_DETAIL_CHARS: usize = 120;

#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<Advocate>,
}

/// Decodes an HTTP response into the advocate list.
///
/// # Errors
///
/// - [`DirectoryError::LoadFailure`] when `status` is outside `200..=299`. The
///   reason reads `HTTP error! Status: {status}`, followed by the body text if
///   the host put a transport error message there.
/// - [`DirectoryError::MalformedResponse`] when the body is not JSON or lacks a
///   `data` array of well-formed records.
///
/// # Examples
///
/// ```
/// use advocate_directory::storage::decode_response;
///
/// let records = decode_response(200, br#"{"data": []}"#).unwrap();
/// assert!(records.is_empty());
///
/// let err = decode_response(503, b"").unwrap_err();
/// assert_eq!(err.to_string(), "HTTP error! Status: 503");
/// ```
pub fn decode_response(status: u16, body: &[u8]) -> Result<Vec<Advocate>> {
    if !(200..=299).contains(&status) {
        let detail = String::from_utf8_lossy(body);
        let detail = detail.trim();
        let reason = if detail.is_empty() {
            format!("HTTP error! Status: {status}")
        } else {
            let detail: String = detail.chars().take(MAX_DETAIL_CHARS).collect();
            format!("HTTP error! Status: {status} ({detail})")
        };
        return Err(DirectoryError::LoadFailure(reason));
    }

    let envelope: Envelope = serde_json::from_slice(body)?;
    tracing::debug!(record_count = envelope.data.len(), "response envelope decoded");
    Ok(envelope.data)
}
