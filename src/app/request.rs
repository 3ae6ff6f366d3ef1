//! Retrieval request context.
//!
//! Zellij echoes the `context` map passed to `web_request` back in the
//! matching `WebRequestResult` event. The plugin uses it to carry the request
//! id (so stale responses can be recognised) and the trace context of the
//! span that issued the request (so the response handling links to it).

use crate::observability::TraceContext;
use crate::storage::RequestId;
use std::collections::BTreeMap;

const REQUEST_ID_KEY: &str = "request_id";
const TRACE_ID_KEY: &str = "trace_id";
const PARENT_SPAN_ID_KEY: &str = "parent_span_id";

/// Metadata attached to the advocate retrieval request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Id handed out by the record store when the load began.
    pub request_id: RequestId,

    /// Trace context of the span that issued the request.
    pub trace_context: Option<TraceContext>,
}

impl RequestContext {
    /// Creates a context for `request_id` with the current trace context.
    #[must_use]
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            trace_context: TraceContext::from_current(),
        }
    }

    /// Encodes the context as the string map Zellij round-trips.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert(REQUEST_ID_KEY.to_string(), self.request_id.to_string());
        if let Some(trace) = &self.trace_context {
            map.insert(TRACE_ID_KEY.to_string(), trace.trace_id.clone());
            map.insert(PARENT_SPAN_ID_KEY.to_string(), trace.parent_span_id.clone());
        }
        map
    }

    /// Decodes a context map.
    ///
    /// Returns `None` when the map carries no parseable request id, which
    /// means the result does not belong to an advocate retrieval.
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Option<Self> {
        let request_id = map.get(REQUEST_ID_KEY)?.parse().ok()?;
        let trace_context = match (map.get(TRACE_ID_KEY), map.get(PARENT_SPAN_ID_KEY)) {
            (Some(trace_id), Some(parent_span_id)) => Some(TraceContext {
                trace_id: trace_id.clone(),
                parent_span_id: parent_span_id.clone(),
            }),
            _ => None,
        };

        Some(Self {
            request_id,
            trace_context,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_round_trip_keeps_request_and_trace_ids() {
        let context = RequestContext {
            request_id: 3,
            trace_context: Some(TraceContext {
                trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
                parent_span_id: "b7ad6b7169203331".to_string(),
            }),
        };

        assert_eq!(RequestContext::from_map(&context.to_map()), Some(context));
    }

    #[test]
    fn foreign_context_is_rejected() {
        let mut map = BTreeMap::new();
        map.insert("request_id".to_string(), "not-a-number".to_string());
        assert_eq!(RequestContext::from_map(&map), None);
        assert_eq!(RequestContext::from_map(&BTreeMap::new()), None);
    }

    #[test]
    fn trace_context_is_optional() {
        let context = RequestContext {
            request_id: 1,
            trace_context: None,
        };
        let map = context.to_map();
        assert_eq!(map.len(), 1);
        assert_eq!(RequestContext::from_map(&map), Some(context));
    }
}
