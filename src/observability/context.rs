//! Trace context propagation across the retrieval round-trip.
//!
//! The request that fetches the advocate list is answered by a separate host
//! event. The span that issued it is captured here as hex ids, carried in the
//! request context map, and re-attached when the response is handled so both
//! halves land in the same trace.

/// Trace and parent span ids captured from the current span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceContext {
    /// OpenTelemetry trace ID as a hex string.
    pub trace_id: String,

    /// Id of the span that issued the request.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Creates a trace context from the current tracing span.
    ///
    /// Returns `None` if the current span context is invalid, which is always
    /// the case when tracing was not initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let span = tracing::Span::current();

        let otel_context = span.context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("span context is not valid");
            return None;
        }

        let context = Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        };

        tracing::debug!(
            trace_id = %context.trace_id,
            parent_span_id = %context.parent_span_id,
            "capturing trace context"
        );

        Some(context)
    }

    /// Makes this context the parent of spans created while the returned
    /// guard is held.
    ///
    /// Returns `None` if either id is not valid hex.
    #[must_use]
    pub fn attach(&self) -> Option<opentelemetry::ContextGuard> {
        use opentelemetry::trace::{
            SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState,
        };

        let trace_id = TraceId::from_hex(&self.trace_id).ok()?;
        let span_id = SpanId::from_hex(&self.parent_span_id).ok()?;

        let span_context = SpanContext::new(
            trace_id,
            span_id,
            TraceFlags::SAMPLED,
            true,
            TraceState::default(),
        );

        let otel_context = opentelemetry::Context::current().with_remote_span_context(span_context);
        Some(otel_context.attach())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_context_without_subscriber() {
        assert_eq!(TraceContext::from_current(), None);
    }

    #[test]
    fn attach_rejects_malformed_ids() {
        let context = TraceContext {
            trace_id: "not-hex".to_string(),
            parent_span_id: "b7ad6b7169203331".to_string(),
        };
        assert!(context.attach().is_none());
    }

    #[test]
    fn attach_accepts_valid_ids() {
        let context = TraceContext {
            trace_id: "0af7651916cd43dd8448eb211c80319c".to_string(),
            parent_span_id: "b7ad6b7169203331".to_string(),
        };
        assert!(context.attach().is_some());
    }
}
