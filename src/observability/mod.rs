//! OpenTelemetry-based observability with file-based trace export.
//!
//! `tracing` spans and events are bridged into OpenTelemetry and written as
//! OTLP JSON lines to a local file for offline analysis:
//!
//! ```text
//! tracing → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON file
//! ```
//!
//! - **Location**: `~/.local/share/zellij/advocate-directory/advocate-directory-otlp.json`
//! - **Rotation**: at 10MB, keeping 3 backups
//! - **Level**: the `trace_level` plugin option, default `"info"`
//!
//! [`TraceContext`] carries the issuing span across the retrieval request so
//! the response handling joins the same trace.
//!
//! # Usage
//!
//! ```rust
//! use advocate_directory::observability::init_tracing;
//! use advocate_directory::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin initialized");
//! ```

mod context;
mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use context::TraceContext;
pub use init::init_tracing;
