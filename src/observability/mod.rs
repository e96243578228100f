//! OpenTelemetry tracing with file export.
//!
//! ```text
//! tracing spans ─▶ tracing-opentelemetry ─▶ SDK TracerProvider
//!                                              │ simple processor
//!                                              ▼
//!                         FileSpanExporter ─▶ zform-otlp.json (rotated)
//! ```
//!
//! The trace file lives at `~/.local/share/zellij/zform/zform-otlp.json`,
//! rotates at 10 MiB and keeps three backups. The filter comes from the
//! `trace_level` plugin option and defaults to `info`.
//!
//! - [`init`]: Subscriber installation
//! - [`tracer`]: Tracer provider and span exporter
//! - [`span_formatter`]: OTLP/JSON encoding
//! - [`file_writer`]: Rotating file output

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE};
