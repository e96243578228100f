//! Export worker protocol.
//!
//! Requests travel from the plugin thread to the export worker as JSON
//! payloads; responses come back the same way. Every request carries an
//! optional [`TraceContext`] so that spans recorded on the worker join the
//! trace of the event that triggered them.

use crate::export::ExportKind;
use crate::form::Submission;
use serde::{Deserialize, Serialize};

/// Trace and parent span identifiers of the sending span, hex encoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceContext {
    /// OpenTelemetry trace ID, 32 hex digits.
    pub trace_id: String,

    /// Span ID of the sender, 16 hex digits.
    pub parent_span_id: String,
}

impl TraceContext {
    /// Captures the OpenTelemetry context of the current `tracing` span.
    ///
    /// Returns `None` when no valid span context is active, which is the case
    /// whenever tracing has not been initialized.
    #[must_use]
    pub fn from_current() -> Option<Self> {
        use opentelemetry::trace::TraceContextExt;
        use tracing_opentelemetry::OpenTelemetrySpanExt;

        let otel_context = tracing::Span::current().context();
        let span_ref = otel_context.span();
        let span_context = span_ref.span_context();

        if !span_context.is_valid() {
            tracing::trace!("no valid span context to propagate");
            return None;
        }

        Some(Self {
            trace_id: format!("{:032x}", span_context.trace_id()),
            parent_span_id: format!("{:016x}", span_context.span_id()),
        })
    }
}

/// Generates constructors that stamp the current trace context onto a message.
macro_rules! export_message_builders {
    (
        $(
            $builder_name:ident($variant:ident { $($field:ident: $ty:ty),* $(,)? })
        ),* $(,)?
    ) => {
        impl ExportMessage {
            $(
                #[doc = concat!("Builds a `", stringify!($variant), "` message carrying the current trace context.")]
                #[must_use]
                pub fn $builder_name($($field: $ty),*) -> Self {
                    Self::$variant {
                        $($field,)*
                        trace_context: TraceContext::from_current(),
                    }
                }
            )*
        }
    };
}

export_message_builders! {
    export(Export { kind: ExportKind, submission: Submission, export_dir: String }),
}

/// Requests handled by the export worker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportMessage {
    /// Render a submission and write it into `export_dir`.
    Export {
        kind: ExportKind,

        /// Copy of the frozen snapshot.
        submission: Submission,

        /// Absolute target directory, already tilde-expanded.
        export_dir: String,

        #[serde(skip_serializing_if = "Option::is_none", default)]
        trace_context: Option<TraceContext>,
    },
}

impl ExportMessage {
    pub(crate) const fn trace_context(&self) -> Option<&TraceContext> {
        match self {
            Self::Export { trace_context, .. } => trace_context.as_ref(),
        }
    }
}

/// Responses posted back to the plugin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportResponse {
    /// The export file was written.
    Exported {
        kind: ExportKind,
        /// Path of the written file, as seen by the plugin.
        path: String,
    },

    /// The export failed; `message` is shown to the user.
    Error { message: String },
}
