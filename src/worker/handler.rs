//! Export worker running on a Zellij background thread.
//!
//! The worker renders a submission snapshot into export bytes and writes them
//! to disk, so no file I/O happens on the render loop. It holds no state
//! between messages.

use crate::domain::Result;
use crate::export::{write_export, ExportKind};
use crate::form::Submission;
use crate::infrastructure::paths;
use crate::worker::{ExportMessage, ExportResponse, TraceContext};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Once;
use zellij_tile::prelude::{PluginMessage, ZellijWorker};
use zellij_tile::shim::post_message_to_plugin;

static WORKER_TRACING: Once = Once::new();

/// Worker that turns [`ExportMessage`]s into files.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ExportWorker;

impl ExportWorker {
    /// Handles one request and builds the response for the plugin.
    ///
    /// Failures never escape: they are logged and returned as
    /// [`ExportResponse::Error`].
    pub fn handle_message(&self, message: ExportMessage) -> ExportResponse {
        let _context_guard = message.trace_context().and_then(attach_parent_context);

        match message {
            ExportMessage::Export {
                kind,
                submission,
                export_dir,
                ..
            } => {
                let _span = tracing::debug_span!("worker_export", kind = %kind, export_dir = %export_dir).entered();

                match Self::export(kind, &submission, Path::new(&export_dir)) {
                    Ok(path) => {
                        let path = paths::strip_host_prefix(&path.to_string_lossy());
                        tracing::debug!(path = %path, "export complete");
                        ExportResponse::Exported { kind, path }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "export failed");
                        ExportResponse::Error {
                            message: format!("{kind} export failed: {e}"),
                        }
                    }
                }
            }
        }
    }

    fn export(kind: ExportKind, submission: &Submission, dir: &Path) -> Result<std::path::PathBuf> {
        let bytes = kind.render(submission)?;
        write_export(dir, kind, submission.submitted_at(), &bytes)
    }
}

/// Re-enters the sender's trace so worker spans become its children.
///
/// The returned guard must stay alive for the duration of the handling.
fn attach_parent_context(trace_context: &TraceContext) -> Option<opentelemetry::ContextGuard> {
    use opentelemetry::trace::{SpanContext, SpanId, TraceContextExt, TraceFlags, TraceId, TraceState};

    let trace_id = TraceId::from_hex(&trace_context.trace_id).ok()?;
    let span_id = SpanId::from_hex(&trace_context.parent_span_id).ok()?;
    let remote = SpanContext::new(trace_id, span_id, TraceFlags::SAMPLED, true, TraceState::default());

    Some(
        opentelemetry::Context::current()
            .with_remote_span_context(remote)
            .attach(),
    )
}

fn post_response(name: String, response: &ExportResponse) {
    match serde_json::to_string(response) {
        Ok(payload) => post_message_to_plugin(PluginMessage {
            name,
            payload,
            worker_name: None,
        }),
        Err(e) => tracing::warn!(error = %e, "failed to serialize export response"),
    }
}

impl ZellijWorker<'_> for ExportWorker {
    fn on_message(&mut self, message: String, payload: String) {
        WORKER_TRACING.call_once(|| crate::observability::init_tracing(&crate::Config::default()));

        let response = match serde_json::from_str::<ExportMessage>(&payload) {
            Ok(request) => self.handle_message(request),
            Err(e) => {
                tracing::warn!(error = %e, "malformed export request");
                ExportResponse::Error {
                    message: format!("malformed export request: {e}"),
                }
            }
        };

        post_response(message, &response);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FormRecord;

    fn submission() -> Submission {
        let record = FormRecord {
            first_name: "John".to_string(),
            ..FormRecord::default()
        };
        Submission::new(record, 1_700_000_000)
    }

    #[test]
    fn export_message_writes_file_and_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let message = ExportMessage::export(
            ExportKind::Json,
            submission(),
            dir.path().to_string_lossy().into_owned(),
        );

        let response = ExportWorker.handle_message(message);

        let ExportResponse::Exported { kind, path } = response else {
            panic!("expected Exported, got {response:?}");
        };
        assert_eq!(kind, ExportKind::Json);
        assert!(path.ends_with("submission-20231114-221320.json"));

        let written = std::fs::read_to_string(dir.path().join("submission-20231114-221320.json")).unwrap();
        assert!(written.contains("\"firstName\": \"John\""));
    }

    #[test]
    fn document_export_writes_text_file() {
        let dir = tempfile::tempdir().unwrap();
        let message = ExportMessage::export(
            ExportKind::Document,
            submission(),
            dir.path().to_string_lossy().into_owned(),
        );

        let response = ExportWorker.handle_message(message);
        assert!(matches!(response, ExportResponse::Exported { kind: ExportKind::Document, .. }));

        let text = std::fs::read_to_string(dir.path().join("submission-20231114-221320.txt")).unwrap();
        assert!(text.starts_with("Form Submission\n"));
    }

    #[test]
    fn unwritable_directory_becomes_error_response() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();

        let message = ExportMessage::export(
            ExportKind::Json,
            submission(),
            blocker.join("nested").to_string_lossy().into_owned(),
        );

        let response = ExportWorker.handle_message(message);
        let ExportResponse::Error { message } = response else {
            panic!("expected Error, got {response:?}");
        };
        assert!(message.starts_with("JSON export failed"));
    }
}
