//! Tracer provider backed by a file span exporter.
//!
//! Zellij plugins run sandboxed without network access, so spans are written
//! as OTLP/JSON lines to a local file instead of being sent to a collector.

use super::file_writer::{RotatingFile, DEFAULT_MAX_BYTES};
use super::span_formatter::SpanFormatter;
use futures_util::future::BoxFuture;
use opentelemetry::trace::TraceError;
use opentelemetry_sdk::export::trace::{ExportResult, SpanData, SpanExporter};
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;

/// Span exporter appending one OTLP document per batch.
#[derive(Debug)]
struct FileSpanExporter {
    file: RotatingFile,
    formatter: SpanFormatter,
    stopped: bool,
}

impl FileSpanExporter {
    fn new(path: PathBuf, resource: &Resource) -> Self {
        Self {
            file: RotatingFile::new(path, DEFAULT_MAX_BYTES),
            formatter: SpanFormatter::new(resource),
            stopped: false,
        }
    }

    fn write_batch(&self, batch: &[SpanData]) -> ExportResult {
        if self.stopped {
            return Err(TraceError::from("file exporter already shut down"));
        }
        let line = self
            .formatter
            .format_batch(batch)
            .map_err(|e| TraceError::from(e.to_string()))?;
        self.file
            .write_line(&line)
            .map_err(|e| TraceError::from(e.to_string()))
    }
}

impl SpanExporter for FileSpanExporter {
    fn export(&mut self, batch: Vec<SpanData>) -> BoxFuture<'static, ExportResult> {
        let result = self.write_batch(&batch);
        Box::pin(std::future::ready(result))
    }

    fn shutdown(&mut self) {
        self.stopped = true;
    }

    fn set_resource(&mut self, resource: &Resource) {
        self.formatter = SpanFormatter::new(resource);
    }
}

/// Builds a provider that exports every finished span straight to `path`.
///
/// The simple (unbatched) processor is used because the plugin runtime has
/// no async executor to drive a batch processor.
pub fn create_tracer_provider(path: PathBuf, resource: Resource) -> TracerProvider {
    let exporter = FileSpanExporter::new(path, &resource);

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::KeyValue;

    #[test]
    fn exporter_writes_a_line_per_batch() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("zform-otlp.json");
        let resource = Resource::new(vec![KeyValue::new("service.name", "zform")]);
        let exporter = FileSpanExporter::new(path.clone(), &resource);

        exporter.write_batch(&[]).unwrap();
        exporter.write_batch(&[]).unwrap();

        let text = std::fs::read_to_string(path).unwrap();
        assert_eq!(text.lines().count(), 2);
        assert!(text.starts_with("{\"resourceSpans\""));
    }

    #[test]
    fn exporter_refuses_batches_after_shutdown() {
        let dir = tempfile::tempdir().unwrap();
        let resource = Resource::new(vec![KeyValue::new("service.name", "zform")]);
        let mut exporter = FileSpanExporter::new(dir.path().join("t.json"), &resource);

        exporter.shutdown();
        assert!(exporter.write_batch(&[]).is_err());
    }
}
