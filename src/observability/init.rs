//! Subscriber setup connecting `tracing` to the file exporter.

use super::tracer;
use crate::infrastructure::paths;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name recorded on every exported span.
pub const SERVICE_NAME: &str = "zform";

/// Trace file name inside the plugin data directory.
pub const TRACE_FILE: &str = "zform-otlp.json";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` followed by an OpenTelemetry layer exporting to
/// `zform-otlp.json` in the data directory.
///
/// Tracing is best effort. If the data directory cannot be created, or a
/// subscriber is already installed (the worker thread calls this too), the
/// call returns without doing anything.
///
/// ```no_run
/// use zform::{observability::init_tracing, Config};
///
/// init_tracing(&Config {
///     trace_level: "debug".to_string(),
///     ..Config::default()
/// });
/// tracing::debug!("tracing active");
/// ```
pub fn init_tracing(config: &Config) {
    let data_dir = paths::get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::create_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .try_init();
}
