//! Subscriber setup: `tracing` macros to an OTLP JSON trace file.

use super::tracer;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const SERVICE_NAME: &str = "toolshelf";

/// File name of the trace export inside the data directory.
pub const TRACE_FILE: &str = "toolshelf-otlp.json";

/// Installs the global tracing subscriber.
///
/// The filter comes from `config.trace_level` (default `"info"`), using
/// [`EnvFilter`] directive syntax such as `"toolshelf=debug"`. Spans are
/// exported to `<data_dir>/toolshelf-otlp.json`; with `trace_stderr` set,
/// events are also printed to stderr.
///
/// Observability is optional: if the data directory cannot be created or a
/// subscriber is already installed, this returns without doing anything.
///
/// # Example
///
/// ```rust
/// use toolshelf::observability::init_tracing;
/// use toolshelf::Config;
///
/// let dir = std::env::temp_dir().join("toolshelf-doc-trace");
/// let config = Config {
///     data_dir: Some(dir),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    let data_dir = config.data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let resource = Resource::new(vec![KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = tracer::file_tracer_provider(data_dir.join(TRACE_FILE), resource, SERVICE_NAME);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let stderr_layer = config
        .trace_stderr
        .then(|| fmt::layer().with_writer(std::io::stderr).with_target(false));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(otel_layer)
        .with(stderr_layer)
        .try_init();
}
