use crate::error::AppError;
use opentelemetry::KeyValue;
use opentelemetry::global;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_otlp::WithExportConfig;
use opentelemetry_sdk::{Resource, runtime, trace as sdktrace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Handle on the span exporter installed by [`init_tracing`].
///
/// The batch processor only exports on its own timer, which never fires while
/// Lambda keeps the execution environment frozen between invocations. Call
/// [`TelemetryGuard::flush`] before handing a response back and
/// [`TelemetryGuard::shutdown`] before the process exits.
#[derive(Clone, Default)]
pub struct TelemetryGuard {
    provider: Option<sdktrace::TracerProvider>,
}

impl TelemetryGuard {
    /// Guard for a subscriber without span export; flushing is a no-op.
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn from_provider(provider: sdktrace::TracerProvider) -> Self {
        Self {
            provider: Some(provider),
        }
    }

    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Export every finished span now.
    pub async fn flush(&self) {
        let Some(provider) = self.provider.clone() else {
            return;
        };

        // force_flush blocks until the batch worker answers.
        match tokio::task::spawn_blocking(move || provider.force_flush()).await {
            Ok(results) => {
                for err in results.into_iter().filter_map(Result::err) {
                    tracing::warn!(error = %err, "Failed to flush spans");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Span flush task failed"),
        }
    }

    /// Flush, then shut the global tracer provider down.
    pub async fn shutdown(self) {
        if !self.is_exporting() {
            return;
        }

        self.flush().await;
        drop(self.provider);

        if let Err(e) = tokio::task::spawn_blocking(global::shutdown_tracer_provider).await {
            tracing::warn!(error = %e, "Tracer provider shutdown task failed");
        }
    }
}

/// Install the global tracing subscriber.
///
/// Events are written to stdout as flattened JSON. When `otlp_endpoint` is
/// set, spans are additionally exported over OTLP/gRPC. `RUST_LOG` takes
/// precedence over `log_level`.
pub fn init_tracing(
    service_name: &str,
    log_level: &str,
    otlp_endpoint: Option<&str>,
) -> Result<TelemetryGuard, AppError> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    let (telemetry, guard) = match otlp_endpoint {
        Some(endpoint) => {
            let exporter = opentelemetry_otlp::new_exporter()
                .tonic()
                .with_endpoint(endpoint)
                .build_span_exporter()
                .map_err(|e| {
                    AppError::ConfigError(anyhow::anyhow!(
                        "Failed to initialize OTLP tracer for service '{}' at endpoint '{}': {}",
                        service_name,
                        endpoint,
                        e
                    ))
                })?;

            let provider = sdktrace::TracerProvider::builder()
                .with_batch_exporter(exporter, runtime::Tokio)
                .with_config(sdktrace::config().with_resource(Resource::new(vec![
                    KeyValue::new("service.name", service_name.to_string()),
                ])))
                .build();

            let tracer = provider.tracer(service_name.to_string());
            let _ = global::set_tracer_provider(provider.clone());

            (
                Some(tracing_opentelemetry::layer().with_tracer(tracer)),
                TelemetryGuard::from_provider(provider),
            )
        }
        None => (None, TelemetryGuard::disabled()),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(telemetry)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .try_init()
        .map_err(|e| AppError::InternalError(anyhow::Error::new(e)))?;

    Ok(guard)
}
