use crate::config::Config;
use opentelemetry_sdk::propagation::TraceContextPropagator;
use tracing_stackdriver::CloudTraceConfiguration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "info,roster_services=debug,roster_business=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Without a Google Cloud project the output is human-readable; with one it
/// is Stackdriver JSON linked to Cloud Trace.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
    match config.google_cloud_project() {
        None => {
            tracing_subscriber::registry()
                .with(env_filter())
                .with(tracing_subscriber::fmt::layer())
                .try_init()?;
        }
        Some(project_id) => {
            // W3C trace-context, so inbound `traceparent` headers become span parents.
            opentelemetry::global::set_text_map_propagator(TraceContextPropagator::new());

            let stackdriver_layer = tracing_stackdriver::layer().with_cloud_trace(
                CloudTraceConfiguration {
                    project_id: project_id.to_owned(),
                },
            );
            let otel_layer = tracing_opentelemetry::layer();

            tracing_subscriber::registry()
                .with(env_filter())
                .with(otel_layer)
                .with(stackdriver_layer)
                .try_init()?;
        }
    }

    Ok(())
}
