//! HTTP server for the roster users page.
//!
//! `GET /` loads the user list through a [`UserSource`] on every request and
//! renders it with [`pages::users_page`]; `?page=<n>` selects the page.

use crate::config::Config;
use axum::{
    Router,
    extract::{Extension, Query, Request, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use maud::Markup;
use opentelemetry::{global, propagation::Extractor};
use roster_business::UserSource;
use roster_utils::version_info::{RuntimeEnv, format_version_for_runtime_env};
use serde::Deserialize;
use tower_http::trace::TraceLayer;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub mod config;
pub mod pages;
pub mod telemetry;
pub mod widgets;

struct HeaderExtractor<'a>(&'a axum::http::HeaderMap);

impl Extractor for HeaderExtractor<'_> {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.to_str().ok())
    }

    fn keys(&self) -> Vec<&str> {
        self.0.keys().map(|k| k.as_str()).collect()
    }
}

/// Build the application router around `source`.
pub async fn routes<S>(source: S, config: Config) -> Router
where
    S: UserSource,
{
    Router::new()
        .route("/", get(users_page::<S>))
        .route("/is-health", get(health_check))
        .fallback(any(catch_all))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let parent_context = global::get_text_map_propagator(|propagator| {
                    propagator.extract(&HeaderExtractor(request.headers()))
                });

                let span = tracing::info_span!(
                    "http_request",
                    http_request.method = ?request.method(),
                    http_request.uri = ?request.uri(),
                    http_request.version = ?request.version(),
                    http_request.user_agent = ?request.headers().get(axum::http::header::USER_AGENT),
                );
                span.set_parent(parent_context);

                span
            }),
        )
        .layer(Extension(config))
        .with_state(source)
}

#[derive(Debug, Default, Deserialize)]
struct PageQuery {
    page: Option<String>,
}

impl PageQuery {
    /// Requested page, 1 when missing or not a number.
    fn requested_page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|page| page.trim().parse().ok())
            .unwrap_or(1)
    }
}

async fn users_page<S>(
    State(source): State<S>,
    Extension(config): Extension<Config>,
    Query(query): Query<PageQuery>,
) -> Markup
where
    S: UserSource,
{
    let result = source.load().await;
    if !result.is_ok() {
        tracing::warn!(status_code = result.status_code, "Rendering load error");
    }

    let version = format_version_for_runtime_env(config.environment().into());
    pages::users_page::render(result, query.requested_page(), &version)
}

async fn health_check(Extension(config): Extension<Config>) -> Response {
    let mut response = (StatusCode::OK, "OK").into_response();

    let runtime_env: RuntimeEnv = config.environment().into();
    let headers = [
        ("x-service-env", config.environment().to_string()),
        ("x-service-version", format_version_for_runtime_env(runtime_env)),
    ];
    for (name, value) in headers {
        if let Ok(value) = HeaderValue::from_str(&value) {
            response
                .headers_mut()
                .insert(HeaderName::from_static(name), value);
        }
    }

    response
}

async fn catch_all() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
