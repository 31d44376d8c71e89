//! Request tracing layer

use axum::Router;
use http::Request;
use std::time::Duration;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::trace::TraceLayer;
use tracing::{debug_span, field, info_span, Span};

/// Orchestrators poll this path constantly; its spans stay at debug.
const HEALTH_PATH: &str = "/healthz";

/// Wrap `router` in a span per request; 4xx answers log at warn.
pub fn with_request_tracing(router: Router) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<_>| {
            let path = request.uri().path();
            if path == HEALTH_PATH {
                debug_span!(
                    "http_request",
                    method = %request.method(),
                    path = %path,
                    status = field::Empty,
                )
            } else {
                info_span!(
                    "http_request",
                    method = %request.method(),
                    path = %path,
                    version = ?request.version(),
                    status = field::Empty,
                )
            }
        })
        .on_request(())
        .on_response(|response: &http::Response<_>, latency: Duration, span: &Span| {
            let status = response.status();
            span.record("status", status.as_u16());

            if status.is_client_error() {
                tracing::warn!(latency_ms = latency.as_millis(), "request rejected");
            } else if status.is_server_error() {
                tracing::error!(latency_ms = latency.as_millis(), "server error response");
            } else {
                tracing::debug!(latency_ms = latency.as_millis(), "request completed");
            }
        })
        .on_failure(
            |error: ServerErrorsFailureClass, latency: Duration, _span: &Span| {
                tracing::error!(
                    latency_ms = latency.as_millis(),
                    error = ?error,
                    "request failed"
                );
            },
        );

    router.layer(trace)
}
