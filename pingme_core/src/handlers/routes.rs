//! The route table, built once at startup and handed to the server

use super::{handle_echo, handle_greeting, handle_health};
use crate::error::AppError;
use axum::{http::Uri, routing::any, Router};

/// Handlers accept every verb here and run their own method gate, so a
/// wrong verb always answers with an envelope.
pub fn create_routes() -> Router {
    Router::new()
        .route("/", any(handle_greeting))
        .route("/healthz", any(handle_health))
        .route("/echo", any(handle_echo))
        .fallback(handle_not_found)
}

async fn handle_not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::test_support::{envelope_of, send};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };

    #[tokio::test]
    async fn test_unknown_route() {
        let request = Request::builder()
            .uri("/does-not-exist")
            .body(Body::empty())
            .unwrap();

        let response = send(create_routes(), request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let envelope = envelope_of(response).await;
        assert!(!envelope.success);
        assert_eq!(
            envelope.error.as_deref(),
            Some("Route not found: /does-not-exist")
        );
    }

    #[tokio::test]
    async fn test_routes_are_exact() {
        for path in ["/healthz/", "/echo/extra", "/HEALTHZ"] {
            let request = Request::builder().uri(path).body(Body::empty()).unwrap();
            let response = send(create_routes(), request).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND, "path {}", path);
        }
    }
}
