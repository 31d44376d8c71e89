use crate::{
    error::Result,
    models::{Envelope, GreetingPayload},
    response::EnvelopeResponse,
    validation::ensure_method,
};
use axum::http::Method;
use chrono::Utc;
use tracing::info;

pub const GREETING_RETRIEVED: &str = "Greeting retrieved successfully";

pub async fn handle_greeting(method: Method) -> Result<EnvelopeResponse> {
    ensure_method(&method, Method::GET)?;
    info!("GET / - Greeting");

    let payload = GreetingPayload::new(Utc::now());

    Ok(EnvelopeResponse::ok(Envelope::success(
        GREETING_RETRIEVED,
        payload.into(),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handlers::{
        create_routes,
        test_support::{envelope_of, send},
    };
    use crate::models::ResponseData;
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/")
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn test_greeting() {
        let before = Utc::now();
        let response = send(create_routes(), request(Method::GET)).await;
        let after = Utc::now();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::CONTENT_TYPE).unwrap(),
            "application/json"
        );

        let envelope = envelope_of(response).await;
        assert!(envelope.success);
        assert_eq!(envelope.message.as_deref(), Some(GREETING_RETRIEVED));
        assert!(envelope.error.is_none());

        match envelope.data {
            Some(ResponseData::Greeting(payload)) => {
                assert_eq!(payload.greeting, "Welcome to PingMe API!");
                assert!(payload.timestamp >= before && payload.timestamp <= after);
            }
            other => panic!("expected greeting payload, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_greeting_wrong_method() {
        for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
            let response = send(create_routes(), request(method.clone())).await;
            assert_eq!(
                response.status(),
                StatusCode::METHOD_NOT_ALLOWED,
                "method {}",
                method
            );
            assert_eq!(response.headers().get(header::ALLOW).unwrap(), "GET");

            let envelope = envelope_of(response).await;
            assert!(!envelope.success);
            assert_eq!(envelope.error.as_deref(), Some("Method not allowed. Use GET."));
            assert!(envelope.data.is_none());
            assert!(envelope.message.is_none());
        }
    }
}
