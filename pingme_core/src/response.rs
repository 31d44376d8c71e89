//! JSON envelope emitter

use crate::models::Envelope;
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Serialize `body` and answer with `status` and `Content-Type: application/json`.
///
/// Status and headers are fixed before the body is produced. If serialization
/// fails the error is logged and the response goes out with an empty body;
/// the client has no further channel to hear about it.
pub fn respond_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    let bytes = match serde_json::to_vec(body) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::error!("Error encoding JSON response: {}", e);
            Vec::new()
        }
    };

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(JSON_CONTENT_TYPE),
    );
    response
}

/// An envelope paired with the status it is sent with.
#[derive(Debug, Clone)]
pub struct EnvelopeResponse {
    pub status: StatusCode,
    pub envelope: Envelope,
}

impl EnvelopeResponse {
    pub fn new(status: StatusCode, envelope: Envelope) -> Self {
        Self { status, envelope }
    }

    pub fn ok(envelope: Envelope) -> Self {
        Self::new(StatusCode::OK, envelope)
    }
}

impl IntoResponse for EnvelopeResponse {
    fn into_response(self) -> Response {
        respond_json(self.status, &self.envelope)
    }
}
