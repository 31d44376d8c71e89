//! Application error types and handling

use crate::{models::Envelope, response::respond_json};
use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Every failure a request can end in. Each one is rendered to the client
/// as a failure envelope; none of them escapes as a panic.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Method not allowed. Use {allowed}.")]
    MethodNotAllowed { allowed: Method },

    #[error("Content-Type must be application/json")]
    UnsupportedMediaType,

    #[error("Invalid JSON: {0}")]
    MalformedBody(String),

    #[error("Message field cannot be empty")]
    EmptyMessage,

    #[error("Route not found: {0}")]
    NotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::MethodNotAllowed { .. } => StatusCode::METHOD_NOT_ALLOWED,
            AppError::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            AppError::MalformedBody(_) | AppError::EmptyMessage => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedBody(err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::debug!(status = status.as_u16(), error = %self, "rejecting request");

        let mut response = respond_json(status, &Envelope::failure(self.to_string()));

        if let AppError::MethodNotAllowed { allowed } = &self {
            if let Ok(value) = HeaderValue::from_str(allowed.as_str()) {
                response.headers_mut().insert(header::ALLOW, value);
            }
        }

        response
    }
}
