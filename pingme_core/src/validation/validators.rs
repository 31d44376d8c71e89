use crate::{
    error::{AppError, Result},
    response::JSON_CONTENT_TYPE,
};
use axum::http::{header, HeaderMap, Method};

pub fn ensure_method(actual: &Method, allowed: Method) -> Result<()> {
    if *actual == allowed {
        Ok(())
    } else {
        Err(AppError::MethodNotAllowed { allowed })
    }
}

/// The header must be exactly `application/json`: no parameters, no
/// wildcards. A missing or non-UTF-8 header fails the same way.
pub fn ensure_json_content_type(headers: &HeaderMap) -> Result<()> {
    match headers.get(header::CONTENT_TYPE).map(|v| v.to_str()) {
        Some(Ok(value)) if value == JSON_CONTENT_TYPE => Ok(()),
        _ => Err(AppError::UnsupportedMediaType),
    }
}

/// No trimming: only the empty string is rejected.
pub fn ensure_non_empty(message: &str) -> Result<()> {
    if message.is_empty() {
        Err(AppError::EmptyMessage)
    } else {
        Ok(())
    }
}
