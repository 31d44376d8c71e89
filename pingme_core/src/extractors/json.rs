//! JSON extractor that checks the content type and rejects unknown fields

use crate::{error::AppError, validation::ensure_json_content_type};
use axum::{
    async_trait,
    body::{Body, Bytes},
    extract::{FromRequest, Request},
};
use serde::{de::DeserializeOwned, Deserialize};

/// Like `axum::Json`, but the content type must be exactly
/// `application/json` and every failure is an [`AppError`] so it renders as
/// an envelope. Strictness about fields comes from `T`'s `Deserialize` impl.
///
/// Only the first JSON value in the body is decoded; anything after it is
/// ignored.
#[derive(Debug, Clone)]
pub struct StrictJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for StrictJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        ensure_json_content_type(req.headers())?;

        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Failed to read request body: {}", rejection.body_text());
            AppError::MalformedBody(rejection.body_text())
        })?;

        let mut deserializer = serde_json::Deserializer::from_slice(&bytes);
        let value: T = Deserialize::deserialize(&mut deserializer)?;
        Ok(StrictJson(value))
    }
}
