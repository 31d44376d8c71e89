//! `POST /echo`
//!
//! Four gates run in order and the first failure ends the request:
//! method, content type, JSON decode, non-empty message.

use crate::{
    error::Result,
    extractors::StrictJson,
    models::{EchoPayload, EchoRequest, Envelope},
    response::EnvelopeResponse,
    validation::{ensure_method, ensure_non_empty},
};
use axum::{
    body::Body,
    extract::{FromRequest, Request},
    http::Method,
};
use chrono::Utc;
use tracing::info;

pub const ECHO_PROCESSED: &str = "Echo processed successfully";

pub async fn handle_echo(request: Request<Body>) -> Result<EnvelopeResponse> {
    ensure_method(request.method(), Method::POST)?;

    let StrictJson(EchoRequest { message }) = StrictJson::from_request(request, &()).await?;
    ensure_non_empty(&message)?;

    let payload = EchoPayload::from_message(message, Utc::now());
    info!(length = payload.length, "POST /echo - Echo processed");

    Ok(EnvelopeResponse::ok(Envelope::success(
        ECHO_PROCESSED,
        payload.into(),
    )))
}
