//! Liveness check. Polled often, so it does no I/O and logs at debug.

use crate::{
    error::Result,
    models::{Envelope, HealthPayload},
    response::EnvelopeResponse,
    validation::ensure_method,
};
use axum::http::Method;
use chrono::Utc;
use tracing::debug;

pub const SERVICE_HEALTHY: &str = "Service is healthy";

pub async fn handle_health(method: Method) -> Result<EnvelopeResponse> {
    ensure_method(&method, Method::GET)?;
    debug!("GET /healthz - Liveness check");

    Ok(EnvelopeResponse::ok(Envelope::success(
        SERVICE_HEALTHY,
        HealthPayload::new(Utc::now()).into(),
    )))
}
