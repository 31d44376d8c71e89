//! Core library for the PingMe API: envelope, validators, handlers and the
//! server runner. Every response is a JSON envelope; handlers share no state.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod validation;

pub use self::config::{AppConfig, LogFormat};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use models::{EchoPayload, EchoRequest, Envelope, GreetingPayload, HealthPayload, ResponseData};
pub use response::{respond_json, EnvelopeResponse};

use axum::{extract::DefaultBodyLimit, Router};
use std::{future::Future, net::SocketAddr};
use tokio::{net::TcpListener, signal};
use tower::ServiceBuilder;
use tower_http::timeout::RequestBodyTimeoutLayer;
use tracing::{error, info};

/// `(method, path, description)` for every route, in startup-log order.
pub const ENDPOINTS: &[(&str, &str, &str)] = &[
    ("GET", "/", "Greeting endpoint"),
    ("GET", "/healthz", "Health check endpoint"),
    ("POST", "/echo", "Echo endpoint"),
];

/// The route table with the server-wide limits applied.
///
/// A body that stalls past the read timeout fails while it is buffered, so
/// the echo handler answers with an `Invalid JSON` envelope.
pub fn create_app(config: &AppConfig) -> Router {
    let limits = ServiceBuilder::new()
        .layer(RequestBodyTimeoutLayer::new(config.body_read_timeout()))
        .layer(DefaultBodyLimit::max(config.server.max_body_bytes));

    let router = create_routes().layer(limits);

    middleware::logging::with_request_tracing(router)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Starting server on {}", listener.local_addr()?);

    serve(listener, app, shutdown_signal()).await
}

/// Serve on an already-bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}
