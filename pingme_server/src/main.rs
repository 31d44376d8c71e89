//! Entry point for the PingMe API binary

use anyhow::{Context, Result};
use pingme_core::{config::LoggingConfig, create_app, run_server, AppConfig, LogFormat, ENDPOINTS};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load().context("Failed to load configuration")?;

    init_tracing(&config.logging);

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_address()))?;

    info!("PingMe API v{} starting on {}", env!("CARGO_PKG_VERSION"), addr);
    info!("Endpoints available:");
    for (method, path, description) in ENDPOINTS {
        info!("  {:<4} {} - {}", method, path, description);
    }

    let app = create_app(&config);

    run_server(app, addr).await.context("Server failed")?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(logging: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(cfg!(debug_assertions))
        .with_line_number(cfg!(debug_assertions));

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(logging.format == LogFormat::Json);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}
