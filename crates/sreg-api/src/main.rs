//! # sreg-api — Binary Entry Point
//!
//! Starts the Axum HTTP server for student registration.
//! Binds to `SREG_BIND_ADDR:PORT` (default `0.0.0.0:8080`).

use sreg_api::state::{AppConfig, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize structured tracing.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    tracing::debug!(?config, "configuration loaded");
    let addr = config.socket_addr();

    let app = sreg_api::app(AppState::with_config(config));

    tracing::info!("Student registration listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
