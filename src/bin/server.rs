//! Admissions assistant HTTP server binary.
//!
//! Reads the admissions context once, then serves the landing page, the
//! `/ask` endpoint and the suggestion list until Ctrl-C.
//!
//! # Environment Variables
//!
//! See [`admissions_assistant::config`] for the full list. `RUST_LOG` sets the
//! tracing filter (default: `info,admissions_assistant=debug`).
//!
//! # Usage
//!
//! ```bash
//! ADMISSIONS_DATA=admissions_data.txt cargo run --bin server
//! ```

use admissions_assistant::config::AppConfig;
use admissions_assistant::server::{app_router, AppState};
use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,admissions_assistant=debug".into()),
        )
        .init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    let context = config.load_context()?;
    tracing::info!(
        path = %config.context_path,
        chars = context.len(),
        "loaded admissions context"
    );

    let state = AppState::new(&config, context)?;
    let app = app_router(state);

    let bind_addr = config.bind_addr();
    tracing::info!("admissions-assistant starting on {}", bind_addr);
    tracing::info!(
        url = %config.inference.url,
        model = %config.inference.model,
        timeout_secs = config.inference.timeout.as_secs(),
        "inference backend"
    );

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server failed")?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
