//! Main entry point for the Mergington activities backend.
//!
//! This file loads configuration and teacher credentials, initializes
//! logging, and serves the Axum router until the process is stopped.

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use mergington_backend::{build_router, config::AppConfig, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().context("Failed to load configuration")?;
    let addr = config.listen_addr()?;
    tracing::info!(?config, "Configuration loaded");

    let teachers_file = config.teachers_file.clone();
    let state = AppState::from_config(config).with_context(|| {
        format!(
            "Failed to load teacher credentials from {}",
            teachers_file.display()
        )
    })?;
    if state.credentials.is_empty() {
        tracing::warn!("No teachers configured; roster changes will be impossible");
    }
    tracing::info!(
        teachers = state.credentials.len(),
        activities = state.registry.len().await,
        "State initialized"
    );

    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
