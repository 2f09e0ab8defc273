//! # Barcode Bot Server
//!
//! Binary entry point: loads configuration, registers slash commands, and
//! serves the interactions endpoint until shutdown.
//!
//! ## Startup
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  env ──► BotConfig ──► AppContext ──► register commands (best effort)  │
//! │                                              │                          │
//! │                                              ▼                          │
//! │                          axum on 0.0.0.0:PORT ──► until Ctrl+C/SIGTERM │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use barcode_bot::{server, AppContext, BotConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("Starting Barcode Bot...");

    // Load configuration
    let config = BotConfig::load().context("failed to load configuration")?;
    info!(
        port = config.port,
        application_id = %config.application_id,
        role = %config.required_role_name,
        "Configuration loaded"
    );

    let ctx = Arc::new(AppContext::new(config)?);

    // Command registration failing leaves previously registered commands in
    // place, so the server still starts.
    if ctx.config.register_commands {
        if let Err(e) = ctx.register_commands().await {
            error!(error = %e, "Failed to register slash commands");
        }
    } else {
        warn!("Slash command registration disabled");
    }

    let addr = SocketAddr::from(([0, 0, 0, 0], ctx.config.port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Keep-alive and interactions server listening");

    axum::serve(listener, server::router(ctx))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
