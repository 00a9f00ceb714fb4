//! redfishd - Redfish mock server daemon
//!
//! Serves a fixed catalog of Redfish resources behind a single basic-auth
//! credential pair.
//!
//! Usage:
//!   redfishd [--port 8080] [--host localhost] [--config redfishd.toml]
//!   redfishd -port 8080 -host 0.0.0.0
//!
//! Logging is controlled with `RUST_LOG`.

mod cli;
mod config;

use anyhow::Context;
use redfish_api::{create_router, AuthPolicy};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::Cli;
use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "redfishd=info,redfish_api=info,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse_normalized();

    let config = match cli.config {
        Some(ref path) => {
            tracing::info!("Loading config from: {}", path.display());
            Config::load_from(path)?
        }
        None => Config::default(),
    };
    let settings = config.merge_with_args(&cli);

    tracing::info!(
        host = %settings.host,
        port = settings.port,
        username = %settings.credentials.username,
        realm = %settings.realm,
        public_discovery = settings.policy == AuthPolicy::DiscoveryExempt,
        "Starting redfishd (Redfish mock server)"
    );

    let app = create_router(settings.app_state());

    let listener = tokio::net::TcpListener::bind((settings.host.as_str(), settings.port))
        .await
        .with_context(|| format!("Failed to bind {}:{}", settings.host, settings.port))?;
    tracing::info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
