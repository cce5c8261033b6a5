//! linechatd - a line-oriented chat server.
//!
//! Clients speak prefixed text commands over newline-delimited TCP: login,
//! join named rooms or ad-hoc IM groups, exchange messages, query presence.

mod config;
mod error;
mod handlers;
mod network;
mod session;
mod state;

use crate::config::Config;
use crate::network::Gateway;
use crate::state::Hub;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = Config::load(&config_path).map_err(|e| {
        error!(path = %config_path, error = %e, "Failed to load config");
        e
    })?;

    info!(
        server = %config.server.name,
        address = %config.listen.address,
        prefix = %config.protocol.prefix,
        "Starting linechatd"
    );

    // Create the Hub (shared state) and start accepting connections.
    let hub = Arc::new(Hub::new(&config));
    let gateway = Gateway::bind(config.listen.address, hub).await?;
    gateway.run().await
}
