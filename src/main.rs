use eyre::Context;
use salvo::prelude::*;
use tokio::sync::mpsc;

use methodscribe::config::Config;
use methodscribe::router::build_router;
use methodscribe::state::AppState;
use methodscribe::upstream::{self, GroqClient, UpstreamRequest};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "methodscribe=info".into()),
        )
        .init();

    let config = Config::from_env()?;
    tracing::info!("Starting methodscribe server on port {}", config.port);

    let client = GroqClient::new(&config).context("Failed to build upstream client")?;
    tracing::info!("Upstream model: {}", client.model());

    // Single worker task owns the hosted-API client
    let (upstream_tx, upstream_rx) = mpsc::channel::<UpstreamRequest>(32);
    tokio::spawn(upstream::upstream_task(client, upstream_rx));

    let state = AppState { upstream_tx };
    let router = build_router(state);

    let listen_addr = format!("0.0.0.0:{}", config.port);
    let acceptor = TcpListener::new(&listen_addr).bind().await;

    tracing::info!("HTTP server listening on http://{}", listen_addr);
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health");
    tracing::info!("  GET  /v1/models");
    tracing::info!("  POST /v1/sections/method");

    Server::new(acceptor).serve(router).await;

    Ok(())
}
