//! Steamshelf server.
//!
//! Serves the search page, upgrades `/ws` into per-page search sessions,
//! and exposes the one-shot `/api/games` lookup. This process is the trust
//! boundary: it is the only place the Steam API key is read, and the key
//! never appears in anything sent to the page.

mod config;
mod handlers;
mod lookup;
mod routes;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use steamshelf_steam_api::Client;

use crate::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("info,steamshelf_server=debug,steamshelf_search=debug,steamshelf_steam_api=debug")
        }))
        .init();

    let cfg = ServerConfig::load()?;
    let steam = Arc::new(Client::new(&cfg.api_key)?);

    let app = routes::router(steam);
    let listener = tokio::net::TcpListener::bind(cfg.bind_addr).await?;
    tracing::info!("steamshelf listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}
