//! HTTP routes.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;

use steamshelf_steam_api::Client;

use crate::handlers;

/// Shared state: the Steam client holding the API key.
#[derive(Clone)]
pub struct AppState {
    pub steam: Arc<Client>,
}

pub fn router(steam: Arc<Client>) -> Router {
    Router::new()
        .route("/", get(handlers::page))
        .route("/api/games", post(handlers::lookup_games))
        .route("/ws", get(handlers::ws_search))
        .layer(CorsLayer::permissive())
        .with_state(AppState { steam })
}
