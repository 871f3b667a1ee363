//! HTTP and WebSocket handlers.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use futures_util::{SinkExt, StreamExt};
use serde::Deserialize;
use tracing::{debug, warn};

use steamshelf_search::SearchSession;
use steamshelf_steam_api::{GameRecord, SteamApiError};

use crate::lookup::{self, SteamLibraryProvider};
use crate::routes::AppState;

/// Serves the embedded search page.
pub async fn page() -> Html<&'static str> {
    Html(include_str!("../assets/index.html"))
}

/// One-shot lookup request: the trusted `{username}` entry point.
#[derive(Debug, Deserialize)]
pub struct LookupRequest {
    pub username: String,
}

pub async fn lookup_games(
    State(state): State<AppState>,
    Json(request): Json<LookupRequest>,
) -> Result<Json<Vec<GameRecord>>, ApiError> {
    let games = lookup::lookup_library(&state.steam, &request.username).await?;
    Ok(Json(games))
}

/// Maps a [`SteamApiError`] onto an HTTP response.
///
/// The body is the human-readable message only.
pub struct ApiError(SteamApiError);

impl From<SteamApiError> for ApiError {
    fn from(err: SteamApiError) -> Self {
        Self(err)
    }
}

fn status_for(err: &SteamApiError) -> StatusCode {
    match err {
        SteamApiError::Resolution { .. } => StatusCode::NOT_FOUND,
        SteamApiError::Transport(_) | SteamApiError::Network(_) | SteamApiError::Schema(_) => {
            StatusCode::BAD_GATEWAY
        }
        SteamApiError::MissingApiKey => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        debug!("lookup failed: {}", self.0);
        (status_for(&self.0), self.0.to_string()).into_response()
    }
}

/// Input message from the page: the raw search box value, per keystroke.
#[derive(Debug, Deserialize)]
struct InputMessage {
    input: String,
}

/// Upgrades `/ws` into a per-page search session.
pub async fn ws_search(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| search_socket(socket, state))
}

/// Drives one search session over one socket.
///
/// The page sends `{"input": "..."}` on every keystroke; debouncing and
/// stale-result handling happen here, and every state snapshot is pushed
/// back as JSON.
async fn search_socket(socket: WebSocket, state: AppState) {
    let provider = Arc::new(SteamLibraryProvider::new(Arc::clone(&state.steam)));
    let session = SearchSession::new(provider);
    let mut state_rx = session.subscribe();

    let (mut sender, mut receiver) = socket.split();

    let push = tokio::spawn(async move {
        while state_rx.changed().await.is_ok() {
            let snapshot = state_rx.borrow_and_update().clone();
            let json = match serde_json::to_string(&snapshot) {
                Ok(json) => json,
                Err(e) => {
                    warn!("failed to serialize search state: {e}");
                    continue;
                }
            };
            if sender.send(Message::Text(json.into())).await.is_err() {
                break; // Page went away.
            }
        }
    });

    while let Some(Ok(message)) = receiver.next().await {
        if let Message::Text(text) = message {
            match serde_json::from_str::<InputMessage>(&text) {
                Ok(msg) => session.set_input(msg.input),
                Err(e) => debug!("ignoring malformed input message: {e}"),
            }
        }
    }

    debug!("search socket closed");
    push.abort();
}
