//! The trusted lookup boundary.
//!
//! The only code path that reaches the Steam client, and with it the API
//! key. Resolution failure short-circuits before the library fetch; no
//! partial results.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use steamshelf_search::{LibraryProvider, SearchError};
use steamshelf_steam_api::{Client, GameRecord, SteamApiError};

/// Resolves a username and fetches its library, in that order.
pub async fn lookup_library(
    client: &Client,
    username: &str,
) -> Result<Vec<GameRecord>, SteamApiError> {
    let steam_id = client.resolve_vanity(username).await?;
    client.get_owned_games(&steam_id).await
}

/// [`LibraryProvider`] backed by the real Steam client.
pub struct SteamLibraryProvider {
    client: Arc<Client>,
}

impl SteamLibraryProvider {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }
}

impl LibraryProvider for SteamLibraryProvider {
    fn lookup(
        &self,
        username: &str,
    ) -> Pin<Box<dyn Future<Output = Result<Vec<GameRecord>, SearchError>> + Send + '_>> {
        let username = username.to_string();
        Box::pin(async move {
            lookup_library(&self.client, &username)
                .await
                .map_err(|e| SearchError::Lookup(e.to_string()))
        })
    }
}
