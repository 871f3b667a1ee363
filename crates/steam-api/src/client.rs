//! Async client for the two Steam Web API endpoints.
//!
//! Each full lookup performs exactly two outbound calls: one vanity
//! resolution, one owned-games fetch. Request URLs carry the API key as a
//! query parameter and are therefore never logged.

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use tracing::{debug, warn};

use crate::error::SteamApiError;
use crate::types::{GameRecord, OwnedGames, SteamId, VanityResolution};

const DEFAULT_BASE_URL: &str = "https://api.steampowered.com";

/// Steam Web API client.
///
/// Holds the server-side API key. The key stays inside this crate and the
/// process that constructs the client; it is never part of any value handed
/// to the page layer.
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Creates a client against the production Steam Web API.
    pub fn new(api_key: &str) -> Result<Self, SteamApiError> {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Creates a client against a non-default base URL (tests).
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self, SteamApiError> {
        if api_key.is_empty() {
            return Err(SteamApiError::MissingApiKey);
        }
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.trim_end_matches('/').into(),
        })
    }

    /// Resolves a vanity username to a [`SteamId`].
    ///
    /// Fails with [`SteamApiError::Resolution`] when upstream reports a
    /// non-success code; the error message is the upstream message prefixed
    /// with the queried username.
    pub async fn resolve_vanity(&self, username: &str) -> Result<SteamId, SteamApiError> {
        let vanity = utf8_percent_encode(username, NON_ALPHANUMERIC);
        let url = format!(
            "{}/ISteamUser/ResolveVanityURL/v0001/?key={}&vanityurl={vanity}",
            self.base_url, self.api_key
        );

        let body = self.get_text(&url).await?;
        match VanityResolution::from_json(&body)? {
            VanityResolution::Resolved(id) => {
                debug!(username, steam_id = %id, "resolved vanity name");
                Ok(id)
            }
            VanityResolution::Failed { code, message } => {
                debug!(username, code, "vanity resolution failed");
                Err(SteamApiError::Resolution {
                    username: username.into(),
                    message,
                })
            }
        }
    }

    /// Fetches the owned-games library for a resolved account.
    ///
    /// Returns the normalized records in upstream order. The derived artwork
    /// URLs involve no further network round-trips.
    pub async fn get_owned_games(
        &self,
        steam_id: &SteamId,
    ) -> Result<Vec<GameRecord>, SteamApiError> {
        let url = format!(
            "{}/IPlayerService/GetOwnedGames/v0001/?key={}&steamid={}&format=json&include_appinfo=true",
            self.base_url, self.api_key, steam_id
        );

        let body = self.get_text(&url).await?;
        let owned = OwnedGames::from_json(&body)?;
        if owned.game_count as usize != owned.games.len() {
            warn!(
                game_count = owned.game_count,
                returned = owned.games.len(),
                "owned games count does not match returned list"
            );
        }
        debug!(steam_id = %steam_id, games = owned.games.len(), "fetched library");
        Ok(owned.games)
    }

    /// Performs a GET and returns the body text.
    ///
    /// A non-2xx status maps to [`SteamApiError::Transport`] carrying the
    /// raw body as detail.
    async fn get_text(&self, url: &str) -> Result<String, SteamApiError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SteamApiError::Transport(body));
        }
        Ok(body)
    }
}
