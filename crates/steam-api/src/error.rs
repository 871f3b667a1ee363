//! Error types for the Steam Web API client.

/// Errors produced by [`Client`](crate::Client) operations.
///
/// Transport, resolution and schema failures are separate variants so each
/// path stays independently testable instead of funneling through one
/// catch-all.
#[derive(Debug, thiserror::Error)]
pub enum SteamApiError {
    #[error("Steam API key is not set")]
    MissingApiKey,

    /// Non-2xx upstream status; the detail is the raw response body.
    #[error("{0}")]
    Transport(String),

    /// The request never produced a response (connect or read failure).
    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Upstream reported a non-success resolution code for this username.
    #[error("{username}: {message}")]
    Resolution { username: String, message: String },

    /// The response body does not match the expected shape.
    #[error("unexpected response shape: {0}")]
    Schema(String),
}
