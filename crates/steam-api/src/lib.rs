//! Steam Web API client: vanity name resolution and owned-games listing.
//!
//! Wraps the two endpoints Steamshelf consumes
//! (`ISteamUser/ResolveVanityURL` and `IPlayerService/GetOwnedGames`) and
//! owns response-shape validation plus normalization into [`GameRecord`]
//! with derived CDN artwork URLs.

pub mod client;
pub mod error;
pub mod types;

pub use client::Client;
pub use error::SteamApiError;
pub use types::{
    GameRecord, OwnedGames, SteamId, VanityResolution, capsule_231_url, capsule_616_url,
    header_url, hero_capsule_url,
};
