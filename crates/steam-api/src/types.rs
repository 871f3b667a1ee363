//! Wire types for the Steam Web API and the normalized game record.
//!
//! Upstream bodies are parsed against a fixed schema; any drift surfaces as
//! [`SteamApiError::Schema`] rather than silently producing partial data.

use serde::{Deserialize, Serialize};

use crate::error::SteamApiError;

/// CDN base for derived capsule art. These URLs are never fetched here.
const CDN_BASE: &str = "https://cdn.cloudflare.steamstatic.com/steam/apps";

/// A resolved numeric Steam account identifier.
///
/// Opaque token: produced by vanity resolution, consumed once by the
/// owned-games fetch, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SteamId(String);

impl SteamId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SteamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

// ---------------------------------------------------------------------------
// Vanity URL resolution
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct VanityEnvelope {
    response: VanityBody,
}

#[derive(Debug, Deserialize)]
struct VanityBody {
    success: i64,
    #[serde(default)]
    steamid: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// Outcome of a vanity URL resolution, as a tagged result.
///
/// Upstream signals success with `success == 1` plus a `steamid`, and
/// failure with any other code plus a `message`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VanityResolution {
    Resolved(SteamId),
    Failed { code: i64, message: String },
}

impl VanityResolution {
    /// Parses the upstream `ResolveVanityURL` response body.
    pub fn from_json(body: &str) -> Result<Self, SteamApiError> {
        let envelope: VanityEnvelope = serde_json::from_str(body)
            .map_err(|e| SteamApiError::Schema(e.to_string()))?;
        let resp = envelope.response;

        if resp.success == 1 {
            let steamid = resp.steamid.ok_or_else(|| {
                SteamApiError::Schema("resolution succeeded without a steamid".into())
            })?;
            Ok(Self::Resolved(SteamId::new(steamid)))
        } else {
            let message = resp.message.ok_or_else(|| {
                SteamApiError::Schema("resolution failed without a message".into())
            })?;
            Ok(Self::Failed {
                code: resp.success,
                message,
            })
        }
    }
}

// ---------------------------------------------------------------------------
// Owned games
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct OwnedGamesEnvelope {
    response: OwnedGamesBody,
}

#[derive(Debug, Deserialize)]
struct OwnedGamesBody {
    game_count: u32,
    games: Vec<OwnedGame>,
}

#[derive(Debug, Deserialize)]
struct OwnedGame {
    appid: u32,
    name: String,
    /// Part of the fixed upstream schema; validated but not carried into
    /// [`GameRecord`].
    #[allow(dead_code)]
    img_icon_url: String,
}

/// A game in the user's library, with derived artwork URLs.
///
/// Built deterministically from an upstream `(appid, name)` pair; immutable
/// once constructed. Serialized camelCase for the page layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameRecord {
    pub title: String,
    pub id: u32,
    pub hero_capsule_image_url: String,
    pub capsule_616_image_url: String,
    pub header_image_url: String,
    pub capsule_231_image_url: String,
}

impl GameRecord {
    fn from_owned(game: OwnedGame) -> Self {
        Self {
            title: game.name,
            id: game.appid,
            hero_capsule_image_url: hero_capsule_url(game.appid),
            capsule_616_image_url: capsule_616_url(game.appid),
            header_image_url: header_url(game.appid),
            capsule_231_image_url: capsule_231_url(game.appid),
        }
    }
}

/// Parsed `GetOwnedGames` response: upstream count plus normalized records.
///
/// Record order matches the upstream order; no sorting or deduplication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedGames {
    pub game_count: u32,
    pub games: Vec<GameRecord>,
}

impl OwnedGames {
    /// Parses the upstream `GetOwnedGames` response body.
    pub fn from_json(body: &str) -> Result<Self, SteamApiError> {
        let envelope: OwnedGamesEnvelope = serde_json::from_str(body)
            .map_err(|e| SteamApiError::Schema(e.to_string()))?;
        let resp = envelope.response;

        Ok(Self {
            game_count: resp.game_count,
            games: resp.games.into_iter().map(GameRecord::from_owned).collect(),
        })
    }
}

// ---------------------------------------------------------------------------
// Derived artwork URLs — pure functions of the app id
// ---------------------------------------------------------------------------

pub fn hero_capsule_url(app_id: u32) -> String {
    format!("{CDN_BASE}/{app_id}/hero_capsule.jpg")
}

pub fn capsule_616_url(app_id: u32) -> String {
    format!("{CDN_BASE}/{app_id}/capsule_616x353.jpg")
}

pub fn header_url(app_id: u32) -> String {
    format!("{CDN_BASE}/{app_id}/header.jpg")
}

pub fn capsule_231_url(app_id: u32) -> String {
    format!("{CDN_BASE}/{app_id}/capsule_231x87.jpg")
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // VanityResolution
    // -----------------------------------------------------------------------

    #[test]
    fn vanity_success_resolves_steamid() {
        let body = r#"{"response":{"success":1,"steamid":"76561198000000000"}}"#;
        let result = VanityResolution::from_json(body).unwrap();
        assert_eq!(
            result,
            VanityResolution::Resolved(SteamId::new("76561198000000000"))
        );
    }

    #[test]
    fn vanity_failure_carries_code_and_message() {
        let body = r#"{"response":{"success":42,"message":"No match"}}"#;
        let result = VanityResolution::from_json(body).unwrap();
        assert_eq!(
            result,
            VanityResolution::Failed {
                code: 42,
                message: "No match".into()
            }
        );
    }

    #[test]
    fn vanity_success_without_steamid_is_schema_error() {
        let body = r#"{"response":{"success":1}}"#;
        let err = VanityResolution::from_json(body).unwrap_err();
        assert!(matches!(err, SteamApiError::Schema(_)));
    }

    #[test]
    fn vanity_failure_without_message_is_schema_error() {
        let body = r#"{"response":{"success":42}}"#;
        let err = VanityResolution::from_json(body).unwrap_err();
        assert!(matches!(err, SteamApiError::Schema(_)));
    }

    #[test]
    fn vanity_malformed_body_is_schema_error() {
        let err = VanityResolution::from_json("not json").unwrap_err();
        assert!(matches!(err, SteamApiError::Schema(_)));
    }

    // -----------------------------------------------------------------------
    // OwnedGames
    // -----------------------------------------------------------------------

    fn games_body() -> &'static str {
        r#"{"response":{"game_count":2,"games":[
            {"appid":440,"name":"Team Fortress 2","img_icon_url":"abc"},
            {"appid":570,"name":"Dota 2","img_icon_url":"def"}
        ]}}"#
    }

    #[test]
    fn owned_games_preserve_upstream_order() {
        let owned = OwnedGames::from_json(games_body()).unwrap();
        assert_eq!(owned.game_count, 2);
        assert_eq!(owned.games.len(), 2);
        assert_eq!(owned.games[0].title, "Team Fortress 2");
        assert_eq!(owned.games[0].id, 440);
        assert_eq!(owned.games[1].title, "Dota 2");
        assert_eq!(owned.games[1].id, 570);
    }

    #[test]
    fn owned_games_derive_all_four_artwork_urls() {
        let owned = OwnedGames::from_json(games_body()).unwrap();
        let game = &owned.games[0];
        let base = "https://cdn.cloudflare.steamstatic.com/steam/apps/440";
        assert_eq!(game.hero_capsule_image_url, format!("{base}/hero_capsule.jpg"));
        assert_eq!(game.capsule_616_image_url, format!("{base}/capsule_616x353.jpg"));
        assert_eq!(game.header_image_url, format!("{base}/header.jpg"));
        assert_eq!(game.capsule_231_image_url, format!("{base}/capsule_231x87.jpg"));
    }

    #[test]
    fn owned_games_missing_fields_is_schema_error() {
        let body = r#"{"response":{"game_count":1,"games":[{"appid":440}]}}"#;
        let err = OwnedGames::from_json(body).unwrap_err();
        assert!(matches!(err, SteamApiError::Schema(_)));
    }

    #[test]
    fn owned_games_missing_list_is_schema_error() {
        let body = r#"{"response":{"game_count":0}}"#;
        let err = OwnedGames::from_json(body).unwrap_err();
        assert!(matches!(err, SteamApiError::Schema(_)));
    }

    // -----------------------------------------------------------------------
    // Artwork URL templates
    // -----------------------------------------------------------------------

    #[test]
    fn artwork_urls_are_pure_in_app_id() {
        assert_eq!(hero_capsule_url(7), hero_capsule_url(7));
        assert_eq!(
            hero_capsule_url(7),
            "https://cdn.cloudflare.steamstatic.com/steam/apps/7/hero_capsule.jpg"
        );
        assert_eq!(
            capsule_616_url(7),
            "https://cdn.cloudflare.steamstatic.com/steam/apps/7/capsule_616x353.jpg"
        );
        assert_eq!(
            header_url(7),
            "https://cdn.cloudflare.steamstatic.com/steam/apps/7/header.jpg"
        );
        assert_eq!(
            capsule_231_url(7),
            "https://cdn.cloudflare.steamstatic.com/steam/apps/7/capsule_231x87.jpg"
        );
    }

    #[test]
    fn game_record_serializes_camel_case() {
        let owned = OwnedGames::from_json(games_body()).unwrap();
        let value = serde_json::to_value(&owned.games[0]).unwrap();
        let obj = value.as_object().unwrap();
        for key in [
            "title",
            "id",
            "heroCapsuleImageUrl",
            "capsule616ImageUrl",
            "headerImageUrl",
            "capsule231ImageUrl",
        ] {
            assert!(obj.contains_key(key), "missing key {key}");
        }
    }
}
