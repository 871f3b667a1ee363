//! Server configuration from the environment.

use std::net::SocketAddr;

const API_KEY_VAR: &str = "STEAM_API_KEY";
const ADDR_VAR: &str = "STEAMSHELF_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:8080";

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("invalid {0}: {1}")]
    Invalid(&'static str, String),
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Steam Web API key. Confined to this process; queries carry it only
    /// on outbound upstream calls.
    pub api_key: String,

    /// Address to serve on.
    pub bind_addr: SocketAddr,
}

impl ServerConfig {
    /// Loads configuration from the environment.
    ///
    /// A missing or empty API key is fatal: the server refuses to start
    /// rather than serve queries that can only fail.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(get: impl Fn(&'static str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = get(API_KEY_VAR)
            .filter(|key| !key.is_empty())
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.into());
        let bind_addr = addr
            .parse()
            .map_err(|e| ConfigError::Invalid(ADDR_VAR, format!("{e}")))?;

        Ok(Self { api_key, bind_addr })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'static str, &'a str)]) -> impl Fn(&'static str) -> Option<String> + 'a {
        move |var| {
            pairs
                .iter()
                .find(|(name, _)| *name == var)
                .map(|(_, value)| value.to_string())
        }
    }

    #[test]
    fn missing_api_key_is_fatal() {
        let err = ServerConfig::from_lookup(env(&[])).unwrap_err();
        assert_eq!(err.to_string(), "STEAM_API_KEY is not set");
    }

    #[test]
    fn empty_api_key_is_fatal() {
        let err = ServerConfig::from_lookup(env(&[("STEAM_API_KEY", "")])).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(_)));
    }

    #[test]
    fn default_bind_addr() {
        let cfg = ServerConfig::from_lookup(env(&[("STEAM_API_KEY", "k")])).unwrap();
        assert_eq!(cfg.api_key, "k");
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8080");
    }

    #[test]
    fn custom_bind_addr() {
        let cfg = ServerConfig::from_lookup(env(&[
            ("STEAM_API_KEY", "k"),
            ("STEAMSHELF_ADDR", "0.0.0.0:9999"),
        ]))
        .unwrap();
        assert_eq!(cfg.bind_addr.to_string(), "0.0.0.0:9999");
    }

    #[test]
    fn invalid_bind_addr_errors() {
        let err = ServerConfig::from_lookup(env(&[
            ("STEAM_API_KEY", "k"),
            ("STEAMSHELF_ADDR", "not-an-addr"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid("STEAMSHELF_ADDR", _)));
    }
}
