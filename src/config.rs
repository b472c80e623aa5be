//! Server configuration parsed from environment variables.

use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;

use crate::chat::rules::DEFAULT_FALLBACK_REPLY;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1";
pub const DEFAULT_STATIC_DIR: &str = "static";
pub const DEFAULT_RULES_PATH: &str = "rules.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: IpAddr,
    pub port: u16,
    pub static_dir: PathBuf,
    pub rules_path: PathBuf,
    pub fallback_reply: String,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `BIND_ADDR`: default `127.0.0.1`
    /// - `PORT`: default 5000
    /// - `STATIC_DIR`: directory served for non-API paths, default `static`
    /// - `CHAT_RULES_PATH`: keyword rules for `/chat`, default `rules.json`
    /// - `CHAT_FALLBACK_REPLY`: reply when no rule matches
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if `PORT` or `BIND_ADDR` is set but
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) over an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] on an unparsable `PORT` or `BIND_ADDR`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = env_parse(&lookup, "BIND_ADDR")?.unwrap_or(IpAddr::from([127, 0, 0, 1]));
        let port = env_parse(&lookup, "PORT")?.unwrap_or(DEFAULT_PORT);
        let static_dir = lookup("STATIC_DIR").map_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR), PathBuf::from);
        let rules_path = lookup("CHAT_RULES_PATH").map_or_else(|| PathBuf::from(DEFAULT_RULES_PATH), PathBuf::from);
        let fallback_reply = lookup("CHAT_FALLBACK_REPLY")
            .filter(|reply| !reply.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FALLBACK_REPLY.to_owned());

        Ok(Self { bind_addr, port, static_dir, rules_path, fallback_reply })
    }

    /// `addr:port` to bind the listener to.
    #[must_use]
    pub fn listen_addr(&self) -> std::net::SocketAddr {
        std::net::SocketAddr::new(self.bind_addr, self.port)
    }
}

/// Parse `key` when present. Unset and blank values are `None`.
fn env_parse<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &'static str) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
