//! Configuration loading and representation.
//!
//! Everything is read from environment variables; unset variables fall back
//! to the defaults below.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub const BIND_ADDR_VAR: &str = "SHOPFRONT_BIND_ADDR";
pub const PRODUCTS_URL_VAR: &str = "SHOPFRONT_PRODUCTS_URL";
pub const ATTRIBUTES_URL_VAR: &str = "SHOPFRONT_ATTRIBUTES_URL";
pub const UPSTREAM_TIMEOUT_VAR: &str = "SHOPFRONT_UPSTREAM_TIMEOUT_SECS";

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_PRODUCTS_URL: &str = "https://draft.grebban.com/backend/products.json";
pub const DEFAULT_ATTRIBUTES_URL: &str = "https://draft.grebban.com/backend/attribute_meta.json";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key} ({value:?}): {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    fn invalid(key: &'static str, value: &str, reason: impl ToString) -> Self {
        Self::Invalid {
            key,
            value: value.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Full process configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

/// Where the two upstream documents live and how long to wait for them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    pub products_url: String,
    pub attributes_url: String,
    pub timeout: Duration,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            products_url: DEFAULT_PRODUCTS_URL.to_string(),
            attributes_url: DEFAULT_ATTRIBUTES_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup (tests pass a map).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_raw = get(BIND_ADDR_VAR, DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::invalid(BIND_ADDR_VAR, &bind_raw, e))?;

        let products_url = parse_url(PRODUCTS_URL_VAR, get(PRODUCTS_URL_VAR, DEFAULT_PRODUCTS_URL))?;
        let attributes_url = parse_url(
            ATTRIBUTES_URL_VAR,
            get(ATTRIBUTES_URL_VAR, DEFAULT_ATTRIBUTES_URL),
        )?;

        let timeout_raw = get(
            UPSTREAM_TIMEOUT_VAR,
            &DEFAULT_UPSTREAM_TIMEOUT_SECS.to_string(),
        );
        let timeout_secs = timeout_raw
            .parse::<u64>()
            .map_err(|e| ConfigError::invalid(UPSTREAM_TIMEOUT_VAR, &timeout_raw, e))?;
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(
                UPSTREAM_TIMEOUT_VAR,
                &timeout_raw,
                "must be greater than zero",
            ));
        }

        Ok(Self {
            server: ServerConfig { bind_addr },
            upstream: UpstreamConfig {
                products_url,
                attributes_url,
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn parse_url(key: &'static str, raw: String) -> Result<String, ConfigError> {
    let url = reqwest::Url::parse(&raw).map_err(|e| ConfigError::invalid(key, &raw, e))?;
    match url.scheme() {
        "http" | "https" => Ok(raw),
        other => Err(ConfigError::invalid(
            key,
            &raw,
            format!("unsupported scheme {other}"),
        )),
    }
}
