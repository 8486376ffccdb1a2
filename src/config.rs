// src/config.rs

use std::env;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_BACKEND_BASE: &str = "http://localhost:5000";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the listings API, e.g. "http://localhost:5000".
    pub backend_base: String,
    pub bind_addr: String,
    pub max_workers: usize,
    /// `None` means requests to the listings API never time out.
    pub fetch_timeout: Option<Duration>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_base: DEFAULT_BACKEND_BASE.to_string(),
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            max_workers: DEFAULT_MAX_WORKERS,
            fetch_timeout: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Config::default();

        let backend_base = get("LISTINGS_API_BASE").unwrap_or(defaults.backend_base);
        let bind_addr = get("LISTINGS_BIND_ADDR").unwrap_or(defaults.bind_addr);

        let max_workers = match get("LISTINGS_MAX_WORKERS") {
            Some(raw) => parse_number("LISTINGS_MAX_WORKERS", &raw)?,
            None => defaults.max_workers,
        };

        let fetch_timeout = match get("LISTINGS_FETCH_TIMEOUT_SECS") {
            Some(raw) => Some(Duration::from_secs(parse_number(
                "LISTINGS_FETCH_TIMEOUT_SECS",
                &raw,
            )?)),
            None => None,
        };

        Ok(Self {
            backend_base,
            bind_addr,
            max_workers,
            fetch_timeout,
        })
    }
}

fn parse_number<T: std::str::FromStr>(var: &'static str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::Invalid {
        var,
        value: raw.to_string(),
    })
}
