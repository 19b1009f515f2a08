use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;

use thiserror::Error;

use crate::mlb::fetch::RetryPolicy;
use crate::mlb::MLB_BASE_URL;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var} is not in the correct format: {value}")]
    Invalid { var: &'static str, value: String },
}

/// Runtime settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone)]
pub struct Config {
    pub host: Ipv4Addr,
    pub port: u16,
    pub mlb_base_url: String,
    pub retry: RetryPolicy,
    /// Pause between chunks of historical standings requests.
    pub history_pause: Duration,
    pub request_timeout: Duration,
    /// Absolute origin used when building sitemap entries.
    pub public_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: Ipv4Addr::LOCALHOST,
            port: 3000,
            mlb_base_url: MLB_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            history_pause: Duration::from_millis(250),
            request_timeout: Duration::from_secs(10),
            public_base_url: "http://localhost:3000".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        if let Some(host) = lookup("HOST") {
            config.host = parse_var("HOST", host)?;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_var("PORT", port)?;
        }
        if let Some(url) = lookup("MLB_API_BASE_URL") {
            config.mlb_base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(retries) = lookup("MLB_MAX_RETRIES") {
            config.retry.max_retries = parse_var("MLB_MAX_RETRIES", retries)?;
        }
        if let Some(ms) = lookup("MLB_RETRY_DELAY_MS") {
            config.retry.base_delay = Duration::from_millis(parse_var("MLB_RETRY_DELAY_MS", ms)?);
        }
        if let Some(ms) = lookup("MLB_HISTORY_PAUSE_MS") {
            config.history_pause = Duration::from_millis(parse_var("MLB_HISTORY_PAUSE_MS", ms)?);
        }
        if let Some(secs) = lookup("MLB_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_var("MLB_TIMEOUT_SECS", secs)?);
        }
        if let Some(url) = lookup("PUBLIC_BASE_URL") {
            config.public_base_url = url.trim_end_matches('/').to_string();
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from((self.host, self.port))
    }
}

fn parse_var<T: std::str::FromStr>(var: &'static str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { var, value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.mlb_base_url, MLB_BASE_URL);
        assert_eq!(config.retry.max_retries, 3);
        assert_eq!(config.addr().to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn overrides_are_applied() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("MLB_API_BASE_URL", "http://localhost:9999/api/v1/"),
            ("MLB_MAX_RETRIES", "5"),
            ("MLB_RETRY_DELAY_MS", "20"),
        ]))
        .unwrap();

        assert_eq!(config.addr().to_string(), "0.0.0.0:8080");
        assert_eq!(config.mlb_base_url, "http://localhost:9999/api/v1");
        assert_eq!(config.retry.max_retries, 5);
        assert_eq!(config.retry.base_delay, Duration::from_millis(20));
    }

    #[test]
    fn bad_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }
}
