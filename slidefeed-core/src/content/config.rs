// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration for remote content fetching

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default bound on establishing a connection
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Default bound on each read from the connection
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(5000);

const ENV_ENDPOINT: &str = "SLIDEFEED_ENDPOINT";
const ENV_CONNECT_TIMEOUT_MS: &str = "SLIDEFEED_CONNECT_TIMEOUT_MS";
const ENV_READ_TIMEOUT_MS: &str = "SLIDEFEED_READ_TIMEOUT_MS";
const ENV_MANIFEST: &str = "SLIDEFEED_MANIFEST";

/// Configuration for the content pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentConfig {
    /// Remote content URL (e.g., "http://127.0.0.1:8080/content.json")
    pub endpoint: String,

    /// Bound on establishing the connection
    pub connect_timeout: Duration,

    /// Bound on each read once connected
    pub read_timeout: Duration,

    /// Asset manifest on disk (bundled manifest when unset)
    pub manifest_path: Option<PathBuf>,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:8080/content.json".to_string(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            manifest_path: None,
        }
    }
}

impl ContentConfig {
    /// Build a config from `SLIDEFEED_*` environment variables over defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup over defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENV_ENDPOINT) {
            config.endpoint = endpoint;
        }
        if let Some(raw) = lookup(ENV_CONNECT_TIMEOUT_MS) {
            config.connect_timeout = parse_millis(ENV_CONNECT_TIMEOUT_MS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_READ_TIMEOUT_MS) {
            config.read_timeout = parse_millis(ENV_READ_TIMEOUT_MS, &raw)?;
        }
        if let Some(path) = lookup(ENV_MANIFEST) {
            config.manifest_path = Some(PathBuf::from(path));
        }

        config.validate()?;
        Ok(config)
    }

    /// Configure the remote endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Configure both timeouts
    pub fn with_timeouts(mut self, connect: Duration, read: Duration) -> Self {
        self.connect_timeout = connect;
        self.read_timeout = read;
        self
    }

    /// Configure a manifest file on disk
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = Some(path.into());
        self
    }

    /// Check that the endpoint is an http(s) URL and both timeouts are non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.endpoint_url()?;
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("connect"));
        }
        if self.read_timeout.is_zero() {
            return Err(ConfigError::ZeroTimeout("read"));
        }
        Ok(())
    }

    /// Parsed endpoint URL
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(&self.endpoint)
            .map_err(|e| ConfigError::InvalidEndpoint(format!("{}: {}", self.endpoint, e)))?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ConfigError::InvalidEndpoint(format!(
                "unsupported scheme: {}",
                other
            ))),
        }
    }
}

fn parse_millis(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|_| ConfigError::InvalidValue {
            key,
            value: raw.to_string(),
        })
}

/// Errors in content configuration
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Endpoint is not an http(s) URL
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A timeout was zero
    #[error("{0} timeout must be greater than zero")]
    ZeroTimeout(&'static str),

    /// An environment value could not be parsed
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
    },

    /// The HTTP client could not be built
    #[error("HTTP client error: {0}")]
    Client(String),
}
