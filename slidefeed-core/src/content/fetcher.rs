// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content fetcher for downloading remote content
//!
//! This module provides HTTP-based content fetching with:
//! - Separate connect and read timeouts
//! - Exactly one attempt per call (no retries)
//! - Failures classified as timeout, non-200 status, or network failure

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, warn};
use url::Url;

use super::config::{ConfigError, ContentConfig};

/// Raw response text, or why there is none
pub type FetchResult = Result<String, FetchError>;

/// Anything that can produce raw content text for the store
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Perform one fetch attempt
    async fn fetch(&self) -> FetchResult;
}

/// Fetches content from the remote endpoint
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    client: Client,
    endpoint: Url,
}

impl ContentFetcher {
    /// Create a new content fetcher from config
    pub fn new(config: &ContentConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let endpoint = config.endpoint_url()?;

        // No idle connections are kept, so each attempt closes its own.
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .read_timeout(config.read_timeout)
            .pool_max_idle_per_host(0)
            .user_agent(format!(
                "Slidefeed/{}",
                option_env!("CARGO_PKG_VERSION").unwrap_or("0.1.0")
            ))
            .build()
            .map_err(|e| ConfigError::Client(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Issue one GET against the endpoint
    pub async fn fetch(&self) -> FetchResult {
        debug!(endpoint = %self.endpoint, "fetching content");

        let result = self.get_text().await;
        match &result {
            Ok(text) => debug!(bytes = text.len(), "content fetched"),
            Err(err) => warn!(endpoint = %self.endpoint, error = %err, "content fetch failed"),
        }
        result
    }

    async fn get_text(&self) -> FetchResult {
        let response = self.client.get(self.endpoint.clone()).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        String::from_utf8(body.to_vec()).map_err(|_| {
            FetchError::NetworkFailure("response body is not valid UTF-8".to_string())
        })
    }

    /// Get the endpoint URL
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl ContentSource for ContentFetcher {
    async fn fetch(&self) -> FetchResult {
        ContentFetcher::fetch(self).await
    }
}

/// Fetch `endpoint` once with the given bounds.
///
/// The outer error reports an unusable endpoint or a zero timeout; the inner
/// result is the outcome of the single GET.
pub async fn fetch_once(
    endpoint: &str,
    connect_timeout: Duration,
    read_timeout: Duration,
) -> Result<FetchResult, ConfigError> {
    let config = ContentConfig::default()
        .with_endpoint(endpoint)
        .with_timeouts(connect_timeout, read_timeout);
    let fetcher = ContentFetcher::new(&config)?;
    Ok(fetcher.fetch().await)
}

/// Errors that can occur during content fetching
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connect or read bound exceeded
    #[error("request timed out")]
    Timeout,

    /// A response arrived with a status other than 200
    #[error("HTTP error: {0}")]
    HttpStatus(u16),

    /// No response: connection refused, reset, or otherwise broken
    #[error("network error: {0}")]
    NetworkFailure(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FetchError::Timeout
        } else {
            FetchError::NetworkFailure(err.to_string())
        }
    }
}
