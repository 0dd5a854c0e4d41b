// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for content configuration
//!
//! Scenarios from remote-content.feature:
//! - Default timeouts are five seconds each
//! - Environment overrides defaults
//! - Zero timeouts are rejected

use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use slidefeed_core::content::{DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
use slidefeed_core::{ConfigError, ContentConfig};

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn test_config_default() {
    let config = ContentConfig::default();

    assert_eq!(config.connect_timeout, Duration::from_millis(5000));
    assert_eq!(config.read_timeout, Duration::from_millis(5000));
    assert_eq!(config.connect_timeout, DEFAULT_CONNECT_TIMEOUT);
    assert_eq!(config.read_timeout, DEFAULT_READ_TIMEOUT);
    assert!(config.manifest_path.is_none());
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_from_empty_lookup_is_default() {
    let config = ContentConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ContentConfig::default());
}

#[test]
fn test_config_from_lookup_overrides() {
    let config = ContentConfig::from_lookup(lookup(&[
        ("SLIDEFEED_ENDPOINT", "https://cdn.example.org/home.json"),
        ("SLIDEFEED_CONNECT_TIMEOUT_MS", "1500"),
        ("SLIDEFEED_READ_TIMEOUT_MS", " 2500 "),
        ("SLIDEFEED_MANIFEST", "/opt/slidefeed/assets.txt"),
    ]))
    .unwrap();

    assert_eq!(config.endpoint, "https://cdn.example.org/home.json");
    assert_eq!(config.connect_timeout, Duration::from_millis(1500));
    assert_eq!(config.read_timeout, Duration::from_millis(2500));
    assert_eq!(
        config.manifest_path,
        Some(PathBuf::from("/opt/slidefeed/assets.txt"))
    );
}

#[test]
fn test_config_from_lookup_rejects_garbage_timeout() {
    let err = ContentConfig::from_lookup(lookup(&[("SLIDEFEED_READ_TIMEOUT_MS", "soon")]))
        .unwrap_err();

    assert_eq!(
        err,
        ConfigError::InvalidValue {
            key: "SLIDEFEED_READ_TIMEOUT_MS",
            value: "soon".to_string(),
        }
    );
}

#[test]
fn test_config_from_lookup_rejects_zero_timeout() {
    let err = ContentConfig::from_lookup(lookup(&[("SLIDEFEED_CONNECT_TIMEOUT_MS", "0")]))
        .unwrap_err();
    assert_eq!(err, ConfigError::ZeroTimeout("connect"));
}

#[test]
fn test_config_rejects_unparseable_endpoint() {
    let config = ContentConfig::default().with_endpoint("not a url");
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidEndpoint(_))
    ));
}

#[test]
fn test_config_builders() {
    let config = ContentConfig::default()
        .with_endpoint("http://localhost:9000/feed")
        .with_timeouts(Duration::from_millis(100), Duration::from_millis(200))
        .with_manifest_path("assets.txt");

    assert_eq!(config.endpoint_url().unwrap().port(), Some(9000));
    assert_eq!(config.connect_timeout, Duration::from_millis(100));
    assert_eq!(config.read_timeout, Duration::from_millis(200));
    assert_eq!(config.manifest_path, Some(PathBuf::from("assets.txt")));
}
