// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI Configuration

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use slidefeed_core::{BundledManifest, ContentConfig, FileManifest, ManifestReader};

/// Manifest shipped with the binary.
const BUNDLED_MANIFEST: &str = include_str!("../assets/manifest.txt");

/// Values given on the command line; each one wins over the environment.
#[derive(Debug, Default)]
pub struct Overrides {
    pub endpoint: Option<String>,
    pub connect_timeout_ms: Option<u64>,
    pub read_timeout_ms: Option<u64>,
    pub manifest: Option<PathBuf>,
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Pipeline configuration.
    pub content: ContentConfig,
}

impl CliConfig {
    /// Resolves defaults, then `SLIDEFEED_*` variables, then flags.
    pub fn resolve(overrides: Overrides) -> Result<Self> {
        let base = ContentConfig::from_env().context("invalid SLIDEFEED_* environment")?;
        let content = apply(base, overrides);
        content.validate().context("invalid configuration")?;
        Ok(Self { content })
    }

    /// Returns the reader for the configured manifest.
    pub fn manifest_reader(&self) -> Box<dyn ManifestReader> {
        match &self.content.manifest_path {
            Some(path) => Box::new(FileManifest::new(path)),
            None => Box::new(BundledManifest(BUNDLED_MANIFEST)),
        }
    }
}

fn apply(mut config: ContentConfig, overrides: Overrides) -> ContentConfig {
    if let Some(endpoint) = overrides.endpoint {
        config.endpoint = endpoint;
    }
    if let Some(ms) = overrides.connect_timeout_ms {
        config.connect_timeout = Duration::from_millis(ms);
    }
    if let Some(ms) = overrides.read_timeout_ms {
        config.read_timeout = Duration::from_millis(ms);
    }
    if let Some(path) = overrides.manifest {
        config.manifest_path = Some(path);
    }
    config
}
