// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Manifest Command
//!
//! Print the asset manifest.

use std::sync::Arc;

use anyhow::Result;
use slidefeed_core::{ContentStore, EventDispatcher};

use crate::config::CliConfig;
use crate::display;

/// Prints one asset identifier per line.
pub fn run(config: &CliConfig) -> Result<()> {
    let store = ContentStore::from_config(&config.content, Arc::new(EventDispatcher::new()))?;
    let assets = store.load_asset_manifest(config.manifest_reader().as_ref());

    if assets.is_empty() {
        display::warning("Manifest is empty or unreadable");
        return Ok(());
    }

    for asset in &assets {
        println!("{}", asset);
    }
    Ok(())
}
