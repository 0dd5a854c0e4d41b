// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Show Command
//!
//! Fetch once and print the result.

use std::io;
use std::sync::Arc;

use anyhow::{bail, Result};
use slidefeed_core::{ContentStore, EventDispatcher, RefreshOutcome};

use crate::config::CliConfig;
use crate::display;

/// Runs one refresh cycle and prints the content.
pub async fn run(config: &CliConfig, json: bool) -> Result<()> {
    let store = ContentStore::from_config(&config.content, Arc::new(EventDispatcher::new()))?;

    let assets = store.load_asset_manifest(config.manifest_reader().as_ref());
    tracing::debug!(assets = assets.len(), "manifest ready");

    match store.refresh_now().await {
        RefreshOutcome::Replaced { skipped, .. } => {
            let snapshot = store.current_snapshot();
            if json {
                println!("{}", serde_json::to_string_pretty(snapshot.content.as_ref())?);
            } else {
                display::render_snapshot(&mut io::stdout(), &snapshot)?;
            }
            if skipped > 0 {
                display::warning(&format!("{} malformed item(s) skipped", skipped));
            }
            Ok(())
        }
        RefreshOutcome::FetchFailed(e) => bail!("fetch failed: {}", e),
        RefreshOutcome::StructuralFailure(e) => bail!("unusable content: {}", e),
    }
}
