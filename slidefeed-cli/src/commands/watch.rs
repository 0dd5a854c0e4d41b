// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Watch Command
//!
//! Keeps the latest content on screen and refreshes on request.

use std::io;
use std::sync::Arc;

use anyhow::Result;
use slidefeed_core::{
    action_callback, spawn_render_loop, CallbackHandler, ContentStore, EventDispatcher,
};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::config::CliConfig;
use crate::display::{self, TerminalRenderer};

/// Runs the interactive viewer until `q` or end of input.
pub async fn run(config: &CliConfig) -> Result<()> {
    let events = Arc::new(EventDispatcher::new());
    events.add_handler(Arc::new(CallbackHandler::new(|event| {
        if event.is_error() {
            display::event_notice(&event);
        }
    })));

    let store = ContentStore::from_config(&config.content, events)?;

    let assets = store.load_asset_manifest(config.manifest_reader().as_ref());
    display::info(&format!("{} asset(s) in manifest", assets.len()));
    display::info("Press Enter or 'r' to refresh, 'q' to quit.");

    let render_loop = spawn_render_loop(&store, TerminalRenderer::new(io::stdout()));
    let on_action = action_callback(&store);
    on_action();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" | "r" => on_action(),
            "q" => break,
            other => display::warning(&format!("Unknown command: {}", other)),
        }
    }

    // In-flight refreshes hold the store until their timeout; stop drawing now.
    render_loop.abort();
    Ok(())
}
