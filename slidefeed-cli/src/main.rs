// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Slidefeed CLI
//!
//! Command-line viewer for remote slide and story content.

mod commands;
mod config;
mod display;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use config::{CliConfig, Overrides};

#[derive(Parser)]
#[command(name = "slidefeed")]
#[command(version, about = "Terminal viewer for remote slides and stories")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content endpoint URL (overrides SLIDEFEED_ENDPOINT)
    #[arg(long, global = true)]
    endpoint: Option<String>,

    /// Connect timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    connect_timeout_ms: Option<u64>,

    /// Read timeout in milliseconds
    #[arg(long, global = true, value_name = "MS")]
    read_timeout_ms: Option<u64>,

    /// Asset manifest file (default: bundled manifest)
    #[arg(long, global = true)]
    manifest: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch once and print the content
    Show {
        /// Print the full sequence as JSON
        #[arg(long)]
        json: bool,
    },

    /// Keep the content on screen; Enter refreshes, q quits
    Watch,

    /// Print the asset manifest
    Manifest,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        display::error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose))
        .with_writer(std::io::stderr)
        .init();
}

fn log_filter(verbose: bool) -> EnvFilter {
    let level = if verbose { "debug" } else { "info" };
    let mut filter = EnvFilter::from_default_env();
    for target in ["slidefeed", "slidefeed_core"] {
        if let Ok(directive) = format!("{}={}", target, level).parse() {
            filter = filter.add_directive(directive);
        }
    }
    filter
}

async fn run(cli: Cli) -> Result<()> {
    let config = CliConfig::resolve(Overrides {
        endpoint: cli.endpoint,
        connect_timeout_ms: cli.connect_timeout_ms,
        read_timeout_ms: cli.read_timeout_ms,
        manifest: cli.manifest,
    })?;

    match cli.command {
        Commands::Show { json } => commands::show::run(&config, json).await,
        Commands::Watch => commands::watch::run(&config).await,
        Commands::Manifest => commands::manifest::run(&config),
    }
}
