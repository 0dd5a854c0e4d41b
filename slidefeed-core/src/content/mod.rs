// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Remote content module
//!
//! Provides the fetch, parse, and publish pipeline for remote content:
//! - A single bounded-timeout HTTP GET against the configured endpoint
//! - Tolerant decoding of the `data` array into slides and stories
//! - An observable store holding the last good sequence
//!
//! Failed cycles never clear what is already on screen.

mod config;
mod fetcher;
mod parser;
mod store;
mod types;

pub use config::{ConfigError, ContentConfig, DEFAULT_CONNECT_TIMEOUT, DEFAULT_READ_TIMEOUT};
pub use fetcher::{fetch_once, ContentFetcher, ContentSource, FetchError, FetchResult};
pub use parser::{decode, parse, Decoded, SkipReason, SkippedItem, StructuralError};
pub use store::{ContentStore, RefreshOutcome, Snapshot};
pub use types::{ContentItem, ContentKind, ContentSequence};
