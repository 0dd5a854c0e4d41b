// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Slidefeed Core Library
//!
//! Fetches a remote JSON document of slide and story blocks, decodes it
//! tolerantly into typed content, and publishes the result to render layers
//! through an observable store.

pub mod content;
pub mod events;
pub mod manifest;
pub mod render;

pub use content::{
    decode, fetch_once, parse, ConfigError, ContentConfig, ContentFetcher, ContentItem,
    ContentKind, ContentSequence, ContentSource, ContentStore, Decoded, FetchError, FetchResult,
    RefreshOutcome, SkipReason, SkippedItem, Snapshot, StructuralError,
};
pub use events::{CallbackHandler, ContentEvent, EventDispatcher, EventHandler};
pub use manifest::{parse_manifest, BundledManifest, FileManifest, ManifestError, ManifestReader};
pub use render::{action_callback, spawn_render_loop, Renderer};
