// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Store
//!
//! The ContentStore owns the displayed content and coordinates refresh cycles:
//! - fetch through a [`ContentSource`]
//! - decode with the content parser
//! - publish a new [`Snapshot`] to subscribers
//!
//! A failed cycle keeps the previous content (stale display). Overlapping
//! refreshes are neither merged nor cancelled: the last one to complete wins.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::config::{ConfigError, ContentConfig};
use super::fetcher::{ContentFetcher, ContentSource, FetchError};
use super::parser::{decode, report_skipped, report_structural, StructuralError};
use super::types::ContentSequence;
use crate::events::{ContentEvent, EventDispatcher};
use crate::manifest::{parse_manifest, ManifestReader};

/// What a render layer sees
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    /// Last successfully decoded content
    pub content: Arc<ContentSequence>,
    /// True while at least one refresh cycle is running
    pub is_loading: bool,
}

/// Result of one refresh cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// New content replaced the snapshot
    Replaced {
        /// Items in the new sequence
        item_count: usize,
        /// Elements dropped while decoding
        skipped: usize,
    },
    /// Nothing arrived; snapshot kept
    FetchFailed(FetchError),
    /// Payload envelope unusable; snapshot kept
    StructuralFailure(StructuralError),
}

impl RefreshOutcome {
    pub fn is_replaced(&self) -> bool {
        matches!(self, RefreshOutcome::Replaced { .. })
    }
}

/// Observable holder of the current content snapshot
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    source: Arc<dyn ContentSource>,
    state: watch::Sender<Snapshot>,
    /// Running cycles; only changed inside `send_modify`
    in_flight: AtomicUsize,
    events: Arc<EventDispatcher>,
}

impl ContentStore {
    /// Create a store over any content source
    pub fn new(source: Arc<dyn ContentSource>, events: Arc<EventDispatcher>) -> Self {
        let (state, _) = watch::channel(Snapshot::default());
        Self {
            inner: Arc::new(StoreInner {
                source,
                state,
                in_flight: AtomicUsize::new(0),
                events,
            }),
        }
    }

    /// Create a store that fetches from the configured endpoint
    pub fn from_config(
        config: &ContentConfig,
        events: Arc<EventDispatcher>,
    ) -> Result<Self, ConfigError> {
        let fetcher = ContentFetcher::new(config)?;
        Ok(Self::new(Arc::new(fetcher), events))
    }

    /// Read the asset manifest; any failure yields an empty list
    pub fn load_asset_manifest(&self, reader: &dyn ManifestReader) -> Vec<String> {
        match reader.read_manifest() {
            Ok(text) => {
                let assets = parse_manifest(&text);
                debug!(count = assets.len(), "asset manifest loaded");
                assets
            }
            Err(err) => {
                warn!(error = %err, "asset manifest unavailable");
                self.inner.events.dispatch(ContentEvent::ManifestLoadFailed {
                    message: err.to_string(),
                });
                Vec::new()
            }
        }
    }

    /// Start a refresh cycle in the background.
    ///
    /// The loading flag is set before this returns. Must be called from
    /// within a tokio runtime. The handle may be dropped; the cycle still
    /// runs to completion or timeout.
    pub fn refresh(&self) -> JoinHandle<RefreshOutcome> {
        let cycle = Cycle::begin(self.clone());
        tokio::spawn(cycle.run())
    }

    /// Run one refresh cycle: fetch, then decode, then publish.
    pub async fn refresh_now(&self) -> RefreshOutcome {
        Cycle::begin(self.clone()).run().await
    }

    /// Current content and loading flag; never waits
    pub fn current_snapshot(&self) -> Snapshot {
        self.inner.state.borrow().clone()
    }

    /// Receive every future snapshot change
    pub fn subscribe(&self) -> watch::Receiver<Snapshot> {
        self.inner.state.subscribe()
    }

    /// Observer channel for pipeline events
    pub fn events(&self) -> &Arc<EventDispatcher> {
        &self.inner.events
    }
}

impl std::fmt::Debug for ContentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentStore")
            .field("snapshot", &*self.inner.state.borrow())
            .field("in_flight", &self.inner.in_flight.load(Ordering::SeqCst))
            .finish()
    }
}

/// One running refresh; clears its share of the loading flag when dropped,
/// so an early return or an aborted task never leaves the store loading.
struct Cycle {
    store: ContentStore,
    replacement: Option<ContentSequence>,
}

impl Cycle {
    fn begin(store: ContentStore) -> Self {
        let inner = &store.inner;
        inner.state.send_modify(|snapshot| {
            inner.in_flight.fetch_add(1, Ordering::SeqCst);
            snapshot.is_loading = true;
        });
        inner.events.dispatch(ContentEvent::RefreshStarted);
        Self {
            store,
            replacement: None,
        }
    }

    async fn run(mut self) -> RefreshOutcome {
        let inner = self.store.inner.clone();

        let raw = match inner.source.fetch().await {
            Ok(raw) => raw,
            Err(error) => {
                inner.events.dispatch(ContentEvent::FetchFailed {
                    error: error.clone(),
                });
                return RefreshOutcome::FetchFailed(error);
            }
        };

        let decoded = match decode(&raw) {
            Ok(decoded) => decoded,
            Err(error) => {
                report_structural(&error, &inner.events);
                return RefreshOutcome::StructuralFailure(error);
            }
        };

        report_skipped(&decoded.skipped, &inner.events);
        let item_count = decoded.content.len();
        let skipped = decoded.skipped.len();
        self.replacement = Some(decoded.content);
        drop(self);

        info!(item_count, skipped, "content snapshot replaced");
        inner
            .events
            .dispatch(ContentEvent::SnapshotReplaced { item_count });

        RefreshOutcome::Replaced {
            item_count,
            skipped,
        }
    }
}

impl Drop for Cycle {
    fn drop(&mut self) {
        let inner = &self.store.inner;
        let replacement = self.replacement.take();
        inner.state.send_modify(|snapshot| {
            let remaining = inner.in_flight.fetch_sub(1, Ordering::SeqCst) - 1;
            if let Some(content) = replacement {
                snapshot.content = Arc::new(content);
            }
            snapshot.is_loading = remaining > 0;
        });
    }
}
