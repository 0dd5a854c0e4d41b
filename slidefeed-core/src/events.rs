// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Event System
//!
//! Observer channel for the content pipeline. Every recovered error is
//! dispatched here so render layers and tests can inspect it.

use std::sync::{Arc, RwLock};

use crate::content::{FetchError, SkipReason, StructuralError};

/// Events emitted by the content pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEvent {
    /// A refresh cycle began.
    RefreshStarted,

    /// The fetch failed; the previous snapshot stays on screen.
    FetchFailed {
        /// Why no content arrived.
        error: FetchError,
    },

    /// The payload envelope was malformed; the previous snapshot stays.
    StructuralParseFailure {
        /// What was wrong with it.
        error: StructuralError,
    },

    /// One element of `data` was dropped.
    ItemSkipped {
        /// Position in the `data` array.
        index: usize,
        /// Why it was dropped.
        reason: SkipReason,
    },

    /// A new sequence replaced the snapshot.
    SnapshotReplaced {
        /// Number of items in the new sequence.
        item_count: usize,
    },

    /// The asset manifest could not be read.
    ManifestLoadFailed {
        /// Error description.
        message: String,
    },
}

impl ContentEvent {
    /// Whether this event reports a problem.
    pub fn is_error(&self) -> bool {
        matches!(
            self,
            ContentEvent::FetchFailed { .. }
                | ContentEvent::StructuralParseFailure { .. }
                | ContentEvent::ItemSkipped { .. }
                | ContentEvent::ManifestLoadFailed { .. }
        )
    }
}

/// Event handler trait.
///
/// Implement this trait to receive content events.
pub trait EventHandler: Send + Sync {
    /// Called when an event occurs.
    fn on_event(&self, event: ContentEvent);
}

/// Simple callback-based event handler.
///
/// Wraps a closure for easy event handling.
pub struct CallbackHandler<F>
where
    F: Fn(ContentEvent) + Send + Sync,
{
    callback: F,
}

impl<F> CallbackHandler<F>
where
    F: Fn(ContentEvent) + Send + Sync,
{
    /// Creates a new callback handler.
    pub fn new(callback: F) -> Self {
        CallbackHandler { callback }
    }
}

impl<F> EventHandler for CallbackHandler<F>
where
    F: Fn(ContentEvent) + Send + Sync,
{
    fn on_event(&self, event: ContentEvent) {
        (self.callback)(event);
    }
}

/// Event dispatcher for managing multiple handlers.
///
/// Handlers can be registered after the dispatcher has been shared.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: RwLock<Vec<Arc<dyn EventHandler>>>,
}

impl EventDispatcher {
    /// Creates a new event dispatcher.
    pub fn new() -> Self {
        EventDispatcher {
            handlers: RwLock::new(Vec::new()),
        }
    }

    /// Adds an event handler.
    pub fn add_handler(&self, handler: Arc<dyn EventHandler>) {
        self.write_handlers().push(handler);
    }

    /// Removes all handlers.
    pub fn clear_handlers(&self) {
        self.write_handlers().clear();
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.read_handlers().len()
    }

    /// Dispatches an event to all handlers.
    pub fn dispatch(&self, event: ContentEvent) {
        // Snapshot the list so a handler may register another without deadlock.
        let handlers: Vec<Arc<dyn EventHandler>> = self.read_handlers().clone();
        for handler in handlers {
            handler.on_event(event.clone());
        }
    }

    fn read_handlers(&self) -> std::sync::RwLockReadGuard<'_, Vec<Arc<dyn EventHandler>>> {
        self.handlers.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write_handlers(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Arc<dyn EventHandler>>> {
        self.handlers.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl std::fmt::Debug for EventDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventDispatcher")
            .field("handlers", &self.handler_count())
            .finish()
    }
}
