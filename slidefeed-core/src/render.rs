// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Render layer wiring
//!
//! The presentation itself lives outside this crate. A render layer
//! implements [`Renderer`]; [`spawn_render_loop`] feeds it every snapshot and
//! [`action_callback`] turns a user action into a refresh.

use tokio::task::JoinHandle;

use crate::content::{ContentStore, Snapshot};

/// A display that draws snapshots
pub trait Renderer: Send + 'static {
    /// Redraw from `snapshot`. Unknown-kind items should be omitted.
    fn render(&mut self, snapshot: &Snapshot);
}

/// Render the current snapshot, then every change, until the store is gone.
///
/// The renderer is handed back when the loop ends.
pub fn spawn_render_loop<R: Renderer>(store: &ContentStore, mut renderer: R) -> JoinHandle<R> {
    let mut updates = store.subscribe();
    tokio::spawn(async move {
        let first = updates.borrow_and_update().clone();
        renderer.render(&first);

        while updates.changed().await.is_ok() {
            let snapshot = updates.borrow_and_update().clone();
            renderer.render(&snapshot);
        }
        renderer
    })
}

/// Callback for the render layer's "refresh requested" action
pub fn action_callback(store: &ContentStore) -> impl Fn() + Send + Sync + 'static {
    let store = store.clone();
    move || {
        // Fire and forget; outcomes arrive through the snapshot and events.
        let _ = store.refresh();
    }
}
