//! The change watch bridge — filesystem write events become reloads.

use std::path::Path;
use std::sync::Arc;

use notify::event::{EventKind, ModifyKind};
use notify::{Event, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info};

use strata_core::StrataError;

use crate::config::Shared;

/// Owns the filesystem watcher and the background listener that turns
/// write events into reload cycles.
///
/// The trigger channel holds a single slot: writes arriving while a reload
/// is already pending collapse into that one pending reload. Dropping the
/// bridge drops the watcher and with it the last trigger sender, which
/// ends the listener task.
pub(crate) struct WatchBridge {
    watcher: RecommendedWatcher,
}

impl WatchBridge {
    pub(crate) fn new(shared: Arc<Shared>) -> Result<Self, StrataError> {
        let runtime = tokio::runtime::Handle::try_current().map_err(|_| {
            StrataError::Watch("watching requires a running tokio runtime".to_string())
        })?;

        let (trigger_tx, mut trigger_rx) = mpsc::channel::<()>(1);

        let listener_shared = Arc::clone(&shared);
        runtime.spawn(async move {
            while trigger_rx.recv().await.is_some() {
                let shared = Arc::clone(&listener_shared);
                // Source loads do blocking I/O; keep them off the async
                // workers.
                let _ = tokio::task::spawn_blocking(move || shared.apply()).await;
            }
            debug!("watch listener stopped");
        });

        let watcher = notify::recommended_watcher(move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if is_write_event(&event.kind) {
                    let _ = trigger_tx.try_send(());
                }
            }
            Err(e) => shared.report(StrataError::Watch(e.to_string())),
        })
        .map_err(|e| StrataError::Watch(e.to_string()))?;

        Ok(Self { watcher })
    }

    pub(crate) fn add(&mut self, path: &Path) -> Result<(), StrataError> {
        self.watcher
            .watch(path, RecursiveMode::NonRecursive)
            .map_err(|e| StrataError::Watch(e.to_string()))?;
        info!(?path, "watching for configuration changes");
        Ok(())
    }
}

/// Write-class events only: data modifications. Create, remove, rename and
/// metadata-only changes never trigger a reload.
fn is_write_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any)
    )
}
