//! The configuration orchestrator.
//!
//! A [`Config`] owns the ordered source registry, the ordered target
//! registry, the cached value table, the outbound error channel, and at
//! most one filesystem watch. Reads and binds run synchronously on the
//! caller; a watched path adds one background listener that re-runs the
//! aggregation and re-binds every registered target on write events.

use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::debug;

use strata_core::{LookupMode, Source, StrataError, ValueTable};

use crate::aggregate::aggregate;
use crate::bind::{self, Bindable, Target};
use crate::watch::WatchBridge;

/// Capacity of the outbound error channel. Producers never block: while
/// the single slot is full, new reports are dropped.
const ERROR_CHANNEL_CAPACITY: usize = 1;

/// The configuration handler: aggregates registered sources into a value
/// table and binds it onto registered targets.
pub struct Config {
    shared: Arc<Shared>,
    errors: Mutex<Option<mpsc::Receiver<StrataError>>>,
    watch: Mutex<Option<WatchBridge>>,
}

/// State shared with the watch listener.
pub(crate) struct Shared {
    state: Mutex<State>,
    mode: LookupMode,
}

struct State {
    sources: Vec<Arc<dyn Source>>,
    targets: Vec<Target>,
    table: Option<Arc<ValueTable>>,
    err_tx: Option<mpsc::Sender<StrataError>>,
    closed: bool,
}

impl Config {
    /// An empty configuration with the default (case-insensitive) lookup
    /// mode.
    pub fn new() -> Self {
        Self::with_lookup_mode(LookupMode::default())
    }

    /// An empty configuration with an explicit lookup mode.
    pub fn with_lookup_mode(mode: LookupMode) -> Self {
        let (err_tx, err_rx) = mpsc::channel(ERROR_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    sources: Vec::new(),
                    targets: Vec::new(),
                    table: None,
                    err_tx: Some(err_tx),
                    closed: false,
                }),
                mode,
            }),
            errors: Mutex::new(Some(err_rx)),
            watch: Mutex::new(None),
        }
    }

    /// Append a backing source. Registration order is precedence order: on
    /// key collision the source registered last wins.
    pub fn add_source(&self, source: impl Source + 'static) {
        self.add_source_dyn(Arc::new(source));
    }

    pub(crate) fn add_source_dyn(&self, source: Arc<dyn Source>) {
        self.shared.state.lock().sources.push(source);
    }

    /// Take the outbound error channel. Available once; `None` afterwards.
    ///
    /// The channel is advisory and non-blocking on the producer side: it
    /// holds a single report and drops new ones while full, so consumers
    /// should poll or select on it continuously.
    pub fn errors(&self) -> Option<mpsc::Receiver<StrataError>> {
        self.errors.lock().take()
    }

    /// The current value table, building and caching it on first access.
    pub fn values(&self) -> Arc<ValueTable> {
        self.shared.values()
    }

    /// Register a target and run an initial bind pass over it.
    ///
    /// The target stays registered for the lifetime of this `Config` and
    /// receives a full re-bind on every reload. If the target's lock
    /// cannot be acquired — the caller is holding it — the bind for that
    /// target is aborted, an error is reported, and the target is not
    /// registered.
    pub fn bind<T: Bindable + 'static>(&self, target: &Arc<Mutex<T>>) {
        let target: Target = target.clone();
        self.bind_dyn(target);
    }

    /// Register and bind several targets. A target that fails is skipped;
    /// its siblings still proceed.
    pub fn bind_all(&self, targets: impl IntoIterator<Item = Target>) {
        for target in targets {
            self.bind_dyn(target);
        }
    }

    fn bind_dyn(&self, target: Target) {
        let table = self.shared.values();
        match target.try_lock() {
            Some(mut guard) => {
                self.shared.state.lock().targets.push(Arc::clone(&target));
                bind::apply_table(&table, &mut *guard);
            }
            None => self.shared.report(StrataError::TargetUnavailable(
                "target lock held elsewhere during bind".to_string(),
            )),
        }
    }

    /// Rebuild the value table and re-bind every registered target, in
    /// registration order.
    pub fn reload(&self) {
        self.shared.apply();
    }

    /// Watch a file or directory; write events trigger a reload of all
    /// bound targets. Failures (invalid path, watch-layer errors) are
    /// reported to the error channel and leave other watched paths
    /// functioning. Requires a running Tokio runtime.
    pub fn watch(&self, path: impl AsRef<Path>) {
        let mut watch = self.watch.lock();
        if watch.is_none() {
            match WatchBridge::new(Arc::clone(&self.shared)) {
                Ok(bridge) => *watch = Some(bridge),
                Err(e) => {
                    self.shared.report(e);
                    return;
                }
            }
        }
        if let Some(bridge) = watch.as_mut() {
            if let Err(e) = bridge.add(path.as_ref()) {
                self.shared.report(e);
            }
        }
    }

    /// Tear down: stop the watch listener and close the error channel.
    ///
    /// After this, reloads become inert and no further errors are
    /// reported; a rebuild in flight when `close` runs discards its result
    /// instead of touching the closed channel.
    pub fn close(&self) {
        self.watch.lock().take();
        let mut state = self.shared.state.lock();
        state.closed = true;
        state.err_tx = None;
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Shared {
    /// Best-effort error report. The closed flag is checked under the
    /// state lock before the send, so a teardown that already ran makes
    /// this a no-op.
    pub(crate) fn report(&self, err: StrataError) {
        let tx = {
            let state = self.state.lock();
            if state.closed {
                return;
            }
            state.err_tx.clone()
        };
        if let Some(tx) = tx {
            if let Err(e) = tx.try_send(err) {
                debug!(error = %e, "error report dropped");
            }
        }
    }

    fn snapshot_sources(&self) -> Vec<Arc<dyn Source>> {
        self.state.lock().sources.clone()
    }

    pub(crate) fn values(&self) -> Arc<ValueTable> {
        if let Some(table) = self.state.lock().table.clone() {
            return table;
        }

        let sources = self.snapshot_sources();
        let table = Arc::new(aggregate(&sources, self.mode, &mut |e| self.report(e)));

        let mut state = self.state.lock();
        match &state.table {
            // Another caller finished building first; keep its snapshot.
            Some(existing) => Arc::clone(existing),
            None => {
                if !state.closed {
                    state.table = Some(Arc::clone(&table));
                }
                table
            }
        }
    }

    /// One full reload cycle: aggregate outside the lock, swap the cached
    /// table and snapshot the target list as one atomic phase, then
    /// re-bind each target sequentially against the captured table.
    pub(crate) fn apply(&self) {
        let sources = self.snapshot_sources();
        let table = Arc::new(aggregate(&sources, self.mode, &mut |e| self.report(e)));

        let targets = {
            let mut state = self.state.lock();
            if state.closed {
                // Teardown raced this rebuild; discard the result.
                return;
            }
            state.table = Some(Arc::clone(&table));
            state.targets.clone()
        };

        debug!(
            keys = table.len(),
            targets = targets.len(),
            "value table rebuilt"
        );

        for target in &targets {
            match target.try_lock() {
                Some(mut guard) => {
                    bind::apply_table(&table, &mut *guard);
                }
                None => self.report(StrataError::TargetUnavailable(
                    "target lock held elsewhere during rebind".to_string(),
                )),
            }
        }
    }
}
