//! Reader/writer-locked state cell.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Immutable snapshot of everything the display needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConnectivityState {
    /// True iff the most recent committed probe cycle succeeded.
    pub connected: bool,
    /// Whether the log panel is shown. Owned by the input handler.
    pub log_panel_visible: bool,
}

/// Synchronized holder of [`ConnectivityState`].
///
/// Both fields live under one `RwLock`, so a [`snapshot`](Self::snapshot)
/// always comes from a single generation. Every operation is O(1), holds
/// the lock only for a field access and never awaits.
///
/// A poisoned lock is recovered rather than propagated: the guarded data is
/// two booleans, and no writer can leave them half-updated.
#[derive(Debug, Default)]
pub struct StateStore {
    inner: RwLock<ConnectivityState>,
}

pub type SharedState = Arc<StateStore>;

impl StateStore {
    /// Initial state: disconnected, log panel hidden.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> SharedState {
        Arc::new(Self::new())
    }

    fn read(&self) -> RwLockReadGuard<'_, ConnectivityState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, ConnectivityState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Both fields, read under one shared lock.
    pub fn snapshot(&self) -> ConnectivityState {
        *self.read()
    }

    pub fn read_connected(&self) -> bool {
        self.read().connected
    }

    pub fn read_log_visible(&self) -> bool {
        self.read().log_panel_visible
    }

    /// Store a new connectivity value and return the one it replaced.
    ///
    /// Returning the previous value under the same exclusive lock lets the
    /// caller detect an edge without a separate read.
    pub fn set_connected(&self, connected: bool) -> bool {
        std::mem::replace(&mut self.write().connected, connected)
    }

    /// Flip log panel visibility and return the new value.
    pub fn toggle_log_visible(&self) -> bool {
        let mut state = self.write();
        state.log_panel_visible = !state.log_panel_visible;
        state.log_panel_visible
    }
}
