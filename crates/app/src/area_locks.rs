//! Per-area mutual exclusion for mutating operations.
//!
//! A mode change reads the previous mode, writes the new one and may write
//! the previous one back. Two such sequences on the same area must never
//! interleave, otherwise the rollback value of one could be the tentative
//! value of the other.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OwnedMutexGuard;

use filpilote_domain::id::AreaId;

/// Registry of async locks keyed by [`AreaId`].
#[derive(Default)]
pub struct AreaLocks {
    locks: Mutex<HashMap<AreaId, Arc<tokio::sync::Mutex<()>>>>,
}

impl AreaLocks {
    /// Wait until the caller holds the exclusive lock for `id`.
    ///
    /// The lock is released when the returned guard is dropped.
    pub async fn acquire(&self, id: AreaId) -> OwnedMutexGuard<()> {
        let lock = Arc::clone(self.registry().entry(id).or_default());
        lock.lock_owned().await
    }

    /// Drop the lock entry of a deleted area.
    ///
    /// Callers still waiting on the old lock keep their `Arc` and proceed;
    /// they will then observe the area as missing.
    pub fn forget(&self, id: AreaId) {
        self.registry().remove(&id);
    }

    /// Number of areas currently tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry().len()
    }

    /// Whether no area is currently tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry().is_empty()
    }

    fn registry(&self) -> MutexGuard<'_, HashMap<AreaId, Arc<tokio::sync::Mutex<()>>>> {
        self.locks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
