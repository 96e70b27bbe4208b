//! Per-project mutual exclusion for generation runs.
//!
//! The store offers no per-record locking or optimistic versioning, so two
//! concurrent generation runs against the same project would race with the
//! last write winning. Serializing runs per project id closes that gap.
//! Distinct projects are unaffected by each other's locks.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, OwnedMutexGuard};
use voxreel_core::types::ProjectId;

/// Lazily-populated map of project id to its run lock.
///
/// Entries are never evicted; the map is bounded by the number of projects
/// that have ever been generated against in this process.
#[derive(Debug, Default)]
pub struct ProjectLocks {
    locks: Mutex<HashMap<ProjectId, Arc<Mutex<()>>>>,
}

impl ProjectLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the run lock for `id`, waiting if a run is already in flight.
    ///
    /// The guard is released on drop, at the end of the orchestrator call.
    pub async fn acquire(&self, id: ProjectId) -> OwnedMutexGuard<()> {
        let lock = {
            let mut locks = self.locks.lock().await;
            Arc::clone(locks.entry(id).or_default())
        };
        lock.lock_owned().await
    }
}
