use std::sync::Arc;
use std::time::{Instant, SystemTime};

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::store::StudyStore;

#[derive(Clone)]
pub struct AppState {
    started_at: Instant,
    started_at_system: SystemTime,
    store: Arc<RwLock<StudyStore>>,
}

impl AppState {
    pub fn new(store: StudyStore) -> Self {
        Self {
            started_at: Instant::now(),
            started_at_system: SystemTime::now(),
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }

    pub fn started_at_system(&self) -> SystemTime {
        self.started_at_system
    }

    pub async fn read_store(&self) -> RwLockReadGuard<'_, StudyStore> {
        self.store.read().await
    }

    /// Exclusive access for one read-modify-write; writers never interleave
    pub async fn write_store(&self) -> RwLockWriteGuard<'_, StudyStore> {
        self.store.write().await
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(StudyStore::default())
    }
}
