//! Shared, ordered record store.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::record::TaskRecord;

/// The single source of truth for rendering: an ordered record sequence
/// behind a shared lock.
///
/// Handles are cheap to clone and all point at the same sequence. Every
/// mutation is "compute the next sequence, then replace" — records are never
/// edited in place, so readers only ever observe complete generations.
#[derive(Clone, Debug, Default)]
pub struct TaskStore {
    records: Arc<RwLock<Vec<TaskRecord>>>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Owned copy of the current generation.
    pub async fn snapshot(&self) -> Vec<TaskRecord> {
        self.records.read().await.clone()
    }

    /// Swap in a whole new generation.
    pub async fn replace_all(&self, records: Vec<TaskRecord>) {
        *self.records.write().await = records;
    }

    /// Insert `record` at the head of the order, under a single write lock.
    /// This is the create-success merge path.
    pub async fn prepend(&self, record: TaskRecord) {
        self.records.write().await.insert(0, record);
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}
