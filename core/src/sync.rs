//! Propagation of local mutations to the remote store.
//!
//! # Design
//! `SyncAdapter` drives [`TaskApi`] through a [`Transport`], one remote
//! operation per call. Everything here is at-most-once: a failed request is
//! reduced to a `warn` event on the diagnostic channel and never retried, and
//! local state is never rolled back to match the remote store. Persistence
//! runs as detached tasks so the event path never blocks on the network.

use std::sync::Arc;

use tokio::task::JoinHandle;
use tracing::warn;

use crate::client::TaskApi;
use crate::error::ApiError;
use crate::record::{NewTask, TaskPatch, TaskRecord};
use crate::transport::Transport;

/// Translates local mutations into remote operations.
#[derive(Clone)]
pub struct SyncAdapter {
    api: TaskApi,
    transport: Arc<dyn Transport>,
}

impl SyncAdapter {
    pub fn new(api: TaskApi, transport: Arc<dyn Transport>) -> Self {
        Self { api, transport }
    }

    /// Read the full remote collection. Used once, on initial load.
    pub async fn fetch_all(&self) -> Result<Vec<TaskRecord>, ApiError> {
        let request = self.api.build_list_tasks();
        let response = self.transport.execute(request).await?;
        self.api.parse_list_tasks(response)
    }

    /// Create `input` remotely; the server assigns the id.
    pub async fn create(&self, input: &NewTask) -> Result<TaskRecord, ApiError> {
        let request = self.api.build_create_task(input)?;
        let response = self.transport.execute(request).await?;
        self.api.parse_create_task(response)
    }

    /// Persist the full current value of `record` as a detached task.
    ///
    /// Fire-and-forget: the handle is returned so callers that care (tests,
    /// shutdown paths) can join it, but nothing on the event path awaits it.
    /// Failure becomes one `warn` event and the optimistic local value
    /// stands.
    pub fn spawn_persist(&self, record: TaskRecord) -> JoinHandle<()> {
        let adapter = self.clone();
        tokio::spawn(async move {
            if let Err(err) = adapter.persist(&record).await {
                warn!(id = record.id, error = %err, "task persist failed");
            }
        })
    }

    async fn persist(&self, record: &TaskRecord) -> Result<TaskRecord, ApiError> {
        let patch = TaskPatch::from(record);
        let request = self.api.build_update_task(record.id, &patch)?;
        let response = self.transport.execute(request).await?;
        self.api.parse_update_task(response)
    }

    /// Delete `id` remotely. Only the purge engine calls this.
    pub async fn delete(&self, id: i64) -> Result<(), ApiError> {
        let request = self.api.build_delete_task(id);
        let response = self.transport.execute(request).await?;
        self.api.parse_delete_task(response)
    }
}
