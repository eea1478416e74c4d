//! The event surface tying the store, the sync adapter, and the drag session
//! together.

use std::sync::Arc;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::TaskApi;
use crate::error::ApiError;
use crate::field::{update_field, FieldEdit};
use crate::filter::{visible, Filter};
use crate::purge;
use crate::record::{NewTask, TaskRecord};
use crate::reorder::{rank_changes, reorder, to_full_index, DragSession};
use crate::store::TaskStore;
use crate::sync::SyncAdapter;
use crate::transport::Transport;

/// Optimistic task-list engine.
///
/// Local mutations apply to the [`TaskStore`] immediately and propagate to
/// the remote store through detached tasks — local state is always the
/// rendering source of truth, remote state trails it. Methods are the event
/// surface a host calls: submit, field edits, drag gestures, purge.
///
/// Fire-and-forget methods hand back the [`JoinHandle`]s of the tasks they
/// spawned. Production callers drop them; tests join them to make the
/// eventual remote state observable.
pub struct TaskListEngine {
    store: TaskStore,
    sync: SyncAdapter,
    drag: Mutex<DragSession>,
}

impl TaskListEngine {
    /// An engine talking to the remote store at `base_url` through
    /// `transport`, starting from an empty local collection.
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            store: TaskStore::new(),
            sync: SyncAdapter::new(TaskApi::new(base_url), transport),
            drag: Mutex::new(DragSession::default()),
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Initial mount: read the remote collection once and adopt its order.
    ///
    /// The only entry point that surfaces a remote error, since there is no
    /// local state to prefer over a failed first read.
    pub async fn load(&self) -> Result<(), ApiError> {
        let records = self.sync.fetch_all().await?;
        debug!(count = records.len(), "loaded remote collection");
        self.store.replace_all(records).await;
        Ok(())
    }

    /// Submit new task content.
    ///
    /// Empty content is rejected locally: no record, no network call, `None`.
    /// Otherwise the create runs detached; once the server answers with the
    /// assigned id the record is merged at the head of the store, and on
    /// failure the create is dropped. No id was ever assigned, so there is
    /// no local placeholder to keep or roll back.
    pub fn submit(&self, content: &str) -> Option<JoinHandle<()>> {
        if content.is_empty() {
            return None;
        }
        let input = NewTask::new(content);
        let sync = self.sync.clone();
        let store = self.store.clone();
        Some(tokio::spawn(async move {
            match sync.create(&input).await {
                Ok(record) => {
                    debug!(id = record.id, "created");
                    store.prepend(record).await;
                }
                Err(err) => warn!(error = %err, "create dropped"),
            }
        }))
    }

    /// Apply a single-field edit to `id`: optimistic store update, then a
    /// detached persist of the full updated record.
    ///
    /// An id absent from the store is a pass-through: no new generation, no
    /// network call, `None`.
    pub async fn edit(&self, id: i64, edit: FieldEdit) -> Option<JoinHandle<()>> {
        let records = self.store.snapshot().await;
        let next = update_field(&records, id, &edit);
        let updated = next.iter().find(|record| record.id == id).cloned()?;
        self.store.replace_all(next).await;
        Some(self.sync.spawn_persist(updated))
    }

    pub async fn set_content(
        &self,
        id: i64,
        content: impl Into<String>,
    ) -> Option<JoinHandle<()>> {
        self.edit(id, FieldEdit::Content(content.into())).await
    }

    pub async fn set_completed(&self, id: i64, completed: bool) -> Option<JoinHandle<()>> {
        self.edit(id, FieldEdit::Completed(completed)).await
    }

    /// Soft-delete (`true`) or restore (`false`).
    pub async fn set_deleted(&self, id: i64, deleted: bool) -> Option<JoinHandle<()>> {
        self.edit(id, FieldEdit::Deleted(deleted)).await
    }

    /// A drag gesture began on the record at `visible_index` of the current
    /// view.
    pub async fn drag_start(&self, visible_index: usize) {
        self.drag.lock().await.drag_start(visible_index);
    }

    /// The drag gesture ended. `destination` is `None` when the record was
    /// dropped outside the list; the gesture aborts and nothing changes.
    ///
    /// On commit, both gesture indices are mapped from the subset `filter`
    /// shows back to positions in the full sequence, the re-ranked order is
    /// applied to the store synchronously, and one detached persistence task
    /// runs per record whose rank changed. Each of those requests fails
    /// independently; none of them reverts the local order.
    pub async fn drag_end(
        &self,
        filter: Filter,
        destination: Option<usize>,
    ) -> Vec<JoinHandle<()>> {
        let gesture = self.drag.lock().await.drag_end(destination);
        let Some((source, destination)) = gesture else {
            return Vec::new();
        };

        let records = self.store.snapshot().await;
        let (Some(source), Some(destination)) = (
            to_full_index(&records, filter, source),
            to_full_index(&records, filter, destination),
        ) else {
            return Vec::new();
        };

        let next = reorder(&records, source, destination);
        let changed = rank_changes(&records, &next);
        self.store.replace_all(next).await;
        debug!(moved = changed.len(), "reorder committed");
        changed
            .into_iter()
            .map(|record| self.sync.spawn_persist(record))
            .collect()
    }

    /// Owned snapshot of the subset `filter` shows, for rendering.
    pub async fn visible(&self, filter: Filter) -> Vec<TaskRecord> {
        let records = self.store.snapshot().await;
        visible(&records, filter).into_iter().cloned().collect()
    }

    /// Permanently remove every soft-deleted record, remotely then locally.
    /// Awaits the whole delete batch before the store changes.
    pub async fn purge(&self) {
        purge::purge(&self.store, &self.sync).await;
    }
}
