//! Permanent removal of soft-deleted records.
//!
//! # Design
//! Purge is the one place that waits on the network: one delete request per
//! soft-deleted record, all in flight concurrently, and the store is not
//! touched until the whole batch has settled. Replacing the store first would
//! show records as gone while they still exist remotely — they would
//! resurrect on the next full load.
//!
//! Policy on failure: revert. A record leaves the store only when its remote
//! delete succeeded (404 counts — the record is already gone). Failed deletes
//! stay in the trash, still soft-deleted, so a later purge retries them.

use std::collections::HashSet;

use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::record::TaskRecord;
use crate::store::TaskStore;
use crate::sync::SyncAdapter;

/// Partition `records` into the sequence to keep and the records to delete
/// remotely. Pure; relative order is preserved on both sides.
pub fn split_purge(records: &[TaskRecord]) -> (Vec<TaskRecord>, Vec<TaskRecord>) {
    records.iter().cloned().partition(|record| !record.deleted)
}

/// Purge every soft-deleted record, remotely then locally.
pub async fn purge(store: &TaskStore, sync: &SyncAdapter) {
    let records = store.snapshot().await;
    let (keep, to_delete) = split_purge(&records);
    if to_delete.is_empty() {
        return;
    }

    let mut deletes = JoinSet::new();
    for record in &to_delete {
        let sync = sync.clone();
        let id = record.id;
        deletes.spawn(async move { (id, sync.delete(id).await) });
    }

    // The barrier: every request settles before the store changes.
    let mut purged: HashSet<i64> = HashSet::new();
    while let Some(joined) = deletes.join_next().await {
        match joined {
            Ok((id, Ok(()))) | Ok((id, Err(ApiError::NotFound))) => {
                purged.insert(id);
            }
            Ok((id, Err(err))) => {
                warn!(id, error = %err, "purge delete failed; record kept");
            }
            Err(err) => {
                warn!(error = %err, "purge delete task did not settle cleanly");
            }
        }
    }
    debug!(purged = purged.len(), requested = to_delete.len(), "purge settled");

    let next = if purged.len() == to_delete.len() {
        keep
    } else {
        records
            .into_iter()
            .filter(|record| !record.deleted || !purged.contains(&record.id))
            .collect()
    };
    store.replace_all(next).await;
}
