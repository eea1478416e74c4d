//! Domain DTOs for the task-list API.
//!
//! # Design
//! These types mirror the remote store's schema but are defined independently
//! of the mock-server crate; integration tests catch any schema drift. The
//! wire names (`completed_flg`, `delete_flg`, `sort`) come from the remote
//! contract, so the flag fields carry serde renames.

use serde::{Deserialize, Serialize};

/// A single task record.
///
/// `id` is assigned by the remote store at creation and never changes. Every
/// mutation produces a new `TaskRecord` value; nothing edits one in place.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskRecord {
    pub id: i64,
    pub content: String,
    #[serde(rename = "completed_flg")]
    pub completed: bool,
    /// Soft-deleted: hidden from the live views, shown in the trash view,
    /// eligible for purge.
    #[serde(rename = "delete_flg")]
    pub deleted: bool,
    /// Persisted display rank. Reassigned densely (1..=N) by every committed
    /// reorder; 0 until the record's first reorder.
    pub sort: i64,
}

/// Request payload for creating a new task. The server assigns `id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTask {
    pub content: String,
    #[serde(rename = "completed_flg", default)]
    pub completed: bool,
    #[serde(rename = "delete_flg", default)]
    pub deleted: bool,
    #[serde(default)]
    pub sort: i64,
}

impl NewTask {
    /// A freshly submitted task: unchecked, live, unranked.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            completed: false,
            deleted: false,
            sort: 0,
        }
    }
}

/// Request payload for updating an existing task. Only the fields present in
/// the JSON are applied; omitted fields remain unchanged on the server.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(rename = "completed_flg", skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(rename = "delete_flg", skip_serializing_if = "Option::is_none")]
    pub deleted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<i64>,
}

impl From<&TaskRecord> for TaskPatch {
    /// A patch carrying every mutable field of `record`. Field-level
    /// persistence sends the full current record; the id travels in the URL,
    /// never in the body.
    fn from(record: &TaskRecord) -> Self {
        Self {
            content: Some(record.content.clone()),
            completed: Some(record.completed),
            deleted: Some(record.deleted),
            sort: Some(record.sort),
        }
    }
}
