//! Single-field record mutation.
//!
//! # Design
//! `FieldEdit` pairs a field name with a replacement value in one tagged
//! union, so the value type is fixed by the variant and a caller can never
//! hand a field a value of the wrong shape. Every field-level action
//! (checking a task off, editing its text, soft-deleting, restoring) routes
//! through [`update_field`]; there is no per-field mutation function.

use crate::record::TaskRecord;

/// One editable field of a [`TaskRecord`] paired with its replacement value.
///
/// `id` has no variant: identity is assigned by the remote store at creation
/// and never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Content(String),
    Completed(bool),
    Deleted(bool),
    Sort(i64),
}

impl FieldEdit {
    /// A copy of `record` with this edit applied.
    fn apply(&self, record: &TaskRecord) -> TaskRecord {
        let mut next = record.clone();
        match self {
            FieldEdit::Content(value) => next.content = value.clone(),
            FieldEdit::Completed(value) => next.completed = *value,
            FieldEdit::Deleted(value) => next.deleted = *value,
            FieldEdit::Sort(value) => next.sort = *value,
        }
        next
    }
}

/// Replace one field of the record identified by `id`.
///
/// Returns a new sequence in which the matching record has the single named
/// field replaced; every other field, every other record, and the relative
/// order are preserved. An `id` that matches nothing yields a value-equal
/// copy of the input — the call is a no-op, never an error.
pub fn update_field(records: &[TaskRecord], id: i64, edit: &FieldEdit) -> Vec<TaskRecord> {
    records
        .iter()
        .map(|record| {
            if record.id == id {
                edit.apply(record)
            } else {
                record.clone()
            }
        })
        .collect()
}
