//! Drag-and-drop re-ordering.
//!
//! # Design
//! The drag gesture is a three-phase state machine ([`DragSession`]) kept
//! separate from the order computation ([`reorder`]), which is a pure
//! function over the full record sequence. Gesture indices address the
//! currently *visible* (filtered) subset and must be mapped through
//! [`to_full_index`] before any splice — splicing with visible indices
//! scrambles the hidden records.

use crate::filter::{visible_indices, Filter};
use crate::record::TaskRecord;

/// State machine for one drag gesture.
///
/// `drag_start` captures the source position, `drag_over` has no persisted
/// effect, `drag_end` commits or aborts. Indices are positions in the visible
/// subset, not the full sequence.
#[derive(Debug, Default)]
pub struct DragSession {
    source: Option<usize>,
}

impl DragSession {
    /// A gesture began on the record at `visible_index`.
    pub fn drag_start(&mut self, visible_index: usize) {
        self.source = Some(visible_index);
    }

    /// The gesture is passing over a potential destination. Nothing persists.
    pub fn drag_over(&self) {}

    /// End the gesture. Returns the committed `(source, destination)` pair,
    /// or `None` when the gesture had no start or no valid destination
    /// (dropped outside the list). The session resets either way.
    pub fn drag_end(&mut self, destination: Option<usize>) -> Option<(usize, usize)> {
        let source = self.source.take()?;
        Some((source, destination?))
    }

    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }
}

/// Map a position in the subset `filter` shows to a position in the full
/// sequence. `None` when the view has no such position.
pub fn to_full_index(records: &[TaskRecord], filter: Filter, visible_index: usize) -> Option<usize> {
    visible_indices(records, filter).get(visible_index).copied()
}

/// Move the record at `source` to `destination` and re-rank everything.
///
/// Both indices address the full, unfiltered sequence. The moved record is
/// spliced out and reinserted, then every record gets a fresh dense rank
/// (`sort = position + 1`, 1-based), producing new record values. An
/// out-of-range `source` returns the input unchanged; `destination` is
/// clamped to the tail.
pub fn reorder(records: &[TaskRecord], source: usize, destination: usize) -> Vec<TaskRecord> {
    if source >= records.len() {
        return records.to_vec();
    }
    let mut next = records.to_vec();
    let moved = next.remove(source);
    let destination = destination.min(next.len());
    next.insert(destination, moved);
    assign_ranks(next)
}

/// Walk `records` assigning `sort = position + 1` to every record.
fn assign_ranks(records: Vec<TaskRecord>) -> Vec<TaskRecord> {
    records
        .into_iter()
        .enumerate()
        .map(|(position, record)| TaskRecord {
            sort: position as i64 + 1,
            ..record
        })
        .collect()
}

/// Records in `next` whose persisted rank differs from their rank in `prev`,
/// compared by id. These are the records a committed reorder must persist;
/// everything else kept its rank and needs no request.
pub fn rank_changes(prev: &[TaskRecord], next: &[TaskRecord]) -> Vec<TaskRecord> {
    next.iter()
        .filter(|record| {
            prev.iter()
                .find(|old| old.id == record.id)
                .is_none_or(|old| old.sort != record.sort)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: i64, content: &str, sort: i64) -> TaskRecord {
        TaskRecord {
            id,
            content: content.to_string(),
            completed: false,
            deleted: false,
            sort,
        }
    }

    fn five() -> Vec<TaskRecord> {
        vec![
            record(1, "A", 1),
            record(2, "B", 2),
            record(3, "C", 3),
            record(4, "D", 4),
            record(5, "E", 5),
        ]
    }

    #[test]
    fn head_to_middle_moves_and_reranks() {
        let next = reorder(&five(), 0, 2);
        let contents: Vec<&str> = next.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["B", "C", "A", "D", "E"]);
        let ranks: Vec<i64> = next.iter().map(|r| r.sort).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn dropping_on_own_position_changes_no_ranks() {
        let before = five();
        let next = reorder(&before, 3, 3);
        assert_eq!(next, before);
        assert!(rank_changes(&before, &next).is_empty());
    }

    #[test]
    fn ranks_are_dense_after_any_move() {
        let mut records = five();
        records[0].sort = 0;
        records[2].sort = 40;

        let next = reorder(&records, 4, 0);
        let ranks: Vec<i64> = next.iter().map(|r| r.sort).collect();
        assert_eq!(ranks, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn out_of_range_source_is_a_no_op() {
        let before = five();
        assert_eq!(reorder(&before, 9, 0), before);
    }

    #[test]
    fn destination_past_the_tail_clamps() {
        let next = reorder(&five(), 0, 99);
        let contents: Vec<&str> = next.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["B", "C", "D", "E", "A"]);
    }

    #[test]
    fn rank_changes_reports_only_moved_ranks() {
        let before = five();
        let next = reorder(&before, 0, 2);
        let changed: Vec<i64> = rank_changes(&before, &next).iter().map(|r| r.id).collect();
        // A moved to rank 3; B and C each shifted up one; D and E kept theirs.
        assert_eq!(changed, vec![2, 3, 1]);
    }

    #[test]
    fn visible_index_maps_through_the_filter() {
        let mut records = five();
        records[1].deleted = true;
        records[3].deleted = true;

        // Live view shows A, C, E at full positions 0, 2, 4.
        assert_eq!(to_full_index(&records, Filter::All, 0), Some(0));
        assert_eq!(to_full_index(&records, Filter::All, 1), Some(2));
        assert_eq!(to_full_index(&records, Filter::All, 2), Some(4));
        assert_eq!(to_full_index(&records, Filter::All, 3), None);

        assert_eq!(to_full_index(&records, Filter::Trash, 1), Some(3));
    }

    #[test]
    fn filtered_drag_leaves_hidden_records_in_place() {
        let mut records = five();
        records[1].deleted = true;
        records[3].deleted = true;

        // Drag visible A (0) below visible C (1) in the live view.
        let source = to_full_index(&records, Filter::All, 0).unwrap();
        let destination = to_full_index(&records, Filter::All, 1).unwrap();
        let next = reorder(&records, source, destination);

        let contents: Vec<&str> = next.iter().map(|r| r.content.as_str()).collect();
        assert_eq!(contents, vec!["B", "C", "A", "D", "E"]);
        let live: Vec<&str> = next
            .iter()
            .filter(|r| !r.deleted)
            .map(|r| r.content.as_str())
            .collect();
        assert_eq!(live, vec!["C", "A", "E"]);
    }

    #[test]
    fn session_commits_only_with_both_ends() {
        let mut session = DragSession::default();
        assert_eq!(session.drag_end(Some(1)), None, "no start");

        session.drag_start(0);
        assert!(session.is_dragging());
        session.drag_over();
        assert_eq!(session.drag_end(None), None, "dropped outside the list");
        assert!(!session.is_dragging(), "abort resets the session");

        session.drag_start(2);
        assert_eq!(session.drag_end(Some(0)), Some((2, 0)));
        assert!(!session.is_dragging(), "commit resets the session");
    }
}
