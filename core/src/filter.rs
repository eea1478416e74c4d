//! Category filtering: pure projections from the full record set to the
//! subset a view shows.

use std::fmt;
use std::str::FromStr;

use crate::record::TaskRecord;

/// The four views over the record set.
///
/// The three live views never show soft-deleted records; the trash view shows
/// nothing else.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    /// Everything that is not soft-deleted.
    #[default]
    All,
    /// Checked-off records that are not soft-deleted.
    Completed,
    /// Unchecked records that are not soft-deleted.
    Unchecked,
    /// Soft-deleted records only. Wire label `delete`.
    Trash,
}

impl Filter {
    /// Whether `record` belongs to this view.
    pub fn matches(&self, record: &TaskRecord) -> bool {
        match self {
            Filter::All => !record.deleted,
            Filter::Completed => record.completed && !record.deleted,
            Filter::Unchecked => !record.completed && !record.deleted,
            Filter::Trash => record.deleted,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Completed => "completed",
            Filter::Unchecked => "unchecked",
            Filter::Trash => "delete",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error for an unrecognized filter label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFilter(pub String);

impl fmt::Display for UnknownFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown filter: {}", self.0)
    }
}

impl std::error::Error for UnknownFilter {}

impl FromStr for Filter {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Filter::All),
            "completed" => Ok(Filter::Completed),
            "unchecked" => Ok(Filter::Unchecked),
            "delete" => Ok(Filter::Trash),
            other => Err(UnknownFilter(other.to_string())),
        }
    }
}

/// Project the full record set down to the subset `filter` shows.
///
/// Pure: no side effects, input order preserved, `sort` untouched — rank
/// assignment belongs to the reorder engine.
pub fn visible<'a>(records: &'a [TaskRecord], filter: Filter) -> Vec<&'a TaskRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .collect()
}

/// Positions, in the full sequence, of the records `filter` shows.
///
/// Drag gestures report indices relative to the visible subset; these are the
/// positions they map back to before any splice.
pub fn visible_indices(records: &[TaskRecord], filter: Filter) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, record)| filter.matches(record))
        .map(|(index, _)| index)
        .collect()
}
