//! Diff engine for comparing sorted tables

pub mod cell_diff;
mod positional;

use serde::Serialize;
use tracing::debug;

use crate::model::{Record, Table};

pub use positional::changed_records;

/// Statistics about the diff
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct DiffStats {
    pub left_row_count: usize,
    pub right_row_count: usize,
    pub rows_removed: usize,
    pub rows_added: usize,
}

/// Result of comparing two tables in both directions
#[derive(Debug, Default)]
pub struct DiffResult {
    /// Left records with no equal right record at the same position
    pub removed: Vec<Record>,
    /// Right records with no equal left record at the same position
    pub added: Vec<Record>,
    /// Statistics
    pub stats: DiffStats,
}

impl DiffResult {
    /// Check if there are any changes
    pub fn has_changes(&self) -> bool {
        !self.removed.is_empty() || !self.added.is_empty()
    }
}

/// Compare two sorted tables positionally, once in each direction
pub fn compute_diff(left: &Table, right: &Table) -> DiffResult {
    let removed: Vec<Record> = changed_records(left, right).into_iter().cloned().collect();
    let added: Vec<Record> = changed_records(right, left).into_iter().cloned().collect();

    let stats = DiffStats {
        left_row_count: left.row_count(),
        right_row_count: right.row_count(),
        rows_removed: removed.len(),
        rows_added: added.len(),
    };
    debug!(?stats, "computed diff");

    DiffResult {
        removed,
        added,
        stats,
    }
}
