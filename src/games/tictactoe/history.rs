//! Move history: board snapshots in the order they were played.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board snapshot paired with the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Board after the move.
    board: Board,
    /// Position played, `None` for the starting board.
    position: Option<Position>,
}

impl MoveRecord {
    /// The empty starting board.
    pub fn start() -> Self {
        Self {
            board: Board::new(),
            position: None,
        }
    }

    /// A record for a move at `position` resulting in `board`.
    pub fn new(board: Board, position: Position) -> Self {
        Self {
            board,
            position: Some(position),
        }
    }

    /// 1-based `(col, row)` of the move, `None` for the starting board.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.position.map(|pos| (pos.col(), pos.row()))
    }
}

/// Ordered snapshots; index 0 is always the empty board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    records: Vec<MoveRecord>,
}

impl History {
    /// A history holding only the starting board.
    pub fn new() -> Self {
        Self {
            records: vec![MoveRecord::start()],
        }
    }

    /// Builds a history from raw records, for replay and inspection.
    ///
    /// No validation happens here; see the invariants module.
    pub fn from_records(records: Vec<MoveRecord>) -> Self {
        Self { records }
    }

    /// Number of records, including the starting board.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for histories built with [`History::new`].
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the last record.
    pub fn last_step(&self) -> usize {
        self.records.len().saturating_sub(1)
    }

    /// The record at `step`.
    pub fn get(&self, step: usize) -> Option<&MoveRecord> {
        self.records.get(step)
    }

    /// All records in chronological order.
    pub fn records(&self) -> &[MoveRecord] {
        &self.records
    }

    /// Drops every record after `step`.
    #[instrument(skip(self), fields(len = self.records.len()))]
    pub(super) fn truncate_after(&mut self, step: usize) {
        if step + 1 < self.records.len() {
            debug!(dropped = self.records.len() - step - 1, "Discarding future moves");
            self.records.truncate(step + 1);
        }
    }

    /// Appends a record and returns its step.
    pub(super) fn push(&mut self, record: MoveRecord) -> usize {
        self.records.push(record);
        self.last_step()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
