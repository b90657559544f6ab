//! Undo/redo history built from full board snapshots.

use crate::domain::Board;
use std::collections::VecDeque;

/// Undo and redo stacks of board snapshots
///
/// Every entry is an independent copy of the whole board, so restoring one
/// never depends on how the board got there. With a depth limit set, the
/// oldest undo entries are dropped first.
#[derive(Debug, Clone, Default)]
pub struct History {
    undo_stack: VecDeque<Board>,
    redo_stack: Vec<Board>,
    limit: Option<usize>,
}

impl History {
    /// Creates an unbounded history
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a history that keeps at most `limit` undo entries
    pub fn with_limit(limit: Option<usize>) -> Self {
        Self {
            limit,
            ..Self::default()
        }
    }

    /// Records a copy of `board` as the state to return to on undo
    ///
    /// Must be called right before an undoable mutation. Clears redo.
    pub fn snapshot_before(&mut self, board: &Board) {
        self.record(board.clone());
    }

    /// Records an already-taken snapshot and clears redo
    pub fn record(&mut self, snapshot: Board) {
        self.redo_stack.clear();
        self.push_undo(snapshot);
        tracing::debug!(depth = self.undo_stack.len(), "recorded snapshot");
    }

    /// Restores the previous board into `current`
    ///
    /// Returns false, leaving everything untouched, when there is nothing to
    /// undo.
    pub fn undo(&mut self, current: &mut Board) -> bool {
        let Some(previous) = self.undo_stack.pop_back() else {
            return false;
        };
        self.redo_stack.push(std::mem::replace(current, previous));
        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "undo"
        );
        true
    }

    /// Re-applies the most recently undone board into `current`
    pub fn redo(&mut self, current: &mut Board) -> bool {
        let Some(next) = self.redo_stack.pop() else {
            return false;
        };
        let replaced = std::mem::replace(current, next);
        self.push_undo(replaced);
        tracing::debug!(
            undo = self.undo_stack.len(),
            redo = self.redo_stack.len(),
            "redo"
        );
        true
    }

    /// Drops both stacks, used when the current board is replaced wholesale
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    fn push_undo(&mut self, snapshot: Board) {
        if self.limit == Some(0) {
            return;
        }
        self.undo_stack.push_back(snapshot);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.pop_front();
            }
        }
    }
}
