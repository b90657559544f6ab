//! The editing session a front end drives.
//!
//! A [`Session`] owns the one current [`Board`] together with its
//! [`History`] and [`Cursor`]. Loading, undo and redo replace the board in
//! place, and the cursor is re-clamped against whatever board is current
//! after every command.

use crate::{
    config::KanbanConfig,
    domain::{Board, Card, Cursor, Priority},
    error::{IndexTarget, KanbanError, Result},
    history::History,
    storage::Storage,
};
use std::path::{Path, PathBuf};

/// Horizontal direction for moving cards and columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    history: History,
    cursor: Cursor,
}

impl Session {
    pub fn new(board: Board, config: &KanbanConfig) -> Self {
        let mut cursor = Cursor::new();
        cursor.clamp(&board);
        Self {
            board,
            history: History::with_limit(config.history_limit),
            cursor,
        }
    }

    /// Session on the default three-column board
    pub fn new_starter(config: &KanbanConfig) -> Self {
        Self::new(Board::starter(), config)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn selected_card(&self) -> Option<&Card> {
        self.board.card(self.cursor.column(), self.cursor.card())
    }

    /// Display row of the highlighted card, if the column has any
    pub fn selected_display_row(&self) -> Option<usize> {
        self.cursor.display_row(&self.board)
    }

    pub fn select_left(&mut self) {
        self.cursor.move_left(&self.board);
    }

    pub fn select_right(&mut self) {
        self.cursor.move_right(&self.board);
    }

    pub fn select_up(&mut self) {
        self.cursor.move_up(&self.board);
    }

    pub fn select_down(&mut self) {
        self.cursor.move_down(&self.board);
    }

    /// Adds a card to the first column
    pub fn add_card(&mut self, title: &str, description: &str, priority: Priority) -> Result<()> {
        self.mutate(|board, _| board.add_card(0, title, description, priority).map(|_| ()))
    }

    pub fn delete_selected_card(&mut self) -> Result<Card> {
        let (column, card) = self.selection();
        self.mutate(|board, _| board.remove_card(column, card))
    }

    /// Edits the selected card; an empty field keeps its current value
    pub fn edit_selected_card(&mut self, title: &str, description: &str) -> Result<()> {
        let (column, card) = self.selection();
        let current = self
            .board
            .card(column, card)
            .ok_or_else(|| self.missing_card_error())?;
        if title.is_empty() && description.is_empty() {
            return Ok(());
        }

        let title = if title.is_empty() {
            current.title.clone()
        } else {
            title.to_string()
        };
        let description = if description.is_empty() {
            current.description.clone()
        } else {
            description.to_string()
        };
        self.mutate(|board, _| board.edit_card(column, card, title, description))
    }

    /// Moves the selected card to the end of the neighbouring column
    ///
    /// Returns false when there is no column in that direction. The cursor
    /// follows the card.
    pub fn move_selected_card(&mut self, direction: Direction) -> Result<bool> {
        let (column, card) = self.selection();
        let Some(target) = self.neighbour(column, direction) else {
            return Ok(false);
        };
        self.mutate(|board, cursor| {
            let landed = board.move_card(column, card, target)?;
            cursor.select(board, target, landed);
            Ok(true)
        })
    }

    /// Appends a column and selects it
    pub fn add_column(&mut self, name: &str) -> Result<usize> {
        if name.is_empty() {
            return Err(KanbanError::EmptyInput("column name"));
        }
        self.mutate(|board, cursor| {
            let index = board.add_column(name);
            cursor.select(board, index, 0);
            Ok(index)
        })
    }

    /// Swaps the selected column with its neighbour
    ///
    /// Returns false when the column is already at that edge.
    pub fn move_selected_column(&mut self, direction: Direction) -> Result<bool> {
        let (column, card) = self.selection();
        let Some(target) = self.neighbour(column, direction) else {
            return Ok(false);
        };
        self.mutate(|board, cursor| {
            board.swap_columns(column, target)?;
            cursor.select(board, target, card);
            Ok(true)
        })
    }

    pub fn cycle_selected_priority(&mut self) -> Result<Priority> {
        let (column, card) = self.selection();
        self.mutate(|board, _| board.bump_card_priority(column, card))
    }

    pub fn undo(&mut self) -> bool {
        let changed = self.history.undo(&mut self.board);
        self.cursor.clamp(&self.board);
        changed
    }

    pub fn redo(&mut self) -> bool {
        let changed = self.history.redo(&mut self.board);
        self.cursor.clamp(&self.board);
        changed
    }

    /// Saves under a bare name in the storage's boards directory
    pub async fn save_as(&self, storage: &dyn Storage, name: &str) -> Result<PathBuf> {
        let name = name.trim();
        if name.is_empty() {
            return Err(KanbanError::EmptyInput("file name"));
        }
        self.save_to(storage, &storage.board_path(name)).await
    }

    pub async fn save_to(&self, storage: &dyn Storage, path: &Path) -> Result<PathBuf> {
        storage.save_board(&self.board, path).await
    }

    /// Replaces the current board with one loaded from `path`
    ///
    /// History is cleared and the cursor reset. On failure nothing changes.
    pub async fn open(&mut self, storage: &dyn Storage, path: &Path) -> Result<()> {
        let board = storage.load_board(path).await?;
        self.replace_board(board);
        Ok(())
    }

    /// Installs a new current board, dropping all history
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.history.clear();
        self.cursor = Cursor::new();
        self.cursor.clamp(&self.board);
    }

    fn selection(&self) -> (usize, usize) {
        (self.cursor.column(), self.cursor.card())
    }

    fn neighbour(&self, column: usize, direction: Direction) -> Option<usize> {
        match direction {
            Direction::Left => column.checked_sub(1),
            Direction::Right => Some(column + 1).filter(|&c| c < self.board.column_count()),
        }
    }

    fn missing_card_error(&self) -> KanbanError {
        match self.board.column(self.cursor.column()) {
            Some(column) => KanbanError::OutOfRange {
                target: IndexTarget::Card,
                index: self.cursor.card(),
                len: column.len(),
            },
            None => KanbanError::OutOfRange {
                target: IndexTarget::Column,
                index: self.cursor.column(),
                len: self.board.column_count(),
            },
        }
    }

    // Snapshot, apply, and only keep the snapshot if the command succeeded
    fn mutate<T>(&mut self, op: impl FnOnce(&mut Board, &mut Cursor) -> Result<T>) -> Result<T> {
        let snapshot = self.board.clone();
        let cursor = self.cursor;

        match op(&mut self.board, &mut self.cursor) {
            Ok(value) => {
                self.history.record(snapshot);
                self.cursor.clamp(&self.board);
                Ok(value)
            }
            Err(e) => {
                tracing::debug!(error = %e, "command rejected");
                self.board = snapshot;
                self.cursor = cursor;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::file_storage::FileStorage;
    use tempfile::TempDir;

    fn config() -> KanbanConfig {
        KanbanConfig::default().with_history_limit(None)
    }

    fn empty_session() -> Session {
        Session::new(Board::new(), &config())
    }

    #[test]
    fn test_starter_session() {
        let session = Session::new_starter(&config());
        assert_eq!(session.selected_card().unwrap().title, "Task 1");
        assert_eq!(session.selected_display_row(), Some(0));
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_navigation_does_not_snapshot() {
        let mut session = Session::new_starter(&config());
        session.select_right();
        session.select_down();
        session.select_left();
        session.select_up();
        assert!(!session.history().can_undo());
        assert_eq!(session.cursor().column(), 0);
    }

    #[test]
    fn test_add_card_goes_to_first_column() {
        let mut session = Session::new_starter(&config());
        session.select_right();
        session.add_card("New", "desc", Priority::Medium).unwrap();

        assert_eq!(session.board().columns()[0].len(), 2);
        assert_eq!(session.board().card(0, 1).unwrap().title, "New");
        assert_eq!(session.cursor().column(), 1);
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn test_add_card_without_columns_fails_cleanly() {
        let mut session = empty_session();
        let err = session.add_card("T", "", Priority::Low).unwrap_err();
        assert!(err.is_out_of_range());
        assert!(!session.history().can_undo());
    }

    #[test]
    fn test_add_column_selects_it() {
        let mut session = empty_session();
        assert_eq!(session.add_column("To Do").unwrap(), 0);
        assert_eq!(session.add_column("Done").unwrap(), 1);
        assert_eq!(session.cursor().column(), 1);

        let err = session.add_column("").unwrap_err();
        assert!(matches!(err, KanbanError::EmptyInput(_)));
        assert_eq!(session.history().undo_depth(), 2);
    }

    #[test]
    fn test_move_card_scenario() {
        let mut session = empty_session();
        session.add_column("To Do").unwrap();
        session.add_column("Done").unwrap();
        session.add_card("Write spec", "", Priority::High).unwrap();
        session.select_left();

        assert!(session.move_selected_card(Direction::Right).unwrap());
        assert!(session.board().columns()[0].is_empty());
        assert_eq!(session.cursor().column(), 1);
        let card = session.selected_card().unwrap();
        assert_eq!(card.title, "Write spec");
        assert_eq!(card.priority, Priority::High);

        assert!(!session.move_selected_card(Direction::Right).unwrap());
    }

    #[test]
    fn test_delete_selected_card() {
        let mut session = Session::new_starter(&config());
        let removed = session.delete_selected_card().unwrap();
        assert_eq!(removed.title, "Task 1");
        assert!(session.board().columns()[0].is_empty());
        assert_eq!(session.cursor().card(), 0);

        let depth = session.history().undo_depth();
        assert!(session.delete_selected_card().unwrap_err().is_out_of_range());
        assert_eq!(session.history().undo_depth(), depth);
    }

    #[test]
    fn test_edit_keeps_empty_fields() {
        let mut session = Session::new_starter(&config());
        session.edit_selected_card("Renamed", "").unwrap();
        let card = session.selected_card().unwrap();
        assert_eq!(card.title, "Renamed");
        assert_eq!(card.description, "Press H for Help");

        session.edit_selected_card("", "").unwrap();
        assert_eq!(session.history().undo_depth(), 1);
    }

    #[test]
    fn test_move_column_cursor_follows() {
        let mut session = Session::new_starter(&config());
        assert!(!session.move_selected_column(Direction::Left).unwrap());
        assert!(session.move_selected_column(Direction::Right).unwrap());

        assert_eq!(session.board().columns()[1].name(), "To Do");
        assert_eq!(session.cursor().column(), 1);
        assert_eq!(session.selected_card().unwrap().title, "Task 1");
    }

    #[test]
    fn test_cycle_priority_is_undoable() {
        let mut session = Session::new_starter(&config());
        assert_eq!(session.cycle_selected_priority().unwrap(), Priority::Low);
        assert!(session.undo());
        assert_eq!(session.selected_card().unwrap().priority, Priority::High);
    }

    #[test]
    fn test_cursor_follows_card_through_priority_change() {
        let mut session = Session::new_starter(&config());
        session.add_card("Second", "", Priority::Medium).unwrap();
        // Display: Task 1 (High), Second (Medium)
        session.select_down();
        assert_eq!(session.selected_card().unwrap().title, "Second");
        session.select_up();

        // Task 1 drops to Low and is now shown below Second
        session.cycle_selected_priority().unwrap();
        assert_eq!(session.selected_card().unwrap().title, "Task 1");
        assert_eq!(session.selected_display_row(), Some(1));
    }

    #[test]
    fn test_undo_redo_and_redo_invalidation() {
        let mut session = Session::new_starter(&config());
        let original = session.board().clone();

        session.add_column("Later").unwrap();
        let with_column = session.board().clone();

        assert!(session.undo());
        assert_eq!(session.board(), &original);
        assert!(session.cursor().column() < session.board().column_count());

        assert!(session.redo());
        assert_eq!(session.board(), &with_column);

        assert!(session.undo());
        session.add_card("Fresh", "", Priority::Low).unwrap();
        let current = session.board().clone();
        assert!(!session.redo());
        assert_eq!(session.board(), &current);
    }

    #[test]
    fn test_undo_reclamps_cursor() {
        let mut session = Session::new_starter(&config());
        session.add_column("Extra").unwrap();
        assert_eq!(session.cursor().column(), 3);
        assert!(session.undo());
        assert_eq!(session.cursor().column(), 2);
    }

    #[tokio::test]
    async fn test_save_and_open() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());

        let mut session = Session::new_starter(&config());
        session.add_card("Saved", "", Priority::High).unwrap();
        let path = session.save_as(&storage, "mine").await.unwrap();
        assert_eq!(path, temp_dir.path().join("mine.kanban"));

        let mut other = empty_session();
        other.add_column("Scratch").unwrap();
        other.open(&storage, &path).await.unwrap();

        assert_eq!(other.board(), session.board());
        assert!(!other.history().can_undo());
        assert!(!other.history().can_redo());
        assert_eq!((other.cursor().column(), other.cursor().card()), (0, 0));
    }

    #[tokio::test]
    async fn test_failed_open_keeps_board() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        let path = storage.board_path("broken");
        tokio::fs::write(&path, "{ \"version\": 1 }").await.unwrap();

        let mut session = Session::new_starter(&config());
        session.add_column("Kept").unwrap();
        let before = session.board().clone();

        let err = session.open(&storage, &path).await.unwrap_err();
        assert!(matches!(err, KanbanError::Format(_)));
        assert_eq!(session.board(), &before);
        assert!(session.history().can_undo());
    }

    #[tokio::test]
    async fn test_save_as_rejects_empty_name() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        let session = Session::new_starter(&config());

        let err = session.save_as(&storage, "  ").await.unwrap_err();
        assert!(matches!(err, KanbanError::EmptyInput(_)));
    }
}
