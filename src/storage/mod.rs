use crate::{domain::Board, error::Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

pub mod file_storage;

/// File extension used for saved boards
pub const BOARD_EXTENSION: &str = "kanban";

/// Storage trait for persisting boards
#[async_trait]
pub trait Storage: Send + Sync {
    /// Initializes the storage backend
    async fn initialize(&self) -> Result<()>;

    /// Saves a board to `path` and returns the path actually written
    async fn save_board(&self, board: &Board, path: &Path) -> Result<PathBuf>;

    /// Loads a board, never substituting defaults on failure
    async fn load_board(&self, path: &Path) -> Result<Board>;

    /// Lists saved boards, sorted by file name
    async fn list_boards(&self) -> Result<Vec<PathBuf>>;

    /// Resolves a bare board name to its location in this backend
    fn board_path(&self, name: &str) -> PathBuf;
}
