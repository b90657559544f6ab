use crate::{
    config::KanbanConfig,
    domain::Board,
    error::{KanbanError, Result},
    storage::{Storage, BOARD_EXTENSION},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct BoardFileRef<'a> {
    version: u32,
    saved_at: DateTime<Utc>,
    board: &'a Board,
}

#[derive(Deserialize)]
struct BoardFile {
    version: u32,
    #[allow(dead_code)]
    saved_at: DateTime<Utc>,
    board: Board,
}

/// File-based storage writing one pretty-printed JSON `.kanban` file per board
pub struct FileStorage {
    boards_dir: PathBuf,
}

impl FileStorage {
    /// Creates a new FileStorage rooted at the given boards directory
    pub fn new(boards_dir: impl AsRef<Path>) -> Self {
        Self {
            boards_dir: boards_dir.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &KanbanConfig) -> Self {
        Self::new(&config.boards_dir)
    }

    pub fn boards_dir(&self) -> &Path {
        &self.boards_dir
    }

    async fn ensure_directory_exists(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).await?;
        }
        Ok(())
    }
}

fn has_board_extension(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(BOARD_EXTENSION)
}

/// Appends `.kanban` unless the path already carries it
fn with_board_extension(path: &Path) -> PathBuf {
    if has_board_extension(path) {
        return path.to_path_buf();
    }
    let mut file_name = path.as_os_str().to_os_string();
    file_name.push(".");
    file_name.push(BOARD_EXTENSION);
    PathBuf::from(file_name)
}

#[async_trait]
impl Storage for FileStorage {
    async fn initialize(&self) -> Result<()> {
        self.ensure_directory_exists(&self.boards_dir).await
    }

    async fn save_board(&self, board: &Board, path: &Path) -> Result<PathBuf> {
        let path = with_board_extension(path);
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            self.ensure_directory_exists(parent).await?;
        }

        let file = BoardFileRef {
            version: FORMAT_VERSION,
            saved_at: Utc::now(),
            board,
        };
        let json = serde_json::to_string_pretty(&file)?;
        fs::write(&path, json).await?;

        tracing::info!(
            path = %path.display(),
            columns = board.column_count(),
            cards = board.card_count(),
            "saved board"
        );
        Ok(path)
    }

    async fn load_board(&self, path: &Path) -> Result<Board> {
        if !has_board_extension(path) {
            return Err(KanbanError::Format(format!(
                "{} is not a .{} file",
                path.display(),
                BOARD_EXTENSION
            )));
        }

        let contents = fs::read_to_string(path).await.map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to read board");
            e
        })?;
        let file: BoardFile = serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse board");
            KanbanError::from(e)
        })?;

        if file.version != FORMAT_VERSION {
            return Err(KanbanError::Format(format!(
                "unsupported format version {} (expected {})",
                file.version, FORMAT_VERSION
            )));
        }

        tracing::info!(
            path = %path.display(),
            columns = file.board.column_count(),
            cards = file.board.card_count(),
            "loaded board"
        );
        Ok(file.board)
    }

    async fn list_boards(&self) -> Result<Vec<PathBuf>> {
        if !self.boards_dir.exists() {
            return Ok(Vec::new());
        }

        let mut entries = fs::read_dir(&self.boards_dir).await?;
        let mut boards: Vec<PathBuf> = Vec::new();

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if has_board_extension(&path) && entry.file_type().await?.is_file() {
                boards.push(path);
            }
        }

        boards.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(boards)
    }

    fn board_path(&self, name: &str) -> PathBuf {
        with_board_extension(&self.boards_dir.join(name))
    }
}
