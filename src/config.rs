use crate::error::{KanbanError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const BOARDS_FOLDER: &str = "TermiKanban Boards";
const DEFAULT_HISTORY_LIMIT: usize = 100;

/// Environment variable that overrides [`KanbanConfig::boards_dir`]
pub const BOARDS_DIR_ENV: &str = "TERMIKANBAN_BOARDS_DIR";

/// Runtime configuration, passed to storage and sessions at startup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KanbanConfig {
    /// Directory where `.kanban` files are saved and listed
    pub boards_dir: PathBuf,
    /// Maximum number of undo steps kept, `None` for unbounded
    pub history_limit: Option<usize>,
}

impl Default for KanbanConfig {
    fn default() -> Self {
        Self {
            boards_dir: default_boards_dir(),
            history_limit: Some(DEFAULT_HISTORY_LIMIT),
        }
    }
}

impl KanbanConfig {
    pub fn with_boards_dir(mut self, boards_dir: impl Into<PathBuf>) -> Self {
        self.boards_dir = boards_dir.into();
        self
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history_limit = limit;
        self
    }

    /// Loads configuration from a JSON file
    ///
    /// A missing file yields the defaults. Fields absent from the file keep
    /// their default values.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path).await?;
        serde_json::from_str(&contents).map_err(|e| {
            tracing::warn!(path = %path.display(), error = %e, "failed to parse config");
            KanbanError::Config(format!("{}: {}", path.display(), e))
        })
    }

    /// Applies overrides from the process environment
    pub fn apply_env(self) -> Self {
        self.apply_overrides(std::env::var_os(BOARDS_DIR_ENV))
    }

    fn apply_overrides(mut self, boards_dir: Option<std::ffi::OsString>) -> Self {
        if let Some(dir) = boards_dir.filter(|dir| !dir.is_empty()) {
            self.boards_dir = PathBuf::from(dir);
        }
        self
    }
}

fn default_boards_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(BOARDS_FOLDER)
}
