//! # TermiKanban Core
//!
//! Board model, undo/redo history and `.kanban` persistence for the
//! TermiKanban terminal task board.
//!
//! Rendering and key handling live in the front end. It drives a
//! [`Session`], which owns the current [`Board`], its [`History`] and the
//! selection [`Cursor`], and persists boards through a [`Storage`] backend.

pub mod config;
pub mod domain;
pub mod error;
pub mod history;
pub mod keymap;
pub mod session;
pub mod storage;

// Re-export commonly used types
pub use config::KanbanConfig;
pub use domain::{Board, Card, Column, Cursor, Priority};
pub use error::{IndexTarget, KanbanError, Result};
pub use history::History;
pub use session::{Direction, Session};
pub use storage::{file_storage::FileStorage, Storage};
