pub mod board;
pub mod card;
pub mod cursor;
pub mod sorting;

pub use board::{Board, Column};
pub use card::{Card, Priority};
pub use cursor::Cursor;
pub use sorting::{display_order, display_row, storage_index};
