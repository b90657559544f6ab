//! Display order versus storage order.
//!
//! Columns store cards in insertion order, but cards are shown sorted by
//! descending priority. Anything that turns a position on screen into a board
//! operation must go through [`storage_index`], and anything that highlights a
//! stored card must go through [`display_row`].

use crate::domain::board::Column;

/// Storage indices of a column's cards, in display order
///
/// Higher priority comes first. Cards with equal priority keep their
/// insertion order.
pub fn display_order(column: &Column) -> Vec<usize> {
    let cards = column.cards();
    let mut order: Vec<usize> = (0..cards.len()).collect();
    // sort_by is stable, equal priorities stay in insertion order
    order.sort_by(|&a, &b| cards[b].priority.cmp(&cards[a].priority));
    order
}

/// Maps a displayed row to the card's storage index
pub fn storage_index(column: &Column, display_row: usize) -> Option<usize> {
    display_order(column).get(display_row).copied()
}

/// Maps a storage index to the row it is displayed on
pub fn display_row(column: &Column, storage_index: usize) -> Option<usize> {
    display_order(column)
        .iter()
        .position(|&index| index == storage_index)
}
