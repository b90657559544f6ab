use crate::domain::{board::Board, sorting};

/// The highlighted column and card
///
/// `card` is a storage index into the selected column. Up and down walk the
/// column in display order by resolving through [`sorting`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    column: usize,
    card: usize,
}

impl Cursor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn card(&self) -> usize {
        self.card
    }

    /// Points the cursor at a storage position, clamped to the board
    pub fn select(&mut self, board: &Board, column: usize, card: usize) {
        self.column = column;
        self.card = card;
        self.clamp(board);
    }

    /// Pulls both indices back inside the board's current bounds
    pub fn clamp(&mut self, board: &Board) {
        let columns = board.column_count();
        self.column = self.column.min(columns.saturating_sub(1));

        let cards = board.column(self.column).map_or(0, |column| column.len());
        self.card = self.card.min(cards.saturating_sub(1));
    }

    /// The row the selected card is displayed on
    pub fn display_row(&self, board: &Board) -> Option<usize> {
        board
            .column(self.column)
            .and_then(|column| sorting::display_row(column, self.card))
    }

    pub fn move_left(&mut self, board: &Board) {
        if self.column > 0 {
            self.focus_column(board, self.column - 1);
        }
    }

    pub fn move_right(&mut self, board: &Board) {
        if self.column + 1 < board.column_count() {
            self.focus_column(board, self.column + 1);
        }
    }

    pub fn move_up(&mut self, board: &Board) {
        if let Some(row) = self.display_row(board) {
            if row > 0 {
                self.focus_row(board, row - 1);
            }
        }
    }

    pub fn move_down(&mut self, board: &Board) {
        if let Some(row) = self.display_row(board) {
            self.focus_row(board, row + 1);
        }
    }

    // Switching columns lands on the top displayed card
    fn focus_column(&mut self, board: &Board, column: usize) {
        self.column = column;
        self.card = board
            .column(column)
            .and_then(|column| sorting::storage_index(column, 0))
            .unwrap_or(0);
    }

    fn focus_row(&mut self, board: &Board, row: usize) {
        if let Some(index) = board
            .column(self.column)
            .and_then(|column| sorting::storage_index(column, row))
        {
            self.card = index;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::card::Priority;

    fn board() -> Board {
        let mut board = Board::new();
        board.add_column("A");
        board.add_column("B");
        board.add_card(0, "low", "", Priority::Low).unwrap();
        board.add_card(0, "high", "", Priority::High).unwrap();
        board.add_card(0, "medium", "", Priority::Medium).unwrap();
        board
    }

    #[test]
    fn test_clamp_empty_board() {
        let mut cursor = Cursor::new();
        cursor.select(&Board::new(), 4, 7);
        assert_eq!((cursor.column(), cursor.card()), (0, 0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut board = board();
        let mut cursor = Cursor::new();
        cursor.select(&board, 0, 2);

        board.remove_card(0, 2).unwrap();
        cursor.clamp(&board);
        assert_eq!(cursor.card(), 1);

        cursor.select(&board, 9, 9);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.card(), 0);
    }

    #[test]
    fn test_vertical_movement_follows_display_order() {
        let board = board();
        let mut cursor = Cursor::new();
        cursor.move_right(&board);
        cursor.move_left(&board);

        // Column switch lands on the top displayed card: "high"
        assert_eq!(cursor.card(), 1);
        assert_eq!(cursor.display_row(&board), Some(0));

        cursor.move_down(&board);
        assert_eq!(board.card(0, cursor.card()).unwrap().title, "medium");
        cursor.move_down(&board);
        assert_eq!(board.card(0, cursor.card()).unwrap().title, "low");
        cursor.move_down(&board);
        assert_eq!(board.card(0, cursor.card()).unwrap().title, "low");

        cursor.move_up(&board);
        cursor.move_up(&board);
        cursor.move_up(&board);
        assert_eq!(board.card(0, cursor.card()).unwrap().title, "high");
    }

    #[test]
    fn test_horizontal_bounds() {
        let board = board();
        let mut cursor = Cursor::new();
        cursor.move_left(&board);
        assert_eq!(cursor.column(), 0);
        cursor.move_right(&board);
        cursor.move_right(&board);
        assert_eq!(cursor.column(), 1);
        assert_eq!(cursor.card(), 0);
        assert_eq!(cursor.display_row(&board), None);
    }
}
