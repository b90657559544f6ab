use crate::{
    domain::card::{Card, Priority},
    error::{KanbanError, Result},
};
use serde::{Deserialize, Serialize};

/// A named column of cards
///
/// Cards are kept in insertion order. Priority ordering is a display concern,
/// see [`Column::cards_by_priority`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    name: String,
    cards: Vec<Card>,
}

impl Column {
    pub fn new(name: String) -> Self {
        Self {
            name,
            cards: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Cards in storage (insertion) order
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Appends a card to the end of the column
    pub fn append_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Removes and returns the card at `index`
    pub fn remove_card_at(&mut self, index: usize) -> Result<Card> {
        self.check_card(index)?;
        Ok(self.cards.remove(index))
    }

    /// Cards ordered by descending priority, ties in insertion order
    ///
    /// The returned iterator can be cloned to walk the sequence again.
    pub fn cards_by_priority(&self) -> impl Iterator<Item = &Card> + Clone + '_ {
        crate::domain::sorting::display_order(self)
            .into_iter()
            .map(move |index| &self.cards[index])
    }

    fn check_card(&self, index: usize) -> Result<()> {
        if index < self.cards.len() {
            Ok(())
        } else {
            Err(KanbanError::card_out_of_range(index, self.cards.len()))
        }
    }

    fn card_mut(&mut self, index: usize) -> Result<&mut Card> {
        let len = self.cards.len();
        self.cards
            .get_mut(index)
            .ok_or_else(|| KanbanError::card_out_of_range(index, len))
    }
}

/// Kanban board state
///
/// All mutation goes through the methods below. Each one validates its
/// indices before touching anything, so a failed call leaves the board as it
/// was.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    columns: Vec<Column>,
}

impl Board {
    /// Creates an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// The board shown when starting fresh or when a file fails to load
    pub fn starter() -> Self {
        let mut board = Self::new();
        let todo = board.add_column("To Do");
        let in_progress = board.add_column("In Progress");
        let done = board.add_column("Done");

        // Indices come from the add_column calls above
        let cards = [
            (todo, "Task 1", "Press H for Help", Priority::High),
            (in_progress, "Task 2", "Press 'E' to edit me!", Priority::Low),
            (
                done,
                "Task 3",
                "Issue? Report it at https://github.com/armadillomike/termikanban/issues",
                Priority::Low,
            ),
        ];
        for (column, title, description, priority) in cards {
            board.columns[column].append_card(Card::new(
                title.to_string(),
                description.to_string(),
                priority,
            ));
        }
        board
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, index: usize) -> Option<&Column> {
        self.columns.get(index)
    }

    pub fn card(&self, column_index: usize, card_index: usize) -> Option<&Card> {
        self.column(column_index)
            .and_then(|column| column.card(card_index))
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Total number of cards across all columns
    pub fn card_count(&self) -> usize {
        self.columns.iter().map(Column::len).sum()
    }

    /// Appends an empty column and returns its index
    pub fn add_column(&mut self, name: impl Into<String>) -> usize {
        let name = name.into();
        tracing::debug!(column = %name, index = self.columns.len(), "adding column");
        self.columns.push(Column::new(name));
        self.columns.len() - 1
    }

    /// Appends a card to a column and returns its storage index
    pub fn add_card(
        &mut self,
        column_index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<usize> {
        let column = self.column_mut(column_index)?;
        column.append_card(Card::new(title.into(), description.into(), priority));
        tracing::debug!(column = column_index, "added card");
        Ok(column.len() - 1)
    }

    /// Removes and returns a card
    pub fn remove_card(&mut self, column_index: usize, card_index: usize) -> Result<Card> {
        let card = self.column_mut(column_index)?.remove_card_at(card_index)?;
        tracing::debug!(column = column_index, card = card_index, "removed card");
        Ok(card)
    }

    /// Moves a card to the end of another column
    ///
    /// Returns the card's storage index in the destination column. Moving a
    /// card within its own column is a no-op.
    pub fn move_card(
        &mut self,
        from_column: usize,
        card_index: usize,
        to_column: usize,
    ) -> Result<usize> {
        self.check_column(to_column)?;
        self.check_card(from_column, card_index)?;

        if from_column == to_column {
            return Ok(card_index);
        }

        // Both indices were validated, neither step below can fail
        let card = self.columns[from_column].cards.remove(card_index);
        let destination = &mut self.columns[to_column];
        destination.cards.push(card);

        tracing::debug!(
            from = from_column,
            to = to_column,
            card = card_index,
            "moved card"
        );
        Ok(destination.len() - 1)
    }

    /// Exchanges the positions of two columns
    pub fn swap_columns(&mut self, i: usize, j: usize) -> Result<()> {
        self.check_column(i)?;
        self.check_column(j)?;
        self.columns.swap(i, j);
        tracing::debug!(i, j, "swapped columns");
        Ok(())
    }

    /// Replaces a card's title and description
    pub fn edit_card(
        &mut self,
        column_index: usize,
        card_index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let card = self.card_mut(column_index, card_index)?;
        card.set_title(title.into());
        card.set_description(description.into());
        tracing::debug!(column = column_index, card = card_index, "edited card");
        Ok(())
    }

    /// Sets a card's priority directly
    pub fn set_card_priority(
        &mut self,
        column_index: usize,
        card_index: usize,
        priority: Priority,
    ) -> Result<()> {
        self.card_mut(column_index, card_index)?.priority = priority;
        Ok(())
    }

    /// Cycles a card's priority and returns the new value
    pub fn bump_card_priority(&mut self, column_index: usize, card_index: usize) -> Result<Priority> {
        let priority = self.card_mut(column_index, card_index)?.bump_priority();
        tracing::debug!(
            column = column_index,
            card = card_index,
            %priority,
            "bumped priority"
        );
        Ok(priority)
    }

    fn check_column(&self, index: usize) -> Result<()> {
        if index < self.columns.len() {
            Ok(())
        } else {
            Err(KanbanError::column_out_of_range(index, self.columns.len()))
        }
    }

    fn check_card(&self, column_index: usize, card_index: usize) -> Result<()> {
        self.check_column(column_index)?;
        self.columns[column_index].check_card(card_index)
    }

    fn column_mut(&mut self, index: usize) -> Result<&mut Column> {
        let len = self.columns.len();
        self.columns
            .get_mut(index)
            .ok_or_else(|| KanbanError::column_out_of_range(index, len))
    }

    fn card_mut(&mut self, column_index: usize, card_index: usize) -> Result<&mut Card> {
        self.column_mut(column_index)?.card_mut(card_index)
    }
}
