use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority of a card on the board
///
/// Stored on disk as its ordinal (1, 2 or 3). Higher priorities are shown
/// first within a column.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    #[default]
    Low,
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Returns the ordinal value (Low=1, Medium=2, High=3)
    pub fn value(self) -> u8 {
        match self {
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Next priority in the cycle Low -> Medium -> High -> Low
    pub fn next(self) -> Self {
        match self {
            Self::Low => Self::Medium,
            Self::Medium => Self::High,
            Self::High => Self::Low,
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(format!(
                "invalid priority {}, expected 1 (low), 2 (medium) or 3 (high)",
                other
            )),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.value()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "Low"),
            Self::Medium => write!(f, "Medium"),
            Self::High => write!(f, "High"),
        }
    }
}

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub title: String,
    pub description: String,
    pub priority: Priority,
}

impl Card {
    /// Creates a new card
    pub fn new(title: String, description: String, priority: Priority) -> Self {
        Self {
            title,
            description,
            priority,
        }
    }

    /// Sets the title
    pub fn set_title(&mut self, title: String) {
        self.title = title;
    }

    /// Sets the description
    pub fn set_description(&mut self, description: String) {
        self.description = description;
    }

    /// Cycles the priority and returns the new value
    pub fn bump_priority(&mut self) -> Priority {
        self.priority = self.priority.next();
        self.priority
    }
}
