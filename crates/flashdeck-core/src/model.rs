//! The flashcard record.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single term/definition pair with its mistake counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The prompt shown during practice. Unique within a deck.
    pub term: String,
    /// The expected answer. Unique within a deck.
    pub definition: String,
    /// How many times this card was answered wrongly.
    #[serde(default)]
    pub mistakes: u32,
}

impl Card {
    /// Create a card with no recorded mistakes.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self::with_mistakes(term, definition, 0)
    }

    /// Create a card with an existing mistake count, as loaded from a file.
    pub fn with_mistakes(
        term: impl Into<String>,
        definition: impl Into<String>,
        mistakes: u32,
    ) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
            mistakes,
        }
    }

    pub fn add_mistake(&mut self) {
        self.mistakes = self.mistakes.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.mistakes = 0;
    }
}

/// Renders as `term:definition`.
impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.term, self.definition)
    }
}
