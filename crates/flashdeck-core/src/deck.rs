//! An ordered, owned collection of cards.
//!
//! Insertion order is the practice order. The deck does not enforce term or
//! definition uniqueness on its own; callers check with [`Deck::ensure_new_term`]
//! and [`Deck::ensure_new_definition`] before building a card.

use serde::{Deserialize, Serialize};

use crate::error::DeckError;
use crate::model::Card;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if any card in the deck has this term.
    pub fn has_term(&self, term: &str) -> bool {
        self.cards.iter().any(|c| c.term == term)
    }

    /// Returns `true` if any card in the deck has this definition.
    pub fn has_definition(&self, definition: &str) -> bool {
        self.cards.iter().any(|c| c.definition == definition)
    }

    /// Fails with [`DeckError::TermExists`] if the term is taken.
    pub fn ensure_new_term(&self, term: &str) -> Result<(), DeckError> {
        if self.has_term(term) {
            return Err(DeckError::TermExists(term.to_string()));
        }
        Ok(())
    }

    /// Fails with [`DeckError::DefinitionExists`] if the definition is taken.
    pub fn ensure_new_definition(&self, definition: &str) -> Result<(), DeckError> {
        if self.has_definition(definition) {
            return Err(DeckError::DefinitionExists(definition.to_string()));
        }
        Ok(())
    }

    /// Append a card to the end of the deck.
    pub fn add_card(&mut self, card: Card) {
        tracing::debug!(term = %card.term, "card added");
        self.cards.push(card);
    }

    /// Remove every card with the given term, returning how many were removed.
    pub fn remove_card(&mut self, term: &str) -> usize {
        let before = self.cards.len();
        self.cards.retain(|c| c.term != term);
        let removed = before - self.cards.len();
        tracing::debug!(term, removed, "cards removed");
        removed
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cards_mut(&mut self) -> &mut [Card] {
        &mut self.cards
    }

    /// All definitions in deck order.
    pub fn definitions(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.definition.as_str()).collect()
    }

    /// The term of the first card carrying this definition.
    pub fn get_term(&self, definition: &str) -> Option<&str> {
        self.cards
            .iter()
            .find(|c| c.definition == definition)
            .map(|c| c.term.as_str())
    }

    /// The highest mistake count in the deck.
    pub fn most_mistakes(&self) -> Result<u32, DeckError> {
        self.cards
            .iter()
            .map(|c| c.mistakes)
            .max()
            .ok_or(DeckError::EmptyDeck)
    }

    /// Cards tied for the highest nonzero mistake count, in deck order.
    ///
    /// Empty when the deck is empty or nobody has made a mistake yet.
    pub fn hardest_cards(&self) -> Vec<&Card> {
        let max = match self.most_mistakes() {
            Ok(0) | Err(_) => return Vec::new(),
            Ok(max) => max,
        };
        self.cards.iter().filter(|c| c.mistakes == max).collect()
    }

    /// Zero the mistake counter on every card.
    pub fn reset_stats(&mut self) {
        self.cards.iter_mut().for_each(Card::reset);
    }

    /// Drop every card.
    pub fn clear(&mut self) {
        self.cards.clear();
    }
}

impl FromIterator<Card> for Deck {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        Self {
            cards: iter.into_iter().collect(),
        }
    }
}

impl Extend<Card> for Deck {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        self.cards.extend(iter);
    }
}
