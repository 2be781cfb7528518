//! Deck error types.
//!
//! Every variant is recoverable: the command loop reports it to the user
//! and reprompts, none of them terminate a session.

use thiserror::Error;

/// Errors raised by deck operations and interactive input handling.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    /// A card with this term is already in the deck.
    #[error("the term \"{0}\" already exists")]
    TermExists(String),

    /// A card with this definition is already in the deck.
    #[error("the definition \"{0}\" already exists")]
    DefinitionExists(String),

    /// No card with this term exists.
    #[error("there is no such card: \"{0}\"")]
    NoSuchCard(String),

    /// The entered command is not one of the known tokens.
    #[error("invalid choice: \"{0}\"")]
    InvalidChoice(String),

    /// An aggregate was requested over a deck with no cards.
    #[error("the deck is empty")]
    EmptyDeck,

    /// An import line could not be split into `term:definition:mistakes`.
    #[error("line {line}: {reason}")]
    Parse { line: usize, reason: String },

    /// The console reached end of input while a prompt was waiting.
    #[error("input closed")]
    InputClosed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DeckError::TermExists("cat".into()).to_string(),
            "the term \"cat\" already exists"
        );
        assert_eq!(
            DeckError::Parse {
                line: 3,
                reason: "missing mistakes field".into()
            }
            .to_string(),
            "line 3: missing mistakes field"
        );
    }
}
