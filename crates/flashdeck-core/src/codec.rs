//! Line-oriented deck files.
//!
//! One card per line as `term:definition:mistakes`. The first two colons
//! delimit the fields, so a colon inside a term or definition cannot be
//! represented and such a line fails to parse on the mistakes field.

use std::io;
use std::path::Path;

use anyhow::{Context, Result};

use crate::deck::Deck;
use crate::error::DeckError;
use crate::model::Card;

/// Parse a single `term:definition:mistakes` line.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn parse_line(line: &str, line_no: usize) -> Result<Card, DeckError> {
    let mut fields = line.splitn(3, ':');
    let (Some(term), Some(definition), Some(mistakes)) =
        (fields.next(), fields.next(), fields.next())
    else {
        return Err(DeckError::Parse {
            line: line_no,
            reason: "expected term:definition:mistakes".into(),
        });
    };

    let mistakes = mistakes.trim();
    let mistakes: u32 = mistakes.parse().map_err(|_| DeckError::Parse {
        line: line_no,
        reason: format!("invalid mistake count \"{mistakes}\""),
    })?;

    Ok(Card::with_mistakes(term, definition, mistakes))
}

/// Parse a whole file body. Blank lines are skipped; any malformed line
/// rejects the entire input.
pub fn parse_deck_str(content: &str) -> Result<Vec<Card>, DeckError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_line(line, i + 1))
        .collect()
}

/// Render the deck in file format, one line per card in deck order.
pub fn render_deck(deck: &Deck) -> String {
    deck.cards()
        .iter()
        .map(|c| format!("{}:{}:{}\n", c.term, c.definition, c.mistakes))
        .collect()
}

/// Append every card in `path` to the deck, returning how many were loaded.
///
/// The deck is left untouched if the file is missing or any line is malformed.
pub fn import_file(deck: &mut Deck, path: &Path) -> Result<usize> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read deck file: {}", path.display()))?;

    let cards = parse_deck_str(&content)
        .with_context(|| format!("failed to parse deck file: {}", path.display()))?;

    let count = cards.len();
    deck.extend(cards);
    tracing::info!(path = %path.display(), count, "deck imported");
    Ok(count)
}

/// Write the deck to `path`, then clear it. Returns the number of cards written.
///
/// Exporting always empties the deck on success. On failure nothing is cleared.
pub fn export_file(deck: &mut Deck, path: &Path) -> Result<usize> {
    std::fs::write(path, render_deck(deck))
        .with_context(|| format!("failed to write deck file: {}", path.display()))?;

    let count = deck.len();
    deck.clear();
    tracing::info!(path = %path.display(), count, "deck exported");
    Ok(count)
}

/// Whether the root cause of an import/export failure is a missing file.
pub fn is_not_found(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::NotFound)
}
