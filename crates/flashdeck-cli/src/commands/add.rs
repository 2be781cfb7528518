//! The `add` command.

use anyhow::Result;

use flashdeck_core::console::{expect_line, Console};
use flashdeck_core::{Card, Deck, DeckError};

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    shell.say("The card:")?;
    let term = read_unique(shell, |deck, t| deck.ensure_new_term(t))?;

    shell.say("The definition of the card:")?;
    let definition = read_unique(shell, |deck, d| deck.ensure_new_definition(d))?;

    let card = Card::new(term, definition);
    let message = format!("The pair (\"{card}\") has been added.");
    shell.deck.add_card(card);
    shell.say(&message)?;
    shell.say("")
}

/// Read lines until `check` accepts one.
fn read_unique<C, F>(shell: &mut Shell<C>, check: F) -> Result<String>
where
    C: Console,
    F: Fn(&Deck, &str) -> Result<(), DeckError>,
{
    loop {
        let line = expect_line(&mut shell.console)?;
        match check(&shell.deck, &line) {
            Ok(()) => return Ok(line),
            Err(DeckError::TermExists(t)) => {
                shell.say(&format!("The term \"{t}\" already exists. Try again:"))?
            }
            Err(DeckError::DefinitionExists(d)) => {
                shell.say(&format!("The definition \"{d}\" already exists. Try again:"))?
            }
            Err(e) => return Err(e.into()),
        }
    }
}
