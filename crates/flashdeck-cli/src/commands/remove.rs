//! The `remove` command.

use anyhow::Result;

use flashdeck_core::console::{prompt, Console};
use flashdeck_core::DeckError;

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    let term = prompt(&mut shell.console, "Which card?")?;

    match shell.deck.remove_card(&term) {
        0 => {
            tracing::debug!("{}", DeckError::NoSuchCard(term.clone()));
            shell.say(&format!("Can't remove \"{term}\": there is no such card."))?;
            shell.say("")
        }
        _ => shell.say("The card has been removed."),
    }
}
