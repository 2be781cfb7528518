//! The `hardest card` command.

use anyhow::Result;

use flashdeck_core::console::Console;
use flashdeck_core::Card;

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    let message = describe(&shell.deck.hardest_cards());
    shell.say(&message)
}

fn describe(cards: &[&Card]) -> String {
    match cards {
        [] => "There are no cards with errors.".to_string(),
        [card] => format!(
            "The hardest card is \"{}\". You have {} errors answering it.",
            card.term, card.mistakes
        ),
        [first, ..] => {
            let terms: Vec<String> = cards.iter().map(|c| format!("\"{}\"", c.term)).collect();
            format!(
                "The hardest cards are {}. You have {} errors answering them.",
                terms.join(", "),
                first.mistakes
            )
        }
    }
}
