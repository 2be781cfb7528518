//! The `reset stats` command.

use anyhow::Result;

use flashdeck_core::console::Console;

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    shell.deck.reset_stats();
    tracing::info!(cards = shell.deck.len(), "mistake counters reset");
    shell.say("Card statistics have been reset.")
}
