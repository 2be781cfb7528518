//! The `exit` command.

use anyhow::Result;

use flashdeck_core::console::Console;

use crate::commands::export;
use crate::shell::Shell;

/// Export if the session was started with `--export-to`, otherwise say goodbye.
pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    match shell.export_on_exit.take() {
        Some(path) => export::execute(shell, Some(path)),
        None => shell.say("Bye bye!"),
    }
}
