//! The `export` command, also run on `exit` for `--export-to`.

use std::path::PathBuf;

use anyhow::Result;

use flashdeck_core::codec;
use flashdeck_core::console::{prompt, Console};

use crate::shell::Shell;

/// Save the deck and empty it.
pub fn execute<C: Console>(shell: &mut Shell<C>, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => PathBuf::from(prompt(&mut shell.console, "File name:")?),
    };

    match codec::export_file(&mut shell.deck, &path) {
        Ok(count) => {
            shell.say(&format!("{count} cards have been saved."))?;
            shell.say("")
        }
        Err(e) => {
            tracing::warn!("export failed: {e:#}");
            shell.say("Failed.")
        }
    }
}
