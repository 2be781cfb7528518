//! The `import` command, also run at startup for `--import-from`.

use std::path::PathBuf;

use anyhow::Result;

use flashdeck_core::codec;
use flashdeck_core::console::{prompt, Console};

use crate::shell::Shell;

pub fn execute<C: Console>(shell: &mut Shell<C>, path: Option<PathBuf>) -> Result<()> {
    let path = match path {
        Some(p) => p,
        None => PathBuf::from(prompt(&mut shell.console, "File name:")?),
    };

    match codec::import_file(&mut shell.deck, &path) {
        Ok(count) => shell.say(&format!("{count} cards have been loaded."))?,
        Err(e) if codec::is_not_found(&e) => shell.say("File not found.")?,
        Err(e) => {
            tracing::warn!("import failed: {e:#}");
            shell.say(&format!("Failed to import: {}.", e.root_cause()))?;
        }
    }
    shell.say("")
}
