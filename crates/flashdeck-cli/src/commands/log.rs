//! The `log` command.

use std::path::Path;

use anyhow::{Context, Result};

use flashdeck_core::console::{prompt, Console};

use crate::shell::Shell;

/// Move the transcript into the archive directory under a user-chosen name.
pub fn execute<C: Console>(shell: &mut Shell<C>) -> Result<()> {
    let name = prompt(&mut shell.console, "File name:")?;

    if !shell.config.transcript {
        return shell.say("Transcript logging is disabled.");
    }

    let source = shell.config.transcript_file.clone();
    let target = shell.config.archive_path(&name);
    match archive(&source, &target) {
        Ok(()) => {
            tracing::info!(target = %target.display(), "transcript archived");
            shell.say("The log has been saved.")
        }
        Err(e) => {
            tracing::warn!("archiving transcript failed: {e:#}");
            shell.say("Failed to save the log.")
        }
    }
}

fn archive(source: &Path, target: &Path) -> Result<()> {
    if let Some(dir) = target.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create archive dir: {}", dir.display()))?;
    }

    if std::fs::rename(source, target).is_ok() {
        return Ok(());
    }

    // rename cannot cross filesystems
    std::fs::copy(source, target).with_context(|| {
        format!(
            "failed to copy transcript {} to {}",
            source.display(),
            target.display()
        )
    })?;
    std::fs::remove_file(source)
        .with_context(|| format!("failed to remove transcript: {}", source.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_moves_file_into_new_dir() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("default.txt");
        let target = dir.path().join("logs").join("monday.txt");
        std::fs::write(&source, "hello\n").unwrap();

        archive(&source, &target).unwrap();

        assert!(!source.exists());
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "hello\n");
    }

    #[test]
    fn archive_missing_source_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = archive(&dir.path().join("nothing.txt"), &dir.path().join("x.txt"));
        assert!(result.is_err());
    }
}
