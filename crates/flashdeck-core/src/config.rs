//! Runtime configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Top-level flashdeck configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlashdeckConfig {
    /// Whether the session is teed to a transcript file.
    #[serde(default = "default_true")]
    pub transcript: bool,
    /// Where the transcript is written.
    #[serde(default = "default_transcript_file")]
    pub transcript_file: PathBuf,
    /// Where the `log` command moves the transcript.
    #[serde(default = "default_archive_dir")]
    pub archive_dir: PathBuf,
}

fn default_true() -> bool {
    true
}
fn default_transcript_file() -> PathBuf {
    PathBuf::from("default.txt")
}
fn default_archive_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for FlashdeckConfig {
    fn default() -> Self {
        Self {
            transcript: true,
            transcript_file: default_transcript_file(),
            archive_dir: default_archive_dir(),
        }
    }
}

impl FlashdeckConfig {
    /// Destination of an archived transcript named `name`.
    pub fn archive_path(&self, name: &str) -> PathBuf {
        self.archive_dir.join(name)
    }
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `flashdeck.toml` in the current directory
/// 2. `~/.config/flashdeck/config.toml`
///
/// Environment variable override: `FLASHDECK_ARCHIVE_DIR`.
pub fn load_config() -> Result<FlashdeckConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<FlashdeckConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from("flashdeck.toml");
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<FlashdeckConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => FlashdeckConfig::default(),
    };

    if let Ok(dir) = std::env::var("FLASHDECK_ARCHIVE_DIR") {
        config.archive_dir = PathBuf::from(dir);
    }

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("flashdeck"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = FlashdeckConfig::default();
        assert!(config.transcript);
        assert_eq!(config.transcript_file, PathBuf::from("default.txt"));
        assert_eq!(config.archive_path("run1.txt"), PathBuf::from("./run1.txt"));
    }

    #[test]
    fn parse_partial_config() {
        let config: FlashdeckConfig = toml::from_str(
            r#"
transcript = false
archive_dir = "/tmp/flashdeck-logs"
"#,
        )
        .unwrap();
        assert!(!config.transcript);
        assert_eq!(config.transcript_file, PathBuf::from("default.txt"));
        assert_eq!(config.archive_dir, PathBuf::from("/tmp/flashdeck-logs"));
    }

    #[test]
    fn explicit_path_is_loaded() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("flashdeck.toml");
        std::fs::write(&path, "transcript_file = \"session.log\"\n").unwrap();

        let config = load_config_from(Some(&path)).unwrap();
        assert_eq!(config.transcript_file, PathBuf::from("session.log"));
    }

    #[test]
    fn missing_explicit_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config_from(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
    }

    #[test]
    fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "transcript = \"sometimes\"").unwrap();
        assert!(load_config_from(Some(&path)).is_err());
    }
}
