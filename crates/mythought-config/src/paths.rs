//! Configuration, cache and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/mythought/`, `~/.cache/mythought/`, `~/.local/share/mythought/`
//! - macOS: `~/Library/Application Support/mythought/`, `~/Library/Caches/mythought/`
//! - Windows: `%APPDATA%\mythought\`, `%LOCALAPPDATA%\mythought\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "mythought";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    ensure(base.join(APP_NAME))
}

/// Get the application cache directory (log files live here)
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    ensure(base.join(APP_NAME))
}

/// Get the application data directory (persisted UI state lives here)
pub fn data_dir() -> Result<PathBuf> {
    let base = dirs::data_dir().context("Could not determine data directory")?;
    ensure(base.join(APP_NAME))
}

/// Path of the snapshot blob stored under `namespace`
pub fn snapshot_path(namespace: &str) -> Result<PathBuf> {
    Ok(data_dir()?.join(snapshot_file_name(namespace)))
}

fn snapshot_file_name(namespace: &str) -> String {
    let sanitized: String = namespace
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}.json", sanitized)
}

fn ensure(dir: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create directory {:?}", dir))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_file_name_is_sanitized() {
        assert_eq!(snapshot_file_name("mythought-storage"), "mythought-storage.json");
        assert_eq!(snapshot_file_name("../evil/ns"), "___evil_ns.json");
    }

    #[test]
    fn test_cache_dir_exists() {
        let dir = cache_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }
}
