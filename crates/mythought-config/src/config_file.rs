//! Locating the `.mythought.toml` settings file
//!
//! Lookup order, first readable file wins:
//! 1. `./.mythought.toml`
//! 2. `<config dir>/config.toml`
//! 3. `~/.mythought.toml`

use std::env;
use std::path::{Path, PathBuf};

use crate::paths::config_dir;

const LOCAL_FILE: &str = ".mythought.toml";
const CONFIG_DIR_FILE: &str = "config.toml";

/// Places searched for the settings file, most specific first
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut candidates = vec![PathBuf::from(LOCAL_FILE)];
    match config_dir() {
        Ok(dir) => candidates.push(dir.join(CONFIG_DIR_FILE)),
        Err(e) => log::debug!("No config directory: {:#}", e),
    }
    if let Some(home) = env::var_os("HOME") {
        candidates.push(PathBuf::from(home).join(LOCAL_FILE));
    }
    candidates
}

/// Content of the first settings file found, `None` if there is none
pub fn load_config_file() -> Option<String> {
    read_first(&candidate_paths())
}

fn read_first(candidates: &[PathBuf]) -> Option<String> {
    candidates.iter().find_map(|path| read(path))
}

fn read(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    log::debug!("Loaded config from {}", path.display());
    Some(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_first_existing_candidate_wins() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.toml");
        let user = dir.path().join("config.toml");
        let home = dir.path().join("home.toml");
        std::fs::write(&user, "tick_rate_ms = 50").unwrap();
        std::fs::write(&home, "tick_rate_ms = 80").unwrap();

        assert_eq!(
            read_first(&[missing, user, home]),
            Some("tick_rate_ms = 50".to_string())
        );
    }

    #[test]
    fn test_no_candidate_yields_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_first(&[dir.path().join("nope.toml")]), None);
    }

    #[test]
    fn test_local_file_is_searched_first() {
        let candidates = candidate_paths();
        assert_eq!(candidates[0], PathBuf::from(LOCAL_FILE));
    }
}
