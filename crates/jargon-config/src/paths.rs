//! Configuration and data directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/jargon/`, `~/.cache/jargon/`
//! - macOS: `~/Library/Application Support/jargon/`, `~/Library/Caches/jargon/`
//! - Windows: `%APPDATA%\jargon\`, `%LOCALAPPDATA%\jargon\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "jargon";

/// Get the application config directory
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the application cache directory
pub fn cache_dir() -> Result<PathBuf> {
    let base = dirs::cache_dir().context("Could not determine cache directory")?;
    let dir = base.join(APP_NAME);
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get path to the persisted state file
pub fn state_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("state.json"))
}

/// Get path to the app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir_exists() {
        let dir = config_dir().unwrap();
        assert!(dir.exists());
        assert!(dir.ends_with(APP_NAME));
    }

    #[test]
    fn test_state_and_config_paths() {
        let state = state_file_path().unwrap();
        assert!(state.ends_with("state.json"));

        let config = app_config_path().unwrap();
        assert!(config.ends_with("config.toml"));
    }
}
