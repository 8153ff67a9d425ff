//! Persisted favorites state
//!
//! Loads and saves the favorites slice as a single JSON state file:
//!
//! `{ "favorites": [ { "name": ..., "description": ... }, ... ] }`
//!
//! The terms slice is intentionally excluded, only favorites survive a
//! restart. An empty favorites list is never written, so a previously
//! saved non-empty list stays on disk after the user clears everything.

use anyhow::{Context, Result};
use jargon_store::Term;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::paths;

/// The on-disk fragment of application state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PersistedState {
    pub favorites: Vec<Term>,
}

/// Load the persisted favorites, if any.
///
/// A missing file and one that fails to parse both count as "nothing
/// persisted": the caller starts from empty favorites. Used once, to
/// seed initial state before store construction.
pub fn load_persisted_favorites() -> Option<PersistedState> {
    let path = match paths::state_file_path() {
        Ok(path) => path,
        Err(e) => {
            log::warn!("Could not resolve state file path: {}", e);
            return None;
        }
    };
    load_from_path(&path)
}

fn load_from_path(path: &Path) -> Option<PersistedState> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(_) => {
            log::debug!("No persisted state at {:?}, starting fresh", path);
            return None;
        }
    };

    match serde_json::from_str(&content) {
        Ok(state) => {
            log::info!("Loaded persisted favorites from {:?}", path);
            Some(state)
        }
        Err(e) => {
            log::warn!("Failed to parse persisted state: {}", e);
            None
        }
    }
}

/// Save the favorites slice, overwriting any prior value.
///
/// Writing an empty list is a no-op: whatever was last saved stays on
/// disk untouched.
pub fn save_persisted_favorites(favorites: &[Term]) -> Result<()> {
    let path = paths::state_file_path()?;
    save_to_path(favorites, &path)
}

fn save_to_path(favorites: &[Term], path: &Path) -> Result<()> {
    if favorites.is_empty() {
        log::debug!("Favorites empty, skipping save");
        return Ok(());
    }

    let state = PersistedState {
        favorites: favorites.to_vec(),
    };
    let content =
        serde_json::to_string_pretty(&state).context("Failed to serialize persisted state")?;

    fs::write(path, content).with_context(|| format!("Failed to write state file {:?}", path))?;

    log::info!("Saved {} favorites to {:?}", favorites.len(), path);
    Ok(())
}
