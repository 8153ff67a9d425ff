//! Configuration and favorites persistence for the jargon browser
//!
//! This crate provides:
//! - File path utilities for config and state files
//! - Application configuration (AppConfig)
//! - Favorites persistence (load/save of the JSON state file)

pub mod app_config;
pub mod paths;
pub mod state_file;

pub use app_config::AppConfig;
pub use state_file::{load_persisted_favorites, save_persisted_favorites, PersistedState};
