//! Application configuration
//!
//! Configuration loaded from config.toml in the config directory.

use serde::{Deserialize, Serialize};

use crate::paths;

/// Application configuration loaded from config.toml
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    /// Remote endpoint serving the terminology list as a JSON array
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_endpoint() -> String {
    "https://www.techiediaries.com/api/data.json".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

impl AppConfig {
    /// Load config from the config directory, or use defaults
    pub fn load() -> Self {
        let path = match paths::app_config_path() {
            Ok(path) => path,
            Err(e) => {
                log::warn!("Could not resolve config path: {}", e);
                return Self::default();
            }
        };

        match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => {
                    log::info!("Loaded app config from {:?}", path);
                    config
                }
                Err(e) => {
                    log::warn!("Failed to parse config file: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!("No config file found, using default app config");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.endpoint, "https://www.techiediaries.com/api/data.json");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            endpoint = "https://terms.example.com/data.json"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.endpoint, "https://terms.example.com/data.json");
    }

    #[test]
    fn test_config_deserialize_empty_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.endpoint, AppConfig::default().endpoint);
    }
}
