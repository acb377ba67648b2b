use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

use crate::utils::paths::get_config_path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Smart Brain backend.
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Seconds between daily-plan refreshes in watch mode.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Tags applied to captured items when none are given on the command line.
    #[serde(default)]
    pub default_tags: Vec<String>,
}

fn default_api_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_poll_interval_secs() -> u64 {
    3
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
            poll_interval_secs: default_poll_interval_secs(),
            default_tags: Vec::new(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = get_config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: Config = toml::from_str(&content)?;

        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = get_config_path()?;

        // Ensure config directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(&config_path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_base_url, "http://localhost:5000");
        assert_eq!(config.poll_interval_secs, 3);
        assert!(config.default_tags.is_empty());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let toml_str = toml::to_string(&config).unwrap();
        assert!(toml_str.contains("api_base_url"));
        assert!(toml_str.contains("poll_interval_secs"));
    }

    #[test]
    fn test_config_deserialization() {
        let toml_str = r#"
        api_base_url = "https://brain.example.com"
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.api_base_url, "https://brain.example.com");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let toml_str = r#"
        poll_interval_secs = 10
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.api_base_url, "http://localhost:5000");
    }

    #[test]
    fn test_default_tags_roundtrip() {
        let mut config = Config::default();
        config.default_tags = vec!["Work".to_string(), "Watch Later".to_string()];

        let toml_str = toml::to_string(&config).unwrap();
        let parsed: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(parsed.default_tags, config.default_tags);
    }
}
