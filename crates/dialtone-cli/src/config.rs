//! Configuration management for Dialtone CLI
//!
//! Stores API key and default settings in ~/.config/dialtone/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "dialtone";
const CONFIG_FILE: &str = "config.toml";

/// CLI Configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Agent (CRM user) used when --agent is not given
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_agent: Option<String>,
    /// Provider used when --medium is not given
    #[serde(default = "default_medium")]
    pub default_medium: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_medium() -> String {
    "plivo".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            default_agent: None,
            default_medium: default_medium(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        let config: Config =
            toml::from_str(&content).with_context(|| "Failed to parse config file")?;

        Ok(config)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Set API key
    pub fn set_api_key(&mut self, key: String) {
        self.api_key = Some(key);
    }

    /// Resolve the agent for a command: the flag wins, then the default
    pub fn resolve_agent(&self, flag: Option<&str>) -> Option<String> {
        flag.map(String::from)
            .or_else(|| self.default_agent.clone())
    }

    /// Resolve the medium for a command: the flag wins, then the default
    pub fn resolve_medium(&self, flag: Option<&str>) -> String {
        flag.map(String::from)
            .unwrap_or_else(|| self.default_medium.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_roundtrip() {
        let config = Config::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.base_url, "http://localhost:8000");
        assert_eq!(parsed.default_medium, "plivo");
        assert!(parsed.api_key.is_none());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let parsed: Config = toml::from_str("api_key = \"k\"").unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some("k"));
        assert_eq!(parsed.default_medium, "plivo");
    }

    #[test]
    fn test_flag_overrides_default_agent() {
        let mut config = Config::default();
        config.default_agent = Some("me@crm.example.com".to_string());
        assert_eq!(
            config.resolve_agent(Some("other@crm.example.com")).as_deref(),
            Some("other@crm.example.com")
        );
        assert_eq!(
            config.resolve_agent(None).as_deref(),
            Some("me@crm.example.com")
        );
    }
}
