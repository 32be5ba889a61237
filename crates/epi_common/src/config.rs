//! Episcope configuration
//!
//! User configuration for the backend endpoint, selected model and
//! default location. Config file: ~/.config/episcope/config.toml

use crate::backend::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_SECS};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    "llama3.2:3b".to_string()
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_city() -> String {
    "Delhi".to_string()
}

fn default_country() -> String {
    "India".to_string()
}

/// Persisted user configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpiConfig {
    /// Backend base URL
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Selected inference model identifier
    #[serde(default = "default_model")]
    pub model: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Default city for live fetches
    #[serde(default = "default_city")]
    pub default_city: String,

    /// Default country for live fetches
    #[serde(default = "default_country")]
    pub default_country: String,
}

impl Default for EpiConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            timeout_secs: default_timeout(),
            default_city: default_city(),
            default_country: default_country(),
        }
    }
}

impl EpiConfig {
    /// Default config file location (~/.config/episcope/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("episcope").join("config.toml"))
    }

    /// Load from the default location; missing or unreadable config
    /// falls back to defaults
    pub fn load() -> Self {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::warn!("failed to load config from {}: {e}", path.display());
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    /// Load from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        toml::from_str(&raw).with_context(|| format!("parsing config file {}", path.display()))
    }

    /// Save to an explicit path, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating config directory {}", parent.display()))?;
        }
        let raw = toml::to_string_pretty(self).context("serializing config")?;
        fs::write(path, raw).with_context(|| format!("writing config file {}", path.display()))
    }

    /// Save to the default location
    pub fn save(&self) -> Result<()> {
        let path = Self::default_path().context("no config directory on this system")?;
        self.save_to(&path)
    }

    /// Apply a `key=value` update (for `epictl config --set`)
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "endpoint" => self.endpoint = value.to_string(),
            "model" => self.model = value.to_string(),
            "timeout_secs" => {
                self.timeout_secs = value
                    .parse()
                    .with_context(|| format!("invalid timeout_secs value '{value}'"))?;
            }
            "default_city" => self.default_city = value.to_string(),
            "default_country" => self.default_country = value.to_string(),
            other => bail!("unknown config key '{other}'"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EpiConfig::default();
        assert_eq!(config.endpoint, "http://127.0.0.1:11434");
        assert_eq!(config.default_city, "Delhi");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn test_round_trip_through_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = EpiConfig::default();
        config.model = "llama3.2:1b".to_string();
        config.timeout_secs = 90;
        config.save_to(&path).unwrap();

        let loaded = EpiConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_gets_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = \"qwen3:4b\"\n").unwrap();

        let loaded = EpiConfig::load_from(&path).unwrap();
        assert_eq!(loaded.model, "qwen3:4b");
        assert_eq!(loaded.endpoint, "http://127.0.0.1:11434");
    }

    #[test]
    fn test_set_key_value() {
        let mut config = EpiConfig::default();
        config.set("model", "llama3.2:1b").unwrap();
        config.set("timeout_secs", "45").unwrap();
        assert_eq!(config.model, "llama3.2:1b");
        assert_eq!(config.timeout_secs, 45);

        assert!(config.set("timeout_secs", "soon").is_err());
        assert!(config.set("nope", "x").is_err());
    }
}
