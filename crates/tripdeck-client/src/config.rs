use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::{Error, Result};

/// Fallback endpoint for local development against the service.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Resolve the service base URL based on priority:
/// 1. Explicit value (usually the --api-url flag)
/// 2. TRIPDECK_API_URL environment variable
/// 3. `api_url` in the config file
/// 4. Built-in localhost default
pub fn resolve_api_url(explicit: Option<&str>) -> String {
    if let Some(url) = explicit {
        return normalize_base_url(url);
    }

    if let Ok(env_url) = std::env::var("TRIPDECK_API_URL")
        && !env_url.trim().is_empty()
    {
        return normalize_base_url(&env_url);
    }

    if let Ok(config) = Config::load()
        && let Some(url) = config.api_url
    {
        return normalize_base_url(&url);
    }

    DEFAULT_API_URL.to_string()
}

/// Strip trailing slashes so endpoint paths can always be appended as
/// "/trips/...".
pub fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| Error::Config("could not determine config directory".to_string()))?;
        Ok(config_dir.join("tripdeck").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_explicit_url_wins() {
        let url = resolve_api_url(Some("https://trips.example.com/api/"));
        assert_eq!(url, "https://trips.example.com/api");
    }

    #[test]
    fn test_normalize_strips_trailing_slashes() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/api//"),
            "http://localhost:8000/api"
        );
        assert_eq!(normalize_base_url("  http://host "), "http://host");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_url: Some("https://trips.example.com/api".to_string()),
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(
            loaded.api_url.as_deref(),
            Some("https://trips.example.com/api")
        );

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert!(config.api_url.is_none());

        Ok(())
    }
}
