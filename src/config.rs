//! Client-side settings.
//!
//! Reads `~/.pizzashop/config.toml`. The API URL can be overridden by the
//! `PIZZASHOP_API_URL` environment variable and by `--api-url`.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const API_URL_ENV: &str = "PIZZASHOP_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:3333";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Base URL of the pizza.shop REST API.
    #[serde(rename = "api-url", default = "default_api_url")]
    pub api_url: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self { api_url: default_api_url() }
    }
}

impl PanelConfig {
    /// Default config file path: ~/.pizzashop/config.toml.
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".pizzashop")
            .join("config.toml")
    }

    /// Load config from disk, or return default if file doesn't exist.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: PanelConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Flag, then environment, then file, then the built-in default.
    pub fn resolve(path: Option<&Path>, api_url_flag: Option<String>) -> anyhow::Result<Self> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);
        let file = Self::load(&path)?;
        let config = file.with_overrides(std::env::var(API_URL_ENV).ok(), api_url_flag);
        info!(api_url = %config.api_url, "Configuration resolved");
        Ok(config)
    }

    fn with_overrides(mut self, env: Option<String>, flag: Option<String>) -> Self {
        if let Some(url) = flag.or(env).filter(|u| !u.trim().is_empty()) {
            self.api_url = url;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        assert_eq!(PanelConfig::default().api_url, "http://localhost:3333");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("pizzashop-panel-missing").join("config.toml");
        assert_eq!(PanelConfig::load(&path).unwrap(), PanelConfig::default());
    }

    #[test]
    fn test_parse_file() {
        let config: PanelConfig = toml::from_str("api-url = \"https://api.pizza.shop\"").unwrap();
        assert_eq!(config.api_url, "https://api.pizza.shop");
        let empty: PanelConfig = toml::from_str("").unwrap();
        assert_eq!(empty, PanelConfig::default());
    }

    #[test]
    fn test_override_precedence() {
        let file = PanelConfig { api_url: "http://file".into() };
        assert_eq!(file.clone().with_overrides(None, None).api_url, "http://file");
        assert_eq!(file.clone().with_overrides(Some("http://env".into()), None).api_url, "http://env");
        assert_eq!(
            file.with_overrides(Some("http://env".into()), Some("http://flag".into())).api_url,
            "http://flag"
        );
    }
}
