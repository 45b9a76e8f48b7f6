//! CLI configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use storefront_commerce::catalog::DEFAULT_ASSET_BASE_URL;

/// Environment variable overriding `api.base_url`.
pub const API_URL_ENV: &str = "STOREFRONT_API_URL";

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["storefront.toml", ".storefront.toml", "storefront.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub session: SessionConfig,

    #[serde(default)]
    pub slider: SliderConfig,
}

impl StorefrontConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }

    /// Apply environment overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url;
            }
        }
        self
    }
}

/// Catalog API settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Image host settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssetsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_ASSET_BASE_URL.to_string()
}

/// Where the session cart lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Storage directory. Defaults to the user data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,

    /// Fixed session id. A generated id is persisted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

/// Banner carousel settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SliderConfig {
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl SliderConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    3000
}

/// Generate a default storefront.toml config file.
pub fn generate_default_config() -> String {
    format!(
        r#"# Storefront client configuration

[api]
base_url = "{base}"

[assets]
base_url = "{base}"

[session]
# dir = "/path/to/session"
# id = "sess_fixed"

[slider]
interval_ms = 3000
"#,
        base = DEFAULT_ASSET_BASE_URL
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.slider.interval(), Duration::from_secs(3));
        assert!(config.session.id.is_none());
    }

    #[test]
    fn test_generated_config_parses() {
        let config: StorefrontConfig = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config, StorefrontConfig::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig =
            toml::from_str("[api]\nbase_url = \"http://shop:9000\"\n").unwrap();
        assert_eq!(config.api.base_url, "http://shop:9000");
        assert_eq!(config.assets.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_save_and_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.json");

        let mut config = StorefrontConfig::default();
        config.session.id = Some("sess_test".to_string());
        config.save(&path).unwrap();

        assert_eq!(StorefrontConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_load_reports_bad_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storefront.toml");
        std::fs::write(&path, "[api\n").unwrap();

        let err = StorefrontConfig::load(&path).unwrap_err();
        assert!(format!("{err:#}").contains("Failed to parse TOML config"));
    }
}
