use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the config file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. SCHEMAVIEW_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory
/// 4. ~/.schemaview/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&str>) -> Result<PathBuf> {
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(path));
    }

    if let Ok(env_path) = std::env::var("SCHEMAVIEW_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("schemaview").join("config.toml"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".schemaview").join("config.toml"));
    }

    Err(Error::Config(
        "Could not determine config path: no HOME directory or XDG config directory found"
            .to_string(),
    ))
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Show explanation regions even when a renderer does not force them
    pub show_explanations: bool,
    pub thousands_separator: String,
    /// Listing prices are rounded to the nearest multiple of this (0 disables)
    pub price_rounding: u64,
    pub untitled_statute: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            show_explanations: false,
            thousands_separator: ",".to_string(),
            price_rounding: 100_000,
            untitled_statute: "Untitled Statute".to_string(),
        }
    }
}

impl RenderConfig {
    pub fn load(explicit_path: Option<&str>) -> Result<Self> {
        let config_path = resolve_config_path(explicit_path)?;
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = RenderConfig::default();
        assert!(!config.show_explanations);
        assert_eq!(config.thousands_separator, ",");
        assert_eq!(config.price_rounding, 100_000);
        assert_eq!(config.untitled_statute, "Untitled Statute");
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = RenderConfig {
            show_explanations: true,
            thousands_separator: ".".to_string(),
            ..RenderConfig::default()
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = RenderConfig::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_fills_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "price_rounding = 1000\n")?;

        let loaded = RenderConfig::load_from(&config_path)?;
        assert_eq!(loaded.price_rounding, 1000);
        assert_eq!(loaded.thousands_separator, ",");

        Ok(())
    }

    #[test]
    fn test_invalid_config_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "price_rounding = \"lots\"\n")?;

        let err = RenderConfig::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = RenderConfig::load_from(&config_path)?;
        assert_eq!(config, RenderConfig::default());

        Ok(())
    }

    #[test]
    fn test_explicit_path_wins() -> Result<()> {
        let path = resolve_config_path(Some("/tmp/schemaview-test.toml"))?;
        assert_eq!(path, PathBuf::from("/tmp/schemaview-test.toml"));
        Ok(())
    }
}
