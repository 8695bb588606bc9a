use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Persisted CLI preferences, stored as TOML in the platform config dir.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Tags the decoder should always treat as composite
    #[serde(default)]
    pub composite_tags: Vec<String>,

    /// Journey used when a command does not name one
    #[serde(default)]
    pub default_journey: Option<String>,
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))?;
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

    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("could not determine the platform config directory"))?;
        Ok(base.join("qrsmith").join("config.toml"))
    }
}

/// Expand tilde (~) in paths to the user's home directory
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("absent.toml")).unwrap();
        assert!(config.composite_tags.is_empty());
        assert!(config.default_journey.is_none());
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config.toml");

        let config = Config {
            composite_tags: vec!["26".to_string(), "62".to_string()],
            default_journey: Some("01".to_string()),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.composite_tags, config.composite_tags);
        assert_eq!(loaded.default_journey.as_deref(), Some("01"));
    }

    #[test]
    fn test_expand_tilde() {
        assert_eq!(expand_tilde("/tmp/qrsmith.toml"), PathBuf::from("/tmp/qrsmith.toml"));
        assert_eq!(expand_tilde("relative.toml"), PathBuf::from("relative.toml"));
        if let Some(home) = std::env::var_os("HOME") {
            assert_eq!(
                expand_tilde("~/qrsmith.toml"),
                PathBuf::from(home).join("qrsmith.toml")
            );
        }
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "composite_tags = 26").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
