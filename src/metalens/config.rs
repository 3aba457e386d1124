use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for metalens, stored as `config.json` in the user config
/// directory. Everything is optional; a missing file means defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct MetalensConfig {
    /// Catalog file to use instead of the embedded one.
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,
}

impl MetalensConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: MetalensConfig = serde_json::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_config_yields_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = MetalensConfig::load(dir.path()).unwrap();
        assert_eq!(config, MetalensConfig::default());
    }

    #[test]
    fn test_load_config_with_catalog_path() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"{"catalog_path": "/tmp/names.json"}"#,
        )
        .unwrap();

        let config = MetalensConfig::load(dir.path()).unwrap();
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/names.json")));
    }

    #[test]
    fn test_load_rejects_malformed_config() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{").unwrap();

        assert!(MetalensConfig::load(dir.path()).is_err());
    }
}
