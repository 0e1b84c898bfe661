use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Configuration: where the dataset lives
// ---------------------------------------------------------------------------

/// Environment variable overriding the dataset path.
pub const DATA_PATH_ENV: &str = "SDG_DATA_PATH";

/// Optional JSON config file looked up in the working directory.
pub const CONFIG_FILE: &str = "sdg-explorer.json";

/// Dataset path used when neither the env var nor the config file is set.
pub const DEFAULT_DATA_PATH: &str = "data/sdg_index_2000-2022.csv";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub data_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

impl Config {
    /// Resolve the configuration: env var, then `sdg-explorer.json`, then the
    /// built-in default. A malformed config file is an error rather than a
    /// silent fallback.
    pub fn load() -> Result<Self> {
        if let Ok(path) = std::env::var(DATA_PATH_ENV) {
            return Ok(Config {
                data_path: PathBuf::from(path),
            });
        }
        Self::from_file(Path::new(CONFIG_FILE))
    }

    fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_path() {
        let config = Config::default();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn missing_config_file_falls_back_to_default() {
        let config = Config::from_file(Path::new("does-not-exist.json")).unwrap();
        assert_eq!(config.data_path, PathBuf::from(DEFAULT_DATA_PATH));
    }

    #[test]
    fn parses_data_path_from_json() {
        let config: Config = serde_json::from_str(r#"{"data_path": "elsewhere.csv"}"#).unwrap();
        assert_eq!(config.data_path, PathBuf::from("elsewhere.csv"));
    }
}
