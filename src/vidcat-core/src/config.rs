//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Seed file read once at startup
    pub seed_file: PathBuf,

    /// Snapshot file rewritten after every mutation
    pub snapshot_file: PathBuf,

    /// HTTP listen port
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_file: PathBuf::from("videos.json"),
            snapshot_file: PathBuf::from("newVideoFile.json"),
            port: 5000,
        }
    }
}

impl Config {
    /// Read configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config file {:?}", path))?;
        toml::from_str(&text).with_context(|| format!("parsing config file {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: Config = toml::from_str("port = 8080").unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.seed_file, PathBuf::from("videos.json"));
        assert_eq!(config.snapshot_file, PathBuf::from("newVideoFile.json"));
    }

    #[test]
    fn empty_toml_is_the_default_config() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.port, 5000);
    }
}
