use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use dirs::home_dir;
use dnalens_client::ClientConfig;
use serde::{Deserialize, Serialize};

pub const CONFIG_ENV: &str = "DNALENS_CONFIG";
pub const API_KEY_ENV: &str = "DNALENS_API_KEY";
pub const CREDENTIALS_FILE: &str = "credentials.db";
const DEFAULT_DATA_DIR: &str = ".dnalens";

/// Settings read from the TOML config file. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub client: ClientConfig,
    /// Where the credential database lives; `~/.dnalens` when unset
    pub data_dir: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Load from `path`, else from `$DNALENS_CONFIG`, else defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => Some(p.to_path_buf()),
            None => std::env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Configured directory, else `.dnalens` in the user's home directory
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        home_dir()
            .map(|home| home.join(DEFAULT_DATA_DIR))
            .context("Could not determine the home directory; set data_dir in the config file")
    }

    pub fn credentials_path(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(CREDENTIALS_FILE))
    }
}

/// A non-blank key from the environment, which takes precedence over the stored one
pub fn api_key_from_env() -> Option<String> {
    std::env::var(API_KEY_ENV)
        .ok()
        .filter(|k| !k.trim().is_empty())
}
