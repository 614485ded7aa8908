// src/config/loader.rs
//! Flat `KEY=VALUE` environment file loading

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Default environment file, relative to the working directory
pub const DEFAULT_ENV_FILE: &str = ".env";

pub type ConfigMap = HashMap<String, String>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read environment file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Missing required configuration: {}", missing.join(", "))]
    Validation { missing: Vec<String> },
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `.env` from the working directory
    pub fn load_default() -> Result<ConfigMap, ConfigError> {
        Self::load_env(DEFAULT_ENV_FILE)
    }

    pub fn load_env(path: impl AsRef<Path>) -> Result<ConfigMap, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config = Self::parse(&content);
        debug!("Loaded {} keys from {}", config.len(), path.display());
        Ok(config)
    }

    /// Blank lines and `#` comments are skipped. The first `=` splits key from
    /// value; later ones stay in the value. A line without `=` maps to "".
    /// A leading byte-order mark is ignored.
    pub fn parse(content: &str) -> ConfigMap {
        content
            .strip_prefix('\u{FEFF}')
            .unwrap_or(content)
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|line| {
                let (key, value) = line.split_once('=').unwrap_or((line, ""));
                (key.trim().to_string(), value.trim().to_string())
            })
            .collect()
    }

    /// Every key must be present with a non-empty value. All missing keys are
    /// reported, in the order they were requested.
    pub fn validate<S: AsRef<str>>(config: &ConfigMap, required_keys: &[S]) -> Result<(), ConfigError> {
        let missing: Vec<String> = required_keys
            .iter()
            .map(|key| key.as_ref())
            .filter(|key| config.get(*key).map_or(true, |v| v.is_empty()))
            .map(str::to_string)
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation { missing })
        }
    }
}
