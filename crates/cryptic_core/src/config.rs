//! Configuration for the contest search endpoint.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{CrypticError, CrypticResult};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "cryptic.toml";

/// Environment variable overriding [`SearchConfig::base_url`].
pub const BASE_URL_ENV: &str = "CRYPTIC_BASE_URL";

/// Environment variable overriding [`SearchConfig::timeout_secs`].
pub const TIMEOUT_ENV: &str = "CRYPTIC_TIMEOUT_SECS";

/// Search endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Site root, e.g. `https://cryptics.example.org`
    pub base_url: String,
    /// Path of the search endpoint below the site root
    pub path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".to_string(),
            path: "/contest/search".to_string(),
            timeout_secs: 10,
        }
    }
}

impl SearchConfig {
    /// Full endpoint URL.
    pub fn endpoint(&self) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            self.path.trim_start_matches('/')
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrypticConfig {
    pub search: SearchConfig,
}

impl CrypticConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str, path: &Path) -> CrypticResult<Self> {
        toml::from_str(content).map_err(|e| CrypticError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Read a config file.
    pub fn from_file(path: &Path) -> CrypticResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit `path` must exist. Without one, `cryptic.toml` in `dir` is
    /// used if present, otherwise defaults. Environment overrides apply last.
    pub fn load(path: Option<&Path>, dir: &Path) -> CrypticResult<Self> {
        Self::load_with(path, dir, |key| std::env::var(key).ok())
    }

    /// Like [`CrypticConfig::load`], reading overrides from `lookup`.
    pub fn load_with<F>(path: Option<&Path>, dir: &Path, lookup: F) -> CrypticResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => {
                let candidate: PathBuf = dir.join(DEFAULT_CONFIG_FILE);
                if candidate.exists() {
                    Self::from_file(&candidate)?
                } else {
                    debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Self::default()
                }
            }
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    /// Apply environment-style overrides from `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> CrypticResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.search.base_url = base_url;
        }
        if let Some(timeout) = lookup(TIMEOUT_ENV).filter(|v| !v.is_empty()) {
            self.search.timeout_secs = timeout.parse().map_err(|_| CrypticError::Config {
                path: PathBuf::from(TIMEOUT_ENV),
                message: format!("expected a number of seconds, got {:?}", timeout),
            })?;
        }
        Ok(())
    }
}
