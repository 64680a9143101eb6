//! Application configuration management.
//!
//! Configuration is stored at `~/.config/staffdir/config.json`. Every field
//! has a default, so a missing file simply means defaults.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
const APP_NAME: &str = "staffdir";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Base URL of the people API
const API_BASE_URL: &str = "https://randomuser.me/api/";

/// Fields requested from the API
const INCLUDED_FIELDS: &str = "picture,name,email,location,dob,cell";

/// Environment variable that overrides the endpoint URL
pub const ENDPOINT_ENV_VAR: &str = "STAFFDIR_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of people to request
    pub results: u32,
    /// Nationality filter passed to the API
    pub nationality: String,
    /// Full URL override; takes precedence over `results` and `nationality`
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            results: 12,
            nationality: "us".to_string(),
            endpoint: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            Self::from_json(&contents)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse config")
    }

    /// Apply the `STAFFDIR_ENDPOINT` override, if set and non-empty
    pub fn with_env_overrides(self) -> Self {
        self.with_endpoint_override(std::env::var(ENDPOINT_ENV_VAR).ok())
    }

    /// Replace the endpoint with `value` unless it is missing or blank
    pub fn with_endpoint_override(mut self, value: Option<String>) -> Self {
        if let Some(endpoint) = value {
            if !endpoint.trim().is_empty() {
                self.endpoint = Some(endpoint);
            }
        }
        self
    }

    /// The URL a directory load requests
    pub fn endpoint_url(&self) -> String {
        match self.endpoint {
            Some(ref url) => url.clone(),
            None => format!(
                "{}?results={}&inc={}&nat={}",
                API_BASE_URL, self.results, INCLUDED_FIELDS, self.nationality
            ),
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory the log file is written to
    pub fn log_dir(&self) -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
