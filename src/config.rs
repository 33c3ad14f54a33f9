//! Configuration management for realtime-query.
//!
//! Handles loading configuration from TOML files. Credentials are never
//! read from or written to the config file; the API key comes from the
//! command line or the environment.

use crate::error::{QueryError, Result};
use crate::product::{ProductType, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// API endpoint settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Defaults used when the command line leaves a value out.
    #[serde(default)]
    pub defaults: DefaultsConfig,
}

/// API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL; product endpoint paths are appended to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Query defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Product queried when `--product` is not given.
    #[serde(default)]
    pub product: ProductType,

    /// Fields selected when `--fields` is not given. Empty means the
    /// product's first catalog field.
    #[serde(default)]
    pub fields: Vec<String>,

    /// Length of the default date window, ending today.
    #[serde(default = "default_days")]
    pub days: u32,

    /// How far back `--from` may reach.
    #[serde(default = "default_max_lookback_days")]
    pub max_lookback_days: u32,

    /// Where results are written when `--output` is not given.
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

fn default_days() -> u32 {
    7
}

fn default_max_lookback_days() -> u32 {
    60
}

fn default_output() -> PathBuf {
    PathBuf::from("result.json")
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            product: ProductType::default(),
            fields: Vec::new(),
            days: default_days(),
            max_lookback_days: default_max_lookback_days(),
            output: default_output(),
        }
    }
}

impl Config {
    /// Returns the default config file path for the current platform.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("realtime-query")
            .join("config.toml")
    }

    /// Loads configuration from a TOML file. A missing file yields defaults.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| QueryError::config(format!("Failed to read config file: {e}")))?;

        let config = Self::parse_toml(&content, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a TOML string.
    fn parse_toml(content: &str, path: &Path) -> Result<Self> {
        toml::from_str(content).map_err(|e| {
            QueryError::config(format!(
                "Configuration error in {}:\n  {}",
                path.display(),
                e
            ))
        })
    }

    /// Checks values that deserialize fine but are unusable.
    pub fn validate(&self) -> Result<()> {
        validate_base_url(&self.api.base_url)?;

        if self.defaults.days > self.defaults.max_lookback_days {
            return Err(QueryError::config(format!(
                "defaults.days ({}) exceeds defaults.max_lookback_days ({})",
                self.defaults.days, self.defaults.max_lookback_days
            )));
        }

        Ok(())
    }
}

/// Checks that `base_url` is an absolute http(s) URL.
pub fn validate_base_url(base_url: &str) -> Result<()> {
    let url = Url::parse(base_url)
        .map_err(|e| QueryError::config(format!("Invalid base URL '{base_url}': {e}")))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(QueryError::config(format!(
            "Invalid scheme '{}'. Expected 'http' or 'https'",
            url.scheme()
        )));
    }

    Ok(())
}
