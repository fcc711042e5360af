//! Configuration management for opsworks-tf

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::client::opsworks::{DEFAULT_REQUESTS_PER_SECOND, default_endpoint};
use crate::error::{ConfigError, Result};

/// Region used when neither the config file nor the CLI names one
pub const DEFAULT_REGION: &str = "us-east-1";

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// OpsWorks endpoint URL (defaults to the regional AWS endpoint)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// AWS region
    #[serde(default = "default_region")]
    pub region: String,

    /// Maximum concurrent app listings (1 = sequential)
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,

    /// Client-side request rate limit
    #[serde(default = "default_requests_per_second")]
    pub requests_per_second: u32,
}

fn default_region() -> String {
    DEFAULT_REGION.to_string()
}

fn default_concurrency() -> usize {
    1
}

fn default_requests_per_second() -> u32 {
    DEFAULT_REQUESTS_PER_SECOND
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: None,
            region: default_region(),
            concurrency: default_concurrency(),
            requests_per_second: default_requests_per_second(),
        }
    }
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".opsworks-tf").join("config.yaml"))
    }

    /// Load configuration from an explicit path, or the default location.
    ///
    /// A missing default file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(p) => Self::load_from(PathBuf::from(p)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        config.validate()?;

        Ok(config)
    }

    /// Validate value ranges
    pub fn validate(&self) -> Result<()> {
        if self.region.trim().is_empty() {
            return Err(ConfigError::Invalid("region must not be empty".to_string()).into());
        }
        if self.concurrency == 0 {
            return Err(ConfigError::Invalid("concurrency must be at least 1".to_string()).into());
        }
        if self.requests_per_second == 0 {
            return Err(
                ConfigError::Invalid("requests_per_second must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    /// Endpoint to call: the configured one, or the regional AWS endpoint
    pub fn resolved_endpoint(&self) -> String {
        self.endpoint
            .clone()
            .unwrap_or_else(|| default_endpoint(&self.region))
    }
}
