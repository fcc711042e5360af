//! Global CLI options shared across all commands
//!
//! Consolidates the global flags so handlers take one argument instead of
//! threading each override through.

use crate::cli::Cli;
use crate::config::Config;

/// Global CLI options passed to all command handlers.
///
/// # Precedence
///
/// CLI flag > environment variable > config file > default. This struct
/// captures the CLI/env layer; [`GlobalOptions::apply`] layers it on top of
/// a loaded [`Config`].
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Custom config file path (defaults to ~/.opsworks-tf/config.yaml)
    pub config: Option<String>,

    /// OpsWorks endpoint override
    pub endpoint: Option<String>,

    /// AWS region override
    pub region: Option<String>,

    /// Concurrent app listings override
    pub concurrency: Option<usize>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config: cli.config.clone(),
            endpoint: cli.endpoint.clone(),
            region: cli.region.clone(),
            concurrency: cli.concurrency.map(usize::from),
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }

    /// Override config values with the ones given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(endpoint) = &self.endpoint {
            config.endpoint = Some(endpoint.clone());
        }
        if let Some(region) = &self.region {
            config.region = region.clone();
        }
        if let Some(concurrency) = self.concurrency {
            config.concurrency = concurrency;
        }
    }
}
