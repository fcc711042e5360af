//! Command execution context
//!
//! Loads configuration, applies CLI overrides and builds the API client so
//! command handlers don't repeat that setup.

use log::debug;

use crate::cli::GlobalOptions;
use crate::client::OpsWorksClient;
use crate::config::Config;
use crate::error::Result;

/// Context for command execution containing config and client.
pub struct CommandContext {
    /// Loaded configuration with CLI overrides applied
    pub config: Config,
    /// OpsWorks API client
    pub client: OpsWorksClient,
}

impl CommandContext {
    /// Create a new command context.
    ///
    /// # Errors
    /// Returns error if the config cannot be loaded, is invalid after
    /// overrides, or the HTTP client cannot be built.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let mut config = Config::load_at(opts.config_ref())?;
        opts.apply(&mut config);
        config.validate()?;

        let client = OpsWorksClient::new(config.resolved_endpoint(), config.requests_per_second)?;
        debug!(
            "Using endpoint {} ({} req/s, concurrency {})",
            client.endpoint(),
            config.requests_per_second,
            config.concurrency
        );

        Ok(Self { config, client })
    }
}
