//! Global context for CLI commands

use anyhow::{Context as _, Result};
use ghgraph_core::Config;
use ghgraph_github::ResourceClient;
use std::env;
use std::path::Path;

/// Loaded configuration plus the client built from it
pub struct Context {
    pub client: ResourceClient,
    pub json: bool,
}

impl Context {
    /// Loads config (explicit path, ./ghgraph.toml, user config dir) and
    /// builds the client
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An explicit config path does not exist
    /// - The config file or an env override is invalid
    /// - A configured base URL is not a valid URL
    pub fn new(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = Config::load(config_path, &current_dir)?;
        log::debug!(
            "Using API base {} and raw base {}",
            config.github.api_base,
            config.github.raw_base
        );

        let client = ResourceClient::from_config(&config.github)
            .context("Failed to build GitHub client")?;
        if !client.is_authenticated() {
            log::info!(
                "{} is not set; sending unauthenticated requests",
                config.github.token_env
            );
        }

        Ok(Self { client, json })
    }
}
