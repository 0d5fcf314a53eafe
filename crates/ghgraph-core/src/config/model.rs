use super::consts::{DEFAULT_TIMEOUT_SECS, endpoints, env};
use crate::error::{GhgraphError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// ghgraph.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub github: GithubConfig,
}

/// `[github]` table: where requests go and how they authenticate
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GithubConfig {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    #[serde(default = "default_raw_base")]
    pub raw_base: String,
    /// Name of the environment variable holding the bearer token
    #[serde(default = "default_token_env")]
    pub token_env: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            raw_base: default_raw_base(),
            token_env: default_token_env(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    endpoints::API_BASE.to_string()
}

fn default_raw_base() -> String {
    endpoints::RAW_BASE.to_string()
}

fn default_token_env() -> String {
    env::DEFAULT_TOKEN.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Reads and parses a config file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content, path)
    }

    fn from_toml(content: &str, origin: &Path) -> Result<Self> {
        let config: Config =
            toml::from_str(content).map_err(|e| GhgraphError::ConfigParseError {
                path: origin.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Applies `GHGRAPH_*` environment overrides on top of the loaded values
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Some(api_base) = non_empty_var(env::API_BASE_URL) {
            self.github.api_base = api_base;
        }
        if let Some(raw_base) = non_empty_var(env::RAW_BASE_URL) {
            self.github.raw_base = raw_base;
        }
        if let Some(timeout) = non_empty_var(env::TIMEOUT_SECS) {
            self.github.timeout_secs =
                timeout
                    .parse()
                    .map_err(|e: std::num::ParseIntError| GhgraphError::ConfigInvalidValue {
                        field: env::TIMEOUT_SECS.to_string(),
                        reason: e.to_string(),
                    })?;
        }
        self.validate()
    }

    fn validate(&self) -> Result<()> {
        if self.github.timeout_secs == 0 {
            return Err(GhgraphError::ConfigInvalidValue {
                field: "github.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.github.token_env.trim().is_empty() {
            return Err(GhgraphError::ConfigInvalidValue {
                field: "github.token_env".to_string(),
                reason: "must name an environment variable".to_string(),
            });
        }
        Ok(())
    }
}

impl GithubConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reads the bearer token from the configured environment variable.
    ///
    /// An unset or empty variable means requests go out unauthenticated.
    pub fn token(&self) -> Option<String> {
        non_empty_var(&self.token_env)
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
