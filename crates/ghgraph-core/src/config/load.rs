//! Config file discovery
//!
//! Lookup order:
//!
//! ```text
//! 1. explicit path (--config); must exist
//! 2. {cwd}/ghgraph.toml
//! 3. {config_dir}/ghgraph/ghgraph.toml
//! 4. built-in defaults
//! ```
//!
//! `GHGRAPH_*` overrides are applied last, whichever source won.

use super::consts::CONFIG_FILE_NAME;
use super::model::Config;
use crate::error::{GhgraphError, Result};
use std::path::{Path, PathBuf};

/// Per-user config file location, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("ghgraph").join(CONFIG_FILE_NAME))
}

/// Picks the config file to load, if any
///
/// # Errors
///
/// Returns `ConfigNotFound` when an explicit path is given but missing.
pub fn resolve_config_path(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.is_file() {
            return Err(GhgraphError::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        return Ok(Some(path.to_path_buf()));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    if local.is_file() {
        return Ok(Some(local));
    }

    Ok(default_config_path().filter(|p| p.is_file()))
}

impl Config {
    /// Loads configuration following the lookup order above
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let mut config = match resolve_config_path(explicit, cwd)? {
            Some(path) => Config::from_file(&path)?,
            None => Config::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }
}
