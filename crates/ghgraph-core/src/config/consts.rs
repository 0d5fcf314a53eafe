//! Defaults and environment variable names shared across the workspace

/// Remote endpoints
pub mod endpoints {
    /// Base URL of the REST API
    pub const API_BASE: &str = "https://api.github.com/";

    /// Base URL of raw repository content
    pub const RAW_BASE: &str = "https://raw.githubusercontent.com/";
}

/// Environment variables consulted while loading configuration
pub mod env {
    /// Overrides `github.api_base`
    pub const API_BASE_URL: &str = "GHGRAPH_API_BASE_URL";

    /// Overrides `github.raw_base`
    pub const RAW_BASE_URL: &str = "GHGRAPH_RAW_BASE_URL";

    /// Overrides `github.timeout_secs`
    pub const TIMEOUT_SECS: &str = "GHGRAPH_TIMEOUT_SECS";

    /// Default variable holding the bearer token
    pub const DEFAULT_TOKEN: &str = "GITHUB_TOKEN";
}

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "ghgraph.toml";
