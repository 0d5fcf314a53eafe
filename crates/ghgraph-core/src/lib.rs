// Core modules
pub mod config;
pub mod error;

// Re-export commonly used types
pub use config::{Config, GithubConfig};
pub use error::{GhgraphError, Result};
