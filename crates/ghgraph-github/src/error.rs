//! Errors raised by the resource client
//!
//! A non-200 answer is not an error; see [`crate::Lookup`].

use crate::path::PathError;
use thiserror::Error;
use url::Url;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum GithubError {
    /// DNS, connection, timeout or body read failure
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: Url,
        #[source]
        source: BoxError,
    },

    /// 200 response whose body is not the expected JSON shape
    #[error("Malformed response from {url}: {source}")]
    MalformedSnapshot {
        url: Url,
        #[source]
        source: serde_json::Error,
    },

    /// Base URL rejected at client construction
    #[error("Invalid base URL '{base}': {source}")]
    InvalidBase {
        base: String,
        #[source]
        source: PathError,
    },

    /// Download URL reported by the remote could not be parsed
    #[error("Invalid download URL '{url}': {source}")]
    InvalidDownloadUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// HTTP client construction failed
    #[error("HTTP client error: {0}")]
    ClientBuild(#[from] reqwest::Error),
}

impl GithubError {
    pub fn transport(url: &Url, source: impl Into<BoxError>) -> Self {
        GithubError::Transport {
            url: url.clone(),
            source: source.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GithubError>;
