//! Transport seam between the resource client and the network
//!
//! The client only needs one blocking `GET` that reports a status code and
//! the body. [`HttpTransport`] provides it on top of `reqwest::blocking`;
//! tests and embedders can supply their own [`Transport`].

use crate::error::{GithubError, Result};
use reqwest::blocking::Client;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Default timeout for GitHub requests (30 seconds)
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// User agent sent with every request; GitHub rejects requests without one
pub const USER_AGENT: &str = "ghgraph";

/// Status and body of a completed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl TransportResponse {
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

/// One blocking GET
///
/// Implementations must be reentrant: a single client may be shared by
/// several threads.
pub trait Transport {
    /// Performs `GET url`, attaching `Authorization: Bearer {token}` when a
    /// token is given
    ///
    /// # Errors
    ///
    /// Returns [`GithubError::Transport`] when no response was obtained.
    /// Any response, whatever its status, is `Ok`.
    fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse> {
        (**self).get(url, bearer)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse> {
        (**self).get(url, bearer)
    }
}

/// Builds HTTP client with appropriate settings for GitHub
///
/// # Errors
///
/// Returns error if client construction fails
pub fn build_client(timeout: Duration) -> std::result::Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()
}

/// [`Transport`] backed by a blocking reqwest client
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    /// Creates a transport whose requests time out after `timeout`
    pub fn new(timeout: Duration) -> Result<Self> {
        Ok(Self::with_client(build_client(timeout)?))
    }

    /// Wraps an existing client as is
    ///
    /// The client's own user agent and timeout apply; none are added here.
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url, bearer: Option<&str>) -> Result<TransportResponse> {
        let mut request = self.client.get(url.as_str());
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .map_err(|e| GithubError::transport(url, e))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| GithubError::transport(url, e))?
            .to_vec();

        Ok(TransportResponse { status, body })
    }
}
