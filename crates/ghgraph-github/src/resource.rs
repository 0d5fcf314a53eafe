//! The resource client: one query per resource kind
//!
//! ```text
//! user(login)                       GET users/{login}
//! repository(owner, name)           GET repos/{owner}/{name}
//! repositories_of(owner)            GET users/{owner}/repos
//! branch(owner, repo, name)         GET repos/{owner}/{repo}/branches/{name}
//! branches_of(owner, repo)          GET repos/{owner}/{repo}/branches
//! file(owner, repo, ref?, path?)    GET repos/{owner}/{repo}/contents/{path}[?ref=]
//! files_of(owner, repo, ref?, dir?) GET repos/{owner}/{repo}/contents/{dir}[?ref=]
//! raw_file(owner, repo, ref, path)  (no request) {raw}/{owner}/{repo}/{ref}/{path}
//! ```

use crate::entity::{Branch, BranchSnapshot, File, FileSnapshot, RawFile, Repository, User};
use crate::error::{GithubError, Result};
use crate::lookup::Lookup;
use crate::path::ResourcePath;
use crate::snapshot;
use crate::transport::{HttpTransport, Transport};
use ghgraph_core::GithubConfig;
use ghgraph_core::config::consts::endpoints;
use serde::de::DeserializeOwned;
use std::fmt;
use url::Url;

/// Entry point for all queries
///
/// Holds no per-request state; share it freely when the transport is
/// reentrant (the default [`HttpTransport`] is).
pub struct ResourceClient<T = HttpTransport> {
    transport: T,
    token: Option<String>,
    api: ResourcePath,
    raw: ResourcePath,
}

impl ResourceClient<HttpTransport> {
    /// Unauthenticated client against the public endpoints
    pub fn new() -> Result<Self> {
        ResourceClientBuilder::new(HttpTransport::new(crate::transport::DEFAULT_TIMEOUT)?).build()
    }

    /// Client configured from the `[github]` table
    ///
    /// The credential is read from the variable named by `token_env`.
    pub fn from_config(config: &GithubConfig) -> Result<Self> {
        ResourceClientBuilder::new(HttpTransport::new(config.timeout())?)
            .api_base(&config.api_base)
            .raw_base(&config.raw_base)
            .token(config.token())
            .build()
    }
}

impl<T: Transport> ResourceClient<T> {
    pub fn builder(transport: T) -> ResourceClientBuilder<T> {
        ResourceClientBuilder::new(transport)
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn api_base(&self) -> &ResourcePath {
        &self.api
    }

    pub fn raw_base(&self) -> &ResourcePath {
        &self.raw
    }

    pub fn user(&self, login: &str) -> Result<Lookup<User>> {
        self.get_snapshot(&self.api.derive("users").derive(login))
    }

    pub fn repository(&self, owner: &str, name: &str) -> Result<Lookup<Repository>> {
        self.get_snapshot(&self.repo_path(owner, name))
    }

    /// Public repositories of `owner`, in the order the remote lists them
    pub fn repositories_of(&self, owner: &str) -> Result<Lookup<Vec<Repository>>> {
        self.get_snapshot(&self.api.derive("users").derive(owner).derive("repos"))
    }

    pub fn branch(&self, owner: &str, repo: &str, name: &str) -> Result<Lookup<Branch>> {
        let path = self.repo_path(owner, repo).derive("branches").derive(name);
        let lookup: Lookup<BranchSnapshot> = self.get_snapshot(&path)?;
        Ok(lookup.map(|snapshot| Branch::from_snapshot(owner, repo, snapshot)))
    }

    pub fn branches_of(&self, owner: &str, repo: &str) -> Result<Lookup<Vec<Branch>>> {
        let path = self.repo_path(owner, repo).derive("branches");
        let lookup: Lookup<Vec<BranchSnapshot>> = self.get_snapshot(&path)?;
        Ok(lookup.map(|snapshots| {
            snapshots
                .into_iter()
                .map(|snapshot| Branch::from_snapshot(owner, repo, snapshot))
                .collect()
        }))
    }

    /// Looks up a single contents entry
    ///
    /// `branch = None` uses the repository's default branch; an empty or
    /// missing `path` addresses the repository root.
    pub fn file(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
        path: Option<&str>,
    ) -> Result<Lookup<File>> {
        let lookup: Lookup<FileSnapshot> =
            self.get_snapshot(&self.contents_path(owner, repo, branch, path))?;
        Ok(lookup.map(|snapshot| File::from_snapshot(owner, repo, branch, snapshot)))
    }

    /// Lists a directory, entries in the order the remote returns them
    pub fn files_of(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
        dir: Option<&str>,
    ) -> Result<Lookup<Vec<File>>> {
        let lookup: Lookup<Vec<FileSnapshot>> =
            self.get_snapshot(&self.contents_path(owner, repo, branch, dir))?;
        Ok(lookup.map(|snapshots| {
            snapshots
                .into_iter()
                .map(|snapshot| File::from_snapshot(owner, repo, branch, snapshot))
                .collect()
        }))
    }

    /// Raw content handle; no request is made until [`RawFile::fetch`]
    pub fn raw_file(&self, owner: &str, repo: &str, branch: &str, path: &str) -> RawFile {
        RawFile::new(
            self.raw
                .derive(owner)
                .derive(repo)
                .derive(branch)
                .derive(path),
        )
    }

    /// Performs `GET path` with the credential attached, returning the body
    pub fn get(&self, path: &ResourcePath) -> Result<Lookup<Vec<u8>>> {
        self.get_url(&path.to_url(), true)
    }

    pub(crate) fn get_url(&self, url: &Url, authenticated: bool) -> Result<Lookup<Vec<u8>>> {
        let bearer = if authenticated {
            self.token.as_deref()
        } else {
            None
        };
        tracing::debug!("GET {} (authenticated: {})", url, bearer.is_some());

        let response = self.transport.get(url, bearer)?;
        if !response.is_ok() {
            tracing::debug!("GET {} answered {}", url, response.status);
            return Ok(Lookup::NotFound {
                status: response.status,
            });
        }
        Ok(Lookup::Found(response.body))
    }

    fn get_snapshot<S: DeserializeOwned>(&self, path: &ResourcePath) -> Result<Lookup<S>> {
        let url = path.to_url();
        self.get_url(&url, true)?
            .try_map(|body| snapshot::decode(&url, &body))
    }

    fn repo_path(&self, owner: &str, repo: &str) -> ResourcePath {
        self.api.derive("repos").derive(owner).derive(repo)
    }

    fn contents_path(
        &self,
        owner: &str,
        repo: &str,
        branch: Option<&str>,
        path: Option<&str>,
    ) -> ResourcePath {
        let contents = self
            .repo_path(owner, repo)
            .derive("contents")
            .derive(path.unwrap_or(""));
        match branch {
            Some(branch) => contents.with_ref(branch),
            None => contents,
        }
    }
}

impl<T> fmt::Debug for ResourceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceClient")
            .field("api", &self.api.to_string())
            .field("raw", &self.raw.to_string())
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish_non_exhaustive()
    }
}

/// Builder for [`ResourceClient`]
///
/// Bases default to the public endpoints; the client is unauthenticated
/// unless a token is set.
pub struct ResourceClientBuilder<T> {
    transport: T,
    token: Option<String>,
    api_base: String,
    raw_base: String,
}

impl<T: Transport> ResourceClientBuilder<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            token: None,
            api_base: endpoints::API_BASE.to_string(),
            raw_base: endpoints::RAW_BASE.to_string(),
        }
    }

    /// Bearer credential; `None` or an empty string sends no `Authorization`
    pub fn token(mut self, token: Option<String>) -> Self {
        self.token = token.filter(|t| !t.is_empty());
        self
    }

    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = base.into();
        self
    }

    pub fn raw_base(mut self, base: impl Into<String>) -> Self {
        self.raw_base = base.into();
        self
    }

    /// # Errors
    ///
    /// Returns [`GithubError::InvalidBase`] if either base is not an
    /// absolute URL that can carry a path.
    pub fn build(self) -> Result<ResourceClient<T>> {
        Ok(ResourceClient {
            api: parse_base(&self.api_base)?,
            raw: parse_base(&self.raw_base)?,
            transport: self.transport,
            token: self.token,
        })
    }
}

fn parse_base(base: &str) -> Result<ResourcePath> {
    ResourcePath::parse(base).map_err(|source| GithubError::InvalidBase {
        base: base.to_string(),
        source,
    })
}
