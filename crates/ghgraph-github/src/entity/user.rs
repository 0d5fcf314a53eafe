use crate::entity::Repository;
use crate::error::Result;
use crate::lookup::Lookup;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// A user account, identified by its login
///
/// The repository and gist counts are only present on full user documents
/// (`GET users/{login}`); the `owner` summary embedded in a repository omits
/// them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    login: String,
    id: u64,
    #[serde(rename = "name", default)]
    display_name: Option<String>,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    avatar_url: Option<String>,
    #[serde(default)]
    bio: Option<String>,
    #[serde(rename = "public_repos", default)]
    repos_size: Option<u32>,
    #[serde(rename = "public_gists", default)]
    gists_size: Option<u32>,
}

impl User {
    pub fn login(&self) -> &str {
        &self.login
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn avatar_url(&self) -> Option<&str> {
        self.avatar_url.as_deref()
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    /// Number of public repositories
    pub fn repos_size(&self) -> Option<u32> {
        self.repos_size
    }

    /// Number of public gists
    pub fn gists_size(&self) -> Option<u32> {
        self.gists_size
    }

    /// Looks up one of this user's repositories by name
    pub fn repository<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        name: &str,
    ) -> Result<Lookup<Repository>> {
        client.repository(&self.login, name)
    }

    /// Lists this user's public repositories (first page)
    pub fn repositories<T: Transport>(
        &self,
        client: &ResourceClient<T>,
    ) -> Result<Lookup<Vec<Repository>>> {
        client.repositories_of(&self.login)
    }
}
