use crate::entity::{Branch, File, User};
use crate::error::Result;
use crate::lookup::Lookup;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// A repository, identified by (owner login, name)
///
/// The owner is decoded eagerly from the embedded `owner` object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    id: u64,
    name: String,
    full_name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    homepage: Option<String>,
    default_branch: String,
    archived: bool,
    owner: User,
}

impl Repository {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// `{owner}/{name}` as reported by the remote
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn homepage(&self) -> Option<&str> {
        self.homepage.as_deref()
    }

    pub fn default_branch(&self) -> &str {
        &self.default_branch
    }

    pub fn is_archived(&self) -> bool {
        self.archived
    }

    pub fn owner(&self) -> &User {
        &self.owner
    }

    pub fn owner_login(&self) -> &str {
        self.owner.login()
    }

    pub fn branch<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        name: &str,
    ) -> Result<Lookup<Branch>> {
        client.branch(self.owner_login(), &self.name, name)
    }

    pub fn branches<T: Transport>(
        &self,
        client: &ResourceClient<T>,
    ) -> Result<Lookup<Vec<Branch>>> {
        client.branches_of(self.owner_login(), &self.name)
    }

    /// Looks up a file on the default branch
    pub fn file<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        path: &str,
    ) -> Result<Lookup<File>> {
        client.file(
            self.owner_login(),
            &self.name,
            Some(&self.default_branch),
            Some(path),
        )
    }

    /// Lists a directory on the default branch
    pub fn files<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        dir: &str,
    ) -> Result<Lookup<Vec<File>>> {
        client.files_of(
            self.owner_login(),
            &self.name,
            Some(&self.default_branch),
            Some(dir),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_deserialization() {
        let json = r#"{
            "id": 1296269,
            "name": "Hello-World",
            "full_name": "octocat/Hello-World",
            "description": "This your first repo!",
            "homepage": "https://github.com",
            "default_branch": "master",
            "archived": false,
            "owner": { "login": "octocat", "id": 1, "avatar_url": "https://example.com/a.png" }
        }"#;

        let repo: Repository = serde_json::from_str(json).expect("Failed to deserialize Repository");

        assert_eq!(repo.id(), 1296269);
        assert_eq!(repo.name(), "Hello-World");
        assert_eq!(repo.full_name(), "octocat/Hello-World");
        assert_eq!(repo.description(), Some("This your first repo!"));
        assert_eq!(repo.homepage(), Some("https://github.com"));
        assert_eq!(repo.default_branch(), "master");
        assert!(!repo.is_archived());
        assert_eq!(repo.owner_login(), "octocat");
        assert_eq!(repo.owner().id(), 1);
        assert_eq!(repo.owner().repos_size(), None);
    }

    #[test]
    fn test_null_description_and_homepage() {
        let json = r#"{
            "id": 2, "name": "r", "full_name": "o/r",
            "description": null, "homepage": null,
            "default_branch": "main", "archived": true,
            "owner": { "login": "o", "id": 9 }
        }"#;

        let repo: Repository = serde_json::from_str(json).unwrap();

        assert_eq!(repo.description(), None);
        assert_eq!(repo.homepage(), None);
        assert!(repo.is_archived());
    }

    #[test]
    fn test_missing_owner_fails() {
        let json = r#"{
            "id": 2, "name": "r", "full_name": "o/r",
            "default_branch": "main", "archived": false
        }"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }

    #[test]
    fn test_malformed_owner_fails() {
        let json = r#"{
            "id": 2, "name": "r", "full_name": "o/r",
            "default_branch": "main", "archived": false,
            "owner": { "id": 9 }
        }"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }

    #[test]
    fn test_archived_must_be_boolean() {
        let json = r#"{
            "id": 2, "name": "r", "full_name": "o/r",
            "default_branch": "main", "archived": "no",
            "owner": { "login": "o", "id": 9 }
        }"#;
        assert!(serde_json::from_str::<Repository>(json).is_err());
    }
}
