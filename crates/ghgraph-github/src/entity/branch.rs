use crate::entity::{File, RawFile};
use crate::error::Result;
use crate::lookup::Lookup;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};

/// The only part of a branch document this client reads
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct BranchSnapshot {
    pub(crate) name: String,
}

/// A branch, identified by (owner login, repo name, branch name)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Branch {
    owner: String,
    repo: String,
    name: String,
}

impl Branch {
    pub(crate) fn from_snapshot(owner: &str, repo: &str, snapshot: BranchSnapshot) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            name: snapshot.name,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn file<T: Transport>(&self, client: &ResourceClient<T>, path: &str) -> Result<Lookup<File>> {
        client.file(&self.owner, &self.repo, Some(&self.name), Some(path))
    }

    pub fn files<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        dir: &str,
    ) -> Result<Lookup<Vec<File>>> {
        client.files_of(&self.owner, &self.repo, Some(&self.name), Some(dir))
    }

    /// Raw content handle for `path` on this branch; no request is made
    pub fn raw_file<T: Transport>(&self, client: &ResourceClient<T>, path: &str) -> RawFile {
        client.raw_file(&self.owner, &self.repo, &self.name, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_branch_from_snapshot() {
        let snapshot: BranchSnapshot = serde_json::from_str(
            r#"{"name":"main","commit":{"sha":"abc"},"protected":true}"#,
        )
        .unwrap();

        let branch = Branch::from_snapshot("octocat", "Hello-World", snapshot);

        assert_eq!(branch.owner(), "octocat");
        assert_eq!(branch.repo(), "Hello-World");
        assert_eq!(branch.name(), "main");
    }

    #[test]
    fn test_missing_name_fails() {
        assert!(serde_json::from_str::<BranchSnapshot>(r#"{"commit":{}}"#).is_err());
    }
}
