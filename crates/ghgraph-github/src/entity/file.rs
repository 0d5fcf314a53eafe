use crate::error::{GithubError, Result};
use crate::lookup::Lookup;
use crate::path::join;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Entry type reported by the contents endpoint
///
/// Unknown types are kept verbatim in [`FileKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FileKind {
    File,
    Dir,
    Symlink,
    Submodule,
    Other(String),
}

impl FileKind {
    pub fn as_str(&self) -> &str {
        match self {
            FileKind::File => "file",
            FileKind::Dir => "dir",
            FileKind::Symlink => "symlink",
            FileKind::Submodule => "submodule",
            FileKind::Other(kind) => kind,
        }
    }
}

impl From<String> for FileKind {
    fn from(kind: String) -> Self {
        match kind.as_str() {
            "file" => FileKind::File,
            "dir" => FileKind::Dir,
            "symlink" => FileKind::Symlink,
            "submodule" => FileKind::Submodule,
            _ => FileKind::Other(kind),
        }
    }
}

impl From<FileKind> for String {
    fn from(kind: FileKind) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fields read from one contents-endpoint object
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FileSnapshot {
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: FileKind,
    #[serde(default)]
    download_url: Option<String>,
    sha: String,
    size: u64,
}

/// A file or directory entry, identified by (owner, repo, branch, path)
///
/// `branch` is `None` when the entry was looked up without a `ref`, in which
/// case navigation from it also goes without one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    owner: String,
    repo: String,
    branch: Option<String>,
    name: String,
    path: String,
    #[serde(rename = "type")]
    kind: FileKind,
    download_url: Option<String>,
    sha: String,
    size: u64,
}

impl File {
    pub(crate) fn from_snapshot(
        owner: &str,
        repo: &str,
        branch: Option<&str>,
        snapshot: FileSnapshot,
    ) -> Self {
        Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            branch: branch.map(str::to_string),
            name: snapshot.name,
            path: snapshot.path,
            kind: snapshot.kind,
            download_url: snapshot.download_url,
            sha: snapshot.sha,
            size: snapshot.size,
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn branch(&self) -> Option<&str> {
        self.branch.as_deref()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path from the repository root
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &FileKind {
        &self.kind
    }

    /// The raw `type` string, e.g. `"file"` or `"dir"`
    pub fn type_name(&self) -> &str {
        self.kind.as_str()
    }

    pub fn is_dir(&self) -> bool {
        self.kind == FileKind::Dir
    }

    pub fn is_file(&self) -> bool {
        self.kind == FileKind::File
    }

    /// `None` for directories and submodules
    pub fn download_url(&self) -> Option<&str> {
        self.download_url.as_deref()
    }

    /// Git blob (or tree) hash
    pub fn sha(&self) -> &str {
        &self.sha
    }

    /// Size in bytes
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Path of `sub_path` relative to this entry
    pub fn sub_path(&self, sub_path: &str) -> String {
        join(&self.path, sub_path)
    }

    /// Looks up `{self.path}/{sub_path}` on the same branch
    pub fn file<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        sub_path: &str,
    ) -> Result<Lookup<File>> {
        client.file(
            &self.owner,
            &self.repo,
            self.branch.as_deref(),
            Some(&self.sub_path(sub_path)),
        )
    }

    /// Lists `{self.path}/{sub_path}`; pass `""` to list this directory
    pub fn files<T: Transport>(
        &self,
        client: &ResourceClient<T>,
        sub_path: &str,
    ) -> Result<Lookup<Vec<File>>> {
        client.files_of(
            &self.owner,
            &self.repo,
            self.branch.as_deref(),
            Some(&self.sub_path(sub_path)),
        )
    }

    /// Fetches the content behind `download_url`
    ///
    /// The download URL comes from the remote and may point at another host,
    /// so the credential is not sent.
    ///
    /// Entries without a download URL (directories, submodules) yield
    /// `NotFound { status: 404 }` without any request; that status is local
    /// and was not answered by the remote. Check [`File::download_url`] first
    /// to tell the two apart.
    pub fn download<T: Transport>(&self, client: &ResourceClient<T>) -> Result<Lookup<Vec<u8>>> {
        let Some(raw) = self.download_url.as_deref() else {
            tracing::debug!("{} has no download URL; nothing fetched", self.path);
            return Ok(Lookup::NotFound { status: 404 });
        };
        let url = Url::parse(raw).map_err(|source| GithubError::InvalidDownloadUrl {
            url: raw.to_string(),
            source,
        })?;
        client.get_url(&url, false)
    }
}
