use crate::error::Result;
use crate::lookup::Lookup;
use crate::path::ResourcePath;
use crate::resource::ResourceClient;
use crate::transport::Transport;
use url::Url;

/// Handle on raw file content, addressed by path only
///
/// Nothing is fetched until [`RawFile::fetch`]; the content is never kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RawFile {
    path: ResourcePath,
}

impl RawFile {
    pub(crate) fn new(path: ResourcePath) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &ResourcePath {
        &self.path
    }

    pub fn url(&self) -> Url {
        self.path.to_url()
    }

    /// Handle on `{self}/{sub_path}`; performs no request
    pub fn derive_sub_file(&self, sub_path: &str) -> RawFile {
        RawFile::new(self.path.derive(sub_path))
    }

    /// Downloads the content with the client's credential attached
    pub fn fetch<T: Transport>(&self, client: &ResourceClient<T>) -> Result<Lookup<Vec<u8>>> {
        client.get(&self.path)
    }
}
