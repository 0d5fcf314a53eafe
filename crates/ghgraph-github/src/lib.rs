//! Navigable, typed view of the GitHub REST hierarchy.
//!
//! Users, repositories, branches and contents entries are decoded into
//! immutable entities. Each entity knows its own coordinates and can issue the
//! next query down the tree when handed the client.
//!
//! # Architecture
//!
//! - [`path`]: immutable request paths and the single-separator [`path::join`]
//! - [`transport`]: the blocking `GET` seam and its reqwest implementation
//! - [`resource`]: [`ResourceClient`], one query per resource kind
//! - [`entity`]: [`User`], [`Repository`], [`Branch`], [`File`], [`RawFile`]
//! - [`lookup`]: [`Lookup`], found or not found
//!
//! # Request Flow
//!
//! ```text
//! client.file(owner, repo, ref, path)
//!     ↓
//! 1. Derive path: {api}/repos/{owner}/{repo}/contents/{path}?ref={ref}
//!     ↓
//! 2. Transport GET (bearer token if configured)
//!     ↓ status != 200 → Lookup::NotFound { status }
//! 3. Decode JSON body (missing/mistyped field → GithubError::MalformedSnapshot)
//!     ↓
//! 4. Lookup::Found(File)
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ghgraph_github::{Lookup, ResourceClient};
//!
//! # fn main() -> ghgraph_github::Result<()> {
//! let client = ResourceClient::new()?;
//!
//! let Lookup::Found(repo) = client.repository("octocat", "Hello-World")? else {
//!     println!("No such repository");
//!     return Ok(());
//! };
//!
//! if let Some(branch) = repo.branch(&client, repo.default_branch())?.found() {
//!     for entry in branch.files(&client, "")?.found().unwrap_or_default() {
//!         println!("{} {}", entry.type_name(), entry.path());
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod entity;
pub mod error;
pub mod lookup;
pub mod path;
pub mod resource;
pub mod snapshot;
pub mod transport;

// Re-export commonly used types
pub use entity::{Branch, File, FileKind, RawFile, Repository, User};
pub use error::{GithubError, Result};
pub use lookup::Lookup;
pub use path::{ResourcePath, join};
pub use resource::{ResourceClient, ResourceClientBuilder};
pub use transport::{HttpTransport, Transport, TransportResponse};
