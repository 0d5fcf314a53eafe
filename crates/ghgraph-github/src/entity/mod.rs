//! Entities: immutable snapshots of remote resources
//!
//! Every entity is decoded once from the JSON body of the request that
//! produced it and never refreshes. Navigation methods take the
//! [`ResourceClient`](crate::ResourceClient) as an explicit argument and
//! issue a fresh request on each call.

mod branch;
mod file;
mod raw_file;
mod repository;
mod user;

pub use branch::Branch;
pub use file::{File, FileKind};
pub use raw_file::RawFile;
pub use repository::Repository;
pub use user::User;

pub(crate) use branch::BranchSnapshot;
pub(crate) use file::FileSnapshot;
