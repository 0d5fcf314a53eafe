//! ghgraph.toml schema and loading

pub mod consts;
mod load;
mod model;

pub use load::{default_config_path, resolve_config_path};
pub use model::{Config, GithubConfig};
