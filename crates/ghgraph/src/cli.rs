//! CLI command structure using clap

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ghgraph")]
#[command(version, about = "Browse GitHub users, repositories and files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: ./ghgraph.toml, then the user config dir)
    #[arg(long, global = true, env = "GHGRAPH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show a user
    User { login: String },

    /// List a user's public repositories
    Repos { owner: String },

    /// Show a repository
    Repo { owner: String, name: String },

    /// Show a branch
    Branch {
        owner: String,
        repo: String,
        name: String,
    },

    /// List a repository's branches
    Branches { owner: String, repo: String },

    /// Show a file or directory entry
    File {
        owner: String,
        repo: String,
        /// Path from the repository root (default: root)
        path: Option<String>,
        /// Branch, tag or commit (default: repository default branch)
        #[arg(long = "ref")]
        reference: Option<String>,
    },

    /// List a directory
    Ls {
        owner: String,
        repo: String,
        /// Directory from the repository root (default: root)
        dir: Option<String>,
        /// Branch, tag or commit (default: repository default branch)
        #[arg(long = "ref")]
        reference: Option<String>,
    },

    /// Write raw file content to stdout
    Raw {
        owner: String,
        repo: String,
        branch: String,
        path: String,
    },
}
