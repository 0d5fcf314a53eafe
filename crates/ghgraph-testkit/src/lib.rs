//! Test utilities for ghgraph
//!
//! This crate provides shared testing utilities used across the ghgraph workspace.

pub mod fixtures;
pub mod mock;

pub use mock::{get_shared_mock_server, mock_json, mock_status};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the project root
///
/// All test temporary files end up in one gitignored location that is easy
/// to clean up manually.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use ghgraph_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// std::fs::write(temp.path().join("ghgraph.toml"), "").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let tmp_base = std::env::current_dir()?.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temp_dir_in_workspace_creates_in_tmp() {
        let temp = temp_dir_in_workspace();
        let path = temp.path();

        assert!(
            path.to_string_lossy().contains(".tmp"),
            "Path should contain .tmp, got: {}",
            path.display()
        );
        assert!(path.is_dir(), "Path should be a directory");
    }

    #[test]
    fn test_temp_dir_auto_cleanup() {
        let path = {
            let temp = temp_dir_in_workspace();
            temp.path().to_path_buf()
        };

        assert!(!path.exists(), "Directory should not exist after drop");
    }
}
