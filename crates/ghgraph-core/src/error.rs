use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GhgraphError {
    // Config errors
    #[error("CONFIG_NOT_FOUND: config file '{path}' does not exist")]
    ConfigNotFound { path: PathBuf },

    #[error("CONFIG_PARSE_ERROR: failed to parse {path}: {reason}")]
    ConfigParseError { path: PathBuf, reason: String },

    #[error("CONFIG_INVALID_VALUE: {field}: {reason}")]
    ConfigInvalidValue { field: String, reason: String },

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GhgraphError>;
