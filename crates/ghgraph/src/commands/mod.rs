pub mod contents;
pub mod repo;
pub mod user;

use ghgraph_github::Lookup;
use thiserror::Error;

/// Raised when the remote does not serve the requested resource
///
/// `main` maps it to exit status 2.
#[derive(Debug, Error)]
#[error("{what} not found (HTTP {status})")]
pub struct NotFound {
    pub what: String,
    pub status: u16,
}

/// Unwraps a lookup or fails with [`NotFound`]
pub fn require<T>(lookup: Lookup<T>, what: impl Into<String>) -> Result<T, NotFound> {
    match lookup {
        Lookup::Found(value) => Ok(value),
        Lookup::NotFound { status } => Err(NotFound {
            what: what.into(),
            status,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_found() {
        assert_eq!(require(Lookup::Found(3), "x").unwrap(), 3);
    }

    #[test]
    fn test_require_not_found_message() {
        let err = require::<()>(Lookup::NotFound { status: 404 }, "user 'ghost'").unwrap_err();
        assert_eq!(err.status, 404);
        assert_eq!(err.to_string(), "user 'ghost' not found (HTTP 404)");
    }
}
