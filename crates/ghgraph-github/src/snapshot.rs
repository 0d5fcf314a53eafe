//! Decoding of response bodies into entity snapshots

use crate::error::{GithubError, Result};
use serde::de::DeserializeOwned;
use url::Url;

/// Decodes a 200 body into `S`
///
/// Works for single objects and for arrays (`S = Vec<_>`); array order is
/// kept. A missing required key or a mistyped value fails the whole decode.
pub fn decode<S: DeserializeOwned>(url: &Url, body: &[u8]) -> Result<S> {
    serde_json::from_slice(body).map_err(|source| {
        tracing::debug!("Malformed body from {}: {}", url, source);
        GithubError::MalformedSnapshot {
            url: url.clone(),
            source,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Named {
        name: String,
        size: u64,
    }

    fn url() -> Url {
        Url::parse("https://api.github.com/x").unwrap()
    }

    #[test]
    fn test_decode_object() {
        let named: Named = decode(&url(), br#"{"name":"a","size":3,"extra":true}"#).unwrap();
        assert_eq!(
            named,
            Named {
                name: "a".to_string(),
                size: 3
            }
        );
    }

    #[test]
    fn test_decode_array_keeps_order() {
        let list: Vec<Named> = decode(
            &url(),
            br#"[{"name":"b","size":1},{"name":"a","size":2},{"name":"c","size":0}]"#,
        )
        .unwrap();
        let names: Vec<_> = list.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_decode_empty_array() {
        let list: Vec<Named> = decode(&url(), b"[]").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_missing_field_fails() {
        let result: Result<Named> = decode(&url(), br#"{"name":"a"}"#);
        match result {
            Err(GithubError::MalformedSnapshot { url, source }) => {
                assert_eq!(url.path(), "/x");
                assert!(source.to_string().contains("size"));
            }
            other => panic!("Expected MalformedSnapshot, got: {:?}", other),
        }
    }

    #[test]
    fn test_wrong_type_fails() {
        let result: Result<Named> = decode(&url(), br#"{"name":"a","size":"big"}"#);
        assert!(matches!(result, Err(GithubError::MalformedSnapshot { .. })));
    }

    #[test]
    fn test_object_where_array_expected_fails() {
        let result: Result<Vec<Named>> = decode(&url(), br#"{"name":"a","size":1}"#);
        assert!(matches!(result, Err(GithubError::MalformedSnapshot { .. })));
    }
}
