//! Mock server infrastructure for testing
//!
//! A single shared mockito server serves every test in a process. Tests keep
//! out of each other's way by mocking distinct paths (use a unique owner or
//! login per test).

use lazy_static::lazy_static;
use mockito::{Matcher, Mock, Server, ServerGuard};
use std::sync::Mutex;

lazy_static! {
    /// Global shared mockito server for all tests
    pub static ref SHARED_MOCK_SERVER: Mutex<ServerGuard> = Mutex::new(Server::new());
}

/// Get reference to shared mock server
///
/// Hold the guard only while creating mocks, not while the code under test
/// runs, so parallel tests are not serialized.
///
/// # Examples
///
/// ```no_run
/// use ghgraph_testkit::get_shared_mock_server;
///
/// let (url, _mock) = {
///     let mut server = get_shared_mock_server();
///     let mock = server.mock("GET", "/users/unique-login").with_status(404).create();
///     (server.url(), mock)
/// };
/// ```
pub fn get_shared_mock_server() -> std::sync::MutexGuard<'static, ServerGuard> {
    // mockito keeps working after a panicking test poisoned the lock
    SHARED_MOCK_SERVER
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Mocks `GET {path}` answering 200 with a JSON body
///
/// `path` may carry a query string (`/repos/o/r/contents/a?ref=main`); the
/// mock then only matches requests carrying those query pairs.
pub fn mock_json(server: &mut ServerGuard, path: &str, body: &serde_json::Value) -> Mock {
    let (path, query) = split_query(path);
    server
        .mock("GET", path)
        .match_query(query)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(body.to_string())
        .create()
}

/// Mocks `GET {path}` answering with a bare status code
pub fn mock_status(server: &mut ServerGuard, path: &str, status: usize) -> Mock {
    let (path, query) = split_query(path);
    server
        .mock("GET", path)
        .match_query(query)
        .with_status(status)
        .with_body(r#"{"message":"Not Found"}"#)
        .create()
}

fn split_query(path: &str) -> (&str, Matcher) {
    match path.split_once('?') {
        Some((path, query)) => {
            let pairs = query
                .split('&')
                .filter_map(|pair| pair.split_once('='))
                .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string()))
                .collect();
            (path, Matcher::AllOf(pairs))
        }
        None => (path, Matcher::Any),
    }
}
