//! Integration tests for config discovery

use ghgraph_core::config::{consts, resolve_config_path};
use ghgraph_core::{Config, GhgraphError};
use std::fs;

fn no_overrides<R>(f: impl FnOnce() -> R) -> R {
    temp_env::with_vars_unset(
        [
            consts::env::API_BASE_URL,
            consts::env::RAW_BASE_URL,
            consts::env::TIMEOUT_SECS,
        ],
        f,
    )
}

#[test]
fn test_explicit_path_must_exist() {
    let temp = ghgraph_testkit::temp_dir_in_workspace();
    let missing = temp.path().join("missing.toml");

    let result = resolve_config_path(Some(&missing), temp.path());

    match result {
        Err(GhgraphError::ConfigNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected ConfigNotFound, got: {:?}", other),
    }
}

#[test]
fn test_local_file_is_picked_up() {
    let temp = ghgraph_testkit::temp_dir_in_workspace();
    fs::write(
        temp.path().join("ghgraph.toml"),
        "[github]\napi_base = \"http://localhost:1234/\"\n",
    )
    .unwrap();

    let config = no_overrides(|| Config::load(None, temp.path())).unwrap();

    assert_eq!(config.github.api_base, "http://localhost:1234/");
    assert_eq!(config.github.raw_base, consts::endpoints::RAW_BASE);
}

#[test]
fn test_explicit_path_wins_over_local_file() {
    let temp = ghgraph_testkit::temp_dir_in_workspace();
    fs::write(
        temp.path().join("ghgraph.toml"),
        "[github]\ntimeout_secs = 10\n",
    )
    .unwrap();
    let explicit = temp.path().join("other.toml");
    fs::write(&explicit, "[github]\ntimeout_secs = 3\n").unwrap();

    let config = no_overrides(|| Config::load(Some(&explicit), temp.path())).unwrap();

    assert_eq!(config.github.timeout_secs, 3);
}

#[test]
fn test_env_override_applies_after_file() {
    let temp = ghgraph_testkit::temp_dir_in_workspace();
    let explicit = temp.path().join("ghgraph.toml");
    fs::write(&explicit, "[github]\napi_base = \"http://from-file/\"\n").unwrap();

    let config = temp_env::with_var(
        consts::env::API_BASE_URL,
        Some("http://from-env/"),
        || Config::load(Some(&explicit), temp.path()),
    )
    .unwrap();

    assert_eq!(config.github.api_base, "http://from-env/");
}

#[test]
fn test_malformed_file_is_parse_error() {
    let temp = ghgraph_testkit::temp_dir_in_workspace();
    let explicit = temp.path().join("ghgraph.toml");
    fs::write(&explicit, "[github]\ntimeout_secs = \"thirty\"\n").unwrap();

    let result = no_overrides(|| Config::load(Some(&explicit), temp.path()));

    assert!(
        matches!(result, Err(GhgraphError::ConfigParseError { .. })),
        "Expected ConfigParseError, got: {:?}",
        result
    );
}
