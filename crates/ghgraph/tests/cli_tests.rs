//! Integration tests for the ghgraph binary

#![allow(deprecated)] // cargo_bin is deprecated in favour of the cargo_bin! macro

use assert_cmd::cargo::CommandCargoExt;
use assert_cmd::assert::OutputAssertExt;
use ghgraph_testkit::fixtures::{branch_json, dir_json, file_json, repository_json, user_json};
use ghgraph_testkit::{get_shared_mock_server, mock_json, mock_status};
use predicates::prelude::*;
use serde_json::json;
use std::process::Command;
use tempfile::TempDir;

/// Command isolated from the developer's config, token and cwd
fn ghgraph(base: &str, home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path())
        .env("GHGRAPH_API_BASE_URL", base)
        .env("GHGRAPH_RAW_BASE_URL", format!("{base}/raw/"))
        .env_remove("GHGRAPH_CONFIG")
        .env_remove("GHGRAPH_TIMEOUT_SECS")
        .env_remove("GITHUB_TOKEN")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn test_user_text_output() {
    let (base, mock) = {
        let mut server = get_shared_mock_server();
        let mock = mock_json(&mut server, "/users/cli-alice", &user_json("cli-alice", 77));
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();

    ghgraph(&base, &home)
        .args(["user", "cli-alice"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cli-alice"))
        .stdout(predicate::str::contains("id 77"))
        .stdout(predicate::str::contains("Earth"));

    mock.assert();
}

#[test]
fn test_user_json_output() {
    let (base, _mock) = {
        let mut server = get_shared_mock_server();
        let mock = mock_json(&mut server, "/users/cli-bob", &user_json("cli-bob", 5));
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();

    let output = ghgraph(&base, &home)
        .args(["--json", "user", "cli-bob"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["login"], "cli-bob");
    assert_eq!(value["id"], 5);
    assert_eq!(value["public_repos"], 2);
}

#[test]
fn test_not_found_exits_with_two() {
    let (base, _mock) = {
        let mut server = get_shared_mock_server();
        let mock = mock_status(&mut server, "/repos/cli-carol/missing", 404);
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();

    ghgraph(&base, &home)
        .args(["repo", "cli-carol", "missing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cli-carol/missing"))
        .stderr(predicate::str::contains("404"));
}

#[test]
fn test_repos_lists_in_remote_order() {
    let (base, _mock) = {
        let mut server = get_shared_mock_server();
        let mock = mock_json(
            &mut server,
            "/users/cli-dave/repos",
            &json!([
                repository_json("cli-dave", "second", 2),
                repository_json("cli-dave", "first", 1),
            ]),
        );
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();

    let output = ghgraph(&base, &home)
        .args(["repos", "cli-dave"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let second = stdout.find("cli-dave/second").unwrap();
    let first = stdout.find("cli-dave/first").unwrap();
    assert!(second < first, "Order not preserved: {stdout}");
}

#[test]
fn test_branches_and_ls_with_ref() {
    let (base, _mocks) = {
        let mut server = get_shared_mock_server();
        let mocks = vec![
            mock_json(
                &mut server,
                "/repos/cli-erin/r/branches",
                &json!([branch_json("main"), branch_json("dev")]),
            ),
            mock_json(
                &mut server,
                "/repos/cli-erin/r/contents/src?ref=dev",
                &json!([dir_json("src/bin"), file_json("src/lib.rs", 10)]),
            ),
        ];
        (server.url(), mocks)
    };
    let home = TempDir::new().unwrap();

    ghgraph(&base, &home)
        .args(["branches", "cli-erin", "r"])
        .assert()
        .success()
        .stdout(predicate::str::diff("main\ndev\n"));

    ghgraph(&base, &home)
        .args(["ls", "cli-erin", "r", "src", "--ref", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bin/"))
        .stdout(predicate::str::contains("lib.rs"));
}

#[test]
fn test_raw_writes_bytes_and_sends_token() {
    let (base, mock) = {
        let mut server = get_shared_mock_server();
        let mock = server
            .mock("GET", "/raw/cli-frank/r/main/README.md")
            .match_header("authorization", "Bearer cli-token")
            .with_status(200)
            .with_body("# Title\n")
            .create();
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();

    ghgraph(&base, &home)
        .env("GITHUB_TOKEN", "cli-token")
        .args(["raw", "cli-frank", "r", "main", "README.md"])
        .assert()
        .success()
        .stdout("# Title\n");

    mock.assert();
}

#[test]
fn test_config_file_selects_token_variable() {
    let (base, mock) = {
        let mut server = get_shared_mock_server();
        let mock = server
            .mock("GET", "/users/cli-grace")
            .match_header("authorization", "Bearer from-custom-var")
            .with_status(200)
            .with_body(user_json("cli-grace", 3).to_string())
            .create();
        (server.url(), mock)
    };
    let home = TempDir::new().unwrap();
    std::fs::write(
        home.path().join("ghgraph.toml"),
        "[github]\ntoken_env = \"CLI_GRACE_TOKEN\"\n",
    )
    .unwrap();

    ghgraph(&base, &home)
        .env("CLI_GRACE_TOKEN", "from-custom-var")
        .args(["user", "cli-grace"])
        .assert()
        .success();

    mock.assert();
}

#[test]
fn test_missing_explicit_config_is_error() {
    let home = TempDir::new().unwrap();

    ghgraph("http://127.0.0.1:9", &home)
        .args(["--config", "nope.toml", "user", "x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("CONFIG_NOT_FOUND"));
}

#[test]
fn test_unreachable_api_is_error() {
    let home = TempDir::new().unwrap();

    ghgraph("http://127.0.0.1:9", &home)
        .env("GHGRAPH_TIMEOUT_SECS", "2")
        .args(["user", "octocat"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("127.0.0.1:9"));
}
