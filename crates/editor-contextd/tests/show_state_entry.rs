//! Integration tests for the `editor-context-show` binary entry point.
//!
//! Verifies that the published host-state document is printed as a snapshot
//! and that configuration errors reach stderr.

use std::fs;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::str::contains;
use tempfile::TempDir;

const DOCUMENT: &str = r#"{
    "activeWindow": 1,
    "windows": [{
        "id": 1,
        "folders": ["/srv"],
        "activeView": 10,
        "views": [
            { "id": 10, "fileName": "/srv/app.py",
              "selections": [ { "anchor": [2, 0], "caret": [4, 10] } ] }
        ]
    }]
}"#;

#[test]
fn prints_the_published_editor_state() {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("editor-state.json");
    fs::write(&path, DOCUMENT).expect("write host state");

    let mut command = cargo_bin_cmd!("editor-context-show");
    command.env("EDITOR_CONTEXT_HOST_STATE_PATH", &path);
    command
        .assert()
        .success()
        .stdout(contains("\"path\": \"/srv/app.py\""))
        .stdout(contains("\"projectFolders\": [\n    \"/srv\"\n  ]"));
}

#[test]
fn prints_an_empty_state_without_a_document() {
    let mut command = cargo_bin_cmd!("editor-context-show");
    command.env_remove("EDITOR_CONTEXT_HOST_STATE_PATH");
    command
        .assert()
        .success()
        .stdout(contains("\"activeFiles\": []"))
        .stdout(contains("\"lastUpdated\""));
}

#[test]
fn invalid_configuration_exits_with_failure() {
    let mut command = cargo_bin_cmd!("editor-context-show");
    command.arg("--mcp-server-port").arg("not-a-port");
    command
        .assert()
        .failure()
        .stderr(contains("editor-context-show:"));
}
