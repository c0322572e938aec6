use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("trends").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("get"));
}

#[test]
fn get_help_lists_query_flags() {
    let mut cmd = Command::cargo_bin("trends").unwrap();
    cmd.args(["get", "--help"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--query-1"))
        .stdout(predicate::str::contains("--year-2"));
}

#[test]
fn unreachable_upstream_fails_the_run() {
    let mut cmd = Command::cargo_bin("trends").unwrap();
    cmd.args(["--api-url", "http://127.0.0.1:9/article", "get"]);
    cmd.assert().failure();
}

// Live test (opt-in): NYT_ARTICLE_API_KEY=... cargo test --features online
#[cfg(feature = "online")]
#[test]
fn compare_online_defaults() {
    let mut cmd = Command::cargo_bin("trends").unwrap();
    cmd.args(["get", "--top", "3"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("month chart:"));
}
