use assert_cmd::Command;
use predicates::prelude::*;

fn tripdeck() -> Command {
    Command::cargo_bin("tripdeck").unwrap()
}

#[test]
fn test_main_help_lists_routes() {
    tripdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("plan"))
        .stdout(predicate::str::contains("trips"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("--api-url"));
}

#[test]
fn test_trips_help_mentions_formats() {
    tripdeck()
        .args(["trips", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--format"))
        .stdout(predicate::str::contains("json"));
}

#[test]
fn test_show_requires_a_valid_id() {
    tripdeck()
        .args(["show", "not-a-uuid"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_version_flag() {
    tripdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("tripdeck"));
}
