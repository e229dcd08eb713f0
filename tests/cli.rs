#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(session: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("roster-cli").unwrap();
    cmd.arg("--session").arg(session);
    cmd
}

#[test]
fn build_and_export_a_roster() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("roster.json");
    let out = dir.path().join("roster.xlsx");

    cli(&session)
        .args(["init", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2025"));
    cli(&session)
        .args(["add-member", "--name", "alice"])
        .assert()
        .success();
    cli(&session)
        .args(["apply", "--member", "alice", "--shift", "SA", "--weekend", "Sat-Sun"])
        .assert()
        .success();
    cli(&session)
        .args(["set", "--member", "alice", "--day", "2-Jan", "--code", "-"])
        .assert()
        .success();
    cli(&session)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice|SA|-|SA|WO|WO|SA"));
    cli(&session)
        .arg("export")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("spreadsheetml"));

    let bytes = std::fs::read(&out).unwrap();
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn invalid_default_shift_is_reported() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("roster.json");

    cli(&session)
        .args(["init", "--month", "2025-01"])
        .assert()
        .success();
    cli(&session)
        .args(["add-member", "--name", "alice"])
        .assert()
        .success();
    cli(&session)
        .args(["apply", "--member", "alice", "--shift", "Leave"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid shift code: Leave"));
    cli(&session)
        .args(["add-member", "--name", "alice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate team member: alice"));
}

#[test]
fn exporting_without_members_fails() {
    let dir = tempdir().unwrap();
    let session = dir.path().join("roster.json");

    cli(&session)
        .args(["init", "--month", "2024-02"])
        .assert()
        .success();
    cli(&session)
        .arg("export")
        .arg("--out")
        .arg(dir.path().join("x.xlsx"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty roster"));
}
