use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::fs;
use std::path::PathBuf;

fn fedhub() -> Command {
    Command::cargo_bin("fedhub").expect("binary should build")
}

fn write_json(dir: &tempfile::TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).expect("serialize fixture"))
        .expect("write fixture");
    path
}

#[test]
fn check_accepts_valid_users() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_json(
        &dir,
        "users.json",
        &json!([
            { "id": "u1", "displayName": "A", "eppn": "a@x.org", "lastModified": "2024-01-01T00:00:00Z" },
            { "id": "u2", "displayName": "B", "eppn": "b@x.org", "lastModified": "2024-01-02T00:00:00Z",
              "role": [ { "r1": "contributor" } ] }
        ]),
    );

    fedhub()
        .args(["check", file.to_str().expect("utf8 path"), "--kind", "user"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 record(s) OK"));
}

#[test]
fn check_reports_invalid_records() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_json(
        &dir,
        "users.json",
        &json!([
            { "id": "u1", "displayName": "A", "eppn": "", "lastModified": "2024-01-01T00:00:00Z" },
            { "id": "u2", "displayName": "B", "eppn": "b@x.org", "lastModified": "2024-01-02T00:00:00Z" }
        ]),
    );

    fedhub()
        .args(["check", file.to_str().expect("utf8 path"), "--kind", "user"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("record 0"))
        .stdout(predicate::str::contains("user.eppn"));
}

#[test]
fn check_rejects_enum_violations_in_groups() {
    let dir = tempfile::tempdir().expect("temp dir");
    let file = write_json(
        &dir,
        "groups.json",
        &json!([
            { "id": "g1", "displayName": "G", "isPublic": true,
              "joinCondition": "locked", "memberVisibility": "public" }
        ]),
    );

    fedhub()
        .args(["check", file.to_str().expect("utf8 path"), "--kind", "group"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("locked"));
}

#[test]
fn snapshot_strict_turns_warnings_into_failures() {
    let dir = tempfile::tempdir().expect("temp dir");
    let snapshot = json!({
        "repositories": [
            { "id": "r1", "displayName": "Repo", "url": "https://x/r1", "entityIds": "", "suspended": false }
        ],
        "groups": [],
        "users": [
            { "id": "u1", "displayName": "A", "eppn": "a@x.org", "lastModified": "2024-01-01T00:00:00Z",
              "role": [ { "ghost": "admin" } ] }
        ]
    });
    let file = write_json(&dir, "snapshot.json", &snapshot);

    // Warnings alone do not fail a run...
    fedhub()
        .args(["snapshot", file.to_str().expect("utf8 path")])
        .assert()
        .success()
        .stdout(predicate::str::contains("unknown repository `ghost`"));

    // ...unless strict mode is requested.
    fedhub()
        .args(["snapshot", file.to_str().expect("utf8 path"), "--strict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("referential warning"));
}

#[test]
fn config_summary_prints_builtin_defaults() {
    fedhub()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("default locale: ja"))
        .stdout(predicate::str::contains("collection help <- 1.help/**/*"));
}

#[test]
fn missing_input_file_is_an_error() {
    fedhub()
        .args(["check", "/nonexistent/users.json", "--kind", "user"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
