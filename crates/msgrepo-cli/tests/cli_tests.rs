use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tempfile::TempDir;

static PROJECT_DIR: LazyLock<PathBuf> =
    LazyLock::new(|| Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/project"));

fn msgrepo() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("msgrepo");
    cmd.current_dir(&*PROJECT_DIR)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn check_loads_configured_resources() {
    msgrepo()
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("Loaded core"))
        .stdout(predicate::str::contains("No issues found!"));
}

#[test]
fn check_named_resources_reports_duplicate_code() {
    msgrepo()
        .args(["check", "core", "conflict"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed conflict"))
        .stderr(predicate::str::contains("1001"));
}

#[test]
fn check_reports_syntax_errors_with_source() {
    msgrepo()
        .args(["check", "broken"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse catalog resource 'broken'"));
}

#[test]
fn check_missing_resource_fails() {
    msgrepo()
        .args(["check", "absent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent"));
}

#[test]
fn list_prints_definitions_and_locales() {
    msgrepo()
        .args(["list", "--resource", "extra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PARAMETER_NULL"))
        .stdout(predicate::str::contains("localized-string"))
        .stdout(predicate::str::contains("de_CH"))
        .stdout(predicate::str::contains("DISK_LOW"));
}

#[test]
fn render_resolves_locale_and_parameters() {
    msgrepo()
        .args(["render", "1001", "--locale", "de_AT", "--param", "pObject"])
        .assert()
        .success()
        .stdout("Parameter 'pObject' darf nicht null sein.\n");

    msgrepo()
        .args(["render", "1003", "--locale", "de_CH_EURO"])
        .assert()
        .success()
        .stdout("Abbrechen\n");
}

#[test]
fn render_uses_configured_default_locale() {
    msgrepo()
        .args(["render", "1003"])
        .assert()
        .success()
        .stdout("Cancel\n");
}

#[test]
fn render_unknown_id_fails() {
    msgrepo()
        .args(["render", "9999"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("9999"));
}

#[test]
fn trace_prints_fixed_layout() {
    msgrepo()
        .args(["trace", "1003"])
        .assert()
        .success()
        .stdout("[   1003] Cancel\n");

    msgrepo()
        .args(["trace", "1003", "--user", "alice", "--locale", "de_CH"])
        .assert()
        .success()
        .stdout("[   1003] alice               Abbrechen\n");
}

#[test]
fn trace_unknown_id_still_succeeds() {
    msgrepo()
        .args(["trace", "9999999"])
        .assert()
        .success()
        .stdout("[9999999] Unable to return real message. ID is unknown\n");
}

#[test]
fn search_path_flag_replaces_config() {
    let empty = TempDir::new().unwrap();
    msgrepo()
        .current_dir(empty.path())
        .args(["render", "3001", "--resource", "extra", "--param", "5"])
        .arg("--search-path")
        .arg(PROJECT_DIR.join("catalogs"))
        .assert()
        .success()
        .stdout("Disk space below 5%.\n");
}

#[test]
fn missing_config_has_help() {
    let empty = TempDir::new().unwrap();
    msgrepo()
        .current_dir(empty.path())
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("msgrepo.toml configuration file not found"));
}

#[test]
fn generate_writes_constants_once() {
    let out_dir = TempDir::new().unwrap();
    let output = out_dir.path().join("codes.rs");

    msgrepo()
        .args(["generate", "core", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Generated"));

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains(
        "pub const PARAMETER_NULL: ErrorCode = ErrorCode::new(1001, TraceLevel::Error);"
    ));
    assert!(content.contains("pub const CANCEL: LocalizedString = LocalizedString::new(1003);"));

    msgrepo()
        .args(["generate", "core", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Unchanged"));
}
