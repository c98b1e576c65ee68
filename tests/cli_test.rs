mod fixtures;

use assert_cmd::Command;
use fixtures::get_test_fixture_path;
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("port-progress").unwrap()
}

#[test]
fn test_cli_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("port-progress"))
        .stdout(contains("review"))
        .stdout(contains("parity"))
        .stdout(contains("--config"));
}

#[test]
fn test_cli_missing_subcommand() {
    cmd().assert().failure();
}

#[test]
fn test_cli_review_defaults_scan_lib() {
    cmd()
        .current_dir(get_test_fixture_path("review", None))
        .arg("review")
        .assert()
        .success()
        .stdout(
            "lib/runtime/choice.dart\nlib/runtime/value.dart\nlib/story.dart (√)\nprogress: 1/3\n",
        );
}

#[test]
fn test_cli_review_exclude_override() {
    cmd()
        .current_dir(get_test_fixture_path("review", None))
        .args(["review", "--exclude", "story.dart"])
        .assert()
        .success()
        .stdout(contains("lib/ink_flutter_runtime.dart (√)"))
        .stdout(contains("lib/story.dart").not())
        .stdout(contains("progress: 1/3"));
}

#[test]
fn test_cli_review_json() {
    let root = get_test_fixture_path("review", Some("lib"));
    let output = cmd()
        .args(["review", "--root", root.to_str().unwrap(), "-f", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["reviewed"], 1);
    assert_eq!(value["total"], 3);
}

#[test]
fn test_cli_review_missing_root() {
    let temp_dir = TempDir::new().unwrap();
    cmd()
        .current_dir(temp_dir.path())
        .arg("review")
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("directory not found: lib"));
}

#[test]
fn test_cli_parity_with_paths() {
    let source = get_test_fixture_path("parity", Some("Tests.cs"));
    let target = get_test_fixture_path("parity", Some("runtime_test.dart"));

    cmd()
        .args([
            "parity",
            "--source",
            source.to_str().unwrap(),
            "--target",
            target.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(contains(r#""progress": "3 / 5 (60%)""#))
        .stdout(contains("undone tests:\nTestArithmetic\nTestTurnsSince\n"));
}

#[test]
fn test_cli_parity_from_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("port.yaml");
    let source = get_test_fixture_path("parity", Some("Tests.cs"));
    let target = get_test_fixture_path("parity", Some("runtime_test.dart"));
    fs::write(
        &config_path,
        format!(
            "parity:\n  source_suite: {}\n  target_suite: {}\n",
            source.display(),
            target.display()
        ),
    )
    .unwrap();

    cmd()
        .args(["--config", config_path.to_str().unwrap(), "parity"])
        .assert()
        .success()
        .stdout(contains(r#""marked": 3"#));
}

#[test]
fn test_cli_parity_empty_source_fails_without_output() {
    let temp_dir = TempDir::new().unwrap();
    let source = temp_dir.path().join("Tests.cs");
    let target = temp_dir.path().join("runtime_test.dart");
    fs::write(&source, "namespace Tests {}").unwrap();
    fs::write(&target, r#"test("Foo", () {});"#).unwrap();

    cmd()
        .args([
            "parity",
            "--source",
            source.to_str().unwrap(),
            "--target",
            target.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("no countable tests found"));
}

#[test]
fn test_cli_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let report_path = temp_dir.path().join("review.txt");

    cmd()
        .current_dir(get_test_fixture_path("review", None))
        .args(["review", "-O", report_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout("");

    let written = fs::read_to_string(&report_path).unwrap();
    assert!(written.ends_with("progress: 1/3\n"));
}

#[test]
fn test_cli_invalid_config_path() {
    cmd()
        .args(["--config", "/nonexistent/port.yaml", "review"])
        .assert()
        .failure()
        .stderr(contains("Invalid arguments"));
}

#[test]
fn test_cli_review_rejects_empty_extension() {
    cmd()
        .current_dir(get_test_fixture_path("review", None))
        .args(["review", "--extension", "."])
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("invalid extension '.'"));
}

#[test]
fn test_cli_review_dotted_extension_from_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("port.yaml");
    fs::write(&config_path, "review:\n  extension: .dart\n").unwrap();

    cmd()
        .current_dir(get_test_fixture_path("review", None))
        .args(["--config", config_path.to_str().unwrap(), "review"])
        .assert()
        .success()
        .stdout(contains("progress: 1/3"));
}
