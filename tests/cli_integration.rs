//! Testes de integração para a CLI do Scenarist.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const SCENARIOS: &str = r#"
[[scenario]]
name = "Test Case 1"
steps = ["open browser", "navigate to page", "click login"]

[[scenario]]
name = "Test Case 2"
steps = ["open browser", "navigate to page", "fill form"]

[[scenario]]
name = "Test Case 3"
steps = ["open browser", "navigate to page", "click login"]
"#;

fn scenarist_bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_scenarist"))
}

fn scenario_file(content: &str) -> (TempDir, std::path::PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("scenarios.toml");
    std::fs::write(&path, content).expect("Failed to write scenarios");
    (temp_dir, path)
}

#[test]
fn test_version_command() {
    scenarist_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("scenarist"));
}

#[test]
fn test_help_command() {
    let output = scenarist_bin()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for command in ["init", "check", "find", "export", "square", "interactive"] {
        assert!(stdout.contains(command), "missing command {}", command);
    }
}

#[test]
fn test_check_reports_equivalent() {
    let (_temp_dir, path) = scenario_file(SCENARIOS);

    scenarist_bin()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Test Case 3 - registered, same steps as: Test Case 1",
        ))
        .stdout(predicate::str::contains(
            "3 registered, 1 with equivalents, 0 conflicts",
        ));
}

#[test]
fn test_check_reject_policy_fails() {
    let (_temp_dir, path) = scenario_file(SCENARIOS);

    scenarist_bin()
        .arg("check")
        .arg(&path)
        .arg("--policy")
        .arg("reject")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Test Case 3 - rejected"));
}

#[test]
fn test_check_duplicate_name_fails() {
    let (_temp_dir, path) = scenario_file(
        r#"
        [[scenario]]
        name = "A"
        steps = ["x", "y"]

        [[scenario]]
        name = "A"
        steps = ["x", "y"]
        "#,
    );

    scenarist_bin()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("A - duplicate name"));
}

#[test]
fn test_find_command() {
    let (_temp_dir, path) = scenario_file(SCENARIOS);

    scenarist_bin()
        .arg("find")
        .arg(&path)
        .args(["--step", "click login"])
        .args(["--step", "open browser"])
        .args(["--step", "navigate to page"])
        .assert()
        .success()
        .stdout(predicate::str::contains("- Test Case 1"))
        .stdout(predicate::str::contains("- Test Case 3"))
        .stdout(predicate::str::contains("Test Case 2").not());
}

#[test]
fn test_find_without_match() {
    let (_temp_dir, path) = scenario_file(SCENARIOS);

    scenarist_bin()
        .arg("find")
        .arg(&path)
        .args(["--step", "logout"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No equivalent scenario found."));
}

#[test]
fn test_export_command() {
    let (temp_dir, path) = scenario_file(SCENARIOS);
    let output = temp_dir.path().join("registry.json");

    scenarist_bin()
        .arg("export")
        .arg(&path)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let json = std::fs::read_to_string(&output).expect("Failed to read export");
    assert!(json.contains("\"version\": \"1.0\""));
    assert!(json.contains("Test Case 3"));
}

#[test]
fn test_square_command() {
    scenarist_bin()
        .args(["square", "5", "5", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5 -> 25 (computed)"))
        .stdout(predicate::str::contains("5 -> 25 (cached)"))
        .stdout(predicate::str::contains("1 hits, 2 misses"));
}

#[test]
fn test_square_invalid_input_fails() {
    scenarist_bin()
        .args(["square", "-3", "abc"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("-3 -> 9 (computed)"))
        .stdout(predicate::str::contains("abc -> error"));
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("scenarist.toml");

    scenarist_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success();

    assert!(config_path.exists(), "Config file was not created");
    let content = std::fs::read_to_string(&config_path).expect("Failed to read config");
    assert!(content.contains("[general]"));
    assert!(content.contains("[registry]"));
    assert!(content.contains("equivalence_policy = \"allow\""));
}

#[test]
fn test_config_policy_used_by_check() {
    let (temp_dir, path) = scenario_file(SCENARIOS);
    let config_path = temp_dir.path().join("strict.toml");
    std::fs::write(
        &config_path,
        "[registry]\nequivalence_policy = \"reject\"\n",
    )
    .expect("Failed to write config");

    scenarist_bin()
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("policy: reject"));
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let (temp_dir, path) = scenario_file(SCENARIOS);
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[general]\nlog_format = \"xml\"\n")
        .expect("Failed to write config");

    scenarist_bin()
        .arg("--config")
        .arg(&config_path)
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("policy: allow"))
        .stderr(predicate::str::contains("Invalid configuration"));
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    scenarist_bin()
        .arg("--config")
        .arg(temp_dir.path().join("absent.toml"))
        .arg("version")
        .assert()
        .success()
        .stderr(predicate::str::contains("Invalid configuration").not());
}

#[test]
fn test_invalid_command() {
    scenarist_bin()
        .arg("invalid-command-that-does-not-exist")
        .assert()
        .failure();
}

#[test]
fn test_quiet_flag() {
    scenarist_bin().arg("-q").arg("version").assert().success();
}
