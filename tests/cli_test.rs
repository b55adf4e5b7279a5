//! Integration tests for the ragready binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("ragready.yml"), config).unwrap();
    temp
}

const UNREACHABLE_TOOLS: &str = r#"
runtime: { program: ragready-missing-docker, args: [info] }
orchestrator: { program: ragready-missing-compose, args: [--version] }
model_server: { program: ragready-missing-ollama, args: [list] }
python: ragready-missing-python
"#;

fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    port
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("wait"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn check_json_with_unreachable_tools_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(UNREACHABLE_TOOLS);
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path()).args(["check", "--json"]);

    let output = cmd.assert().code(1).get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;

    assert_eq!(value["ready"], false);
    assert_eq!(value["checks"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[test]
fn no_subcommand_runs_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(UNREACHABLE_TOOLS);
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path());
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("Environment Validation Report"))
        .stdout(predicate::str::contains("Overall status: Setup required"))
        .stdout(predicate::str::contains("Install and start Docker"));
    Ok(())
}

#[test]
fn explicit_config_flag() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let config_path = temp.path().join("custom.yml");
    fs::write(&config_path, UNREACHABLE_TOOLS)?;

    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.arg("--config").arg(&config_path).args(["config", "--json"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ragready-missing-docker"));
    Ok(())
}

#[test]
fn missing_explicit_config_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.arg("--config")
        .arg(temp.path().join("nope.yml"))
        .arg("check");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration not found"));
    Ok(())
}

#[test]
fn wait_against_closed_port_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let port = closed_port().to_string();
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path()).args([
        "wait",
        "--host",
        "127.0.0.1",
        "--port",
        &port,
        "--max-attempts",
        "2",
        "--delay",
        "0",
        "--request-timeout",
        "1",
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("not ready after 2 attempts"));
    Ok(())
}

#[test]
fn wait_with_invalid_attempts_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path())
        .args(["wait", "--max-attempts", "0"]);
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("max_attempts"));
    Ok(())
}

#[test]
fn config_schema_is_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.args(["config", "--schema"]);
    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output)?;
    assert!(value["properties"]["service"].is_object());
    Ok(())
}

#[test]
fn completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.args(["completions", "bash"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ragready"));
    Ok(())
}

#[test]
fn unknown_subcommand_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.arg("deploy");
    cmd.assert().failure();
    Ok(())
}

#[test]
fn quiet_check_prints_verdict_and_hints_only() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(UNREACHABLE_TOOLS);

    let full = Command::new(cargo_bin("ragready"))
        .current_dir(temp.path())
        .arg("check")
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let quiet = Command::new(cargo_bin("ragready"))
        .current_dir(temp.path())
        .args(["-q", "check"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Overall status: Setup required"))
        .stdout(predicate::str::contains("Install and start Docker"))
        .stdout(predicate::str::contains("Environment Validation Report").not())
        .stdout(predicate::str::contains("Docker daemon running").not())
        .get_output()
        .stdout
        .clone();

    assert!(quiet.len() < full.len());
    Ok(())
}

#[test]
fn wait_with_invalid_service_section_exits_two() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("service:\n  max_attempts: 0\n");
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path()).arg("wait");
    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("max_attempts must be at least 1"));
    Ok(())
}

#[test]
fn wait_flags_override_invalid_service_section() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("service:\n  max_attempts: 0\n");
    let port = closed_port().to_string();
    let mut cmd = Command::new(cargo_bin("ragready"));
    cmd.current_dir(temp.path()).args([
        "wait",
        "--host",
        "127.0.0.1",
        "--port",
        &port,
        "--max-attempts",
        "1",
        "--delay",
        "0",
        "--request-timeout",
        "1",
    ]);
    cmd.assert()
        .code(1)
        .stdout(predicate::str::contains("not ready after 1 attempts"));
    Ok(())
}
