use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn intercom_cmd() -> Command {
    Command::cargo_bin("intercom").expect("binary exists")
}

#[test]
fn intercom_help_prints_usage() {
    intercom_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Fullscreen touch whiteboard for Wayland compositors",
        ))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn version_includes_package_version() {
    intercom_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn requires_wayland_env() {
    let temp = TempDir::new().unwrap();

    intercom_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .env("XDG_CONFIG_HOME", temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("WAYLAND_DISPLAY not set"));
}

#[test]
fn missing_explicit_config_is_an_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    intercom_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--config")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read config"));
}

#[test]
fn malformed_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    std::fs::write(&path, "[buttons\nstrip_width = 10").unwrap();

    intercom_cmd()
        .env_remove("WAYLAND_DISPLAY")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse config"));
}

#[test]
fn unknown_argument_is_rejected() {
    intercom_cmd()
        .arg("--daemon")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn schema_dump_is_json() {
    let output = Command::cargo_bin("dump_config_schema")
        .expect("binary exists")
        .output()
        .unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(schema["properties"]["buttons"].is_object());
}
