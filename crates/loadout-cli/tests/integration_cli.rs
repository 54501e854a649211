//! End-to-end tests for the `loadout` binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn loadout() -> Command {
    let mut cmd = Command::cargo_bin("loadout").expect("binary");
    // Keep the host environment out of mode resolution.
    cmd.env_remove("BUILD_MODE")
        .env_remove("RELOAD_MODE")
        .env_remove("RUST_LOG");
    cmd
}

fn write_project(dir: &Path) {
    fs::write(
        dir.join("package.json"),
        r#"{ "name": "example", "loadout": { "client": "modules/client.js" } }"#,
    )
    .expect("write manifest");
    fs::write(dir.join(".transformrc"), r#"{ "presets": ["react"] }"#).expect("write presets");
}

fn root_arg(dir: &TempDir) -> String {
    dir.path().display().to_string()
}

#[test]
fn resolve_emits_production_config() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path());

    let output = loadout()
        .args(["resolve", "--root", &root_arg(&dir), "--mode", "production"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(config["source_map"], "source-map");
    assert_eq!(config["output"]["filename"], "[hash:8]");
    assert!(config.get("dev_server").is_none());
}

#[test]
fn resolve_honors_reload_flag() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path());

    let output = loadout()
        .args(["resolve", "--root", &root_arg(&dir), "--reload", "hot", "--pretty"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(config["dev_server"]["hot"], true);
    let vendor = config["entry"]["_vendor"].as_array().expect("vendor entry");
    assert!(vendor[0]
        .as_str()
        .expect("module id")
        .starts_with("loadout/dev-server/client?"));
}

#[test]
fn resolve_reads_mode_from_environment() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path());

    let output = loadout()
        .env("BUILD_MODE", "production")
        .args(["resolve", "--root", &root_arg(&dir)])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let config: serde_json::Value = serde_json::from_slice(&output).expect("json output");
    assert_eq!(config["output"]["filename"], "[hash:8]");
}

#[test]
fn unrecognized_environment_mode_is_rejected() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path());

    loadout()
        .env("BUILD_MODE", "prod")
        .args(["resolve", "--root", &root_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn unrecognized_mode_flag_is_rejected() {
    loadout()
        .args(["resolve", "--mode", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn hot_resolve_fails_without_preset_file() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("package.json"),
        r#"{ "name": "example", "loadout": { "client": "modules/client.js" } }"#,
    )
    .expect("write manifest");

    loadout()
        .args(["resolve", "--root", &root_arg(&dir), "--reload", "hot"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(".transformrc"));
}

#[test]
fn check_fails_without_manifest() {
    let dir = TempDir::new().expect("tempdir");

    loadout()
        .args(["check", "--root", &root_arg(&dir)])
        .assert()
        .failure()
        .stderr(predicate::str::contains("manifest"));
}

#[test]
fn check_reports_ok_for_complete_project() {
    let dir = TempDir::new().expect("tempdir");
    write_project(dir.path());

    loadout()
        .args(["check", "--root", &root_arg(&dir), "--reload", "hot"])
        .assert()
        .success()
        .stdout(predicate::str::contains("client entry: modules/client.js"))
        .stdout(predicate::str::contains("ok"));
}
