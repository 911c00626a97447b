// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the vreg binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::TempDir;

const CONFIG: &str = r#"
language = "en"

[formats]
slug = "^[a-z0-9-]+$"

[locales.en]
required = "{{ title }} is required"

[locales.zh-CN]
required = "{{ title }}是必填字段"
"#;

fn write_config(dir: &Path, content: &str) -> std::path::PathBuf {
    let path = dir.join("vreg.toml");
    std::fs::write(&path, content).unwrap();
    path
}

fn vreg(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("vreg").unwrap();
    cmd.current_dir(dir).env_remove("VREG_LANG").env_remove("RUST_LOG");
    cmd
}

#[test]
fn message_renders_placeholders() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["message", "required", "--context", r#"{"title":"Name"}"#])
        .assert()
        .success()
        .stdout("Name is required\n");
}

#[test]
fn message_uses_lang_override() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--lang", "zh", "message", "required", "--context", r#"{"title":"姓名"}"#])
        .assert()
        .success()
        .stdout("姓名是必填字段\n");
}

#[test]
fn message_falls_back_to_pattern() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["message", "no-such-key"])
        .assert()
        .success()
        .stdout("This field does not match the expected pattern\n");
}

#[test]
fn message_reports_missing_without_presets() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), "presets = false");

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["message", "required"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No message registered for 'required'"));
}

#[test]
fn message_rejects_bad_context() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["message", "required", "--context", "{not json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid --context JSON"));
}

#[test]
fn message_json_output() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    let output = vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "message", "required"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["language"], "en");
    assert_eq!(json["kind"], "error");
    assert_eq!(json["template"], "{{ title }} is required");
    assert_eq!(json["message"], " is required");
}

#[test]
fn message_json_reports_requested_kind() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    let output = vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "message", "required", "--kind", "success"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "success");

    let output = vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["--format", "json", "message", "no-such-key"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "error");
}

#[test]
fn locale_resolves_substring() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["locale", "zh"])
        .assert()
        .success()
        .stdout("zh-CN\n");

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["locale", "fr"])
        .assert()
        .success()
        .stdout("en\n");
}

#[test]
fn formats_lists_configured_and_builtin() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("slug"))
        .stdout(predicate::str::contains("email"));

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["formats", "slug"])
        .assert()
        .success()
        .stdout("^[a-z0-9-]+$\n");
}

#[test]
fn formats_unknown_name_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["formats", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown format: 'nope'"));
}

#[test]
fn match_exit_status() {
    let dir = TempDir::new().unwrap();
    let config = write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["match", "slug", "hello-world"])
        .assert()
        .success()
        .stdout(predicate::str::contains("matches"));

    vreg(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["match", "slug", "Hello World"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not match format 'slug'"));
}

#[test]
fn config_discovered_from_current_dir() {
    let dir = TempDir::new().unwrap();
    write_config(dir.path(), CONFIG);

    vreg(dir.path())
        .args(["formats", "slug"])
        .assert()
        .success()
        .stdout("^[a-z0-9-]+$\n");
}

#[test]
fn missing_explicit_config_fails() {
    let dir = TempDir::new().unwrap();

    vreg(dir.path())
        .args(["--config", "missing.toml", "formats"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Configuration file not found"));
}

#[test]
fn init_writes_example_config() {
    let dir = TempDir::new().unwrap();

    vreg(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created vreg.toml"));
    assert!(dir.path().join("vreg.toml").exists());

    vreg(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    vreg(dir.path()).args(["init", "--force"]).assert().success();

    vreg(dir.path())
        .args(["match", "semver", "1.2.3"])
        .assert()
        .success();
}

#[test]
fn version_prints_package_version() {
    let dir = TempDir::new().unwrap();

    vreg(dir.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "vreg {}",
            env!("CARGO_PKG_VERSION")
        )));
}
