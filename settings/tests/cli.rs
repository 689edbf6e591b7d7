//! CLI tests for `settings resolve`.
//!
//! Spawns the settings binary and verifies the hard-failure path and the
//! JSON record printed on success.

use std::fs;
use std::process::Command;

#[test]
fn resolve_without_modules_fails_and_names_the_collector() {
    let output = Command::new(env!("CARGO_BIN_EXE_settings"))
        .arg("resolve")
        .output()
        .expect("settings resolve");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("linecov collector"),
        "stderr must name the collector: {stderr}"
    );
}

#[test]
fn resolve_without_config_prints_default_record() {
    let output = Command::new(env!("CARGO_BIN_EXE_settings"))
        .args(["resolve", "/tests/mod.dll"])
        .output()
        .expect("settings resolve");

    assert!(output.status.success());
    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(record["test_module"], "/tests/mod.dll");
    assert_eq!(record["report_formats"], serde_json::json!(["json"]));
    assert_eq!(record["single_hit"], serde_json::json!(false));
}

#[test]
fn resolve_with_config_applies_the_tree() {
    let temp = tempfile::tempdir().expect("tempdir");
    let config_path = temp.path().join("run.json");
    fs::write(
        &config_path,
        r#"{"Format": "lcov", "Exclude": "A, B", "UseSourceLink": "true"}"#,
    )
    .expect("write config");

    let output = Command::new(env!("CARGO_BIN_EXE_settings"))
        .arg("resolve")
        .arg("--config")
        .arg(&config_path)
        .args(["/tests/first.dll", "/tests/second.dll"])
        .output()
        .expect("settings resolve");

    assert!(output.status.success());
    let record: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout must be JSON");
    assert_eq!(record["test_module"], "/tests/first.dll");
    assert_eq!(record["report_formats"], serde_json::json!(["lcov"]));
    assert_eq!(
        record["exclude_filters"],
        serde_json::json!(["[linecov.*]*", "A", "B"])
    );
    assert_eq!(record["use_source_link"], serde_json::json!(true));
}

#[test]
fn resolve_with_unreadable_config_fails() {
    let temp = tempfile::tempdir().expect("tempdir");
    let missing = temp.path().join("absent.json");

    let output = Command::new(env!("CARGO_BIN_EXE_settings"))
        .arg("resolve")
        .arg("--config")
        .arg(&missing)
        .arg("/tests/mod.dll")
        .output()
        .expect("settings resolve");

    assert_eq!(output.status.code(), Some(1));
}
