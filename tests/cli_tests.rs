//! End-to-end tests of the fsstatus binary against mock images.

mod helpers;

use helpers::{create_mock_image, TestEnv};
use std::process::{Command, Output};

fn fsstatus(env: &TestEnv, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fsstatus"))
        .arg("--root")
        .arg(&env.root)
        .args(args)
        .current_dir(env._temp_dir.path())
        .env_remove("FSSTATUS_ROOT")
        .env_remove("FSSTATUS_MENDER_BIN")
        .env_remove("FSSTATUS_LOG")
        .output()
        .expect("Failed to run fsstatus")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_cli_fs_version() {
    let env = TestEnv::new();
    create_mock_image(&env);

    let output = fsstatus(&env, &["fs-version"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "20240315123456\n");
}

#[test]
fn test_cli_missing_file_prints_sentinel() {
    let env = TestEnv::new();

    for command in ["fs-version", "opkg-date", "opkg-checksum", "artifact"] {
        let output = fsstatus(&env, &[command]);
        assert!(output.status.success(), "{} failed", command);
        assert_eq!(stdout(&output), "FILE NOT FOUND\n", "{}", command);
    }
}

#[test]
fn test_cli_artifact_key_missing() {
    let env = TestEnv::new();
    env.write("etc/mender/artifact_info", "device_type=e320\n");

    let output = fsstatus(&env, &["artifact"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "(none)\n");
}

#[test]
fn test_cli_opkg_date_only() {
    let env = TestEnv::new();
    create_mock_image(&env);

    assert_eq!(stdout(&fsstatus(&env, &["opkg-date", "--date-only"])), "2020-09-13\n");
    assert_eq!(stdout(&fsstatus(&env, &["opkg-date"])), "2020-09-13 12:26:40\n");
}

#[test]
fn test_cli_report_json() {
    let env = TestEnv::new();
    create_mock_image(&env);

    let output = fsstatus(&env, &["report", "--json", "--date-only"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(value["uhd_version"].is_null());
    assert_eq!(value["mender_artifact"], "release-v2.3");
    assert_eq!(value["fs_version"], "20240315123456");
    assert_eq!(value["opkg_status_date"], "2020-09-13");
    assert_eq!(value["opkg_status_checksum"].as_str().unwrap().len(), 64);
}

#[test]
fn test_cli_report_text() {
    let env = TestEnv::new();
    create_mock_image(&env);

    let output = fsstatus(&env, &["report"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Mender artifact:   release-v2.3"));
    assert!(text.contains("not queried for image roots"));
}

#[test]
fn test_cli_uhd_version_missing_tool_fails() {
    let env = TestEnv::new();

    let output = fsstatus(&env, &["uhd-version"]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("uhd_config_info"));
}

