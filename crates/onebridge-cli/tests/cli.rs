//! End-to-end tests for the `onebridge` binary.
//!
//! Every command runs against an isolated config path so the user's own
//! configuration never leaks into results.

use anyhow::Result;
use assert_cmd::cargo::cargo_bin_cmd;
use onebridge_testing::SampleFiles;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use serde_json::Value;
use std::path::Path;
use tempfile::TempDir;

fn onebridge(config_path: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("onebridge");
    cmd.env_remove("RUST_LOG")
        .env_remove("ONEBRIDGE_CONFIG")
        .arg("--config")
        .arg(config_path);
    cmd
}

fn stdout_json(output: &std::process::Output) -> Result<Value> {
    Ok(serde_json::from_slice(&output.stdout)?)
}

#[test]
fn test_convert_sample_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let samples = SampleFiles::new();

    let output = onebridge(&temp_dir.path().join("config.toml"))
        .arg("convert")
        .arg(samples.path("message_text_private.json"))
        .output()?;
    assert!(output.status.success());

    let event = stdout_json(&output)?;
    assert_eq!(event["type"], "message");
    assert_eq!(event["detail_type"], "private");
    assert_eq!(event["alt_message"], "你好");
    assert_eq!(event["yunhu_raw"], samples.load("message_text_private.json")?);

    Ok(())
}

#[test]
fn test_convert_stdin_compact() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let raw = SampleFiles::new().load("group_join.json")?;

    let output = onebridge(&temp_dir.path().join("config.toml"))
        .args(["convert", "-", "--compact"])
        .write_stdin(raw.to_string())
        .output()?;
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout.clone())?;
    assert_eq!(stdout.trim_end().lines().count(), 1);
    assert_eq!(stdout_json(&output)?["detail_type"], "group_member_increase");

    Ok(())
}

#[test]
fn test_convert_unsupported_prints_nothing() -> Result<()> {
    let temp_dir = TempDir::new()?;

    onebridge(&temp_dir.path().join("config.toml"))
        .arg("convert")
        .arg(SampleFiles::new().path("unsupported_event.json"))
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("message.recall"));

    Ok(())
}

#[test]
fn test_convert_rejects_malformed_input() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");

    onebridge(&config_path)
        .arg("convert")
        .write_stdin("{not json")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Error: Input is not valid JSON"));

    onebridge(&config_path)
        .arg("convert")
        .write_stdin(r#"{"header": {}, "event": {}}"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing header.eventType"));

    Ok(())
}

#[test]
fn test_command_form_flag_and_config() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");
    let sample = SampleFiles::new().path("instruction_form.json");

    let output = onebridge(&config_path)
        .arg("convert")
        .arg(&sample)
        .output()?;
    let event = stdout_json(&output)?;
    assert!(event["yunhu_command"].get("form").is_none());
    assert!(event["yunhu_command_form"].is_object());

    let output = onebridge(&config_path)
        .arg("convert")
        .arg(&sample)
        .args(["--command-form", "nested"])
        .output()?;
    let event = stdout_json(&output)?;
    assert!(event["yunhu_command"]["form"].is_object());
    assert!(event.get("yunhu_command_form").is_none());

    std::fs::write(&config_path, "[convert]\ncommand_form = \"nested\"\n")?;
    let output = onebridge(&config_path)
        .arg("convert")
        .arg(&sample)
        .output()?;
    let event = stdout_json(&output)?;
    assert!(event["yunhu_command"]["form"].is_object());

    Ok(())
}

#[test]
fn test_classify() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");

    let output = onebridge(&config_path)
        .args(["classify", "group.join"])
        .output()?;
    assert!(output.status.success());

    let spec = stdout_json(&output)?;
    assert_eq!(spec["type"], "notice");
    assert_eq!(spec["detail_type"], "group_member_increase");
    assert_eq!(spec["sub_type"], "invite");

    onebridge(&config_path)
        .args(["classify", "message.receive.normal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("private|group"));

    onebridge(&config_path)
        .args(["classify", "message.recall"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Unsupported yunhu event type: message.recall",
        ));

    Ok(())
}

#[test]
fn test_providers_and_unknown_provider() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("config.toml");

    onebridge(&config_path)
        .args(["providers", "--events"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yunhu"))
        .stdout(predicate::str::contains("bot.shortcut.menu"));

    onebridge(&config_path)
        .args(["classify", "group.join", "--provider", "qq"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown provider: qq"));

    Ok(())
}

#[test]
fn test_config_init() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let config_path = temp_dir.path().join("onebridge").join("config.toml");

    onebridge(&config_path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"));

    onebridge(&config_path)
        .args(["config", "--init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote default config"));
    assert!(config_path.exists());

    onebridge(&config_path)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("command_form = \"separate\""));

    Ok(())
}
