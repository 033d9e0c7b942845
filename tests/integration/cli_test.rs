//! Integration tests for the command line

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{batcomputer, write_file, TEST_PROFILE};

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("config"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn run_help_prints_command_box() {
    let home = TempDir::new().unwrap();
    let assert = batcomputer(&home)
        .args(["run", "help", "--format", "plain"])
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 11);
    assert!(lines[0].starts_with("┌─ AVAILABLE COMMANDS"));
    assert!(lines[10].starts_with("└"));
    assert!(stdout.contains("whoami"));
}

#[test]
fn run_unknown_command_exits_zero_with_message() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .args(["run", "xyz123", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Command not found: \"xyz123\""));
}

#[test]
fn run_is_case_insensitive_and_joins_words() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .args(["run", "WhoAmI", "--format", "plain"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("> IDENTITY: BRUCE WAYNE"));
}

#[test]
fn run_defaults_to_plain_when_piped() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .args(["run", "status"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CHECKING AVAILABILITY"))
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn run_json_describes_dispatch() {
    let home = TempDir::new().unwrap();
    let assert = batcomputer(&home)
        .args(["run", "skills", "--format", "json"])
        .assert()
        .success();

    let value: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(value["command"], "skills");
    assert_eq!(value["found"], true);
    assert_eq!(value["lines"][0]["style"], "yellow");
}

#[test]
fn run_uses_profile_override() {
    let home = TempDir::new().unwrap();
    let profile = write_file(home.path(), "profile.toml", TEST_PROFILE);

    batcomputer(&home)
        .args(["run", "whoami", "--format", "plain", "--profile"])
        .arg(&profile)
        .assert()
        .success()
        .stdout(predicate::str::contains("BARBARA GORDON"))
        .stdout(predicate::str::contains("BRUCE WAYNE").not());
}

#[test]
fn missing_profile_override_fails() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .args(["run", "whoami", "--profile"])
        .arg(home.path().join("nope.toml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile"));
}

#[test]
fn config_path_honors_override() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.toml");

    batcomputer(&home)
        .args(["config", "path", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"));
}

#[test]
fn config_init_then_show_round_trips() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("nested").join("config.toml");

    batcomputer(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .success();
    assert!(path.exists());

    batcomputer(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("line_interval_ms = 40"))
        .stdout(predicate::str::contains("theme = \"gotham\""));
}

#[test]
fn config_init_refuses_to_overwrite() {
    let home = TempDir::new().unwrap();
    let path = write_file(home.path(), "config.toml", "[ui]\ntheme = \"classic\"\n");

    batcomputer(&home)
        .args(["config", "init", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    assert!(std::fs::read_to_string(&path).unwrap().contains("classic"));
}

#[test]
fn invalid_config_is_reported() {
    let home = TempDir::new().unwrap();
    let path = write_file(home.path(), "config.toml", "[console\n");

    batcomputer(&home)
        .args(["config", "show", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn completions_generate_for_bash() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("batcomputer"));
}

#[test]
fn launching_without_terminal_fails_cleanly() {
    let home = TempDir::new().unwrap();
    batcomputer(&home)
        .assert()
        .failure()
        .stderr(predicate::str::contains("batcomputer run"));
}
