//! Integration tests for init and config commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{barclock_cmd, init_venue};

#[test]
fn test_init_creates_config() {
    let temp = TempDir::new().unwrap();

    barclock_cmd()
        .arg("init")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized barclock venue"))
        .stdout(predicate::str::contains("America/New_York"));

    let config_path = temp.path().join(".barclock/config.toml");
    let content = fs::read_to_string(config_path).unwrap();
    assert!(content.contains("name = \"Revival\""));
    assert!(content.contains("timezone = \"America/New_York\""));
    assert!(content.contains("[hours.friday]"));
    assert!(content.contains("close = \"02:00\""));
}

#[test]
fn test_init_with_name_and_timezone() {
    let temp = TempDir::new().unwrap();

    barclock_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--name")
        .arg("Side Door")
        .arg("--timezone")
        .arg("Europe/London")
        .assert()
        .success();

    let content = fs::read_to_string(temp.path().join(".barclock/config.toml")).unwrap();
    assert!(content.contains("name = \"Side Door\""));
    assert!(content.contains("timezone = \"Europe/London\""));
}

#[test]
fn test_init_unknown_timezone_fails() {
    let temp = TempDir::new().unwrap();

    barclock_cmd()
        .arg("init")
        .arg(temp.path())
        .arg("--timezone")
        .arg("Mars/Olympus")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown timezone"));

    assert!(!temp.path().join(".barclock").exists());
}

#[test]
fn test_init_already_initialized_fails() {
    let temp = TempDir::new().unwrap();

    init_venue(temp.path());
    barclock_cmd().arg("init").arg(temp.path()).assert().failure();
}

#[test]
fn test_config_get_day() {
    let temp = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("friday")
        .assert()
        .success()
        .stdout(predicate::str::contains("17:00-02:00"));
}

#[test]
fn test_config_set_day() {
    let temp = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("monday")
        .arg("16:00-22:00")
        .assert()
        .success()
        .stdout(predicate::str::contains("Set monday = 16:00-22:00"));

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("monday")
        .assert()
        .success()
        .stdout(predicate::str::contains("16:00-22:00"));
}

#[test]
fn test_config_set_malformed_time_fails() {
    let temp = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("friday")
        .arg("5pm-2am")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("HH:MM"));
}

#[test]
fn test_config_list() {
    let temp = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("--list")
        .assert()
        .success()
        .stdout(predicate::str::contains("name = Revival"))
        .stdout(predicate::str::contains("monday = closed"))
        .stdout(predicate::str::contains("saturday = 17:00-02:00"));
}

#[test]
fn test_config_unknown_key_fails() {
    let temp = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(temp.path())
        .arg("config")
        .arg("created")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown config key: 'created'"));
}

#[test]
fn test_root_env_var() {
    let temp = TempDir::new().unwrap();
    let other = TempDir::new().unwrap();
    init_venue(temp.path());

    barclock_cmd()
        .current_dir(other.path())
        .env("BARCLOCK_ROOT", temp.path())
        .arg("config")
        .arg("name")
        .assert()
        .success()
        .stdout(predicate::str::contains("Revival"));
}

#[test]
fn test_outside_venue_fails() {
    let temp = TempDir::new().unwrap();

    barclock_cmd()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("barclock init"));
}
