#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

pub fn barclock_cmd() -> Command {
    let mut cmd = Command::cargo_bin("barclock").unwrap();
    cmd.env_remove("BARCLOCK_ROOT");
    cmd.env_remove("BARCLOCK_LOG");
    cmd
}

/// Initialize a demo venue in `dir`
pub fn init_venue(dir: &Path) {
    barclock_cmd().arg("init").arg(dir).assert().success();
}

/// Write a venue config file at `dir/.barclock/config.toml`
pub fn write_config(dir: &Path, contents: &str) {
    let config_dir = dir.join(".barclock");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), contents).unwrap();
}
