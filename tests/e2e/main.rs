//! End-to-end tests driving the `rv` binary

mod cli_basic;
mod cli_rename;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use tempfile::TempDir;

/// `rv` with config and log directories redirected into `home`
pub fn rv(home: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rv");
    cmd.env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join("config"))
        .env("XDG_DATA_HOME", home.path().join("data"))
        .env_remove("RENVIEW_LOG");
    cmd
}
