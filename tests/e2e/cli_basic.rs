//! Help, version and argument errors

use predicates::prelude::*;
use tempfile::TempDir;

use crate::rv;

#[test]
fn help_flag_shows_usage() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"))
        .stdout(predicate::str::contains("rv rename"));
}

#[test]
fn help_short_flag_shows_usage() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("USAGE:"));
}

#[test]
fn version_flag_shows_version() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg("-V")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unknown_option_is_invalid() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg("--frobnicate")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Unknown option: --frobnicate"));
}

#[test]
fn missing_browse_root_is_invalid() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg(home.path().join("nowhere"))
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn rename_without_pattern_is_invalid() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .args(["rename", "."])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("rename requires <PATH> and <PATTERN>"));
}

#[test]
fn yes_without_rename_is_invalid() {
    let home = TempDir::new().unwrap();
    rv(&home).arg("--yes").assert().code(3);
}
