//! The non-interactive `rename` command

use std::fs;
use std::path::Path;

use predicates::prelude::*;
use tempfile::TempDir;

use crate::rv;

fn photos(extra: &[&str]) -> TempDir {
    let temp = TempDir::new().unwrap();
    for name in ["IMG_001", "IMG_002", "Vacation"].iter().chain(extra) {
        fs::create_dir(temp.path().join(name)).unwrap();
    }
    fs::write(temp.path().join("IMG_003.jpg"), "jpeg").unwrap();
    temp
}

fn is_dir(dir: &TempDir, name: &str) -> bool {
    Path::new(&dir.path().join(name)).is_dir()
}

#[test]
fn rename_with_yes_applies() {
    let home = TempDir::new().unwrap();
    let dir = photos(&[]);
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .args(["^IMG_", "", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  IMG_001 -> 001"))
        .stdout(predicate::str::contains("= Vacation"))
        .stdout(predicate::str::contains("Renamed 2, failed 0, skipped 1"));

    assert!(is_dir(&dir, "001"));
    assert!(is_dir(&dir, "002"));
    assert!(is_dir(&dir, "Vacation"));
    // Files are never renamed
    assert!(dir.path().join("IMG_003.jpg").is_file());
}

#[test]
fn rename_reads_confirmation_from_stdin() {
    let home = TempDir::new().unwrap();
    let dir = photos(&[]);
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .args(["IMG_(\\d+)", "photo-$1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Apply 2 renames? [y/N]"));

    assert!(is_dir(&dir, "photo-001"));
    assert!(is_dir(&dir, "photo-002"));
}

#[test]
fn rename_declined_changes_nothing() {
    let home = TempDir::new().unwrap();
    let dir = photos(&[]);
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .arg("^IMG_")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Aborted"));

    assert!(is_dir(&dir, "IMG_001"));
    assert!(!is_dir(&dir, "001"));
}

#[test]
fn rename_literal_mode() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("a.b.c")).unwrap();
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .args([".", "-", "--literal", "-y"])
        .assert()
        .success();

    assert!(is_dir(&dir, "a-b-c"));
}

#[test]
fn rename_conflict_exits_with_failure() {
    let home = TempDir::new().unwrap();
    let dir = photos(&["001"]);
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .args(["^IMG_", "", "-y"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("! IMG_001 -> 001 (target exists)"))
        .stdout(predicate::str::contains("Renamed 1, failed 1, skipped 2"))
        .stderr(predicate::str::contains("target '001' already exists"));

    assert!(is_dir(&dir, "IMG_001"));
    assert!(is_dir(&dir, "002"));
}

#[test]
fn rename_missing_path_exits_with_failure() {
    let home = TempDir::new().unwrap();
    rv(&home)
        .arg("rename")
        .arg(home.path().join("missing"))
        .args(["a", "b", "-y"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Not a directory"));
}

#[test]
fn rename_nothing_matches() {
    let home = TempDir::new().unwrap();
    let dir = photos(&[]);
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .arg("^zzz")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to rename"));
}

#[test]
fn rename_includes_hidden_folders() {
    let home = TempDir::new().unwrap();
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("IMG_1")).unwrap();
    fs::create_dir(dir.path().join(".hidden_IMG")).unwrap();
    rv(&home)
        .arg("rename")
        .arg(dir.path())
        .args(["IMG", "x", "-y"])
        .assert()
        .success()
        .stdout(predicate::str::contains("  .hidden_IMG -> .hidden_x"))
        .stdout(predicate::str::contains("Renamed 2, failed 0, skipped 0"));

    assert!(is_dir(&dir, ".hidden_x"));
    assert!(is_dir(&dir, "x_1"));
}
