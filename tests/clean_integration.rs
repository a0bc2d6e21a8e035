//! Integration tests for the clean command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

fn pyan_maint() -> Command {
    Command::cargo_bin("pyan-maint").unwrap()
}

/// Create a package tree with caches at several depths and an egg-info.
fn create_test_workspace() -> TempDir {
    let tmp = TempDir::new().unwrap();
    let root = tmp.path();

    fs::create_dir_all(root.join("pyan/__pycache__")).unwrap();
    fs::write(root.join("pyan/__init__.py"), "").unwrap();
    fs::write(root.join("pyan/pyan.py"), "def main():\n    pass\n").unwrap();
    fs::write(
        root.join("pyan/__pycache__/pyan.cpython-311.pyc"),
        "x".repeat(2000),
    )
    .unwrap();

    fs::create_dir_all(root.join("tests/fixtures/__pycache__")).unwrap();
    fs::write(root.join("tests/fixtures/__pycache__/f.pyc"), "x").unwrap();
    fs::write(root.join("tests/test_pyan.py"), "").unwrap();

    fs::create_dir_all(root.join("pyan.egg-info")).unwrap();
    fs::write(root.join("pyan.egg-info/PKG-INFO"), "Name: pyan\n").unwrap();

    fs::write(root.join("setup.py"), "from setuptools import setup\n").unwrap();

    tmp
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_clean_removes_artifacts() {
    let tmp = create_test_workspace();

    pyan_maint()
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!tmp.path().join("pyan/__pycache__").exists());
    assert!(!tmp.path().join("tests/fixtures/__pycache__").exists());
    assert!(!tmp.path().join("pyan.egg-info").exists());

    // Source files should remain
    assert!(tmp.path().join("pyan/pyan.py").exists());
    assert!(tmp.path().join("pyan/__init__.py").exists());
    assert!(tmp.path().join("tests/test_pyan.py").exists());
    assert!(tmp.path().join("setup.py").exists());
}

#[test]
fn test_clean_is_idempotent() {
    let tmp = create_test_workspace();

    pyan_maint()
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success();
    let after_first = listing(tmp.path());

    pyan_maint()
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success();

    assert_eq!(listing(tmp.path()), after_first);
}

#[test]
fn test_clean_tree_is_noop() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("pyan")).unwrap();
    fs::write(tmp.path().join("pyan/pyan.py"), "").unwrap();
    let before = listing(tmp.path());

    pyan_maint()
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success();

    assert_eq!(listing(tmp.path()), before);
}

#[test]
fn test_configured_package_name() {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("pkg/__pycache__")).unwrap();
    fs::write(tmp.path().join("pkg/__pycache__/x.pyc"), "x").unwrap();
    fs::write(tmp.path().join("pkg/x.py"), "").unwrap();
    fs::create_dir_all(tmp.path().join("pkgname.egg-info")).unwrap();
    fs::write(tmp.path().join("pkgname.egg-info/PKG-INFO"), "").unwrap();
    let config = write_config("[project]\npackage = \"pkgname\"\n");

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(!tmp.path().join("pkg/__pycache__").exists());
    assert!(!tmp.path().join("pkgname.egg-info").exists());
    assert!(tmp.path().join("pkg/x.py").exists());
}

#[test]
fn test_directory_flag() {
    let tmp = create_test_workspace();

    pyan_maint()
        .arg("-C")
        .arg(tmp.path())
        .arg("clean")
        .assert()
        .success();

    assert!(!tmp.path().join("pyan/__pycache__").exists());
}

#[test]
fn test_dry_run_preserves_all() {
    let tmp = create_test_workspace();

    pyan_maint()
        .args(["clean", "--dry-run"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would remove"))
        .stdout(predicate::str::contains("pyan.egg-info"))
        .stdout(predicate::str::contains("packaging metadata"));

    assert!(tmp.path().join("pyan/__pycache__").exists());
    assert!(tmp.path().join("pyan.egg-info").exists());
}

#[test]
fn test_git_dir_left_alone() {
    let tmp = create_test_workspace();
    fs::create_dir_all(tmp.path().join(".git/__pycache__")).unwrap();

    pyan_maint()
        .arg("clean")
        .current_dir(tmp.path())
        .assert()
        .success();

    assert!(tmp.path().join(".git/__pycache__").exists());
}

fn listing(root: &Path) -> Vec<String> {
    walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .flatten()
        .map(|e| e.path().display().to_string())
        .collect()
}
