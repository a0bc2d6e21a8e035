//! Integration tests for the style check command.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tempfile::{NamedTempFile, TempDir};

fn pyan_maint() -> Command {
    Command::cargo_bin("pyan-maint").unwrap()
}

fn create_package() -> TempDir {
    let tmp = TempDir::new().unwrap();
    fs::create_dir_all(tmp.path().join("pyan")).unwrap();
    fs::write(tmp.path().join("pyan/__init__.py"), "").unwrap();
    fs::write(tmp.path().join("pyan/pyan.py"), "x = 1\n").unwrap();
    fs::write(tmp.path().join("setup.py"), "x = 1   \n").unwrap();
    tmp
}

/// Write a shell script standing in for the style tool.
fn fake_tool(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("fake-flake8.sh");
    fs::write(&path, format!("{}\n", body)).unwrap();
    path
}

/// Run the script through `sh` so it never needs to be executable.
fn config_for(script: &Path) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[checker]\nprogram = \"sh\"\nargs = [\"{}\"]",
        script.display()
    )
    .unwrap();
    file
}

#[test]
fn test_success_passes_through() {
    let pkg = create_package();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "echo \"checked $@\"; exit 0");
    let config = config_for(&tool);

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .assert()
        .code(0)
        .stdout("checked pyan/__init__.py pyan/pyan.py\n");
}

#[test]
fn test_failure_code_and_output_pass_through() {
    let pkg = create_package();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(
        bin.path(),
        "echo 'pyan/pyan.py:1:1: E999 bad'; echo 'warning' >&2; exit 7",
    );
    let config = config_for(&tool);

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .assert()
        .code(7)
        .stdout("pyan/pyan.py:1:1: E999 bad\n")
        .stderr(predicate::str::contains("warning"));
}

#[test]
fn test_interleaved_output_keeps_tool_order() {
    let pkg = create_package();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "echo out1; echo err2 >&2; echo out3; exit 1");
    let config = config_for(&tool);

    // Both streams share one file, as they do on a terminal
    let log = NamedTempFile::new().unwrap();
    let out = log.reopen().unwrap();
    let err = out.try_clone().unwrap();

    let status = std::process::Command::new(assert_cmd::cargo::cargo_bin("pyan-maint"))
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .stdout(Stdio::from(out))
        .stderr(Stdio::from(err))
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert_eq!(fs::read_to_string(log.path()).unwrap(), "out1\nerr2\nout3\n");
}

#[test]
fn test_missing_tool_fails() {
    let pkg = create_package();
    let mut config = NamedTempFile::new().unwrap();
    config
        .write_all(b"[checker]\nprogram = \"no-such-style-tool\"\n")
        .unwrap();

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("'no-such-style-tool' not found"));
}

#[test]
fn test_missing_package_dir_fails() {
    let tmp = TempDir::new().unwrap();
    let bin = TempDir::new().unwrap();
    let tool = fake_tool(bin.path(), "exit 0");
    let config = config_for(&tool);

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error at path"));
}

#[test]
fn test_builtin_backend() {
    let pkg = create_package();
    fs::write(pkg.path().join("pyan/pyan.py"), "x = 1 \n").unwrap();
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[checker]\nbackend = \"builtin\"\n").unwrap();

    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .assert()
        .code(1)
        .stdout("pyan/pyan.py:1:6: W291 trailing whitespace\n");
}

#[test]
fn test_builtin_backend_clean_package() {
    let pkg = create_package();
    let mut config = NamedTempFile::new().unwrap();
    config.write_all(b"[checker]\nbackend = \"builtin\"\n").unwrap();

    // setup.py has trailing whitespace but lies outside the package
    pyan_maint()
        .arg("--config")
        .arg(config.path())
        .arg("qa_check_code")
        .current_dir(pkg.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
