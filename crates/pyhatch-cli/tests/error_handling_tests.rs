//! Exit codes and error messages of the pyhatch binary.

use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn pyhatch(dir: &Path) -> Command {
    let mut cmd = cargo::cargo_bin_cmd!("pyhatch");
    cmd.current_dir(dir)
        .env("PYHATCH_TOOLS__PYTHON", "true")
        .env("PYHATCH_TOOLS__PIP", "true")
        .env("PYHATCH_TOOLS__GIT", "true")
        .env("NO_COLOR", "1")
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn non_empty_target_is_user_error() {
    let temp = TempDir::new().unwrap();
    let root = temp.path().join("myapp");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("notes.txt"), "keep me").unwrap();

    pyhatch(temp.path())
        .args(["create", "myapp", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists and is not empty"))
        .stderr(predicate::str::contains("--force"));

    assert_eq!(fs::read_to_string(root.join("notes.txt")).unwrap(), "keep me");
    assert!(!root.join("setup.py").exists());
}

#[test]
fn invalid_package_name_is_user_error() {
    let temp = TempDir::new().unwrap();
    pyhatch(temp.path())
        .args(["create", "my-app", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid package name"));
}

#[test]
fn reserved_entrypoint_is_user_error() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("pyhatch.toml"),
        "[defaults]\nentrypoint = \"__init__.py\"\n",
    )
    .unwrap();

    pyhatch(temp.path())
        .args(["-c", "pyhatch.toml", "create", "myapp", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid entry point '__init__.py'"))
        .stderr(predicate::str::contains("bug").not());

    assert!(!temp.path().join("myapp").exists());
}

#[test]
fn build_with_stale_dist_is_user_error() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("pkg");
    fs::create_dir_all(pkg.join("dist")).unwrap();
    fs::write(pkg.join("setup.py"), "").unwrap();
    fs::write(pkg.join("dist/old.whl"), "").unwrap();

    pyhatch(temp.path())
        .args(["build", "pkg"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains(
            "directory before building to ensure a clean build",
        ));
}

#[test]
fn publish_without_setup_py_fails_fast() {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("mypkg")).unwrap();

    pyhatch(temp.path())
        .args(["publish", "mypkg", "--test"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("setup.py does not exist"))
        .stdout(predicate::str::contains("$ ").not());
}

#[test]
fn build_of_missing_directory_is_user_error() {
    let temp = TempDir::new().unwrap();
    pyhatch(temp.path())
        .args(["build", "nowhere"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn publish_without_artifacts_is_not_found() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("setup.py"), "").unwrap();

    pyhatch(temp.path())
        .args(["publish", "pkg", "--no-build"])
        .assert()
        .code(3);
}

#[test]
#[cfg(unix)]
fn failing_command_is_internal_error() {
    let temp = TempDir::new().unwrap();
    let pkg = temp.path().join("pkg");
    fs::create_dir(&pkg).unwrap();
    fs::write(pkg.join("setup.py"), "").unwrap();

    pyhatch(temp.path())
        .env("PYHATCH_TOOLS__PIP", "false")
        .args(["build", "pkg"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed with returncode 1"));
}

#[test]
fn missing_config_file_is_configuration_error() {
    let temp = TempDir::new().unwrap();
    pyhatch(temp.path())
        .args(["--config", "absent.toml", "build", "pkg"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
#[cfg(unix)]
fn end_of_input_while_prompting_exits_quietly() {
    let temp = TempDir::new().unwrap();

    pyhatch(temp.path())
        .args(["create", "myapp"])
        .write_stdin("1.0\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:").not());

    assert!(!temp.path().join("myapp").exists());
}

#[test]
fn unknown_subcommand_is_usage_error() {
    let temp = TempDir::new().unwrap();
    pyhatch(temp.path())
        .arg("frobnicate")
        .assert()
        .code(2);
}
