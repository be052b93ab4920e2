#![allow(deprecated)]

use assert_cmd::prelude::*;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const EXT: &str = if cfg!(windows) { "bat" } else { "sh" };

fn aka(temp: &assert_fs::TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aka").unwrap();
    cmd.env("AKA_DIR", temp.path());
    cmd.env("XDG_CONFIG_HOME", temp.path().join("xdg"));
    cmd
}

#[test]
fn test_install_check_fails_when_absent() {
    let temp = assert_fs::TempDir::new().unwrap();

    aka(&temp)
        .args(["install", "--check"])
        .env("PATH", std::env::var_os("PATH").unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("not on PATH"));

    temp.close().unwrap();
}

#[test]
fn test_install_check_succeeds_when_present() {
    let temp = assert_fs::TempDir::new().unwrap();

    let path_var = std::env::join_paths(
        std::env::split_paths(&std::env::var_os("PATH").unwrap())
            .chain(std::iter::once(temp.path().to_path_buf())),
    )
    .unwrap();

    aka(&temp)
        .args(["install", "--check"])
        .env("PATH", path_var)
        .assert()
        .success()
        .stderr(predicate::str::contains("already on PATH"));

    temp.close().unwrap();
}

#[test]
fn test_install_check_does_not_create_self_alias() {
    let temp = assert_fs::TempDir::new().unwrap();

    aka(&temp).args(["install", "--check"]).assert().failure();

    temp.child(format!("aka.{EXT}"))
        .assert(predicate::path::missing());

    temp.close().unwrap();
}

#[cfg(unix)]
#[test]
fn test_install_appends_to_profile_and_adds_self_alias() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();

    aka(&temp)
        .arg("install")
        .env("HOME", home.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("persistent search path"));

    // Profile gained the export line
    let profile = std::fs::read_to_string(home.path().join(".profile")).unwrap();
    assert!(profile.contains("export PATH="));
    assert!(profile.contains(temp.path().to_str().unwrap()));

    // Self alias points at the binary
    temp.child(format!("aka.{EXT}"))
        .assert(predicate::str::contains("aka"));

    temp.close().unwrap();
}

#[cfg(unix)]
#[test]
fn test_install_twice_is_idempotent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();

    for _ in 0..2 {
        aka(&temp)
            .arg("install")
            .env("HOME", home.path())
            .assert()
            .success();
    }

    let profile = std::fs::read_to_string(home.path().join(".profile")).unwrap();
    let occurrences = profile.matches(temp.path().to_str().unwrap()).count();
    assert_eq!(occurrences, 1);

    temp.close().unwrap();
}

#[cfg(unix)]
#[test]
fn test_install_when_already_on_path_skips_profile() {
    let temp = assert_fs::TempDir::new().unwrap();
    let home = temp.child("home");
    home.create_dir_all().unwrap();

    let path_var = std::env::join_paths(
        std::env::split_paths(&std::env::var_os("PATH").unwrap())
            .chain(std::iter::once(temp.path().to_path_buf())),
    )
    .unwrap();

    aka(&temp)
        .arg("install")
        .env("HOME", home.path())
        .env("PATH", path_var)
        .assert()
        .success()
        .stderr(predicate::str::contains("already on PATH"));

    assert!(!home.path().join(".profile").exists());

    temp.close().unwrap();
}
