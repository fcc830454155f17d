//! Smoke tests for the glyphfetch binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_a_banner_and_exits_cleanly() {
    let mut cmd = Command::cargo_bin("glyphfetch").expect("binary exists");
    cmd.arg("--text")
        .arg("AB")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn missing_image_falls_back_to_big_text() {
    let mut cmd = Command::cargo_bin("glyphfetch").expect("binary exists");
    cmd.arg("--image")
        .arg("/no/such/logo.png")
        .arg("--text")
        .arg("HI")
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn version_flag_reports_name() {
    let mut cmd = Command::cargo_bin("glyphfetch").expect("binary exists");
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("glyphfetch"));
}
