//! End-to-end CLI tests driving the compiled binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

#[test]
fn help_shows_usage_and_flags() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--major"))
        .stdout(predicate::str::contains("compare"));
}

#[test]
fn version_flag_shows_crate_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn bump_without_flags_echoes_version() {
    cmd()
        .arg("1.2.3")
        .assert()
        .success()
        .stdout("1.2.3\n");
}

#[test]
fn bump_major_resets_and_clears_pre_release() {
    cmd()
        .args(["1.1.1-RELEASE.0", "-x"])
        .assert()
        .success()
        .stdout("2.0.0\n");
}

#[test]
fn bump_long_flags() {
    cmd()
        .args(["1.2.3", "--minor"])
        .assert()
        .success()
        .stdout("1.3.0\n");
}

#[test]
fn bump_release_track() {
    cmd()
        .args(["1.0.0", "-r"])
        .assert()
        .success()
        .stdout("1.0.0-RELEASE.0\n");

    cmd()
        .args(["1.0.0-RELEASE.0", "-r"])
        .assert()
        .success()
        .stdout("1.0.0-RELEASE.1\n");
}

#[test]
fn bump_combined_major_and_release() {
    cmd()
        .args(["1.2.3", "-x", "-r"])
        .assert()
        .success()
        .stdout("2.0.0-RELEASE.0\n");
}

#[test]
fn bump_invalid_version_fails() {
    cmd()
        .arg("10.0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Semantic version is not valid format"));
}

#[test]
fn bump_invalid_patch_fails() {
    cmd()
        .arg("1.0.z")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Patch version is not int format"));
}

#[test]
fn bump_without_version_is_usage_error() {
    cmd().assert().failure();
}

#[test]
fn compare_prints_true() {
    cmd()
        .args(["compare", "1.0.1 > 1.0.0"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn compare_prints_false() {
    cmd()
        .args(["compare", "1.0.0 > 1.0.1"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn compare_equal_with_pre_release_labels() {
    cmd()
        .args(["compare", "1.0.0-BETA.0 == 1.0.0-BETA.0"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn compare_unknown_operator_prints_false() {
    cmd()
        .args(["compare", "1.0.0 != 1.0.0"])
        .assert()
        .success()
        .stdout("false\n");
}

#[test]
fn compare_too_few_tokens_is_usage_error() {
    cmd()
        .args(["compare", "1.0.0 >"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Command is not valid argument"));
}

#[test]
fn compare_parse_error_is_reported() {
    cmd()
        .args(["compare", "oops > 1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Semantic version is not valid format"));
}
