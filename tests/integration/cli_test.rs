//! Binary-level CLI tests.
//!
//! Each invocation gets an isolated HOME so a developer's config file cannot
//! leak into the assertions, and names the banner directory explicitly so the
//! tests do not depend on the working directory.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;

fn banner_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("banners")
}

fn asciiart() -> (Command, tempfile::TempDir) {
    let home = tempfile::tempdir().unwrap();
    let mut cmd = Command::cargo_bin("asciiart").unwrap();
    cmd.env("HOME", home.path());
    (cmd, home)
}

#[test]
fn renders_eight_lines_for_single_line_text() {
    let (mut cmd, _home) = asciiart();
    let assert = cmd
        .args(["Hello", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 8);
}

#[test]
fn literal_backslash_n_renders_two_blocks() {
    let (mut cmd, _home) = asciiart();
    let assert = cmd
        .args(["Hello\\nWorld", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert_eq!(stdout.lines().count(), 16);
}

#[test]
fn empty_text_prints_nothing() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn shadow_style_is_selectable() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Hi", "shadow", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success()
        .stdout(predicate::str::contains("%"));
}

#[test]
fn no_arguments_is_a_usage_error() {
    let (mut cmd, _home) = asciiart();
    cmd.assert().failure().code(2);
}

#[test]
fn unknown_style_is_a_usage_error() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Hello", "cursive"]).assert().failure().code(2);
}

#[test]
fn highlight_without_color_is_a_usage_error() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Hello", "--highlight", "He"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn missing_banner_directory_exits_3() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Hello", "--banner-dir", "/nonexistent"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("banner"));
}

#[test]
fn unprintable_character_exits_4() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Ta\tb", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("unprintable"));
}

#[test]
fn invalid_color_exits_5() {
    let (mut cmd, _home) = asciiart();
    cmd.args(["Hello", "--color", "notacolor", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .failure()
        .code(5)
        .stderr(predicate::str::contains("color"));
}

#[test]
fn color_output_contains_truecolor_escapes() {
    let (mut cmd, _home) = asciiart();
    let assert = cmd
        .args(["Hello", "--color", "red", "--highlight", "He", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\x1b[38;2;255;0;0m"));
    assert!(stdout.contains("\x1b[0m"));
}

#[test]
fn color_without_highlight_wraps_whole_rows() {
    let (mut cmd, _home) = asciiart();
    let assert = cmd
        .args(["Hi", "--color", "rgb(0,255,0)", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    for line in stdout.lines() {
        assert!(line.starts_with("\x1b[38;2;0;255;0m"));
        assert!(line.ends_with("\x1b[0m"));
    }
}

#[test]
fn hex_color_is_accepted() {
    let (mut cmd, _home) = asciiart();
    let assert = cmd
        .args(["Hi", "--color", "#0000ff", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains("\x1b[38;2;0;0;255m"));
}

#[test]
fn config_default_style_is_honored() {
    let home = tempfile::tempdir().unwrap();
    let config_dir = home.path().join(".config").join("asciiart");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(
        config_dir.join("config.toml"),
        "[banner]\ndefault_style = \"shadow\"\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("asciiart").unwrap();
    let assert = cmd
        .env("HOME", home.path())
        .args(["Hi", "--banner-dir"])
        .arg(banner_dir())
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    assert!(stdout.contains('%'), "shadow fill char expected");
}
