//! Smoke tests for the `cukex` binary.

use std::fs;
use std::path::Path;
use std::str;

use assert_cmd::Command;
use tempfile::TempDir;

fn workdir() -> TempDir {
    tempfile::tempdir().unwrap_or_else(|err| panic!("temporary directory: {err}"))
}

fn cukex(dir: &Path) -> Command {
    let mut cmd =
        Command::cargo_bin("cukex").unwrap_or_else(|err| panic!("binary exists: {err}"));
    cmd.current_dir(dir)
        .env_remove("CUKEX_PARAMETER_TYPES")
        .env_remove("CUKEX_LOG_LEVEL");
    cmd
}

fn write_definitions(dir: &Path, name: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, r#"[{"name": "color", "regexp": "red|blue"}]"#)
        .unwrap_or_else(|err| panic!("definitions file: {err}"));
    path
}

fn stdout_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stdout).unwrap_or_else(|err| panic!("utf8 stdout: {err}"))
}

fn stderr_of(output: &std::process::Output) -> &str {
    str::from_utf8(&output.stderr).unwrap_or_else(|err| panic!("utf8 stderr: {err}"))
}

#[test]
fn prints_one_regex_per_expression() {
    let dir = workdir();
    let output = cukex(dir.path())
        .args(["I have {int} cucumber(s)", "a/b c/d/e"])
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        "^I have (-?\\d+) cucumber(?:s)?$\n^(?:a|b) (?:c|d|e)$\n"
    );
}

#[test]
fn invalid_expression_exits_with_one() {
    let dir = workdir();
    let output = cukex(dir.path())
        .args(["fine", "{unknown}", "never reached"])
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout_of(&output), "^fine$\n");
    assert!(stderr_of(&output).contains("unknown parameter type `{unknown}`"));
}

#[test]
fn invalid_log_level_variable_exits_with_two() {
    let dir = workdir();
    let output = cukex(dir.path())
        .env("CUKEX_LOG_LEVEL", "chatty")
        .arg("a")
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert_eq!(output.status.code(), Some(2));
    assert!(stdout_of(&output).is_empty());
    assert!(stderr_of(&output).contains("unknown log level 'chatty'"));
}

#[test]
fn missing_expressions_is_a_usage_error() {
    let dir = workdir();
    let output = cukex(dir.path())
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(!output.status.success());
    assert!(stdout_of(&output).is_empty());
}

#[test]
fn reads_default_definitions_file_from_working_directory() {
    let dir = workdir();
    write_definitions(dir.path(), "custom_parameter_types.json");
    let output = cukex(dir.path())
        .arg("a {color} ball")
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "^a (red|blue) ball$\n");
}

#[test]
fn environment_variable_selects_definitions_file() {
    let dir = workdir();
    let path = write_definitions(dir.path(), "types.json");
    let output = cukex(dir.path())
        .env("CUKEX_PARAMETER_TYPES", &path)
        .arg("{color}")
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "^(red|blue)$\n");
}

#[test]
fn flag_overrides_environment_variable() {
    let dir = workdir();
    let path = write_definitions(dir.path(), "flag.json");
    let output = cukex(dir.path())
        .env("CUKEX_PARAMETER_TYPES", dir.path().join("missing.json"))
        .arg("--parameter-types")
        .arg(&path)
        .arg("{color}")
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "^(red|blue)$\n");
}

#[test]
fn malformed_definitions_file_keeps_builtins() {
    let dir = workdir();
    let path = dir.path().join("custom_parameter_types.json");
    fs::write(&path, "{ not json").unwrap_or_else(|err| panic!("definitions file: {err}"));
    let output = cukex(dir.path())
        .args(["{int}", "--log-level", "warn"])
        .output()
        .unwrap_or_else(|err| panic!("runs: {err}"));
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "^(-?\\d+)$\n");
}
