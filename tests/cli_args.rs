//! Tests for CLI argument parsing and the headless driver, run against the
//! built binary.

mod common;

use common::temp_config;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn stopwatch_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_stopwatch-mvi"))
}

/// Run headless with `stdin` piped in. A long period keeps the real ticker
/// out of the way.
fn run_headless(extra_args: &[&str], stdin: &str) -> Output {
    run_headless_with_config("", extra_args, stdin)
}

fn run_headless_with_config(config: &str, extra_args: &[&str], stdin: &str) -> Output {
    let (_dir, config_path) = temp_config(config);
    let mut child = stopwatch_cmd()
        .arg("--headless")
        .arg("--tick-ms")
        .arg("600000")
        .arg("--config")
        .arg(&config_path)
        .args(extra_args)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to execute command");

    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");
    child.wait_with_output().expect("Failed to wait for command")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_options() {
    let output = stopwatch_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    for flag in ["--tick-ms", "--autostart", "--headless", "--format", "--config", "--log-file"] {
        assert!(stdout.contains(flag), "missing {flag} in help:\n{stdout}");
    }
}

#[test]
fn test_zero_tick_ms_is_rejected() {
    let output = stopwatch_cmd()
        .args(["--tick-ms", "0"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
}

#[test]
fn test_headless_script_prints_changes() {
    let output = run_headless(&[], "START\nTICK\nTICK\nSTOP\nTICK\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            "0:00 stopped",
            "0:00 running",
            "0:01 running",
            "0:02 running",
            "0:02 stopped",
        ]
    );
}

#[test]
fn test_headless_ignores_unknown_and_blank_lines() {
    let output = run_headless(&[], "RESET\n\nstart\nSTART\n");

    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), vec!["0:00 stopped", "0:00 running"]);
}

#[test]
fn test_headless_autostart_and_json() {
    let output = run_headless(&["--autostart", "--format", "json"], "TICK\n");

    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        vec![
            r#"{"running":false,"time":0,"display":"0:00"}"#,
            r#"{"running":true,"time":0,"display":"0:00"}"#,
            r#"{"running":true,"time":1,"display":"0:01"}"#,
        ]
    );
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, config_path) = temp_config("[ticker]\nperiod_ms = 0\n");
    let output = stopwatch_cmd()
        .arg("--headless")
        .arg("--config")
        .arg(&config_path)
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: invalid configuration"));
}

#[test]
fn test_tick_ms_overrides_zero_period_in_config() {
    let output = run_headless_with_config("[ticker]\nperiod_ms = 0\n", &[], "START\n");

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(stdout_lines(&output), vec!["0:00 stopped", "0:00 running"]);
}

#[test]
fn test_unreadable_config_exits_with_load_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let output = stopwatch_cmd()
        .arg("--headless")
        .arg("--config")
        .arg(dir.path().join("absent.toml"))
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: failed to load configuration"));
}
