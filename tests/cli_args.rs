//! Tests for the command-line interface, run against the built binary.

mod common;

use common::temp_config;
use std::process::Command;

fn uisketch_cmd() -> (Command, tempfile::TempDir) {
    let (dir, config_path) = temp_config("[remote]\nenabled = false\n");
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_uisketch"));
    cmd.arg("--config").arg(config_path);
    (cmd, dir)
}

#[test]
fn test_help_lists_subcommands() {
    let output = Command::new(env!("CARGO_BIN_EXE_uisketch"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    for sub in ["serve", "generate", "export", "backend"] {
        assert!(stdout.contains(sub), "missing subcommand {}", sub);
    }
}

#[test]
fn test_generate_html() {
    let (mut cmd, _dir) = uisketch_cmd();
    let output = cmd
        .args(["generate", "--local", "--mode", "html", "Login form with Email and Password"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.matches("<form").count(), 1);
    assert!(stdout.contains("<label>Email</label>"));
    assert!(stdout.contains("<label>Password</label>"));
}

#[test]
fn test_generate_json() {
    let (mut cmd, _dir) = uisketch_cmd();
    let output = cmd
        .args(["generate", "--mode", "json", "3 cards"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["components"][0]["type"], "grid");
    assert_eq!(doc["components"][0]["props"]["items"], 3);
}

#[test]
fn test_generate_jsx() {
    let (mut cmd, _dir) = uisketch_cmd();
    let output = cmd
        .args(["generate", "--mode", "jsx", "Button"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("function GeneratedUI() {"));
    assert!(stdout.contains("className=\"button\""));
}

#[test]
fn test_empty_prompt_exits_with_error() {
    let (mut cmd, _dir) = uisketch_cmd();
    let output = cmd
        .args(["generate", "  "])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Please enter a description"));
}

#[test]
fn test_export_writes_file() {
    let (mut cmd, dir) = uisketch_cmd();
    let out_path = dir.path().join("page.html");
    let output = cmd
        .args(["export", "--local", "-o"])
        .arg(&out_path)
        .arg("Landing page with hero and footer")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.starts_with("<!doctype html>"));
    assert!(html.contains("class=\"hero\""));
    assert!(html.contains("class=\"footer\""));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let (_dir, path) = temp_config("[server]\nbind_addr = \"nope\"\n");
    let output = Command::new(env!("CARGO_BIN_EXE_uisketch"))
        .arg("--config")
        .arg(path)
        .args(["generate", "Button"])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("server.bind_addr"));
}
