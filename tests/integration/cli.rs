//! Run the compiled binary and check its stdout and exit status.

use std::process::{Command, Output};

const SUCCESS: &str = "Bits are successfully generated!";

fn bitloom(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bitloom"))
        .args(args)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bitloom binary")
}

#[test]
fn seeded_run_prints_success() {
    let output = bitloom(&["-n", "1024", "--seed", "1"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), SUCCESS);
}

#[test]
fn default_length_run_prints_success() {
    let output = bitloom(&[]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim(), SUCCESS);
}

#[test]
fn stdout_is_a_single_line() {
    let output = bitloom(&["--length", "256", "-s", "3"]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 1);
}

#[test]
fn too_short_length_exits_nonzero() {
    let output = bitloom(&["-n", "10"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot generate 10 bits"), "stderr: {}", stderr);
}

#[test]
fn invalid_argument_is_a_usage_error() {
    let output = bitloom(&["--length", "lots"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
