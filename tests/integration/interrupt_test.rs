//! Integration tests for Ctrl-C handling
//!
//! These send a real SIGINT to the binary, so they only run on unix.

#![cfg(unix)]

use std::io::Read;
use std::process::{Child, Command, Stdio};
use std::time::{Duration, Instant};

use crate::helpers::Sandbox;

const INTERRUPTED: i32 = 130;

/// Spawn newyear with piped stdio. Stdin stays open until the child is reaped.
fn spawn(sandbox: &Sandbox, args: &[&str]) -> Child {
    Command::new(env!("CARGO_BIN_EXE_newyear"))
        .args(args)
        .env("NEWYEAR_CONFIG", sandbox.config_path())
        .env_remove("NEWYEAR_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn newyear")
}

/// Read stdout until `marker` shows up, returning what was read.
fn read_until(child: &mut Child, marker: &str) -> String {
    let stdout = child.stdout.as_mut().expect("piped stdout");
    let deadline = Instant::now() + Duration::from_secs(10);
    let mut seen = Vec::new();
    let mut buf = [0u8; 256];

    while !String::from_utf8_lossy(&seen).contains(marker) {
        assert!(Instant::now() < deadline, "timed out waiting for {:?}", marker);
        let n = stdout.read(&mut buf).expect("Failed to read stdout");
        assert!(n > 0, "stdout closed before {:?}", marker);
        seen.extend_from_slice(&buf[..n]);
    }
    String::from_utf8_lossy(&seen).to_string()
}

fn send_sigint(child: &Child) {
    let status = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .expect("Failed to run kill");
    assert!(status.success());
}

/// Wait for exit and return (rest of stdout, exit code).
fn finish(mut child: Child) -> (String, i32) {
    let mut rest = String::new();
    if let Some(stdout) = child.stdout.as_mut() {
        stdout.read_to_string(&mut rest).expect("Failed to read stdout");
    }
    let status = child.wait().expect("Failed to wait for newyear");
    (rest, status.code().unwrap_or(-1))
}

#[test]
fn ctrl_c_during_dwell_exits_130_without_wish_prompt() {
    let sandbox = Sandbox::new();
    let mut child = spawn(
        &sandbox,
        &["fireworks", "--frames", "1", "--delay", "0", "--dwell", "10000"],
    );

    let before = read_until(&mut child, "Happy New Year 2025!");
    let start = Instant::now();
    send_sigint(&child);
    let (rest, exit_code) = finish(child);

    assert_eq!(exit_code, INTERRUPTED);
    assert!(start.elapsed() < Duration::from_secs(5), "dwell was not cut short");
    assert!(!before.contains("Enter your wish"));
    assert!(!rest.contains("Enter your wish"));
}

#[test]
fn ctrl_c_at_ask_prompt_exits_130() {
    let sandbox = Sandbox::new();
    let mut child = spawn(&sandbox, &["ask"]);

    read_until(&mut child, "What is the height of Jonathan? ");
    send_sigint(&child);
    let (rest, exit_code) = finish(child);

    assert_eq!(exit_code, INTERRUPTED);
    assert!(!rest.contains("Jonathan's height is"));
}

#[test]
fn ctrl_c_at_wish_prompt_exits_130() {
    let sandbox = Sandbox::new();
    let mut child = spawn(&sandbox, &["fireworks", "--frames", "1", "--delay", "0", "--dwell", "0"]);

    read_until(&mut child, "Enter your wish: ");
    send_sigint(&child);
    let (rest, exit_code) = finish(child);

    assert_eq!(exit_code, INTERRUPTED);
    assert!(!rest.contains("your wish is:"));
}
