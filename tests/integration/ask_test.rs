//! Integration tests for the ask command

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn ask_echoes_height() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = sandbox.run(&["ask"], "5 feet 10 inches\n");

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "What is the height of Jonathan? Jonathan's height is 5 feet 10 inches\n"
    );
    assert!(stderr.is_empty(), "unexpected stderr: {}", stderr);
}

#[test]
fn ask_reads_a_single_line() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["ask"], "tall\nshort\n");

    assert_eq!(exit_code, 0);
    assert!(stdout.ends_with("Jonathan's height is tall\n"));
    assert!(!stdout.contains("short"));
    assert_eq!(stdout.matches("What is the height of Jonathan?").count(), 1);
}

#[test]
fn ask_with_closed_stdin_echoes_empty_answer() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("ask")
        .write_stdin("")
        .assert()
        .success()
        .stdout("What is the height of Jonathan? Jonathan's height is \n");
}

#[test]
fn ask_is_repeatable() {
    let sandbox = Sandbox::new();
    let first = sandbox.run(&["ask"], "180 cm\n");
    let second = sandbox.run(&["ask"], "180 cm\n");
    assert_eq!(first, second);
}

#[test]
fn ask_uses_configured_exchange() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[ask]\nquestion = \"Age? \"\nreply_prefix = \"Age is \"\n");

    sandbox
        .cmd()
        .arg("ask")
        .write_stdin("42\n")
        .assert()
        .success()
        .stdout("Age? Age is 42\n");
}

#[test]
fn ask_fails_on_invalid_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[fireworks]\nframes = 0\n");

    sandbox
        .cmd()
        .arg("ask")
        .write_stdin("x\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error:").and(predicate::str::contains("fireworks.frames")));
}
