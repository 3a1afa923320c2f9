//! Integration tests for top-level CLI behavior

use predicates::prelude::*;

use crate::helpers::Sandbox;

#[test]
fn help_lists_subcommands() {
    let sandbox = Sandbox::new();
    let (stdout, _stderr, exit_code) = sandbox.run(&["--help"], "");

    assert_eq!(exit_code, 0);
    for name in ["ask", "fireworks", "config", "completions"] {
        assert!(stdout.contains(name), "help should mention {}", name);
    }
}

#[test]
fn fireworks_help_shows_flags() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["fireworks", "--help"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("--frames")
                .and(predicate::str::contains("--seed"))
                .and(predicate::str::contains("--dwell")),
        );
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    let sandbox = Sandbox::new();
    let (_stdout, stderr, exit_code) = sandbox.run(&[], "");

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn version_names_the_package() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "newyear {}",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn completions_for_bash() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("newyear").and(predicate::str::contains("fireworks")));
}

#[test]
fn verbose_ask_logs_to_stderr_only() {
    let sandbox = Sandbox::new();
    let (stdout, stderr, exit_code) = sandbox.run(&["-vv", "ask"], "tall\n");

    assert_eq!(exit_code, 0);
    assert_eq!(
        stdout,
        "What is the height of Jonathan? Jonathan's height is tall\n"
    );
    assert!(stderr.contains("no config file"));
}
