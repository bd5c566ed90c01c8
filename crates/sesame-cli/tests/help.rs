//! Tests for the sesame CLI help functionality

mod common;
use common::sesame;

#[test]
fn test_no_args_shows_help() {
    let output = sesame().output().expect("Failed to execute sesame command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    for section in ["Usage:", "Commands:", "Options:", "login", "request", "decode"] {
        assert!(
            stdout.contains(section),
            "Output should contain '{}': {}",
            section,
            stdout
        );
    }
}

#[test]
fn test_version_flag() {
    let output = sesame()
        .arg("--version")
        .output()
        .expect("Failed to execute sesame command");

    assert!(output.status.success(), "Command should exit successfully");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(
        stdout.contains(env!("CARGO_PKG_VERSION")),
        "Output should contain version '{}': {}",
        env!("CARGO_PKG_VERSION"),
        stdout
    );
}
