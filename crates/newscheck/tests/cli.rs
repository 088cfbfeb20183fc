//! Process-level checks for the argument and credential guards.

use std::process::Command;

fn newscheck() -> Command {
    Command::new(env!("CARGO_BIN_EXE_newscheck"))
}

#[test]
fn missing_credential_exits_before_any_work() {
    let output = newscheck()
        .args(["fusion", "energy"])
        .env_remove("OPENAI_API_KEY")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OPENAI_API_KEY"));
    // Nothing ran: no log lines, no model-call output.
    assert!(output.stdout.is_empty());
}

#[test]
fn missing_topic_prints_usage() {
    let output = newscheck()
        .env("OPENAI_API_KEY", "test-key")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: newscheck <topic>"));
    assert!(output.stdout.is_empty());
}

#[test]
fn blank_topic_rejected_like_missing() {
    let output = newscheck()
        .arg("   ")
        .env("OPENAI_API_KEY", "test-key")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Usage"));
}
