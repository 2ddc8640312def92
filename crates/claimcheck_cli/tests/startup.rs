//! Integration tests against the compiled binary: startup credential
//! handling and offline subcommands.

use std::process::Command;

#[test]
fn missing_api_key_exits_with_code_1() {
    let bin = env!("CARGO_BIN_EXE_claimcheck");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = Command::new(bin)
        .args(["check", "water is wet"])
        .env_remove("PERPLEXITY_API_KEY")
        .current_dir(dir.path())
        .output()
        .expect("run claimcheck");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(
        stderr.contains("PERPLEXITY_API_KEY"),
        "stderr should name the missing variable; got: {stderr}"
    );
}

#[test]
fn blank_api_key_counts_as_missing() {
    let bin = env!("CARGO_BIN_EXE_claimcheck");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = Command::new(bin)
        .args(["check", "water is wet"])
        .env("PERPLEXITY_API_KEY", "   ")
        .current_dir(dir.path())
        .output()
        .expect("run claimcheck");

    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn history_with_no_results_succeeds() {
    let bin = env!("CARGO_BIN_EXE_claimcheck");
    let dir = tempfile::tempdir().expect("tempdir");
    let out = Command::new(bin)
        .arg("history")
        .env("PERPLEXITY_API_KEY", "test-key")
        .current_dir(dir.path())
        .output()
        .expect("run claimcheck");

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(
        stdout.contains("No saved results"),
        "expected empty-history notice; got: {stdout}"
    );
}
