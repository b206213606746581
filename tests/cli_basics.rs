use assert_cmd::cargo; // handy crate for testing CLIs
use predicates::prelude::*;

const PATCH: &str = "diff --git a/README.md b/README.md\n+More docs\n";

fn offline_cmd() -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!();
    cmd.env("HOME", "/nonexistent-committy-home")
        .env_remove("AZURE_OPENAI_API_KEY")
        .env_remove("AZURE_OPENAI_ENDPOINT_HOST")
        .env_remove("AZURE_OPENAI_DEPLOYMENT");
    cmd
}

#[test]
fn prints_help() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"))
        .stdout(predicate::str::contains("--no-git"));
}

#[test]
fn prints_version() {
    let mut cmd = cargo::cargo_bin_cmd!();

    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn no_model_prints_five_lines_from_piped_patch() {
    offline_cmd()
        .args(["--no-model", "--no-git"])
        .write_stdin(PATCH)
        .assert()
        .success()
        .stdout(predicate::str::contains("chore: dummy commit message (LLM disabled)"))
        .stdout(predicate::str::contains("chore: staged patch has 2 line(s)"))
        .stdout(predicate::str::contains("feat: implement changes (4)"))
        .stdout(predicate::str::contains("feat: implement changes (5)"))
        .stdout(predicate::str::contains("feat: implement changes (6)").not());
}

#[test]
fn empty_patch_is_rejected() {
    offline_cmd()
        .args(["--no-model", "--no-git"])
        .write_stdin("   \n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No patch data available."));
}

#[test]
fn missing_api_key_is_reported() {
    offline_cmd()
        .args(["--no-git", "--endpoint", "https://example.openai.azure.com"])
        .write_stdin(PATCH)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("API key is required"))
        .stderr(predicate::str::contains("AZURE_OPENAI_API_KEY"));
}

#[test]
fn apply_conflicts_with_commit() {
    offline_cmd()
        .args(["--apply", "--commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[cfg(unix)]
#[test]
fn interrupt_exits_with_status_130() {
    use std::process::{Command, Stdio};
    use std::thread::sleep;
    use std::time::{Duration, Instant};

    // stdin stays open, so the run is parked waiting for the patch
    let mut child = Command::new(env!("CARGO_BIN_EXE_committy"))
        .args(["--no-model", "--no-git"])
        .env("HOME", "/nonexistent-committy-home")
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    let _stdin = child.stdin.take();

    sleep(Duration::from_millis(500));
    let sent = Command::new("kill")
        .args(["-INT", &child.id().to_string()])
        .status()
        .unwrap();
    assert!(sent.success());

    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
        if let Some(status) = child.try_wait().unwrap() {
            assert_eq!(status.code(), Some(130));
            break;
        }
        if Instant::now() > deadline {
            let _ = child.kill();
            panic!("committy kept running after SIGINT");
        }
        sleep(Duration::from_millis(50));
    }
}
