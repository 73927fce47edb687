use assert_cmd::Command;
use predicates::prelude::*;

/// Helper function to create a Command with --no-color flag for testing
fn kata_cmd() -> Command {
    let mut cmd = Command::cargo_bin("kata").expect("Failed to find kata binary");
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_cli_help() {
    kata_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Run a lesson interactively"))
        .stdout(predicate::str::contains("List the lessons"));
}

#[test]
fn test_cli_lessons_lists_builtin_lesson() {
    kata_cmd()
        .arg("lessons")
        .assert()
        .success()
        .stdout(predicate::str::contains("E-commerce Frontend with AI"))
        .stdout(predicate::str::contains("BoxShop"));
}

#[test]
fn test_cli_defaults_to_lesson_listing() {
    kata_cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("E-commerce Frontend with AI"));
}

#[test]
fn test_cli_missing_catalog_file_fails() {
    kata_cmd()
        .args(["--catalog", "does-not-exist.json", "lessons"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read catalog file"));
}

#[test]
fn test_cli_run_unknown_lesson_fails() {
    kata_cmd()
        .args(["run", "--lesson", "lesson-404"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to start lesson"));
}

#[test]
fn test_cli_run_shows_first_activity_and_quits() {
    kata_cmd()
        .args(["run", "--fast"])
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("E-commerce Frontend with AI"))
        .stdout(predicate::str::contains("➤ Current"));
}

#[test]
fn test_cli_run_status_shows_roadmap() {
    kata_cmd()
        .args(["run", "--fast"])
        .write_stdin("status\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("🔒 Locked"))
        .stdout(predicate::str::contains("Lives remaining: 3"));
}

#[test]
fn test_cli_run_approve_completes_first_activity() {
    kata_cmd()
        .args(["run", "--fast"])
        .write_stdin("approve\nstatus\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("✓ Completed"))
        .stdout(predicate::str::contains("XP earned: 25"));
}

#[test]
fn test_cli_run_locked_navigation_is_rejected() {
    kata_cmd()
        .args(["run", "--fast"])
        .write_stdin("goto 4\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("locked or out of range"));
}

#[test]
fn test_cli_run_git_log_shows_seed_commit() {
    kata_cmd()
        .args(["run", "--fast"])
        .write_stdin("log\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("feat: initialize BoxShop project"));
}
