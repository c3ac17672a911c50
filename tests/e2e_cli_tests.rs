mod common;

use common::{read_lines, TestDataDir};
use predicates::prelude::*;

#[test]
fn test_unknown_action_prints_help_and_succeeds() {
    let data = TestDataDir::new();

    data.command()
        .arg("dance")
        .assert()
        .success()
        .stdout(predicate::str::contains("Unknown action: dance"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_save_without_name_fails() {
    let data = TestDataDir::new();

    data.command()
        .arg("save")
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--name is required to use save"));
}

#[test]
fn test_restore_short_alias_without_name_fails() {
    let data = TestDataDir::new();

    data.command()
        .arg("r")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("--name is required to use restore"));
}

#[test]
fn test_restore_missing_session_fails() {
    let data = TestDataDir::new();

    data.command()
        .args(["restore", "--name", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn test_restore_missing_session_lists_available() {
    let data = TestDataDir::new();
    data.write_session_file("work.txt", "notes.exe\n");

    data.command()
        .args(["restore", "-n", "ghost"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Available sessions: work"));
}

#[test]
fn test_restore_reports_failed_entries_and_succeeds() {
    let data = TestDataDir::new();
    data.write_session_file("broken.txt", "/nonexistent/weorcanjan/program\n");

    data.command()
        .args(["restore", "-n", "broken"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Restored 0 of 1"))
        .stderr(predicate::str::contains(
            "Failed to restore application: /nonexistent/weorcanjan/program",
        ));
}

#[test]
fn test_save_with_no_answers_writes_nothing() {
    let data = TestDataDir::new();
    let prior = data.write_session_file("work.txt", "keep.exe\n");

    data.command()
        .args(["save", "-n", "work"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to do... exiting"));

    assert_eq!(read_lines(&prior), vec!["keep.exe"]);
}

#[test]
fn test_save_rejects_path_traversal() {
    let data = TestDataDir::new();

    data.command()
        .args(["save", "-n", "../escape"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid session name"));

    assert!(!data.temp_dir.path().join("escape.txt").exists());
}

#[test]
fn test_save_refuses_ignore_file_as_session() {
    let data = TestDataDir::new();
    let ignore_file = data.write_session_file("mine.txt", "Slack.exe\n");

    data.command()
        .args(["save", "-n", "mine", "--myignore", "mine"])
        .write_stdin("y\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("is reserved"));

    assert_eq!(read_lines(&ignore_file), vec!["Slack.exe"]);
}

#[test]
fn test_bad_myignore_reports_file_name() {
    let data = TestDataDir::new();

    data.command()
        .args(["save", "-n", "work", "--myignore", "../outside"])
        .write_stdin("")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid file name"))
        .stderr(predicate::str::contains("Invalid session name").not());
}

#[test]
fn test_save_merges_legacy_myignore_flag() {
    let data = TestDataDir::new();
    data.write_session_file("mine.txt", "Slack.exe\n");

    data.command()
        .args(["s", "-n", "work", "-mi", "mine"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found user my ignore list"));
}

#[test]
fn test_save_without_myignore_prints_hint() {
    let data = TestDataDir::new();

    data.command()
        .args(["save", "-n", "work"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("--myignore"))
        .stdout(predicate::str::contains("Could not find user ignore list"));
}

#[test]
fn test_invocation_guard_reports_process_count() {
    let data = TestDataDir::new();

    data.command()
        .args(["save", "-n", "work"])
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("process running..."));
}

#[test]
fn test_merge_user_ignore_debug_action() {
    let data = TestDataDir::new();
    data.write_session_file("my_ignore.txt", "Slack.exe\n");

    data.command()
        .arg("tmui")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found user my ignore list"))
        .stdout(predicate::str::contains("slack.exe"));
}

#[test]
fn test_restore_test_session_without_file_fails() {
    let data = TestDataDir::new();

    data.command()
        .arg("restore-test-session")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Session not found"));
}

#[test]
fn test_guard_win_ver_is_informational() {
    let data = TestDataDir::new();

    data.command()
        .args(["gwv", "-aw11"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Action: guard-win-ver"));
}

#[cfg(not(windows))]
#[test]
fn test_platform_guard_rejects_other_hosts() {
    let data = TestDataDir::new();

    data.command()
        .env_remove("WEORCANJAN_TEST_MODE")
        .args(["save", "-n", "work"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("only intended for Windows"));
}

#[test]
fn test_debug_flag_prints_action_table() {
    let data = TestDataDir::new();

    data.command()
        .args(["gwv", "--debug"])
        .assert()
        .success()
        .stdout(predicate::str::contains("open-data-dir"))
        .stdout(predicate::str::contains("create-test-session"));
}
