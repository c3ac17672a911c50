mod common;

use common::{read_lines, TestDataDir};
use std::fs;
use weorcanjan::commands::save_session;
use weorcanjan::{
    EnumerationError, IgnoreSet, ProcessRecord, SaveOutcome, ScriptedSelector,
    StaticProcessSource, WeorcanjanError,
};

fn desktop() -> StaticProcessSource {
    StaticProcessSource::new(vec![
        ProcessRecord::new(100, "explorer.exe", &["explorer.exe"]),
        ProcessRecord::new(200, "notes.exe", &["notes.exe", "--flag"]),
    ])
}

#[test]
fn test_save_keeps_confirmed_application() {
    let data = TestDataDir::new();
    let store = data.store();
    let ignore = IgnoreSet::from_entries(["explorer.exe"]);
    let mut source = desktop();
    let mut selector = ScriptedSelector::new(["y"]);

    let outcome = save_session(&store, "work", &ignore, &mut source, &mut selector)
        .expect("save should succeed");

    assert_eq!(selector.asked(), &["notes.exe"]);
    let path = data.session_path("work.txt");
    assert_eq!(
        outcome,
        SaveOutcome::Saved {
            path: path.clone(),
            applications: vec!["notes.exe".to_string()],
        }
    );
    assert_eq!(fs::read_to_string(&path).unwrap(), "notes.exe\n");
}

#[test]
fn test_declining_everything_writes_nothing() {
    let data = TestDataDir::new();
    let prior = data.write_session_file("work.txt", "paint.exe\n");
    let mut source = desktop();
    let mut selector = ScriptedSelector::new(["n"]);

    let outcome = save_session(
        &data.store(),
        "work",
        &IgnoreSet::from_entries(["explorer.exe"]),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert_eq!(outcome, SaveOutcome::NothingToSave);
    assert_eq!(read_lines(&prior), vec!["paint.exe"]);
}

#[test]
fn test_blank_answer_omits() {
    let data = TestDataDir::new();
    let mut source = desktop();
    let mut selector = ScriptedSelector::new([""]);

    let outcome = save_session(
        &data.store(),
        "work",
        &IgnoreSet::from_entries(["explorer.exe"]),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert_eq!(outcome, SaveOutcome::NothingToSave);
    assert!(!data.session_path("work.txt").exists());
}

#[test]
fn test_duplicate_executables_are_asked_once() {
    let data = TestDataDir::new();
    let mut source = StaticProcessSource::new(vec![
        ProcessRecord::new(1, "chrome.exe", &["C:\\Chrome\\chrome.exe"]),
        ProcessRecord::new(2, "chrome.exe", &["C:\\Chrome\\chrome.exe", "--type=gpu"]),
        ProcessRecord::new(3, "chrome.exe", &["C:\\Chrome\\chrome.exe", "--type=renderer"]),
    ]);
    let mut selector = ScriptedSelector::new(["y", "y", "y"]);

    save_session(
        &data.store(),
        "browsing",
        &IgnoreSet::default(),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert_eq!(selector.asked().len(), 1);
    assert_eq!(
        read_lines(&data.session_path("browsing.txt")),
        vec!["C:\\Chrome\\chrome.exe"]
    );
}

#[test]
fn test_processes_without_command_line_are_not_offered() {
    let data = TestDataDir::new();
    let mut source = StaticProcessSource::new(vec![
        ProcessRecord::new(1, "System", &[]),
        ProcessRecord::new(2, "kworker/0:1", &[]),
    ]);
    let mut selector = ScriptedSelector::new(["y"]);

    let outcome = save_session(
        &data.store(),
        "work",
        &IgnoreSet::default(),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert!(selector.asked().is_empty());
    assert_eq!(outcome, SaveOutcome::NothingToSave);
}

#[test]
fn test_scan_failures_do_not_abort_save() {
    let data = TestDataDir::new();
    let mut source = desktop()
        .with_failure(EnumerationError::Vanished { pid: 300 })
        .with_failure(EnumerationError::Inaccessible { pid: 4 });
    let mut selector = ScriptedSelector::new(["y"]);

    let outcome = save_session(
        &data.store(),
        "work",
        &IgnoreSet::from_entries(["explorer.exe"]),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert!(matches!(outcome, SaveOutcome::Saved { .. }));
}

#[test]
fn test_invalid_session_name_is_rejected_before_prompting() {
    let data = TestDataDir::new();
    let mut source = desktop();
    let mut selector = ScriptedSelector::new(["y"]);

    let result = save_session(
        &data.store(),
        "../outside",
        &IgnoreSet::default(),
        &mut source,
        &mut selector,
    );

    assert!(result.is_err());
    assert!(selector.asked().is_empty());
}

#[test]
fn test_session_cannot_overwrite_user_ignore_file() {
    let data = TestDataDir::new();
    let ignore_file = data.write_session_file("my_ignore.txt", "Slack.exe\nTeams.exe\n");

    for name in ["my_ignore", "my_ignore.txt", "test_session"] {
        let mut source = desktop();
        let mut selector = ScriptedSelector::new(["y"]);
        let result = save_session(
            &data.store(),
            name,
            &IgnoreSet::from_entries(["explorer.exe"]),
            &mut source,
            &mut selector,
        );

        assert!(
            matches!(result, Err(WeorcanjanError::InvalidSessionName(_))),
            "{} should be rejected",
            name
        );
        assert!(selector.asked().is_empty());
    }

    assert_eq!(read_lines(&ignore_file), vec!["Slack.exe", "Teams.exe"]);
}

#[test]
fn test_session_cannot_use_configured_ignore_file() {
    let data = TestDataDir::new();
    let store = data.store().reserve("team_ignore.txt");
    let mut source = desktop();
    let mut selector = ScriptedSelector::new(["y"]);

    let result = save_session(
        &store,
        "team_ignore",
        &IgnoreSet::default(),
        &mut source,
        &mut selector,
    );

    assert!(matches!(result, Err(WeorcanjanError::InvalidSessionName(_))));
    assert!(!data.session_path("team_ignore.txt").exists());
}

#[test]
fn test_dotted_session_name_is_saved_as_txt() {
    let data = TestDataDir::new();
    let mut source = desktop();
    let mut selector = ScriptedSelector::new(["y"]);

    save_session(
        &data.store(),
        "work.v2",
        &IgnoreSet::from_entries(["explorer.exe"]),
        &mut source,
        &mut selector,
    )
    .unwrap();

    assert!(data.session_path("work.v2.txt").exists());
    assert_eq!(data.store().list().unwrap(), vec!["work.v2"]);
}
