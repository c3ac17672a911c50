//! Self-test actions, kept out of the main command set.

use crate::commands::restore::{print_summary, restore_file};
use crate::commands::{load_ignore_set, Invocation};
use crate::config::TEST_SESSION_FILENAME;
use crate::error::Result;
use crate::guards::guard_version;
use crate::inventory::{self, ProcessFields, ProcessRecord, SystemProcessSource};
use crate::restore::DetachedLauncher;
use crate::session::write_session;

const TEST_BROWSERS: &[&str] = &["chrome", "firefox"];

fn browser_of(record: &ProcessRecord) -> Option<&'static str> {
    let name = record.name.to_lowercase();
    let stem = name.strip_suffix(".exe").unwrap_or(&name);
    TEST_BROWSERS.iter().copied().find(|browser| *browser == stem)
}

/// Executable of the first running instance of each known browser, in
/// `TEST_BROWSERS` order.
pub fn find_test_browsers<I>(records: I, verbose: bool) -> Vec<String>
where
    I: IntoIterator<Item = ProcessRecord>,
{
    let mut found: Vec<Option<String>> = vec![None; TEST_BROWSERS.len()];

    for record in records {
        if verbose {
            println!("name: {}", record.name);
            println!("cmdline: {:?}", record.command_line);
            if let Some(user) = &record.owning_user {
                println!("user: {}", user);
            }
            println!();
        }

        let Some(browser) = browser_of(&record) else {
            continue;
        };
        let Some(slot) = TEST_BROWSERS.iter().position(|b| *b == browser) else {
            continue;
        };
        if found[slot].is_none() {
            if let Some(exe) = record.executable() {
                println!("Found {} running", browser);
                found[slot] = Some(exe.to_string());
            }
        }
    }

    found.into_iter().flatten().collect()
}

pub fn create_test_session(inv: &Invocation) -> Result<i32> {
    let mut source = SystemProcessSource::new();
    let browsers = find_test_browsers(
        inventory::enumerate(&mut source, ProcessFields::all()),
        inv.debug,
    );

    if browsers.is_empty() {
        println!("You must run either chrome and/or firefox for this to work");
        return Ok(1);
    }

    inv.store.ensure_directory()?;
    let path = inv.store.resolve_aux_file(TEST_SESSION_FILENAME)?;
    write_session(&path, &browsers)?;
    println!("Wrote test session to {}", path.display());

    Ok(0)
}

pub fn restore_test_session(inv: &Invocation) -> Result<i32> {
    let path = inv.store.resolve_aux_file(TEST_SESSION_FILENAME)?;
    let report = restore_file(&path, &DetachedLauncher)?;
    print_summary(&report);
    Ok(0)
}

pub fn test_merge_user_ignore(inv: &Invocation) -> Result<i32> {
    let ignore = load_ignore_set(inv, &inv.config.ignore.get_user_file())?;
    if !inv.debug {
        crate::commands::print_ignore_set(&ignore);
    }
    Ok(0)
}

pub fn guard_win_ver(inv: &Invocation) -> Result<i32> {
    guard_version(inv.config.guard.get_baseline_release(), false);
    Ok(0)
}
