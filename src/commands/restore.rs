use crate::cli::require_session_name;
use crate::commands::Invocation;
use crate::error::{Result, WeorcanjanError};
use crate::restore::{self as executor, DetachedLauncher, Launcher, RestoreReport};
use crate::session::{read_session, SessionStore};
use std::path::Path;

pub fn restore(inv: &Invocation) -> Result<i32> {
    let session_name = require_session_name(inv.action, inv.session_name.as_deref())?;
    println!("You are using session: {}", session_name);

    let report = match restore_session(&inv.store, session_name, &DetachedLauncher) {
        Ok(report) => report,
        Err(WeorcanjanError::SessionNotFound(path)) => {
            print_available_sessions(&inv.store);
            return Err(WeorcanjanError::SessionNotFound(path));
        }
        Err(e) => return Err(e),
    };

    print_summary(&report);
    Ok(0)
}

/// Reads a session and launches every entry. A missing session fails before
/// anything is spawned.
pub fn restore_session<L>(
    store: &SessionStore,
    session_name: &str,
    launcher: &L,
) -> Result<RestoreReport>
where
    L: Launcher + ?Sized,
{
    let path = store.resolve_path(session_name)?;
    restore_file(&path, launcher)
}

pub fn restore_file<L>(path: &Path, launcher: &L) -> Result<RestoreReport>
where
    L: Launcher + ?Sized,
{
    let command_lines = read_session(path)?;
    tracing::debug!(
        "Restoring {} entries from {}",
        command_lines.len(),
        path.display()
    );
    Ok(executor::restore(&command_lines, launcher))
}

pub fn print_summary(report: &RestoreReport) {
    println!();
    println!(
        "Restored {} of {} application(s)",
        report.launched, report.attempted
    );
    if !report.is_complete() {
        println!("Failed:");
        for failure in &report.failures {
            println!("  {} ({})", failure.command_line, failure.error);
        }
    }
}

fn print_available_sessions(store: &SessionStore) {
    match store.list() {
        Ok(names) if !names.is_empty() => {
            eprintln!("Available sessions: {}", names.join(", "));
        }
        Ok(_) => eprintln!("No sessions saved yet in {}", store.root().display()),
        Err(e) => tracing::debug!("Could not list sessions: {}", e),
    }
}
