use crate::cli::require_session_name;
use crate::commands::{load_ignore_set, Invocation};
use crate::error::Result;
use crate::ignore::IgnoreSet;
use crate::inventory::{self, ProcessFields, ProcessSource, SystemProcessSource};
use crate::select::{choose, PromptSelector, SelectionStrategy};
use crate::session::{write_session, SaveOutcome, SessionStore, WriteOutcome};

pub fn save(inv: &Invocation) -> Result<i32> {
    let session_name = require_session_name(inv.action, inv.session_name.as_deref())?;
    // Reject bad or reserved names before any output or prompting.
    inv.store.resolve_path(session_name)?;

    let user_file = match inv.myignore.as_deref() {
        Some(filename) => filename.to_string(),
        None => {
            println!("Hint: you can supply your own filename for user ignore list using --myignore");
            inv.config.ignore.get_user_file()
        }
    };
    let ignore = load_ignore_set(inv, &user_file)?;

    println!("You are using session: {}", session_name);

    let mut source = SystemProcessSource::new();
    let mut selector = PromptSelector::stdio();

    match save_session(&inv.store, session_name, &ignore, &mut source, &mut selector)? {
        SaveOutcome::Saved { path, applications } => {
            println!(
                "Saved {} application(s) to {}",
                applications.len(),
                path.display()
            );
        }
        SaveOutcome::NothingToSave => {
            println!("Nothing to do... exiting");
        }
    }

    Ok(0)
}

/// Scan, filter, ask, persist.
///
/// The session file is only written when at least one application was kept,
/// so declining everything leaves a previous save of the same name intact.
pub fn save_session<S, P>(
    store: &SessionStore,
    session_name: &str,
    ignore: &IgnoreSet,
    source: &mut S,
    selector: &mut P,
) -> Result<SaveOutcome>
where
    S: ProcessSource + ?Sized,
    P: SelectionStrategy + ?Sized,
{
    let path = store.resolve_path(session_name)?;

    let candidates = inventory::candidates(
        inventory::enumerate(source, ProcessFields::all()),
        ignore,
    );
    tracing::debug!("{} candidate applications", candidates.len());

    store.ensure_directory()?;

    let applications = choose(&candidates, selector)?;

    match write_session(&path, &applications)? {
        WriteOutcome::Written { path, .. } => Ok(SaveOutcome::Saved { path, applications }),
        WriteOutcome::Skipped => Ok(SaveOutcome::NothingToSave),
    }
}
