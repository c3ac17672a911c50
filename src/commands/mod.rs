pub mod debug;
pub mod open_data_dir;
pub mod restore;
pub mod save;

pub use debug::{create_test_session, guard_win_ver, restore_test_session, test_merge_user_ignore};
pub use open_data_dir::open_data_dir;
pub use restore::{restore, restore_file, restore_session};
pub use save::{save, save_session};

use crate::cli::{Action, Args};
use crate::config::Config;
use crate::error::Result;
use crate::ignore::{IgnoreSet, MergeOutcome};
use crate::session::SessionStore;
use std::path::PathBuf;

/// Everything a handler needs, resolved once by the dispatcher.
#[derive(Debug, Clone)]
pub struct Invocation {
    pub action: Action,
    pub session_name: Option<String>,
    pub myignore: Option<String>,
    pub debug: bool,
    pub config: Config,
    pub data_dir: PathBuf,
    pub store: SessionStore,
}

impl Invocation {
    pub fn new(action: Action, args: &Args, config: Config, data_dir: PathBuf) -> Self {
        let mut store =
            SessionStore::from_data_dir(&data_dir).reserve(&config.ignore.get_user_file());
        if let Some(myignore) = &args.myignore {
            store = store.reserve(myignore);
        }
        Self {
            action,
            session_name: args.session_name.clone(),
            myignore: args.myignore.clone(),
            debug: args.debug,
            config,
            data_dir,
            store,
        }
    }
}

/// Built-in entries, then `config.toml` extras, then the user's file.
pub fn load_ignore_set(inv: &Invocation, user_file: &str) -> Result<IgnoreSet> {
    let path = inv.store.resolve_aux_file(user_file)?;

    let (ignore, extra) = IgnoreSet::builtin().extend_entries(&inv.config.ignore.extra);
    if extra > 0 {
        tracing::debug!("Added {} ignore entries from config", extra);
    }

    let (ignore, outcome) = ignore.merge_user_overrides(&path)?;
    match outcome {
        MergeOutcome::Merged { added } => {
            println!("Found user my ignore list");
            println!("Completed merge of user ignore list ({} new entries)", added);
        }
        MergeOutcome::NotFound => {
            println!();
            println!("Could not find user ignore list..");
            println!();
        }
    }

    if inv.debug {
        print_ignore_set(&ignore);
    }

    Ok(ignore)
}

pub fn print_ignore_set(ignore: &IgnoreSet) {
    println!("--> merged list ({} entries):", ignore.len());
    for entry in ignore.sorted() {
        println!("    {}", entry);
    }
    println!();
}
