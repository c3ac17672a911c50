pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod guards;
pub mod ignore;
pub mod inventory;
pub mod restore;
pub mod select;
pub mod session;

pub use config::get_data_dir;
pub use config::load_config;
pub use config::save_config;
pub use config::Config;
pub use config::GuardConfig;
pub use config::IgnoreConfig;

pub use error::{EnumerationError, Result, WeorcanjanError};

pub use ignore::{IgnoreSet, MergeOutcome};
pub use inventory::{ProcessFields, ProcessRecord, ProcessSource, StaticProcessSource};
pub use restore::{DetachedLauncher, Launcher, RestoreReport};
pub use select::{PromptSelector, ScriptedSelector, SelectionStrategy};
pub use session::{read_session, write_session, SaveOutcome, SessionStore, WriteOutcome};
