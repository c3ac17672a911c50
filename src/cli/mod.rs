pub mod actions;
pub mod args;
pub mod validation;

pub use actions::{aliases, Action, ActionCategory, ActionSpec, ACTIONS};
pub use args::{normalize_legacy_flags, parse_args, Args};
pub use validation::{require_session_name, validate_file_name, validate_session_name};
