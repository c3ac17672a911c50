use crate::cli::Action;
use crate::error::{Result, WeorcanjanError};

/// Why `name` cannot be used as a file under the sessions directory, if
/// anything. `label` names the value in the message.
fn file_name_problem(name: &str, label: &str) -> Option<String> {
    if name.trim().is_empty() {
        return Some(format!("{} cannot be empty", label));
    }

    if name.starts_with('-') {
        return Some(format!("{} cannot start with '-'", label));
    }

    if name.starts_with('.') {
        return Some(format!("{} cannot start with '.'", label));
    }

    // Windows silently drops these, so `work.` and `work` would collide.
    if name.ends_with('.') || name.ends_with(' ') {
        return Some(format!("{} cannot end with '.' or a space", label));
    }

    if name.chars().any(char::is_control) {
        return Some(format!("{} contains control characters", label));
    }

    let disallowed_patterns = ["..", "/", "\\", ":", "*", "?", "\"", "<", ">", "|"];
    for pattern in &disallowed_patterns {
        if name.contains(pattern) {
            return Some(format!("{} cannot contain '{}'", label, pattern));
        }
    }

    None
}

/// Session names become file names under the sessions directory, so anything
/// that could escape it or confuse the shell is rejected up front.
pub fn validate_session_name(session_name: &str) -> Result<()> {
    match file_name_problem(session_name, "Session name") {
        Some(reason) => Err(WeorcanjanError::InvalidSessionName(reason)),
        None => Ok(()),
    }
}

/// Same rules as session names, for files kept beside the sessions such as
/// the user ignore list.
pub fn validate_file_name(filename: &str) -> Result<()> {
    match file_name_problem(filename, "File name") {
        Some(reason) => Err(WeorcanjanError::InvalidFileName(reason)),
        None => Ok(()),
    }
}

/// Returns the session name for actions that need one.
pub fn require_session_name(action: Action, session_name: Option<&str>) -> Result<&str> {
    match session_name {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(WeorcanjanError::MissingSessionName(action.long().to_string())),
    }
}
