use crate::error::{Result, WeorcanjanError};
use directories::BaseDirs;
use std::path::{Path, PathBuf};

pub const DATA_DIR_SEGMENT: &str = "weorcanjan";
pub const SESSION_DIR_SEGMENT: &str = "saved-sessions";
pub const DEFAULT_EXTENSION: &str = "txt";
pub const MYIGNORE_FILENAME: &str = "my_ignore.txt";
pub const TEST_SESSION_FILENAME: &str = "test_session.txt";
pub const CONFIG_FILENAME: &str = "config.toml";

/// Root of everything weorcanjan persists: `%APPDATA%\weorcanjan` on Windows,
/// the XDG data home on Linux. `WEORCANJAN_DATA_DIR` overrides it.
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(data_dir) = std::env::var("WEORCANJAN_DATA_DIR") {
        return Ok(PathBuf::from(data_dir));
    }

    let base_dirs = BaseDirs::new().ok_or_else(|| {
        WeorcanjanError::Config("Could not determine user data directory".to_string())
    })?;

    Ok(base_dirs.data_dir().join(DATA_DIR_SEGMENT))
}

pub fn get_sessions_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(SESSION_DIR_SEGMENT)
}

pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_data_dir()?.join(CONFIG_FILENAME))
}

/// Appends `.txt` unless the name already ends in it. Other dots are part
/// of the name, so `work.v2` becomes `work.v2.txt`.
pub fn with_default_extension(filename: &str) -> String {
    let has_txt = Path::new(filename)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(DEFAULT_EXTENSION));
    if has_txt {
        filename.to_string()
    } else {
        format!("{}.{}", filename, DEFAULT_EXTENSION)
    }
}
