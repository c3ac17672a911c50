use crate::cli::{validate_file_name, validate_session_name};
use crate::config::{
    get_sessions_dir, with_default_extension, DEFAULT_EXTENSION, MYIGNORE_FILENAME,
    TEST_SESSION_FILENAME,
};
use crate::error::{Result, WeorcanjanError};
use crate::session::types::WriteOutcome;
use fs2::FileExt;
use std::fs::OpenOptions;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

/// Directory holding one plain-text file per saved session.
///
/// Some files in the directory are not sessions (the user ignore list, the
/// self-test session). Their names are reserved: sessions cannot resolve to
/// them and `list` never shows them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionStore {
    root: PathBuf,
    reserved: Vec<String>,
}

impl SessionStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let store = Self {
            root: root.into(),
            reserved: Vec::new(),
        };
        store.reserve(MYIGNORE_FILENAME).reserve(TEST_SESSION_FILENAME)
    }

    pub fn from_data_dir(data_dir: &Path) -> Self {
        Self::new(get_sessions_dir(data_dir))
    }

    /// Marks another file name as off limits for sessions.
    pub fn reserve(mut self, filename: &str) -> Self {
        let key = with_default_extension(filename).to_lowercase();
        if !self.reserved.contains(&key) {
            self.reserved.push(key);
        }
        self
    }

    fn is_reserved(&self, filename: &str) -> bool {
        self.reserved.contains(&filename.to_lowercase())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn resolve_path(&self, session_name: &str) -> Result<PathBuf> {
        validate_session_name(session_name)?;
        let filename = with_default_extension(session_name);
        if self.is_reserved(&filename) {
            return Err(WeorcanjanError::InvalidSessionName(format!(
                "'{}' is reserved and cannot be used as a session",
                filename
            )));
        }
        Ok(self.root.join(filename))
    }

    /// Path of a file that lives beside the sessions, such as the user
    /// ignore list. Reserved names are allowed here.
    pub fn resolve_aux_file(&self, filename: &str) -> Result<PathBuf> {
        validate_file_name(filename)?;
        Ok(self.root.join(with_default_extension(filename)))
    }

    pub fn ensure_directory(&self) -> Result<()> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            WeorcanjanError::Config(format!(
                "Failed to create session directory {}: {}",
                self.root.display(),
                e
            ))
        })
    }

    /// Names of saved sessions, sorted. Reserved files are not sessions.
    pub fn list(&self) -> Result<Vec<String>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let mut names = Vec::new();
        for entry in std::fs::read_dir(&self.root)? {
            let path = entry?.path();
            if !path.is_file() {
                continue;
            }
            let Some(filename) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            if self.is_reserved(filename) {
                continue;
            }
            let is_session = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| e.eq_ignore_ascii_case(DEFAULT_EXTENSION));
            if !is_session {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }
}

/// Overwrites `path` with one command line per line. An empty selection
/// never touches the file.
pub fn write_session<S: AsRef<str>>(path: &Path, command_lines: &[S]) -> Result<WriteOutcome> {
    if command_lines.is_empty() {
        tracing::debug!("Nothing to write to {}", path.display());
        return Ok(WriteOutcome::Skipped);
    }

    let mut content = String::new();
    for line in command_lines {
        content.push_str(line.as_ref());
        content.push('\n');
    }

    let mut file = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| {
            WeorcanjanError::Config(format!(
                "Failed to open session file {}: {}",
                path.display(),
                e
            ))
        })?;

    file.try_lock_exclusive()
        .map_err(|e| WeorcanjanError::Config(format!("Failed to acquire write lock: {}", e)))?;

    let written = file
        .write_all(content.as_bytes())
        .and_then(|_| file.sync_all())
        .map_err(|e| WeorcanjanError::Config(format!("Failed to write session file: {}", e)));

    if let Err(e) = file.unlock() {
        tracing::warn!("Failed to release write lock: {}", e);
    }
    written?;

    tracing::info!(
        "Saved {} command lines to {}",
        command_lines.len(),
        path.display()
    );

    Ok(WriteOutcome::Written {
        path: path.to_path_buf(),
        lines: command_lines.len(),
    })
}

/// Every non-empty line of a session file, in order.
pub fn read_session(path: &Path) -> Result<Vec<String>> {
    if !path.exists() {
        return Err(WeorcanjanError::SessionNotFound(path.to_path_buf()));
    }

    let mut file = OpenOptions::new().read(true).open(path).map_err(|e| {
        WeorcanjanError::Config(format!(
            "Failed to open session file {}: {}",
            path.display(),
            e
        ))
    })?;

    file.try_lock_shared()
        .map_err(|e| WeorcanjanError::Config(format!("Failed to acquire read lock: {}", e)))?;

    let mut content = String::new();
    let result = file
        .read_to_string(&mut content)
        .map_err(|e| WeorcanjanError::Config(format!("Failed to read session file: {}", e)));

    if let Err(e) = file.unlock() {
        tracing::warn!("Failed to release read lock: {}", e);
    }
    result?;

    Ok(content
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}
