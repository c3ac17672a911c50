use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WeorcanjanError>;

#[derive(Error, Debug)]
pub enum WeorcanjanError {
    #[error("Session not found: {0}")]
    SessionNotFound(PathBuf),

    #[error("--name is required to use {0}")]
    MissingSessionName(String),

    #[error("Invalid session name: {0}")]
    InvalidSessionName(String),

    #[error("Invalid file name: {0}")]
    InvalidFileName(String),

    #[error("This tool is only intended for Windows (detected: {0})")]
    UnsupportedPlatform(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failure to read a single process during a scan. Never fatal.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EnumerationError {
    #[error("process {pid} is no longer running")]
    Vanished { pid: u32 },

    #[error("process {pid} could not be inspected")]
    Inaccessible { pid: u32 },
}
