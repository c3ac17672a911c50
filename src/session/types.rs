use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    Written { path: PathBuf, lines: usize },
    /// Nothing to write; any existing file was left alone.
    Skipped,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved { path: PathBuf, applications: Vec<String> },
    NothingToSave,
}
