use crate::error::{Result, WeorcanjanError};
use crate::ignore::builtin::BUILTIN_IGNORE;
use std::collections::HashSet;
use std::path::Path;

/// Identifiers excluded from save candidacy.
///
/// Entries are stored lowercased so lookups match regardless of how a
/// process name happens to be capitalised. Merging consumes the set and
/// returns a new one; nothing mutates a set that is already in use.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IgnoreSet {
    entries: HashSet<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeOutcome {
    Merged { added: usize },
    NotFound,
}

fn normalize(identifier: &str) -> String {
    identifier.trim().to_lowercase()
}

impl IgnoreSet {
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN_IGNORE.iter().copied())
    }

    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let (set, _) = Self::default().extend_entries(entries);
        set
    }

    /// Adds entries not already present and reports how many were new.
    pub fn extend_entries<I, S>(mut self, entries: I) -> (Self, usize)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut added = 0;
        for entry in entries {
            let key = normalize(entry.as_ref());
            if key.is_empty() {
                continue;
            }
            if self.entries.insert(key) {
                added += 1;
            }
        }
        (self, added)
    }

    /// Merges a user ignore file: one identifier per line, blank lines and
    /// `#` comments skipped. A missing file leaves the set untouched.
    pub fn merge_user_overrides(self, path: &Path) -> Result<(Self, MergeOutcome)> {
        if !path.exists() {
            tracing::info!("No user ignore list at {}", path.display());
            return Ok((self, MergeOutcome::NotFound));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            WeorcanjanError::Config(format!(
                "Failed to read user ignore list {}: {}",
                path.display(),
                e
            ))
        })?;

        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let (merged, added) = self.extend_entries(lines);
        tracing::debug!(
            "Merged {} new entries from {} ({} total)",
            added,
            path.display(),
            merged.len()
        );
        Ok((merged, MergeOutcome::Merged { added }))
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains(&normalize(identifier))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sorted(&self) -> Vec<&str> {
        let mut entries: Vec<&str> = self.entries.iter().map(String::as_str).collect();
        entries.sort_unstable();
        entries
    }
}
