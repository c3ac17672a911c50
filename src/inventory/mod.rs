pub mod source;
pub mod types;

pub use source::{ProcessSource, StaticProcessSource, SystemProcessSource};
pub use types::{ProcessFields, ProcessRecord};

use crate::ignore::IgnoreSet;
use std::collections::BTreeSet;

/// Lazily yields every readable process. A process that disappears or cannot
/// be inspected is logged and skipped; the scan itself never aborts.
pub fn enumerate<S>(source: &mut S, fields: ProcessFields) -> impl Iterator<Item = ProcessRecord> + '_
where
    S: ProcessSource + ?Sized,
{
    source
        .processes(fields)
        .filter_map(|item| match item {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping process: {}", e);
                None
            }
        })
}

/// Number of processes exposing a non-empty name.
pub fn count<S>(source: &mut S) -> usize
where
    S: ProcessSource + ?Sized,
{
    enumerate(source, ProcessFields::name_only())
        .filter(|record| !record.name.is_empty())
        .count()
}

pub fn is_ignored(record: &ProcessRecord, ignore: &IgnoreSet) -> bool {
    ignore.contains(&record.name)
        || record
            .executable_name()
            .is_some_and(|exe_name| ignore.contains(exe_name))
}

/// Executables worth offering for a session, deduplicated and sorted.
///
/// Processes with no command line are dropped since there is nothing to
/// relaunch. Arguments are discarded; only the executable path is kept.
pub fn candidates<I>(records: I, ignore: &IgnoreSet) -> BTreeSet<String>
where
    I: IntoIterator<Item = ProcessRecord>,
{
    records
        .into_iter()
        .filter(|record| !is_ignored(record, ignore))
        .filter_map(|record| record.executable().map(str::to_string))
        .collect()
}
