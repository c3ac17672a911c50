use crate::error::EnumerationError;
use crate::inventory::types::{ProcessFields, ProcessRecord};
use sysinfo::{ProcessRefreshKind, System, UpdateKind, Users};

pub type ScanItem = std::result::Result<ProcessRecord, EnumerationError>;

/// Anything that can list the processes currently running.
pub trait ProcessSource {
    fn processes(&mut self, fields: ProcessFields) -> Box<dyn Iterator<Item = ScanItem> + '_>;
}

/// Reads the host process table through sysinfo.
pub struct SystemProcessSource {
    system: System,
    users: Users,
}

impl Default for SystemProcessSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemProcessSource {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            users: Users::new(),
        }
    }
}

impl ProcessSource for SystemProcessSource {
    fn processes(&mut self, fields: ProcessFields) -> Box<dyn Iterator<Item = ScanItem> + '_> {
        let mut refresh = ProcessRefreshKind::new();
        if fields.command_line {
            refresh = refresh.with_cmd(UpdateKind::Always);
        }
        if fields.owning_user {
            refresh = refresh.with_user(UpdateKind::Always);
            self.users.refresh_list();
        }
        self.system.refresh_processes_specifics(refresh);

        let users = &self.users;
        Box::new(self.system.processes().iter().map(move |(pid, process)| {
            let pid = pid.as_u32();
            let name = process.name();

            // Neither a name nor a command line usually means access was denied.
            if name.is_empty() && process.cmd().is_empty() {
                return Err(EnumerationError::Inaccessible { pid });
            }

            let owning_user = if fields.owning_user {
                process
                    .user_id()
                    .and_then(|uid| users.get_user_by_id(uid))
                    .map(|user| user.name().to_string())
            } else {
                None
            };

            Ok(ProcessRecord {
                pid,
                name: if fields.name {
                    name.to_string()
                } else {
                    String::new()
                },
                command_line: if fields.command_line {
                    process.cmd().to_vec()
                } else {
                    Vec::new()
                },
                owning_user,
            })
        }))
    }
}

/// Replays a fixed snapshot, including per-process failures. Lets callers
/// drive the save pipeline without touching the real process table.
#[derive(Debug, Clone, Default)]
pub struct StaticProcessSource {
    items: Vec<ScanItem>,
}

impl StaticProcessSource {
    pub fn new(records: Vec<ProcessRecord>) -> Self {
        Self {
            items: records.into_iter().map(Ok).collect(),
        }
    }

    pub fn with_failure(mut self, error: EnumerationError) -> Self {
        self.items.push(Err(error));
        self
    }
}

impl ProcessSource for StaticProcessSource {
    fn processes(&mut self, fields: ProcessFields) -> Box<dyn Iterator<Item = ScanItem> + '_> {
        Box::new(self.items.iter().cloned().map(move |item| {
            item.map(|mut record| {
                if !fields.name {
                    record.name.clear();
                }
                if !fields.command_line {
                    record.command_line.clear();
                }
                if !fields.owning_user {
                    record.owning_user = None;
                }
                record
            })
        }))
    }
}
