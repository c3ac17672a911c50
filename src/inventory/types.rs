/// One running process as seen by a single scan.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessRecord {
    pub pid: u32,
    pub name: String,
    pub command_line: Vec<String>,
    pub owning_user: Option<String>,
}

impl ProcessRecord {
    pub fn new(pid: u32, name: impl Into<String>, command_line: &[&str]) -> Self {
        Self {
            pid,
            name: name.into(),
            command_line: command_line.iter().map(|s| s.to_string()).collect(),
            owning_user: None,
        }
    }

    /// First command-line token, the only part of a process that gets saved.
    pub fn executable(&self) -> Option<&str> {
        self.command_line
            .first()
            .map(String::as_str)
            .filter(|exe| !exe.is_empty())
    }

    /// File name of the executable. Both separators are honoured since saved
    /// paths may come from either platform.
    pub fn executable_name(&self) -> Option<&str> {
        self.executable()
            .and_then(|exe| exe.rsplit(|c: char| c == '/' || c == '\\').next())
            .filter(|name| !name.is_empty())
    }
}

/// Which fields a scan should fill in. Unrequested fields stay empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessFields {
    pub name: bool,
    pub command_line: bool,
    pub owning_user: bool,
}

impl ProcessFields {
    pub fn name_only() -> Self {
        Self {
            name: true,
            command_line: false,
            owning_user: false,
        }
    }

    pub fn name_and_command_line() -> Self {
        Self {
            name: true,
            command_line: true,
            owning_user: false,
        }
    }

    pub fn all() -> Self {
        Self {
            name: true,
            command_line: true,
            owning_user: true,
        }
    }
}
