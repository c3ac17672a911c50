use std::io;
use std::process::{Command, Stdio};

/// Starts one recorded command line.
pub trait Launcher {
    fn launch(&self, command_line: &str) -> io::Result<()>;
}

/// Splits a session line into program and argument text.
///
/// Saved lines are bare executable paths, which may contain spaces, so an
/// unquoted line is the program as a whole. A line starting with a quoted
/// program (`"C:\App\x.exe" --flag`) carries arguments after the quote.
pub fn split_command_line(command_line: &str) -> (&str, &str) {
    if let Some(rest) = command_line.strip_prefix('"') {
        if let Some(end) = rest.find('"') {
            return (&rest[..end], rest[end + 1..].trim_start());
        }
    }
    (command_line, "")
}

/// Spawns each command line as an independent process and never waits on it.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetachedLauncher;

impl Launcher for DetachedLauncher {
    fn launch(&self, command_line: &str) -> io::Result<()> {
        let (program, arguments) = split_command_line(command_line);
        let mut cmd = Command::new(program);

        // Windows programs parse their own command line, so pass it through.
        #[cfg(windows)]
        if !arguments.is_empty() {
            std::os::windows::process::CommandExt::raw_arg(&mut cmd, arguments);
        }

        #[cfg(not(windows))]
        cmd.args(arguments.split_whitespace());

        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        // Own process group so the child outlives this CLI and its terminal.
        #[cfg(unix)]
        std::os::unix::process::CommandExt::process_group(&mut cmd, 0);

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            use windows_sys::Win32::System::Threading::{
                CREATE_NEW_PROCESS_GROUP, DETACHED_PROCESS,
            };
            cmd.creation_flags(DETACHED_PROCESS | CREATE_NEW_PROCESS_GROUP);
        }

        let child = cmd.spawn()?;
        tracing::debug!("Launched {} (pid {})", command_line, child.id());
        Ok(())
    }
}

#[derive(Debug)]
pub struct RestoreFailure {
    pub command_line: String,
    pub error: io::Error,
}

#[derive(Debug, Default)]
pub struct RestoreReport {
    pub attempted: usize,
    pub launched: usize,
    pub failures: Vec<RestoreFailure>,
}

impl RestoreReport {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Attempts every command line in order. A failed launch is reported and
/// recorded; it never stops the entries after it.
pub fn restore<S, L>(command_lines: &[S], launcher: &L) -> RestoreReport
where
    S: AsRef<str>,
    L: Launcher + ?Sized,
{
    let mut report = RestoreReport::default();

    for command_line in command_lines {
        let command_line = command_line.as_ref();
        report.attempted += 1;

        match launcher.launch(command_line) {
            Ok(()) => {
                println!("Restored {}", command_line);
                report.launched += 1;
            }
            Err(e) => {
                eprintln!("Failed to restore application: {}", command_line);
                eprintln!("{}", e);
                tracing::warn!("Failed to launch {}: {}", command_line, e);
                report.failures.push(RestoreFailure {
                    command_line: command_line.to_string(),
                    error: e,
                });
            }
        }
    }

    report
}
