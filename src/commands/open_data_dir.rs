use crate::commands::Invocation;
use crate::error::Result;
use std::path::Path;
use std::process::{Command, Stdio};

#[cfg(windows)]
const FILE_BROWSER: &str = "explorer.exe";
#[cfg(target_os = "macos")]
const FILE_BROWSER: &str = "open";
#[cfg(not(any(windows, target_os = "macos")))]
const FILE_BROWSER: &str = "xdg-open";

pub fn open_data_dir(inv: &Invocation) -> Result<i32> {
    inv.store.ensure_directory()?;
    println!("Data directory: {}", inv.data_dir.display());

    if let Err(e) = open_in_file_browser(&inv.data_dir) {
        eprintln!(
            "Failed to open {} with {}: {}",
            inv.data_dir.display(),
            FILE_BROWSER,
            e
        );
    }

    Ok(0)
}

fn open_in_file_browser(path: &Path) -> std::io::Result<()> {
    Command::new(FILE_BROWSER)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()?;
    Ok(())
}
