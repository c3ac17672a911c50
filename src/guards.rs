use crate::error::{Result, WeorcanjanError};
use crate::inventory::{self, ProcessSource};
use sysinfo::System;

pub const SUPPORTED_PLATFORM: &str = "windows";

/// Set by the test suite so the CLI can be driven on any host.
pub fn is_test_mode() -> bool {
    std::env::var("WEORCANJAN_TEST_MODE").is_ok()
}

pub fn check_platform(os: &str) -> Result<()> {
    if os != SUPPORTED_PLATFORM {
        return Err(WeorcanjanError::UnsupportedPlatform(os.to_string()));
    }
    Ok(())
}

pub fn guard_platform() -> Result<()> {
    if is_test_mode() {
        tracing::debug!("Test mode: skipping platform guard");
        return Ok(());
    }
    check_platform(std::env::consts::OS)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCheck {
    Tested { release: u32 },
    Untested { release: u32, baseline: u32, max: u32 },
    Unknown,
}

/// Leading number of an OS version string, e.g. `10` from `"10 (19045)"`.
pub fn parse_release(version: &str) -> Option<u32> {
    let digits: String = version
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok()
}

pub fn detect_release() -> Option<u32> {
    System::os_version().as_deref().and_then(parse_release)
}

/// Accepts `baseline`, and one release past it when `allow_next` is set.
pub fn check_version(release: Option<u32>, baseline: u32, allow_next: bool) -> VersionCheck {
    let max = if allow_next { baseline + 1 } else { baseline };
    match release {
        Some(release) if (baseline..=max).contains(&release) => VersionCheck::Tested { release },
        Some(release) => VersionCheck::Untested {
            release,
            baseline,
            max,
        },
        None => VersionCheck::Unknown,
    }
}

/// Informational only: an untested release is reported, never refused.
pub fn guard_version(baseline: u32, allow_next: bool) -> VersionCheck {
    let check = check_version(detect_release(), baseline, allow_next);
    match check {
        VersionCheck::Tested { release } => {
            println!("Platform release version: {}.", release);
        }
        VersionCheck::Untested {
            release,
            baseline,
            max,
        } => {
            println!("Platform release version: {}.", release);
            println!();
            if max > baseline {
                println!(
                    "Tested only on Windows {}, should work on {}",
                    baseline, max
                );
            } else {
                println!(
                    "Tested only on Windows {}, pass --allow-win11 to accept {}",
                    baseline,
                    baseline + 1
                );
            }
            println!();
        }
        VersionCheck::Unknown => {
            println!("Could not determine platform release version.");
        }
    }
    check
}

pub fn exceeds_threshold(process_count: usize, threshold: usize) -> bool {
    process_count > threshold
}

/// Counts running processes and suggests a custom ignore list when there are
/// enough of them to make the save prompts tedious.
pub fn guard_invocation<S>(source: &mut S, threshold: usize) -> usize
where
    S: ProcessSource + ?Sized,
{
    println!();
    let process_count = inventory::count(source);
    println!("You have: {} process running...", process_count);
    if exceeds_threshold(process_count, threshold) {
        println!(
            "Over {} processes, try to exempt with your own list to reduce questions",
            threshold
        );
        println!();
    }
    process_count
}
