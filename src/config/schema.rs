use crate::error::Result;
use serde::{Deserialize, Serialize};

const MIN_MANY_PROCESS: usize = 10;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct GuardConfig {
    /// Process count above which the invocation guard suggests a custom ignore list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub many_process_threshold: Option<usize>,
    /// OS release the tool was tested against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub baseline_release: Option<u32>,
}

impl GuardConfig {
    pub fn get_many_process_threshold(&self) -> usize {
        self.many_process_threshold
            .unwrap_or_else(super::default_many_process_threshold)
    }

    pub fn get_baseline_release(&self) -> u32 {
        self.baseline_release
            .unwrap_or_else(super::default_baseline_release)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct IgnoreConfig {
    /// File name, inside the sessions directory, of the user ignore list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_file: Option<String>,
    /// Identifiers ignored in addition to the built-in list.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extra: Vec<String>,
}

impl IgnoreConfig {
    pub fn get_user_file(&self) -> String {
        self.user_file
            .clone()
            .unwrap_or_else(super::default_user_file)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub guard: GuardConfig,
    #[serde(default)]
    pub ignore: IgnoreConfig,
}

pub fn validate_config(config: &Config) -> Result<()> {
    let threshold = config.guard.get_many_process_threshold();

    if threshold < MIN_MANY_PROCESS {
        eprintln!(
            "Warning: many_process_threshold ({}) is below {}. \
             The process-count advisory will be shown on every run.",
            threshold, MIN_MANY_PROCESS
        );
    }

    Ok(())
}
