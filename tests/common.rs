use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use weorcanjan::SessionStore;

/// Path to the weorcanjan binary built for this test run.
#[allow(dead_code)]
pub fn get_weorcanjan_path() -> PathBuf {
    assert_cmd::cargo::cargo_bin!("weorcanjan").to_path_buf()
}

/// Isolated data directory so tests never touch the user's real sessions.
/// #[allow(dead_code)] because not every test binary uses every helper.
#[allow(dead_code)]
pub struct TestDataDir {
    pub temp_dir: TempDir,
    pub data_dir: PathBuf,
    pub sessions_dir: PathBuf,
}

impl Default for TestDataDir {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl TestDataDir {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("weorcanjan");
        let sessions_dir = data_dir.join("saved-sessions");
        Self {
            temp_dir,
            data_dir,
            sessions_dir,
        }
    }

    pub fn store(&self) -> SessionStore {
        SessionStore::from_data_dir(&self.data_dir)
    }

    pub fn session_path(&self, file_name: &str) -> PathBuf {
        self.sessions_dir.join(file_name)
    }

    /// Writes a file into the sessions directory, creating it if needed.
    pub fn write_session_file(&self, file_name: &str, content: &str) -> PathBuf {
        fs::create_dir_all(&self.sessions_dir).expect("Failed to create sessions dir");
        let path = self.session_path(file_name);
        fs::write(&path, content).expect("Failed to write session file");
        path
    }

    /// CLI command pointed at this data directory, with the platform guard
    /// relaxed so the suite runs on any host.
    pub fn command(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(get_weorcanjan_path());
        cmd.env("WEORCANJAN_TEST_MODE", "1")
            .env("WEORCANJAN_DATA_DIR", &self.data_dir)
            .env_remove("WEORCANJAN_LOG");
        cmd
    }
}

#[allow(dead_code)]
pub fn read_lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path)
        .expect("Failed to read file")
        .lines()
        .map(str::to_string)
        .collect()
}
