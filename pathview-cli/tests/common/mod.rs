//! Common test utilities for CLI integration tests.
//!
//! Every command runs with a temporary home directory and no `PATHVIEW_*`
//! variables, so the developer's own configuration never leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const PATHVIEW_VARS: [&str; 6] = [
    "PATHVIEW_CONFIG",
    "PATHVIEW_PLATFORM",
    "PATHVIEW_WORKSPACE_FOLDERS",
    "PATHVIEW_ACTIVE_DOCUMENT",
    "PATHVIEW_FALLBACK_BASE",
    "PATHVIEW_LOG_MODE",
];

/// Isolated test environment.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, also used as the home directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// The pathview binary with an isolated environment and no extra flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathview").expect("Failed to find pathview binary");
        for var in PATHVIEW_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", &self.temp_path)
            .env("USERPROFILE", &self.temp_path)
            .current_dir(&self.temp_path);
        cmd
    }

    /// The pathview binary pinned to POSIX path rules.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("posix");
        cmd
    }

    /// The pathview binary pinned to Windows path rules.
    pub fn windows_command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--platform").arg("windows");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Write the user configuration file, `~/.pathview/config.yaml`.
    pub fn write_user_config(&self, contents: &str) -> PathBuf {
        self.write_file(".pathview/config.yaml", contents)
    }

    /// Run a command and return its trimmed stdout, asserting success.
    pub fn stdout(&self, mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run pathview");
        assert!(
            output.status.success(),
            "pathview failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout)
            .expect("Invalid UTF-8 in output")
            .trim_end()
            .to_string()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
