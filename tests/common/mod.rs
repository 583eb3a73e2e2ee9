//! Shared testing utilities for the opsgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory per exercise.
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Root of the temporary tree, outliving every file the tests create.
    pub fn root(&self) -> &Path {
        self.root.path()
    }

    /// Path to the working directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking a compiled opsgen binary in the work dir.
    pub fn cli(&self, bin: &str) -> Command {
        let mut cmd = Command::cargo_bin(bin).expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write `content` to `relative` under the work directory, creating parents.
    pub fn write_file(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Create `relative` as a directory under the work directory.
    pub fn create_dir(&self, relative: &str) -> PathBuf {
        let path = self.work_dir.join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Read `relative` under the work directory.
    pub fn read_file(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    /// Whether `relative` exists under the work directory.
    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }
}
