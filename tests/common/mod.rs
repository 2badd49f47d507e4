//! Shared testing utilities for podsmith CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated environment for CLI exercises.
#[allow(dead_code)]
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

    /// Path to the workspace directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command invoking the compiled `podsmith` binary in the default workspace.
    ///
    /// The ambient `PODSMITH_TEMPLATES` is cleared so only roots a test
    /// passes explicitly reach the catalog.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command invoking the compiled `podsmith` binary in a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("podsmith").expect("Failed to locate podsmith binary");
        cmd.current_dir(dir.as_ref()).env_remove("PODSMITH_TEMPLATES");
        cmd
    }

    /// Create a catalog root under the temp tree and return its path.
    pub fn catalog_root(&self, name: &str) -> PathBuf {
        let root = self.root.path().join(name);
        fs::create_dir_all(&root).expect("Failed to create catalog root");
        root
    }

    /// Write a template directory with the given `template.yml` content.
    pub fn write_template(&self, root: &Path, name: &str, metadata: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).expect("Failed to create template directory");
        fs::write(dir.join("template.yml"), metadata).expect("Failed to write template metadata");
    }

    /// Write a script file into the work directory and return its path.
    pub fn write_script(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write script");
        path
    }

    /// Write a values file into the work directory and return its path.
    pub fn write_values(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        fs::write(&path, content).expect("Failed to write values file");
        path
    }
}
