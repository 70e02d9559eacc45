use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test harness for running CLI commands inside an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty temporary working directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("cadence").expect("Failed to find cadence binary");

        // Config is read from the working directory and CADENCE_* variables
        cmd.current_dir(self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.env_remove("CADENCE_MAX_COUNT");
        cmd.env_remove("CADENCE_MAX_END_DATE");
        cmd.env_remove("CADENCE_LOG_LEVEL");

        cmd
    }

    pub fn dir(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write a `cadence.toml` into the working directory
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.dir().join("cadence.toml"), contents).expect("Failed to write config");
    }

    /// Write an anchor event JSON file and return its path
    pub fn write_event(&self, name: &str, json: &str) -> PathBuf {
        let path = self.dir().join(name);
        std::fs::write(&path, json).expect("Failed to write event file");
        path
    }

    /// Helper to run a command and assert success
    pub fn run_success(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().success()
    }

    /// Helper to run a command and assert failure
    pub fn run_failure(&self, args: &[&str]) -> assert_cmd::assert::Assert {
        self.command().args(args).assert().failure()
    }

    /// Run a command and parse its stdout as a JSON array of occurrences
    pub fn run_json(&self, args: &[&str]) -> Vec<serde_json::Value> {
        let output = self.command().args(args).output().expect("Failed to run cadence");
        assert!(output.status.success(), "command failed: {:?}", output);
        serde_json::from_slice(&output.stdout).expect("stdout is a JSON array")
    }
}

/// Extract the `date` field of each occurrence
pub fn dates(occurrences: &[serde_json::Value]) -> Vec<String> {
    occurrences
        .iter()
        .map(|o| o["date"].as_str().expect("date is a string").to_string())
        .collect()
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the occurrence table headers
    pub fn has_occurrence_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Date")
            .and(predicate::str::contains("Day"))
            .and(predicate::str::contains("Title"))
    }

    /// Predicate to check for the truncation warning
    pub fn cap_warning() -> impl Predicate<str> {
        predicate::str::contains("Warning").and(predicate::str::contains("only the first"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
