use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test harness running the CLI inside an isolated working directory
pub struct CliTestHarness {
    temp_dir: TempDir,
}

impl CliTestHarness {
    /// Create a new test harness with an empty temporary directory
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
        Self { temp_dir }
    }

    /// Get a Command instance configured for testing
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("countdown").expect("Failed to find countdown binary");

        // No stray configuration from the developer's environment.
        cmd.current_dir(self.temp_dir.path());
        for var in [
            "COUNTDOWN_TODAY",
            "COUNTDOWN_COLOR",
            "COUNTDOWN_NEARLY_DUE_DAYS",
            "COUNTDOWN_LABEL_STYLE",
            "COUNTDOWN_LOG",
        ] {
            cmd.env_remove(var);
        }

        cmd
    }

    /// Write a file into the working directory and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
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

    /// Helper to run a command with the given stdin and assert success
    pub fn run_with_stdin(&self, args: &[&str], stdin: &str) -> assert_cmd::assert::Assert {
        self.command()
            .args(args)
            .write_stdin(stdin.to_string())
            .assert()
            .success()
    }
}

/// Common test fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Reference date used by every fixture
    pub const TODAY: &'static str = "2025-06-20";

    /// A small task note with one date in each urgency tier
    pub fn task_note() -> &'static str {
        "\
Planning for [[2025-06-27|next week]].
- [ ] File taxes 📅 2025-06-18
- [ ] Call plumber 📅 2025-06-20
- [ ] Pack bags 📅 2025-06-22 🛫 2025-06-21
- [ ] Renew lease 📅 2025-09-01
"
    }
}

/// Utility functions for test assertions
pub mod assertions {
    use predicates::prelude::*;

    /// Predicate to check if output contains the date table headers
    pub fn has_date_table_headers() -> impl Predicate<str> {
        predicate::str::contains("Position")
            .and(predicate::str::contains("Date"))
            .and(predicate::str::contains("Urgency"))
    }

    /// Predicate to check for error messages
    pub fn has_error() -> impl Predicate<str> {
        predicate::str::contains("Error").or(predicate::str::contains("error"))
    }
}
