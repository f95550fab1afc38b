//! Shared fixtures for CLI specs.

#![allow(dead_code)]
#![allow(deprecated)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use tempfile::TempDir;

/// Ledger schema as written by the allocation instrument
pub const LEDGER_SCHEMA: &str = "
    CREATE TABLE allocations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        address TEXT NOT NULL,
        size INTEGER NOT NULL,
        process_id INTEGER NOT NULL,
        timestamp DATETIME DEFAULT CURRENT_TIMESTAMP,
        freed BOOLEAN DEFAULT 0,
        freed_timestamp DATETIME
    );
    CREATE TABLE leak_reports (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        report_date DATETIME NOT NULL,
        total_leaks INTEGER NOT NULL,
        total_leaked_bytes INTEGER NOT NULL
    );
";

/// Default ledger file name, looked up in the working directory
pub const LEDGER_FILE: &str = "memory_leak.db";

/// A temp directory the CLI runs in
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Directory with no ledger at all
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// Directory with an empty ledger at the default path
    pub fn with_ledger() -> Self {
        let project = Self::empty();
        Connection::open(project.db_path())
            .unwrap()
            .execute_batch(LEDGER_SCHEMA)
            .unwrap();
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn db_path(&self) -> PathBuf {
        self.path().join(LEDGER_FILE)
    }

    /// Record an allocation the way the instrument does
    pub fn alloc(&self, address: &str, size: i64, freed: bool) {
        Connection::open(self.db_path())
            .unwrap()
            .execute(
                "INSERT INTO allocations(address, size, process_id, timestamp, freed)
                 VALUES (?1, ?2, 1234, '2026-03-14 10:00:00', ?3)",
                params![address, size, freed],
            )
            .unwrap();
    }

    /// Record a historical leak report
    pub fn report(&self, date: &str, leaks: i64, bytes: i64) {
        Connection::open(self.db_path())
            .unwrap()
            .execute(
                "INSERT INTO leak_reports(report_date, total_leaks, total_leaked_bytes)
                 VALUES (?1, ?2, ?3)",
                params![date, leaks, bytes],
            )
            .unwrap();
    }

    /// Write a file relative to the project root
    pub fn file(&self, rel: &str, content: &str) {
        let path = self.path().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    /// Build an `mld` invocation rooted in this project
    pub fn mld(&self) -> CliBuilder {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin("mld"));
        cmd.current_dir(self.path())
            .env_remove("MLD_DB")
            .env_remove("MLD_LOG");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<std::ffi::OsStr>) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require a zero exit code
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout missing {:?}:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly has {:?}:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr missing {:?}:\n{}",
            expected,
            stderr
        );
        self
    }
}
