// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test utilities for CLI integration tests.

#![allow(dead_code)]

use rusqlite::{params, Connection};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const SCHEMA: &str = "
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

/// Create a ledger at `path` holding `leaks` unfreed blocks of `size` bytes.
pub fn write_ledger(path: &Path, leaks: usize, size: i64) {
    let conn = Connection::open(path).expect("Failed to create ledger");
    conn.execute_batch(SCHEMA).expect("Failed to create schema");
    for i in 0..leaks {
        conn.execute(
            "INSERT INTO allocations(address, size, process_id, freed) VALUES (?1, ?2, 1, 0)",
            params![format!("{:#x}", 0x1000 + i * 0x10), size],
        )
        .expect("Failed to insert allocation");
    }
}

/// Temp directory with a ledger at the default path.
pub fn setup_test_env(leaks: usize, size: i64) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let db = temp.path().join("memory_leak.db");
    write_ledger(&db, leaks, size);
    (temp, db)
}
