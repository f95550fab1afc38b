// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite ledger written by the allocation instrument
//!
//! Every fetch opens its own read-only connection and closes it before
//! returning, so no handle outlives a single call.

use super::{Ledger, LedgerError};
use chrono::{DateTime, NaiveDateTime};
use mld_core::{parse_address, parse_timestamp, AllocationRecord, LeakReportEntry};
use rusqlite::types::Value;
use rusqlite::{params, Connection, OpenFlags};
use std::path::{Path, PathBuf};
use std::time::Duration;

const UNFREED_SQL: &str = "SELECT address, size, timestamp FROM allocations WHERE freed = 0";

const RECENT_REPORTS_SQL: &str = "SELECT report_date, total_leaks, total_leaked_bytes \
     FROM leak_reports ORDER BY report_date DESC LIMIT ?1";

/// The instrument may hold a write lock while we read
const BUSY_TIMEOUT: Duration = Duration::from_millis(500);

/// Ledger stored in an SQLite database file
#[derive(Debug, Clone)]
pub struct SqliteLedger {
    path: PathBuf,
}

impl SqliteLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open a read-only handle to the database.
    ///
    /// The database is never created: a missing file is `StoreUnavailable`.
    pub fn open(&self) -> Result<LedgerHandle, LedgerError> {
        if !self.path.is_file() {
            return Err(LedgerError::unavailable(
                &self.path,
                "database file not found",
            ));
        }

        let conn = Connection::open_with_flags(
            &self.path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .map_err(|e| LedgerError::unavailable(&self.path, e))?;
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| LedgerError::unavailable(&self.path, e))?;

        Ok(LedgerHandle {
            conn,
            path: self.path.clone(),
        })
    }

    /// Run `f` against a fresh handle, closing it whatever `f` returns
    fn with_handle<T>(
        &self,
        f: impl FnOnce(&LedgerHandle) -> Result<T, LedgerError>,
    ) -> Result<T, LedgerError> {
        let handle = self.open()?;
        let result = f(&handle);
        let closed = handle.close();
        let value = result?;
        closed?;
        Ok(value)
    }
}

impl Ledger for SqliteLedger {
    fn fetch_unfreed(&self) -> Result<Vec<AllocationRecord>, LedgerError> {
        self.with_handle(LedgerHandle::unfreed)
    }

    fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<LeakReportEntry>, LedgerError> {
        if limit == 0 {
            return Err(LedgerError::InvalidLimit);
        }
        self.with_handle(|handle| handle.recent_reports(limit))
    }
}

/// Scoped read-only connection; dropping it closes the connection
#[derive(Debug)]
pub struct LedgerHandle {
    conn: Connection,
    path: PathBuf,
}

impl LedgerHandle {
    /// All rows with `freed = 0`
    pub fn unfreed(&self) -> Result<Vec<AllocationRecord>, LedgerError> {
        let mut stmt = self
            .conn
            .prepare(UNFREED_SQL)
            .map_err(|e| self.unavailable(e))?;
        let rows = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, Value>(0)?,
                    row.get::<_, Value>(1)?,
                    row.get::<_, Value>(2)?,
                ))
            })
            .map_err(|e| self.unavailable(e))?;

        let mut records = Vec::new();
        for row in rows {
            let (address, size, timestamp) = row.map_err(|e| self.unavailable(e))?;
            records.push(AllocationRecord {
                address: self.column("allocations.address", address_from(&address))?,
                size: self.column("allocations.size", non_negative(&size))?,
                timestamp: self.column("allocations.timestamp", time_from(&timestamp))?,
                freed: false,
            });
        }
        Ok(records)
    }

    /// Up to `limit` reports ordered by `report_date` descending
    pub fn recent_reports(&self, limit: usize) -> Result<Vec<LeakReportEntry>, LedgerError> {
        if limit == 0 {
            return Err(LedgerError::InvalidLimit);
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);

        let mut stmt = self
            .conn
            .prepare(RECENT_REPORTS_SQL)
            .map_err(|e| self.unavailable(e))?;
        let rows = stmt
            .query_map(params![limit], |row| {
                Ok((
                    row.get::<_, Value>(0)?,
                    row.get::<_, Value>(1)?,
                    row.get::<_, Value>(2)?,
                ))
            })
            .map_err(|e| self.unavailable(e))?;

        let mut reports = Vec::new();
        for row in rows {
            let (date, leaks, bytes) = row.map_err(|e| self.unavailable(e))?;
            reports.push(LeakReportEntry {
                report_date: self.column("leak_reports.report_date", time_from(&date))?,
                total_leaks: self.column("leak_reports.total_leaks", integer(&leaks))?,
                total_leaked_bytes: self
                    .column("leak_reports.total_leaked_bytes", integer(&bytes))?,
            });
        }
        Ok(reports)
    }

    /// Close the connection, reporting any error from SQLite
    pub fn close(self) -> Result<(), LedgerError> {
        let path = self.path;
        self.conn
            .close()
            .map_err(|(_, e)| LedgerError::unavailable(path, e))
    }

    fn unavailable(&self, reason: impl ToString) -> LedgerError {
        LedgerError::unavailable(&self.path, reason)
    }

    fn column<T>(&self, name: &str, value: Option<T>) -> Result<T, LedgerError> {
        value.ok_or_else(|| self.unavailable(format!("malformed value in {}", name)))
    }
}

fn address_from(value: &Value) -> Option<u64> {
    match value {
        Value::Integer(i) => u64::try_from(*i).ok(),
        Value::Text(s) => parse_address(s),
        _ => None,
    }
}

fn non_negative(value: &Value) -> Option<u64> {
    integer(value).and_then(|i| u64::try_from(i).ok())
}

fn integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(i) => Some(*i),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Text timestamps in any accepted format, or integer Unix seconds
fn time_from(value: &Value) -> Option<NaiveDateTime> {
    match value {
        Value::Text(s) => parse_timestamp(s),
        Value::Integer(secs) => DateTime::from_timestamp(*secs, 0).map(|t| t.naive_utc()),
        _ => None,
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
