// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to the allocation ledger

mod sqlite;

pub use sqlite::{LedgerHandle, SqliteLedger};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLedger, LedgerCall};

use mld_core::{AllocationRecord, LeakReportEntry};
use std::path::PathBuf;
use thiserror::Error;

/// Errors from ledger reads
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Store missing, corrupt, unreadable, or not shaped like a ledger
    #[error("ledger unavailable at {path}: {reason}")]
    StoreUnavailable { path: PathBuf, reason: String },
    #[error("report limit must be at least 1")]
    InvalidLimit,
}

impl LedgerError {
    pub fn unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        LedgerError::StoreUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }
}

/// Read side of the allocation ledger.
///
/// Implementations never return an empty result in place of a failure.
pub trait Ledger: Clone + Send + Sync + 'static {
    /// All allocations not yet freed, in no particular order
    fn fetch_unfreed(&self) -> Result<Vec<AllocationRecord>, LedgerError>;

    /// Up to `limit` historical reports, most recent first
    fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<LeakReportEntry>, LedgerError>;
}
