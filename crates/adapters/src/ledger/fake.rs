// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake ledger for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{Ledger, LedgerError};
use mld_core::{AllocationRecord, LeakReportEntry};
use std::sync::{Arc, Mutex};

/// Recorded ledger call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerCall {
    FetchUnfreed,
    FetchRecentReports { limit: usize },
}

#[derive(Default)]
struct FakeLedgerState {
    records: Vec<AllocationRecord>,
    reports: Vec<LeakReportEntry>,
    unavailable: bool,
    calls: Vec<LedgerCall>,
}

/// In-memory ledger that can be switched offline
#[derive(Clone, Default)]
pub struct FakeLedger {
    inner: Arc<Mutex<FakeLedgerState>>,
}

impl FakeLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<AllocationRecord>) -> Self {
        let ledger = Self::new();
        ledger.set_records(records);
        ledger
    }

    /// Replace all allocation rows
    pub fn set_records(&self, records: Vec<AllocationRecord>) {
        self.state().records = records;
    }

    /// Append an allocation row
    pub fn push_record(&self, record: AllocationRecord) {
        self.state().records.push(record);
    }

    /// Append a historical report (any order; fetches sort by date)
    pub fn push_report(&self, report: LeakReportEntry) {
        self.state().reports.push(report);
    }

    /// Make every fetch fail with `StoreUnavailable` until reset
    pub fn set_unavailable(&self, unavailable: bool) {
        self.state().unavailable = unavailable;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LedgerCall> {
        self.state().calls.clone()
    }

    fn state(&self) -> std::sync::MutexGuard<'_, FakeLedgerState> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl Ledger for FakeLedger {
    fn fetch_unfreed(&self) -> Result<Vec<AllocationRecord>, LedgerError> {
        let mut state = self.state();
        state.calls.push(LedgerCall::FetchUnfreed);

        if state.unavailable {
            return Err(LedgerError::unavailable("fake.db", "fake ledger offline"));
        }

        Ok(state.records.iter().filter(|r| !r.freed).cloned().collect())
    }

    fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<LeakReportEntry>, LedgerError> {
        let mut state = self.state();
        state.calls.push(LedgerCall::FetchRecentReports { limit });

        if limit == 0 {
            return Err(LedgerError::InvalidLimit);
        }
        if state.unavailable {
            return Err(LedgerError::unavailable("fake.db", "fake ledger offline"));
        }

        let mut reports = state.reports.clone();
        reports.sort_by(|a, b| b.report_date.cmp(&a.report_date));
        reports.truncate(limit);
        Ok(reports)
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
