// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Summary, comparison and export over the ledger
//!
//! Each operation is a synchronous, run-to-completion read. Failures are
//! returned to the caller; nothing here prints.

use crate::ReportError;
use chrono::NaiveDateTime;
use mld_adapters::Ledger;
use mld_core::{
    compare, compute_snapshot, Clock, ComparisonResult, Config, LeakReportEntry, LeakSnapshot,
    DEFAULT_TOP_N, MIN_REPORTS,
};
use mld_storage::{write_report, ExportedReport};
use serde::Serialize;
use std::fmt;
use std::path::Path;

const RULE_WIDTH: usize = 50;

/// Limits applied by the reporter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReporterConfig {
    pub top_n: usize,
    pub history_limit: usize,
}

impl Default for ReporterConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N,
            history_limit: 10,
        }
    }
}

impl From<&Config> for ReporterConfig {
    fn from(config: &Config) -> Self {
        Self {
            top_n: config.top_n,
            history_limit: config.history_limit,
        }
    }
}

/// Everything the summary command shows
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub generated: NaiveDateTime,
    pub snapshot: LeakSnapshot,
    pub average_size: Option<f64>,
    /// Most recent first, for display only
    pub history: Vec<LeakReportEntry>,
    #[serde(skip)]
    pub history_limit: usize,
    /// Present when at least two historical reports exist
    pub comparison: Option<ComparisonResult>,
}

/// Composes the aggregator and comparator over a ledger
pub struct Reporter<L, C> {
    ledger: L,
    clock: C,
    config: ReporterConfig,
}

impl<L: Ledger, C: Clock> Reporter<L, C> {
    pub fn new(ledger: L, clock: C, config: ReporterConfig) -> Self {
        Self {
            ledger,
            clock,
            config,
        }
    }

    /// Current snapshot of the unfreed set
    pub fn snapshot(&self) -> Result<LeakSnapshot, ReportError> {
        let records = self.ledger.fetch_unfreed()?;
        Ok(compute_snapshot(&records, self.config.top_n))
    }

    /// Snapshot, recent history, and the latest comparison when possible
    pub fn summarize(&self) -> Result<Summary, ReportError> {
        let snapshot = self.snapshot()?;

        // Fetch enough rows to compare even when fewer are displayed
        let fetch_limit = self.config.history_limit.max(MIN_REPORTS);
        let mut history = self.ledger.fetch_recent_reports(fetch_limit)?;
        let comparison = compare(&history).ok();
        history.truncate(self.config.history_limit);

        tracing::debug!(
            leaks = snapshot.total_leaks,
            bytes = snapshot.total_bytes,
            history = history.len(),
            compared = comparison.is_some(),
            "summary computed"
        );

        Ok(Summary {
            generated: self.clock.now(),
            average_size: snapshot.average_size(),
            snapshot,
            history,
            history_limit: self.config.history_limit,
            comparison,
        })
    }

    /// Diff the two most recent historical reports
    pub fn compare(&self) -> Result<ComparisonResult, ReportError> {
        let reports = self.ledger.fetch_recent_reports(MIN_REPORTS)?;
        Ok(compare(&reports)?)
    }

    /// Write every unfreed record and the totals to `path`
    pub fn export(&self, path: &Path) -> Result<ExportedReport, ReportError> {
        let records = self.ledger.fetch_unfreed()?;
        let generated = self.clock.now();
        let snapshot = compute_snapshot(&records, self.config.top_n);

        let report = ExportedReport::new(generated, &snapshot, &records);
        write_report(path, &report)?;
        Ok(report)
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(RULE_WIDTH);
        writeln!(f, "{}", rule)?;
        writeln!(f, "MEMORY LEAK DETECTOR - ANALYSIS SUMMARY")?;
        writeln!(f, "{}", rule)?;

        writeln!(f)?;
        writeln!(f, "Current Status:")?;
        writeln!(
            f,
            "  Total Leaked Allocations: {}",
            self.snapshot.total_leaks
        )?;
        writeln!(f, "  Total Leaked Memory: {} bytes", self.snapshot.total_bytes)?;
        if let Some(avg) = self.average_size {
            writeln!(f, "  Average Leak Size: {:.2} bytes", avg)?;
        }

        writeln!(f)?;
        writeln!(f, "Leak History (Last {}):", self.history_limit)?;
        if self.history.is_empty() {
            writeln!(f, "  No historical data yet")?;
        }
        for (i, report) in self.history.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, report)?;
        }

        if let Some(cmp) = &self.comparison {
            writeln!(f)?;
            writeln!(f, "Change Since Previous Report:")?;
            writeln!(
                f,
                "  Leaks: {:+}, Bytes: {:+}",
                cmp.leak_delta, cmp.bytes_delta
            )?;
        }

        if !self.snapshot.top.is_empty() {
            writeln!(f)?;
            writeln!(f, "Top Leaks (by size):")?;
            for (i, leak) in self.snapshot.top.iter().enumerate() {
                writeln!(
                    f,
                    "  {}. Address: {}, Size: {} bytes",
                    i + 1,
                    leak.address_hex(),
                    leak.size
                )?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
#[path = "reporter_tests.rs"]
mod tests;
