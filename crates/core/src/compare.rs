// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cross-run comparison of historical leak reports

use crate::allocation::format_timestamp;
use crate::report::LeakReportEntry;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Comparison needs a latest and a previous report
pub const MIN_REPORTS: usize = 2;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("not enough reports for comparison (need at least {MIN_REPORTS}, have {available})")]
    InsufficientData { available: usize },
}

/// Signed difference between the two most recent reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComparisonResult {
    pub latest: LeakReportEntry,
    pub previous: LeakReportEntry,
    /// Widened so the difference of any two `i64` counts is exact
    pub leak_delta: i128,
    pub bytes_delta: i128,
}

/// Diff the two most recent reports.
///
/// `reports` must be ordered most recent first. Older entries are ignored.
pub fn compare(reports: &[LeakReportEntry]) -> Result<ComparisonResult, CompareError> {
    let [latest, previous, ..] = reports else {
        return Err(CompareError::InsufficientData {
            available: reports.len(),
        });
    };

    Ok(ComparisonResult {
        latest: latest.clone(),
        previous: previous.clone(),
        leak_delta: i128::from(latest.total_leaks) - i128::from(previous.total_leaks),
        bytes_delta: i128::from(latest.total_leaked_bytes)
            - i128::from(previous.total_leaked_bytes),
    })
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXECUTION COMPARISON ===")?;
        writeln!(
            f,
            "Latest Report ({}):",
            format_timestamp(&self.latest.report_date)
        )?;
        writeln!(
            f,
            "  Leaks: {}, Bytes: {}",
            self.latest.total_leaks, self.latest.total_leaked_bytes
        )?;
        writeln!(f)?;
        writeln!(
            f,
            "Previous Report ({}):",
            format_timestamp(&self.previous.report_date)
        )?;
        writeln!(
            f,
            "  Leaks: {}, Bytes: {}",
            self.previous.total_leaks, self.previous.total_leaked_bytes
        )?;
        writeln!(f)?;
        writeln!(f, "Difference:")?;
        writeln!(f, "  Leaks: {:+}", self.leak_delta)?;
        writeln!(f, "  Bytes: {:+}", self.bytes_delta)?;
        write!(f, "{}", "=".repeat(30))
    }
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
