// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Historical leak reports produced by earlier reporting runs

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A persisted `(report_date, total_leaks, total_leaked_bytes)` row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeakReportEntry {
    pub report_date: NaiveDateTime,
    pub total_leaks: i64,
    pub total_leaked_bytes: i64,
}

impl LeakReportEntry {
    pub fn new(report_date: NaiveDateTime, total_leaks: i64, total_leaked_bytes: i64) -> Self {
        Self {
            report_date,
            total_leaks,
            total_leaked_bytes,
        }
    }
}

impl fmt::Display for LeakReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} leaks ({} bytes)",
            crate::allocation::format_timestamp(&self.report_date),
            self.total_leaks,
            self.total_leaked_bytes
        )
    }
}
