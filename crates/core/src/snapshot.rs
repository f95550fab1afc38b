// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Point-in-time leak statistics over the unfreed allocation set

use crate::allocation::AllocationRecord;
use serde::Serialize;

/// Number of largest leaks kept in a snapshot unless configured otherwise
pub const DEFAULT_TOP_N: usize = 5;

/// Aggregated view of the allocations that were still unfreed at query time.
///
/// Recomputed on every query; never cached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeakSnapshot {
    pub total_leaks: usize,
    pub total_bytes: u64,
    /// Largest leaks, size descending, ties in retrieval order
    pub top: Vec<AllocationRecord>,
}

impl LeakSnapshot {
    /// Mean leak size in bytes, `None` when nothing leaked
    pub fn average_size(&self) -> Option<f64> {
        if self.total_leaks == 0 {
            return None;
        }
        Some(self.total_bytes as f64 / self.total_leaks as f64)
    }

    pub fn is_empty(&self) -> bool {
        self.total_leaks == 0
    }
}

/// Compute a snapshot from ledger records.
///
/// Records already marked freed are ignored, so the totals always cover
/// exactly the unfreed subset of `records`.
pub fn compute_snapshot(records: &[AllocationRecord], top_n: usize) -> LeakSnapshot {
    let unfreed: Vec<&AllocationRecord> = records.iter().filter(|r| !r.freed).collect();

    let total_bytes = unfreed
        .iter()
        .fold(0u64, |acc, r| acc.saturating_add(r.size));

    // sort_by is stable: equal sizes keep retrieval order
    let mut by_size = unfreed.clone();
    by_size.sort_by(|a, b| b.size.cmp(&a.size));
    let top = by_size.into_iter().take(top_n).cloned().collect();

    LeakSnapshot {
        total_leaks: unfreed.len(),
        total_bytes,
        top,
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
