// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::ledger::{Ledger, LedgerError};
use crate::render::{RenderError, RenderSink};
use mld_core::{AllocationRecord, LeakReportEntry, SeriesPoint};

/// Wrapper that adds tracing to any Ledger
#[derive(Clone)]
pub struct TracedLedger<L> {
    inner: L,
}

impl<L> TracedLedger<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Ledger> Ledger for TracedLedger<L> {
    fn fetch_unfreed(&self) -> Result<Vec<AllocationRecord>, LedgerError> {
        let span = tracing::info_span!("ledger.fetch_unfreed");
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.fetch_unfreed();
        let elapsed = start.elapsed();

        match &result {
            Ok(records) => tracing::debug!(
                count = records.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "fetched unfreed allocations"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "fetch failed"
            ),
        }

        result
    }

    fn fetch_recent_reports(&self, limit: usize) -> Result<Vec<LeakReportEntry>, LedgerError> {
        let span = tracing::info_span!("ledger.fetch_recent_reports", limit);
        let _guard = span.enter();

        let start = std::time::Instant::now();
        let result = self.inner.fetch_recent_reports(limit);
        let elapsed = start.elapsed();

        match &result {
            Ok(reports) => tracing::debug!(
                count = reports.len(),
                elapsed_ms = elapsed.as_millis() as u64,
                "fetched reports"
            ),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "fetch failed"
            ),
        }

        result
    }
}

/// Wrapper that adds tracing to any RenderSink
pub struct TracedRenderSink<S> {
    inner: S,
}

impl<S> TracedRenderSink<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: RenderSink> RenderSink for TracedRenderSink<S> {
    fn render(&mut self, series: &[SeriesPoint]) -> Result<(), RenderError> {
        let result = self.inner.render(series);
        match &result {
            Ok(()) => tracing::trace!(points = series.len(), "frame drawn"),
            Err(e) => tracing::warn!(points = series.len(), error = %e, "render failed"),
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
