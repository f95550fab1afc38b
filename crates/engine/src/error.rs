// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for report commands

use mld_adapters::LedgerError;
use mld_core::CompareError;
use mld_storage::ExportError;
use thiserror::Error;

/// Errors surfaced by the reporter
#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),
    #[error(transparent)]
    InsufficientData(#[from] CompareError),
    #[error("export failed: {0}")]
    ExportFailure(#[from] ExportError),
}

impl ReportError {
    /// True when the ledger could not be reached; retrying later may help
    pub fn is_store_unavailable(&self) -> bool {
        matches!(
            self,
            ReportError::Ledger(LedgerError::StoreUnavailable { .. })
        )
    }
}

/// Errors constructing a live monitor
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MonitorError {
    #[error("monitor interval must be greater than zero")]
    ZeroInterval,
}
