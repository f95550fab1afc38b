// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Leak analysis engine: reports over the ledger and the live monitor

mod error;
mod monitor;
mod reporter;

pub use error::{MonitorError, ReportError};
pub use monitor::{LiveMonitor, MonitorRun, MonitorState, TickOutcome};
pub use reporter::{Reporter, ReporterConfig, Summary};
