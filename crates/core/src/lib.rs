// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mld-core: Core library for the memory leak detector (mld) CLI tool
//!
//! This crate provides:
//! - Named records for the allocation ledger and historical reports
//! - The pure aggregation and comparison logic
//! - The in-memory time series fed by the live monitor
//! - Clock abstraction and configuration

pub mod allocation;
pub mod clock;
pub mod compare;
pub mod config;
pub mod report;
pub mod series;
pub mod snapshot;

// Re-exports
pub use allocation::{format_timestamp, parse_address, parse_timestamp, AllocationRecord};
pub use clock::{Clock, FakeClock, SystemClock};
pub use compare::{compare, CompareError, ComparisonResult, MIN_REPORTS};
pub use config::{Config, ConfigError, MonitorConfig, CONFIG_FILE_NAME};
pub use report::LeakReportEntry;
pub use series::{SeriesPoint, TimeSeries};
pub use snapshot::{compute_snapshot, LeakSnapshot, DEFAULT_TOP_N};
