// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for external I/O: the allocation ledger and the live view

pub mod ledger;
pub mod render;
pub mod traced;

pub use ledger::{Ledger, LedgerError, LedgerHandle, SqliteLedger};
pub use render::{RenderError, RenderSink, TerminalSink};
pub use traced::{TracedLedger, TracedRenderSink};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use ledger::{FakeLedger, LedgerCall};
#[cfg(any(test, feature = "test-support"))]
pub use render::FakeRenderSink;
